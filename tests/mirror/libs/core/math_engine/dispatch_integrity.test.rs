// [tests/mirror/libs/core/math_engine/dispatch_integrity.test.rs]
/**
 * =================================================================
 * APARATO: DISPATCH CERTIFIER (V1.2 - RELEASE/ACQUIRE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: IDEMPOTENCIA DE INIT/AUTOTUNE Y PARIDAD DE SLOTS
 * =================================================================
 */
use helioselene_core_math::prelude::*;

fn small_scalar(v: u8) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[0] = v;
    s
}

#[test]
fn certify_dispatch_lifecycle_and_parity() {
    println!("\n🚦 [PROVING_GROUNDS]: Auditing dispatch lifecycle...");

    let g = HeliosPoint::generator();
    let sg = SelenePoint::generator();
    let k = small_scalar(113);

    // Pre-init: el baseline escalar responde.
    let baseline_h = (get_dispatch().helios_scalarmult)(&k, &g);
    let baseline_s = (get_dispatch().selene_scalarmult)(&k, &sg);

    // init() es idempotente; la tabla publicada produce los mismos bytes.
    init();
    init();
    let table = get_dispatch();
    assert_eq!(
        (table.helios_scalarmult)(&k, &g).to_bytes(),
        baseline_h.to_bytes(),
        "L1_DISPATCH_FAULT: init() changed Helios CT semantics."
    );
    assert_eq!(
        (table.selene_scalarmult)(&k, &sg).to_bytes(),
        baseline_s.to_bytes(),
        "L1_DISPATCH_FAULT: init() changed Selene CT semantics."
    );

    // Los seis slots concuerdan con los motores directos.
    assert_eq!(
        (table.helios_scalarmult_vartime)(&k, &g).to_bytes(),
        scalarmult_vartime(&k, &g).to_bytes(),
        "L1_DISPATCH_FAULT: Helios VT slot drift."
    );
    assert_eq!(
        (table.selene_scalarmult_vartime)(&k, &sg).to_bytes(),
        scalarmult_vartime(&k, &sg).to_bytes(),
        "L1_DISPATCH_FAULT: Selene VT slot drift."
    );

    let scalars = vec![small_scalar(3), small_scalar(5)];
    let h_points = vec![g, g.double()];
    let s_points = vec![sg, sg.double()];
    assert_eq!(
        (table.helios_msm_vartime)(&scalars, &h_points).to_bytes(),
        msm_vartime(&scalars, &h_points).to_bytes(),
        "L1_DISPATCH_FAULT: Helios MSM slot drift."
    );
    assert_eq!(
        (table.selene_msm_vartime)(&scalars, &s_points).to_bytes(),
        msm_vartime(&scalars, &s_points).to_bytes(),
        "L1_DISPATCH_FAULT: Selene MSM slot drift."
    );

    // autotune() dos veces == una vez (la segunda es no-op); la tabla
    // medida conserva la semántica.
    autotune();
    let tuned_once = (get_dispatch().helios_scalarmult)(&k, &g).to_bytes();
    autotune();
    let tuned_twice = (get_dispatch().helios_scalarmult)(&k, &g).to_bytes();
    assert_eq!(tuned_once, tuned_twice, "L1_DISPATCH_FAULT: autotune not idempotent.");
    assert_eq!(
        tuned_once,
        baseline_h.to_bytes(),
        "L1_DISPATCH_FAULT: autotune changed semantics."
    );
    println!("   ✅ Dispatch lifecycle certified.");
}
