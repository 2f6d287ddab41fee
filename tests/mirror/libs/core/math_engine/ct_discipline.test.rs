// [tests/mirror/libs/core/math_engine/ct_discipline.test.rs]
/**
 * =================================================================
 * APARATO: CONSTANT-TIME DISCIPLINE CERTIFIER (V1.2 - OP TRACE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: TRAZA DE OPERACIONES INDEPENDIENTE DEL ESCALAR
 *
 * Requiere la feature `ct-audit`: los kernels de campo incrementan un
 * contador atómico por multiplicación/cuadrado, el sustituto de una
 * traza de instrucciones para certificar la disciplina CT.
 *
 * NOTA: un único #[test] secuencial — el contador es global al proceso
 * y los tests de cargo corren en hilos paralelos.
 * =================================================================
 */
use helioselene_core_math::audit;
use helioselene_core_math::prelude::*;

fn trace_scalarmult(scalar: &[u8; 32], g: &HeliosPoint) -> u64 {
    audit::reset_field_op_count();
    let _ = scalarmult(scalar, g);
    audit::field_op_count()
}

#[test]
fn certify_ct_op_traces_are_scalar_independent() {
    println!("\n⏱️  [PROVING_GROUNDS]: Auditing CT op-trace invariance...");
    let g = HeliosPoint::generator();

    // Peso de Hamming 1, 128 (alternante) y máximo canónico.
    let mut hw1 = [0u8; 32];
    hw1[0] = 0x01;
    let mut hw128 = [0x55u8; 32];
    hw128[31] = 0x55;
    let mut hw_max = [0xffu8; 32];
    hw_max[31] = 0x3f;

    let t1 = trace_scalarmult(&hw1, &g);
    let t128 = trace_scalarmult(&hw128, &g);
    let tmax = trace_scalarmult(&hw_max, &g);

    assert_eq!(
        t1, t128,
        "L1_CT_FAULT: op trace differs between HW-1 and HW-128 scalars."
    );
    assert_eq!(
        t128, tmax,
        "L1_CT_FAULT: op trace differs between HW-128 and dense scalars."
    );
    assert_eq!(
        trace_scalarmult(&hw1, &g),
        t1,
        "L1_CT_FAULT: op trace not reproducible."
    );
    println!("   ✅ CT ladder trace invariance certified ({} field ops).", t1);

    // Misma certificación para la escalera de base fija (Selene).
    let sg = SelenePoint::generator();
    let table = scalarmult_fixed_precompute(&sg);
    let mut dense = [0xaau8; 32];
    dense[31] = 0x2a;

    audit::reset_field_op_count();
    let _ = scalarmult_fixed(&hw1, &table);
    let t_sparse = audit::field_op_count();

    audit::reset_field_op_count();
    let _ = scalarmult_fixed(&dense, &table);
    let t_dense = audit::field_op_count();

    assert_eq!(
        t_sparse, t_dense,
        "L1_CT_FAULT: fixed-base op trace is scalar-dependent."
    );
    println!("   ✅ Fixed-base trace invariance certified.");
}
