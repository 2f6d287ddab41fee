// [tests/mirror/libs/core/math_engine/scalar_wrappers_integrity.test.rs]
/**
 * =================================================================
 * APARATO: SCALAR WRAPPER CERTIFIER (V1.3 - CYCLE DUALITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: ESCALARES HELIOS/SELENE Y PUENTE WEI25519
 * =================================================================
 */
use helioselene_core_math::prelude::*;

#[test]
fn certify_helios_scalar_algebra() {
    println!("\n🔢 [PROVING_GROUNDS]: Auditing HeliosScalar (F_q) algebra...");

    let a = HeliosScalar::from_bytes(&{
        let mut s = [0u8; 32];
        s[0] = 42;
        s
    })
    .expect("canonical");
    let b = HeliosScalar::from_bytes(&{
        let mut s = [0u8; 32];
        s[0] = 17;
        s
    })
    .expect("canonical");

    assert_eq!(a.add(&b).sub(&b), a, "L1_SCALAR_FAULT: add/sub inverse drift.");
    assert_eq!(a.mul(&b), b.mul(&a), "L1_SCALAR_FAULT: mul commutativity drift.");
    assert_eq!(a.square(), a.mul(&a), "L1_SCALAR_FAULT: square drift.");
    assert_eq!(
        HeliosScalar::muladd(&a, &b, &a),
        a.mul(&b).add(&a),
        "L1_SCALAR_FAULT: muladd drift."
    );
    assert_eq!(
        a.add(&a.neg()),
        HeliosScalar::ZERO,
        "L1_SCALAR_FAULT: a + (-a) != 0."
    );

    let inv = a.invert().expect("42 is invertible");
    assert_eq!(a.mul(&inv), HeliosScalar::ONE, "L1_SCALAR_FAULT: inverse drift.");
    assert!(HeliosScalar::ZERO.invert().is_none(), "L1_SCALAR_FAULT: invert(0) not None.");
    println!("   ✅ HeliosScalar algebra certified.");
}

#[test]
fn certify_scalar_canonicality_bounds() {
    println!("\n🔢 [PROVING_GROUNDS]: Auditing scalar canonicality (order bounds)...");

    // El orden de Helios (= q) debe ser rechazado; orden-1 aceptado.
    let order = HeliosCurve::ORDER_BYTES;
    assert!(
        HeliosScalar::from_bytes(&order).is_err(),
        "L1_SCALAR_FAULT: order accepted as Helios scalar."
    );
    let mut om1 = order;
    om1[0] -= 1;
    let max_scalar = HeliosScalar::from_bytes(&om1).expect("order-1 canonical");
    assert_eq!(
        max_scalar.add(&HeliosScalar::ONE),
        HeliosScalar::ZERO,
        "L1_SCALAR_FAULT: (order-1) + 1 != 0 mod order."
    );

    // Dualidad del ciclo: el orden de Selene es p.
    let s_order = SeleneCurve::ORDER_BYTES;
    assert!(
        SeleneScalar::from_bytes(&s_order).is_err(),
        "L1_SCALAR_FAULT: order accepted as Selene scalar."
    );
    let mut s_om1 = s_order;
    s_om1[0] -= 1;
    let s_max = SeleneScalar::from_bytes(&s_om1).expect("p-1 canonical");
    assert_eq!(
        s_max.add(&SeleneScalar::ONE),
        SeleneScalar::ZERO,
        "L1_SCALAR_FAULT: (p-1) + 1 != 0 mod p."
    );
    println!("   ✅ Canonicality bounds certified.");
}

#[test]
fn certify_reduce_wide_for_challenges() {
    println!("\n🔢 [PROVING_GROUNDS]: Auditing wide reduction via scalar wrappers...");

    // lo = 1, hi = 1: out = 1 + 2^256 mod order.
    let mut wide = [0u8; 64];
    wide[0] = 1;
    wide[32] = 1;

    // Para Selene (mod p): 1 + 38.
    let s = SeleneScalar::reduce_wide(&wide);
    let expected = SeleneScalar::from_bytes(&{
        let mut b = [0u8; 32];
        b[0] = 39;
        b
    })
    .expect("canonical");
    assert_eq!(s, expected, "L1_SCALAR_FAULT: Selene reduce_wide(1 + 2^256) != 39.");

    // Para Helios (mod q): 1 + 2*gamma, verificado contra el wrapper add.
    let h = HeliosScalar::reduce_wide(&wide);
    let mut lo_only = [0u8; 64];
    lo_only[32] = 1;
    let two_gamma = HeliosScalar::reduce_wide(&lo_only);
    assert_eq!(
        h,
        two_gamma.add(&HeliosScalar::ONE),
        "L1_SCALAR_FAULT: Helios reduce_wide decomposition drift."
    );
    println!("   ✅ Wide reduction certified.");
}

#[test]
fn certify_wei25519_bridge() {
    println!("\n🔢 [PROVING_GROUNDS]: Auditing Wei25519 ingress...");

    // Una x válida cualquiera (< p, bit 255 apagado).
    let mut x = [0u8; 32];
    x[0] = 0x2a;
    x[10] = 0x77;
    let fe = wei25519_to_fp(&x).expect("canonical x accepted");
    assert_eq!(fe.to_bytes(), x, "L1_BRIDGE_FAULT: wei25519 value drift.");

    let scalar = wei25519_to_selene_scalar(&x).expect("x as Selene scalar");
    assert_eq!(scalar.to_bytes(), x, "L1_BRIDGE_FAULT: scalar projection drift.");

    // bit 255 encendido -> rechazo.
    let mut high = x;
    high[31] |= 0x80;
    assert!(
        wei25519_to_fp(&high).is_err(),
        "L1_BRIDGE_FAULT: bit-255 x accepted."
    );

    // x >= p -> rechazo (p mismo).
    let mut p_bytes = [0xffu8; 32];
    p_bytes[0] = 0xed;
    p_bytes[31] = 0x7f;
    assert!(
        wei25519_to_fp(&p_bytes).is_err(),
        "L1_BRIDGE_FAULT: non-canonical x accepted."
    );
    println!("   ✅ Wei25519 bridge certified.");
}
