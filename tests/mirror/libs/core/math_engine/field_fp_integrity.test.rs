// [tests/mirror/libs/core/math_engine/field_fp_integrity.test.rs]
/**
 * =================================================================
 * APARATO: FP FIELD CERTIFIER (V2.0 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: CERTIFICACIÓN ISOMÓRFICA DE F_p = GF(2^255 - 19)
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use num_bigint::BigUint;
use num_traits::One;
use rand::{Rng, SeedableRng};

fn oracle_p() -> BigUint {
    (BigUint::one() << 255u32) - BigUint::from(19u32)
}

fn to_big(fe: &Fp) -> BigUint {
    BigUint::from_bytes_le(&fe.to_bytes())
}

fn from_big(v: &BigUint) -> Fp {
    let mut bytes = [0u8; 32];
    let raw = v.to_bytes_le();
    bytes[..raw.len()].copy_from_slice(&raw);
    Fp::from_bytes_raw(&bytes)
}

#[test]
fn certify_fp_roundtrip_and_canonical_rejection() {
    println!("\n⚖️  [AUDIT]: Initiating F_p codec isomorphism...");

    // encode(decode(x)) = x sobre canónicos
    for value in [0u64, 1, 2, 19, 0xFFFF_FFFF_FFFF_FFFF] {
        let fe = Fp::from_u64(value);
        let bytes = fe.to_bytes();
        let back = Fp::from_bytes_canonical(&bytes).expect("canonical roundtrip");
        assert_eq!(fe, back, "L1_FIELD_FAULT: Fp roundtrip drift.");
    }

    // p y p+1 no son canónicos; p-1 sí.
    let p = oracle_p();
    let mut p_bytes = [0u8; 32];
    p_bytes[..p.to_bytes_le().len()].copy_from_slice(&p.to_bytes_le());
    assert!(
        Fp::from_bytes_canonical(&p_bytes).is_err(),
        "L1_FIELD_FAULT: p accepted as canonical."
    );

    let mut top_bit = [0u8; 32];
    top_bit[31] = 0x80;
    assert!(
        Fp::from_bytes_canonical(&top_bit).is_err(),
        "L1_FIELD_FAULT: bit-255 encoding accepted."
    );

    let p_minus_1 = &p - BigUint::one();
    let mut pm1_bytes = [0u8; 32];
    pm1_bytes[..p_minus_1.to_bytes_le().len()].copy_from_slice(&p_minus_1.to_bytes_le());
    assert!(
        Fp::from_bytes_canonical(&pm1_bytes).is_ok(),
        "L1_FIELD_FAULT: p-1 rejected."
    );
    println!("   ✅ Codec: canonical forms certified.");
}

#[test]
fn certify_fp_arithmetic_against_bigint_oracle() {
    println!("\n⚖️  [AUDIT]: Torturing F_p arithmetic against BigUint oracle...");
    let p = oracle_p();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF0_51);

    for _ in 0..256 {
        let mut a_bytes = [0u8; 32];
        let mut b_bytes = [0u8; 32];
        rng.fill(&mut a_bytes);
        rng.fill(&mut b_bytes);
        let a_big = BigUint::from_bytes_le(&a_bytes) % &p;
        let b_big = BigUint::from_bytes_le(&b_bytes) % &p;
        let a = from_big(&a_big);
        let b = from_big(&b_big);

        assert_eq!(
            to_big(&a.add_modular(&b)),
            (&a_big + &b_big) % &p,
            "L1_FIELD_FAULT: addition drift."
        );
        assert_eq!(
            to_big(&a.subtract_modular(&b)),
            ((&p + &a_big) - &b_big) % &p,
            "L1_FIELD_FAULT: subtraction drift."
        );
        assert_eq!(
            to_big(&a.multiply_modular(&b)),
            (&a_big * &b_big) % &p,
            "L1_FIELD_FAULT: multiplication drift."
        );
        assert_eq!(
            to_big(&a.negate_modular()),
            (&p - &a_big) % &p,
            "L1_FIELD_FAULT: negation drift."
        );
        assert_eq!(
            to_big(&a.square_modular()),
            (&a_big * &a_big) % &p,
            "L1_FIELD_FAULT: square drift."
        );

        // Encadenado: mul -> add -> sub sobre limbs no canónicos
        let chained = a.multiply_modular(&b).add_modular(&a).subtract_modular(&b);
        let expected = ((&a_big * &b_big + &a_big + &p) - &b_big) % &p;
        assert_eq!(to_big(&chained), expected, "L1_FIELD_FAULT: chained-op drift.");
    }
    println!("   ✅ Arithmetic: 256-round oracle parity certified.");
}

#[test]
fn certify_fp_inversion_and_sqrt() {
    println!("\n⚖️  [AUDIT]: Certifying Fermat inversion and sqrt...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF1_51);

    // inv0: invert(0) = 0
    assert_eq!(Fp::ZERO.invert_modular(), Fp::ZERO, "L1_FIELD_FAULT: inv0 broken.");

    for _ in 0..32 {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        bytes[31] &= 0x7f;
        let x = Fp::from_bytes_raw(&bytes);
        if !x.is_nonzero() {
            continue;
        }
        let inv = x.invert_modular();
        assert_eq!(
            x.multiply_modular(&inv),
            Fp::ONE,
            "L1_FIELD_FAULT: x * x^-1 != 1."
        );

        // sqrt de un cuadrado perfecto debe verificar al cuadrar
        let square = x.square_modular();
        let root = square.sqrt_candidate();
        assert_eq!(
            root.square_modular(),
            square,
            "L1_FIELD_FAULT: sqrt(x^2)^2 != x^2."
        );
    }

    // Batch invert con lanes cero: inv0 por lane + idempotencia doble
    let input = vec![Fp::from_u64(2), Fp::ZERO, Fp::from_u64(7), Fp::from_u64(11)];
    let mut out = vec![Fp::ZERO; 4];
    Fp::batch_invert(&mut out, &input);
    assert_eq!(out[1], Fp::ZERO, "L1_FIELD_FAULT: zero lane not preserved.");
    for i in [0usize, 2, 3] {
        assert_eq!(
            input[i].multiply_modular(&out[i]),
            Fp::ONE,
            "L1_FIELD_FAULT: batch inversion failed."
        );
    }
    let mut twice = vec![Fp::ZERO; 4];
    Fp::batch_invert(&mut twice, &out);
    for i in [0usize, 2, 3] {
        assert_eq!(twice[i], input[i], "L1_FIELD_FAULT: batch_invert not involutive.");
    }
    assert_eq!(twice[1], Fp::ZERO, "L1_FIELD_FAULT: zero lane drifted.");
    println!("   ✅ Inversion strata certified.");
}

#[test]
fn certify_fp_reduce_wide() {
    println!("\n⚖️  [AUDIT]: Certifying 512-bit wide reduction...");
    let p = oracle_p();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF2_51);

    for _ in 0..64 {
        let mut wide = [0u8; 64];
        rng.fill(&mut wide[..]);
        let expected = BigUint::from_bytes_le(&wide) % &p;
        let reduced = Fp::reduce_wide(&wide);
        assert_eq!(to_big(&reduced), expected, "L1_FIELD_FAULT: wide reduction drift.");
    }

    // Caso límite: ambos bits 255 encendidos
    let mut wide = [0xffu8; 64];
    wide[31] = 0xff;
    wide[63] = 0xff;
    let expected = BigUint::from_bytes_le(&wide) % &p;
    assert_eq!(
        to_big(&Fp::reduce_wide(&wide)),
        expected,
        "L1_FIELD_FAULT: bit-255 correction drift."
    );
    println!("   ✅ Wide reduction certified.");
}
