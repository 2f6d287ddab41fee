// [tests/mirror/libs/core/math_engine/field_fq_integrity.test.rs]
/**
 * =================================================================
 * APARATO: FQ FIELD CERTIFIER (V2.1 - GAMMA STRATA)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: CERTIFICACIÓN DE F_q = GF(2^255 - gamma) Y DIVSTEPS
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use num_bigint::BigUint;
use num_traits::One;
use rand::{Rng, SeedableRng};

/// gamma = 85737960593035654572250192257530476641 (decimal exacto).
fn oracle_gamma() -> BigUint {
    BigUint::parse_bytes(b"85737960593035654572250192257530476641", 10)
        .expect("literal gamma")
}

fn oracle_q() -> BigUint {
    (BigUint::one() << 255u32) - oracle_gamma()
}

fn to_big(fe: &Fq) -> BigUint {
    BigUint::from_bytes_le(&fe.to_bytes())
}

fn from_big(v: &BigUint) -> Fq {
    let mut bytes = [0u8; 32];
    let raw = v.to_bytes_le();
    bytes[..raw.len()].copy_from_slice(&raw);
    Fq::from_bytes_raw(&bytes)
}

#[test]
fn certify_fq_roundtrip_and_canonical_rejection() {
    println!("\n⚖️  [AUDIT]: Initiating F_q codec isomorphism...");
    let q = oracle_q();

    for value in [0u64, 1, 2, 0xFFFF_FFFF_FFFF_FFFF] {
        let fe = Fq::from_u64(value);
        let back = Fq::from_bytes_canonical(&fe.to_bytes()).expect("canonical roundtrip");
        assert_eq!(fe, back, "L1_FIELD_FAULT: Fq roundtrip drift.");
    }

    // q es rechazado; q-1 aceptado. El hueco entre q y 2^255 es gamma
    // (~2^127), mucho mayor que el de F_p: la canonicidad importa más aquí.
    let mut q_bytes = [0u8; 32];
    q_bytes[..q.to_bytes_le().len()].copy_from_slice(&q.to_bytes_le());
    assert!(
        Fq::from_bytes_canonical(&q_bytes).is_err(),
        "L1_FIELD_FAULT: q accepted as canonical."
    );

    let q_minus_1 = &q - BigUint::one();
    let mut qm1_bytes = [0u8; 32];
    qm1_bytes[..q_minus_1.to_bytes_le().len()].copy_from_slice(&q_minus_1.to_bytes_le());
    assert!(
        Fq::from_bytes_canonical(&qm1_bytes).is_ok(),
        "L1_FIELD_FAULT: q-1 rejected."
    );

    // Un valor en [q, 2^255): no canónico aunque el bit 255 esté apagado.
    let mid = &q + BigUint::from(12345u32);
    let mut mid_bytes = [0u8; 32];
    mid_bytes[..mid.to_bytes_le().len()].copy_from_slice(&mid.to_bytes_le());
    assert!(
        Fq::from_bytes_canonical(&mid_bytes).is_err(),
        "L1_FIELD_FAULT: value in [q, 2^255) accepted."
    );
    println!("   ✅ Codec: canonical forms certified.");
}

#[test]
fn certify_fq_arithmetic_against_bigint_oracle() {
    println!("\n⚖️  [AUDIT]: Torturing F_q gamma convolution against oracle...");
    let q = oracle_q();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF0_52);

    for _ in 0..256 {
        let mut a_bytes = [0u8; 32];
        let mut b_bytes = [0u8; 32];
        rng.fill(&mut a_bytes);
        rng.fill(&mut b_bytes);
        let a_big = BigUint::from_bytes_le(&a_bytes) % &q;
        let b_big = BigUint::from_bytes_le(&b_bytes) % &q;
        let a = from_big(&a_big);
        let b = from_big(&b_big);

        assert_eq!(
            to_big(&a.add_modular(&b)),
            (&a_big + &b_big) % &q,
            "L1_FIELD_FAULT: addition drift."
        );
        assert_eq!(
            to_big(&a.subtract_modular(&b)),
            ((&q + &a_big) - &b_big) % &q,
            "L1_FIELD_FAULT: 8q-bias subtraction drift."
        );
        assert_eq!(
            to_big(&a.multiply_modular(&b)),
            (&a_big * &b_big) % &q,
            "L1_FIELD_FAULT: double-Crandall multiplication drift."
        );
        assert_eq!(
            to_big(&a.negate_modular()),
            (&q - &a_big) % &q,
            "L1_FIELD_FAULT: negation drift."
        );

        // El caso que fuerza la segunda pasada gamma: operandos máximos.
        let chained = a
            .multiply_modular(&b)
            .add_modular(&a)
            .multiply_modular(&b)
            .subtract_modular(&a);
        let expected = (((&a_big * &b_big + &a_big) % &q) * &b_big + &q - &a_big) % &q;
        assert_eq!(to_big(&chained), expected, "L1_FIELD_FAULT: chained gamma drift.");
    }

    // Extremos: q-1 al cuadrado, 1*1, 0*x
    let qm1 = from_big(&(&q - BigUint::one()));
    assert_eq!(
        to_big(&qm1.square_modular()),
        BigUint::one(),
        "L1_FIELD_FAULT: (q-1)^2 != 1."
    );
    println!("   ✅ Arithmetic: gamma convolution certified.");
}

#[test]
fn certify_fq_divsteps_inversion() {
    println!("\n⚖️  [AUDIT]: Certifying Bernstein-Yang safegcd against Fermat oracle...");
    let q = oracle_q();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF1_52);

    assert_eq!(Fq::ZERO.invert_modular(), Fq::ZERO, "L1_FIELD_FAULT: inv0 broken.");
    assert_eq!(
        Fq::ONE.invert_modular(),
        Fq::ONE,
        "L1_FIELD_FAULT: invert(1) != 1."
    );

    for _ in 0..48 {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        bytes[31] &= 0x7f;
        let x = Fq::from_bytes_raw(&bytes);
        if !x.is_nonzero() {
            continue;
        }
        let inv = x.invert_modular();
        assert_eq!(
            x.multiply_modular(&inv),
            Fq::ONE,
            "L1_FIELD_FAULT: divsteps inverse failed."
        );

        // Paridad contra el oráculo de Fermat en BigUint
        let x_big = to_big(&x);
        let expected = x_big.modpow(&(&q - BigUint::from(2u32)), &q);
        assert_eq!(to_big(&inv), expected, "L1_FIELD_FAULT: divsteps/Fermat divergence.");
    }

    // Bordes del dominio: 2, q-1, q-2
    for val in [
        BigUint::from(2u32),
        &q - BigUint::one(),
        &q - BigUint::from(2u32),
    ] {
        let x = from_big(&val);
        let expected = val.modpow(&(&q - BigUint::from(2u32)), &q);
        assert_eq!(
            to_big(&x.invert_modular()),
            expected,
            "L1_FIELD_FAULT: divsteps edge-case divergence."
        );
    }
    println!("   ✅ Safegcd: 744 divsteps certified.");
}

#[test]
fn certify_fq_sqrt_and_reduce_wide() {
    println!("\n⚖️  [AUDIT]: Certifying sqrt (q = 3 mod 4) and wide reduction...");
    let q = oracle_q();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xF2_52);

    for _ in 0..32 {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        bytes[31] &= 0x7f;
        let x = Fq::from_bytes_raw(&bytes);
        let square = x.square_modular();
        let root = square.sqrt_candidate();
        assert_eq!(
            root.square_modular(),
            square,
            "L1_FIELD_FAULT: sqrt(x^2)^2 != x^2."
        );
    }

    for _ in 0..64 {
        let mut wide = [0u8; 64];
        rng.fill(&mut wide[..]);
        let expected = BigUint::from_bytes_le(&wide) % &q;
        assert_eq!(
            to_big(&Fq::reduce_wide(&wide)),
            expected,
            "L1_FIELD_FAULT: wide reduction drift (2^256 = 2gamma)."
        );
    }

    // Ambas correcciones de bit 255 activas a la vez.
    let mut wide = [0xffu8; 64];
    wide[31] = 0xff;
    wide[63] = 0xff;
    let expected = BigUint::from_bytes_le(&wide) % &q;
    assert_eq!(
        to_big(&Fq::reduce_wide(&wide)),
        expected,
        "L1_FIELD_FAULT: gamma / 2gamma^2 corrections drift."
    );
    println!("   ✅ Sqrt + wide reduction certified.");
}
