// [tests/mirror/libs/core/math_engine/polynomial_integrity.test.rs]
/**
 * =================================================================
 * APARATO: POLYNOMIAL CERTIFIER (V1.4 - KARATSUBA BOUNDARY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: F[x] — MUL/DIVMOD/INTERPOLATE/FROM_ROOTS
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use rand::{Rng, SeedableRng};

fn random_poly(rng: &mut impl Rng, len: usize) -> Poly<Fp> {
    let coeffs: Vec<Fp> = (0..len)
        .map(|_| {
            let mut b = [0u8; 32];
            rng.fill(&mut b);
            b[31] &= 0x7f;
            Fp::from_bytes_raw(&b)
        })
        .collect();
    Poly::from_coeffs(coeffs)
}

/// Oráculo escolar independiente del motor.
fn naive_mul(a: &Poly<Fp>, b: &Poly<Fp>) -> Poly<Fp> {
    let mut out = vec![Fp::ZERO; a.coeffs.len() + b.coeffs.len() - 1];
    for (i, ca) in a.coeffs.iter().enumerate() {
        for (j, cb) in b.coeffs.iter().enumerate() {
            let prod = ca.multiply_modular(cb);
            out[i + j] = out[i + j].add_modular(&prod).normalize();
        }
    }
    Poly::from_coeffs(out)
}

#[test]
fn certify_karatsuba_threshold_boundary() {
    println!("\n📈 [PROVING_GROUNDS]: Auditing Karatsuba boundary (31/32/33)...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x4B_41);

    // El umbral es 32: los tamaños 31, 32 y 33 cruzan ambos caminos y
    // deben producir bytes idénticos al oráculo escolar.
    for len_a in [31usize, 32, 33] {
        for len_b in [31usize, 32, 33] {
            let a = random_poly(&mut rng, len_a);
            let b = random_poly(&mut rng, len_b);
            assert_eq!(
                a.mul(&b),
                naive_mul(&a, &b),
                "L1_POLY_FAULT: Karatsuba/schoolbook divergence at boundary."
            );
        }
    }

    // Un tamaño claramente recursivo.
    let a = random_poly(&mut rng, 80);
    let b = random_poly(&mut rng, 65);
    assert_eq!(a.mul(&b), naive_mul(&a, &b), "L1_POLY_FAULT: recursive Karatsuba drift.");
    println!("   ✅ Karatsuba boundary certified.");
}

#[test]
fn certify_divmod_euclidean_property() {
    println!("\n📈 [PROVING_GROUNDS]: Auditing divmod a = q*b + r...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xD1_0D);

    for (na, nb) in [(10usize, 3usize), (25, 7), (40, 40), (5, 9), (33, 1)] {
        let a = random_poly(&mut rng, na);
        let b = random_poly(&mut rng, nb);
        let (q, r) = a.divmod(&b);

        assert!(
            r.degree() < b.degree() || (r.degree() == 0 && b.degree() == 0),
            "L1_POLY_FAULT: remainder degree >= divisor degree."
        );
        let recomposed = q.mul(&b).add(&r);
        assert_eq!(recomposed, a, "L1_POLY_FAULT: a != q*b + r.");
    }
    println!("   ✅ Euclidean property certified.");
}

#[test]
fn certify_from_roots_and_evaluate() {
    println!("\n📈 [PROVING_GROUNDS]: Auditing vanishing polynomial...");
    let roots: Vec<Fp> = (1u64..=6).map(Fp::from_u64).collect();
    let vanishing = Poly::from_roots(&roots);

    assert_eq!(vanishing.degree(), 6, "L1_POLY_FAULT: vanishing degree drift.");
    for r in &roots {
        assert!(
            !vanishing.evaluate(r).is_nonzero(),
            "L1_POLY_FAULT: vanishing polynomial does not vanish at root."
        );
    }
    // Y NO se anula fuera del soporte.
    assert!(
        vanishing.evaluate(&Fp::from_u64(99)).is_nonzero(),
        "L1_POLY_FAULT: vanishing polynomial vanishes off-support."
    );

    // Horner contra evaluación directa en un caso pequeño: 1 + 2x + 3x^2 en x=5
    let p = Poly::from_coeffs(vec![Fp::from_u64(1), Fp::from_u64(2), Fp::from_u64(3)]);
    assert_eq!(
        p.evaluate(&Fp::from_u64(5)),
        Fp::from_u64(1 + 2 * 5 + 3 * 25),
        "L1_POLY_FAULT: Horner drift."
    );
    println!("   ✅ Vanishing polynomial certified.");
}

#[test]
fn certify_lagrange_interpolation_roundtrip() {
    println!("\n📈 [PROVING_GROUNDS]: Auditing Lagrange interpolation...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x1A_6E);

    let original = random_poly(&mut rng, 12);
    let xs: Vec<Fp> = (0u64..12).map(Fp::from_u64).collect();
    let ys: Vec<Fp> = xs.iter().map(|x| original.evaluate(x)).collect();

    let reconstructed = Poly::interpolate(&xs, &ys);
    assert_eq!(reconstructed, original, "L1_POLY_FAULT: interpolation roundtrip drift.");

    // n = 1: constante.
    let single = Poly::interpolate(&[Fp::from_u64(7)], &[Fp::from_u64(42)]);
    assert_eq!(
        single,
        Poly::from_coeffs(vec![Fp::from_u64(42)]),
        "L1_POLY_FAULT: single-point interpolation drift."
    );
    println!("   ✅ Interpolation certified.");
}

#[test]
fn certify_trailing_zero_strip_and_sentinels() {
    println!("\n📈 [PROVING_GROUNDS]: Auditing normal form + size sentinel...");

    // Los ceros de cola se eliminan en la construcción.
    let padded = Poly::from_coeffs(vec![Fp::from_u64(5), Fp::ZERO, Fp::ZERO]);
    assert_eq!(padded.coeffs.len(), 1, "L1_POLY_FAULT: trailing zeros kept.");

    // La resta que cancela el término líder renormaliza.
    let a = Poly::from_coeffs(vec![Fp::from_u64(1), Fp::from_u64(3)]);
    let b = Poly::from_coeffs(vec![Fp::from_u64(2), Fp::from_u64(3)]);
    let diff = a.sub(&b);
    assert_eq!(diff.degree(), 0, "L1_POLY_FAULT: cancelled lead not stripped.");

    // Centinela de desborde: el producto excedería MAX_POLY_SIZE.
    let huge = Poly::from_coeffs({
        let mut v = vec![Fp::ZERO; MAX_POLY_SIZE];
        v[MAX_POLY_SIZE - 1] = Fp::ONE;
        v
    });
    let small = Poly::from_coeffs(vec![Fp::ONE, Fp::ONE]);
    let overflowed = huge.mul(&small);
    assert!(
        overflowed.is_empty_sentinel(),
        "L1_POLY_FAULT: size overflow did not return empty sentinel."
    );
    println!("   ✅ Normal form + sentinel certified.");
}
