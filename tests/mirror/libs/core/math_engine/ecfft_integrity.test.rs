// [tests/mirror/libs/core/math_engine/ecfft_integrity.test.rs]
/**
 * =================================================================
 * APARATO: ECFFT CERTIFIER (V1.3 - ISOGENY COSET)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: ENTER/EXIT/EXTEND/REDUCE/MULTIPLY SOBRE AMBOS CAMPOS
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use rand::{Rng, SeedableRng};

fn random_fp_vec(rng: &mut impl Rng, n: usize) -> Vec<Fp> {
    (0..n)
        .map(|_| {
            let mut b = [0u8; 32];
            rng.fill(&mut b);
            b[31] &= 0x7f;
            Fp::from_bytes_raw(&b)
        })
        .collect()
}

#[test]
fn certify_enter_exit_roundtrip() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing ECFFT ENTER/EXIT roundtrip...");
    let ctx = ecfft_fp_context();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xEC_FF);

    for n in [2usize, 4, 16, 64, 256] {
        // EXIT(ENTER(c)) = c
        let coeffs = random_fp_vec(&mut rng, n);
        let mut data = coeffs.clone();
        ctx.enter(&mut data, n);
        ctx.exit(&mut data, n);
        for i in 0..n {
            assert_eq!(
                data[i].to_bytes(),
                coeffs[i].to_bytes(),
                "L1_ECFFT_FAULT: EXIT(ENTER) roundtrip drift at n={}.",
                n
            );
        }

        // ENTER(EXIT(e)) = e
        let evals = random_fp_vec(&mut rng, n);
        let mut data = evals.clone();
        ctx.exit(&mut data, n);
        ctx.enter(&mut data, n);
        for i in 0..n {
            assert_eq!(
                data[i].to_bytes(),
                evals[i].to_bytes(),
                "L1_ECFFT_FAULT: ENTER(EXIT) roundtrip drift at n={}.",
                n
            );
        }
    }
    println!("   ✅ Roundtrips certified (n = 2..256).");
}

#[test]
fn certify_known_product_scenario() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing [1,2,3] x [4,5] = [4,13,22,15]...");
    let ctx = ecfft_fp_context();

    let a = Poly::from_coeffs(vec![Fp::from_u64(1), Fp::from_u64(2), Fp::from_u64(3)]);
    let b = Poly::from_coeffs(vec![Fp::from_u64(4), Fp::from_u64(5)]);
    let product = ctx.poly_mul(&a, &b);

    let expected = [4u64, 13, 22, 15];
    assert_eq!(product.coeffs.len(), 4, "L1_ECFFT_FAULT: product length drift.");
    for (i, &e) in expected.iter().enumerate() {
        assert_eq!(
            product.coeffs[i],
            Fp::from_u64(e),
            "L1_ECFFT_FAULT: known product coefficient drift."
        );
    }
    println!("   ✅ Known product certified.");
}

#[test]
fn certify_ecfft_mul_matches_karatsuba() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing ECFFT mul vs Karatsuba...");
    let ctx = ecfft_fp_context();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xEC_F1);

    for (na, nb) in [(3usize, 2usize), (17, 13), (40, 33), (100, 100), (128, 120)] {
        let a = Poly::from_coeffs(random_fp_vec(&mut rng, na));
        let b = Poly::from_coeffs(random_fp_vec(&mut rng, nb));
        let via_ecfft = ctx.poly_mul(&a, &b);
        let via_karatsuba = a.mul(&b);
        assert_eq!(
            via_ecfft, via_karatsuba,
            "L1_ECFFT_FAULT: ECFFT/Karatsuba divergence."
        );
    }
    println!("   ✅ ECFFT/Karatsuba parity certified.");
}

#[test]
fn certify_extend_and_reduce() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing EXTEND/REDUCE...");
    let ctx = ecfft_fp_context();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xEC_F2);

    // EXTEND: evaluaciones de un polinomio de grado < 8 en 8 puntos ->
    // 32 puntos; verificadas contra ENTER directo del mismo polinomio.
    let coeffs = random_fp_vec(&mut rng, 8);
    let mut evals = vec![Fp::ZERO; 32];
    evals[..8].copy_from_slice(&coeffs);
    ctx.enter(&mut evals, 8);

    ctx.extend(&mut evals, 8, 32);

    let mut direct = vec![Fp::ZERO; 32];
    direct[..8].copy_from_slice(&coeffs);
    ctx.enter(&mut direct, 32);
    for i in 0..32 {
        assert_eq!(
            evals[i].to_bytes(),
            direct[i].to_bytes(),
            "L1_ECFFT_FAULT: EXTEND drift."
        );
    }

    // REDUCE: el camino inverso para un polinomio de grado < 8.
    ctx.reduce(&mut evals, 32, 8);
    let mut small = vec![Fp::ZERO; 8];
    small.copy_from_slice(&coeffs);
    ctx.enter(&mut small, 8);
    for i in 0..8 {
        assert_eq!(
            evals[i].to_bytes(),
            small[i].to_bytes(),
            "L1_ECFFT_FAULT: REDUCE drift."
        );
    }
    println!("   ✅ EXTEND/REDUCE certified.");
}

#[test]
fn certify_domain_overflow_sentinel() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing n > N sentinel...");
    let ctx = ecfft_fp_context();

    // 200 + 100 - 1 = 299 -> n = 512 > 256: centinela de longitud cero.
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xEC_F3);
    let a = Poly::from_coeffs(random_fp_vec(&mut rng, 200));
    let b = Poly::from_coeffs(random_fp_vec(&mut rng, 100));
    let overflowed = ctx.poly_mul(&a, &b);
    assert!(
        overflowed.is_empty_sentinel(),
        "L1_ECFFT_FAULT: domain overflow did not return length-0 sentinel."
    );
    println!("   ✅ Sentinel certified.");
}

#[test]
fn certify_fq_context_parity() {
    println!("\n🌀 [PROVING_GROUNDS]: Auditing F_q ECFFT context...");
    let ctx = ecfft_fq_context();

    let a = Poly::from_coeffs(vec![Fq::from_u64(1), Fq::from_u64(2), Fq::from_u64(3)]);
    let b = Poly::from_coeffs(vec![Fq::from_u64(4), Fq::from_u64(5)]);
    let product = ctx.poly_mul(&a, &b);
    let expected = a.mul(&b);
    assert_eq!(product, expected, "L1_ECFFT_FAULT: F_q ECFFT product drift.");

    // Roundtrip en el dominio F_q.
    let coeffs: Vec<Fq> = (1u64..=16).map(Fq::from_u64).collect();
    let mut data = coeffs.clone();
    ctx.enter(&mut data, 16);
    ctx.exit(&mut data, 16);
    for i in 0..16 {
        assert_eq!(
            data[i].to_bytes(),
            coeffs[i].to_bytes(),
            "L1_ECFFT_FAULT: F_q roundtrip drift."
        );
    }
    println!("   ✅ F_q context certified.");
}
