// [tests/mirror/libs/core/math_engine/simd_parity.test.rs]
#![cfg(target_arch = "x86_64")]
/**
 * =================================================================
 * APARATO: SIMD ISOMORPHISM CERTIFIER (V2.1 - LANE PARITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: PARIDAD BIT-PERFECTA LANES 4/8-WAY VS ESCALAR
 *
 * Los tests se auto-saltan (con aviso) cuando la CPU anfitriona no
 * anuncia la característica correspondiente.
 * =================================================================
 */

use helioselene_core_math::prelude::*;
use helioselene_core_math::simd::{fp10x4::Fp10x4, fp51x8::Fp51x8, fq10x4::Fq10x4, fq51x8::Fq51x8};
use rand::{Rng, SeedableRng};

fn random_fq(rng: &mut impl Rng) -> Fq {
    let mut b = [0u8; 32];
    rng.fill(&mut b);
    b[31] &= 0x7f;
    Fq::from_bytes_raw(&b)
}

fn random_fp(rng: &mut impl Rng) -> Fp {
    let mut b = [0u8; 32];
    rng.fill(&mut b);
    b[31] &= 0x7f;
    Fp::from_bytes_raw(&b)
}

#[test]
fn certify_avx2_lane_field_parity() {
    if !cpu_features().avx2 {
        println!("⚠️  [SKIP]: host CPU lacks AVX2; lane parity not exercised.");
        return;
    }
    println!("\n🧬 [PROVING_GROUNDS]: Auditing AVX2 4-way lane isomorphism...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x4A_4E);

    for _ in 0..64 {
        let a: [Fq; 4] = core::array::from_fn(|_| random_fq(&mut rng));
        let b: [Fq; 4] = core::array::from_fn(|_| random_fq(&mut rng));

        // SAFETY: AVX2 verificado arriba.
        unsafe {
            let va = Fq10x4::pack(&a[0], &a[1], &a[2], &a[3]);
            let vb = Fq10x4::pack(&b[0], &b[1], &b[2], &b[3]);

            let prod = va.mul(&vb).extract();
            let sum = va.add(&vb).extract();
            let diff = va.sub(&vb).extract();
            let sq2 = va.sq2().extract();
            for lane in 0..4 {
                assert_eq!(
                    prod[lane].to_bytes(),
                    a[lane].multiply_modular(&b[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fq10x4 mul lane drift."
                );
                assert_eq!(
                    sum[lane].to_bytes(),
                    a[lane].add_modular(&b[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fq10x4 add lane drift."
                );
                assert_eq!(
                    diff[lane].to_bytes(),
                    a[lane].subtract_modular(&b[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fq10x4 sub lane drift."
                );
                assert_eq!(
                    sq2[lane].to_bytes(),
                    a[lane].square_double_modular().to_bytes(),
                    "L1_SIMD_FAULT: fq10x4 sq2 lane drift."
                );
            }

            // Encadenado: (a+b) como operando de mul (limbs de 27 bits).
            let chained = va.add(&vb).mul(&vb).extract();
            for lane in 0..4 {
                let expected = a[lane]
                    .add_modular(&b[lane])
                    .multiply_modular(&b[lane]);
                assert_eq!(
                    chained[lane].to_bytes(),
                    expected.to_bytes(),
                    "L1_SIMD_FAULT: fq10x4 chained-op drift."
                );
            }

            let ap: [Fp; 4] = core::array::from_fn(|_| random_fp(&mut rng));
            let bp: [Fp; 4] = core::array::from_fn(|_| random_fp(&mut rng));
            let vap = Fp10x4::pack(&ap[0], &ap[1], &ap[2], &ap[3]);
            let vbp = Fp10x4::pack(&bp[0], &bp[1], &bp[2], &bp[3]);
            let prod_p = vap.mul(&vbp).extract();
            let diff_p = vap.sub(&vbp).extract();
            for lane in 0..4 {
                assert_eq!(
                    prod_p[lane].to_bytes(),
                    ap[lane].multiply_modular(&bp[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fp10x4 mul lane drift."
                );
                assert_eq!(
                    diff_p[lane].to_bytes(),
                    ap[lane].subtract_modular(&bp[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fp10x4 sub lane drift."
                );
            }
        }
    }
    println!("   ✅ AVX2 lane isomorphism certified.");
}

#[test]
fn certify_ifma_lane_field_parity() {
    if !cpu_features().avx512_ifma {
        println!("⚠️  [SKIP]: host CPU lacks AVX-512 IFMA; lane parity not exercised.");
        return;
    }
    println!("\n🧬 [PROVING_GROUNDS]: Auditing IFMA 8-way lane isomorphism...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x51_F8);

    for _ in 0..64 {
        let a: [Fq; 8] = core::array::from_fn(|_| random_fq(&mut rng));
        let b: [Fq; 8] = core::array::from_fn(|_| random_fq(&mut rng));

        // SAFETY: IFMA verificado arriba.
        unsafe {
            let va = Fq51x8::pack(&a);
            let vb = Fq51x8::pack(&b);
            let prod = va.mul(&vb).extract();
            let diff = va.sub(&vb).extract();
            let chained = va.add(&vb).mul(&vb).extract();
            for lane in 0..8 {
                assert_eq!(
                    prod[lane].to_bytes(),
                    a[lane].multiply_modular(&b[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fq51x8 mul lane drift."
                );
                assert_eq!(
                    diff[lane].to_bytes(),
                    a[lane].subtract_modular(&b[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fq51x8 sub lane drift."
                );
                let expected =
                    a[lane].add_modular(&b[lane]).multiply_modular(&b[lane]);
                assert_eq!(
                    chained[lane].to_bytes(),
                    expected.to_bytes(),
                    "L1_SIMD_FAULT: fq51x8 52-bit-input drift."
                );
            }

            let ap: [Fp; 8] = core::array::from_fn(|_| random_fp(&mut rng));
            let bp: [Fp; 8] = core::array::from_fn(|_| random_fp(&mut rng));
            let vap = Fp51x8::pack(&ap);
            let vbp = Fp51x8::pack(&bp);
            let prod_p = vap.mul(&vbp).extract();
            for lane in 0..8 {
                assert_eq!(
                    prod_p[lane].to_bytes(),
                    ap[lane].multiply_modular(&bp[lane]).to_bytes(),
                    "L1_SIMD_FAULT: fp51x8 mul lane drift."
                );
            }
        }
    }
    println!("   ✅ IFMA lane isomorphism certified.");
}

#[test]
fn certify_vector_backend_parity() {
    println!("\n🧬 [PROVING_GROUNDS]: Auditing vector backend parity...");
    use helioselene_core_math::simd::backends as be;

    let features = cpu_features();
    let g = HeliosPoint::generator();
    let sg = SelenePoint::generator();
    let mut k = [0u8; 32];
    for (i, byte) in k.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(37) ^ 0x11;
    }
    k[31] &= 0x3f;

    let scalars = vec![k, {
        let mut s = k;
        s[0] ^= 0xff;
        s
    }];
    let h_points = vec![g, g.double()];
    let s_points = vec![sg, sg.double()];

    if features.avx2 {
        assert_eq!(
            be::helios_scalarmult_avx2(&k, &g).to_bytes(),
            scalarmult(&k, &g).to_bytes(),
            "L1_SIMD_FAULT: helios avx2 CT backend drift."
        );
        assert_eq!(
            be::selene_scalarmult_avx2(&k, &sg).to_bytes(),
            scalarmult(&k, &sg).to_bytes(),
            "L1_SIMD_FAULT: selene avx2 CT backend drift."
        );
        assert_eq!(
            be::helios_scalarmult_vartime_avx2(&k, &g).to_bytes(),
            scalarmult_vartime(&k, &g).to_bytes(),
            "L1_SIMD_FAULT: helios avx2 VT backend drift."
        );
        assert_eq!(
            be::helios_msm_vartime_avx2(&scalars, &h_points).to_bytes(),
            msm_vartime(&scalars, &h_points).to_bytes(),
            "L1_SIMD_FAULT: helios avx2 MSM backend drift."
        );
        assert_eq!(
            be::selene_msm_vartime_avx2(&scalars, &s_points).to_bytes(),
            msm_vartime(&scalars, &s_points).to_bytes(),
            "L1_SIMD_FAULT: selene avx2 MSM backend drift."
        );
    } else {
        println!("⚠️  [SKIP]: AVX2 backends not exercised on this host.");
    }

    if features.avx512_ifma {
        assert_eq!(
            be::helios_scalarmult_ifma(&k, &g).to_bytes(),
            scalarmult(&k, &g).to_bytes(),
            "L1_SIMD_FAULT: helios ifma CT backend drift."
        );
        assert_eq!(
            be::selene_scalarmult_ifma(&k, &sg).to_bytes(),
            scalarmult(&k, &sg).to_bytes(),
            "L1_SIMD_FAULT: selene ifma CT backend drift."
        );
        assert_eq!(
            be::selene_msm_vartime_ifma(&scalars, &s_points).to_bytes(),
            msm_vartime(&scalars, &s_points).to_bytes(),
            "L1_SIMD_FAULT: selene ifma MSM backend drift."
        );
    } else {
        println!("⚠️  [SKIP]: IFMA backends not exercised on this host.");
    }
    println!("   ✅ Vector backend parity certified.");
}
