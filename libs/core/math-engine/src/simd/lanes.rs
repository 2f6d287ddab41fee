// [libs/core/math-engine/src/simd/lanes.rs]
/*!
 * =================================================================
 * APARATO: LANE-PARALLEL CURVE HELPERS (V2.2 - BATCH NORMALIZE)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: NORMALIZACIÓN AFÍN POR LOTES SOBRE LANES 4/8-WAY
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EMBARRASSING PARALLELISM: la cadena de productos del truco de
 *    Montgomery es secuencial, pero las 2n multiplicaciones finales
 *    (x * zinv^2, y * zinv^3) son independientes punto a punto y se
 *    despachan a los lanes.
 * 2. GROUP DISCIPLINE: grupos de 4 (AVX2) u 8 (IFMA) puntos; el resto
 *    de la cola se procesa por el camino escalar.
 * 3. CALLERS: las tablas de ventana de los backends vectoriales de
 *    scalarmult/MSM y el pre-cómputo de múltiplos impares del wNAF.
 *
 * # Safety:
 * Cada función exige la característica de CPU de su motor de lanes;
 * los backends del despacho lo garantizan antes de llamar.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::fq::Fq;
use crate::helios::HeliosCurve;
use crate::selene::SeleneCurve;
use crate::simd::fp10x4::Fp10x4;
use crate::simd::fp51x8::Fp51x8;
use crate::simd::fq10x4::Fq10x4;
use crate::simd::fq51x8::Fq51x8;

/// Cadena secuencial del truco de Montgomery: inversos de Z por punto.
fn z_inverses<C: CycleCurve>(points: &[JacobianPoint<C>]) -> Vec<C::Field> {
    let n = points.len();
    let mut products = vec![C::Field::ZERO; n];
    products[0] = points[0].z;
    for i in 1..n {
        products[i] = products[i - 1].multiply_modular(&points[i].z);
    }
    let mut inv = products[n - 1].invert_modular();
    let mut z_invs = vec![C::Field::ZERO; n];
    for i in (1..n).rev() {
        z_invs[i] = inv.multiply_modular(&products[i - 1]);
        inv = inv.multiply_modular(&points[i].z);
    }
    z_invs[0] = inv;
    z_invs
}

macro_rules! lane_batch_affine {
    ($name:ident, $curve:ty, $field:ty, $lanes:expr, $vector:ty, $feature:literal, $pack:expr) => {
        /// Conversión por lote a afín con las multiplicaciones finales
        /// despachadas al motor de lanes.
        #[target_feature(enable = $feature)]
        pub unsafe fn $name(
            points: &[JacobianPoint<$curve>],
        ) -> Vec<AffinePoint<$curve>> {
            let n = points.len();
            if n == 0 {
                return Vec::new();
            }
            let z_invs = z_inverses::<$curve>(points);

            let mut out = Vec::with_capacity(n);
            let mut i = 0;
            while i + $lanes <= n {
                // zinv^2 y zinv^3 por lanes
                let mut zi = [<$field>::ZERO; $lanes];
                let mut xs = [<$field>::ZERO; $lanes];
                let mut ys = [<$field>::ZERO; $lanes];
                for k in 0..$lanes {
                    zi[k] = z_invs[i + k];
                    xs[k] = points[i + k].x;
                    ys[k] = points[i + k].y;
                }
                let vz: $vector = $pack(&zi);
                let vz2 = vz.sq();
                let vz3 = vz2.mul(&vz);
                let vx = $pack(&xs).mul(&vz2);
                let vy = $pack(&ys).mul(&vz3);
                let ex = vx.extract();
                let ey = vy.extract();
                for k in 0..$lanes {
                    out.push(AffinePoint::<$curve>::new(ex[k], ey[k]));
                }
                i += $lanes;
            }
            // Cola escalar
            while i < n {
                let z2 = z_invs[i].square_modular();
                let z3 = z2.multiply_modular(&z_invs[i]);
                out.push(AffinePoint::<$curve>::new(
                    points[i].x.multiply_modular(&z2),
                    points[i].y.multiply_modular(&z3),
                ));
                i += 1;
            }
            out
        }
    };
}

#[inline(always)]
unsafe fn pack_fq4(e: &[Fq; 4]) -> Fq10x4 {
    Fq10x4::pack(&e[0], &e[1], &e[2], &e[3])
}

#[inline(always)]
unsafe fn pack_fp4(e: &[Fp; 4]) -> Fp10x4 {
    Fp10x4::pack(&e[0], &e[1], &e[2], &e[3])
}

#[inline(always)]
unsafe fn pack_fq8(e: &[Fq; 8]) -> Fq51x8 {
    Fq51x8::pack(e)
}

#[inline(always)]
unsafe fn pack_fp8(e: &[Fp; 8]) -> Fp51x8 {
    Fp51x8::pack(e)
}

lane_batch_affine!(selene_batch_affine_avx2, SeleneCurve, Fq, 4, Fq10x4, "avx2", pack_fq4);
lane_batch_affine!(helios_batch_affine_avx2, HeliosCurve, Fp, 4, Fp10x4, "avx2", pack_fp4);
lane_batch_affine!(
    selene_batch_affine_ifma,
    SeleneCurve,
    Fq,
    8,
    Fq51x8,
    "avx512f,avx512ifma",
    pack_fq8
);
lane_batch_affine!(
    helios_batch_affine_ifma,
    HeliosCurve,
    Fp,
    8,
    Fp51x8,
    "avx512f,avx512ifma",
    pack_fp8
);
