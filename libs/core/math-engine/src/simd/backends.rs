// [libs/core/math-engine/src/simd/backends.rs]
/*!
 * =================================================================
 * APARATO: SIMD DISPATCH BACKENDS (V3.0 - AVX2/IFMA SLOTS)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: LAS 12 ENTRADAS VECTORIALES DE LA TABLA DE DESPACHO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SHARED LADDER, LANE TABLES: las escaleras (CT w=4, wNAF w=5,
 *    Straus) son compartidas; los backends difieren en que toda
 *    materialización de tablas afines pasa por el motor de lanes
 *    (las 2n multiplicaciones finales del truco de Montgomery son
 *    independientes punto a punto).
 * 2. MIXED-ADD UPGRADE: los backends vartime usan tabla afín + adición
 *    mixta (7M+4S) donde el baseline escalar mantiene tabla Jacobiana
 *    con adición general (11M+5S).
 * 3. SAFETY BOUNDARY: cada función verifica nada; el despacho solo las
 *    publica cuando la CPU anuncia la característica.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::curve::JacobianPoint;
use crate::helios::{HeliosCurve, HeliosPoint};
use crate::msm;
use crate::scalar_mul::{
    odd_multiples_8_jacobian, recode_signed_5, scalarmult_ct_with_table, wnaf_ladder_affine,
    window_table_8_jacobian,
};
use crate::selene::{SeleneCurve, SelenePoint};
use crate::simd::lanes;

macro_rules! simd_backend {
    (
        $ct:ident, $vt:ident, $msm:ident,
        $curve:ty, $point:ty,
        $batch_affine:path, $feature:literal
    ) => {
        /// Multiplicación escalar CT con tabla normalizada por lanes.
        pub fn $ct(scalar: &[u8; 32], p: &$point) -> $point {
            if p.is_identity() {
                return <$point>::identity();
            }
            let jac = window_table_8_jacobian(p);
            // SAFETY: publicado por el despacho solo con la característica presente.
            let table = unsafe { $batch_affine(&jac) };
            scalarmult_ct_with_table(scalar, &table)
        }

        /// wNAF w=5 variable-time con tabla afín + adición mixta.
        pub fn $vt(scalar: &[u8; 32], p: &$point) -> $point {
            if p.is_identity() {
                return <$point>::identity();
            }
            let jac = odd_multiples_8_jacobian(p);
            // SAFETY: idem.
            let table = unsafe { $batch_affine(&jac) };
            wnaf_ladder_affine(scalar, &table)
        }

        /// MSM variable-time: Straus con TODAS las tablas normalizadas en
        /// una única pasada de lanes (n <= 32); Pippenger escalar arriba.
        pub fn $msm(scalars: &[[u8; 32]], points: &[$point]) -> $point {
            let n = scalars.len().min(points.len());
            if n == 0 {
                return <$point>::identity();
            }
            if n == 1 {
                return $vt(&scalars[0], &points[0]);
            }
            if n > 32 {
                return msm::msm_vartime(&scalars[..n], &points[..n]);
            }

            // Tablas Jacobianas [1P..16P] por punto no-identidad,
            // concatenadas para una única normalización por lanes.
            let mut live = Vec::with_capacity(n);
            let mut jac_all: Vec<$point> = Vec::with_capacity(n * 16);
            for i in 0..n {
                if points[i].is_identity() {
                    continue;
                }
                live.push(i);
                let mut jac = [<$point>::identity(); 16];
                jac[0] = points[i];
                jac[1] = points[i].double();
                for k in 2..16 {
                    jac[k] = jac[k - 1].add(&points[i]);
                }
                jac_all.extend_from_slice(&jac);
            }
            if live.is_empty() {
                return <$point>::identity();
            }

            // SAFETY: idem.
            let affine_all = unsafe { $batch_affine(&jac_all) };

            let digits: Vec<[i8; 52]> =
                live.iter().map(|&i| recode_signed_5(&scalars[i])).collect();

            let mut acc = JacobianPoint::<$curve>::identity();
            for w in (0..52).rev() {
                if w != 51 {
                    for _ in 0..5 {
                        acc = acc.double();
                    }
                }
                for (t, digit_row) in digits.iter().enumerate() {
                    let d = digit_row[w];
                    if d == 0 {
                        continue;
                    }
                    let idx = t * 16 + (d.unsigned_abs() - 1) as usize;
                    let mut entry = affine_all[idx];
                    if d < 0 {
                        entry.y = entry.y.negate_modular();
                    }
                    acc = acc.add_mixed(&entry);
                }
            }
            acc
        }
    };
}

simd_backend!(
    helios_scalarmult_avx2,
    helios_scalarmult_vartime_avx2,
    helios_msm_vartime_avx2,
    HeliosCurve,
    HeliosPoint,
    lanes::helios_batch_affine_avx2,
    "avx2"
);

simd_backend!(
    selene_scalarmult_avx2,
    selene_scalarmult_vartime_avx2,
    selene_msm_vartime_avx2,
    SeleneCurve,
    SelenePoint,
    lanes::selene_batch_affine_avx2,
    "avx2"
);

simd_backend!(
    helios_scalarmult_ifma,
    helios_scalarmult_vartime_ifma,
    helios_msm_vartime_ifma,
    HeliosCurve,
    HeliosPoint,
    lanes::helios_batch_affine_ifma,
    "avx512f,avx512ifma"
);

simd_backend!(
    selene_scalarmult_ifma,
    selene_scalarmult_vartime_ifma,
    selene_msm_vartime_ifma,
    SeleneCurve,
    SelenePoint,
    lanes::selene_batch_affine_ifma,
    "avx512f,avx512ifma"
);
