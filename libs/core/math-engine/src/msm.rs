// [libs/core/math-engine/src/msm.rs]
/*!
 * =================================================================
 * APARATO: MULTI-SCALAR MULTIPLICATION ENGINE (V4.1 - STRAUS/PIPPENGER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: sum(k_i * P_i) EN TIEMPO VARIABLE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ALGORITHM ROUTING: Straus comparte duplicaciones entre puntos para
 *    n <= 32; Pippenger enruta puntos a cubetas por dígito para n > 32,
 *    con ancho de ventana derivado de log2(n).
 * 2. RUNNING-TAIL: La suma de cubetas usa la técnica de cola corrida:
 *    sum(i * bucket_i) = sum de sumas parciales desde la cubeta alta.
 * 3. FIXED-BASE INTERLEAVE: El MSM de base fija comparte las 255
 *    duplicaciones entre n escalares; cada punto agregado cuesta solo
 *    52 adiciones mixtas.
 * 4. VARTIME ONLY: Todos los caminos asumen escalares públicos.
 * =================================================================
 */

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::field::PrimeField;
use crate::scalar_mul::{recode_signed_5, scalarmult_fixed_precompute, scalarmult_vartime};

/// Umbral de enrutamiento: Straus hasta aquí, Pippenger por encima.
const STRAUS_LIMIT: usize = 32;

/**
 * MSM variable-time: sum(scalars[i] * points[i]).
 *
 * Entradas vacías producen la identidad. n = 1 delega en el wNAF simple.
 */
#[tracing::instrument(level = "trace", skip_all, fields(n = scalars.len()))]
pub fn msm_vartime<C: CycleCurve>(
    scalars: &[[u8; 32]],
    points: &[JacobianPoint<C>],
) -> JacobianPoint<C> {
    debug_assert_eq!(scalars.len(), points.len());
    let n = scalars.len().min(points.len());
    if n == 0 {
        return JacobianPoint::identity();
    }
    if n == 1 {
        return scalarmult_vartime(&scalars[0], &points[0]);
    }

    if n <= STRAUS_LIMIT {
        msm_straus(&scalars[..n], &points[..n])
    } else {
        msm_pippenger(&scalars[..n], &points[..n])
    }
}

/**
 * Straus: tablas afines [1P..16P] por punto, recodificación radix-32 con
 * signo, 52 ventanas de 5 duplicaciones compartidas.
 */
fn msm_straus<C: CycleCurve>(
    scalars: &[[u8; 32]],
    points: &[JacobianPoint<C>],
) -> JacobianPoint<C> {
    let n = points.len();

    let mut tables = Vec::with_capacity(n);
    let mut digits = Vec::with_capacity(n);
    for i in 0..n {
        tables.push(scalarmult_fixed_precompute(&points[i]));
        digits.push(recode_signed_5(&scalars[i]));
    }

    let mut acc = JacobianPoint::<C>::identity();
    for w in (0..52).rev() {
        if w != 51 {
            for _ in 0..5 {
                acc = acc.double();
            }
        }
        for i in 0..n {
            let d = digits[i][w];
            if d == 0 || points[i].is_identity() {
                continue;
            }
            let idx = (d.unsigned_abs() - 1) as usize;
            let mut entry = tables[i][idx];
            if d < 0 {
                entry.y = entry.y.negate_modular();
            }
            acc = acc.add_mixed(&entry);
        }
    }
    acc
}

/// Ancho de ventana de Pippenger en función de n (~ log2 n).
#[inline]
fn pippenger_window(n: usize) -> usize {
    match n {
        0..=63 => 4,
        64..=255 => 5,
        256..=1023 => 7,
        1024..=8191 => 9,
        _ => 11,
    }
}

/**
 * Pippenger: por ventana, cada punto cae en la cubeta de su dígito; las
 * cubetas se agregan con la técnica de cola corrida y las ventanas se
 * combinan desplazando w bits entre niveles.
 */
fn msm_pippenger<C: CycleCurve>(
    scalars: &[[u8; 32]],
    points: &[JacobianPoint<C>],
) -> JacobianPoint<C> {
    let n = points.len();
    let w = pippenger_window(n);
    let num_buckets = (1usize << w) - 1;
    let num_windows = (256 + w - 1) / w;

    let mut acc = JacobianPoint::<C>::identity();

    for win in (0..num_windows).rev() {
        if win != num_windows - 1 {
            for _ in 0..w {
                acc = acc.double();
            }
        }

        let mut buckets = vec![JacobianPoint::<C>::identity(); num_buckets];
        let bit_offset = win * w;

        for i in 0..n {
            let digit = extract_window(&scalars[i], bit_offset, w);
            if digit == 0 {
                continue;
            }
            buckets[digit - 1] = buckets[digit - 1].add(&points[i]);
        }

        // Cola corrida: sum(i * bucket_i) = sum de colas parciales.
        let mut running = JacobianPoint::<C>::identity();
        let mut window_sum = JacobianPoint::<C>::identity();
        for bucket in buckets.iter().rev() {
            running = running.add(bucket);
            window_sum = window_sum.add(&running);
        }

        acc = acc.add(&window_sum);
    }

    acc
}

/// Extrae w bits del escalar little-endian a partir de bit_offset.
#[inline]
fn extract_window(scalar: &[u8; 32], bit_offset: usize, w: usize) -> usize {
    let mut val: usize = 0;
    for b in 0..w {
        let bit = bit_offset + b;
        if bit >= 256 {
            break;
        }
        val |= (((scalar[bit / 8] >> (bit % 8)) & 1) as usize) << b;
    }
    val
}

/**
 * MSM de base fija entrelazado: todas las parejas (escalar, tabla) con
 * tablas precomputadas de 16 entradas. Las 255 duplicaciones se comparten
 * entre los n escalares; cada punto agregado cuesta 52 adiciones mixtas.
 */
pub fn msm_fixed<C: CycleCurve>(
    scalars: &[[u8; 32]],
    tables: &[Vec<AffinePoint<C>>],
) -> JacobianPoint<C> {
    debug_assert_eq!(scalars.len(), tables.len());
    let n = scalars.len().min(tables.len());
    if n == 0 {
        return JacobianPoint::identity();
    }

    let digits: Vec<[i8; 52]> = scalars.iter().map(recode_signed_5).collect();

    let mut acc = JacobianPoint::<C>::identity();
    for w in (0..52).rev() {
        if w != 51 {
            for _ in 0..5 {
                acc = acc.double();
            }
        }
        for i in 0..n {
            let d = digits[i][w];
            if d == 0 {
                continue;
            }
            let idx = (d.unsigned_abs() - 1) as usize;
            let mut entry = tables[i][idx];
            if d < 0 {
                entry.y = entry.y.negate_modular();
            }
            acc = acc.add_mixed(&entry);
        }
    }
    acc
}

/**
 * Compromiso de Pedersen: blinding*H + sum(values[i] * generators[i]).
 *
 * Cáscara fina sobre la multiplicación escalar CT (para el factor de
 * cegado secreto) y el MSM variable-time (para los valores públicos).
 */
pub fn pedersen_commit<C: CycleCurve>(
    blinding: &[u8; 32],
    h: &JacobianPoint<C>,
    values: &[[u8; 32]],
    generators: &[JacobianPoint<C>],
) -> JacobianPoint<C> {
    let blind_part = crate::scalar_mul::scalarmult(blinding, h);
    let value_part = msm_vartime(values, generators);
    blind_part.add(&value_part)
}
