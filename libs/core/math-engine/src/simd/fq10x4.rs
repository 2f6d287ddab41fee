// [libs/core/math-engine/src/simd/fq10x4.rs]
/*!
 * =================================================================
 * APARATO: FQ 4-WAY AVX2 ENGINE (V3.2 - RADIX-25.5 GAMMA)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: 4 ELEMENTOS F_q EN PARALELO SOBRE REGISTROS YMM
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RADIX 2^25.5: 10 limbs alternando 26/25 bits por lane de 64 bits;
 *    evita los productos de 128 bits que desbordan registros en AVX2
 *    (mul_epu32 es 32x32 -> 64).
 * 2. DOUBLE CRANDALL PASS: el producto escolar llena 19 acumuladores;
 *    la primera convolución gamma pliega las posiciones 10..19 hacia
 *    0..13, la segunda pliega 10..14 hacia 0..8, y el acarreo final con
 *    envoltura gamma normaliza.
 * 3. OFFSET CORRECTION: cuando posición fuente e índice gamma son ambos
 *    impares, el producto se duplica (desfase de medio bit del radix
 *    2^25.5); se usan operandos pre-duplicados para no exceder 32 bits.
 * 4. INPUT CONTRACT: limbs de entrada < 2^27 (valor acarreado o una
 *    sola adición encadenada); la sustracción usa sesgo 8q.
 *
 * # Safety:
 * Todas las funciones exigen soporte AVX2 en la CPU; los llamadores del
 * despacho lo garantizan via detección de características.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::fq::{Fq, GAMMA_51};
use core::arch::x86_64::*;

/// gamma en radix-2^25.5 (solo los 5 limbs bajos son no nulos).
pub(crate) const GAMMA_25: [i64; 5] = [47724641, 4940641, 43315753, 10110164, 16908831];

/// 8q en radix-2^25.5: sesgo de sustracción (8q[0] > 2^27, absorbe
/// operandos de una adición encadenada).
const EIGHT_Q_25: [i64; 10] = [
    155073784, 228910320, 190344880, 187554136, 401600256, 268435448, 536870904, 268435448,
    536870904, 268435448,
];

/// 4 elementos F_q en paralelo: v[i] = limb i de los 4 lanes.
#[derive(Clone, Copy)]
pub struct Fq10x4 {
    pub(crate) v: [__m256i; 10],
}

#[inline(always)]
unsafe fn m26() -> __m256i {
    _mm256_set1_epi64x((1i64 << 26) - 1)
}

#[inline(always)]
unsafe fn m25() -> __m256i {
    _mm256_set1_epi64x((1i64 << 25) - 1)
}

#[inline(always)]
unsafe fn gamma(m: usize) -> __m256i {
    _mm256_set1_epi64x(GAMMA_25[m])
}

/// gamma impar pre-duplicado (corrección de desfase sin exceder 32 bits).
#[inline(always)]
unsafe fn gamma2(m: usize) -> __m256i {
    _mm256_set1_epi64x(2 * GAMMA_25[m])
}

/// Paso de acarreo 26 bits: t[i] -> t[i+1].
#[inline(always)]
unsafe fn carry_at_26(t: &mut [__m256i], i: usize) {
    let c = _mm256_srli_epi64::<26>(t[i]);
    t[i + 1] = _mm256_add_epi64(t[i + 1], c);
    t[i] = _mm256_and_si256(t[i], m26());
}

/// Paso de acarreo 25 bits: t[i] -> t[i+1].
#[inline(always)]
unsafe fn carry_at_25(t: &mut [__m256i], i: usize) {
    let c = _mm256_srli_epi64::<25>(t[i]);
    t[i + 1] = _mm256_add_epi64(t[i + 1], c);
    t[i] = _mm256_and_si256(t[i], m25());
}

#[inline(always)]
unsafe fn carry_at(t: &mut [__m256i], i: usize) {
    if i % 2 == 0 {
        carry_at_26(t, i);
    } else {
        carry_at_25(t, i);
    }
}

impl Fq10x4 {
    /// Los 4 lanes a cero.
    #[target_feature(enable = "avx2")]
    pub unsafe fn zero() -> Self {
        Self { v: [_mm256_setzero_si256(); 10] }
    }

    /// Carga 4 elementos escalares en los lanes (transposición de limbs).
    #[target_feature(enable = "avx2")]
    pub unsafe fn pack(e0: &Fq, e1: &Fq, e2: &Fq, e3: &Fq) -> Self {
        let l0 = radix51_to_radix25(e0);
        let l1 = radix51_to_radix25(e1);
        let l2 = radix51_to_radix25(e2);
        let l3 = radix51_to_radix25(e3);
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            v[i] = _mm256_set_epi64x(l3[i] as i64, l2[i] as i64, l1[i] as i64, l0[i] as i64);
        }
        Self { v }
    }

    /// Difunde un único elemento a los 4 lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn splat(e: &Fq) -> Self {
        let l = radix51_to_radix25(e);
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            v[i] = _mm256_set1_epi64x(l[i] as i64);
        }
        Self { v }
    }

    /// Extrae los 4 lanes como elementos escalares.
    #[target_feature(enable = "avx2")]
    pub unsafe fn extract(&self) -> [Fq; 4] {
        let mut norm = *self;
        norm.carry_gamma_in_place();
        let mut lanes = [[0u64; 4]; 10];
        for i in 0..10 {
            let mut buf = [0i64; 4];
            _mm256_storeu_si256(buf.as_mut_ptr().cast::<__m256i>(), norm.v[i]);
            for lane in 0..4 {
                lanes[i][lane] = buf[lane] as u64;
            }
        }
        let mut out = [Fq::ZERO; 4];
        for lane in 0..4 {
            let mut limbs = [0u64; 10];
            for i in 0..10 {
                limbs[i] = lanes[i][lane];
            }
            out[lane] = radix25_to_radix51(&limbs);
        }
        out
    }

    /// Adición por lanes, acarreo diferido (una sola adición encadenable).
    #[target_feature(enable = "avx2")]
    pub unsafe fn add(&self, other: &Self) -> Self {
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            v[i] = _mm256_add_epi64(self.v[i], other.v[i]);
        }
        Self { v }
    }

    /// Sustracción por lanes con sesgo 8q, normalizada a la salida.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sub(&self, other: &Self) -> Self {
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            let bias = _mm256_set1_epi64x(EIGHT_Q_25[i]);
            v[i] = _mm256_add_epi64(_mm256_sub_epi64(self.v[i], other.v[i]), bias);
        }
        let mut out = Self { v };
        out.carry_gamma_in_place();
        out
    }

    /// Negación por lanes: 0 - self.
    #[target_feature(enable = "avx2")]
    pub unsafe fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// cmov por lanes: self = mask ? other : self (máscara de 64 bits
    /// toda-unos por lane).
    #[target_feature(enable = "avx2")]
    pub unsafe fn cmov(&mut self, other: &Self, mask: __m256i) {
        for i in 0..10 {
            let keep = _mm256_andnot_si256(mask, self.v[i]);
            let take = _mm256_and_si256(mask, other.v[i]);
            self.v[i] = _mm256_or_si256(keep, take);
        }
    }

    /**
     * Acarreo con envoltura gamma: cadena lineal 0 -> 9, pliegue del
     * acarreo de salida como c * gamma[0..4], re-acarreo 0 -> 5.
     */
    #[target_feature(enable = "avx2")]
    pub unsafe fn carry_gamma_in_place(&mut self) {
        for i in 0..9 {
            carry_at(&mut self.v, i);
        }
        let c = _mm256_srli_epi64::<25>(self.v[9]);
        self.v[9] = _mm256_and_si256(self.v[9], m25());
        for m in 0..5 {
            self.v[m] = _mm256_add_epi64(self.v[m], _mm256_mul_epu32(c, gamma(m)));
        }
        for i in 0..5 {
            carry_at(&mut self.v, i);
        }
    }

    /**
     * Multiplicación por lanes: producto escolar 10x10 con corrección de
     * desfase, acarreo de los 19 acumuladores, y doble convolución gamma.
     *
     * # Mathematical Proof (Offset Correction):
     * El limb i vive en el bit ceil(25.5 i); cuando i y j son impares,
     * off(i)+off(j) = off(i+j) + 1 y el producto cuenta doble. Lo mismo
     * aplica al plegar: posición fuente u e índice gamma m ambos impares
     * duplican el término.
     */
    #[target_feature(enable = "avx2")]
    pub unsafe fn mul(&self, other: &Self) -> Self {
        // Operandos impares pre-duplicados (quedan < 2^28 < 2^32).
        let mut f2 = [_mm256_setzero_si256(); 10];
        for i in (1..10).step_by(2) {
            f2[i] = _mm256_add_epi64(self.v[i], self.v[i]);
        }

        // Producto escolar: 19 acumuladores (posiciones 0..18).
        let mut t = [_mm256_setzero_si256(); 20];
        for i in 0..10 {
            for j in 0..10 {
                let lhs = if i % 2 == 1 && j % 2 == 1 { f2[i] } else { self.v[i] };
                t[i + j] = _mm256_add_epi64(t[i + j], _mm256_mul_epu32(lhs, other.v[j]));
            }
        }

        // Acarreo de los 19 acumuladores; el acarreo final puebla t[19].
        for k in 0..19 {
            carry_at(&mut t, k);
        }

        // Primera convolución gamma: posiciones 10..19 -> 0..13.
        // Las posiciones 10..13 se reinician (su contenido fue consumido).
        let mut a = [_mm256_setzero_si256(); 15];
        a[..10].copy_from_slice(&t[..10]);
        for k in 10..20 {
            let u = k - 10;
            for m in 0..5 {
                let reg = if u % 2 == 1 && m % 2 == 1 { gamma2(m) } else { gamma(m) };
                a[u + m] = _mm256_add_epi64(a[u + m], _mm256_mul_epu32(t[k], reg));
            }
        }

        // Acarreo 0..13; el acarreo final puebla a[14].
        for k in 0..14 {
            carry_at(&mut a, k);
        }

        // Segunda convolución gamma: posiciones 10..14 -> 0..8.
        let mut b = [_mm256_setzero_si256(); 10];
        b.copy_from_slice(&a[..10]);
        for k in 10..15 {
            let u = k - 10;
            for m in 0..5 {
                let reg = if u % 2 == 1 && m % 2 == 1 { gamma2(m) } else { gamma(m) };
                b[u + m] = _mm256_add_epi64(b[u + m], _mm256_mul_epu32(a[k], reg));
            }
        }

        let mut out = Self { v: b };
        out.carry_gamma_in_place();
        out
    }

    /// Cuadrado por lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sq(&self) -> Self {
        self.mul(self)
    }

    /// Doble cuadrado por lanes: 2 * self^2.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sq2(&self) -> Self {
        let s = self.sq();
        let mut out = s.add(&s);
        out.carry_gamma_in_place();
        out
    }
}

// --- Conversión de radix (escalar, sin SIMD) ---

/// Extrae `width` bits de un entero de 256 bits (4 palabras LE) en `off`.
#[inline]
fn extract_bits(words: &[u64; 4], off: usize, width: usize) -> u64 {
    let word = off / 64;
    let shift = off % 64;
    let mut val = words[word] >> shift;
    if shift + width > 64 && word + 1 < 4 {
        val |= words[word + 1] << (64 - shift);
    }
    val & ((1u64 << width) - 1)
}

/// Fq (radix-2^51) -> 10 limbs radix-2^25.5 (sobre la forma canónica).
pub(crate) fn radix51_to_radix25(fe: &Fq) -> [u64; 10] {
    let bytes = fe.to_bytes();
    let mut words = [0u64; 4];
    for w in 0..4 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[w * 8..w * 8 + 8]);
        words[w] = u64::from_le_bytes(buf);
    }
    let mut out = [0u64; 10];
    let mut off = 0usize;
    for (i, limb) in out.iter_mut().enumerate() {
        let width = if i % 2 == 0 { 26 } else { 25 };
        *limb = extract_bits(&words, off, width);
        off += width;
    }
    out
}

/// 10 limbs radix-2^25.5 (<= 27 bits cada uno) -> Fq.
pub(crate) fn radix25_to_radix51(limbs: &[u64; 10]) -> Fq {
    let mut words = [0u64; 5];
    let mut off = 0usize;
    for (i, &limb) in limbs.iter().enumerate() {
        let word = off / 64;
        let shift = off % 64;
        let lo = limb << shift;
        words[word] = words[word].wrapping_add(lo);
        // Propaga el acarreo de la suma y el derrame del shift.
        if words[word] < lo {
            words[word + 1] = words[word + 1].wrapping_add(1);
        }
        if shift > 0 {
            let hi = limb >> (64 - shift);
            if hi != 0 {
                let prev = words[word + 1];
                words[word + 1] = prev.wrapping_add(hi);
                if words[word + 1] < prev {
                    words[word + 2] += 1;
                }
            }
        }
        off += if i % 2 == 0 { 26 } else { 25 };
    }

    // words[0..3] + bit 255 y el derrame en words[4] se pliegan mod q.
    let mut bytes = [0u8; 32];
    for w in 0..4 {
        bytes[w * 8..w * 8 + 8].copy_from_slice(&words[w].to_le_bytes());
    }
    let top = (bytes[31] >> 7) & 1;
    bytes[31] &= 0x7f;
    let mut fe = Fq::from_bytes_raw(&bytes);
    // bit 255 = gamma; words[4] * 2^256 = words[4] * 2gamma (mod q)
    if top == 1 {
        let gamma_fe = Fq::from_raw_limbs([GAMMA_51[0], GAMMA_51[1], GAMMA_51[2], 0, 0]);
        fe = fe.add_modular(&gamma_fe).normalize();
    }
    if words[4] != 0 {
        let two_gamma = Fq::from_raw_limbs([
            crate::fq::TWO_GAMMA_51[0],
            crate::fq::TWO_GAMMA_51[1],
            crate::fq::TWO_GAMMA_51[2],
            0,
            0,
        ]);
        let spill = Fq::from_u64(words[4]).multiply_modular(&two_gamma);
        fe = fe.add_modular(&spill).normalize();
    }
    fe
}
