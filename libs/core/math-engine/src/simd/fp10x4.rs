// [libs/core/math-engine/src/simd/fp10x4.rs]
/*!
 * =================================================================
 * APARATO: FP 4-WAY AVX2 ENGINE (V3.1 - RADIX-25.5 X19)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: 4 ELEMENTOS F_p EN PARALELO SOBRE REGISTROS YMM
 *
 * Contraparte F_p del motor fq10x4: mismo radix 2^25.5 y la misma
 * corrección de desfase impar x impar, pero el pliegue de Crandall es
 * una sola multiplicación por 19 (un limb), sin convolución. El sesgo
 * de sustracción es 4p: todos los limbs de p rondan su capacidad de
 * radix, así que 4p ya absorbe operandos de 27 bits.
 *
 * # Safety:
 * Exige AVX2; garantizado por el despacho.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::fp::Fp;
use core::arch::x86_64::*;

/// 4p en radix-2^25.5: sesgo de sustracción.
const FOUR_P_25: [i64; 10] = [
    268435380, 134217724, 268435452, 134217724, 268435452, 134217724, 268435452, 134217724,
    268435452, 134217724,
];

/// 4 elementos F_p en paralelo: v[i] = limb i de los 4 lanes.
#[derive(Clone, Copy)]
pub struct Fp10x4 {
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
unsafe fn nineteen() -> __m256i {
    _mm256_set1_epi64x(19)
}

#[inline(always)]
unsafe fn carry_at_26(t: &mut [__m256i], i: usize) {
    let c = _mm256_srli_epi64::<26>(t[i]);
    t[i + 1] = _mm256_add_epi64(t[i + 1], c);
    t[i] = _mm256_and_si256(t[i], m26());
}

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

impl Fp10x4 {
    /// Los 4 lanes a cero.
    #[target_feature(enable = "avx2")]
    pub unsafe fn zero() -> Self {
        Self { v: [_mm256_setzero_si256(); 10] }
    }

    /// Carga 4 elementos escalares en los lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn pack(e0: &Fp, e1: &Fp, e2: &Fp, e3: &Fp) -> Self {
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
    pub unsafe fn splat(e: &Fp) -> Self {
        let l = radix51_to_radix25(e);
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            v[i] = _mm256_set1_epi64x(l[i] as i64);
        }
        Self { v }
    }

    /// Extrae los 4 lanes como elementos escalares.
    #[target_feature(enable = "avx2")]
    pub unsafe fn extract(&self) -> [Fp; 4] {
        let mut norm = *self;
        norm.carry_19_in_place();
        let mut lanes = [[0u64; 4]; 10];
        for i in 0..10 {
            let mut buf = [0i64; 4];
            _mm256_storeu_si256(buf.as_mut_ptr().cast::<__m256i>(), norm.v[i]);
            for lane in 0..4 {
                lanes[i][lane] = buf[lane] as u64;
            }
        }
        let mut out = [Fp::ZERO; 4];
        for lane in 0..4 {
            let mut limbs = [0u64; 10];
            for i in 0..10 {
                limbs[i] = lanes[i][lane];
            }
            out[lane] = radix25_to_radix51(&limbs);
        }
        out
    }

    /// Adición por lanes, acarreo diferido.
    #[target_feature(enable = "avx2")]
    pub unsafe fn add(&self, other: &Self) -> Self {
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            v[i] = _mm256_add_epi64(self.v[i], other.v[i]);
        }
        Self { v }
    }

    /// Sustracción por lanes con sesgo 4p, normalizada a la salida.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sub(&self, other: &Self) -> Self {
        let mut v = [_mm256_setzero_si256(); 10];
        for i in 0..10 {
            let bias = _mm256_set1_epi64x(FOUR_P_25[i]);
            v[i] = _mm256_add_epi64(_mm256_sub_epi64(self.v[i], other.v[i]), bias);
        }
        let mut out = Self { v };
        out.carry_19_in_place();
        out
    }

    /// Negación por lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// cmov por lanes con máscara toda-unos.
    #[target_feature(enable = "avx2")]
    pub unsafe fn cmov(&mut self, other: &Self, mask: __m256i) {
        for i in 0..10 {
            let keep = _mm256_andnot_si256(mask, self.v[i]);
            let take = _mm256_and_si256(mask, other.v[i]);
            self.v[i] = _mm256_or_si256(keep, take);
        }
    }

    /// Acarreo con envoltura x19: cadena 0 -> 9, pliegue, re-acarreo corto.
    #[target_feature(enable = "avx2")]
    pub unsafe fn carry_19_in_place(&mut self) {
        for i in 0..9 {
            carry_at(&mut self.v, i);
        }
        let c = _mm256_srli_epi64::<25>(self.v[9]);
        self.v[9] = _mm256_and_si256(self.v[9], m25());
        self.v[0] = _mm256_add_epi64(self.v[0], _mm256_mul_epu32(c, nineteen()));
        carry_at_26(&mut self.v, 0);
        carry_at_25(&mut self.v, 1);
    }

    /**
     * Multiplicación por lanes: producto escolar 10x10 con corrección de
     * desfase, acarreo de 19 acumuladores y pliegue x19 de las posiciones
     * 10..19.
     */
    #[target_feature(enable = "avx2")]
    pub unsafe fn mul(&self, other: &Self) -> Self {
        let mut f2 = [_mm256_setzero_si256(); 10];
        for i in (1..10).step_by(2) {
            f2[i] = _mm256_add_epi64(self.v[i], self.v[i]);
        }

        let mut t = [_mm256_setzero_si256(); 20];
        for i in 0..10 {
            for j in 0..10 {
                let lhs = if i % 2 == 1 && j % 2 == 1 { f2[i] } else { self.v[i] };
                t[i + j] = _mm256_add_epi64(t[i + j], _mm256_mul_epu32(lhs, other.v[j]));
            }
        }

        for k in 0..19 {
            carry_at(&mut t, k);
        }

        // Pliegue x19: posición 10+u contribuye 19 * t[10+u] al limb u.
        let mut b = [_mm256_setzero_si256(); 10];
        b.copy_from_slice(&t[..10]);
        for k in 10..20 {
            b[k - 10] = _mm256_add_epi64(b[k - 10], _mm256_mul_epu32(t[k], nineteen()));
        }

        let mut out = Self { v: b };
        out.carry_19_in_place();
        out
    }

    /// Cuadrado por lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sq(&self) -> Self {
        self.mul(self)
    }

    /// Doble cuadrado por lanes.
    #[target_feature(enable = "avx2")]
    pub unsafe fn sq2(&self) -> Self {
        let s = self.sq();
        let mut out = s.add(&s);
        out.carry_19_in_place();
        out
    }
}

// --- Conversión de radix (escalar, sin SIMD) ---

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

/// Fp (radix-2^51) -> 10 limbs radix-2^25.5.
pub(crate) fn radix51_to_radix25(fe: &Fp) -> [u64; 10] {
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

/// 10 limbs radix-2^25.5 (<= 27 bits cada uno) -> Fp.
pub(crate) fn radix25_to_radix51(limbs: &[u64; 10]) -> Fp {
    let mut words = [0u64; 5];
    let mut off = 0usize;
    for (i, &limb) in limbs.iter().enumerate() {
        let word = off / 64;
        let shift = off % 64;
        let lo = limb << shift;
        words[word] = words[word].wrapping_add(lo);
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

    let mut bytes = [0u8; 32];
    for w in 0..4 {
        bytes[w * 8..w * 8 + 8].copy_from_slice(&words[w].to_le_bytes());
    }
    let top = (bytes[31] >> 7) & 1;
    bytes[31] &= 0x7f;
    let mut fe = Fp::from_bytes_raw(&bytes);
    // bit 255 = 19; words[4] * 2^256 = words[4] * 38 (mod p)
    if top == 1 {
        fe = fe.add_modular(&Fp::from_u64(19)).normalize();
    }
    if words[4] != 0 {
        let spill = Fp::from_u64(words[4]).multiply_modular(&Fp::from_u64(38));
        fe = fe.add_modular(&spill).normalize();
    }
    fe
}
