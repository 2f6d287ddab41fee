// [libs/core/math-engine/src/simd/fp51x8.rs]
/*!
 * =================================================================
 * APARATO: FP 8-WAY IFMA ENGINE (V3.1 - MADD52 X19)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: 8 ELEMENTOS F_p EN PARALELO SOBRE REGISTROS ZMM
 *
 * Contraparte F_p del motor fq51x8: mismos pares madd52lo/hi con la
 * mitad alta desplazada un bit, pero el pliegue de Crandall es x19 (la
 * posición 10 del acarreo de cola pliega x361 = 19^2). Sesgo de
 * sustracción 4p: los limbs de p rondan 2^51, así que 4p absorbe
 * operandos de 52 bits sin el caso patológico de gamma.
 *
 * # Safety:
 * Exige AVX-512F + AVX-512 IFMA; garantizado por el despacho.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::fp::Fp;
use core::arch::x86_64::*;

/// 4p en radix-2^51: sesgo de sustracción.
const FOUR_P_51: [u64; 5] = [
    0x1F_FFFF_FFFF_FFB4,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
];

/// 8 elementos F_p en paralelo: v[i] = limb radix-2^51 i de los 8 lanes.
#[derive(Clone, Copy)]
pub struct Fp51x8 {
    pub(crate) v: [__m512i; 5],
}

#[inline(always)]
unsafe fn m51() -> __m512i {
    _mm512_set1_epi64(((1u64 << 51) - 1) as i64)
}

#[inline(always)]
unsafe fn carry_at(t: &mut [__m512i], i: usize) {
    let c = _mm512_srli_epi64::<51>(t[i]);
    t[i + 1] = _mm512_add_epi64(t[i + 1], c);
    t[i] = _mm512_and_si512(t[i], m51());
}

#[inline(always)]
unsafe fn madd_pair(t: &mut [__m512i], pos: usize, val: __m512i, mult: __m512i) {
    t[pos] = _mm512_madd52lo_epu64(t[pos], val, mult);
    let hi = _mm512_madd52hi_epu64(_mm512_setzero_si512(), val, mult);
    t[pos + 1] = _mm512_add_epi64(t[pos + 1], _mm512_slli_epi64::<1>(hi));
}

impl Fp51x8 {
    /// Los 8 lanes a cero.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn zero() -> Self {
        Self { v: [_mm512_setzero_si512(); 5] }
    }

    /// Carga 8 elementos escalares en los lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn pack(elems: &[Fp; 8]) -> Self {
        let mut reduced = [[0u64; 5]; 8];
        for (k, e) in elems.iter().enumerate() {
            reduced[k] = e.normalize().limbs;
        }
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            v[i] = _mm512_set_epi64(
                reduced[7][i] as i64,
                reduced[6][i] as i64,
                reduced[5][i] as i64,
                reduced[4][i] as i64,
                reduced[3][i] as i64,
                reduced[2][i] as i64,
                reduced[1][i] as i64,
                reduced[0][i] as i64,
            );
        }
        Self { v }
    }

    /// Difunde un único elemento a los 8 lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn splat(e: &Fp) -> Self {
        let l = e.normalize().limbs;
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            v[i] = _mm512_set1_epi64(l[i] as i64);
        }
        Self { v }
    }

    /// Extrae los 8 lanes como elementos escalares.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn extract(&self) -> [Fp; 8] {
        let mut norm = *self;
        norm.carry_in_place();
        let mut lanes = [[0u64; 8]; 5];
        for i in 0..5 {
            lanes[i] = core::mem::transmute::<__m512i, [u64; 8]>(norm.v[i]);
        }
        let mut out = [Fp::ZERO; 8];
        for lane in 0..8 {
            let mut limbs = [0u64; 5];
            for i in 0..5 {
                limbs[i] = lanes[i][lane];
            }
            out[lane] = Fp::from_raw_limbs(limbs);
        }
        out
    }

    /// Adición por lanes, sin acarreo (52 bits, dentro de madd52).
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn add(&self, other: &Self) -> Self {
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            v[i] = _mm512_add_epi64(self.v[i], other.v[i]);
        }
        Self { v }
    }

    /// Sustracción por lanes con sesgo 4p + normalización.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn sub(&self, other: &Self) -> Self {
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            let bias = _mm512_set1_epi64(FOUR_P_51[i] as i64);
            v[i] = _mm512_add_epi64(_mm512_sub_epi64(self.v[i], other.v[i]), bias);
        }
        let mut out = Self { v };
        out.carry_in_place();
        out
    }

    /// Negación por lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// cmov por lanes con máscara toda-unos.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn cmov(&mut self, other: &Self, mask: __m512i) {
        for i in 0..5 {
            let keep = _mm512_andnot_si512(mask, self.v[i]);
            let take = _mm512_and_si512(mask, other.v[i]);
            self.v[i] = _mm512_or_si512(keep, take);
        }
    }

    /// Acarreo con envoltura x19.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn carry_in_place(&mut self) {
        for i in 0..4 {
            carry_at(&mut self.v, i);
        }
        let c = _mm512_srli_epi64::<51>(self.v[4]);
        self.v[4] = _mm512_and_si512(self.v[4], m51());
        self.v[0] = _mm512_madd52lo_epu64(self.v[0], c, _mm512_set1_epi64(19));
        carry_at(&mut self.v, 0);
        carry_at(&mut self.v, 1);
    }

    /**
     * Multiplicación por lanes: escolar 5x5 con pares madd52, cadena de
     * acarreo, pliegue x19 (x361 para la posición 10 de cola).
     */
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn mul(&self, other: &Self) -> Self {
        let mut t = [_mm512_setzero_si512(); 11];
        for i in 0..5 {
            for j in 0..5 {
                madd_pair(&mut t, i + j, self.v[i], other.v[j]);
            }
        }

        for k in 0..10 {
            carry_at(&mut t, k);
        }

        // Pliegue: posiciones 5..9 x19 hacia 0..4; posición 10 x361.
        let nineteen = _mm512_set1_epi64(19);
        let mut h = [_mm512_setzero_si512(); 6];
        h[..5].copy_from_slice(&t[..5]);
        for k in 5..10 {
            madd_pair(&mut h, k - 5, t[k], nineteen);
        }
        h[0] = _mm512_madd52lo_epu64(h[0], t[10], _mm512_set1_epi64(361));

        // h[5] recoge el derrame hi de k=9; se pliega x19 (es minúsculo).
        let spill = h[5];
        h[0] = _mm512_madd52lo_epu64(h[0], spill, nineteen);

        let mut out = Self { v: [h[0], h[1], h[2], h[3], h[4]] };
        out.carry_in_place();
        out
    }

    /// Cuadrado por lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn sq(&self) -> Self {
        self.mul(self)
    }

    /// Doble cuadrado por lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn sq2(&self) -> Self {
        let s = self.sq();
        let mut out = s.add(&s);
        out.carry_in_place();
        out
    }
}
