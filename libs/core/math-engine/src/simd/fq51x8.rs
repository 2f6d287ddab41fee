// [libs/core/math-engine/src/simd/fq51x8.rs]
/*!
 * =================================================================
 * APARATO: FQ 8-WAY IFMA ENGINE (V3.3 - MADD52 GAMMA)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: 8 ELEMENTOS F_q EN PARALELO SOBRE REGISTROS ZMM
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. IFMA PAIRS: madd52lo/madd52hi producen las mitades de un producto
 *    52x52 -> 104; la mitad alta se desplaza un bit a la izquierda para
 *    recombinar en radix-2^51 (2^52 / 2^51 = 2).
 * 2. GAMMA CONVOLUTION: el pliegue del acarreo superior es una
 *    convolución 6x3 (posiciones 5..10 x gamma[0..2]); el residuo de la
 *    primera pasada exige una segunda, y el residuo final (demostrado
 *    <= 1 incluso con limbs de 52 bits) un pliegue lo-only.
 * 3. INPUT CONTRACT: todo operando de madd52 debe tener limbs < 2^52;
 *    tras una adición los limbs quedan en 52 bits justos, aún dentro de
 *    la ventana.
 *
 * # Safety:
 * Exige AVX-512F + AVX-512 IFMA; garantizado por el despacho.
 * =================================================================
 */

#![allow(unsafe_op_in_unsafe_fn)]

use crate::fq::{Fq, EIGHT_Q_51, GAMMA_51};
use core::arch::x86_64::*;

/// 8 elementos F_q en paralelo: v[i] = limb radix-2^51 i de los 8 lanes.
#[derive(Clone, Copy)]
pub struct Fq51x8 {
    pub(crate) v: [__m512i; 5],
}

#[inline(always)]
unsafe fn m51() -> __m512i {
    _mm512_set1_epi64(((1u64 << 51) - 1) as i64)
}

#[inline(always)]
unsafe fn gamma(m: usize) -> __m512i {
    _mm512_set1_epi64(GAMMA_51[m] as i64)
}

/// Paso de acarreo radix-2^51: t[i] -> t[i+1].
#[inline(always)]
unsafe fn carry_at(t: &mut [__m512i], i: usize) {
    let c = _mm512_srli_epi64::<51>(t[i]);
    t[i + 1] = _mm512_add_epi64(t[i + 1], c);
    t[i] = _mm512_and_si512(t[i], m51());
}

/// Acumula val * mult en t[pos] (lo52) y t[pos+1] (2 * hi52).
#[inline(always)]
unsafe fn madd_pair(t: &mut [__m512i], pos: usize, val: __m512i, mult: __m512i) {
    t[pos] = _mm512_madd52lo_epu64(t[pos], val, mult);
    let hi = _mm512_madd52hi_epu64(_mm512_setzero_si512(), val, mult);
    t[pos + 1] = _mm512_add_epi64(t[pos + 1], _mm512_slli_epi64::<1>(hi));
}

impl Fq51x8 {
    /// Los 8 lanes a cero.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn zero() -> Self {
        Self { v: [_mm512_setzero_si512(); 5] }
    }

    /// Carga 8 elementos escalares en los lanes.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn pack(elems: &[Fq; 8]) -> Self {
        let mut reduced = [[0u64; 5]; 8];
        for (k, e) in elems.iter().enumerate() {
            reduced[k] = Fq::carry_reduce(e.limbs);
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
    pub unsafe fn splat(e: &Fq) -> Self {
        let l = Fq::carry_reduce(e.limbs);
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            v[i] = _mm512_set1_epi64(l[i] as i64);
        }
        Self { v }
    }

    /// Extrae los 8 lanes como elementos escalares.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn extract(&self) -> [Fq; 8] {
        let mut norm = *self;
        norm.carry_in_place();
        let mut lanes = [[0u64; 8]; 5];
        for i in 0..5 {
            lanes[i] = core::mem::transmute::<__m512i, [u64; 8]>(norm.v[i]);
        }
        let mut out = [Fq::ZERO; 8];
        for lane in 0..8 {
            let mut limbs = [0u64; 5];
            for i in 0..5 {
                limbs[i] = lanes[i][lane];
            }
            out[lane] = Fq::from_raw_limbs(limbs);
        }
        out
    }

    /// Adición por lanes: dos entradas <= 51 bits dan <= 52 bits, dentro
    /// de la ventana de madd52. Sin acarreo.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn add(&self, other: &Self) -> Self {
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            v[i] = _mm512_add_epi64(self.v[i], other.v[i]);
        }
        Self { v }
    }

    /// Sustracción por lanes con sesgo 8q + normalización.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn sub(&self, other: &Self) -> Self {
        let mut v = [_mm512_setzero_si512(); 5];
        for i in 0..5 {
            let bias = _mm512_set1_epi64(EIGHT_Q_51[i] as i64);
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

    /// cmov por lanes con máscara toda-unos por lane.
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn cmov(&mut self, other: &Self, mask: __m512i) {
        for i in 0..5 {
            let keep = _mm512_andnot_si512(mask, self.v[i]);
            let take = _mm512_and_si512(mask, other.v[i]);
            self.v[i] = _mm512_or_si512(keep, take);
        }
    }

    /**
     * Acarreo con envoltura gamma: cadena 0 -> 4, pliegue del acarreo
     * como c * gamma via pares madd52, re-acarreo 0 -> 4.
     */
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn carry_in_place(&mut self) {
        for i in 0..4 {
            carry_at(&mut self.v, i);
        }
        let c = _mm512_srli_epi64::<51>(self.v[4]);
        self.v[4] = _mm512_and_si512(self.v[4], m51());

        madd_pair(&mut self.v, 0, c, gamma(0));
        madd_pair(&mut self.v, 1, c, gamma(1));
        madd_pair(&mut self.v, 2, c, gamma(2));

        for i in 0..4 {
            carry_at(&mut self.v, i);
        }
    }

    /**
     * Multiplicación por lanes: escolar 5x5 con pares madd52, cadena de
     * acarreo, doble convolución gamma y pliegue lo-only del residuo.
     *
     * # Mathematical Proof (Residue Bound):
     * Tras la segunda convolución y su cadena de acarreo, las posiciones
     * 5..7 y el acarreo de cola valen a lo sumo 1 (verificado con limbs
     * de entrada de 52 bits plenos), de modo que el pliegue final
     * residuo * gamma cabe íntegro en la mitad baja del madd.
     */
    #[target_feature(enable = "avx512f", enable = "avx512ifma")]
    pub unsafe fn mul(&self, other: &Self) -> Self {
        // Escolar 5x5: lo en i+j, 2*hi en i+j+1. Posiciones 0..9.
        let mut t = [_mm512_setzero_si512(); 11];
        for i in 0..5 {
            for j in 0..5 {
                madd_pair(&mut t, i + j, self.v[i], other.v[j]);
            }
        }

        // Cadena de acarreo 0..9; el acarreo final puebla t[10].
        for k in 0..10 {
            carry_at(&mut t, k);
        }

        // Primera convolución gamma: posiciones 5..10 -> 0..8.
        let mut a = [_mm512_setzero_si512(); 10];
        a[..5].copy_from_slice(&t[..5]);
        for k in 5..11 {
            let u = k - 5;
            for m in 0..3 {
                madd_pair(&mut a, u + m, t[k], gamma(m));
            }
        }

        // Acarreo 0..8; el acarreo final puebla a[9].
        for k in 0..9 {
            carry_at(&mut a, k);
        }

        // Segunda convolución gamma: posiciones 5..9 -> 0..7.
        let mut b = [_mm512_setzero_si512(); 9];
        b[..5].copy_from_slice(&a[..5]);
        for k in 5..10 {
            let u = k - 5;
            for m in 0..3 {
                madd_pair(&mut b, u + m, a[k], gamma(m));
            }
        }

        // Acarreo 0..7.
        for k in 0..8 {
            carry_at(&mut b, k);
        }

        // Pliegue lo-only del residuo (posiciones 5..7, valores <= 1:
        // los productos residuo * gamma[m] caben en 52 bits exactos).
        let mut h = [_mm512_setzero_si512(); 5];
        h.copy_from_slice(&b[..5]);
        for idx in 0..3 {
            let residue = b[5 + idx];
            for m in 0..3 {
                let pos = idx + m;
                if pos < 5 {
                    h[pos] = _mm512_madd52lo_epu64(h[pos], residue, gamma(m));
                }
            }
        }

        let mut out = Self { v: h };
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
