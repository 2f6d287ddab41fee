// [libs/core/math-engine/src/fq.rs]
/*!
 * =================================================================
 * APARATO: FINITE FIELD ENGINE F_q (V4.3 - GAMMA CONVOLUTION)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA MODULAR q = 2^255 - gamma DE TIEMPO CONSTANTE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. MULTI-LIMB CRANDALL: gamma = 85737960593035654572250192257530476641
 *    ocupa 3 limbs radix-2^51; el pliegue del acarreo superior es una
 *    convolución que a su vez puede desbordar y exige una segunda pasada.
 * 2. BIAS DISCIPLINE: La sustracción suma 8q (no 4q): los limbs bajos de
 *    q son pequeños porque gamma ~ 2^127, y 4q no absorbe operandos de
 *    53 bits producidos por adiciones encadenadas.
 * 3. SAFEGCD SOVEREIGNTY: La inversión delega en divsteps de
 *    Bernstein-Yang (fq_divsteps.rs); q-2 carece de cadena de adición
 *    corta y Fermat sería ~10x más caro.
 * 4. HYGIENE: invert(0) = 0; sqrt via z^((q+1)/4) con verificación por
 *    cuadrado a cargo del llamador.
 * =================================================================
 */

use crate::errors::MathError;
use crate::fp::MASK_51;
use crate::fq_divsteps;
use crate::secure::{ct_is_nonzero_u64, secure_erase};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// gamma en radix-2^51 (3 limbs; gamma es de 127 bits).
pub(crate) const GAMMA_51: [u64; 3] = [0x12D8D_86D8_3861, 0x26913_5294_F229, 0x102_021F];

/// 2*gamma en radix-2^51 (2^256 mod q).
pub(crate) const TWO_GAMMA_51: [u64; 3] = [0x25B1B_0DB0_70C2, 0x4D226_A529_E452, 0x204_043E];

/// q en radix-2^51.
pub(crate) const Q_51: [u64; 5] = [
    0x6D272_7927_C79F,
    0x596EC_AD6B_0DD6,
    0x7FFFF_FEFD_FDE0,
    0x7FFFF_FFFF_FFFF,
    0x7FFFF_FFFF_FFFF,
];

/// 8q en radix-2^51: sesgo de sustracción (limb mínimo 8q[0] > 2^53).
pub(crate) const EIGHT_Q_51: [u64; 5] =
    [8 * Q_51[0], 8 * Q_51[1], 8 * Q_51[2], 8 * Q_51[3], 8 * Q_51[4]];

/// 2*gamma^2 mod q (= 2^511 mod q), corrección del bit 255 alto en
/// reduce_wide.
const TWO_GAMMA_SQ: Fq = Fq::from_raw_limbs([
    0x28CFD78352982,
    0x56A6427587796,
    0x22B9A18DCE136,
    0x1DC3C66F85E6F,
    0x208108E37F4CD,
]);

/// (q + 1) / 4 en bytes little-endian (q = 3 mod 4).
const SQRT_EXP: [u8; 32] = [
    0xe8, 0xf1, 0x49, 0x9e, 0x9c, 0xb4, 0xad, 0x1b, 0xd6, 0x5a, 0xd9, 0x2d, 0x0b, 0xde, 0xdf,
    0xef, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x1f,
];

/**
 * Elemento del campo finito F_q (q = 2^255 - gamma, primo de Crandall).
 *
 * Representación interna: 5 limbs de 64 bits en radix-2^51. La igualdad
 * se define sobre la forma canónica serializada.
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct Fq {
    pub(crate) limbs: [u64; 5],
}

impl Fq {
    /// Elemento neutro aditivo.
    pub const ZERO: Self = Self { limbs: [0; 5] };

    /// Elemento neutro multiplicativo.
    pub const ONE: Self = Self { limbs: [1, 0, 0, 0, 0] };

    /// Constructor const desde limbs radix-2^51 ya reducidos.
    #[inline(always)]
    #[must_use]
    pub(crate) const fn from_raw_limbs(limbs: [u64; 5]) -> Self {
        Self { limbs }
    }

    /// Acceso crudo a los limbs (capa SoA del motor de divisores).
    #[inline(always)]
    #[must_use]
    pub(crate) const fn raw_limbs(&self) -> [u64; 5] {
        self.limbs
    }

    /// Constructor atómico desde un valor escalar de 64 bits.
    #[inline(always)]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self { limbs: [value & MASK_51, value >> 51, 0, 0, 0] }
    }

    /**
     * Propagación de acarreo con pliegue gamma (limbs de entrada < 2^63).
     *
     * # Mathematical Proof (Two-Pass Fold):
     * carry * 2^255 = carry * gamma (mod q) se reinyecta en los limbs
     * 0..2. La convolución puede volver a desbordar el limb 4, de ahí la
     * segunda pasada completa y el acarreo parcial final 0 -> 2.
     */
    #[inline(always)]
    pub(crate) fn carry_reduce(mut h: [u64; 5]) -> [u64; 5] {
        let mut c: u64 = 0;
        for limb in h.iter_mut() {
            *limb = limb.wrapping_add(c);
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        for m in 0..3 {
            h[m] += c * GAMMA_51[m];
        }
        let mut c: u64 = 0;
        for limb in h.iter_mut() {
            *limb = limb.wrapping_add(c);
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        for m in 0..3 {
            h[m] += c * GAMMA_51[m];
        }
        let c = h[0] >> 51;
        h[0] &= MASK_51;
        h[1] += c;
        let c = h[1] >> 51;
        h[1] &= MASK_51;
        h[2] += c;
        h
    }

    /// Normalización plena: TODOS los limbs enmascarados a 51 bits (la
    /// variante rápida deja holgura en el limb 2, inaceptable para el
    /// empaquetado de bytes y la conversión a signed62).
    ///
    /// Tres rondas de cadena+pliegue convergen: un acarreo residual del
    /// limb 4 implica valor en [2^255, 2^255 + gamma), cuyo pliegue lo
    /// deja < 2^128 con cadena final limpia.
    #[inline]
    pub(crate) fn carry_reduce_full(mut h: [u64; 5]) -> [u64; 5] {
        for _ in 0..3 {
            let mut c: u64 = 0;
            for limb in h.iter_mut() {
                *limb = limb.wrapping_add(c);
                c = *limb >> 51;
                *limb &= MASK_51;
            }
            for m in 0..3 {
                h[m] += c * GAMMA_51[m];
            }
        }
        let mut c: u64 = 0;
        for limb in h.iter_mut() {
            *limb = limb.wrapping_add(c);
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        debug_assert_eq!(c, 0);
        h
    }

    /// Normaliza limbs a <= 51 bits (obligatorio antes de alimentar a
    /// subtract_modular valores acumulados por varias adiciones).
    #[inline(always)]
    #[must_use]
    pub(crate) fn normalize(&self) -> Self {
        Self { limbs: Self::carry_reduce(self.limbs) }
    }

    /// Adición Modular sin propagación de acarreo.
    #[inline(always)]
    #[must_use]
    pub fn add_modular(&self, other: &Self) -> Self {
        let f = &self.limbs;
        let g = &other.limbs;
        Self { limbs: [f[0] + g[0], f[1] + g[1], f[2] + g[2], f[3] + g[3], f[4] + g[4]] }
    }

    /**
     * Sustracción Modular: (self - other) mod q con sesgo 8q.
     *
     * # Mathematical Proof (8q Bias):
     * 8q[0] = 0x369393C93E3CF8 > 2^53: absorbe cualquier operando de hasta
     * 53 bits. 4q no basta porque gamma hace pequeños los limbs bajos de q.
     * El acarreo de salida (<= 8) se pliega como carry * gamma.
     */
    #[inline(always)]
    #[must_use]
    pub fn subtract_modular(&self, other: &Self) -> Self {
        let f = &self.limbs;
        let g = &other.limbs;
        let mut h = [0u64; 5];
        let mut c: u64 = 0;
        for i in 0..5 {
            h[i] = f[i] + EIGHT_Q_51[i] - g[i] + c;
            c = h[i] >> 51;
            h[i] &= MASK_51;
        }
        for m in 0..3 {
            h[m] += c * GAMMA_51[m];
        }
        let mut c: u64 = 0;
        for limb in h.iter_mut() {
            *limb = limb.wrapping_add(c);
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        for m in 0..3 {
            h[m] += c * GAMMA_51[m];
        }
        let c = h[0] >> 51;
        h[0] &= MASK_51;
        h[1] += c;
        let c = h[1] >> 51;
        h[1] &= MASK_51;
        h[2] += c;
        Self { limbs: h }
    }

    /// Negación Modular: 0 - self con el mismo sesgo 8q.
    #[inline(always)]
    #[must_use]
    pub fn negate_modular(&self) -> Self {
        Self::ZERO.subtract_modular(self)
    }

    /**
     * Multiplicación Modular: (self * other) mod q.
     *
     * # Mathematical Proof (Schoolbook 5x5 + Doble Pasada de Crandall):
     * El producto completo ocupa las posiciones 0..8. Tras una cadena de
     * acarreo, las posiciones 5..10 se convolucionan con gamma (3 limbs)
     * hacia 0..7; el residuo 5..8 de esa pasada exige una segunda
     * convolución, y el sobrante final (pequeño) una tercera de un solo
     * término. Cada etapa opera en u128 con holgura demostrada.
     */
    #[must_use]
    pub fn multiply_modular(&self, other: &Self) -> Self {
        #[cfg(feature = "ct-audit")]
        crate::audit::record_field_op();

        let f = &self.limbs;
        let g = &other.limbs;
        let mut t = [0u128; 9];
        for i in 0..5 {
            for j in 0..5 {
                t[i + j] += (f[i] as u128) * (g[j] as u128);
            }
        }

        // Etapa A: cadena de acarreo hacia posiciones 51-bit r[0..10].
        let mut r = [0u64; 11];
        let mut c: u128 = 0;
        for k in 0..9 {
            let v = t[k] + c;
            r[k] = (v as u64) & MASK_51;
            c = v >> 51;
        }
        r[9] = (c as u64) & MASK_51;
        r[10] = (c >> 51) as u64;

        // Etapa B: primera convolución gamma, posiciones 5..10 -> 0..7.
        let mut a = [0u128; 8];
        for k in 0..5 {
            a[k] = r[k] as u128;
        }
        for k in 5..11 {
            let u = k - 5;
            for m in 0..3 {
                a[u + m] += (r[k] as u128) * (GAMMA_51[m] as u128);
            }
        }

        // Etapa C: acarreo intermedio.
        let mut mid = [0u64; 9];
        let mut c: u128 = 0;
        for k in 0..8 {
            let v = a[k] + c;
            mid[k] = (v as u64) & MASK_51;
            c = v >> 51;
        }
        mid[8] = c as u64;

        // Etapa D: segunda convolución gamma, posiciones 5..8 -> 0..5.
        let mut b = [0u128; 6];
        for k in 0..5 {
            b[k] = mid[k] as u128;
        }
        for k in 5..9 {
            let u = k - 5;
            for m in 0..3 {
                let term = (mid[k] as u128) * (GAMMA_51[m] as u128);
                let pos = u + m;
                if pos < 5 {
                    b[pos] += term;
                } else {
                    b[5] += term << (51 * (pos - 5));
                }
            }
        }

        // Etapa E: acarreo final + pliegue del sobrante (un término).
        let mut h = [0u64; 5];
        let mut c: u128 = 0;
        for k in 0..5 {
            let v = b[k] + c;
            h[k] = (v as u64) & MASK_51;
            c = v >> 51;
        }
        let leftover = c + b[5];
        let mut wide = [0u128; 5];
        for k in 0..5 {
            wide[k] = h[k] as u128;
        }
        for m in 0..3 {
            wide[m] += leftover * (GAMMA_51[m] as u128);
        }
        let mut c: u128 = 0;
        for k in 0..5 {
            let v = wide[k] + c;
            h[k] = (v as u64) & MASK_51;
            c = v >> 51;
        }
        let mut hh = h;
        for m in 0..3 {
            hh[m] += (c as u64) * GAMMA_51[m];
        }
        let c = hh[0] >> 51;
        hh[0] &= MASK_51;
        hh[1] += c;
        let c = hh[1] >> 51;
        hh[1] &= MASK_51;
        hh[2] += c;
        Self { limbs: hh }
    }

    /// Cuadrado Modular.
    #[inline(always)]
    #[must_use]
    pub fn square_modular(&self) -> Self {
        self.multiply_modular(self)
    }

    /// Doble cuadrado: 2 * self^2.
    #[inline(always)]
    #[must_use]
    pub fn square_double_modular(&self) -> Self {
        let s = self.square_modular();
        s.add_modular(&s)
    }

    /**
     * Inversión Modular via safegcd/divsteps de Bernstein-Yang.
     *
     * 12 rondas externas x 62 divsteps en representación signed62,
     * tiempo constante. inv0: invert(0) = 0.
     *
     * # Performance:
     * ~10x más rápida que Fermat sobre este primo: q-2 carece de cadena
     * de adición corta y cada multiplicación paga la convolución gamma.
     */
    #[must_use]
    pub fn invert_modular(&self) -> Self {
        fq_divsteps::invert(self)
    }

    /**
     * Candidato a raíz cuadrada: z^((q+1)/4) (q = 3 mod 4).
     *
     * Para z residuo cuadrático esta es la raíz principal; el llamador
     * DEBE verificar elevando al cuadrado.
     */
    #[must_use]
    pub fn sqrt_candidate(&self) -> Self {
        let z = self.normalize();
        let mut acc = z; // bit 252 del exponente es 1
        for bit in (0..252).rev() {
            acc = acc.square_modular();
            if (SQRT_EXP[bit >> 3] >> (bit & 7)) & 1 == 1 {
                acc = acc.multiply_modular(&z);
            }
        }
        acc
    }

    /// Deserializa 32 bytes little-endian, descartando el bit 255.
    #[must_use]
    pub fn from_bytes_raw(bytes: &[u8; 32]) -> Self {
        let load = |offset: usize| -> u64 {
            let mut w = [0u8; 8];
            w.copy_from_slice(&bytes[offset..offset + 8]);
            u64::from_le_bytes(w)
        };
        let w0 = load(0);
        let w1 = load(8);
        let w2 = load(16);
        let w3 = load(24) & 0x7FFF_FFFF_FFFF_FFFF;
        Self {
            limbs: [
                w0 & MASK_51,
                ((w0 >> 51) | (w1 << 13)) & MASK_51,
                ((w1 >> 38) | (w2 << 26)) & MASK_51,
                ((w2 >> 25) | (w3 << 39)) & MASK_51,
                w3 >> 12,
            ],
        }
    }

    /**
     * Deserialización estricta: rechaza bit 255 encendido o valor >= q.
     *
     * # Errors:
     * MathError::NonCanonicalFieldElement en codificación no canónica.
     */
    pub fn from_bytes_canonical(bytes: &[u8; 32]) -> Result<Self, MathError> {
        if bytes[31] & 0x80 != 0 {
            return Err(MathError::NonCanonicalFieldElement("F_q"));
        }
        let fe = Self::from_bytes_raw(bytes);
        let check = fe.to_bytes();
        let mut diff = 0u8;
        for i in 0..32 {
            diff |= check[i] ^ bytes[i];
        }
        if diff != 0 {
            return Err(MathError::NonCanonicalFieldElement("F_q"));
        }
        Ok(fe)
    }

    /**
     * Serializa a la forma canónica de 32 bytes little-endian.
     *
     * # Mathematical Proof (Add-Gamma Trick):
     * Si t >= q entonces t + gamma >= 2^255 y el acarreo del limb 4 delata
     * el desborde; los 255 bits bajos de (t + gamma) son t - q. Selección
     * por máscara.
     */
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut t = Self::carry_reduce_full(self.limbs);

        let mut u = [t[0] + GAMMA_51[0], t[1] + GAMMA_51[1], t[2] + GAMMA_51[2], t[3], t[4]];
        let mut c: u64 = 0;
        for limb in u.iter_mut() {
            *limb += c;
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        let mask = 0u64.wrapping_sub(c);
        for i in 0..5 {
            t[i] = (t[i] & !mask) | (u[i] & mask);
        }

        let w0 = t[0] | (t[1] << 51);
        let w1 = (t[1] >> 13) | (t[2] << 38);
        let w2 = (t[2] >> 26) | (t[3] << 25);
        let w3 = (t[3] >> 39) | (t[4] << 12);

        let mut s = [0u8; 32];
        s[0..8].copy_from_slice(&w0.to_le_bytes());
        s[8..16].copy_from_slice(&w1.to_le_bytes());
        s[16..24].copy_from_slice(&w2.to_le_bytes());
        s[24..32].copy_from_slice(&w3.to_le_bytes());
        s
    }

    /**
     * Reducción de 64 bytes (valor de 512 bits) mod q.
     *
     * out = lo + hi * 2gamma (mod q), ya que 2^256 mod q = 2*gamma. Los
     * bits 255 descartados se reinyectan: lo_b * gamma + hi_b * 2gamma^2
     * (= 2^255 y 2^511 mod q respectivamente).
     */
    #[must_use]
    pub fn reduce_wide(wide: &[u8; 64]) -> Self {
        let mut lo_half = [0u8; 32];
        let mut hi_half = [0u8; 32];
        lo_half.copy_from_slice(&wide[0..32]);
        hi_half.copy_from_slice(&wide[32..64]);

        let lo = Self::from_bytes_raw(&lo_half);
        let hi = Self::from_bytes_raw(&hi_half);
        let two_gamma =
            Self::from_raw_limbs([TWO_GAMMA_51[0], TWO_GAMMA_51[1], TWO_GAMMA_51[2], 0, 0]);
        let shifted = hi.multiply_modular(&two_gamma);
        let mut out = lo.add_modular(&shifted).normalize();

        let gamma_fe = Self::from_raw_limbs([GAMMA_51[0], GAMMA_51[1], GAMMA_51[2], 0, 0]);
        let lo_bit = Choice::from((wide[31] >> 7) & 1);
        let hi_bit = Choice::from((wide[63] >> 7) & 1);
        let corr_lo = Self::conditional_select(&Self::ZERO, &gamma_fe, lo_bit);
        let corr_hi = Self::conditional_select(&Self::ZERO, &TWO_GAMMA_SQ, hi_bit);
        out = out.add_modular(&corr_lo).add_modular(&corr_hi).normalize();
        out
    }

    /// 1 si el elemento es distinto de cero (sobre la forma canónica).
    #[inline]
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        let s = self.to_bytes();
        let mut d = 0u64;
        for byte in s {
            d |= u64::from(byte);
        }
        ct_is_nonzero_u64(d) == 1
    }

    /// "Signo": bit menos significativo de la forma canónica.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.to_bytes()[0] & 1 == 1
    }

    /// Igualdad de tiempo constante sobre formas canónicas.
    #[inline]
    #[must_use]
    pub fn ct_equals(&self, other: &Self) -> Choice {
        use subtle::ConstantTimeEq;
        self.to_bytes().ct_eq(&other.to_bytes())
    }

    /// Negación condicional de tiempo constante.
    #[inline(always)]
    pub fn conditional_negate_assign(&mut self, flag: Choice) {
        let negated = self.negate_modular();
        *self = Self::conditional_select(self, &negated, flag);
    }

    /**
     * Inversión por lote (truco de Montgomery). inv0 sobre lanes cero;
     * entradas y salidas pueden solaparse.
     */
    pub fn batch_invert(out: &mut [Self], input: &[Self]) {
        debug_assert_eq!(out.len(), input.len());
        let n = input.len();
        if n == 0 {
            return;
        }
        if n == 1 {
            out[0] = if input[0].is_nonzero() { input[0].invert_modular() } else { Self::ZERO };
            return;
        }

        let mut acc = vec![Self::ZERO; n];
        acc[0] = input[0];
        for i in 1..n {
            acc[i] = if input[i].is_nonzero() {
                acc[i - 1].multiply_modular(&input[i])
            } else {
                acc[i - 1]
            };
        }

        let mut inv = acc[n - 1].invert_modular();

        for i in (1..n).rev() {
            if input[i].is_nonzero() {
                let saved = input[i];
                out[i] = inv.multiply_modular(&acc[i - 1]);
                inv = inv.multiply_modular(&saved);
            } else {
                out[i] = Self::ZERO;
            }
        }
        out[0] = if input[0].is_nonzero() { inv } else { Self::ZERO };

        secure_erase(&mut inv.limbs);
        for fe in acc.iter_mut() {
            secure_erase(&mut fe.limbs);
        }
    }
}

impl ConditionallySelectable for Fq {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}

impl PartialEq for Fq {
    fn eq(&self, other: &Self) -> bool {
        self.ct_equals(other).into()
    }
}

impl Eq for Fq {}

impl Zeroize for Fq {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl core::fmt::Display for Fq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        write!(f, "{}", hex::encode(bytes))
    }
}
