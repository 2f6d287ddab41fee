// [libs/core/math-engine/src/fp.rs]
/*!
 * =================================================================
 * APARATO: FINITE FIELD ENGINE F_p (V4.2 - RADIX-51 SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA MODULAR p = 2^255 - 19 DE TIEMPO CONSTANTE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CRANDALL FOLD: El acarreo que sale del limb superior se pliega
 *    como x19 (constante de un solo limb), el caso benigno del ciclo.
 * 2. BIAS DISCIPLINE: La sustracción suma 4p antes de restar; 4p es el
 *    múltiplo mínimo cuyo limb más pequeño absorbe cualquier operando
 *    no canónico producido en el grafo de llamadas.
 * 3. CT SOVEREIGNTY: cmov/cneg via 'subtle'; is_nonzero/is_negative
 *    operan solo sobre la forma canónica serializada.
 * 4. HYGIENE: Sin unwrap en rutas de producción; invert(0) = 0 (inv0
 *    de RFC 9380).
 *
 * # Mathematical Proof (Representation):
 * Un elemento es sum(limbs[i] * 2^(51*i)) con limbs <= 52 bits tras
 * propagación de acarreo. La forma canónica plenamente reducida cabe en
 * 32 bytes little-endian con el bit 255 en cero.
 * =================================================================
 */

use crate::errors::MathError;
use crate::secure::{ct_is_nonzero_u64, secure_erase};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Máscara de limb radix-2^51.
pub(crate) const MASK_51: u64 = (1u64 << 51) - 1;

/// 4p en radix-2^51: sesgo de sustracción (limb bajo = 4*(2^51 - 19)).
const FOUR_P: [u64; 5] = [
    0x1F_FFFF_FFFF_FFB4,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
    0x1F_FFFF_FFFF_FFFC,
];

/// 2p en radix-2^51: sesgo de negación.
const TWO_P: [u64; 5] = [
    0xF_FFFF_FFFF_FFDA,
    0xF_FFFF_FFFF_FFFE,
    0xF_FFFF_FFFF_FFFE,
    0xF_FFFF_FFFF_FFFE,
    0xF_FFFF_FFFF_FFFE,
];

/// sqrt(-1) mod p, requerido porque p = 1 (mod 4).
const SQRT_M1: Fp = Fp::from_raw_limbs([
    0x61B274A0EA0B0,
    0x0D5A5FC8F189D,
    0x7EF5E9CBD0C60,
    0x78595A6804C9E,
    0x2B8324804FC1D,
]);

/// (p + 3) / 8 en bytes little-endian, exponente del candidato a raíz.
const SQRT_EXP: [u8; 32] = [
    0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x0f,
];

/**
 * Elemento del campo finito F_p (p = 2^255 - 19).
 *
 * Representación interna: 5 limbs de 64 bits en radix-2^51 (Little-Endian).
 * La igualdad se define sobre la forma canónica serializada, nunca sobre
 * los limbs crudos (dos representaciones distintas pueden codificar el
 * mismo valor lógico).
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct Fp {
    pub(crate) limbs: [u64; 5],
}

impl Fp {
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

    /**
     * Constructor atómico desde un valor escalar de 64 bits.
     */
    #[inline(always)]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self { limbs: [value & MASK_51, value >> 51, 0, 0, 0] }
    }

    /// Propagación de acarreo con pliegue x19 (limbs de entrada < 2^63).
    #[inline(always)]
    fn carry_reduce(mut h: [u64; 5]) -> [u64; 5] {
        let mut c: u64 = 0;
        for limb in h.iter_mut() {
            *limb = limb.wrapping_add(c);
            c = *limb >> 51;
            *limb &= MASK_51;
        }
        h[0] += 19 * c;
        let c = h[0] >> 51;
        h[0] &= MASK_51;
        h[1] += c;
        let c = h[1] >> 51;
        h[1] &= MASK_51;
        h[2] += c;
        h
    }

    /// Normalización plena: TODOS los limbs quedan enmascarados a 51
    /// bits (carry_reduce deja holgura en el limb 2, inaceptable para el
    /// empaquetado de bytes y las conversiones de radix).
    ///
    /// Tres rondas de cadena+pliegue bastan: tras la segunda el valor es
    /// < 2^255 + 19, y un acarreo residual del limb 4 implica valor en
    /// [2^255, 2^255+19), cuyo pliegue lo deja < 2^5 con cadena limpia.
    #[inline]
    pub(crate) fn carry_reduce_full(mut h: [u64; 5]) -> [u64; 5] {
        for _ in 0..3 {
            let mut c: u64 = 0;
            for limb in h.iter_mut() {
                *limb = limb.wrapping_add(c);
                c = *limb >> 51;
                *limb &= MASK_51;
            }
            h[0] += 19 * c;
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

    /// Normaliza limbs a <= 51 bits. Obligatorio antes de usar un valor
    /// acumulado por varias adiciones como operando de subtract_modular
    /// (el sesgo 4p solo absorbe limbs de hasta 53 bits).
    #[inline(always)]
    #[must_use]
    pub(crate) fn normalize(&self) -> Self {
        Self { limbs: Self::carry_reduce(self.limbs) }
    }

    /**
     * Adición Modular: (self + other). Sin propagación de acarreo: dos
     * operandos de <= 52 bits producen limbs de <= 53 bits, dentro de la
     * ventana que absorben mul y sub.
     */
    #[inline(always)]
    #[must_use]
    pub fn add_modular(&self, other: &Self) -> Self {
        let f = &self.limbs;
        let g = &other.limbs;
        Self { limbs: [f[0] + g[0], f[1] + g[1], f[2] + g[2], f[3] + g[3], f[4] + g[4]] }
    }

    /**
     * Sustracción Modular: (self - other) mod p.
     *
     * # Mathematical Proof (4p Bias):
     * Se suma 4p antes de restar para mantener cada limb no negativo en
     * la representación sin signo; el acarreo final se pliega como x19.
     */
    #[inline(always)]
    #[must_use]
    pub fn subtract_modular(&self, other: &Self) -> Self {
        let f = &self.limbs;
        let g = &other.limbs;
        let mut h = [0u64; 5];
        let mut c: u64 = 0;
        for i in 0..5 {
            h[i] = f[i] + FOUR_P[i] - g[i] + c;
            c = h[i] >> 51;
            h[i] &= MASK_51;
        }
        h[0] += c * 19;
        Self { limbs: h }
    }

    /**
     * Negación Modular: (-self) mod p, con sesgo 2p.
     */
    #[inline(always)]
    #[must_use]
    pub fn negate_modular(&self) -> Self {
        let f = &self.limbs;
        let mut h = [0u64; 5];
        let mut c: u64 = 0;
        for i in 0..5 {
            h[i] = TWO_P[i] - f[i] + c;
            c = h[i] >> 51;
            h[i] &= MASK_51;
        }
        h[0] += c * 19;
        Self { limbs: h }
    }

    /**
     * Multiplicación Modular: (self * other) mod p.
     *
     * # Mathematical Proof (Schoolbook 5x5 + Pre-Fold x19):
     * t[k] = sum_{i+j=k} f_i*g_j para k < 5, más 19 * sum_{i+j=k+5},
     * aprovechando 2^255 = 19 (mod p). Los productos parciales viven en
     * u128; la cadena de acarreo final deja limbs <= 52 bits.
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
        for k in 5..9 {
            let fold = 19u128 * t[k];
            t[k - 5] += fold;
        }

        let mut h = [0u64; 5];
        let mut c: u128 = 0;
        for k in 0..5 {
            let v = t[k] + c;
            h[k] = (v as u64) & MASK_51;
            c = v >> 51;
        }
        h[0] += 19 * (c as u64);
        let c = h[0] >> 51;
        h[0] &= MASK_51;
        h[1] += c;
        let c = h[1] >> 51;
        h[1] &= MASK_51;
        h[2] += c;
        Self { limbs: h }
    }

    /// Cuadrado Modular: (self^2) mod p.
    #[inline(always)]
    #[must_use]
    pub fn square_modular(&self) -> Self {
        self.multiply_modular(self)
    }

    /// Doble cuadrado: 2 * self^2 (contrato sq2 de los kernels vectoriales).
    #[inline(always)]
    #[must_use]
    pub fn square_double_modular(&self) -> Self {
        let s = self.square_modular();
        s.add_modular(&s)
    }

    /**
     * Inversión Modular via cadena de Fermat z^(p-2).
     *
     * Cadena de adición fija (misma secuencia que la inversión clásica de
     * 2^255-19): 254 cuadrados + 11 multiplicaciones, tiempo constante.
     * inv0: invert(0) = 0.
     */
    #[must_use]
    pub fn invert_modular(&self) -> Self {
        let z = *self;
        let mut t0 = z.square_modular();
        let mut t1 = t0.square_modular();
        t1 = t1.square_modular();
        t1 = z.multiply_modular(&t1);
        t0 = t0.multiply_modular(&t1);
        let mut t2 = t0.square_modular();
        t1 = t1.multiply_modular(&t2);
        t2 = t1.square_modular();
        for _ in 0..4 {
            t2 = t2.square_modular();
        }
        t1 = t2.multiply_modular(&t1);
        t2 = t1.square_modular();
        for _ in 0..9 {
            t2 = t2.square_modular();
        }
        t2 = t2.multiply_modular(&t1);
        let mut t3 = t2.square_modular();
        for _ in 0..19 {
            t3 = t3.square_modular();
        }
        t2 = t3.multiply_modular(&t2);
        t2 = t2.square_modular();
        for _ in 0..9 {
            t2 = t2.square_modular();
        }
        t1 = t2.multiply_modular(&t1);
        t2 = t1.square_modular();
        for _ in 0..49 {
            t2 = t2.square_modular();
        }
        t2 = t2.multiply_modular(&t1);
        t3 = t2.square_modular();
        for _ in 0..99 {
            t3 = t3.square_modular();
        }
        t2 = t3.multiply_modular(&t2);
        t2 = t2.square_modular();
        for _ in 0..49 {
            t2 = t2.square_modular();
        }
        t1 = t2.multiply_modular(&t1);
        t1 = t1.square_modular();
        for _ in 0..4 {
            t1 = t1.square_modular();
        }
        let out = t1.multiply_modular(&t0);

        secure_erase(&mut t0.limbs);
        secure_erase(&mut t1.limbs);
        secure_erase(&mut t2.limbs);
        secure_erase(&mut t3.limbs);
        out
    }

    /**
     * Candidato a raíz cuadrada: z^((p+3)/8), corregido por sqrt(-1).
     *
     * # Mathematical Proof:
     * p = 1 (mod 4), así que el truco (m+1)/4 de Selene no aplica. Para
     * z residuo cuadrático, c = z^((p+3)/8) cumple c^2 = +-z; si c^2 = -z
     * entonces (c * sqrt(-1))^2 = z. La selección es cmov, no salto.
     *
     * El llamador DEBE verificar elevando al cuadrado: para no-residuos el
     * resultado es un valor cuyo cuadrado no es la entrada.
     */
    #[must_use]
    pub fn sqrt_candidate(&self) -> Self {
        // Exponenciación por barrido de bits del exponente público fijo.
        let mut acc = *self; // bit 251 del exponente es 1
        for bit in (0..251).rev() {
            acc = acc.square_modular();
            if (SQRT_EXP[bit >> 3] >> (bit & 7)) & 1 == 1 {
                acc = acc.multiply_modular(self);
            }
        }
        let corrected = acc.multiply_modular(&SQRT_M1);
        let square_ok = acc.square_modular().ct_equals(self);
        Self::conditional_select(&corrected, &acc, square_ok)
    }

    /**
     * Deserializa 32 bytes little-endian, descartando el bit 255.
     * No impone canonicidad (véase from_bytes_canonical).
     */
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
     * Deserialización estricta: rechaza bit 255 encendido o valor >= p.
     *
     * # Errors:
     * MathError::NonCanonicalFieldElement si la codificación no es canónica
     * (verificado por round-trip bytewise, constante para rutas honestas).
     */
    pub fn from_bytes_canonical(bytes: &[u8; 32]) -> Result<Self, MathError> {
        if bytes[31] & 0x80 != 0 {
            return Err(MathError::NonCanonicalFieldElement("F_p"));
        }
        let fe = Self::from_bytes_raw(bytes);
        let check = fe.to_bytes();
        let mut diff = 0u8;
        for i in 0..32 {
            diff |= check[i] ^ bytes[i];
        }
        if diff != 0 {
            return Err(MathError::NonCanonicalFieldElement("F_p"));
        }
        Ok(fe)
    }

    /**
     * Serializa a la forma canónica de 32 bytes little-endian.
     *
     * # Mathematical Proof (Add-19 Trick):
     * Tras normalizar, si t >= p entonces t + 19 >= 2^255 y el acarreo
     * del limb superior delata el desborde; los 255 bits bajos de (t+19)
     * son exactamente t - p. Selección por máscara, sin saltos.
     */
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut t = Self::carry_reduce_full(self.limbs);

        let mut u = [t[0] + 19, t[1], t[2], t[3], t[4]];
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
     * Reducción de 64 bytes (valor de 512 bits) mod p.
     *
     * out = lo + hi * 2^256 (mod p), con 2^256 mod p = 38. Los bits 255 de
     * cada mitad (descartados por from_bytes_raw) se reinyectan como
     * lo_b * 19 + hi_b * 722 (= 19 * 38).
     */
    #[must_use]
    pub fn reduce_wide(wide: &[u8; 64]) -> Self {
        let mut lo_half = [0u8; 32];
        let mut hi_half = [0u8; 32];
        lo_half.copy_from_slice(&wide[0..32]);
        hi_half.copy_from_slice(&wide[32..64]);

        let lo = Self::from_bytes_raw(&lo_half);
        let hi = Self::from_bytes_raw(&hi_half);
        let shifted = hi.multiply_modular(&Self::from_u64(38));
        let mut out = lo.add_modular(&shifted);

        let lo_bit = u64::from((wide[31] >> 7) & 1);
        let hi_bit = u64::from((wide[63] >> 7) & 1);
        out = out.add_modular(&Self::from_u64(lo_bit * 19 + hi_bit * 722));
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

    /// "Signo" del elemento: bit menos significativo de la forma canónica.
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
     * Inversión por lote (truco de Montgomery): 1 inversión + 3(n-1)
     * multiplicaciones. Los elementos cero producen cero (inv0), y las
     * entradas pueden solaparse con las salidas (in-place soportado).
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

impl ConditionallySelectable for Fp {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.ct_equals(other).into()
    }
}

impl Eq for Fp {}

impl Zeroize for Fp {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl core::fmt::Display for Fp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        write!(f, "{}", hex::encode(bytes))
    }
}
