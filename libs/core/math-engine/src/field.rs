// [libs/core/math-engine/src/field.rs]
/*!
 * =================================================================
 * APARATO: PRIME FIELD CONTRACT (V2.0 - CYCLE SEAM)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CONTRATO COMÚN F_p / F_q PARA LOS MOTORES GENÉRICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL SOVEREIGNTY: El ciclo exige que cada motor (curva, polinomio,
 *    ECFFT, divisores) opere idénticamente sobre ambos campos; este
 *    trait es la única costura.
 * 2. RAW LIMB ACCESS: Ambos campos comparten la forma física 5 x u64
 *    radix-2^51, lo que habilita la capa SoA del dominio de evaluación
 *    sin copias.
 * 3. CT PRESERVATION: El contrato expone cmov/cneg tipados con 'subtle'
 *    para que el código genérico no pueda degradar a saltos.
 * =================================================================
 */

use crate::errors::MathError;
use crate::fp::Fp;
use crate::fq::Fq;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Contrato de campo primo de 255 bits en radix-2^51.
///
/// Implementado exactamente por [`Fp`] y [`Fq`]; los motores genéricos del
/// ciclo (ley de grupo, escalar, polinomios, ECFFT, divisores) se escriben
/// una sola vez contra esta costura.
pub trait PrimeField:
    Copy + Clone + core::fmt::Debug + PartialEq + Eq + ConditionallySelectable + Zeroize + Default
{
    /// Neutro aditivo.
    const ZERO: Self;
    /// Neutro multiplicativo.
    const ONE: Self;
    /// Nombre del campo para diagnósticos.
    const FIELD_NAME: &'static str;

    /// (self + other), acarreo diferido.
    fn add_modular(&self, other: &Self) -> Self;
    /// (self - other) mod m, con el sesgo del campo (4p / 8q).
    fn subtract_modular(&self, other: &Self) -> Self;
    /// (-self) mod m.
    fn negate_modular(&self) -> Self;
    /// (self * other) mod m.
    fn multiply_modular(&self, other: &Self) -> Self;
    /// self^2 mod m.
    fn square_modular(&self) -> Self;
    /// 2 * self^2 mod m.
    fn square_double_modular(&self) -> Self;
    /// self^{-1} mod m; inv0(0) = 0.
    fn invert_modular(&self) -> Self;
    /// Candidato a raíz cuadrada; el llamador verifica elevando al cuadrado.
    fn sqrt_candidate(&self) -> Self;
    /// Normaliza limbs a <= 51 bits.
    fn normalize(&self) -> Self;

    /// Deserialización permisiva (bit 255 descartado).
    fn from_bytes_raw(bytes: &[u8; 32]) -> Self;
    /// Deserialización estricta (canónica o error).
    fn from_bytes_canonical(bytes: &[u8; 32]) -> Result<Self, MathError>;
    /// Serialización canónica de 32 bytes LE.
    fn to_bytes(&self) -> [u8; 32];
    /// Reducción de 64 bytes mod m.
    fn reduce_wide(wide: &[u8; 64]) -> Self;

    /// Constructor desde u64.
    fn from_u64(value: u64) -> Self;
    /// Limbs crudos radix-2^51 (capa SoA).
    fn raw_limbs(&self) -> [u64; 5];
    /// Reconstrucción desde limbs crudos.
    fn from_raw_limbs(limbs: [u64; 5]) -> Self;

    /// true si != 0 (forma canónica).
    fn is_nonzero(&self) -> bool;
    /// LSB de la forma canónica.
    fn is_negative(&self) -> bool;
    /// Igualdad CT.
    fn ct_equals(&self, other: &Self) -> Choice;
    /// Negación condicional CT.
    fn conditional_negate_assign(&mut self, flag: Choice);

    /// Inversión por lote (Montgomery), inv0 por lane.
    fn batch_invert(out: &mut [Self], input: &[Self]);

    /// Elemento pequeño con signo: val >= 0 directo, val < 0 como m - |val|.
    fn from_small_signed(value: i64) -> Self {
        if value >= 0 {
            Self::from_u64(value as u64)
        } else {
            Self::from_u64(value.unsigned_abs()).negate_modular()
        }
    }
}

macro_rules! impl_prime_field {
    ($field:ty, $name:expr) => {
        impl PrimeField for $field {
            const ZERO: Self = <$field>::ZERO;
            const ONE: Self = <$field>::ONE;
            const FIELD_NAME: &'static str = $name;

            #[inline(always)]
            fn add_modular(&self, other: &Self) -> Self {
                <$field>::add_modular(self, other)
            }
            #[inline(always)]
            fn subtract_modular(&self, other: &Self) -> Self {
                <$field>::subtract_modular(self, other)
            }
            #[inline(always)]
            fn negate_modular(&self) -> Self {
                <$field>::negate_modular(self)
            }
            #[inline(always)]
            fn multiply_modular(&self, other: &Self) -> Self {
                <$field>::multiply_modular(self, other)
            }
            #[inline(always)]
            fn square_modular(&self) -> Self {
                <$field>::square_modular(self)
            }
            #[inline(always)]
            fn square_double_modular(&self) -> Self {
                <$field>::square_double_modular(self)
            }
            #[inline(always)]
            fn invert_modular(&self) -> Self {
                <$field>::invert_modular(self)
            }
            #[inline(always)]
            fn sqrt_candidate(&self) -> Self {
                <$field>::sqrt_candidate(self)
            }
            #[inline(always)]
            fn normalize(&self) -> Self {
                <$field>::normalize(self)
            }
            #[inline(always)]
            fn from_bytes_raw(bytes: &[u8; 32]) -> Self {
                <$field>::from_bytes_raw(bytes)
            }
            #[inline(always)]
            fn from_bytes_canonical(bytes: &[u8; 32]) -> Result<Self, MathError> {
                <$field>::from_bytes_canonical(bytes)
            }
            #[inline(always)]
            fn to_bytes(&self) -> [u8; 32] {
                <$field>::to_bytes(self)
            }
            #[inline(always)]
            fn reduce_wide(wide: &[u8; 64]) -> Self {
                <$field>::reduce_wide(wide)
            }
            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                <$field>::from_u64(value)
            }
            #[inline(always)]
            fn raw_limbs(&self) -> [u64; 5] {
                <$field>::raw_limbs(self)
            }
            #[inline(always)]
            fn from_raw_limbs(limbs: [u64; 5]) -> Self {
                <$field>::from_raw_limbs(limbs)
            }
            #[inline(always)]
            fn is_nonzero(&self) -> bool {
                <$field>::is_nonzero(self)
            }
            #[inline(always)]
            fn is_negative(&self) -> bool {
                <$field>::is_negative(self)
            }
            #[inline(always)]
            fn ct_equals(&self, other: &Self) -> Choice {
                <$field>::ct_equals(self, other)
            }
            #[inline(always)]
            fn conditional_negate_assign(&mut self, flag: Choice) {
                <$field>::conditional_negate_assign(self, flag)
            }
            #[inline]
            fn batch_invert(out: &mut [Self], input: &[Self]) {
                <$field>::batch_invert(out, input)
            }
        }
    };
}

impl_prime_field!(Fp, "F_p");
impl_prime_field!(Fq, "F_q");
