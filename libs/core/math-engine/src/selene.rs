// [libs/core/math-engine/src/selene.rs]
/*!
 * =================================================================
 * APARATO: SELENE CURVE CONFIGURATION (V3.0 - CYCLE HALF BETA)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: PARÁMETROS Y ESCALARES DE LA CURVA SELENE
 *
 * Selene: y^2 = x^3 - 3x + b sobre F_q (q = 2^255 - gamma).
 * Orden del grupo = p = 2^255 - 19. Cofactor 1.
 * Propiedad de ciclo: los escalares de Selene viven en F_p.
 *
 * b = 50691664119640283727448954162351551669994268339720539671652090628799494505816
 * =================================================================
 */

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::errors::MathError;
use crate::fp::Fp;
use crate::fq::Fq;

/// Marcador de la curva Selene.
#[derive(Debug, Clone, Copy)]
pub struct SeleneCurve;

impl CycleCurve for SeleneCurve {
    type Field = Fq;

    const B: Fq = Fq::from_raw_limbs([
        0x60983CB5A4558,
        0x3E0D5D201CD1B,
        0x7FF89E7CE512F,
        0x360BFA8DDD2CA,
        0x7012771369587,
    ]);

    const GENERATOR_X: Fq = Fq::from_raw_limbs([0x1, 0x0, 0x0, 0x0, 0x0]);

    const GENERATOR_Y: Fq = Fq::from_raw_limbs([
        0x60AA6A1D3FDD2,
        0x3191E1366EE83,
        0x572097E4E2EC6,
        0x5492BE498BBA2,
        0x7A19D927B85CC,
    ]);

    /// Orden = p = 2^255 - 19.
    const ORDER_BYTES: [u8; 32] = [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ];

    const CURVE_NAME: &'static str = "Selene";
}

/// Punto Jacobiano sobre Selene.
pub type SelenePoint = JacobianPoint<SeleneCurve>;

/// Punto afín sobre Selene.
pub type SeleneAffine = AffinePoint<SeleneCurve>;

/**
 * Escalar de Selene: elemento de F_p (orden del grupo = p).
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeleneScalar(pub Fp);

impl SeleneScalar {
    /// Escalar cero.
    pub const ZERO: Self = Self(Fp::ZERO);
    /// Escalar uno.
    pub const ONE: Self = Self(Fp::ONE);

    /// true si el escalar es cero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.0.is_nonzero()
    }

    /// Suma mod p.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self(self.0.add_modular(&other.0).normalize())
    }

    /// Resta mod p.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self(self.0.subtract_modular(&other.0))
    }

    /// Producto mod p.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0.multiply_modular(&other.0))
    }

    /// Negación mod p.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.0.negate_modular())
    }

    /// Cuadrado mod p.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(self.0.square_modular())
    }

    /// Fusión multiplicar-sumar: a*b + c (mod p).
    #[must_use]
    pub fn muladd(a: &Self, b: &Self, c: &Self) -> Self {
        Self(a.0.multiply_modular(&b.0).add_modular(&c.0).normalize())
    }

    /// Inverso modular; None para cero.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(Self(self.0.invert_modular()))
    }

    /// Serialización canónica de 32 bytes LE.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Deserialización estricta: rechaza valores >= p.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, MathError> {
        Fp::from_bytes_canonical(bytes)
            .map(Self)
            .map_err(|_| MathError::NonCanonicalScalar("Selene"))
    }

    /// Reducción de 64 bytes mod p (derivación de retos Fiat-Shamir).
    #[must_use]
    pub fn reduce_wide(wide: &[u8; 64]) -> Self {
        Self(Fp::reduce_wide(wide))
    }
}

impl core::fmt::Display for SeleneScalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}
