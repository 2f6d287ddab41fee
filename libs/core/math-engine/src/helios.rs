// [libs/core/math-engine/src/helios.rs]
/*!
 * =================================================================
 * APARATO: HELIOS CURVE CONFIGURATION (V3.0 - CYCLE HALF ALPHA)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: PARÁMETROS Y ESCALARES DE LA CURVA HELIOS
 *
 * Helios: y^2 = x^3 - 3x + b sobre F_p (p = 2^255 - 19).
 * Orden del grupo = q (el primo base de Selene). Cofactor 1.
 * Propiedad de ciclo: los escalares de Helios viven en F_q.
 *
 * b = 15789920373731020205926570676277057129217619222203920395806844808978996083412
 * =================================================================
 */

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::errors::MathError;
use crate::fp::Fp;
use crate::fq::Fq;

/// Marcador de la curva Helios.
#[derive(Debug, Clone, Copy)]
pub struct HeliosCurve;

impl CycleCurve for HeliosCurve {
    type Field = Fp;

    const B: Fp = Fp::from_raw_limbs([
        0x49EE1EDD73AD4,
        0x7082277E6A456,
        0x2EDECEC10FDBC,
        0x05C5F4A53B59F,
        0x22E8C739B0EA7,
    ]);

    const GENERATOR_X: Fp = Fp::from_raw_limbs([0x3, 0x0, 0x0, 0x0, 0x0]);

    const GENERATOR_Y: Fp = Fp::from_raw_limbs([
        0x3E639E3183EF4,
        0x3B8B0D4BB9A48,
        0x0817C1D6400EF,
        0x10E5EC93341A8,
        0x537B74D97AC07,
    ]);

    /// Orden = q = 2^255 - gamma.
    const ORDER_BYTES: [u8; 32] = [
        0x9f, 0xc7, 0x27, 0x79, 0x72, 0xd2, 0xb6, 0x6e, 0x58, 0x6b, 0x65, 0xb7, 0x2c, 0x78,
        0x7f, 0xbf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ];

    const CURVE_NAME: &'static str = "Helios";
}

/// Punto Jacobiano sobre Helios.
pub type HeliosPoint = JacobianPoint<HeliosCurve>;

/// Punto afín sobre Helios.
pub type HeliosAffine = AffinePoint<HeliosCurve>;

/**
 * Escalar de Helios: elemento de F_q (orden del grupo = q).
 *
 * La dualidad del ciclo hace que toda la aritmética de escalares sea la
 * aritmética del campo hermano; este envoltorio fija la semántica de
 * canonicidad (mod q) y el contrato de serialización.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeliosScalar(pub Fq);

impl HeliosScalar {
    /// Escalar cero.
    pub const ZERO: Self = Self(Fq::ZERO);
    /// Escalar uno.
    pub const ONE: Self = Self(Fq::ONE);

    /// true si el escalar es cero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.0.is_nonzero()
    }

    /// Suma mod q.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self(self.0.add_modular(&other.0).normalize())
    }

    /// Resta mod q.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self(self.0.subtract_modular(&other.0))
    }

    /// Producto mod q.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0.multiply_modular(&other.0))
    }

    /// Negación mod q.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.0.negate_modular())
    }

    /// Cuadrado mod q.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(self.0.square_modular())
    }

    /// Fusión multiplicar-sumar: a*b + c (mod q).
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

    /// Deserialización estricta: rechaza valores >= q.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, MathError> {
        Fq::from_bytes_canonical(bytes)
            .map(Self)
            .map_err(|_| MathError::NonCanonicalScalar("Helios"))
    }

    /// Reducción de 64 bytes mod q (derivación de retos Fiat-Shamir).
    #[must_use]
    pub fn reduce_wide(wide: &[u8; 64]) -> Self {
        Self(Fq::reduce_wide(wide))
    }
}

impl core::fmt::Display for HeliosScalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}
