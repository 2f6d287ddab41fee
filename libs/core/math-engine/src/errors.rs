// [libs/core/math-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: MATH ERROR CATALOG (V4.0 - CYCLE ALIGNED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CATÁLOGO DE FALLOS CRIPTOGRÁFICOS Y MATEMÁTICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. REJECT SEMANTICS: Todo rechazo de deserialización (punto, escalar,
 *    elemento de campo) se expresa como variante tipada, nunca como
 *    estado parcial.
 * 2. SENTINEL DISCIPLINE: Los desbordes de tamaño polinomial y ECFFT
 *    NO viven aquí; se reportan como centinelas (longitud cero) según
 *    el contrato del núcleo.
 * 3. NOMINAL PURITY: Nomenclatura descriptiva absoluta.
 * =================================================================
 */

use thiserror::Error;

/// Catálogo de fallos del motor matemático del ciclo Helios/Selene.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// El buffer de 32 bytes no es una codificación canónica del campo
    /// (bit 255 encendido o valor >= módulo).
    #[error("non-canonical field element encoding: {0}")]
    NonCanonicalFieldElement(&'static str),

    /// La coordenada x decodificada no corresponde a ningún punto de la curva.
    #[error("point decoding failed: x-coordinate is not on {0}")]
    PointNotOnCurve(&'static str),

    /// El escalar deserializado no es canónico respecto al orden del grupo.
    #[error("non-canonical scalar encoding for {0}")]
    NonCanonicalScalar(&'static str),

    /// Inversión modular solicitada sobre el elemento nulo.
    #[error("modular inverse of zero is undefined")]
    InverseOfZero,

    /// La coordenada x de Wei25519 no es un elemento válido de F_p.
    #[error("wei25519 x-coordinate is not a canonical F_p element")]
    InvalidWei25519Coordinate,

    /// Entrada de lote vacía donde se requiere al menos un elemento.
    #[error("batch operation received mismatched or empty inputs")]
    InvalidBatchInput,
}
