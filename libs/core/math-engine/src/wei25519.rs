// [libs/core/math-engine/src/wei25519.rs]
/*!
 * =================================================================
 * APARATO: WEI25519 BRIDGE (V2.0 - CYCLE INGRESS)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: INGESTA DE COORDENADAS X WEI25519 COMO F_p
 *
 * La librería ed25519 del llamador realiza la transformación de
 * coordenadas Ed25519 -> Wei25519; este puente solo valida los 32 bytes
 * crudos de la coordenada x como elemento canónico de F_p, que por la
 * propiedad de ciclo es simultáneamente un escalar de Selene.
 * =================================================================
 */

use crate::errors::MathError;
use crate::fp::Fp;
use crate::selene::SeleneScalar;

/**
 * Valida una coordenada x de Wei25519 como elemento de F_p.
 *
 * # Errors:
 * InvalidWei25519Coordinate si el bit 255 está encendido o x >= p
 * (verificado por round-trip bytewise).
 */
pub fn wei25519_to_fp(x_bytes: &[u8; 32]) -> Result<Fp, MathError> {
    if x_bytes[31] & 0x80 != 0 {
        return Err(MathError::InvalidWei25519Coordinate);
    }
    Fp::from_bytes_canonical(x_bytes).map_err(|_| MathError::InvalidWei25519Coordinate)
}

/// Igual que wei25519_to_fp, tipado como escalar de Selene.
pub fn wei25519_to_selene_scalar(x_bytes: &[u8; 32]) -> Result<SeleneScalar, MathError> {
    wei25519_to_fp(x_bytes).map(SeleneScalar)
}
