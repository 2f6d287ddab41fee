// [libs/core/math-engine/src/simd/mod.rs]
/*!
 * =================================================================
 * APARATO: SIMD MODULE HUB (V2.0 - X86_64 ONLY)
 * CLASIFICACIÓN: CORE MATH SIMD (ESTRATO L1)
 * RESPONSABILIDAD: REGISTRO DE MOTORES VECTORIALES 4/8-WAY
 *
 * Dos familias con contrato semántico idéntico y disposición física
 * distinta:
 *  - 4-way AVX2, radix-2^25.5 (10 limbs x 4 lanes): fp10x4 / fq10x4.
 *  - 8-way AVX-512 IFMA, radix-2^51 (5 limbs x 8 lanes): fp51x8 / fq51x8.
 * 'lanes' aporta los ayudantes de curva por lotes y 'backends' las doce
 * entradas vectoriales de la tabla de despacho.
 * =================================================================
 */

/// Motor F_p 4-way AVX2 (radix-2^25.5).
pub mod fp10x4;
/// Motor F_p 8-way AVX-512 IFMA (radix-2^51).
pub mod fp51x8;
/// Motor F_q 4-way AVX2 (radix-2^25.5).
pub mod fq10x4;
/// Motor F_q 8-way AVX-512 IFMA (radix-2^51).
pub mod fq51x8;

/// Ayudantes de curva lane-paralelos (normalización afín por lotes).
pub mod lanes;

/// Backends vectoriales de la tabla de despacho.
pub mod backends;
