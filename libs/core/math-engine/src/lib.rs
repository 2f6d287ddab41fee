// [libs/core/math-engine/src/lib.rs]
#![deny(missing_docs)]
// ✅ RESOLUCIÓN CRÍTICA: Se autoriza el uso de 'unsafe' para los motores
// vectoriales AVX2/IFMA y el mapeo de registros de los lanes.
#![allow(unsafe_code)]

/*!
 * =================================================================
 * APARATO: CYCLE MATH MASTER HUB (V4.0 - HELIOSELENE SYNC)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS Y DETECCIÓN DE SILICIO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CYCLE SOVEREIGNTY: el par Helios/Selene forma un 2-ciclo: el orden
 *    de cada curva es la característica del campo base de la otra, la
 *    propiedad que habilita los sistemas de prueba recursivos.
 * 2. TRIPLE BACKEND: cada operación caliente existe en tres formas
 *    (escalar radix-2^51, AVX2 4-way radix-2^25.5, IFMA 8-way) con una
 *    tabla de despacho publicada por Release/Acquire.
 * 3. SILICON AWARENESS: el estrato 'hardware' interroga la CPU una sola
 *    vez y cachea el resultado para init() y los despachos privados.
 * 4. HYGIENE: cero advertencias de compilación y documentación completa
 *    del API público.
 *
 * # Mathematical Proof (Modular Integrity):
 * Este aparato actúa como el nodo raíz del grafo matemático, asegurando
 * que la ley de grupo, la aritmética de campo y los motores de
 * polinomios/divisores sean bit-perfectos a través de los tres backends.
 * =================================================================
 */

/// Ley de grupo Jacobiana genérica del ciclo (a = -3).
pub mod curve;
/// Motor de divisores en dominio de evaluación (N = 256).
pub mod divisor;
/// Tabla de despacho por operación (escalar / AVX2 / IFMA).
pub mod dispatch;
/// ECFFT: FFT elíptica sobre coset de 2-isogenias.
pub mod ecfft;
/// Datos de configuración ECFFT embebidos (F_p).
pub mod ecfft_fp_data;
/// Datos de configuración ECFFT embebidos (F_q).
pub mod ecfft_fq_data;
/// Catálogo de fallos criptográficos y matemáticos del sistema.
pub mod errors;
/// Contrato común de campo primo (la costura F_p / F_q).
pub mod field;
/// Aritmética de campo F_p = GF(2^255 - 19), radix-2^51.
pub mod fp;
/// Aritmética de campo F_q = GF(2^255 - gamma), radix-2^51.
pub mod fq;
/// Inversión safegcd/divsteps para F_q (Bernstein-Yang).
pub mod fq_divsteps;
/// Parámetros y escalares de la curva Helios.
pub mod helios;
/// SWU simplificado (RFC 9380) para ambas curvas.
pub mod map_to_curve;
/// Multiplicación multi-escalar: Straus y Pippenger.
pub mod msm;
/// Polinomios en dominio de coeficientes (Karatsuba).
pub mod poly;
/// Multiplicación escalar: CT ventana w=4, wNAF w=5, base fija w=5.
pub mod scalar_mul;
/// Borrado seguro y barreras de tiempo constante.
pub mod secure;
/// Parámetros y escalares de la curva Selene.
pub mod selene;
/// Puente Wei25519 -> F_p.
pub mod wei25519;

/// Motores vectoriales 4/8-way (solo x86_64).
#[cfg(target_arch = "x86_64")]
pub mod simd;

/**
 * ESTRATO DE PROSPECCIÓN DE HARDWARE (SILICON AWARENESS)
 *
 * Permite al sistema interrogar las capacidades físicas del procesador
 * anfitrión para seleccionar la trayectoria de cómputo más eficiente.
 */
pub mod hardware {
    use once_cell::sync::OnceCell;

    /// Capacidades vectoriales relevantes de la CPU anfitriona.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CpuFeatures {
        /// AVX2 disponible (motores 4-way radix-2^25.5).
        pub avx2: bool,
        /// AVX-512F + AVX-512 IFMA disponibles (motores 8-way madd52).
        pub avx512_ifma: bool,
    }

    static FEATURES: OnceCell<CpuFeatures> = OnceCell::new();

    /// Interroga la CPU una sola vez; las llamadas siguientes leen caché.
    #[must_use]
    pub fn cpu_features() -> CpuFeatures {
        *FEATURES.get_or_init(|| {
            #[cfg(target_arch = "x86_64")]
            {
                CpuFeatures {
                    avx2: std::is_x86_feature_detected!("avx2"),
                    avx512_ifma: std::is_x86_feature_detected!("avx512f")
                        && std::is_x86_feature_detected!("avx512ifma"),
                }
            }
            #[cfg(not(target_arch = "x86_64"))]
            {
                CpuFeatures::default()
            }
        })
    }
}

/// Contador de operaciones de campo para la certificación de disciplina
/// de tiempo constante (solo con la feature `ct-audit`).
#[cfg(feature = "ct-audit")]
pub mod audit {
    use core::sync::atomic::{AtomicU64, Ordering};

    static FIELD_OPS: AtomicU64 = AtomicU64::new(0);

    /// Registra una multiplicación/cuadrado de campo.
    #[inline(always)]
    pub fn record_field_op() {
        FIELD_OPS.fetch_add(1, Ordering::Relaxed);
    }

    /// Lee el contador acumulado.
    #[must_use]
    pub fn field_op_count() -> u64 {
        FIELD_OPS.load(Ordering::Relaxed)
    }

    /// Reinicia el contador (entre trazas).
    pub fn reset_field_op_count() {
        FIELD_OPS.store(0, Ordering::Relaxed);
    }
}

/// Preludio del motor: la superficie nominal del estrato L1.
pub mod prelude {
    // Campos de Crandall y su costura común
    pub use crate::errors::MathError;
    pub use crate::field::PrimeField;
    pub use crate::fp::Fp;
    pub use crate::fq::Fq;

    // Estructuras geométricas del ciclo
    pub use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
    pub use crate::helios::{HeliosAffine, HeliosCurve, HeliosPoint, HeliosScalar};
    pub use crate::selene::{SeleneAffine, SeleneCurve, SelenePoint, SeleneScalar};

    // Motores escalares y de despacho
    pub use crate::dispatch::{autotune, get_dispatch, init, DispatchTable};
    pub use crate::msm::{msm_fixed, msm_vartime, pedersen_commit};
    pub use crate::scalar_mul::{
        scalarmult, scalarmult_fixed, scalarmult_fixed_precompute, scalarmult_vartime,
    };

    // Polinomios, ECFFT y divisores
    pub use crate::divisor::{
        compute_divisor_single, evals_to_poly, scalar_mul_divisor, tree_reduce, Divisor,
        EvalDivisor, FieldEvals, EVAL_DOMAIN_SIZE,
    };
    pub use crate::ecfft::{EcfftContext, fp_context as ecfft_fp_context, fq_context as ecfft_fq_context};
    pub use crate::poly::{Poly, MAX_POLY_SIZE};

    // Hash-to-curve y puentes
    pub use crate::map_to_curve::{map_to_curve, map_to_curve2, SswuParams};
    pub use crate::wei25519::{wei25519_to_fp, wei25519_to_selene_scalar};

    // Prospección de silicio
    pub use crate::hardware::{cpu_features, CpuFeatures};
}
