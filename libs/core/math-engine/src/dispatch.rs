// [libs/core/math-engine/src/dispatch.rs]
/*!
 * =================================================================
 * APARATO: RUNTIME DISPATCH TABLE (V4.1 - RELEASE/ACQUIRE)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: SELECCIÓN DE BACKEND POR OPERACIÓN (SCALAR/AVX2/IFMA)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SIX SLOTS: {Helios, Selene} x {scalarmult CT, scalarmult vartime,
 *    msm vartime}; el valor por defecto es el baseline escalar.
 * 2. WHOLE-TABLE PUBLISH: init() y autotune() construyen una tabla
 *    COMPLETA local y la publican con un único store Release; los
 *    lectores emparejan con Acquire y jamás observan una tabla parcial.
 * 3. FIRST CALL WINS: init() es idempotente (CAS sobre bandera);
 *    autotune() es no-op en la segunda llamada y exige init() previo.
 * 4. HEURISTIC VS MEASURED: init() decide por CPUID (IFMA > AVX2 >
 *    escalar); autotune() cronometra cada backend disponible por slot
 *    (8 calentamientos, 32 medidas, mínimo).
 * =================================================================
 */

use crate::helios::HeliosPoint;
use crate::msm::msm_vartime;
use crate::scalar_mul::{scalarmult, scalarmult_vartime};
use crate::selene::SelenePoint;
use core::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
use tracing::debug;

/// Firma del slot de multiplicación escalar Helios.
pub type HeliosScalarMulFn = fn(&[u8; 32], &HeliosPoint) -> HeliosPoint;
/// Firma del slot MSM Helios.
pub type HeliosMsmFn = fn(&[[u8; 32]], &[HeliosPoint]) -> HeliosPoint;
/// Firma del slot de multiplicación escalar Selene.
pub type SeleneScalarMulFn = fn(&[u8; 32], &SelenePoint) -> SelenePoint;
/// Firma del slot MSM Selene.
pub type SeleneMsmFn = fn(&[[u8; 32]], &[SelenePoint]) -> SelenePoint;

/// Tabla de despacho de seis entradas.
#[derive(Clone, Copy)]
pub struct DispatchTable {
    /// k*P constante-tiempo sobre Helios.
    pub helios_scalarmult: HeliosScalarMulFn,
    /// k*P variable-time sobre Helios.
    pub helios_scalarmult_vartime: HeliosScalarMulFn,
    /// MSM variable-time sobre Helios.
    pub helios_msm_vartime: HeliosMsmFn,
    /// k*P constante-tiempo sobre Selene.
    pub selene_scalarmult: SeleneScalarMulFn,
    /// k*P variable-time sobre Selene.
    pub selene_scalarmult_vartime: SeleneScalarMulFn,
    /// MSM variable-time sobre Selene.
    pub selene_msm_vartime: SeleneMsmFn,
}

/// Baseline escalar: siempre disponible, siempre correcto.
static BASELINE: DispatchTable = DispatchTable {
    helios_scalarmult: scalarmult::<crate::helios::HeliosCurve>,
    helios_scalarmult_vartime: scalarmult_vartime::<crate::helios::HeliosCurve>,
    helios_msm_vartime: msm_vartime::<crate::helios::HeliosCurve>,
    selene_scalarmult: scalarmult::<crate::selene::SeleneCurve>,
    selene_scalarmult_vartime: scalarmult_vartime::<crate::selene::SeleneCurve>,
    selene_msm_vartime: msm_vartime::<crate::selene::SeleneCurve>,
};

/// Puntero a la tabla publicada; null = baseline.
static TABLE: AtomicPtr<DispatchTable> = AtomicPtr::new(core::ptr::null_mut());

static INIT_DONE: AtomicBool = AtomicBool::new(false);
static AUTOTUNE_DONE: AtomicBool = AtomicBool::new(false);

/**
 * Lector de la tabla vigente (Acquire). Tras cualquier init()/autotune()
 * completado, todo lector observa la última tabla publicada.
 */
#[inline]
#[must_use]
pub fn get_dispatch() -> &'static DispatchTable {
    let ptr = TABLE.load(Ordering::Acquire);
    if ptr.is_null() {
        &BASELINE
    } else {
        // SAFETY: solo se publican tablas 'static filtradas via Box::leak.
        unsafe { &*ptr }
    }
}

/// Publica una tabla completa con ordenamiento Release.
fn publish(table: DispatchTable) {
    let leaked = Box::leak(Box::new(table));
    TABLE.store(leaked, Ordering::Release);
}

/**
 * Inicialización por heurística CPUID: IFMA > AVX2 > escalar.
 * La primera llamada gana; las siguientes son no-op.
 */
#[tracing::instrument(level = "trace")]
#[cfg_attr(not(target_arch = "x86_64"), allow(unused_mut))]
pub fn init() {
    if INIT_DONE
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return;
    }

    let mut local = BASELINE;

    #[cfg(target_arch = "x86_64")]
    {
        use crate::hardware;
        use crate::simd::backends as be;

        let features = hardware::cpu_features();
        if features.avx512_ifma {
            local = DispatchTable {
                helios_scalarmult: be::helios_scalarmult_ifma,
                helios_scalarmult_vartime: be::helios_scalarmult_vartime_ifma,
                helios_msm_vartime: be::helios_msm_vartime_ifma,
                selene_scalarmult: be::selene_scalarmult_ifma,
                selene_scalarmult_vartime: be::selene_scalarmult_vartime_ifma,
                selene_msm_vartime: be::selene_msm_vartime_ifma,
            };
            debug!(backend = "ifma", "dispatch inicializado");
        } else if features.avx2 {
            local = DispatchTable {
                helios_scalarmult: be::helios_scalarmult_avx2,
                helios_scalarmult_vartime: be::helios_scalarmult_vartime_avx2,
                helios_msm_vartime: be::helios_msm_vartime_avx2,
                selene_scalarmult: be::selene_scalarmult_avx2,
                selene_scalarmult_vartime: be::selene_scalarmult_vartime_avx2,
                selene_msm_vartime: be::selene_msm_vartime_avx2,
            };
            debug!(backend = "avx2", "dispatch inicializado");
        } else {
            debug!(backend = "scalar", "dispatch inicializado");
        }
    }

    publish(local);
}

const TUNE_WARMUP: usize = 8;
const TUNE_ITERS: usize = 32;
const TUNE_MSM_SIZE: usize = 16;

fn bench_helios_scalarmult(f: HeliosScalarMulFn, scalar: &[u8; 32], p: &HeliosPoint) -> u128 {
    for _ in 0..TUNE_WARMUP {
        core::hint::black_box(f(scalar, p));
    }
    let mut best = u128::MAX;
    for _ in 0..TUNE_ITERS {
        let start = std::time::Instant::now();
        core::hint::black_box(f(scalar, p));
        best = best.min(start.elapsed().as_nanos());
    }
    best
}

fn bench_selene_scalarmult(f: SeleneScalarMulFn, scalar: &[u8; 32], p: &SelenePoint) -> u128 {
    for _ in 0..TUNE_WARMUP {
        core::hint::black_box(f(scalar, p));
    }
    let mut best = u128::MAX;
    for _ in 0..TUNE_ITERS {
        let start = std::time::Instant::now();
        core::hint::black_box(f(scalar, p));
        best = best.min(start.elapsed().as_nanos());
    }
    best
}

fn bench_helios_msm(f: HeliosMsmFn, scalars: &[[u8; 32]], points: &[HeliosPoint]) -> u128 {
    for _ in 0..TUNE_WARMUP {
        core::hint::black_box(f(scalars, points));
    }
    let mut best = u128::MAX;
    for _ in 0..TUNE_ITERS {
        let start = std::time::Instant::now();
        core::hint::black_box(f(scalars, points));
        best = best.min(start.elapsed().as_nanos());
    }
    best
}

fn bench_selene_msm(f: SeleneMsmFn, scalars: &[[u8; 32]], points: &[SelenePoint]) -> u128 {
    for _ in 0..TUNE_WARMUP {
        core::hint::black_box(f(scalars, points));
    }
    let mut best = u128::MAX;
    for _ in 0..TUNE_ITERS {
        let start = std::time::Instant::now();
        core::hint::black_box(f(scalars, points));
        best = best.min(start.elapsed().as_nanos());
    }
    best
}

/**
 * Autoajuste medido: cronometra cada backend disponible para cada uno de
 * los seis slots y publica atómicamente la combinación ganadora.
 *
 * Debe llamarse tras init(); la segunda llamada es no-op.
 */
#[tracing::instrument(level = "trace")]
#[cfg_attr(not(target_arch = "x86_64"), allow(unused_mut))]
pub fn autotune() {
    if AUTOTUNE_DONE
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return;
    }

    // Entradas de sondeo: escalares densos de semilla fija (misma carga
    // de trabajo en cada proceso, sin depender del reloj).
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x7E11_05E1);
    let mut probe_scalar = [0u8; 32];
    rng.fill(&mut probe_scalar);
    probe_scalar[31] &= 0x7f;

    let hp = HeliosPoint::generator();
    let sp = SelenePoint::generator();
    let h_points = vec![hp; TUNE_MSM_SIZE];
    let s_points = vec![sp; TUNE_MSM_SIZE];
    let mut msm_scalars = Vec::with_capacity(TUNE_MSM_SIZE);
    for _ in 0..TUNE_MSM_SIZE {
        let mut s = [0u8; 32];
        rng.fill(&mut s);
        s[31] &= 0x7f;
        msm_scalars.push(s);
    }

    // Candidatos por slot: siempre el baseline; los vectoriales según CPU.
    let mut h_ct: Vec<HeliosScalarMulFn> = vec![BASELINE.helios_scalarmult];
    let mut h_vt: Vec<HeliosScalarMulFn> = vec![BASELINE.helios_scalarmult_vartime];
    let mut h_msm: Vec<HeliosMsmFn> = vec![BASELINE.helios_msm_vartime];
    let mut s_ct: Vec<SeleneScalarMulFn> = vec![BASELINE.selene_scalarmult];
    let mut s_vt: Vec<SeleneScalarMulFn> = vec![BASELINE.selene_scalarmult_vartime];
    let mut s_msm: Vec<SeleneMsmFn> = vec![BASELINE.selene_msm_vartime];

    #[cfg(target_arch = "x86_64")]
    {
        use crate::hardware;
        use crate::simd::backends as be;

        let features = hardware::cpu_features();
        if features.avx2 {
            h_ct.push(be::helios_scalarmult_avx2);
            h_vt.push(be::helios_scalarmult_vartime_avx2);
            h_msm.push(be::helios_msm_vartime_avx2);
            s_ct.push(be::selene_scalarmult_avx2);
            s_vt.push(be::selene_scalarmult_vartime_avx2);
            s_msm.push(be::selene_msm_vartime_avx2);
        }
        if features.avx512_ifma {
            h_ct.push(be::helios_scalarmult_ifma);
            h_vt.push(be::helios_scalarmult_vartime_ifma);
            h_msm.push(be::helios_msm_vartime_ifma);
            s_ct.push(be::selene_scalarmult_ifma);
            s_vt.push(be::selene_scalarmult_vartime_ifma);
            s_msm.push(be::selene_msm_vartime_ifma);
        }
    }

    let pick_h = |cands: &[HeliosScalarMulFn]| -> HeliosScalarMulFn {
        *cands
            .iter()
            .min_by_key(|f| bench_helios_scalarmult(**f, &probe_scalar, &hp))
            .expect("candidate list is never empty")
    };
    let pick_s = |cands: &[SeleneScalarMulFn]| -> SeleneScalarMulFn {
        *cands
            .iter()
            .min_by_key(|f| bench_selene_scalarmult(**f, &probe_scalar, &sp))
            .expect("candidate list is never empty")
    };

    let local = DispatchTable {
        helios_scalarmult: pick_h(&h_ct),
        helios_scalarmult_vartime: pick_h(&h_vt),
        helios_msm_vartime: *h_msm
            .iter()
            .min_by_key(|f| bench_helios_msm(**f, &msm_scalars, &h_points))
            .expect("candidate list is never empty"),
        selene_scalarmult: pick_s(&s_ct),
        selene_scalarmult_vartime: pick_s(&s_vt),
        selene_msm_vartime: *s_msm
            .iter()
            .min_by_key(|f| bench_selene_msm(**f, &msm_scalars, &s_points))
            .expect("candidate list is never empty"),
    };

    debug!("autotune completado; publicando tabla medida");
    publish(local);
}
