// [libs/core/math-engine/src/secure.rs]
/*!
 * =================================================================
 * APARATO: SECURE ERASE & CT BARRIER (V2.1 - ZEROIZE BACKED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: BORRADO IRREVOCABLE DE SCRATCH Y BARRERAS CT
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COMPILER DEFIANCE: El borrado delega en 'zeroize', cuya escritura
 *    volátil + fence el compilador tiene prohibido elidir.
 * 2. BRANCHLESS TRUTH: Las conversiones de predicado usan barreras de
 *    valor para impedir que LLVM re-materialice saltos condicionales.
 * 3. SCOPE: Cada kernel de tiempo constante enumera sus buffers de
 *    scratch y los pasa por aquí a la salida.
 * =================================================================
 */

use zeroize::Zeroize;

/// Borra irreversiblemente un buffer de scratch sensible.
///
/// # Mathematical Proof (Non-Elision):
/// `zeroize` emite escrituras volátiles seguidas de una valla de compilador,
/// de modo que el optimizador no puede demostrar que el buffer está muerto
/// y eliminar la limpieza.
#[inline(always)]
pub fn secure_erase<Z: Zeroize + ?Sized>(buffer: &mut Z) {
    buffer.zeroize();
}

/// Barrera de valor: impide que el compilador razone sobre el origen de `x`.
///
/// Equivalente al clásico `volatile` read-back usado por los kernels C de
/// tiempo constante.
#[inline(always)]
#[must_use]
pub fn ct_barrier_u64(x: u64) -> u64 {
    core::hint::black_box(x)
}

/// Convierte un acumulador de diferencias (OR de bytes) en 0/1 sin saltos.
#[inline(always)]
#[must_use]
pub fn ct_is_nonzero_u64(x: u64) -> u64 {
    let w = ct_barrier_u64(x);
    (w | w.wrapping_neg()) >> 63
}
