// [libs/core/math-engine/src/ecfft.rs]
/*!
 * =================================================================
 * APARATO: ECFFT ENGINE (V3.1 - ISOGENY COSET)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: FFT ELÍPTICA SOBRE F_p / F_q (BEN-SASSON ET AL. 2021)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WHY ELLIPTIC: ni p ni q tienen subgrupos multiplicativos suaves;
 *    la estructura 2-a-1 recursiva proviene de una cadena de
 *    2-isogenias sobre una curva auxiliar, no de raíces de la unidad.
 * 2. BIT-REVERSAL LOAD: el coset se carga permutado para que cada par
 *    de fibra {P, P+T_k} ocupe índices par/impar adyacentes en todos
 *    los niveles (el análogo ECFFT de Cooley-Tukey).
 * 3. O(n^2) BLACK BOX: ENTER es Horner directo y EXIT diferencias
 *    divididas de Newton; las matrices de mariposa fwd/inv de cada
 *    nivel quedan construidas para la mejora O(n log^2 n).
 * 4. SENTINEL: n > N devuelve longitud de resultado 0.
 * =================================================================
 */

use crate::ecfft_fp_data as fp_data;
use crate::ecfft_fq_data as fq_data;
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::fq::Fq;
use crate::poly::Poly;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Matriz de mariposa 2x2 de un par de fibra.
#[derive(Debug, Clone, Copy)]
pub struct ButterflyMatrix<F: PrimeField> {
    /// Entrada (0,0).
    pub a: F,
    /// Entrada (0,1).
    pub b: F,
    /// Entrada (1,0).
    pub c: F,
    /// Entrada (1,1).
    pub d: F,
}

/// Nivel de la cadena de isogenias: dominio s de tamaño n y matrices
/// de mariposa directas/inversas (n/2 de cada una).
#[derive(Debug, Clone)]
pub struct EcfftLevel<F: PrimeField> {
    /// Puntos del dominio en este nivel.
    pub s: Vec<F>,
    /// Matrices directas.
    pub fwd: Vec<ButterflyMatrix<F>>,
    /// Matrices inversas.
    pub inv: Vec<ButterflyMatrix<F>>,
    /// Tamaño del dominio del nivel.
    pub n: usize,
}

/// Contexto ECFFT de un campo: cadena completa de niveles.
#[derive(Debug, Clone)]
pub struct EcfftContext<F: PrimeField> {
    /// Niveles 0..log_n-1; el nivel k tiene dominio de tamaño N >> k.
    pub levels: Vec<EcfftLevel<F>>,
    /// log2 del dominio máximo.
    pub log_n: usize,
    /// Tamaño del dominio máximo N.
    pub domain_size: usize,
}

/// Evalúa la función racional psi = num/den en x (Horner + inv0).
fn apply_psi<F: PrimeField>(x: &F, num: &[F], den: &[F]) -> F {
    let mut num_val = num[num.len() - 1];
    for c in num.iter().rev().skip(1) {
        num_val = num_val.multiply_modular(x).add_modular(c).normalize();
    }
    let mut den_val = den[den.len() - 1];
    for c in den.iter().rev().skip(1) {
        den_val = den_val.multiply_modular(x).add_modular(c).normalize();
    }
    num_val.multiply_modular(&den_val.invert_modular())
}

/// Construye las matrices de mariposa de un nivel a partir de los pares
/// consecutivos (s0, s1), con las diferencias invertidas por lote.
fn build_level_matrices<F: PrimeField>(points: &[F]) -> (Vec<ButterflyMatrix<F>>, Vec<ButterflyMatrix<F>>) {
    let half = points.len() / 2;
    let mut diffs = vec![F::ZERO; half];
    for i in 0..half {
        diffs[i] = points[2 * i].subtract_modular(&points[2 * i + 1]);
    }
    let mut inv_diffs = vec![F::ZERO; half];
    F::batch_invert(&mut inv_diffs, &diffs);

    let mut fwd = Vec::with_capacity(half);
    let mut inv = Vec::with_capacity(half);
    for i in 0..half {
        let s0 = points[2 * i];
        let s1 = points[2 * i + 1];
        fwd.push(ButterflyMatrix {
            a: s1.negate_modular().multiply_modular(&inv_diffs[i]),
            b: s0.multiply_modular(&inv_diffs[i]),
            c: inv_diffs[i],
            d: inv_diffs[i].negate_modular(),
        });
        inv.push(ButterflyMatrix { a: F::ONE, b: s0, c: F::ONE, d: s1 });
    }
    (fwd, inv)
}

impl<F: PrimeField> EcfftContext<F> {
    /**
     * Inicializa la cadena desde los bytes de configuración embebidos.
     *
     * 1. Carga el coset con permutación bit-reversa.
     * 2. Por nivel: copia el dominio, construye matrices fwd/inv y, si
     *    no es el último nivel, aplica psi_k a los índices pares para
     *    obtener el dominio del siguiente nivel (mitad de tamaño).
     */
    fn build(
        log_n: usize,
        coset: &[[u8; 32]],
        iso_num: &[[[u8; 32]; 3]],
        iso_den: &[[[u8; 32]; 2]],
    ) -> Self {
        let domain_size = 1usize << log_n;
        debug_assert_eq!(coset.len(), domain_size);

        let mut current: Vec<F> = Vec::with_capacity(domain_size);
        for i in 0..domain_size {
            let mut rev = 0usize;
            let mut tmp = i;
            for _ in 0..log_n {
                rev = (rev << 1) | (tmp & 1);
                tmp >>= 1;
            }
            current.push(F::from_bytes_raw(&coset[rev]));
        }

        let mut levels = Vec::with_capacity(log_n);
        let mut level_size = domain_size;

        for lv in 0..log_n {
            let half = level_size / 2;
            let (fwd, inv) = build_level_matrices(&current[..level_size]);
            levels.push(EcfftLevel { s: current[..level_size].to_vec(), fwd, inv, n: level_size });

            if lv + 1 < log_n {
                let num: Vec<F> =
                    iso_num[lv].iter().map(|b| F::from_bytes_raw(b)).collect();
                let den: Vec<F> =
                    iso_den[lv].iter().map(|b| F::from_bytes_raw(b)).collect();
                let mut next = Vec::with_capacity(half);
                for i in 0..half {
                    next.push(apply_psi(&current[2 * i], &num, &den));
                }
                current = next;
            }
            level_size = half;
        }

        debug!(field = F::FIELD_NAME, log_n, "contexto ECFFT inicializado");
        Self { levels, log_n, domain_size }
    }

    /// Busca el nivel cuyo dominio tiene tamaño n.
    fn level_of(&self, n: usize) -> &EcfftLevel<F> {
        self.levels
            .iter()
            .find(|lv| lv.n == n)
            .unwrap_or(&self.levels[self.levels.len() - 1])
    }

    /**
     * ENTER: coeficientes -> evaluaciones en el dominio de tamaño n.
     * Horner directo en cada punto: O(n^2) con constante mínima.
     */
    pub fn enter(&self, data: &mut [F], n: usize) {
        if n <= 1 || n > self.domain_size {
            return;
        }
        let level = self.level_of(n);
        let coeffs: Vec<F> = data[..n].to_vec();

        for (i, slot) in data[..n].iter_mut().enumerate() {
            let x = level.s[i];
            let mut acc = coeffs[n - 1];
            for k in (0..n - 1).rev() {
                acc = acc.multiply_modular(&x).add_modular(&coeffs[k]).normalize();
            }
            *slot = acc;
        }
    }

    /**
     * EXIT: evaluaciones -> coeficientes.
     *
     * Etapa 1: diferencias divididas de Newton in-place con inversión
     * por lote en cada separación j.
     * Etapa 2: conversión Newton -> monomial por Horner desde dentro.
     */
    pub fn exit(&self, data: &mut [F], n: usize) {
        if n <= 1 || n > self.domain_size {
            return;
        }
        let level = self.level_of(n);
        let s = &level.s;

        let mut d: Vec<F> = data[..n].to_vec();

        for j in 1..n {
            let count = n - j;
            let mut denoms = vec![F::ZERO; count];
            for i in j..n {
                denoms[i - j] = s[i].subtract_modular(&s[i - j]);
            }
            let mut inv_denoms = vec![F::ZERO; count];
            F::batch_invert(&mut inv_denoms, &denoms);

            for i in (j..n).rev() {
                let diff = d[i].subtract_modular(&d[i - 1]);
                d[i] = diff.multiply_modular(&inv_denoms[i - j]);
            }
        }

        // Newton -> monomial: p = p * (x - s[k]) + d[k], de dentro afuera.
        let mut p = vec![F::ZERO; n];
        p[0] = d[n - 1];
        let mut deg = 0usize;

        for k in (0..n - 1).rev() {
            p[deg + 1] = p[deg];
            for j in (1..=deg).rev() {
                let prod = s[k].multiply_modular(&p[j]);
                p[j] = p[j - 1].subtract_modular(&prod);
            }
            let prod = s[k].multiply_modular(&p[0]);
            p[0] = prod.negate_modular();
            deg += 1;

            p[0] = p[0].add_modular(&d[k]).normalize();
        }

        data[..n].copy_from_slice(&p);
    }

    /**
     * EXTEND: n_from evaluaciones -> n_to evaluaciones del mismo
     * polinomio (grado < n_from). EXIT + relleno de ceros + ENTER.
     */
    pub fn extend(&self, data: &mut [F], n_from: usize, n_to: usize) {
        if n_from >= n_to || n_from <= 1 || n_to > self.domain_size {
            return;
        }
        self.exit(data, n_from);
        for slot in data[n_from..n_to].iter_mut() {
            *slot = F::ZERO;
        }
        self.enter(data, n_to);
    }

    /**
     * REDUCE: n_from evaluaciones de un polinomio de grado < n_to ->
     * n_to evaluaciones. EXIT + ENTER.
     */
    pub fn reduce(&self, data: &mut [F], n_from: usize, n_to: usize) {
        if n_to >= n_from || n_to <= 1 || n_from > self.domain_size {
            return;
        }
        self.exit(data, n_from);
        self.enter(data, n_to);
    }

    /**
     * Multiplicación de polinomios via ECFFT: relleno a n = potencia de
     * dos, ENTER ambos, producto punto a punto, EXIT.
     *
     * # Errors (centinela):
     * n > N devuelve el polinomio vacío (longitud 0).
     */
    pub fn poly_mul(&self, a: &Poly<F>, b: &Poly<F>) -> Poly<F> {
        let a_len = a.coeffs.len();
        let b_len = b.coeffs.len();
        if a_len == 0 || b_len == 0 {
            return Poly::zero();
        }

        let out_len = a_len + b_len - 1;
        let mut n = 1usize;
        while n < out_len {
            n <<= 1;
        }
        if n > self.domain_size {
            return Poly::empty();
        }

        let mut fa = vec![F::ZERO; n];
        let mut fb = vec![F::ZERO; n];
        fa[..a_len].copy_from_slice(&a.coeffs);
        fb[..b_len].copy_from_slice(&b.coeffs);

        self.enter(&mut fa, n);
        self.enter(&mut fb, n);

        for i in 0..n {
            fa[i] = fa[i].multiply_modular(&fb[i]);
        }

        self.exit(&mut fa, n);

        fa.truncate(out_len);
        Poly::from_coeffs(fa)
    }
}

// --- Contextos globales de proceso (inicialización única) ---

static FP_CTX: OnceCell<EcfftContext<Fp>> = OnceCell::new();
static FQ_CTX: OnceCell<EcfftContext<Fq>> = OnceCell::new();

/// Contexto ECFFT global de F_p (construido en la primera llamada).
#[must_use]
pub fn fp_context() -> &'static EcfftContext<Fp> {
    FP_CTX.get_or_init(|| {
        EcfftContext::build(
            fp_data::ECFFT_FP_LOG_DOMAIN,
            &fp_data::ECFFT_FP_COSET,
            &fp_data::ECFFT_FP_ISO_NUM,
            &fp_data::ECFFT_FP_ISO_DEN,
        )
    })
}

/// Contexto ECFFT global de F_q (construido en la primera llamada).
#[must_use]
pub fn fq_context() -> &'static EcfftContext<Fq> {
    FQ_CTX.get_or_init(|| {
        EcfftContext::build(
            fq_data::ECFFT_FQ_LOG_DOMAIN,
            &fq_data::ECFFT_FQ_COSET,
            &fq_data::ECFFT_FQ_ISO_NUM,
            &fq_data::ECFFT_FQ_ISO_DEN,
        )
    })
}
