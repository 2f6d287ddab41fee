// [libs/core/math-engine/src/poly.rs]
/*!
 * =================================================================
 * APARATO: POLYNOMIAL ENGINE (V4.0 - KARATSUBA SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: POLINOMIOS EN DOMINIO DE COEFICIENTES F[x]
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL FIELD: un solo motor genérico sirve F_p[x] y F_q[x] via el
 *    contrato PrimeField.
 * 2. ALGORITHM ROUTING: escolar bajo 32 coeficientes, Karatsuba
 *    recursivo por encima.
 * 3. SENTINEL DISCIPLINE: entradas que excederían MAX_POLY_SIZE
 *    devuelven el polinomio vacío; nunca se aborta.
 * 4. NORMAL FORM: ceros de cola eliminados; el coeficiente líder de un
 *    polinomio no nulo es no nulo.
 * =================================================================
 */

use crate::field::PrimeField;

/// Cota superior de tamaño: 2^20 coeficientes (~40MB). Previene el
/// agotamiento de memoria por entradas hostiles.
pub const MAX_POLY_SIZE: usize = 1 << 20;

/// Umbral de Karatsuba: escolar por debajo de 32 coeficientes.
const KARATSUBA_THRESHOLD: usize = 32;

/// Polinomio denso: coeffs[i] acompaña a x^i. El polinomio cero se
/// representa como un único coeficiente nulo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly<F: PrimeField> {
    /// Coeficientes en orden ascendente de grado.
    pub coeffs: Vec<F>,
}

impl<F: PrimeField> Poly<F> {
    /// Polinomio cero.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: vec![F::ZERO] }
    }

    /// Polinomio constante 1.
    #[must_use]
    pub fn one() -> Self {
        Self { coeffs: vec![F::ONE] }
    }

    /// Polinomio vacío: el centinela de error por desborde de tamaño.
    #[must_use]
    pub fn empty() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// true si es el centinela vacío.
    #[must_use]
    pub fn is_empty_sentinel(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Construye desde coeficientes, normalizando la cola.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<F>) -> Self {
        let mut p = Self { coeffs };
        if p.coeffs.is_empty() {
            p.coeffs.push(F::ZERO);
        }
        p.strip();
        p
    }

    /// Grado lógico (0 para constantes, incluido el cero).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Elimina ceros de cola (conservando al menos un coeficiente).
    fn strip(&mut self) {
        while self.coeffs.len() > 1 {
            let last = self.coeffs[self.coeffs.len() - 1];
            if last.is_nonzero() {
                break;
            }
            self.coeffs.pop();
        }
    }

    /// Suma de polinomios.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            let a = self.coeffs.get(i).copied().unwrap_or(F::ZERO);
            let b = other.coeffs.get(i).copied().unwrap_or(F::ZERO);
            coeffs.push(a.add_modular(&b).normalize());
        }
        Self::from_coeffs(coeffs)
    }

    /// Resta de polinomios.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            let a = self.coeffs.get(i).copied().unwrap_or(F::ZERO);
            let b = other.coeffs.get(i).copied().unwrap_or(F::ZERO);
            coeffs.push(a.subtract_modular(&b));
        }
        Self::from_coeffs(coeffs)
    }

    /// Multiplicación escolar (interna).
    fn mul_schoolbook(&self, other: &Self) -> Self {
        let na = self.coeffs.len();
        let nb = other.coeffs.len();
        let mut coeffs = vec![F::ZERO; na + nb - 1];
        for i in 0..na {
            for j in 0..nb {
                let prod = self.coeffs[i].multiply_modular(&other.coeffs[j]);
                coeffs[i + j] = coeffs[i + j].add_modular(&prod).normalize();
            }
        }
        Self::from_coeffs(coeffs)
    }

    /// Sub-polinomio coeffs[start .. start+len] (rebanada de Karatsuba).
    fn slice(&self, start: usize, len: usize) -> Self {
        if start >= self.coeffs.len() || len == 0 {
            return Self::zero();
        }
        let end = (start + len).min(self.coeffs.len());
        Self::from_coeffs(self.coeffs[start..end].to_vec())
    }

    /// Desplazamiento: self * x^m.
    fn shift(&self, m: usize) -> Self {
        if m == 0 {
            return self.clone();
        }
        let mut coeffs = vec![F::ZERO; m + self.coeffs.len()];
        coeffs[m..].copy_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /**
     * Karatsuba recursivo.
     *
     * # Mathematical Proof:
     * A = A_lo + x^m A_hi, B = B_lo + x^m B_hi;
     * z0 = A_lo B_lo, z2 = A_hi B_hi,
     * z1 = (A_lo + A_hi)(B_lo + B_hi) - z0 - z2;
     * AB = z0 + x^m z1 + x^{2m} z2. Tres productos de mitad de tamaño.
     */
    fn mul_karatsuba(&self, other: &Self) -> Self {
        let na = self.coeffs.len();
        let nb = other.coeffs.len();

        if na < KARATSUBA_THRESHOLD || nb < KARATSUBA_THRESHOLD {
            return self.mul_schoolbook(other);
        }

        let m = na.max(nb) / 2;

        let a_lo = self.slice(0, m);
        let a_hi = self.slice(m, na.saturating_sub(m));
        let b_lo = other.slice(0, m);
        let b_hi = other.slice(m, nb.saturating_sub(m));

        let z0 = a_lo.mul(&b_lo);
        let z2 = a_hi.mul(&b_hi);

        let a_sum = a_lo.add(&a_hi);
        let b_sum = b_lo.add(&b_hi);
        let z1 = a_sum.mul(&b_sum).sub(&z0).sub(&z2);

        z0.add(&z1.shift(m)).add(&z2.shift(2 * m))
    }

    /**
     * Multiplicación con enrutamiento por tamaño y centinela de desborde.
     *
     * Entradas cuyo producto excedería MAX_POLY_SIZE coeficientes
     * devuelven el polinomio vacío; el llamador comprueba la longitud.
     */
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let na = self.coeffs.len();
        let nb = other.coeffs.len();
        if na == 0 || nb == 0 {
            return Self::zero();
        }
        if na > MAX_POLY_SIZE || nb > MAX_POLY_SIZE || na + nb - 1 > MAX_POLY_SIZE {
            return Self::empty();
        }

        if na >= KARATSUBA_THRESHOLD && nb >= KARATSUBA_THRESHOLD {
            self.mul_karatsuba(other)
        } else {
            self.mul_schoolbook(other)
        }
    }

    /// Evaluación por Horner: f(x) = c0 + x(c1 + x(c2 + ...)).
    #[must_use]
    pub fn evaluate(&self, x: &F) -> F {
        let n = self.coeffs.len();
        if n == 0 {
            return F::ZERO;
        }
        let mut acc = self.coeffs[n - 1];
        for i in (0..n - 1).rev() {
            acc = acc.multiply_modular(x).add_modular(&self.coeffs[i]).normalize();
        }
        acc
    }

    /// Producto iterado prod(x - r_i). n = 0 da el polinomio constante 1.
    #[must_use]
    pub fn from_roots(roots: &[F]) -> Self {
        if roots.is_empty() {
            return Self::one();
        }
        let mut acc = Self::from_coeffs(vec![roots[0].negate_modular(), F::ONE]);
        for root in &roots[1..] {
            let linear = Self::from_coeffs(vec![root.negate_modular(), F::ONE]);
            acc = acc.mul(&linear);
        }
        acc
    }

    /**
     * División larga mónica: (cociente, resto) con deg(r) < deg(b) y
     * a = q*b + r. Invierte el coeficiente líder del divisor una vez.
     */
    #[must_use]
    pub fn divmod(&self, divisor: &Self) -> (Self, Self) {
        let mut rem = self.clone();
        rem.strip();
        let mut b = divisor.clone();
        b.strip();

        let na = rem.coeffs.len();
        let nb = b.coeffs.len();

        if na < nb {
            return (Self::zero(), rem);
        }

        let nq = na - nb + 1;
        let mut q = vec![F::ZERO; nq];

        let lead_inv = b.coeffs[nb - 1].invert_modular();

        for i in (nb..=na).rev() {
            let coeff = rem.coeffs[i - 1].multiply_modular(&lead_inv);
            q[i - nb] = coeff;

            for j in 0..nb {
                let prod = coeff.multiply_modular(&b.coeffs[j]);
                rem.coeffs[i - nb + j] = rem.coeffs[i - nb + j].subtract_modular(&prod);
            }
        }

        rem.coeffs.truncate((nb - 1).max(1));
        rem.strip();
        (Self::from_coeffs(q), rem)
    }

    /**
     * Interpolación de Lagrange via polinomio de anulación.
     *
     * Construye v(x) = prod(x - x_i); para cada punto, la base
     * L_i = v / (x - x_i) se escala por y_i / prod_{j!=i}(x_i - x_j),
     * con los pesos invertidos por lote (baricéntrico).
     */
    #[must_use]
    pub fn interpolate(xs: &[F], ys: &[F]) -> Self {
        let n = xs.len().min(ys.len());
        if n == 0 {
            return Self::zero();
        }
        if n == 1 {
            return Self::from_coeffs(vec![ys[0]]);
        }

        let vanishing = Self::from_roots(&xs[..n]);

        // Pesos w_i = prod_{j != i}(x_i - x_j), invertidos por lote.
        let mut weights = vec![F::ONE; n];
        for i in 0..n {
            let mut w = F::ONE;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let diff = xs[i].subtract_modular(&xs[j]);
                w = w.multiply_modular(&diff);
            }
            weights[i] = w;
        }
        let mut inv_weights = vec![F::ZERO; n];
        F::batch_invert(&mut inv_weights, &weights);

        let mut out = vec![F::ZERO; n];
        for i in 0..n {
            let linear = Self::from_coeffs(vec![xs[i].negate_modular(), F::ONE]);
            let (basis, _rem) = vanishing.divmod(&linear);

            let scale = ys[i].multiply_modular(&inv_weights[i]);
            for (k, c) in basis.coeffs.iter().enumerate().take(n) {
                let prod = scale.multiply_modular(c);
                out[k] = out[k].add_modular(&prod).normalize();
            }
        }

        Self::from_coeffs(out)
    }
}
