// [libs/core/math-engine/src/divisor.rs]
/*!
 * =================================================================
 * APARATO: EVAL-DOMAIN DIVISOR ENGINE (V5.2 - FUNCTION FIELD)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: DIVISORES D = a(x) - y*b(x) SOBRE DOMINIO {0..255}
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FUNCTION FIELD PRODUCT: multiplicar divisores en
 *    F(C)[y]/(y^2 - curve(x)) es punto a punto:
 *      r.a = a1*a2 + curve*b1*b2;  r.b = a1*b2 + a2*b1
 *    (la segunda via (a1+b1)(a2+b2) - a1a2 - b1b2, truco de Karatsuba).
 * 2. SOA LAYOUT: un vector alineado a 64 bytes por limb, N = 256 lanes;
 *    el kernel IFMA carga 8 lanes por registro sin reordenar.
 * 3. PRIVATE DISPATCH: espejo del despacho público pero interno:
 *    kernel escalar / AVX2 / IFMA elegido por bits de característica en
 *    la inicialización única.
 * 4. PRECOMPUTE: curve(i) = i^3 - 3i + b y pesos baricéntricos
 *    w_j = (-1)^(N-1-j) / (j! (N-1-j)!) con UNA inversión por lote.
 * 5. HAMMING DISCLOSURE: el grado del divisor de salida revela el peso
 *    de Hamming del escalar; es público por contrato (el grado de la
 *    salida siempre lo es) y está documentado en el API.
 * =================================================================
 */

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::fq::Fq;
use crate::helios::HeliosCurve;
use crate::poly::Poly;
use crate::secure::secure_erase;
use crate::selene::SeleneCurve;
use once_cell::sync::OnceCell;
use tracing::debug;
use zeroize::Zeroize;

/// Tamaño del dominio de evaluación (puntos enteros 0..255).
pub const EVAL_DOMAIN_SIZE: usize = 256;

/// Vector de limbs alineado a 64 bytes (una carga ZMM por 8 lanes).
#[derive(Clone)]
#[repr(align(64))]
pub struct AlignedLane(pub [u64; EVAL_DOMAIN_SIZE]);

impl Default for AlignedLane {
    fn default() -> Self {
        Self([0u64; EVAL_DOMAIN_SIZE])
    }
}

/**
 * Polinomio en dominio de evaluación: SoA con un vector por limb
 * radix-2^51 y contador de grado lógico.
 *
 * Invariante: el lane i vale f(i) para el polinomio abstracto f; los
 * limbs almacenados están normalizados (<= 51 bits).
 */
#[derive(Clone)]
pub struct FieldEvals<F: PrimeField> {
    /// limbs[l].0[i] = limb l del valor f(i).
    pub limbs: Box<[AlignedLane; 5]>,
    /// Grado lógico del polinomio representado.
    pub degree: usize,
    _field: core::marker::PhantomData<F>,
}

impl<F: PrimeField> FieldEvals<F> {
    /// Evals a cero, grado 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            limbs: Box::new([
                AlignedLane::default(),
                AlignedLane::default(),
                AlignedLane::default(),
                AlignedLane::default(),
                AlignedLane::default(),
            ]),
            degree: 0,
            _field: core::marker::PhantomData,
        }
    }

    /// Lee el lane i.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> F {
        let mut limbs = [0u64; 5];
        for l in 0..5 {
            limbs[l] = self.limbs[l].0[i];
        }
        F::from_raw_limbs(limbs)
    }

    /// Escribe el lane i (normalizado).
    #[inline]
    pub fn set(&mut self, i: usize, value: F) {
        let limbs = value.normalize().raw_limbs();
        for l in 0..5 {
            self.limbs[l].0[i] = limbs[l];
        }
    }

    /// Polinomio constante: f(i) = c para todo i.
    #[must_use]
    pub fn from_constant(c: &F) -> Self {
        let mut ev = Self::zero();
        for i in 0..EVAL_DOMAIN_SIZE {
            ev.set(i, *c);
        }
        ev.degree = 0;
        ev
    }

    /// Polinomio lineal f(x) = x - c: f(i) = i - c.
    #[must_use]
    pub fn from_linear(c: &F) -> Self {
        let mut ev = Self::zero();
        for i in 0..EVAL_DOMAIN_SIZE {
            let xi = F::from_u64(i as u64);
            ev.set(i, xi.subtract_modular(c));
        }
        ev.degree = 1;
        ev
    }
}

impl<F: PrimeField> Zeroize for FieldEvals<F> {
    fn zeroize(&mut self) {
        for lane in self.limbs.iter_mut() {
            lane.0.zeroize();
        }
        self.degree = 0;
    }
}

/// Divisor en dominio de evaluación: D(x, y) = a(x) - y * b(x).
#[derive(Clone)]
pub struct EvalDivisor<F: PrimeField> {
    /// Componente a(x).
    pub a: FieldEvals<F>,
    /// Componente b(x).
    pub b: FieldEvals<F>,
}

/// Divisor en dominio de coeficientes.
#[derive(Debug, Clone)]
pub struct Divisor<F: PrimeField> {
    /// Componente a(x).
    pub a: Poly<F>,
    /// Componente b(x).
    pub b: Poly<F>,
}

impl<F: PrimeField> Divisor<F> {
    /// Evalúa D(x, y) = a(x) - y * b(x).
    #[must_use]
    pub fn evaluate(&self, x: &F, y: &F) -> F {
        let av = self.a.evaluate(x);
        let bv = self.b.evaluate(x);
        av.subtract_modular(&y.multiply_modular(&bv))
    }
}

/// Firma del kernel interno de fusión de divisores.
type MergeKernelFn<F> =
    fn(&mut EvalDivisor<F>, &EvalDivisor<F>, &EvalDivisor<F>, &FieldEvals<F>);

/// Tablas precomputadas por campo + kernel de fusión elegido.
pub struct DivisorTables<F: PrimeField> {
    /// curve(i) = i^3 - 3i + b.
    pub curve_evals: FieldEvals<F>,
    /// Pesos baricéntricos del dominio entero.
    pub bary_weights: FieldEvals<F>,
    merge_kernel: MergeKernelFn<F>,
}

/**
 * Kernel de fusión escalar (baseline): producto en el cuerpo de
 * funciones, lane a lane.
 */
fn merge_kernel_scalar<F: PrimeField>(
    r: &mut EvalDivisor<F>,
    d1: &EvalDivisor<F>,
    d2: &EvalDivisor<F>,
    curve: &FieldEvals<F>,
) {
    for i in 0..EVAL_DOMAIN_SIZE {
        let a1 = d1.a.get(i);
        let a2 = d2.a.get(i);
        let b1 = d1.b.get(i);
        let b2 = d2.b.get(i);
        let cv = curve.get(i);

        let a1a2 = a1.multiply_modular(&a2);
        let b1b2 = b1.multiply_modular(&b2);
        let ra = a1a2.add_modular(&cv.multiply_modular(&b1b2)).normalize();
        r.a.set(i, ra);

        // r.b = (a1+b1)(a2+b2) - a1a2 - b1b2
        let t1 = a1.add_modular(&b1);
        let t2 = a2.add_modular(&b2);
        let rb = t1
            .multiply_modular(&t2)
            .subtract_modular(&a1a2)
            .subtract_modular(&b1b2);
        r.b.set(i, rb);
    }
}

/// Kernel de fusión 4-way AVX2 (64 iteraciones de 4 lanes).
#[cfg(target_arch = "x86_64")]
macro_rules! merge_kernel_avx2 {
    ($name:ident, $field:ty, $vector:ty, $packer:expr) => {
        fn $name(
            r: &mut EvalDivisor<$field>,
            d1: &EvalDivisor<$field>,
            d2: &EvalDivisor<$field>,
            curve: &FieldEvals<$field>,
        ) {
            // SAFETY: instalado en el despacho interno solo con AVX2 presente.
            unsafe {
                for base in (0..EVAL_DOMAIN_SIZE).step_by(4) {
                    let pack4 = |ev: &FieldEvals<$field>| -> $vector {
                        // SAFETY: misma garantía de característica del kernel.
                        unsafe {
                            $packer(
                                &ev.get(base),
                                &ev.get(base + 1),
                                &ev.get(base + 2),
                                &ev.get(base + 3),
                            )
                        }
                    };
                    let a1 = pack4(&d1.a);
                    let a2 = pack4(&d2.a);
                    let b1 = pack4(&d1.b);
                    let b2 = pack4(&d2.b);
                    let cv = pack4(curve);

                    let a1a2 = a1.mul(&a2);
                    let b1b2 = b1.mul(&b2);
                    let ra = a1a2.add(&cv.mul(&b1b2));
                    let t = a1.add(&b1).mul(&a2.add(&b2));
                    let rb = t.sub(&a1a2).sub(&b1b2);

                    let ra_s = ra.extract();
                    let rb_s = rb.extract();
                    for k in 0..4 {
                        r.a.set(base + k, ra_s[k]);
                        r.b.set(base + k, rb_s[k]);
                    }
                }
            }
        }
    };
}

#[cfg(target_arch = "x86_64")]
merge_kernel_avx2!(merge_kernel_fp_avx2, Fp, crate::simd::fp10x4::Fp10x4, crate::simd::fp10x4::Fp10x4::pack);
#[cfg(target_arch = "x86_64")]
merge_kernel_avx2!(merge_kernel_fq_avx2, Fq, crate::simd::fq10x4::Fq10x4, crate::simd::fq10x4::Fq10x4::pack);

/// Kernel de fusión 8-way IFMA (32 iteraciones de 8 lanes, carga SoA
/// directa: la representación radix-2^51 coincide con la de los lanes).
#[cfg(target_arch = "x86_64")]
macro_rules! merge_kernel_ifma {
    ($name:ident, $field:ty, $vector:ty) => {
        fn $name(
            r: &mut EvalDivisor<$field>,
            d1: &EvalDivisor<$field>,
            d2: &EvalDivisor<$field>,
            curve: &FieldEvals<$field>,
        ) {
            // SAFETY: instalado solo con AVX-512F + IFMA presentes.
            unsafe {
                for base in (0..EVAL_DOMAIN_SIZE).step_by(8) {
                    let pack8 = |ev: &FieldEvals<$field>| -> $vector {
                        let mut elems = [<$field>::ZERO; 8];
                        for k in 0..8 {
                            elems[k] = ev.get(base + k);
                        }
                        // SAFETY: misma garantía de característica del kernel.
                        unsafe { <$vector>::pack(&elems) }
                    };
                    let a1 = pack8(&d1.a);
                    let a2 = pack8(&d2.a);
                    let b1 = pack8(&d1.b);
                    let b2 = pack8(&d2.b);
                    let cv = pack8(curve);

                    let a1a2 = a1.mul(&a2);
                    let b1b2 = b1.mul(&b2);
                    let ra = a1a2.add(&cv.mul(&b1b2));
                    let t = a1.add(&b1).mul(&a2.add(&b2));
                    let rb = t.sub(&a1a2).sub(&b1b2);

                    let ra_s = ra.extract();
                    let rb_s = rb.extract();
                    for k in 0..8 {
                        r.a.set(base + k, ra_s[k]);
                        r.b.set(base + k, rb_s[k]);
                    }
                }
            }
        }
    };
}

#[cfg(target_arch = "x86_64")]
merge_kernel_ifma!(merge_kernel_fp_ifma, Fp, crate::simd::fp51x8::Fp51x8);
#[cfg(target_arch = "x86_64")]
merge_kernel_ifma!(merge_kernel_fq_ifma, Fq, crate::simd::fq51x8::Fq51x8);

/// Selección del kernel por bits de característica (espejo privado del
/// despacho público).
#[allow(unused_mut, unused_assignments)]
fn select_merge_kernel<F: PrimeField>(
    avx2: Option<MergeKernelFn<F>>,
    ifma: Option<MergeKernelFn<F>>,
) -> MergeKernelFn<F> {
    let mut chosen: MergeKernelFn<F> = merge_kernel_scalar::<F>;
    #[cfg(target_arch = "x86_64")]
    {
        let features = crate::hardware::cpu_features();
        if features.avx512_ifma {
            if let Some(k) = ifma {
                chosen = k;
            }
        } else if features.avx2 {
            if let Some(k) = avx2 {
                chosen = k;
            }
        }
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = (avx2, ifma);
    }
    chosen
}

/// Construye las tablas de un campo: curve(i), pesos baricéntricos y
/// kernel de fusión.
fn build_tables<F: PrimeField>(
    curve_b: &F,
    avx2: Option<MergeKernelFn<F>>,
    ifma: Option<MergeKernelFn<F>>,
) -> DivisorTables<F> {
    let n = EVAL_DOMAIN_SIZE;

    // curve(i) = i^3 - 3i + b
    let mut curve_evals = FieldEvals::zero();
    let three = F::from_u64(3);
    for i in 0..n {
        let xi = F::from_u64(i as u64);
        let xi3 = xi.square_modular().multiply_modular(&xi);
        let cv = xi3
            .subtract_modular(&three.multiply_modular(&xi))
            .add_modular(curve_b)
            .normalize();
        curve_evals.set(i, cv);
    }

    // fact[i] = i!; denom[j] = j! * (N-1-j)!; una inversión por lote.
    let mut fact = vec![F::ONE; n];
    for i in 1..n {
        fact[i] = fact[i - 1].multiply_modular(&F::from_u64(i as u64));
    }
    let mut denom = vec![F::ZERO; n];
    for j in 0..n {
        denom[j] = fact[j].multiply_modular(&fact[n - 1 - j]);
    }
    let mut inv_denom = vec![F::ZERO; n];
    F::batch_invert(&mut inv_denom, &denom);

    let mut bary_weights = FieldEvals::zero();
    for j in 0..n {
        let w = if (n - 1 - j) % 2 == 1 {
            inv_denom[j].negate_modular()
        } else {
            inv_denom[j]
        };
        bary_weights.set(j, w);
    }

    let merge_kernel = select_merge_kernel(avx2, ifma);
    debug!(field = F::FIELD_NAME, "tablas de divisores inicializadas");

    DivisorTables { curve_evals, bary_weights, merge_kernel }
}

static FP_TABLES: OnceCell<DivisorTables<Fp>> = OnceCell::new();
static FQ_TABLES: OnceCell<DivisorTables<Fq>> = OnceCell::new();

/// Tablas de divisores de F_p (curva Helios), inicialización única.
#[must_use]
pub fn fp_tables() -> &'static DivisorTables<Fp> {
    FP_TABLES.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        let (avx2, ifma) = (
            Some(merge_kernel_fp_avx2 as MergeKernelFn<Fp>),
            Some(merge_kernel_fp_ifma as MergeKernelFn<Fp>),
        );
        #[cfg(not(target_arch = "x86_64"))]
        let (avx2, ifma) = (None, None);
        build_tables(&HeliosCurve::B, avx2, ifma)
    })
}

/// Tablas de divisores de F_q (curva Selene), inicialización única.
#[must_use]
pub fn fq_tables() -> &'static DivisorTables<Fq> {
    FQ_TABLES.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        let (avx2, ifma) = (
            Some(merge_kernel_fq_avx2 as MergeKernelFn<Fq>),
            Some(merge_kernel_fq_ifma as MergeKernelFn<Fq>),
        );
        #[cfg(not(target_arch = "x86_64"))]
        let (avx2, ifma) = (None, None);
        build_tables(&SeleneCurve::B, avx2, ifma)
    })
}

/// Acceso a las tablas del campo de una curva del ciclo.
pub trait DivisorField: PrimeField {
    /// Tablas precomputadas del campo (singleton de proceso).
    fn tables() -> &'static DivisorTables<Self>;
}

impl DivisorField for Fp {
    fn tables() -> &'static DivisorTables<Fp> {
        fp_tables()
    }
}

impl DivisorField for Fq {
    fn tables() -> &'static DivisorTables<Fq> {
        fq_tables()
    }
}

// --- Operaciones en dominio de evaluación ---

/// Suma lane a lane; el grado resultante es el máximo.
pub fn evals_add<F: DivisorField>(a: &FieldEvals<F>, b: &FieldEvals<F>) -> FieldEvals<F> {
    let mut r = FieldEvals::zero();
    for i in 0..EVAL_DOMAIN_SIZE {
        r.set(i, a.get(i).add_modular(&b.get(i)).normalize());
    }
    r.degree = a.degree.max(b.degree);
    r
}

/// Resta lane a lane.
pub fn evals_sub<F: DivisorField>(a: &FieldEvals<F>, b: &FieldEvals<F>) -> FieldEvals<F> {
    let mut r = FieldEvals::zero();
    for i in 0..EVAL_DOMAIN_SIZE {
        r.set(i, a.get(i).subtract_modular(&b.get(i)));
    }
    r.degree = a.degree.max(b.degree);
    r
}

/// Producto lane a lane; los grados se suman.
pub fn evals_mul<F: DivisorField>(a: &FieldEvals<F>, b: &FieldEvals<F>) -> FieldEvals<F> {
    let mut r = FieldEvals::zero();
    for i in 0..EVAL_DOMAIN_SIZE {
        r.set(i, a.get(i).multiply_modular(&b.get(i)));
    }
    r.degree = a.degree + b.degree;
    r
}

/**
 * Evaluación baricéntrica en un punto c FUERA del dominio:
 * f(c) = L(c) * sum_j w_j f(j) / (c - j), con L(c) = prod_j (c - j).
 */
pub fn evals_bary_eval<F: DivisorField + 'static>(ev: &FieldEvals<F>, c: &F) -> F {
    let tables = F::tables();
    let n = EVAL_DOMAIN_SIZE;

    let mut diffs = vec![F::ZERO; n];
    for j in 0..n {
        diffs[j] = c.subtract_modular(&F::from_u64(j as u64));
    }
    let mut inv_diffs = vec![F::ZERO; n];
    F::batch_invert(&mut inv_diffs, &diffs);

    let mut l_of_c = diffs[0];
    for d in diffs.iter().skip(1) {
        l_of_c = l_of_c.multiply_modular(d);
    }

    let mut sum = F::ZERO;
    for j in 0..n {
        let term = tables
            .bary_weights
            .get(j)
            .multiply_modular(&ev.get(j))
            .multiply_modular(&inv_diffs[j]);
        sum = sum.add_modular(&term).normalize();
    }

    l_of_c.multiply_modular(&sum)
}

/**
 * División exacta por (x - c) en dominio de evaluación:
 * q(j) = (f(j) - f(c)) / (j - c), con f(c) baricéntrico.
 */
pub fn evals_div_linear<F: DivisorField + 'static>(f: &FieldEvals<F>, c: &F) -> FieldEvals<F> {
    let n = EVAL_DOMAIN_SIZE;
    let fc = evals_bary_eval(f, c);

    let mut diffs = vec![F::ZERO; n];
    for j in 0..n {
        diffs[j] = F::from_u64(j as u64).subtract_modular(c);
    }
    let mut inv_diffs = vec![F::ZERO; n];
    F::batch_invert(&mut inv_diffs, &diffs);

    let mut q = FieldEvals::zero();
    for j in 0..n {
        let numer = f.get(j).subtract_modular(&fc);
        q.set(j, numer.multiply_modular(&inv_diffs[j]));
    }
    q.degree = f.degree.saturating_sub(1);
    q
}

/**
 * Interpolación a coeficientes: usa los primeros grado+1 puntos enteros
 * del dominio (Lagrange con pesos por lote).
 */
pub fn evals_to_poly<F: DivisorField>(ev: &FieldEvals<F>) -> Poly<F> {
    let n = (ev.degree + 1).min(EVAL_DOMAIN_SIZE);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for i in 0..n {
        xs.push(F::from_u64(i as u64));
        ys.push(ev.get(i));
    }
    Poly::interpolate(&xs, &ys)
}

// --- Operaciones de divisores ---

impl<F: DivisorField + 'static> EvalDivisor<F> {
    /**
     * Divisor de un punto afín P = (px, py): a(x) = py^2 y b(x) = py,
     * constantes en todo el dominio. D(px, py) = py^2 - py*py = 0.
     */
    #[must_use]
    pub fn from_point<C: CycleCurve<Field = F>>(point: &AffinePoint<C>) -> Self {
        let py_sq = point.y.square_modular();
        Self {
            a: FieldEvals::from_constant(&py_sq),
            b: FieldEvals::from_constant(&point.y),
        }
    }

    /**
     * Fusión: producto en el cuerpo de funciones via el kernel interno
     * despachado (escalar / AVX2 / IFMA).
     *
     * Contabilidad de grados: deg(a) = max(deg a1 + deg a2,
     * 3 + deg b1 + deg b2) por el término cúbico de la curva;
     * deg(b) = max(deg a1 + deg b2, deg a2 + deg b1).
     */
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let tables = F::tables();
        let mut r = Self { a: FieldEvals::zero(), b: FieldEvals::zero() };
        (tables.merge_kernel)(&mut r, self, other, &tables.curve_evals);

        let mut a_deg = self.a.degree + other.a.degree;
        let curve_deg = 3 + self.b.degree + other.b.degree;
        if curve_deg > a_deg {
            a_deg = curve_deg;
        }
        r.a.degree = a_deg;
        r.b.degree = (self.a.degree + other.b.degree).max(other.a.degree + self.b.degree);
        r
    }

    /// Conversión al dominio de coeficientes (interpola a y b).
    #[must_use]
    pub fn to_divisor(&self) -> Divisor<F> {
        Divisor { a: evals_to_poly(&self.a), b: evals_to_poly(&self.b) }
    }
}

impl<F: PrimeField> Zeroize for EvalDivisor<F> {
    fn zeroize(&mut self) {
        self.a.zeroize();
        self.b.zeroize();
    }
}

/**
 * Reducción en árbol: fusiona pares de divisores nivel a nivel y captura
 * en paralelo las sumas EC de los soportes (adición segura: los pares
 * pueden colisionar o anularse).
 *
 * Tras log n niveles, la raíz es el divisor del conjunto completo y la
 * suma acumulada es la suma EC de todos los puntos.
 */
pub fn tree_reduce<C>(
    divisors: &[EvalDivisor<C::Field>],
    points: &[AffinePoint<C>],
) -> Option<(EvalDivisor<C::Field>, JacobianPoint<C>)>
where
    C: CycleCurve,
    C::Field: DivisorField,
{
    let n = divisors.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some((divisors[0].clone(), JacobianPoint::from_affine(&points[0])));
    }

    let mut current: Vec<EvalDivisor<C::Field>> = divisors.to_vec();
    let mut sums: Vec<JacobianPoint<C>> =
        points.iter().map(JacobianPoint::from_affine).collect();

    while current.len() > 1 {
        let m = current.len();
        let pairs = m / 2;
        let mut next = Vec::with_capacity(pairs + (m & 1));
        let mut next_sums = Vec::with_capacity(pairs + (m & 1));

        for i in 0..pairs {
            next.push(current[2 * i].merge(&current[2 * i + 1]));
            next_sums.push(sums[2 * i].add(&sums[2 * i + 1]));
        }
        if m & 1 == 1 {
            next.push(current[m - 1].clone());
            next_sums.push(sums[m - 1]);
        }

        for d in current.iter_mut() {
            d.zeroize();
        }
        current = next;
        sums = next_sums;
    }

    Some((current.remove(0), sums[0]))
}

/// Constructor directo del divisor de coeficientes de un soporte de un
/// solo punto (el caso n = 1 del camino escalar).
#[must_use]
pub fn compute_divisor_single<C>(point: &AffinePoint<C>) -> Divisor<C::Field>
where
    C: CycleCurve,
    C::Field: DivisorField,
{
    let py_sq = point.y.square_modular();
    Divisor {
        a: Poly::from_coeffs(vec![py_sq]),
        b: Poly::from_coeffs(vec![point.y]),
    }
}

/**
 * Divisor de una multiplicación escalar k*P.
 *
 * 1. Barrido de bit más alto de TIEMPO CONSTANTE sobre las 256
 *    posiciones (reducción bitwise sin salida temprana).
 * 2. Una copia afín de P por cada bit encendido de k.
 * 3. n = 1: constructor directo. n > 1: divisores por punto + reducción
 *    en árbol + conversión a coeficientes.
 * 4. Borrado seguro de todo intermedio derivado del escalar.
 *
 * NOTA: el peso de Hamming del escalar es observable en el grado del
 * divisor de salida; el grado de la salida es público por contrato, así
 * que no constituye canal lateral adicional. El llamador garantiza
 * peso de Hamming <= 256.
 */
pub fn scalar_mul_divisor<C>(
    scalar: &[u8; 32],
    point: &AffinePoint<C>,
) -> Divisor<C::Field>
where
    C: CycleCurve,
    C::Field: DivisorField,
{
    // Barrido CT del bit más alto: pliegue bitwise, sin salidas tempranas.
    let mut highest_bit: i32 = -1;
    for i in 0..256 {
        let bit = i32::from((scalar[i / 8] >> (i % 8)) & 1);
        highest_bit ^= (highest_bit ^ i as i32) & bit.wrapping_neg();
    }

    if highest_bit < 0 {
        // Escalar cero: divisor vacío (a = b = 0).
        return Divisor { a: Poly::zero(), b: Poly::zero() };
    }

    // Una copia de P por bit encendido.
    let mut add_points: Vec<AffinePoint<C>> = Vec::new();
    for i in (0..256).rev() {
        if (scalar[i / 8] >> (i % 8)) & 1 == 1 {
            add_points.push(*point);
        }
    }

    let n = add_points.len();
    if n == 1 {
        let out = compute_divisor_single(&add_points[0]);
        for p in add_points.iter_mut() {
            p.zeroize();
        }
        return out;
    }

    let mut divisors: Vec<EvalDivisor<C::Field>> =
        add_points.iter().map(EvalDivisor::from_point).collect();

    let (mut root, _sum) = tree_reduce(&divisors, &add_points)
        .expect("support is non-empty by construction");

    let out = root.to_divisor();

    // Borrado de intermedios derivados del escalar.
    root.zeroize();
    for d in divisors.iter_mut() {
        d.zeroize();
    }
    for p in add_points.iter_mut() {
        p.zeroize();
    }
    let mut hb = highest_bit;
    secure_erase(&mut hb);

    out
}
