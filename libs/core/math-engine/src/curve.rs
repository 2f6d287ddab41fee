// [libs/core/math-engine/src/curve.rs]
/*!
 * =================================================================
 * APARATO: UNIFIED JACOBIAN CURVE ENGINE (V5.1 - A=-3 SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: LEY DE GRUPO PROYECTIVA PARA EL CICLO HELIOS/SELENE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CYCLE GENERICITY: Una sola implementación de la ley de grupo sirve
 *    a ambas curvas via el contrato PrimeField; el par de curvas difiere
 *    solo en constantes (b, generador, orden).
 * 2. FORMULA SOVEREIGNTY: dbl-2001-b (3M+5S, a=-3), add-2007-bl
 *    (11M+5S) y madd-2007-bl (7M+4S); el envoltorio 'add' detecta
 *    identidad, P==Q y P==-Q, casos donde las fórmulas crudas producen
 *    basura.
 * 3. BIAS DISCIPLINE: Acumulaciones de más de una adición se normalizan
 *    antes de entrar como sustraendo (el sesgo 4p/8q solo absorbe limbs
 *    de hasta 53 bits).
 * 4. CODEC: Compresión de 32 bytes (x LE, bit 255 = paridad de y);
 *    la identidad no tiene codificación comprimida en este núcleo.
 * =================================================================
 */

use crate::errors::MathError;
use crate::field::PrimeField;
use core::marker::PhantomData;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Parámetros de configuración de una curva del ciclo (y^2 = x^3 - 3x + b).
pub trait CycleCurve: Copy + Clone + core::fmt::Debug + 'static {
    /// Campo base de la curva.
    type Field: PrimeField;
    /// Constante b de la ecuación corta de Weierstrass.
    const B: Self::Field;
    /// Coordenada x del generador.
    const GENERATOR_X: Self::Field;
    /// Coordenada y del generador.
    const GENERATOR_Y: Self::Field;
    /// Orden del grupo en 32 bytes little-endian (= característica del
    /// campo base de la curva hermana: propiedad de ciclo).
    const ORDER_BYTES: [u8; 32];
    /// Nombre para diagnósticos y errores.
    const CURVE_NAME: &'static str;
}

/// Punto en coordenadas Jacobianas: (X : Y : Z) representa (X/Z^2, Y/Z^3).
///
/// La identidad es cualquier triple con Z = 0; la forma canónica es (1,1,0).
#[derive(Debug, Clone, Copy)]
pub struct JacobianPoint<C: CycleCurve> {
    /// Coordenada X proyectiva.
    pub x: C::Field,
    /// Coordenada Y proyectiva.
    pub y: C::Field,
    /// Denominador proyectivo compartido.
    pub z: C::Field,
    _curve: PhantomData<C>,
}

/// Punto afín (x, y). La identidad NO es representable: los consumidores
/// la rastrean por separado.
#[derive(Debug, Clone, Copy)]
pub struct AffinePoint<C: CycleCurve> {
    /// Coordenada x.
    pub x: C::Field,
    /// Coordenada y.
    pub y: C::Field,
    _curve: PhantomData<C>,
}

impl<C: CycleCurve> AffinePoint<C> {
    /// Constructor directo.
    #[inline(always)]
    #[must_use]
    pub fn new(x: C::Field, y: C::Field) -> Self {
        Self { x, y, _curve: PhantomData }
    }

    /// Chequeo de pertenencia a la curva: y^2 == x^3 - 3x + b.
    ///
    /// Variable-time: solo para entradas públicas.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        let lhs = self.y.square_modular();
        let x2 = self.x.square_modular();
        let x3 = x2.multiply_modular(&self.x);
        let three_x = self.x.add_modular(&self.x).add_modular(&self.x).normalize();
        let rhs = x3.subtract_modular(&three_x).add_modular(&C::B);
        !lhs.subtract_modular(&rhs).is_nonzero()
    }

    /// cmov afín de tiempo constante.
    #[inline(always)]
    pub fn conditional_assign_point(&mut self, other: &Self, flag: Choice) {
        self.x = C::Field::conditional_select(&self.x, &other.x, flag);
        self.y = C::Field::conditional_select(&self.y, &other.y, flag);
    }

    /// cneg afín de tiempo constante.
    #[inline(always)]
    pub fn conditional_negate_y(&mut self, flag: Choice) {
        self.y.conditional_negate_assign(flag);
    }
}

impl<C: CycleCurve> Zeroize for AffinePoint<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

impl<C: CycleCurve> JacobianPoint<C> {
    /// Identidad canónica del grupo: (1 : 1 : 0).
    #[inline(always)]
    #[must_use]
    pub fn identity() -> Self {
        Self { x: C::Field::ONE, y: C::Field::ONE, z: C::Field::ZERO, _curve: PhantomData }
    }

    /// Generador configurado de la curva.
    #[inline(always)]
    #[must_use]
    pub fn generator() -> Self {
        Self {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
            z: C::Field::ONE,
            _curve: PhantomData,
        }
    }

    /// Constructor desde coordenadas proyectivas crudas.
    #[inline(always)]
    #[must_use]
    pub fn from_parts(x: C::Field, y: C::Field, z: C::Field) -> Self {
        Self { x, y, z, _curve: PhantomData }
    }

    /// true si Z == 0.
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        !self.z.is_nonzero()
    }

    /// Ascensión afín -> Jacobiano (Z = 1).
    #[inline(always)]
    #[must_use]
    pub fn from_affine(p: &AffinePoint<C>) -> Self {
        Self { x: p.x, y: p.y, z: C::Field::ONE, _curve: PhantomData }
    }

    /// Proyección Jacobiano -> afín: x = X/Z^2, y = Y/Z^3 (inv0 si Z = 0).
    #[must_use]
    pub fn to_affine(&self) -> AffinePoint<C> {
        let z_inv = self.z.invert_modular();
        let z_inv2 = z_inv.square_modular();
        let z_inv3 = z_inv2.multiply_modular(&z_inv);
        AffinePoint::new(
            self.x.multiply_modular(&z_inv2),
            self.y.multiply_modular(&z_inv3),
        )
    }

    /// Negación: (X : -Y : Z).
    #[inline(always)]
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x, y: self.y.negate_modular(), z: self.z, _curve: PhantomData }
    }

    /// cmov de tiempo constante: self = flag ? other : self.
    #[inline(always)]
    pub fn conditional_assign_point(&mut self, other: &Self, flag: Choice) {
        self.x = C::Field::conditional_select(&self.x, &other.x, flag);
        self.y = C::Field::conditional_select(&self.y, &other.y, flag);
        self.z = C::Field::conditional_select(&self.z, &other.z, flag);
    }

    /// cneg de tiempo constante.
    #[inline(always)]
    pub fn conditional_negate_y(&mut self, flag: Choice) {
        self.y.conditional_negate_assign(flag);
    }

    /**
     * Duplicación Jacobiana dbl-2001-b con a = -3. Coste: 3M + 5S.
     *
     * # Mathematical Proof:
     * alpha = 3(X - delta)(X + delta) factoriza 3(X^2 - Z^4) gracias a
     * a = -3, ahorrando una multiplicación completa frente a la fórmula
     * general.
     */
    #[must_use]
    pub fn double(&self) -> Self {
        let delta = self.z.square_modular();
        let gamma = self.y.square_modular();
        let beta = self.x.multiply_modular(&gamma);

        // alpha = 3 * (X - delta) * (X + delta)
        let t0 = self.x.subtract_modular(&delta);
        let t1 = self.x.add_modular(&delta);
        let alpha_raw = t0.multiply_modular(&t1);
        let alpha = alpha_raw.add_modular(&alpha_raw).add_modular(&alpha_raw);

        // X3 = alpha^2 - 8*beta
        let beta2 = beta.add_modular(&beta);
        let beta4 = beta2.add_modular(&beta2);
        let beta8 = beta4.add_modular(&beta4).normalize();
        let x3 = alpha.square_modular().subtract_modular(&beta8);

        // Z3 = (Y + Z)^2 - gamma - delta
        let yz = self.y.add_modular(&self.z);
        let z3 = yz
            .square_modular()
            .subtract_modular(&gamma)
            .subtract_modular(&delta);

        // Y3 = alpha * (4*beta - X3) - 8*gamma^2
        let t2 = beta4.normalize().subtract_modular(&x3);
        let t3 = alpha.multiply_modular(&t2);
        let g2 = gamma.square_modular();
        let g4 = g2.add_modular(&g2);
        let g8 = g4.add_modular(&g4).normalize();
        let y3 = t3.subtract_modular(&g8);

        Self { x: x3, y: y3, z: z3, _curve: PhantomData }
    }

    /**
     * Adición Jacobiana general add-2007-bl. Coste: 11M + 5S.
     *
     * FÓRMULA CRUDA: produce basura si algún operando es la identidad,
     * P == Q o P == -Q. Usar 'add' (el envoltorio seguro) en cualquier
     * sitio donde los operandos puedan ser no genéricos.
     */
    #[must_use]
    pub fn add_raw(&self, other: &Self) -> Self {
        let z1z1 = self.z.square_modular();
        let z2z2 = other.z.square_modular();
        let u1 = self.x.multiply_modular(&z2z2);
        let u2 = other.x.multiply_modular(&z1z1);
        let s1 = self.y.multiply_modular(&other.z).multiply_modular(&z2z2);
        let s2 = other.y.multiply_modular(&self.z).multiply_modular(&z1z1);

        let h = u2.subtract_modular(&u1);
        let h2 = h.add_modular(&h);
        let i = h2.square_modular();
        let j = h.multiply_modular(&i);
        let sdiff = s2.subtract_modular(&s1);
        let r = sdiff.add_modular(&sdiff);
        let v = u1.multiply_modular(&i);

        // X3 = r^2 - J - 2V
        let v2 = v.add_modular(&v).normalize();
        let x3 = r.square_modular().subtract_modular(&j).subtract_modular(&v2);

        // Y3 = r * (V - X3) - 2 * S1 * J
        let s1j = s1.multiply_modular(&j);
        let s1j2 = s1j.add_modular(&s1j).normalize();
        let y3 = r
            .multiply_modular(&v.subtract_modular(&x3))
            .subtract_modular(&s1j2);

        // Z3 = ((Z1 + Z2)^2 - Z1Z1 - Z2Z2) * H
        let zsum = self.z.add_modular(&other.z);
        let z3 = zsum
            .square_modular()
            .subtract_modular(&z1z1)
            .subtract_modular(&z2z2)
            .multiply_modular(&h);

        Self { x: x3, y: y3, z: z3, _curve: PhantomData }
    }

    /**
     * Adición mixta madd-2007-bl (segundo operando afín, Z = 1).
     * Coste: 7M + 4S. Misma advertencia de fórmula cruda que add_raw.
     */
    #[must_use]
    pub fn add_mixed_raw(&self, other: &AffinePoint<C>) -> Self {
        let z1z1 = self.z.square_modular();
        let u2 = other.x.multiply_modular(&z1z1);
        let s2 = other.y.multiply_modular(&self.z).multiply_modular(&z1z1);

        let h = u2.subtract_modular(&self.x);
        let hh = h.square_modular();
        let i2 = hh.add_modular(&hh);
        let i = i2.add_modular(&i2).normalize();
        let j = h.multiply_modular(&i);
        let sdiff = s2.subtract_modular(&self.y);
        let r = sdiff.add_modular(&sdiff);
        let v = self.x.multiply_modular(&i);

        let v2 = v.add_modular(&v).normalize();
        let x3 = r.square_modular().subtract_modular(&j).subtract_modular(&v2);

        let yj = self.y.multiply_modular(&j);
        let yj2 = yj.add_modular(&yj).normalize();
        let y3 = r
            .multiply_modular(&v.subtract_modular(&x3))
            .subtract_modular(&yj2);

        let zh = self.z.add_modular(&h);
        let z3 = zh
            .square_modular()
            .subtract_modular(&z1z1)
            .subtract_modular(&hh);

        Self { x: x3, y: y3, z: z3, _curve: PhantomData }
    }

    /**
     * Adición segura: detecta identidad, P == Q (-> double) y P == -Q
     * (-> identidad) antes de delegar en la fórmula cruda.
     *
     * La comparación es proyectiva: X1*Z2^2 == X2*Z1^2 y el análogo en Y.
     * Variable-time sobre la ESTRUCTURA de los operandos (no sobre bits
     * de escalar); es el envoltorio obligatorio para operandos no
     * genéricos.
     */
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square_modular();
        let z2z2 = other.z.square_modular();
        let u1 = self.x.multiply_modular(&z2z2);
        let u2 = other.x.multiply_modular(&z1z1);
        if !u1.subtract_modular(&u2).is_nonzero() {
            let s1 = self.y.multiply_modular(&other.z).multiply_modular(&z2z2);
            let s2 = other.y.multiply_modular(&self.z).multiply_modular(&z1z1);
            if !s1.subtract_modular(&s2).is_nonzero() {
                return self.double(); // P == Q
            }
            return Self::identity(); // P == -Q
        }

        self.add_raw(other)
    }

    /**
     * Adición mixta segura: detecta identidad del acumulador, P == Q y
     * P == -Q antes de delegar en madd-2007-bl. Es el Hot-Path del
     * barrido secuencial de ventanas en tiempo variable.
     */
    #[must_use]
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        if self.is_identity() {
            return Self::from_affine(other);
        }

        let z1z1 = self.z.square_modular();
        let u2 = other.x.multiply_modular(&z1z1);
        if !u2.subtract_modular(&self.x).is_nonzero() {
            let s2 = other.y.multiply_modular(&self.z).multiply_modular(&z1z1);
            if !s2.subtract_modular(&self.y).is_nonzero() {
                return self.double();
            }
            return Self::identity();
        }

        self.add_mixed_raw(other)
    }

    /**
     * Conversión por lote a afín via el truco de Montgomery:
     * 1 inversión + 3(n-1) multiplicaciones.
     *
     * Requiere puntos no identidad (Z != 0); los llamadores del núcleo lo
     * garantizan por construcción de sus tablas.
     */
    pub fn batch_to_affine(points: &[Self]) -> Vec<AffinePoint<C>> {
        let n = points.len();
        let mut out = Vec::with_capacity(n);
        if n == 0 {
            return out;
        }

        let mut products = vec![C::Field::ZERO; n];
        products[0] = points[0].z;
        for i in 1..n {
            products[i] = products[i - 1].multiply_modular(&points[i].z);
        }

        let mut inv = products[n - 1].invert_modular();

        out.resize(n, AffinePoint::new(C::Field::ZERO, C::Field::ZERO));
        for i in (1..n).rev() {
            let z_inv = inv.multiply_modular(&products[i - 1]);
            inv = inv.multiply_modular(&points[i].z);

            let z_inv2 = z_inv.square_modular();
            let z_inv3 = z_inv2.multiply_modular(&z_inv);
            out[i] = AffinePoint::new(
                points[i].x.multiply_modular(&z_inv2),
                points[i].y.multiply_modular(&z_inv3),
            );
        }
        let z_inv2 = inv.square_modular();
        let z_inv3 = z_inv2.multiply_modular(&inv);
        out[0] = AffinePoint::new(
            points[0].x.multiply_modular(&z_inv2),
            points[0].y.multiply_modular(&z_inv3),
        );

        inv.zeroize();
        for fe in products.iter_mut() {
            fe.zeroize();
        }
        out
    }

    /**
     * Compresión a 32 bytes: x little-endian con bit 255 = paridad de y.
     *
     * La identidad no tiene codificación en este núcleo; comprimirla
     * produce la imagen inv0 (x = y = 0) y es responsabilidad del
     * llamador enmarcarla.
     */
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let affine = self.to_affine();
        let mut s = affine.x.to_bytes();
        s[31] |= u8::from(affine.y.is_negative()) << 7;
        s
    }

    /// Solo la coordenada x canónica (sin bit de paridad).
    #[must_use]
    pub fn x_coordinate_bytes(&self) -> [u8; 32] {
        self.to_affine().x.to_bytes()
    }

    /**
     * Descompresión desde 32 bytes.
     *
     * 1. Extrae el bit de paridad y limpia el bit 255 de x.
     * 2. Rechaza x no canónica.
     * 3. rhs = x^3 - 3x + b; y = sqrt(rhs); rechaza si y^2 != rhs.
     * 4. Alinea la paridad de y con la solicitada.
     *
     * # Errors:
     * NonCanonicalFieldElement / PointNotOnCurve según la fase que falle.
     * Los retornos tempranos son deliberadamente variable-time: los bytes
     * de entrada son datos públicos no confiables.
     */
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, MathError> {
        let y_parity = (bytes[31] >> 7) & 1;
        let mut x_bytes = *bytes;
        x_bytes[31] &= 0x7f;

        let x = C::Field::from_bytes_canonical(&x_bytes)?;

        // rhs = x^3 - 3x + b
        let x2 = x.square_modular();
        let x3 = x2.multiply_modular(&x);
        let three_x = x.add_modular(&x).add_modular(&x).normalize();
        let rhs = x3.subtract_modular(&three_x).add_modular(&C::B);

        let mut y = rhs.sqrt_candidate();
        if y.square_modular().subtract_modular(&rhs).is_nonzero() {
            return Err(MathError::PointNotOnCurve(C::CURVE_NAME));
        }

        if u8::from(y.is_negative()) != y_parity {
            y = y.negate_modular();
        }

        Ok(Self { x, y, z: C::Field::ONE, _curve: PhantomData })
    }
}

impl<C: CycleCurve> Zeroize for JacobianPoint<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}

impl<C: CycleCurve> PartialEq for JacobianPoint<C> {
    /// Igualdad proyectiva: compara las imágenes afines canónicas.
    fn eq(&self, other: &Self) -> bool {
        let self_ident = self.is_identity();
        let other_ident = other.is_identity();
        if self_ident || other_ident {
            return self_ident == other_ident;
        }
        let z1z1 = self.z.square_modular();
        let z2z2 = other.z.square_modular();
        let u1 = self.x.multiply_modular(&z2z2);
        let u2 = other.x.multiply_modular(&z1z1);
        if u1.subtract_modular(&u2).is_nonzero() {
            return false;
        }
        let s1 = self.y.multiply_modular(&other.z).multiply_modular(&z2z2);
        let s2 = other.y.multiply_modular(&self.z).multiply_modular(&z1z1);
        !s1.subtract_modular(&s2).is_nonzero()
    }
}

impl<C: CycleCurve> Eq for JacobianPoint<C> {}
