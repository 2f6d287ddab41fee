// [libs/core/math-engine/src/map_to_curve.rs]
/*!
 * =================================================================
 * APARATO: SIMPLIFIED SWU ENGINE (V3.0 - RFC 9380 §6.6.2)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: MAP-TO-CURVE DE TIEMPO CONSTANTE PARA AMBAS CURVAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SSWU DIRECTO: A = -3 y B = b son no nulos en ambas curvas, así que
 *    el SWU simplificado aplica sin isogenia auxiliar.
 * 2. Z POR CAMPO: Z = 7 (Helios) y Z = -4 (Selene), no-residuos
 *    cuadráticos con g(B/(Z*A)) cuadrado, según la receta del RFC.
 * 3. CT DISCIPLINE: ambos candidatos x, ambos g(x) y ambas raíces se
 *    computan SIEMPRE; un cmov selecciona por sqrt(gx1)^2 == gx1 y la
 *    paridad de y se alinea con sgn0(u) via cneg.
 * 4. ENCODE-TO-CURVE: map_to_curve2 mapea dos elementos y suma (adición
 *    segura), el primitivo completo de hash-to-curve.
 * =================================================================
 */

use crate::curve::{CycleCurve, JacobianPoint};
use crate::field::PrimeField;
use subtle::ConditionallySelectable;

/// Constantes SSWU precomputadas de una curva del ciclo (32 bytes LE
/// cada una, derivadas fuera de línea de A = -3, B = b y Z).
pub trait SswuParams: CycleCurve {
    /// Z: no-residuo cuadrático del campo.
    const SSWU_Z: [u8; 32];
    /// -B/A = b/3.
    const SSWU_NEG_B_OVER_A: [u8; 32];
    /// B/(Z*A).
    const SSWU_B_OVER_ZA: [u8; 32];
}

impl SswuParams for crate::helios::HeliosCurve {
    /// Z = 7.
    const SSWU_Z: [u8; 32] = {
        let mut z = [0u8; 32];
        z[0] = 7;
        z
    };
    const SSWU_NEG_B_OVER_A: [u8; 32] = [
        0x9c, 0x13, 0x9d, 0xa4, 0xa0, 0xdf, 0xe6, 0x60, 0xbc, 0x3f, 0xb1, 0x15, 0x68, 0x7a,
        0x6a, 0x01, 0x69, 0x7e, 0x3e, 0x6a, 0xce, 0x37, 0xdc, 0x94, 0x3d, 0xd0, 0xf8, 0x3a,
        0x13, 0xed, 0xa2, 0x0b,
    ];
    const SSWU_B_OVER_ZA: [u8; 32] = [
        0x69, 0x8f, 0xe9, 0xc3, 0x56, 0x72, 0xba, 0x16, 0xe5, 0xf6, 0x78, 0x21, 0xf1, 0xc9,
        0xf0, 0x48, 0x83, 0x12, 0xf7, 0x39, 0x50, 0x8a, 0xe0, 0x33, 0xf7, 0x4f, 0x93, 0xf7,
        0x6a, 0x70, 0x56, 0x7e,
    ];
}

impl SswuParams for crate::selene::SeleneCurve {
    /// Z = -4 mod q.
    const SSWU_Z: [u8; 32] = [
        0x9b, 0xc7, 0x27, 0x79, 0x72, 0xd2, 0xb6, 0x6e, 0x58, 0x6b, 0x65, 0xb7, 0x2c, 0x78,
        0x7f, 0xbf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ];
    const SSWU_NEG_B_OVER_A: [u8; 32] = [
        0xc8, 0xc1, 0xc8, 0x43, 0x81, 0x58, 0x9f, 0xcd, 0x04, 0x30, 0x3a, 0x02, 0xf5, 0xc3,
        0x86, 0xa6, 0x28, 0xf6, 0xff, 0x31, 0x37, 0xe9, 0xc5, 0x7f, 0x40, 0xd2, 0x72, 0x78,
        0x06, 0x7d, 0x5b, 0x25,
    ];
    const SSWU_B_OVER_ZA: [u8; 32] = [
        0x72, 0x30, 0xf2, 0x50, 0x20, 0xd6, 0x67, 0x33, 0x01, 0x8c, 0x8e, 0x40, 0xfd, 0xb0,
        0xa1, 0x29, 0x8a, 0xfd, 0x7f, 0xcc, 0x4d, 0x7a, 0xf1, 0x1f, 0x90, 0xb4, 0x1c, 0x9e,
        0x41, 0xdf, 0x56, 0x09,
    ];
}

/// g(x) = x^3 - 3x + b.
fn curve_equation<C: CycleCurve>(x: &C::Field) -> C::Field {
    let x2 = x.square_modular();
    let x3 = x2.multiply_modular(x);
    let three_x = x.add_modular(x).add_modular(x).normalize();
    x3.subtract_modular(&three_x).add_modular(&C::B).normalize()
}

/**
 * SWU simplificado: elemento de campo u -> punto Jacobiano (x : y : 1).
 *
 * # Mathematical Proof (RFC 9380 §6.6.2):
 * tv1 = inv0(Z^2 u^4 + Z u^2); x1 = (-B/A)(1 + tv1), o B/(Z*A) en el
 * caso excepcional tv1 = 0; x2 = Z u^2 x1. Exactamente uno de g(x1),
 * g(x2) es cuadrado; la selección y la alineación de signo son cmov.
 */
pub fn map_to_curve<C>(u_bytes: &[u8; 32]) -> JacobianPoint<C>
where
    C: CycleCurve + SswuParams,
{
    let u = C::Field::from_bytes_raw(u_bytes);
    sswu::<C>(&u)
}

fn sswu<C>(u: &C::Field) -> JacobianPoint<C>
where
    C: CycleCurve + SswuParams,
{
    let z = C::Field::from_bytes_raw(&C::SSWU_Z);
    let neg_b_over_a = C::Field::from_bytes_raw(&C::SSWU_NEG_B_OVER_A);
    let b_over_za = C::Field::from_bytes_raw(&C::SSWU_B_OVER_ZA);

    let u2 = u.square_modular();
    let zu2 = z.multiply_modular(&u2);
    let z2u4 = zu2.square_modular();

    // denom = Z^2 u^4 + Z u^2; tv1 = inv0(denom)
    let denom = z2u4.add_modular(&zu2).normalize();
    let denom_is_zero = !denom.is_nonzero();
    let tv1 = denom.invert_modular();

    // x1 = (-B/A)(1 + tv1); caso excepcional: x1 = B/(Z*A)
    let x1_generic =
        neg_b_over_a.multiply_modular(&C::Field::ONE.add_modular(&tv1).normalize());
    let x1 = C::Field::conditional_select(
        &x1_generic,
        &b_over_za,
        subtle::Choice::from(u8::from(denom_is_zero)),
    );

    let gx1 = curve_equation::<C>(&x1);

    // x2 = Z u^2 x1
    let x2 = zu2.multiply_modular(&x1);
    let gx2 = curve_equation::<C>(&x2);

    // Ambas raíces candidatas, siempre.
    let sqrt1 = gx1.sqrt_candidate();
    let sqrt2 = gx2.sqrt_candidate();
    let gx1_is_square = sqrt1.square_modular().ct_equals(&gx1);

    let x = C::Field::conditional_select(&x2, &x1, gx1_is_square);
    let mut y = C::Field::conditional_select(&sqrt2, &sqrt1, gx1_is_square);

    // sgn0(y) debe igualar sgn0(u).
    let u_sign = u8::from(u.is_negative());
    let y_sign = u8::from(y.is_negative());
    y.conditional_negate_assign(subtle::Choice::from(u_sign ^ y_sign));

    JacobianPoint::from_parts(x, y, C::Field::ONE)
}

/**
 * encode-to-curve completo: mapea dos elementos y suma los resultados
 * (adición segura: los dos mapeos pueden coincidir).
 */
pub fn map_to_curve2<C>(u0: &[u8; 32], u1: &[u8; 32]) -> JacobianPoint<C>
where
    C: CycleCurve + SswuParams,
{
    let p0 = map_to_curve::<C>(u0);
    let p1 = map_to_curve::<C>(u1);
    p0.add(&p1)
}
