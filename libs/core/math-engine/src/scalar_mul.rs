// [libs/core/math-engine/src/scalar_mul.rs]
/*!
 * =================================================================
 * APARATO: SCALAR MULTIPLICATION ENGINE (V6.2 - WINDOWED SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: k*P DE TIEMPO CONSTANTE, wNAF Y BASE FIJA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CT LADDER: Ventana con signo radix-16 (64 dígitos booth); lookup
 *    sobre las 8 entradas via cmov, negación condicional, y gestión del
 *    acumulador-identidad computando SIEMPRE ambas rutas (madd y
 *    from_affine) con selección por cmov sobre Z != 0.
 * 2. VARTIME LADDER: wNAF w=5 con salidas tempranas, SOLO para
 *    escalares públicos.
 * 3. FIXED BASE: Recodificación radix-32 (52 ventanas x 5 bits) sobre
 *    tabla afín [1P..16P] provista por el llamador.
 * 4. ERASE DISCIPLINE: Dígitos, nibbles, tablas y temporales derivados
 *    del escalar se borran con secure_erase a la salida.
 * =================================================================
 */

use crate::curve::{AffinePoint, CycleCurve, JacobianPoint};
use crate::field::PrimeField;
use crate::secure::secure_erase;
use subtle::Choice;
use zeroize::Zeroize;

/**
 * Recodifica un escalar de 256 bits en 64 dígitos con signo en [-8, 8].
 *
 * # Mathematical Proof (Booth):
 * carry = (val + 8) >> 4; digit = val - (carry << 4). La suma
 * sum(digits[i] * 16^i) reconstruye el escalar exactamente; todos los
 * pasos son aritmética fija sin saltos.
 */
pub(crate) fn recode_signed_4(scalar: &[u8; 32]) -> [i8; 64] {
    let mut nibbles = [0u8; 64];
    for i in 0..32 {
        nibbles[2 * i] = scalar[i] & 0x0f;
        nibbles[2 * i + 1] = (scalar[i] >> 4) & 0x0f;
    }

    let mut digits = [0i8; 64];
    let mut carry: i32 = 0;
    for i in 0..63 {
        let val = i32::from(nibbles[i]) + carry;
        carry = (val + 8) >> 4;
        digits[i] = (val - (carry << 4)) as i8;
    }
    digits[63] = (i32::from(nibbles[63]) + carry) as i8;

    secure_erase(&mut nibbles);
    digits
}

/**
 * Recodifica un escalar en 52 dígitos con signo en [-16, 16] (radix-32).
 */
pub(crate) fn recode_signed_5(scalar: &[u8; 32]) -> [i8; 52] {
    let mut digits = [0i8; 52];
    let mut carry: i32 = 0;
    for i in 0..51 {
        let bit_offset = 5 * i;
        let byte_idx = bit_offset >> 3;
        let bit_pos = bit_offset & 7;

        let mut word = u32::from(scalar[byte_idx]);
        if byte_idx + 1 < 32 {
            word |= u32::from(scalar[byte_idx + 1]) << 8;
        }

        let mut val = ((word >> bit_pos) & 0x1f) as i32 + carry;
        carry = 0;
        if val > 16 {
            val -= 32;
            carry = 1;
        }
        digits[i] = val as i8;
    }
    digits[51] = (i32::from((scalar[31] >> 7) & 1) + carry) as i8;
    digits
}

/// Descompone un dígito con signo en (|d|, signo, d != 0) sin saltos.
#[inline(always)]
fn split_digit(d: i8) -> (u32, Choice, Choice) {
    let d = i32::from(d);
    let sign_mask = d >> 31;
    let abs_d = ((d ^ sign_mask) - sign_mask) as u32;
    let neg = Choice::from((sign_mask & 1) as u8);
    let nonzero = Choice::from((1u32 ^ (abs_d.wrapping_sub(1) >> 31)) as u8);
    (abs_d, neg, nonzero)
}

/// Lookup de tabla de tiempo constante: recorre las n entradas y acumula
/// con cmov la que coincide con abs_d (1-indexado). abs_d = 0 deja el
/// valor inicial intacto.
#[inline(always)]
fn ct_table_lookup<C: CycleCurve>(
    table: &[AffinePoint<C>],
    abs_d: u32,
    init: AffinePoint<C>,
) -> AffinePoint<C> {
    let mut selected = init;
    for (j, entry) in table.iter().enumerate() {
        let eq = Choice::from((((abs_d ^ (j as u32 + 1)).wrapping_sub(1)) >> 31) as u8);
        selected.conditional_assign_point(entry, eq);
    }
    selected
}

/// Tabla [1P, 2P, ..., 8P] en Jacobiano (sin convertir).
pub(crate) fn window_table_8_jacobian<C: CycleCurve>(
    p: &JacobianPoint<C>,
) -> [JacobianPoint<C>; 8] {
    let mut jac = [JacobianPoint::<C>::identity(); 8];
    jac[0] = *p;
    jac[1] = p.double();
    jac[2] = jac[1].add(p);
    jac[3] = jac[1].double();
    jac[4] = jac[3].add(p);
    jac[5] = jac[2].double();
    jac[6] = jac[5].add(p);
    jac[7] = jac[3].double();
    jac
}

/// Tabla [1P, 2P, ..., 8P] en Jacobiano, convertida a afín por lote.
fn window_table_8<C: CycleCurve>(p: &JacobianPoint<C>) -> Vec<AffinePoint<C>> {
    let mut jac = window_table_8_jacobian(p);
    let affine = JacobianPoint::batch_to_affine(&jac);
    for pt in jac.iter_mut() {
        pt.zeroize();
    }
    affine
}

/// Múltiplos impares [1P, 3P, 5P, ..., 15P] en Jacobiano (para wNAF w=5).
pub(crate) fn odd_multiples_8_jacobian<C: CycleCurve>(
    p: &JacobianPoint<C>,
) -> [JacobianPoint<C>; 8] {
    let mut table = [JacobianPoint::<C>::identity(); 8];
    table[0] = *p;
    let p2 = p.double();
    for i in 1..8 {
        table[i] = table[i - 1].add(&p2);
    }
    table
}

/**
 * Multiplicación escalar de tiempo constante (ventana con signo w=4).
 *
 * Disciplina CT: el lookup recorre las 8 entradas con cmov; la rama de
 * acumulador-identidad computa ambas rutas (madd y from_affine) y
 * selecciona por cmov sobre Z != 0; cero accesos a memoria o saltos
 * dependientes del escalar. La identidad del PUNTO (dato público) se
 * despacha por adelantado.
 */
pub fn scalarmult<C: CycleCurve>(
    scalar: &[u8; 32],
    p: &JacobianPoint<C>,
) -> JacobianPoint<C> {
    if p.is_identity() {
        return JacobianPoint::identity();
    }

    let table = window_table_8(p);
    scalarmult_ct_with_table(scalar, &table)
}

/// Escalera CT w=4 sobre una tabla afín [1P..8P] ya construida (ruta
/// compartida entre el backend escalar y los vectoriales, que difieren
/// solo en cómo materializan la tabla).
pub(crate) fn scalarmult_ct_with_table<C: CycleCurve>(
    scalar: &[u8; 32],
    table: &[AffinePoint<C>],
) -> JacobianPoint<C> {
    let mut digits = recode_signed_4(scalar);

    // Ventana superior (dígito 63)
    let (abs_d, neg, nonzero) = split_digit(digits[63]);
    let mut selected =
        ct_table_lookup(&table, abs_d, AffinePoint::new(C::Field::ZERO, C::Field::ZERO));
    selected.conditional_negate_y(neg);

    let from_table = JacobianPoint::from_affine(&selected);
    let mut acc = JacobianPoint::<C>::identity();
    acc.conditional_assign_point(&from_table, nonzero);

    // Ventanas 62 -> 0: cuatro duplicaciones + adición mixta seleccionada
    for i in (0..63).rev() {
        acc = acc.double();
        acc = acc.double();
        acc = acc.double();
        acc = acc.double();

        let (abs_d, neg, nonzero) = split_digit(digits[i]);
        let mut selected =
            ct_table_lookup(&table, abs_d, AffinePoint::new(C::Field::ONE, C::Field::ONE));
        selected.conditional_negate_y(neg);

        let z_nonzero = Choice::from(u8::from(acc.z.is_nonzero()));

        // Ambas rutas se computan siempre; el cmov decide.
        let summed = acc.add_mixed_raw(&selected);
        let fresh = JacobianPoint::from_affine(&selected);

        acc.conditional_assign_point(&summed, nonzero & z_nonzero);
        acc.conditional_assign_point(&fresh, nonzero & !z_nonzero);
    }

    secure_erase(&mut digits);
    let mut scratch_selected = selected;
    scratch_selected.zeroize();
    acc
}

/**
 * Codificación wNAF w=5: dígitos en {0, +-1, +-3, ..., +-15} con al menos
 * 4 ceros entre no-ceros. Devuelve (naf, posición más alta + 1).
 */
pub(crate) fn wnaf_encode(scalar: &[u8; 32]) -> ([i8; 257], usize) {
    let mut bits = [0u32; 9];
    for i in 0..32 {
        bits[i / 4] |= u32::from(scalar[i]) << ((i % 4) * 8);
    }

    let mut naf = [0i8; 257];
    let mut highest = 0usize;
    let mut pos = 0usize;

    while pos <= 256 {
        if (bits[pos / 32] >> (pos % 32)) & 1 == 0 {
            pos += 1;
            continue;
        }

        let word_idx = pos / 32;
        let bit_idx = pos % 32;
        let mut val = ((bits[word_idx] >> bit_idx) & 0x1f) as i32;
        if bit_idx > 27 && word_idx + 1 < 9 {
            val |= ((bits[word_idx + 1] << (32 - bit_idx)) & 0x1f) as i32;
        }

        if val > 16 {
            val -= 32;
        }

        naf[pos] = val as i8;
        highest = pos + 1;

        if val > 0 {
            // Restar val << pos del escalar residual
            let sub = (val as u64) << bit_idx;
            let mut borrow: u32 = 0;
            for k in word_idx..9 {
                let part = if k == word_idx {
                    sub & 0xffff_ffff
                } else if k == word_idx + 1 {
                    sub >> 32
                } else {
                    0
                };
                let lo = part + u64::from(borrow);
                if lo == 0 {
                    break;
                }
                borrow = u32::from(u64::from(bits[k]) < lo);
                bits[k] = bits[k].wrapping_sub(lo as u32);
            }
        } else {
            let add = ((-val) as u64) << bit_idx;
            let mut carry: u32 = 0;
            for k in word_idx..9 {
                let part = if k == word_idx {
                    add & 0xffff_ffff
                } else if k == word_idx + 1 {
                    add >> 32
                } else {
                    0
                };
                if part == 0 && carry == 0 {
                    break;
                }
                let sum = u64::from(bits[k]) + part + u64::from(carry);
                bits[k] = sum as u32;
                carry = (sum >> 32) as u32;
            }
        }

        pos += 5;
    }

    secure_erase(&mut bits);
    (naf, highest)
}

/**
 * Multiplicación escalar variable-time via wNAF w=5.
 *
 * Salidas tempranas permitidas: usar SOLO con escalares públicos.
 * Precomputa los múltiplos impares [P, 3P, ..., 15P].
 */
pub fn scalarmult_vartime<C: CycleCurve>(
    scalar: &[u8; 32],
    p: &JacobianPoint<C>,
) -> JacobianPoint<C> {
    if p.is_identity() {
        return JacobianPoint::identity();
    }

    let table = odd_multiples_8_jacobian(p);

    let (naf, top) = wnaf_encode(scalar);
    if top == 0 {
        return JacobianPoint::identity();
    }

    let mut start = top - 1;
    while naf[start] == 0 {
        if start == 0 {
            return JacobianPoint::identity();
        }
        start -= 1;
    }

    let d = naf[start];
    let idx = (d.unsigned_abs() / 2) as usize;
    let mut acc = table[idx];
    if d < 0 {
        acc = acc.negate();
    }

    for i in (0..start).rev() {
        acc = acc.double();
        let d = naf[i];
        if d != 0 {
            let idx = (d.unsigned_abs() / 2) as usize;
            if d > 0 {
                acc = acc.add(&table[idx]);
            } else {
                acc = acc.add(&table[idx].negate());
            }
        }
    }

    acc
}

/**
 * Escalera wNAF w=5 sobre tabla AFÍN de múltiplos impares [1P, 3P..15P]
 * (variante de los backends vectoriales: la tabla normalizada habilita
 * adiciones mixtas de 7M+4S en lugar de adiciones generales).
 */
pub(crate) fn wnaf_ladder_affine<C: CycleCurve>(
    scalar: &[u8; 32],
    table: &[AffinePoint<C>],
) -> JacobianPoint<C> {
    let (naf, top) = wnaf_encode(scalar);
    if top == 0 {
        return JacobianPoint::identity();
    }

    let mut start = top - 1;
    while naf[start] == 0 {
        if start == 0 {
            return JacobianPoint::identity();
        }
        start -= 1;
    }

    let d = naf[start];
    let idx = (d.unsigned_abs() / 2) as usize;
    let mut entry = table[idx];
    if d < 0 {
        entry.y = entry.y.negate_modular();
    }
    let mut acc = JacobianPoint::from_affine(&entry);

    for i in (0..start).rev() {
        acc = acc.double();
        let d = naf[i];
        if d != 0 {
            let idx = (d.unsigned_abs() / 2) as usize;
            let mut entry = table[idx];
            if d < 0 {
                entry.y = entry.y.negate_modular();
            }
            acc = acc.add_mixed(&entry);
        }
    }

    acc
}

/**
 * Precomputa la tabla de base fija: 16 puntos afines [1P, 2P, ..., 16P].
 * Amortizable entre múltiples scalarmult con la misma base.
 */
pub fn scalarmult_fixed_precompute<C: CycleCurve>(
    p: &JacobianPoint<C>,
) -> Vec<AffinePoint<C>> {
    let mut jac = [JacobianPoint::<C>::identity(); 16];
    jac[0] = *p;
    jac[1] = p.double();
    for i in 2..16 {
        jac[i] = jac[i - 1].add(p);
    }
    JacobianPoint::batch_to_affine(&jac)
}

/**
 * Multiplicación escalar de base fija de tiempo constante (w=5,
 * 52 ventanas) sobre tabla precomputada de 16 entradas.
 *
 * Ahorra ~12 adiciones mixtas por escalar frente a w=4 y amortiza el
 * precómputo de tabla entre llamadas con la misma base.
 */
pub fn scalarmult_fixed<C: CycleCurve>(
    scalar: &[u8; 32],
    table: &[AffinePoint<C>],
) -> JacobianPoint<C> {
    debug_assert_eq!(table.len(), 16);
    let mut digits = recode_signed_5(scalar);

    let (abs_d, neg, nonzero) = split_digit(digits[51]);
    let mut selected =
        ct_table_lookup(table, abs_d, AffinePoint::new(C::Field::ZERO, C::Field::ZERO));
    selected.conditional_negate_y(neg);

    let from_table = JacobianPoint::from_affine(&selected);
    let mut acc = JacobianPoint::<C>::identity();
    acc.conditional_assign_point(&from_table, nonzero);

    for i in (0..51).rev() {
        for _ in 0..5 {
            acc = acc.double();
        }

        let (abs_d, neg, nonzero) = split_digit(digits[i]);
        let mut selected =
            ct_table_lookup(table, abs_d, AffinePoint::new(C::Field::ONE, C::Field::ONE));
        selected.conditional_negate_y(neg);

        let z_nonzero = Choice::from(u8::from(acc.z.is_nonzero()));
        let summed = acc.add_mixed_raw(&selected);
        let fresh = JacobianPoint::from_affine(&selected);

        acc.conditional_assign_point(&summed, nonzero & z_nonzero);
        acc.conditional_assign_point(&fresh, nonzero & !z_nonzero);
    }

    secure_erase(&mut digits);
    acc
}
