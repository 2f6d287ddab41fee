// [tests/mirror/libs/core/math_engine/field_torture.test.rs]
/**
 * =================================================================
 * APARATO: FIELD LAW TORTURE RIG (V1.2 - PROPTEST)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: LEYES ALGEBRAICAS CUANTIFICADAS SOBRE AMBOS CAMPOS
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use proptest::prelude::*;

fn arb_fp() -> impl Strategy<Value = Fp> {
    proptest::array::uniform32(any::<u8>()).prop_map(|mut b| {
        b[31] &= 0x7f;
        Fp::from_bytes_raw(&b)
    })
}

fn arb_fq() -> impl Strategy<Value = Fq> {
    proptest::array::uniform32(any::<u8>()).prop_map(|mut b| {
        b[31] &= 0x7f;
        Fq::from_bytes_raw(&b)
    })
}

macro_rules! field_laws {
    ($mod_name:ident, $arb:ident, $field:ty) => {
        mod $mod_name {
            use super::*;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(96))]

                #[test]
                fn addition_commutes(a in $arb(), b in $arb()) {
                    prop_assert_eq!(a.add_modular(&b), b.add_modular(&a));
                }

                #[test]
                fn addition_associates(a in $arb(), b in $arb(), c in $arb()) {
                    let lhs = a.add_modular(&b).normalize().add_modular(&c);
                    let rhs = a.add_modular(&b.add_modular(&c).normalize());
                    prop_assert_eq!(lhs, rhs);
                }

                #[test]
                fn additive_identity_and_inverse(a in $arb()) {
                    prop_assert_eq!(a.add_modular(&<$field>::ZERO), a);
                    prop_assert_eq!(
                        a.add_modular(&a.negate_modular()).normalize(),
                        <$field>::ZERO
                    );
                }

                #[test]
                fn multiplication_commutes(a in $arb(), b in $arb()) {
                    prop_assert_eq!(a.multiply_modular(&b), b.multiply_modular(&a));
                }

                #[test]
                fn multiplication_associates(a in $arb(), b in $arb(), c in $arb()) {
                    let lhs = a.multiply_modular(&b).multiply_modular(&c);
                    let rhs = a.multiply_modular(&b.multiply_modular(&c));
                    prop_assert_eq!(lhs, rhs);
                }

                #[test]
                fn multiplicative_identity(a in $arb()) {
                    prop_assert_eq!(a.multiply_modular(&<$field>::ONE), a);
                }

                #[test]
                fn distributive_law(a in $arb(), b in $arb(), c in $arb()) {
                    let lhs = a.multiply_modular(&b.add_modular(&c).normalize());
                    let rhs = a.multiply_modular(&b).add_modular(&a.multiply_modular(&c));
                    prop_assert_eq!(lhs.normalize().to_bytes(), rhs.normalize().to_bytes());
                }

                #[test]
                fn square_matches_self_multiplication(a in $arb()) {
                    prop_assert_eq!(a.square_modular(), a.multiply_modular(&a));
                }

                #[test]
                fn inverse_is_two_sided(a in $arb()) {
                    if a.is_nonzero() {
                        prop_assert_eq!(a.multiply_modular(&a.invert_modular()), <$field>::ONE);
                    } else {
                        // inv0: 0 * invert(0) = 0
                        prop_assert_eq!(
                            a.multiply_modular(&a.invert_modular()),
                            <$field>::ZERO
                        );
                    }
                }

                #[test]
                fn encode_decode_identity(a in $arb()) {
                    let bytes = a.to_bytes();
                    prop_assert_eq!(<$field>::from_bytes_raw(&bytes), a);
                    prop_assert!(bytes[31] & 0x80 == 0);
                }
            }
        }
    };
}

field_laws!(fp_laws, arb_fp, Fp);
field_laws!(fq_laws, arb_fq, Fq);
