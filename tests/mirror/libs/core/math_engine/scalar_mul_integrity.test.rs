// [tests/mirror/libs/core/math_engine/scalar_mul_integrity.test.rs]
/**
 * =================================================================
 * APARATO: SCALAR LADDER CERTIFIER (V2.2 - CT/VT PARITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: EQUIVALENCIA DE ESCALERAS Y VECTORES CONOCIDOS
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use rand::{Rng, SeedableRng};

const HELIOS_2G: &str = "262942408090b3c507b8ac94d46fc495fc129fb4d165372411d5e5ea008402f2";
const HELIOS_5G: &str = "58a352617115b1d13a118efca2111e33c6daaf16b3323072102b783c08175100";
const HELIOS_KG_SCALAR: &str = "d4c3b2a1908f7e6d5c4b3a291807f6e5d4c3b2a1908f7e6d5c4b3a2f1e0c1d00";
const HELIOS_KG: &str = "2b8b4078f84de75f2b780be76db43d793685cf7df3b8f0d8c54d6968274919cc";
const HELIOS_ORDER_MINUS_1_G: &str =
    "0300000000000000000000000000000000000000000000000000000000000080";

const SELENE_2G: &str = "9dc7277972d2b66e586b65b72c787fbfffffffffffffffffffffffffffffffff";
const SELENE_5G: &str = "7158a207a5574a9a917913160a804d21a518111259f0afcf0c1b5603cb6e4c0a";
const SELENE_KG: &str = "98fa43e9845eb4f3d9b7ad89e94fd59e6b0ae51a2ffcc5b805f30bac71bc7dd2";
const SELENE_ORDER_MINUS_1_G: &str =
    "0100000000000000000000000000000000000000000000000000000000000080";

fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(s).expect("test vector hex"));
    out
}

fn small_scalar(v: u8) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[0] = v;
    s
}

/// order - 1 en bytes little-endian a partir del orden de la curva.
fn order_minus_one(order: &[u8; 32]) -> [u8; 32] {
    let mut s = *order;
    // el orden es impar en ambas curvas: restar 1 solo toca el byte 0
    s[0] -= 1;
    s
}

macro_rules! certify_ladders {
    ($name:ident, $curve:ty, $point:ty, $v2g:expr, $v5g:expr, $vkg:expr, $vom1:expr, $label:expr) => {
        #[test]
        fn $name() {
            println!("\n🔐 [PROVING_GROUNDS]: Auditing {} scalar ladders...", $label);
            let g = <$point>::generator();

            // Escenario canónico: scalar_mul(2, G) == dbl(G), bytes exactos.
            let two_g = scalarmult(&small_scalar(2), &g);
            assert_eq!(two_g.to_bytes(), g.double().to_bytes(), "L1_LADDER_FAULT: 2G != dbl(G).");
            assert_eq!(two_g.to_bytes(), hex32($v2g), "L1_LADDER_FAULT: 2G vector drift.");

            // Vectores conocidos adicionales
            assert_eq!(
                scalarmult(&small_scalar(5), &g).to_bytes(),
                hex32($v5g),
                "L1_LADDER_FAULT: 5G vector drift."
            );
            assert_eq!(
                scalarmult(&hex32(HELIOS_KG_SCALAR), &g).to_bytes(),
                hex32($vkg),
                "L1_LADDER_FAULT: k*G vector drift."
            );

            // Fronteras: 0, 1, orden-1, orden, patrón denso.
            assert!(
                scalarmult(&small_scalar(0), &g).is_identity(),
                "L1_LADDER_FAULT: 0*G != O."
            );
            assert_eq!(scalarmult(&small_scalar(1), &g), g, "L1_LADDER_FAULT: 1*G != G.");

            let order = <$curve>::ORDER_BYTES;
            assert!(
                scalarmult(&order, &g).is_identity(),
                "L1_LADDER_FAULT: order*G != O."
            );
            let om1 = order_minus_one(&order);
            let minus_g = scalarmult(&om1, &g);
            assert_eq!(
                minus_g.to_bytes(),
                hex32($vom1),
                "L1_LADDER_FAULT: (order-1)*G != -G."
            );
            assert_eq!(minus_g, g.negate(), "L1_LADDER_FAULT: (order-1)*G structural drift.");

            let mut dense = [0x55u8; 32];
            dense[31] = 0x15;
            let boundary_set = [small_scalar(1), om1, dense, small_scalar(0), order];

            // Equivalencia CT / VT / base fija sobre todas las fronteras.
            let table = scalarmult_fixed_precompute(&g);
            for scalar in boundary_set.iter() {
                let ct = scalarmult(scalar, &g);
                let vt = scalarmult_vartime(scalar, &g);
                assert_eq!(
                    ct.to_bytes(),
                    vt.to_bytes(),
                    "L1_LADDER_FAULT: CT/VT divergence."
                );
                let fixed = scalarmult_fixed(scalar, &table);
                assert_eq!(
                    ct.to_bytes(),
                    fixed.to_bytes(),
                    "L1_LADDER_FAULT: fixed-base divergence."
                );
            }

            // Aleatorios sembrados: CT == VT y homomorfismo aditivo.
            let mut rng = rand::rngs::StdRng::seed_from_u64(0x1AD0);
            for _ in 0..12 {
                let mut k = [0u8; 32];
                rng.fill(&mut k);
                k[31] &= 0x3f; // bajo el orden de ambas curvas
                let ct = scalarmult(&k, &g);
                let vt = scalarmult_vartime(&k, &g);
                assert_eq!(ct.to_bytes(), vt.to_bytes(), "L1_LADDER_FAULT: random CT/VT drift.");

                // (k + 1)*G == k*G + G
                let mut k1 = k;
                k1[0] = k1[0].wrapping_add(1);
                if k1[0] != 0 {
                    assert_eq!(
                        scalarmult(&k1, &g).to_bytes(),
                        ct.add(&g).to_bytes(),
                        "L1_LADDER_FAULT: additive homomorphism drift."
                    );
                }
            }

            // Punto identidad como base.
            assert!(
                scalarmult(&small_scalar(7), &<$point>::identity()).is_identity(),
                "L1_LADDER_FAULT: k*O != O."
            );
            println!("   ✅ [SUCCESS]: {} ladders certified.", $label);
        }
    };
}

certify_ladders!(
    certify_helios_ladders,
    HeliosCurve,
    HeliosPoint,
    HELIOS_2G,
    HELIOS_5G,
    HELIOS_KG,
    HELIOS_ORDER_MINUS_1_G,
    "Helios"
);
certify_ladders!(
    certify_selene_ladders,
    SeleneCurve,
    SelenePoint,
    SELENE_2G,
    SELENE_5G,
    SELENE_KG,
    SELENE_ORDER_MINUS_1_G,
    "Selene"
);

#[test]
fn certify_scalar_homomorphism_mod_order() {
    println!("\n🔐 [PROVING_GROUNDS]: Auditing scalar_mul(k1 + k2 mod order)...");
    let g = HeliosPoint::generator();

    let k1 = HeliosScalar::from_bytes(&{
        let mut s = [0u8; 32];
        s[0] = 200;
        s
    })
    .expect("canonical scalar");
    let k2 = HeliosScalar::from_bytes(&{
        let mut s = [0u8; 32];
        s[0] = 99;
        s[1] = 3;
        s
    })
    .expect("canonical scalar");

    let sum = k1.add(&k2);
    let lhs = scalarmult(&sum.to_bytes(), &g);
    let rhs = scalarmult(&k1.to_bytes(), &g).add(&scalarmult(&k2.to_bytes(), &g));
    assert_eq!(
        lhs.to_bytes(),
        rhs.to_bytes(),
        "L1_LADDER_FAULT: (k1+k2)G != k1*G + k2*G."
    );
    println!("   ✅ Homomorphism certified.");
}
