// [tests/mirror/libs/core/math_engine/curve_laws.test.rs]
/**
 * =================================================================
 * APARATO: GEOMETRIC LAWS CERTIFIER (V2.0 - CYCLE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: LEY DE GRUPO JACOBIANA SOBRE HELIOS Y SELENE
 * =================================================================
 */
use helioselene_core_math::prelude::*;

/// 2G de Helios (vector generado con el oráculo afín fuera de línea).
const HELIOS_2G: &str = "262942408090b3c507b8ac94d46fc495fc129fb4d165372411d5e5ea008402f2";
/// 3G de Helios.
const HELIOS_3G: &str = "eac9b7d97ab5cb38276f3c1ec32501e8cbfc1f05f69fcfc7f8d3034e585cac8e";
/// 2G de Selene (x = q - 2: el generador tiene x = 1 y tangente horizontal).
const SELENE_2G: &str = "9dc7277972d2b66e586b65b72c787fbfffffffffffffffffffffffffffffffff";
/// 3G de Selene.
const SELENE_3G: &str = "35228fe589d3ec264a5325ff76ac41fa6ed638262dc540e38ea67cd996dfb2ea";

fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(s).expect("test vector hex"));
    out
}

macro_rules! certify_curve {
    ($name:ident, $point:ty, $vec2g:expr, $vec3g:expr, $label:expr) => {
        #[test]
        fn $name() {
            println!("\n📐 [PROVING_GROUNDS]: Auditing {} group laws...", $label);

            let g = <$point>::generator();
            assert!(g.to_affine().is_on_curve(), "L1_GEOMETRY_FAULT: generator off-curve.");

            // P + INF = P; INF + P = P
            let ident = <$point>::identity();
            assert!(ident.is_identity(), "L1_GEOMETRY_FAULT: identity flag broken.");
            assert_eq!(g.add(&ident), g, "L1_GEOMETRY_FAULT: P + O != P.");
            assert_eq!(ident.add(&g), g, "L1_GEOMETRY_FAULT: O + P != P.");

            // dbl(P) == add(P, P) (la rama P == Q del envoltorio seguro)
            let doubled = g.double();
            assert_eq!(g.add(&g), doubled, "L1_GEOMETRY_FAULT: doubling inconsistency.");
            assert!(
                doubled.to_affine().is_on_curve(),
                "L1_GEOMETRY_FAULT: 2G off-curve."
            );
            assert_eq!(doubled.to_bytes(), hex32($vec2g), "L1_GEOMETRY_FAULT: 2G vector drift.");

            // P + (-P) = O (la rama P == -Q)
            let cancelled = g.add(&g.negate());
            assert!(cancelled.is_identity(), "L1_GEOMETRY_FAULT: P + (-P) != O.");

            // 3G por dos rutas: dbl+add y add en cadena
            let g3_a = doubled.add(&g);
            let g3_b = g.add(&g).add(&g);
            assert_eq!(g3_a, g3_b, "L1_GEOMETRY_FAULT: associativity drift on 3G.");
            assert_eq!(g3_a.to_bytes(), hex32($vec3g), "L1_GEOMETRY_FAULT: 3G vector drift.");

            // Adición mixta contra adición general
            let g_affine = g.to_affine();
            assert_eq!(
                doubled.add_mixed(&g_affine),
                g3_a,
                "L1_GEOMETRY_FAULT: mixed-add diverges from general add."
            );

            // batch_to_affine . from_affine = identidad sobre no-identidad
            let points = [g, doubled, g3_a, g3_a.double()];
            let affines = <$point>::batch_to_affine(&points);
            for (jac, aff) in points.iter().zip(affines.iter()) {
                assert!(aff.is_on_curve(), "L1_GEOMETRY_FAULT: batch affine off-curve.");
                assert_eq!(
                    <$point>::from_affine(aff),
                    *jac,
                    "L1_GEOMETRY_FAULT: batch_to_affine roundtrip drift."
                );
            }

            // Aristas: -G, 2G, G se distinguen mutuamente en el safe add
            let neg_g = g.negate();
            assert!(neg_g.to_affine().is_on_curve(), "L1_GEOMETRY_FAULT: -G off-curve.");
            assert_eq!(
                neg_g.add(&doubled),
                g,
                "L1_GEOMETRY_FAULT: -G + 2G != G."
            );
            println!("   ✅ [SUCCESS]: {} group laws verified.", $label);
        }
    };
}

certify_curve!(certify_helios_group_laws, HeliosPoint, HELIOS_2G, HELIOS_3G, "Helios");
certify_curve!(certify_selene_group_laws, SelenePoint, SELENE_2G, SELENE_3G, "Selene");

#[test]
fn certify_on_curve_rejects_forged_points() {
    println!("\n📐 [PROVING_GROUNDS]: Auditing on-curve validation...");
    let g = HeliosPoint::generator().to_affine();
    let forged = HeliosAffine::new(g.x, g.x);
    assert!(!forged.is_on_curve(), "L1_GEOMETRY_FAULT: forged point accepted.");

    let sg = SelenePoint::generator().to_affine();
    let forged_s = SeleneAffine::new(sg.y, sg.x);
    assert!(!forged_s.is_on_curve(), "L1_GEOMETRY_FAULT: forged Selene point accepted.");
    println!("   ✅ Validation certified.");
}
