// [tests/mirror/libs/core/math_engine/point_codec_integrity.test.rs]
/**
 * =================================================================
 * APARATO: POINT CODEC CERTIFIER (V2.0 - COMPRESSED 32B)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: COMPRESIÓN/DESCOMPRESIÓN Y RECHAZOS DE PUNTOS
 * =================================================================
 */
use helioselene_core_math::prelude::*;

#[test]
fn certify_selene_point_roundtrip_scenario() {
    println!("\n📦 [PROVING_GROUNDS]: Auditing Selene 2G codec roundtrip...");

    // Escenario canónico: 2G en Jacobiano -> afín -> 32 bytes -> decode
    // -> Jacobiano -> 32 bytes: ambas codificaciones idénticas.
    let two_g = SelenePoint::generator().double();
    let encoded = two_g.to_bytes();
    let decoded = SelenePoint::from_bytes(&encoded).expect("valid compressed point");
    assert!(decoded.to_affine().is_on_curve(), "L1_CODEC_FAULT: decoded point off-curve.");
    let re_encoded = decoded.to_bytes();
    assert_eq!(encoded, re_encoded, "L1_CODEC_FAULT: roundtrip bytes drift.");
    println!("   ✅ Selene roundtrip certified.");
}

#[test]
fn certify_helios_point_roundtrip_and_parity() {
    println!("\n📦 [PROVING_GROUNDS]: Auditing Helios codec + y-parity...");
    let g = HeliosPoint::generator();

    for point in [g, g.double(), g.double().add(&g), g.negate()] {
        let encoded = point.to_bytes();
        let decoded = HeliosPoint::from_bytes(&encoded).expect("valid compressed point");
        assert_eq!(
            decoded.to_bytes(),
            encoded,
            "L1_CODEC_FAULT: Helios roundtrip drift."
        );
        assert_eq!(decoded, point, "L1_CODEC_FAULT: decoded point structural drift.");
    }

    // La paridad invertida decodifica el punto negado.
    let mut flipped = g.to_bytes();
    flipped[31] ^= 0x80;
    let negated = HeliosPoint::from_bytes(&flipped).expect("negated encoding");
    assert_eq!(negated, g.negate(), "L1_CODEC_FAULT: parity bit mishandled.");
    println!("   ✅ Helios codec certified.");
}

#[test]
fn certify_codec_rejections() {
    println!("\n📦 [PROVING_GROUNDS]: Auditing codec rejections...");

    // x no canónico (>= p con bit de paridad apagado): p - 19 = 2^255 - 38
    // no: usamos directamente p. bytes de p = ff..7f con byte0 = ed.
    let mut p_bytes = [0xffu8; 32];
    p_bytes[0] = 0xed;
    p_bytes[31] = 0x7f;
    assert!(
        HeliosPoint::from_bytes(&p_bytes).is_err(),
        "L1_CODEC_FAULT: non-canonical x accepted."
    );

    // x canónico pero fuera de la curva: buscar un x sin raíz cuadrada.
    // x = 1 en Helios: rhs = 1 - 3 + b; verificamos el comportamiento del
    // decoder contra la validación afín explícita.
    let mut candidate = [0u8; 32];
    let mut rejected_at_least_one = false;
    for x in 1u8..32 {
        candidate[0] = x;
        if HeliosPoint::from_bytes(&candidate).is_err() {
            rejected_at_least_one = true;
            break;
        }
    }
    assert!(
        rejected_at_least_one,
        "L1_CODEC_FAULT: no off-curve x rejected in probe range (statistically impossible)."
    );

    // Todo decode exitoso queda sobre la curva.
    let mut accepted = 0u32;
    for x in 1u8..64 {
        candidate[0] = x;
        if let Ok(point) = HeliosPoint::from_bytes(&candidate) {
            accepted += 1;
            assert!(
                point.to_affine().is_on_curve(),
                "L1_CODEC_FAULT: decoder accepted off-curve point."
            );
        }
    }
    assert!(accepted > 0, "L1_CODEC_FAULT: decoder rejected every probe.");
    println!("   ✅ Rejections certified ({} accepted in probe).", accepted);
}

#[test]
fn certify_x_coordinate_projection() {
    println!("\n📦 [PROVING_GROUNDS]: Auditing x-coordinate projection...");
    let point = SelenePoint::generator().double();
    let full = point.to_bytes();
    let x_only = point.x_coordinate_bytes();
    let mut expected = full;
    expected[31] &= 0x7f;
    assert_eq!(x_only, expected, "L1_CODEC_FAULT: x-only projection drift.");
    println!("   ✅ Projection certified.");
}
