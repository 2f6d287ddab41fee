// [tests/mirror/libs/core/math_engine/msm_integrity.test.rs]
/**
 * =================================================================
 * APARATO: MSM CERTIFIER (V2.1 - STRAUS/PIPPENGER)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: CONSISTENCIA MSM CONTRA SUMA SECUENCIAL
 * =================================================================
 */
use helioselene_core_math::prelude::*;
use rand::{Rng, SeedableRng};

/// Los 10 escalares del escenario de consistencia (semilla 0xC0FFEE).
const MSM_SCALARS: [&str; 10] = [
    "156660f5d7870e95f86c6b9e5c27612c23b92d04a0bc001f06b7eaa94851de36",
    "dafdcf30fea4104c4d39fdc44cff6ff22d6d6a78bca21468c542806c8f9a3551",
    "6c1c05bc7f0e76546d66a4a58088c0d4e7f1d8eee00a6129e51352fe71eca561",
    "3d12fbe9b6af506c9d0baaa215d0286faf94aceb9459384ece52baada2caa70c",
    "2f888f5805ce75c6f27e4b1d058cde5733e93327d8ef98d901328f3f610bf936",
    "d8d557cb3f6fdc11055e022247a8608830f66eaa69641733d764b8c5f5833a30",
    "46b1298d08112f7a834bc26faafa10da4099cb2ff188e22d661004efef9bc45c",
    "1e8755d32e714bdd24322e4a3190b7c5d77e01fa89c8fd0715bf9811eb56f740",
    "e17d5a425c30463a0d44e066d3c8abaa5e1a1dc54f367133704bc41a8ceeb123",
    "d0e64656c5906501e7b9e4811d6e7a0b1a986ef1bea8a2e5797992a2d2fdb308",
];

/// (sum mod q) * G_helios, generado fuera de línea.
const HELIOS_MSM_SUM_SCALAR: &str =
    "386f9904e121835283c324b0a594ea9ade5619099e48535abd8bb2857d11b727";
const HELIOS_MSM_EXPECTED: &str =
    "4c47046bfe0d76263c6e2de680fac767ea163381a17b8cdbdb138519c267d3e0";
/// (sum mod p) * G_selene.
const SELENE_MSM_SUM_SCALAR: &str =
    "008e38e9aa6b5e0de570ba8d5875e898dd5619099e48535abd8bb2857d11b727";
const SELENE_MSM_EXPECTED: &str =
    "1bdf6910c0be522daaa5a9bab92d9d5945a20d3cf809313faacf597652953e01";

fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(s).expect("test vector hex"));
    out
}

#[test]
fn certify_msm_against_folded_sum_on_generator() {
    println!("\n🧮 [PROVING_GROUNDS]: Auditing 10-point MSM on G...");

    let scalars: Vec<[u8; 32]> = MSM_SCALARS.iter().map(|s| hex32(s)).collect();

    // Helios: MSM(k_i, G) == (sum k_i mod q) * G, bytes exactos.
    let hg = HeliosPoint::generator();
    let h_points = vec![hg; 10];
    let h_msm = msm_vartime(&scalars, &h_points);
    assert_eq!(
        h_msm.to_bytes(),
        hex32(HELIOS_MSM_EXPECTED),
        "L1_MSM_FAULT: Helios MSM vector drift."
    );
    assert_eq!(
        scalarmult(&hex32(HELIOS_MSM_SUM_SCALAR), &hg).to_bytes(),
        h_msm.to_bytes(),
        "L1_MSM_FAULT: Helios MSM != (sum)*G."
    );

    // Selene: mismo escenario con reducción mod p.
    let sg = SelenePoint::generator();
    let s_points = vec![sg; 10];
    let s_msm = msm_vartime(&scalars, &s_points);
    assert_eq!(
        s_msm.to_bytes(),
        hex32(SELENE_MSM_EXPECTED),
        "L1_MSM_FAULT: Selene MSM vector drift."
    );
    assert_eq!(
        scalarmult(&hex32(SELENE_MSM_SUM_SCALAR), &sg).to_bytes(),
        s_msm.to_bytes(),
        "L1_MSM_FAULT: Selene MSM != (sum)*G."
    );
    println!("   ✅ 10-point consistency certified on both curves.");
}

/// Oráculo secuencial: sum(k_i * P_i) punto a punto.
fn sequential_fold(scalars: &[[u8; 32]], points: &[HeliosPoint]) -> HeliosPoint {
    let mut acc = HeliosPoint::identity();
    for (k, p) in scalars.iter().zip(points.iter()) {
        acc = acc.add(&scalarmult_vartime(k, p));
    }
    acc
}

#[test]
fn certify_straus_route_with_distinct_points() {
    println!("\n🧮 [PROVING_GROUNDS]: Auditing Straus route (n <= 32)...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x57_2A);
    let g = HeliosPoint::generator();

    // Puntos distintos: múltiplos pequeños del generador.
    let mut points = Vec::new();
    let mut acc = g;
    for _ in 0..8 {
        points.push(acc);
        acc = acc.add(&g);
    }

    let mut scalars = Vec::new();
    for _ in 0..8 {
        let mut k = [0u8; 32];
        rng.fill(&mut k);
        k[31] &= 0x3f;
        scalars.push(k);
    }

    let msm = msm_vartime(&scalars, &points);
    let oracle = sequential_fold(&scalars, &points);
    assert_eq!(msm.to_bytes(), oracle.to_bytes(), "L1_MSM_FAULT: Straus drift.");
    println!("   ✅ Straus certified.");
}

#[test]
fn certify_pippenger_route_above_threshold() {
    println!("\n🧮 [PROVING_GROUNDS]: Auditing Pippenger route (n > 32)...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x919);
    let g = HeliosPoint::generator();

    let n = 40usize;
    let mut points = Vec::new();
    let mut acc = g;
    for _ in 0..n {
        points.push(acc);
        acc = acc.double();
    }

    let mut scalars = Vec::new();
    for _ in 0..n {
        let mut k = [0u8; 32];
        rng.fill(&mut k);
        k[31] &= 0x3f;
        scalars.push(k);
    }

    let msm = msm_vartime(&scalars, &points);
    let oracle = sequential_fold(&scalars, &points);
    assert_eq!(msm.to_bytes(), oracle.to_bytes(), "L1_MSM_FAULT: Pippenger drift.");
    println!("   ✅ Pippenger certified.");
}

#[test]
fn certify_msm_edges() {
    println!("\n🧮 [PROVING_GROUNDS]: Auditing MSM edges...");
    let g = HeliosPoint::generator();

    // Vacío -> identidad
    let empty: Vec<[u8; 32]> = Vec::new();
    assert!(
        msm_vartime::<HeliosCurve>(&empty, &[]).is_identity(),
        "L1_MSM_FAULT: empty MSM != O."
    );

    // n = 1 delega en el wNAF simple
    let mut k = [0u8; 32];
    k[0] = 77;
    assert_eq!(
        msm_vartime(&[k], &[g]).to_bytes(),
        scalarmult_vartime(&k, &g).to_bytes(),
        "L1_MSM_FAULT: single-point delegation drift."
    );

    // Identidades mezcladas no contribuyen
    let points = vec![g, HeliosPoint::identity(), g.double()];
    let scalars = vec![k, k, k];
    let expected = sequential_fold(&scalars, &points);
    assert_eq!(
        msm_vartime(&scalars, &points).to_bytes(),
        expected.to_bytes(),
        "L1_MSM_FAULT: identity points mishandled."
    );

    // Escalares cero no contribuyen
    let zero = [0u8; 32];
    assert_eq!(
        msm_vartime(&[zero, k], &[g, g]).to_bytes(),
        scalarmult_vartime(&k, &g).to_bytes(),
        "L1_MSM_FAULT: zero scalar mishandled."
    );

    // MSM de base fija entrelazado contra el MSM general (las bases de
    // las tablas deben ser no-identidad por contrato del llamador).
    let fixed_points = vec![g, g.double(), g.double().add(&g)];
    let tables: Vec<_> = fixed_points.iter().map(scalarmult_fixed_precompute).collect();
    let fixed = msm_fixed(&scalars, &tables);
    let fixed_oracle = sequential_fold(&scalars, &fixed_points);
    assert_eq!(
        fixed.to_bytes(),
        fixed_oracle.to_bytes(),
        "L1_MSM_FAULT: interleaved fixed-base drift."
    );
    println!("   ✅ Edges certified.");
}

#[test]
fn certify_pedersen_commitment_shell() {
    println!("\n🧮 [PROVING_GROUNDS]: Auditing Pedersen shell...");
    let h = HeliosPoint::generator().double();
    let gens = vec![HeliosPoint::generator(), HeliosPoint::generator().double().double()];
    let mut blinding = [0u8; 32];
    blinding[0] = 9;
    let mut v0 = [0u8; 32];
    v0[0] = 3;
    let mut v1 = [0u8; 32];
    v1[0] = 4;

    let commit = pedersen_commit(&blinding, &h, &[v0, v1], &gens);
    let oracle = scalarmult(&blinding, &h)
        .add(&scalarmult_vartime(&v0, &gens[0]))
        .add(&scalarmult_vartime(&v1, &gens[1]));
    assert_eq!(commit.to_bytes(), oracle.to_bytes(), "L1_MSM_FAULT: Pedersen drift.");
    println!("   ✅ Pedersen certified.");
}
