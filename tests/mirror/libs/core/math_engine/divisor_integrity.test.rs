// [tests/mirror/libs/core/math_engine/divisor_integrity.test.rs]
/**
 * =================================================================
 * APARATO: DIVISOR CERTIFIER (V2.0 - FUNCTION FIELD)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: DIVISORES EN DOMINIO DE EVALUACIÓN Y TREE-REDUCE
 * =================================================================
 */
use helioselene_core_math::divisor::{evals_bary_eval, evals_div_linear, evals_mul, FieldEvals};
use helioselene_core_math::prelude::*;

#[test]
fn certify_three_point_divisor_vanishes_on_support() {
    println!("\n🌿 [PROVING_GROUNDS]: Auditing 3-point divisor (P1=G, P2=2G, P3=3G)...");

    let g = HeliosPoint::generator();
    let jac = [g, g.double(), g.double().add(&g)];
    let affine = HeliosPoint::batch_to_affine(&jac);

    let divisors: Vec<EvalDivisor<Fp>> =
        affine.iter().map(EvalDivisor::from_point).collect();

    let (root, sum) = tree_reduce(&divisors, &affine).expect("non-empty support");
    let divisor = root.to_divisor();

    // D(x_i, y_i) = a(x_i) - y_i * b(x_i) = 0 para cada punto del soporte.
    for point in &affine {
        let value = divisor.evaluate(&point.x, &point.y);
        assert!(
            !value.is_nonzero(),
            "L1_DIVISOR_FAULT: divisor does not vanish at support point."
        );
    }

    // La suma EC capturada en el árbol es G + 2G + 3G = 6G.
    let mut six = [0u8; 32];
    six[0] = 6;
    assert_eq!(
        sum.to_bytes(),
        scalarmult_vartime(&six, &g).to_bytes(),
        "L1_DIVISOR_FAULT: tree-reduce EC sum drift."
    );

    // Y NO se anula en un punto genérico fuera del soporte.
    let off = g.double().double().to_affine();
    assert!(
        divisor.evaluate(&off.x, &off.y).is_nonzero(),
        "L1_DIVISOR_FAULT: divisor vanishes off-support (degenerate)."
    );
    println!("   ✅ 3-point divisor certified.");
}

#[test]
fn certify_tree_reduce_matches_sequential_composition() {
    println!("\n🌿 [PROVING_GROUNDS]: Auditing tree vs sequential merge...");
    let g = SelenePoint::generator();
    let jac = [g, g.double(), g.double().add(&g), g.double().double()];
    let affine = SelenePoint::batch_to_affine(&jac);

    let divisors: Vec<EvalDivisor<Fq>> =
        affine.iter().map(EvalDivisor::from_point).collect();

    // Árbol
    let (tree_root, _) = tree_reduce(&divisors, &affine).expect("non-empty support");

    // Composición secuencial ingenua del constructor de un punto
    let mut seq = divisors[0].clone();
    for d in &divisors[1..] {
        seq = seq.merge(d);
    }

    // Ambas rutas producen el mismo divisor en dominio de coeficientes.
    let tree_poly = tree_root.to_divisor();
    let seq_poly = seq.to_divisor();
    assert_eq!(tree_poly.a, seq_poly.a, "L1_DIVISOR_FAULT: tree/sequential a drift.");
    assert_eq!(tree_poly.b, seq_poly.b, "L1_DIVISOR_FAULT: tree/sequential b drift.");
    println!("   ✅ Tree/sequential parity certified.");
}

#[test]
fn certify_scalar_mul_divisor() {
    println!("\n🌿 [PROVING_GROUNDS]: Auditing scalar-multiplication divisor...");
    let g = HeliosPoint::generator().to_affine();

    // k = 5 = 0b101: peso de Hamming 2 -> árbol de 2 hojas.
    let mut k = [0u8; 32];
    k[0] = 5;
    let divisor = scalar_mul_divisor(&k, &g);

    // El divisor se anula en P (el soporte son copias de P).
    assert!(
        !divisor.evaluate(&g.x, &g.y).is_nonzero(),
        "L1_DIVISOR_FAULT: k*P divisor does not vanish at P."
    );

    // Ruta ingenua: dos divisores puntuales fusionados a mano.
    let single = EvalDivisor::<Fp>::from_point(&g);
    let naive = single.merge(&single).to_divisor();
    assert_eq!(divisor.a, naive.a, "L1_DIVISOR_FAULT: HW-2 naive composition drift (a).");
    assert_eq!(divisor.b, naive.b, "L1_DIVISOR_FAULT: HW-2 naive composition drift (b).");

    // k = 1: constructor directo, divisor constante (py^2, py).
    let mut one = [0u8; 32];
    one[0] = 1;
    let single_div = scalar_mul_divisor(&one, &g);
    assert_eq!(
        single_div.a,
        compute_divisor_single(&g).a,
        "L1_DIVISOR_FAULT: HW-1 fallback drift."
    );

    // k = 0: divisor vacío (a = b = 0).
    let zero = [0u8; 32];
    let zero_div = scalar_mul_divisor(&zero, &g);
    assert!(
        !zero_div.a.evaluate(&g.x).is_nonzero() && !zero_div.b.evaluate(&g.x).is_nonzero(),
        "L1_DIVISOR_FAULT: zero scalar divisor not empty."
    );

    // El grado refleja el peso de Hamming (público por contrato): para
    // HW = 2, deg(a) = 3 + 0 + 0 = 3 por el término cúbico de la curva.
    assert_eq!(divisor.a.degree(), 3, "L1_DIVISOR_FAULT: HW-2 degree bookkeeping drift.");
    println!("   ✅ Scalar-mul divisor certified.");
}

#[test]
fn certify_eval_domain_primitives() {
    println!("\n🌿 [PROVING_GROUNDS]: Auditing eval-domain primitives...");

    // from_linear(c): f(i) = i - c; to_poly reconstruye [-c, 1].
    let c = Fp::from_u64(7);
    let linear = FieldEvals::<Fp>::from_linear(&c);
    let poly = evals_to_poly(&linear);
    assert_eq!(poly.coeffs.len(), 2, "L1_DIVISOR_FAULT: linear degree drift.");
    assert_eq!(poly.coeffs[1], Fp::ONE, "L1_DIVISOR_FAULT: linear lead drift.");
    assert_eq!(
        poly.coeffs[0],
        c.negate_modular().normalize(),
        "L1_DIVISOR_FAULT: linear constant drift."
    );

    // Producto lane a lane: (x - 7) * (x - 7) evaluado en i = 10 -> 9.
    let squared = evals_mul(&linear, &linear);
    assert_eq!(squared.get(10), Fp::from_u64(9), "L1_DIVISOR_FAULT: evals_mul drift.");
    assert_eq!(squared.degree, 2, "L1_DIVISOR_FAULT: evals_mul degree drift.");

    // Evaluación baricéntrica FUERA del dominio: f(x) = x - 7 en x = 1000.
    let outside = Fp::from_u64(1000);
    let value = evals_bary_eval(&linear, &outside);
    assert_eq!(value, Fp::from_u64(993), "L1_DIVISOR_FAULT: barycentric drift.");

    // División exacta por (x - c): (x-7)^2 / (x-7) = (x-7).
    let quotient = evals_div_linear(&squared, &c);
    for i in [0usize, 1, 50, 255] {
        assert_eq!(
            quotient.get(i).to_bytes(),
            linear.get(i).to_bytes(),
            "L1_DIVISOR_FAULT: div_linear drift."
        );
    }
    println!("   ✅ Eval-domain primitives certified.");
}
