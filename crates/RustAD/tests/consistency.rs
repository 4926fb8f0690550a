// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Cross-mode laws: the two modes must agree on every function in the
//! interior of its domain, and forward mode must be linear in the seed.

use RustAD::forward::{self, Dual, Powf};
use RustAD::reverse::{self, Powf as PowfReverse, Variable};
use RustAD::Result;
use RustAD_utils::assert_approx_equal;

// f(x0, x1) = x0² + x1³ + 5 x0 x1, in both carrier types.
fn polynomial_forward(x: &[Dual]) -> Result<Dual> {
    let a = x[0].powf(2.0)?;
    let b = x[1].powf(3.0)?;
    Ok(a + b + 5.0 * x[0] * x[1])
}

fn polynomial_reverse<'v>(x: &[Variable<'v>]) -> Result<Variable<'v>> {
    let a = x[0].powf(2.0)?;
    let b = x[1].powf(3.0)?;
    Ok(a + b + 5.0 * x[0] * x[1])
}

// f(x0, x1, x2) = cos(x0 + x1) + x2 x1³
fn trig_forward(x: &[Dual]) -> Result<Dual> {
    let cube = x[1].powf(3.0)?;
    Ok((x[0] + x[1]).cos() + x[2] * cube)
}

fn trig_reverse<'v>(x: &[Variable<'v>]) -> Result<Variable<'v>> {
    let cube = x[1].powf(3.0)?;
    Ok((x[0] + x[1]).cos() + x[2] * cube)
}

// f(x0, x1) = sigmoid(x0) tanh(x1) + exp(x0 / x1)
fn transcendental_forward(x: &[Dual]) -> Result<Dual> {
    Ok(x[0].sigmoid() * x[1].tanh() + (x[0] / x[1]).exp())
}

fn transcendental_reverse<'v>(x: &[Variable<'v>]) -> Result<Variable<'v>> {
    Ok(x[0].sigmoid() * x[1].tanh() + (x[0] / x[1]).exp())
}

#[test]
fn test_modes_agree() {
    let cases: &[(
        fn(&[Dual]) -> Result<Dual>,
        for<'v> fn(&[Variable<'v>]) -> Result<Variable<'v>>,
        Vec<f64>,
    )] = &[
        (polynomial_forward, polynomial_reverse, vec![7.0, 11.0]),
        (trig_forward, trig_reverse, vec![1.0, 2.0, 3.0]),
        (transcendental_forward, transcendental_reverse, vec![0.7, 1.9]),
    ];

    for (forward_f, reverse_f, x) in cases {
        let forward_gradient = forward::gradient(forward_f, x).unwrap();
        let (_, reverse_gradient) = reverse::reverse_mode(reverse_f, x).unwrap();

        assert_eq!(forward_gradient.len(), reverse_gradient.len());
        for (f, r) in forward_gradient.iter().zip(reverse_gradient.iter()) {
            assert_approx_equal!(f, r, 1e-10);
        }
    }
}

#[test]
fn test_modes_agree_on_constant_base_power() {
    // d/dx 3^x = 3^x ln(3) in both modes.
    let forward_f = |x: Dual| Powf::powf(&3.0, x);
    let (value, tangent) = forward::derivative(forward_f, 2.0).unwrap();

    let (reverse_value, reverse_gradient) =
        reverse::reverse_mode(|x| PowfReverse::powf(&3.0, x[0]), &[2.0]).unwrap();

    assert_approx_equal!(value, 9.0, 1e-10);
    assert_approx_equal!(value, reverse_value, 1e-10);
    assert_approx_equal!(tangent, 9.0 * 3_f64.ln(), 1e-10);
    assert_approx_equal!(tangent, reverse_gradient[0], 1e-10);
}

#[test]
fn test_seed_linearity() {
    // FM(f, x, αp + βq) == α FM(f, x, p) + β FM(f, x, q).
    let x = [1.0, 2.0, 3.0];
    let p = [1.0, -2.0, 0.5];
    let q = [0.0, 3.0, 4.0];
    let (alpha, beta) = (2.5, -1.5);

    let combined: Vec<f64> = p
        .iter()
        .zip(q.iter())
        .map(|(pi, qi)| alpha * pi + beta * qi)
        .collect();

    let (_, d_combined) = forward::directional(trig_forward, &x, &combined).unwrap();
    let (_, d_p) = forward::directional(trig_forward, &x, &p).unwrap();
    let (_, d_q) = forward::directional(trig_forward, &x, &q).unwrap();

    assert_approx_equal!(d_combined, alpha * d_p + beta * d_q, 1e-10);
}

#[test]
fn test_jacobian_column_law() {
    // The i-th column of the Jacobian equals the tangent under the unit
    // seed e_i.
    fn vector_field(x: &[Dual]) -> Result<Vec<Dual>> {
        let first = polynomial_forward(x)?;
        let second = (x[0] * x[1]).sin();
        Ok(vec![first, second])
    }

    let x = [0.3, 0.8];
    let jacobian = forward::jacobian(vector_field, &x).unwrap();

    for i in 0..x.len() {
        let mut seed = vec![0.0; x.len()];
        seed[i] = 1.0;
        let (_, column) = forward::seeded_jacobian(vector_field, &x, &seed).unwrap();

        for (row, tangent) in column.iter().enumerate() {
            assert_approx_equal!(jacobian[(row, i)], tangent, 1e-10);
        }
    }
}

#[test]
fn test_chain_rule() {
    // d/dx f(g(x)) = f'(g(x)) g'(x) for f = sin, g = exp, at 1.3.
    let x = 1.3;
    let (_, tangent) = forward::derivative(|x: Dual| Ok(x.exp().sin()), x).unwrap();
    assert_approx_equal!(tangent, x.exp().cos() * x.exp(), 1e-12);

    let (_, gradient) = reverse::reverse_mode(|x| Ok(x[0].exp().sin()), &[x]).unwrap();
    assert_approx_equal!(gradient[0], x.exp().cos() * x.exp(), 1e-12);
}

#[test]
fn test_adjoint_idempotence_on_leaves() {
    let (value, gradient) = reverse::reverse_mode(|x| Ok(x[0]), &[0.37]).unwrap();
    assert_eq!(value, 0.37);
    assert_eq!(gradient, vec![1.0]);
}
