// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Forward-mode driver routines.
//!
//! The typed entry points ([`derivative`], [`directional`], [`gradient`],
//! [`jacobian`], [`seeded_jacobian`]) each fix the input/output shape at
//! compile time. [`forward_mode`] is the single entry point dispatching on
//! a [`Function`] shape tag, for callers that select the mode at runtime.
//!
//! The driver evaluates the user function only through the [`Dual`]
//! carriers it supplies; the function must be pure with respect to AD
//! state.

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// IMPORTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use crate::dual::Dual;
use ndarray::{Array1, Array2};
use RustAD_error::{Result, RustADError};

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// TYPED ENTRY POINTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Value and derivative of a scalar function of one variable.
///
/// The input is wrapped as the variable of differentiation
/// (`Dual::variable`), so the returned tangent is $f'(x)$.
///
/// ```
/// # use RustAD_forward::*;
/// # fn main() -> RustAD_error::Result<()> {
/// let (value, tangent) = derivative(|x| x.powf(2.0), 3.0)?;
///
/// assert_eq!(value, 9.0);
/// assert_eq!(tangent, 6.0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Propagates any domain error raised by the function.
pub fn derivative<F>(f: F, x: f64) -> Result<(f64, f64)>
where
    F: Fn(Dual) -> Result<Dual>,
{
    let output = f(Dual::variable(x))?;
    Ok((output.real, output.dual))
}

/// Value and directional derivative $\langle \nabla f(x), p \rangle$ of a
/// scalar function of several variables, along the seed vector `p`.
///
/// Each partial is obtained by re-running `f` with the variable of
/// differentiation in one position and constants elsewhere; positions with
/// a zero seed component are not evaluated.
///
/// # Errors
///
/// Returns a shape error if `p` and `x` differ in length, and propagates
/// any domain error raised by the function.
pub fn directional<F>(f: F, x: &[f64], p: &[f64]) -> Result<(f64, f64)>
where
    F: Fn(&[Dual]) -> Result<Dual>,
{
    if p.len() != x.len() {
        return Err(RustADError::shape(format!(
            "seed has length {}, input has length {}",
            p.len(),
            x.len()
        )));
    }

    let constants: Vec<Dual> = x.iter().copied().map(Dual::constant).collect();
    let value = f(&constants)?.real;

    let mut tangent = 0.0;
    for (i, &weight) in p.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        let mut inputs = constants.clone();
        inputs[i] = Dual::variable(x[i]);
        tangent += weight * f(&inputs)?.dual;
    }

    Ok((value, tangent))
}

/// Full gradient $\nabla f(x)$ of a scalar function of several variables:
/// one evaluation per coordinate, each with a unit seed.
///
/// ```
/// # use RustAD_forward::*;
/// # fn main() -> RustAD_error::Result<()> {
/// // f(x0, x1) = x0² + x1³ + 5 x0 x1 at (7, 11).
/// let grad = gradient(
///     |x| {
///         let a = x[0].powf(2.0)?;
///         let b = x[1].powf(3.0)?;
///         Ok(a + b + 5.0 * x[0] * x[1])
///     },
///     &[7.0, 11.0],
/// )?;
///
/// assert_eq!(grad, vec![69.0, 398.0]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Propagates any domain error raised by the function.
pub fn gradient<F>(f: F, x: &[f64]) -> Result<Vec<f64>>
where
    F: Fn(&[Dual]) -> Result<Dual>,
{
    let constants: Vec<Dual> = x.iter().copied().map(Dual::constant).collect();

    let mut grad = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        let mut inputs = constants.clone();
        inputs[i] = Dual::variable(x[i]);
        grad.push(f(&inputs)?.dual);
    }

    Ok(grad)
}

/// Dense m×n Jacobian of a vector-valued function: column $j$ is the
/// tangent of one evaluation with the unit seed $e_j$.
///
/// # Errors
///
/// Returns a shape error if the function's output length varies between
/// evaluations, and propagates any domain error it raises.
pub fn jacobian<F>(f: F, x: &[f64]) -> Result<Array2<f64>>
where
    F: Fn(&[Dual]) -> Result<Vec<Dual>>,
{
    let constants: Vec<Dual> = x.iter().copied().map(Dual::constant).collect();
    let rows = f(&constants)?.len();

    let mut jacobian = Array2::zeros((rows, x.len()));
    for j in 0..x.len() {
        let mut inputs = constants.clone();
        inputs[j] = Dual::variable(x[j]);

        let column = f(&inputs)?;
        if column.len() != rows {
            return Err(RustADError::shape(format!(
                "function output length changed from {} to {}",
                rows,
                column.len()
            )));
        }
        for (i, output) in column.iter().enumerate() {
            jacobian[(i, j)] = output.dual;
        }
    }

    Ok(jacobian)
}

/// Value and Jacobian-vector product $(f(x), J \cdot p)$ of a
/// vector-valued function along the seed `p`, via the assembled Jacobian.
///
/// # Errors
///
/// Returns a shape error if `p` and `x` differ in length, and propagates
/// any error from [`jacobian`].
pub fn seeded_jacobian<F>(f: F, x: &[f64], p: &[f64]) -> Result<(Vec<f64>, Vec<f64>)>
where
    F: Fn(&[Dual]) -> Result<Vec<Dual>>,
{
    if p.len() != x.len() {
        return Err(RustADError::shape(format!(
            "seed has length {}, input has length {}",
            p.len(),
            x.len()
        )));
    }

    let constants: Vec<Dual> = x.iter().copied().map(Dual::constant).collect();
    let value: Vec<f64> = f(&constants)?.iter().map(|output| output.real).collect();

    let jacobian = jacobian(&f, x)?;
    let tangent = jacobian.dot(&Array1::from(p.to_vec()));

    Ok((value, tangent.to_vec()))
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// SINGLE ENTRY POINT
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Shape tag for the single entry point: scalar/vector input crossed with
/// scalar/vector output, each variant holding the user function.
pub enum Function<'f> {
    /// $f: \mathbb{R} \rightarrow \mathbb{R}$
    ScalarScalar(&'f dyn Fn(Dual) -> Result<Dual>),
    /// $f: \mathbb{R} \rightarrow \mathbb{R}^m$
    ScalarVector(&'f dyn Fn(Dual) -> Result<Vec<Dual>>),
    /// $f: \mathbb{R}^n \rightarrow \mathbb{R}$
    VectorScalar(&'f dyn Fn(&[Dual]) -> Result<Dual>),
    /// $f: \mathbb{R}^n \rightarrow \mathbb{R}^m$
    VectorVector(&'f dyn Fn(&[Dual]) -> Result<Vec<Dual>>),
}

/// Result of the single entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardOutput {
    /// Value and (directional) derivative of a scalar-valued call.
    Scalar {
        /// $f(x)$
        value: f64,
        /// $f'(x)$, or $\langle \nabla f(x), p \rangle$ under a seed.
        tangent: f64,
    },
    /// Value and tangent $J \cdot p$ of a seeded vector-valued call.
    Vector {
        /// $f(x)$
        value: Vec<f64>,
        /// $J \cdot p$
        tangent: Vec<f64>,
    },
    /// The gradient $\nabla f(x)$.
    Gradient(Vec<f64>),
    /// The dense m×n Jacobian.
    Jacobian(Array2<f64>),
}

/// The single forward-mode entry point, dispatching on the [`Function`]
/// shape tag, an optional seed vector, and the `gradient`/`jacobian`
/// flags.
///
/// Dispatch rules:
/// - `gradient = true` requires a scalar-valued function and returns
///   [`ForwardOutput::Gradient`]; it wins the tie when `jacobian` is also
///   set.
/// - `jacobian = true` returns [`ForwardOutput::Jacobian`] for
///   vector-valued functions and falls back to the gradient for
///   scalar-valued ones.
/// - With a seed, scalar-valued functions yield the directional
///   derivative and vector-valued ones yield $(f(x), J \cdot p)$.
/// - Otherwise only $f: \mathbb{R} \rightarrow \mathbb{R}$ is
///   well-formed; vector input without a seed or `gradient` is a shape
///   error, as is vector output without `jacobian` or a seed.
///
/// ```
/// # use RustAD_forward::*;
/// # fn main() -> RustAD_error::Result<()> {
/// let f = |x: Dual| {
///     let e = x.exp();
///     Ok(e + e.sin())
/// };
/// let output = forward_mode(Function::ScalarScalar(&f), &[4.0], None, false, false)?;
///
/// let ForwardOutput::Scalar { value, tangent } = output else {
///     unreachable!()
/// };
/// assert!((value - 53.669_382_096_900_45).abs() < 1e-10);
/// assert!((tangent - 34.360_705_101_546_074).abs() < 1e-10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Shape errors per the dispatch rules above; any domain error raised by
/// the function propagates unchanged.
pub fn forward_mode(
    function: Function<'_>,
    x: &[f64],
    seed: Option<&[f64]>,
    gradient: bool,
    jacobian: bool,
) -> Result<ForwardOutput> {
    if gradient {
        // Tie-break: with scalar output the gradient *is* the Jacobian, so
        // the gradient flag wins even when both are set.
        return match function {
            Function::ScalarScalar(f) => {
                let (_, tangent) = derivative(f, scalar_input(x)?)?;
                Ok(ForwardOutput::Gradient(vec![tangent]))
            }
            Function::VectorScalar(f) => Ok(ForwardOutput::Gradient(self::gradient(f, x)?)),
            _ => Err(RustADError::shape(
                "gradient requires a scalar-valued function",
            )),
        };
    }

    if jacobian {
        return match function {
            Function::ScalarVector(f) => {
                let x = scalar_input(x)?;
                let jacobian = self::jacobian(|inputs: &[Dual]| f(inputs[0]), &[x])?;
                Ok(ForwardOutput::Jacobian(jacobian))
            }
            Function::VectorVector(f) => Ok(ForwardOutput::Jacobian(self::jacobian(f, x)?)),
            // Scalar-valued: the Jacobian degenerates to the gradient.
            Function::ScalarScalar(f) => {
                let (_, tangent) = derivative(f, scalar_input(x)?)?;
                Ok(ForwardOutput::Gradient(vec![tangent]))
            }
            Function::VectorScalar(f) => Ok(ForwardOutput::Gradient(self::gradient(f, x)?)),
        };
    }

    if let Some(p) = seed {
        return match function {
            Function::VectorScalar(f) => {
                let (value, tangent) = directional(f, x, p)?;
                Ok(ForwardOutput::Scalar { value, tangent })
            }
            Function::VectorVector(f) => {
                let (value, tangent) = seeded_jacobian(f, x, p)?;
                Ok(ForwardOutput::Vector { value, tangent })
            }
            // A length-one seed over a scalar input reduces to the plain
            // derivative.
            Function::ScalarScalar(f) => {
                if p.len() != 1 {
                    return Err(RustADError::shape(format!(
                        "seed has length {}, input has length 1",
                        p.len()
                    )));
                }
                let (value, tangent) = derivative(f, scalar_input(x)?)?;
                Ok(ForwardOutput::Scalar { value, tangent })
            }
            Function::ScalarVector(f) => {
                let x = scalar_input(x)?;
                let (value, tangent) =
                    seeded_jacobian(|inputs: &[Dual]| f(inputs[0]), &[x], p)?;
                Ok(ForwardOutput::Vector { value, tangent })
            }
        };
    }

    match function {
        Function::ScalarScalar(f) => {
            let (value, tangent) = derivative(f, scalar_input(x)?)?;
            Ok(ForwardOutput::Scalar { value, tangent })
        }
        Function::VectorScalar(_) => Err(RustADError::shape(
            "vector input requires a seed vector or gradient = true",
        )),
        Function::ScalarVector(_) | Function::VectorVector(_) => Err(RustADError::shape(
            "vector output requires a seed vector or jacobian = true",
        )),
    }
}

/// A scalar input is a length-one slice.
fn scalar_input(x: &[f64]) -> Result<f64> {
    match x {
        [value] => Ok(*value),
        _ => Err(RustADError::shape(format!(
            "expected a scalar input, got length {}",
            x.len()
        ))),
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
