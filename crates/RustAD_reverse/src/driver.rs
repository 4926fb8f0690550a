// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The reverse-mode driver routine.

use crate::{accumulate::Accumulate, gradient::Gradient, graph::Graph, variable::Variable};
use RustAD_error::Result;

/// Value and full gradient of a scalar function of several variables,
/// by one forward evaluation and one reverse pass.
///
/// A scalar input is the length-one slice. The graph lives only for the
/// duration of the call and is dropped on return; on error the partially
/// built graph is abandoned with it. Vector-valued output is not
/// supported by this driver: differentiate one coordinate per call.
///
/// ```
/// # use RustAD_reverse::*;
/// # fn main() -> RustAD_error::Result<()> {
/// // f(x1, x2, x3) = cos(x1 + x2) + x3 * x2³ at (1, 2, 3).
/// let (value, gradient) = reverse_mode(
///     |x| {
///         let cube = x[1].powf(3.0)?;
///         Ok((x[0] + x[1]).cos() + x[2] * cube)
///     },
///     &[1.0, 2.0, 3.0],
/// )?;
///
/// assert!((value - 23.010_007_503_399_553).abs() < 1e-10);
/// assert!((gradient[0] - -3_f64.sin()).abs() < 1e-10);
/// assert!((gradient[1] - (-3_f64.sin() + 36.0)).abs() < 1e-10);
/// assert!((gradient[2] - 8.0).abs() < 1e-10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Propagates any domain error raised by the function.
pub fn reverse_mode<F>(f: F, x: &[f64]) -> Result<(f64, Vec<f64>)>
where
    F: for<'v> Fn(&[Variable<'v>]) -> Result<Variable<'v>>,
{
    let graph = Graph::with_capacity(x.len());
    let variables = graph.vars(x);

    let output = f(&variables)?;
    let adjoints = output.accumulate();

    Ok((output.value, adjoints.wrt(&variables)))
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
