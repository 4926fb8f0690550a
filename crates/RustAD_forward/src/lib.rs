// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// FORWARD-MODE AUTOMATIC DIFFERENTIATION
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Forward (tangent) mode automatic differentiation via dual numbers.
//!
//! A [`Dual`] carries a primal value and a tangent through every
//! operation, implementing the chain rule algebraically over the ring of
//! dual numbers ($\varepsilon^2 = 0$). Forward mode is the efficient
//! choice for functions $f: \mathbb{R}^n \rightarrow \mathbb{R}^m$ where
//! $m \gg n$: one evaluation yields a full Jacobian column.
//!
//! ```
//! # use RustAD_forward::*;
//! # fn main() -> RustAD_error::Result<()> {
//! // d/dx (exp(x) + sin(exp(x))) at x = 4.
//! let (value, tangent) = derivative(
//!     |x| {
//!         let e = x.exp();
//!         Ok(e + e.sin())
//!     },
//!     4.0,
//! )?;
//!
//! assert!((value - 53.669_382_096_900_45).abs() < 1e-10);
//! assert!((tangent - 34.360_705_101_546_074).abs() < 1e-10);
//! # Ok(())
//! # }
//! ```
//!
//! Gradients of scalar fields and Jacobians of vector fields are
//! assembled by the driver routines in [`driver`], one unit seed per
//! input coordinate.

/// The dual number scalar and its overloaded operators.
pub mod dual;
pub use dual::*;

/// The elementary library: transcendental primitives lifted to duals.
pub mod elementary;
pub use elementary::*;

/// Driver routines: derivatives, directional derivatives, gradients,
/// Jacobians, and the single-entry-point dispatcher.
pub mod driver;
pub use driver::*;
