//! RustAD: A Rust library for automatic differentiation.
//!
//! Copyright (C) 2024 <https://github.com/rust-ad>
//!
//! Dual licensed under Apache 2.0 and MIT.
//!
//! See:
//! - [LICENSE-APACHE.md](https://github.com/rust-ad/RustAD/blob/main/LICENSE-APACHE.md)
//! - [LICENSE-MIT.md](https://github.com/rust-ad/RustAD/blob/main/LICENSE-MIT.md)
//!
//! The engine evaluates user-supplied numerical expressions built from a
//! closed set of elementary operations and produces exact derivatives
//! (gradients, Jacobians, directional derivatives) to machine precision,
//! without finite-difference error.
//!
//! - [x] Reverse (Adjoint) Mode
//!   - Implementation via operator and function overloading over a tape
//!     (Wengert list).
//!   - Useful when the number of outputs is *smaller* than the number of
//!     inputs: $f:\mathbb{R}^n \rightarrow \mathbb{R}^m$, where $m \ll n$.
//! - [x] Forward (Tangent) Mode
//!   - Implementation via dual numbers.
//!   - Useful when the number of outputs is *larger* than the number of
//!     inputs: $f:\mathbb{R}^n \rightarrow \mathbb{R}^m$, where $m \gg n$.
//!
//! Forward mode:
//!
//! ```
//! use RustAD::forward::*;
//!
//! # fn main() -> RustAD::error::Result<()> {
//! let (value, tangent) = derivative(|x| x.powf(2.0), 3.0)?;
//!
//! assert_eq!(value, 9.0);
//! assert_eq!(tangent, 6.0);
//! # Ok(())
//! # }
//! ```
//!
//! Reverse mode:
//!
//! ```
//! use RustAD::reverse::*;
//!
//! // Create a new Graph to store the computations.
//! let g = Graph::new();
//!
//! // Assign variables.
//! let x = g.var(69.0);
//! let y = g.var(420.0);
//!
//! // Define a function.
//! let f = x * y + x.exp();
//!
//! // Accumulate the gradient.
//! let gradient = f.accumulate();
//!
//! assert_eq!(gradient.wrt(&x), 420.0 + 69_f64.exp());
//! assert_eq!(gradient.wrt(&y), 69.0);
//! ```

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// GLOBAL SETTINGS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

// Strictly enforce documentation.
#![forbid(missing_docs)]
//
// When writing mathematical equations in documentation, Clippy suggests to
// put backticks inside the LaTeX block. This suppresses that behavior.
#![allow(clippy::doc_markdown)]
//
// Allow snake case.
// This is because much of this library is based on mathematics, so I
// want to adhere to the standard mathematical notation.
#![allow(non_snake_case)]
//
// Strictly enforce SAFETY comments.
// There is no unsafe code currently, but for anyone to add any, it must be
// documented with a SAFETY comment.
#![forbid(clippy::undocumented_unsafe_blocks)]

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RUSTAD MODULES
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// The RustAD prelude.
///
/// The two modes define same-named operator traits (`Powf`, `Log`), so
/// the reverse-mode surface is re-exported by name, with those traits
/// renamed.
pub mod prelude {
    pub use RustAD_error::*;
    pub use RustAD_forward::*;
    pub use RustAD_reverse::{
        reverse_mode, Accumulate, Arity, Gradient, Graph, Variable, Vertex,
    };
    pub use RustAD_reverse::{Log as LogReverse, Powf as PowfReverse};
}

/// The `error` module: the error taxonomy shared by both modes.
pub mod error {
    pub use RustAD_error::*;
}

/// The `forward` module: dual numbers, the forward elementary library,
/// and the forward-mode drivers.
pub mod forward {
    pub use RustAD_forward::*;
}

/// The `reverse` module: the computation graph, the elemental library,
/// adjoint accumulation, and the reverse-mode driver.
pub mod reverse {
    pub use RustAD_reverse::*;
}

pub use RustAD_error::{Result, RustADError};
