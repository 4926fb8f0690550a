// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! This module contains the implementation of the [`Dual`] scalar.
//!
//! A dual number is the formal pair $a + b\varepsilon$ with
//! $\varepsilon^2 = 0$. The real part is the primal value, the dual part
//! accumulates the directional derivative. Arithmetic follows the ring of
//! dual numbers, e.g. $(a+b\varepsilon)(c+d\varepsilon) = ac +
//! (ad+bc)\varepsilon$.

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// IMPORTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// STRUCT AND IMPLEMENTATION
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// A dual number: primal value plus tangent.
#[derive(Clone, Copy, Debug)]
pub struct Dual {
    /// The primal (real) component.
    pub real: f64,
    /// The tangent (dual) component.
    pub dual: f64,
}

impl Dual {
    /// Instantiate a new dual number from both components.
    #[must_use]
    #[inline]
    pub const fn new(real: f64, dual: f64) -> Self {
        Dual { real, dual }
    }

    /// The variable of differentiation: tangent seeded with one.
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::variable(4.0);
    ///
    /// assert_eq!(x.real(), 4.0);
    /// assert_eq!(x.dual(), 1.0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn variable(real: f64) -> Self {
        Dual { real, dual: 1.0 }
    }

    /// A constant: tangent zero.
    #[must_use]
    #[inline]
    pub const fn constant(real: f64) -> Self {
        Dual { real, dual: 0.0 }
    }

    /// Function to return the primal component.
    #[must_use]
    #[inline]
    pub const fn real(&self) -> f64 {
        self.real
    }

    /// Function to return the tangent component.
    #[must_use]
    #[inline]
    pub const fn dual(&self) -> f64 {
        self.dual
    }
}

/// A bare real is promoted to a constant (zero tangent).
impl From<f64> for Dual {
    #[inline]
    fn from(real: f64) -> Self {
        Dual::constant(real)
    }
}

/// Implement formatting for the `Dual` struct.
impl Display for Dual {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dual Number (real={}, dual={})", self.real, self.dual)
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// COMPARISON OPERATORS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Equality within one machine epsilon on both components.
impl PartialEq for Dual {
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0) + 3.0;
    ///
    /// assert!(x == Dual::new(4.0, 2.0));
    /// assert!(x != Dual::new(4.0, 3.0));
    /// ```
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.real - other.real).abs() < f64::EPSILON
            && (self.dual - other.dual).abs() < f64::EPSILON
    }
}

/// Dual == f64 (the real is promoted to a constant).
impl PartialEq<f64> for Dual {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == Dual::constant(*other)
    }
}

/// f64 == Dual (the real is promoted to a constant).
impl PartialEq<Dual> for f64 {
    #[inline]
    fn eq(&self, other: &Dual) -> bool {
        Dual::constant(*self) == *other
    }
}

/// Ordering of dual numbers is a **partial** order: a relation holds only
/// when *both* components satisfy it. Consumers must not rely on a total
/// order; `partial_cmp` returns `None` whenever the components disagree.
impl PartialOrd for Dual {
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    /// let y = Dual::new(3.0, 4.0);
    /// let z = Dual::new(3.0, 1.0);
    ///
    /// assert!(x < y);
    /// // Components disagree: no relation holds.
    /// assert!(!(x < z) && !(x >= z));
    /// ```
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.real < other.real && self.dual < other.dual {
            Some(Ordering::Less)
        } else if self.real > other.real && self.dual > other.dual {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.real < other.real && self.dual < other.dual
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.real <= other.real && self.dual <= other.dual
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.real > other.real && self.dual > other.dual
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.real >= other.real && self.dual >= other.dual
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard addition operator (`+`).
/// (a + bε) + (c + dε) = (a + c) + (b + d)ε

/// Dual + Dual
impl Add<Dual> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    /// let y = Dual::new(3.0, 4.0);
    ///
    /// assert_eq!(x + y, Dual::new(4.0, 6.0));
    /// ```
    #[inline]
    fn add(self, other: Dual) -> Self::Output {
        Dual::new(self.real + other.real, self.dual + other.dual)
    }
}

/// Dual + f64
impl Add<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn add(self, other: f64) -> Self::Output {
        Dual::new(self.real + other, self.dual)
    }
}

/// f64 + Dual
impl Add<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn add(self, other: Dual) -> Self::Output {
        other + self
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard subtraction operator (`-`).
/// (a + bε) - (c + dε) = (a - c) + (b - d)ε

/// Dual - Dual
impl Sub<Dual> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    ///
    /// assert_eq!(x - 3.0, Dual::new(-2.0, 2.0));
    /// ```
    #[inline]
    fn sub(self, other: Dual) -> Self::Output {
        Dual::new(self.real - other.real, self.dual - other.dual)
    }
}

/// Dual - f64
impl Sub<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn sub(self, other: f64) -> Self::Output {
        Dual::new(self.real - other, self.dual)
    }
}

/// f64 - Dual
impl Sub<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn sub(self, other: Dual) -> Self::Output {
        (other - self).neg()
    }
}

/// Negation: -(a + bε) = -a - bε
impl Neg for Dual {
    type Output = Dual;

    #[inline]
    fn neg(self) -> Self::Output {
        Dual::new(-self.real, -self.dual)
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard multiplication operator (`*`).
/// (a + bε)(c + dε) = ac + (ad + bc)ε, since ε² = 0.

/// Dual * Dual
impl Mul<Dual> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    /// let y = Dual::new(1.0, 2.0);
    ///
    /// assert_eq!(x * y, Dual::new(1.0, 4.0));
    /// ```
    #[inline]
    fn mul(self, other: Dual) -> Self::Output {
        Dual::new(
            self.real * other.real,
            self.real * other.dual + self.dual * other.real,
        )
    }
}

/// Dual * f64
impl Mul<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn mul(self, other: f64) -> Self::Output {
        Dual::new(self.real * other, self.dual * other)
    }
}

/// f64 * Dual
impl Mul<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn mul(self, other: Dual) -> Self::Output {
        other * self
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard division operator (`/`).
/// (a + bε)/(c + dε) = a/c + ((bc - ad)/c²)ε, requiring c ≠ 0.
///
/// As with integer division in `std`, dividing by a zero-primal divisor
/// panics; the named fallible operations of the elementary library return
/// `Result` instead.

/// Dual / Dual
impl Div<Dual> for Dual {
    type Output = Dual;

    /// Requires the divisor's real part to be non-zero.
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(6.0, 9.0);
    ///
    /// assert_eq!(x / 3.0, Dual::new(2.0, 3.0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the divisor has a real part of zero.
    #[inline]
    fn div(self, other: Dual) -> Self::Output {
        assert!(
            other.real != 0.0,
            "division by zero: dual divisor has a real part of zero"
        );

        Dual::new(
            self.real / other.real,
            (self.dual * other.real - self.real * other.dual) / (other.real * other.real),
        )
    }
}

/// Dual / f64
impl Div<f64> for Dual {
    type Output = Dual;

    /// # Panics
    ///
    /// Panics if the scalar divisor is within one machine epsilon of zero.
    #[inline]
    fn div(self, other: f64) -> Self::Output {
        assert!(
            other.abs() >= f64::EPSILON,
            "division by zero: scalar divisor is zero"
        );

        Dual::new(self.real / other, self.dual / other)
    }
}

/// f64 / Dual
impl Div<Dual> for f64 {
    type Output = Dual;

    /// # Panics
    ///
    /// Panics if the divisor has a real part within one machine epsilon of
    /// zero.
    #[inline]
    fn div(self, other: Dual) -> Self::Output {
        assert!(
            other.real.abs() >= f64::EPSILON,
            "division by zero: dual divisor has a real part of zero"
        );

        Dual::new(
            self / other.real,
            (-self * other.dual) / (other.real * other.real),
        )
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

#[cfg(test)]
mod tests_dual {
    use super::*;

    #[test]
    fn test_init() {
        let x = Dual::variable(4.0);
        assert_eq!(x.real, 4.0);
        assert_eq!(x.dual, 1.0);

        let k = Dual::from(4.0);
        assert_eq!(k.real, 4.0);
        assert_eq!(k.dual, 0.0);
    }

    #[test]
    fn test_add() {
        assert_eq!(Dual::new(1.0, 2.0) + 3.0, Dual::new(4.0, 2.0));
        assert_eq!(3.0 + Dual::new(1.0, 2.0), Dual::new(4.0, 2.0));
        assert_eq!(
            Dual::new(1.0, 2.0) + Dual::new(3.0, 4.0),
            Dual::new(4.0, 6.0)
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(Dual::new(1.0, 2.0) - 3.0, Dual::new(-2.0, 2.0));
        assert_eq!(3.0 - Dual::new(1.0, 2.0), Dual::new(2.0, -2.0));
        assert_eq!(
            Dual::new(1.0, 2.0) - Dual::new(3.0, 7.0),
            Dual::new(-2.0, -5.0)
        );
    }

    #[test]
    fn test_neg() {
        let x = Dual::new(1.0, 2.0);
        assert_eq!(-x, Dual::new(-1.0, -2.0));
        assert_eq!(-(-x), x);
    }

    #[test]
    fn test_mul() {
        assert_eq!(Dual::new(1.0, 2.0) * 3.0, Dual::new(3.0, 6.0));
        assert_eq!(3.0 * Dual::new(1.0, 2.0), Dual::new(3.0, 6.0));
        // (a + bε)(c + dε) = ac + (ad + bc)ε
        assert_eq!(
            Dual::new(1.0, 2.0) * Dual::new(1.0, 2.0),
            Dual::new(1.0, 4.0)
        );
    }

    #[test]
    fn test_ring_identities() {
        let (a, b, c, d) = (1.5, -2.0, 0.5, 4.0);
        assert_eq!(
            Dual::new(a, b) + Dual::new(c, d),
            Dual::new(a + c, b + d)
        );
        assert_eq!(
            Dual::new(a, b) * Dual::new(c, d),
            Dual::new(a * c, a * d + b * c)
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(Dual::new(6.0, 9.0) / 3.0, Dual::new(2.0, 3.0));
        assert_eq!(
            Dual::new(6.0, 9.0) / Dual::new(3.0, 0.0),
            Dual::new(2.0, 3.0)
        );
        assert_eq!(3.0 / Dual::new(6.0, 9.0), Dual::new(0.5, -0.75));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_zero_scalar() {
        let _ = Dual::new(6.0, 9.0) / 0.0;
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_zero_dual() {
        let _ = Dual::new(6.0, 9.0) / Dual::new(0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rdiv_zero_dual() {
        let _ = 3.0 / Dual::new(0.0, 1.0);
    }

    #[test]
    fn test_eq() {
        assert!(Dual::new(3.0, 0.0) == 3.0);
        assert!(3.0 == Dual::new(3.0, 0.0));
        assert!(Dual::new(3.0, 1.0) != 3.0);
        assert!(Dual::new(5.0, 4.0) != Dual::new(3.0, 0.0));
    }

    #[test]
    fn test_ordering_is_partial() {
        let x = Dual::new(0.0, 0.0);
        let y = Dual::new(3.0, 1.0);
        assert!(x < y);
        assert!(x <= y);
        assert!(y > x);
        assert!(y >= x);

        // Components disagree: neither relation holds.
        let z = Dual::new(3.0, -1.0);
        assert!(!(x < z));
        assert!(!(x > z));
        assert_eq!(x.partial_cmp(&z), None);
    }

    #[test]
    fn test_display() {
        let x = Dual::new(4.0, 3.0);
        assert_eq!(x.to_string(), "Dual Number (real=4, dual=3)");
    }
}
