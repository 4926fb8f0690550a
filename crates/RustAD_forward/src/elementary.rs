// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The forward elementary library.
//!
//! Each primitive $\varphi$ lifted to a dual input $(r, d)$ returns
//! $(\varphi(r), \varphi'(r) \cdot d)$. For a bare `f64` the corresponding
//! `std` method *is* the primitive (exact pass-through), so mixed
//! dual/real expressions need no wrappers.
//!
//! Primitives with a restricted domain (`tan`, `ln`, `log`, `asin`,
//! `acos`, the powers) are fallible and return a [`Result`]; the rest are
//! total.

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// IMPORTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use crate::dual::Dual;
use RustAD_error::{Result, RustADError};

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ELEMENTARY PRIMITIVES
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl Dual {
    /// Sine function.
    /// d/dx sin(x) = cos(x)
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 3.0);
    /// let z = x.sin();
    ///
    /// assert!((z.real - 0.909_297_426_825_681_7).abs() < 1e-10);
    /// assert!((z.dual - -1.248_440_509_641_427_3).abs() < 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn sin(self) -> Self {
        Dual::new(self.real.sin(), self.real.cos() * self.dual)
    }

    /// Cosine function.
    /// d/dx cos(x) = -sin(x)
    #[must_use]
    #[inline]
    pub fn cos(self) -> Self {
        Dual::new(self.real.cos(), -self.real.sin() * self.dual)
    }

    /// Tangent function.
    /// d/dx tan(x) = sec^2(x)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the cosine of the primal is within one
    /// machine epsilon of zero.
    #[inline]
    pub fn tan(self) -> Result<Self> {
        if self.real.cos().abs() < f64::EPSILON {
            return Err(RustADError::domain("tangent at a zero of cosine"));
        }

        Ok(Dual::new(
            self.real.tan(),
            (self.real.cos() * self.real.cos()).recip() * self.dual,
        ))
    }

    /// Exponential function (base *e*).
    /// d/dx exp(x) = exp(x)
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 3.0);
    /// let z = x.exp();
    ///
    /// assert!((z.real - 7.389_056_098_930_65).abs() < 1e-10);
    /// assert!((z.dual - 22.167_168_296_791_95).abs() < 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn exp(self) -> Self {
        Dual::new(self.real.exp(), self.dual * self.real.exp())
    }

    /// Logarithm (natural) of `x`.
    /// d/dx ln(x) = 1 / x
    ///
    /// # Errors
    ///
    /// Returns a domain error for a non-positive primal.
    #[inline]
    pub fn ln(self) -> Result<Self> {
        if self.real <= 0.0 {
            return Err(RustADError::domain(
                "cannot compute the logarithm of zero or a negative number",
            ));
        }

        Ok(Dual::new(self.real.ln(), self.dual / self.real))
    }

    /// Inverse sine function.
    /// d/dx asin(x) = 1 / sqrt(1 - x^2)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the primal lies outside $[-1, 1]$.
    #[inline]
    pub fn asin(self) -> Result<Self> {
        if !(-1.0..=1.0).contains(&self.real) {
            return Err(RustADError::domain("asin argument must lie in [-1, 1]"));
        }

        Ok(Dual::new(
            self.real.asin(),
            self.dual / (1.0 - self.real * self.real).sqrt(),
        ))
    }

    /// Inverse cosine function.
    /// d/dx acos(x) = -1 / sqrt(1 - x^2)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the primal lies outside $[-1, 1]$.
    #[inline]
    pub fn acos(self) -> Result<Self> {
        if !(-1.0..=1.0).contains(&self.real) {
            return Err(RustADError::domain("acos argument must lie in [-1, 1]"));
        }

        Ok(Dual::new(
            self.real.acos(),
            -self.dual / (1.0 - self.real * self.real).sqrt(),
        ))
    }

    /// Inverse tangent function.
    /// d/dx atan(x) = 1 / (1 + x^2)
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 3.0);
    /// let z = x.atan();
    ///
    /// assert!((z.real - 1.107_148_717_794_090_6).abs() < 1e-10);
    /// assert!((z.dual - 0.6).abs() < 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn atan(self) -> Self {
        Dual::new(
            self.real.atan(),
            self.dual / (self.real * self.real + 1.0),
        )
    }

    /// Hyperbolic sine function.
    /// d/dx sinh(x) = cosh(x)
    #[must_use]
    #[inline]
    pub fn sinh(self) -> Self {
        Dual::new(self.real.sinh(), self.real.cosh() * self.dual)
    }

    /// Hyperbolic cosine function.
    /// d/dx cosh(x) = sinh(x)
    #[must_use]
    #[inline]
    pub fn cosh(self) -> Self {
        Dual::new(self.real.cosh(), self.real.sinh() * self.dual)
    }

    /// Hyperbolic tangent function.
    /// d/dx tanh(x) = 1 - tanh^2(x)
    #[must_use]
    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.real.tanh();
        Dual::new(t, (1.0 - t * t) * self.dual)
    }

    /// Standard logistic (sigmoid) function.
    /// d/dx σ(x) = σ(x)(1 - σ(x))
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 3.0);
    /// let z = x.sigmoid();
    ///
    /// assert!((z.real - 0.880_797_077_977_882_3).abs() < 1e-10);
    /// assert!((z.dual - 0.314_980_756_210_519_5).abs() < 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn sigmoid(self) -> Self {
        let sigma = ((-self.real).exp() + 1.0).recip();
        Dual::new(sigma, sigma * (1.0 - sigma) * self.dual)
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: LOGARITHM
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Overload the `Log` trait.
pub trait Log<T> {
    /// Return type of `Log`
    type Output;

    /// Overloaded `log` function.
    ///
    /// # Errors
    ///
    /// Returns a domain error for a non-positive base or argument.
    fn log(&self, base: T) -> Result<Self::Output>;
}

// log_{f64}(Dual)
// f(x) = ln(x) / ln(b)
// df/dx = 1 / (x ln(b))
impl Log<f64> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 3.0);
    /// let z = x.log(10.0).unwrap();
    ///
    /// assert!((z.real - 0.301_029_995_663_981_14).abs() < 1e-10);
    /// assert!((z.dual - 0.651_441_722_854_877_7).abs() < 1e-10);
    /// ```
    #[inline]
    fn log(&self, base: f64) -> Result<Self::Output> {
        if base <= 0.0 {
            return Err(RustADError::domain(
                "cannot compute a logarithm with a non-positive base",
            ));
        }
        if base.ln().abs() < f64::EPSILON {
            return Err(RustADError::divide_by_zero("logarithm with base one"));
        }

        let ln = self.ln()?;
        Ok(ln / base.ln())
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: POWER FUNCTION TRAITS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Overload the `Powf` trait.
pub trait Powf<T> {
    /// Return type of `Powf`
    type Output;

    /// Overloaded `powf` function.
    ///
    /// # Errors
    ///
    /// Returns a domain or divide-by-zero error for the zero-base edge
    /// cases that have no finite derivative.
    fn powf(&self, other: T) -> Result<Self::Output>;
}

// Dual ^ Dual
// (a + bε)^(c + dε) = a^c + a^(c-1) (a d ln(a) + c b) ε
impl Powf<Dual> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(2.0, 1.0);
    /// let z = x.powf(Dual::new(3.0, 0.0)).unwrap();
    ///
    /// assert!((z.real - 8.0).abs() < 1e-10);
    /// assert!((z.dual - 12.0).abs() < 1e-10);
    ///
    /// // 0^(c + dε) collapses to zero when the tangent rules allow it.
    /// let zero = Dual::new(0.0, 0.0);
    /// assert_eq!(zero.powf(Dual::new(0.5, 3.0)).unwrap(), Dual::new(0.0, 0.0));
    /// assert!(zero.powf(Dual::new(-0.5, 0.0)).is_err());
    /// ```
    #[inline]
    fn powf(&self, other: Dual) -> Result<Self::Output> {
        if self.real.abs() < f64::EPSILON {
            if (self.dual == 0.0 && other.real > 0.0)
                || (self.dual != 0.0 && other.real > 1.0)
            {
                return Ok(Dual::new(0.0, 0.0));
            }
            return Err(RustADError::domain(
                "zero base: the derivative divides by zero or takes ln(0)",
            ));
        }

        let value = f64::powf(self.real, other.real);
        let tangent = f64::powf(self.real, other.real - 1.0)
            * (self.real * other.dual * self.real.ln() + other.real * self.dual);

        Ok(Dual::new(value, tangent))
    }
}

// Dual ^ f64
// d/dx x^n = n x^(n-1)
impl Powf<f64> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    ///
    /// assert_eq!(x.powf(3.0).unwrap(), Dual::new(1.0, 6.0));
    /// ```
    #[inline]
    fn powf(&self, n: f64) -> Result<Self::Output> {
        if self.real.abs() < f64::EPSILON && n < 1.0 {
            return Err(RustADError::divide_by_zero(
                "zero base with an exponent below one divides by zero",
            ));
        }

        Ok(Dual::new(
            f64::powf(self.real, n),
            n * self.dual * f64::powf(self.real, n - 1.0),
        ))
    }
}

// f64 ^ Dual
// d/dx k^x = k^x ln(k)
impl Powf<Dual> for f64 {
    type Output = Dual;

    /// The inherent `f64::powf` shadows method syntax on a float
    /// receiver, so this form is called as `Powf::powf(&base, x)`.
    ///
    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(1.0, 2.0);
    /// let z = Powf::powf(&3.0, x).unwrap();
    ///
    /// assert!((z.real - 3.0).abs() < 1e-10);
    /// assert!((z.dual - 2.0 * 3.0 * 3_f64.ln()).abs() < 1e-10);
    /// ```
    #[inline]
    fn powf(&self, other: Dual) -> Result<Self::Output> {
        if self.abs() < f64::EPSILON {
            if other.real > 0.0 {
                return Ok(Dual::new(0.0, 0.0));
            }
            return Err(RustADError::domain(
                "zero base: the derivative divides by zero or takes ln(0)",
            ));
        }

        let value = f64::powf(*self, other.real);
        Ok(Dual::new(value, other.dual * self.ln() * value))
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: FLOOR DIVISION
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Overload the `FloorDiv` trait: both components are the floored
/// true-division components, with the same domain rules as `/`.
pub trait FloorDiv<T> {
    /// Return type of `FloorDiv`
    type Output;

    /// Overloaded `floor_div` function.
    ///
    /// # Errors
    ///
    /// Returns a divide-by-zero error for a zero-primal divisor.
    fn floor_div(&self, other: T) -> Result<Self::Output>;
}

// Dual // Dual
impl FloorDiv<Dual> for Dual {
    type Output = Dual;

    #[inline]
    fn floor_div(&self, other: Dual) -> Result<Self::Output> {
        if other.real == 0.0 {
            return Err(RustADError::divide_by_zero(
                "dual divisor has a real part of zero",
            ));
        }

        Ok(Dual::new(
            (self.real / other.real).floor(),
            ((self.dual * other.real - self.real * other.dual)
                / (other.real * other.real))
                .floor(),
        ))
    }
}

// Dual // f64
impl FloorDiv<f64> for Dual {
    type Output = Dual;

    /// ```
    /// # use RustAD_forward::*;
    ///
    /// let x = Dual::new(6.1, 9.1);
    ///
    /// assert_eq!(x.floor_div(3.0).unwrap(), Dual::new(2.0, 3.0));
    /// ```
    #[inline]
    fn floor_div(&self, other: f64) -> Result<Self::Output> {
        if other.abs() < f64::EPSILON {
            return Err(RustADError::divide_by_zero("scalar divisor is zero"));
        }

        Ok(Dual::new(
            (self.real / other).floor(),
            (self.dual / other).floor(),
        ))
    }
}

// f64 // Dual
impl FloorDiv<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn floor_div(&self, other: Dual) -> Result<Self::Output> {
        if other.real.abs() < f64::EPSILON {
            return Err(RustADError::divide_by_zero(
                "dual divisor has a real part of zero",
            ));
        }

        Ok(Dual::new(
            (self / other.real).floor(),
            ((-self * other.dual) / (other.real * other.real)).floor(),
        ))
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

#[cfg(test)]
mod tests_elementary {
    use super::*;
    use RustAD_utils::{assert_approx_equal, RUSTAD_EPSILON as EPS};

    #[test]
    fn test_values() {
        let x = Dual::new(2.0, 3.0);

        assert_approx_equal!(x.sin().real, 0.909_297_426_825_681_7, EPS);
        assert_approx_equal!(x.cos().real, -0.416_146_836_547_142_4, EPS);
        assert_approx_equal!(x.tan().unwrap().real, -2.185_039_863_261_519, EPS);
        assert_approx_equal!(x.exp().real, 7.389_056_098_930_65, EPS);
        assert_approx_equal!(x.ln().unwrap().real, std::f64::consts::LN_2, EPS);
        assert_approx_equal!(x.atan().real, 1.107_148_717_794_090_6, EPS);
        assert_approx_equal!(x.sinh().real, 3.626_860_407_847_019, EPS);
        assert_approx_equal!(x.cosh().real, 3.762_195_691_083_631_4, EPS);
        assert_approx_equal!(x.tanh().real, 0.964_027_580_075_817, EPS);
        assert_approx_equal!(x.sigmoid().real, 0.880_797_077_977_882_3, EPS);
    }

    #[test]
    fn test_tangents() {
        let x = Dual::new(2.0, 3.0);

        assert_approx_equal!(x.sin().dual, 3.0 * 2_f64.cos(), EPS);
        assert_approx_equal!(x.cos().dual, -3.0 * 2_f64.sin(), EPS);
        assert_approx_equal!(
            x.tan().unwrap().dual,
            3.0 / (2_f64.cos() * 2_f64.cos()),
            EPS
        );
        assert_approx_equal!(x.exp().dual, 3.0 * 2_f64.exp(), EPS);
        assert_approx_equal!(x.ln().unwrap().dual, 1.5, EPS);
        assert_approx_equal!(x.atan().dual, 0.6, EPS);
        assert_approx_equal!(x.sinh().dual, 3.0 * 2_f64.cosh(), EPS);
        assert_approx_equal!(x.cosh().dual, 3.0 * 2_f64.sinh(), EPS);
        assert_approx_equal!(
            x.tanh().dual,
            3.0 * (1.0 - 2_f64.tanh() * 2_f64.tanh()),
            EPS
        );
    }

    #[test]
    fn test_inverse_trig() {
        let x = Dual::new(0.5, 1.0);

        assert_approx_equal!(x.asin().unwrap().real, 0.5_f64.asin(), EPS);
        assert_approx_equal!(x.asin().unwrap().dual, 1.0 / 0.75_f64.sqrt(), EPS);
        assert_approx_equal!(x.acos().unwrap().real, 0.5_f64.acos(), EPS);
        assert_approx_equal!(x.acos().unwrap().dual, -1.0 / 0.75_f64.sqrt(), EPS);
    }

    #[test]
    fn test_domain_guards() {
        assert!(Dual::new(0.0, 1.0).ln().is_err());
        assert!(Dual::new(-3.0, 1.0).ln().is_err());
        assert!(Dual::new(6.0, 1.0).asin().is_err());
        assert!(Dual::new(6.0, 1.0).acos().is_err());
        assert!(Dual::new(std::f64::consts::FRAC_PI_2, 1.0).tan().is_err());
        assert!(Dual::new(2.0, 3.0).log(-1.0).is_err());
        assert!(Dual::new(-2.0, 3.0).log(10.0).is_err());
    }

    #[test]
    fn test_log() {
        let x = Dual::new(2.0, 3.0);
        let z = x.log(10.0).unwrap();

        assert_approx_equal!(z.real, 2_f64.log10(), EPS);
        assert_approx_equal!(z.dual, 3.0 / (2.0 * 10_f64.ln()), EPS);
    }

    #[test]
    fn test_pow() {
        // x^3 at (1, 2)
        let x = Dual::new(1.0, 2.0);
        assert_eq!(x.powf(3.0).unwrap(), Dual::new(1.0, 6.0));

        // 3^x at (1, 2): d/dx 3^x = 3^x ln(3)
        let z = Powf::powf(&3.0, x).unwrap();
        assert_approx_equal!(z.real, 3.0, EPS);
        assert_approx_equal!(z.dual, 6.0 * 3_f64.ln(), EPS);

        // Dual exponent: (2 + ε)^(3 + ε) at seed 1
        let z = Dual::new(2.0, 1.0).powf(Dual::new(3.0, 1.0)).unwrap();
        assert_approx_equal!(z.real, 8.0, EPS);
        assert_approx_equal!(z.dual, 8.0 * 2_f64.ln() + 12.0, EPS);
    }

    #[test]
    fn test_pow_zero_base() {
        let zero = Dual::new(0.0, 0.0);

        // Admissible exponents collapse to (0, 0).
        assert_eq!(zero.powf(Dual::new(0.5, 3.0)).unwrap(), Dual::new(0.0, 0.0));
        assert_eq!(zero.powf(2.0).unwrap(), Dual::new(0.0, 0.0));
        assert_eq!(
            Powf::powf(&0.0, Dual::new(2.0, 1.0)).unwrap(),
            Dual::new(0.0, 0.0)
        );

        // The rest have no finite derivative.
        assert!(zero.powf(Dual::new(-0.5, 0.0)).is_err());
        assert!(zero.powf(0.5).is_err());
        assert!(Powf::powf(&0.0, Dual::new(-1.0, 1.0)).is_err());
    }

    #[test]
    fn test_floor_div() {
        let x = Dual::new(6.1, 9.1);
        assert_eq!(x.floor_div(3.0).unwrap(), Dual::new(2.0, 3.0));

        let y = Dual::new(3.0, 0.0);
        assert_eq!(x.floor_div(y).unwrap(), Dual::new(2.0, 3.0));

        assert!(x.floor_div(0.0).is_err());
        assert!(x.floor_div(Dual::new(0.0, 1.0)).is_err());
        assert!(3.0.floor_div(Dual::new(0.0, 1.0)).is_err());
    }

    #[test]
    fn test_primal_pass_through() {
        // A constant dual tracks the underlying library bit for bit.
        let k = 0.731;
        assert_eq!(Dual::constant(k).sin().real, k.sin());
        assert_eq!(Dual::constant(k).exp().real, k.exp());
        assert_eq!(Dual::constant(k).ln().unwrap().real, k.ln());
        assert_eq!(Dual::constant(k).tanh().real, k.tanh());
    }
}
