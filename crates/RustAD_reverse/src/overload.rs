// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The elemental library of reverse mode: overloaded operators and
//! primitive functions on [`Variable`].
//!
//! Every operation pushes a fresh vertex whose local partials are
//! evaluated at the operands' primal values at construction time. A bare
//! `f64` operand occupies the unused parent slot with a zero partial.

use crate::{variable::Variable, vertex::Arity};
use std::iter::{Product, Sum};
use std::ops::Neg;
use std::ops::{Add, AddAssign};
use std::ops::{Div, DivAssign};
use std::ops::{Mul, MulAssign};
use std::ops::{Sub, SubAssign};
use RustAD_error::{Result, RustADError};

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard addition operator (`+`).
/// d/dx x + y = 1
/// d/dy x + y = 1

/// AddAssign: Variable<'v> += Variable<'v>
impl<'v> AddAssign<Variable<'v>> for Variable<'v> {
    #[inline]
    fn add_assign(&mut self, other: Variable<'v>) {
        assert!(std::ptr::eq(self.graph, other.graph));

        *self = *self + other;
    }
}

/// AddAssign: Variable<'v> += f64
impl AddAssign<f64> for Variable<'_> {
    #[inline]
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

/// Variable<'v> + Variable<'v>
impl<'v> Add<Variable<'v>> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(5.0);
    /// let y = g.var(2.0);
    /// let z = x + y;
    ///
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 7.0);
    /// assert_eq!(grad.wrt(&x), 1.0);
    /// assert_eq!(grad.wrt(&y), 1.0);
    /// ```
    #[inline]
    fn add(self, other: Variable<'v>) -> Self::Output {
        assert!(std::ptr::eq(self.graph, other.graph));

        Variable {
            graph: self.graph,
            value: self.value + other.value,
            index: self
                .graph
                .push(Arity::Binary, &[self.index, other.index], &[1.0, 1.0]),
        }
    }
}

/// Variable<'v> + f64
impl<'v> Add<f64> for Variable<'v> {
    type Output = Variable<'v>;

    #[inline]
    fn add(self, other: f64) -> Self::Output {
        Variable {
            graph: self.graph,
            value: self.value + other,
            index: self
                .graph
                .push(Arity::Binary, &[self.index, self.index], &[1.0, 0.0]),
        }
    }
}

/// f64 + Variable<'v>
impl<'v> Add<Variable<'v>> for f64 {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let a = 5.0;
    /// let x = g.var(2.0);
    /// let z = a + x;
    ///
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 7.0);
    /// assert_eq!(grad.wrt(&x), 1.0);
    /// ```
    #[inline]
    fn add(self, other: Variable<'v>) -> Self::Output {
        other + self
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard subtraction operator (`-`).
/// d/dx x - y = 1
/// d/dy x - y = -1

/// `SubAssign`: Variable<'v> -= Variable<'v>
impl<'v> SubAssign<Variable<'v>> for Variable<'v> {
    #[inline]
    fn sub_assign(&mut self, other: Variable<'v>) {
        assert!(std::ptr::eq(self.graph, other.graph));

        *self = *self - other;
    }
}

/// `SubAssign`: Variable<'v> -= f64
impl SubAssign<f64> for Variable<'_> {
    #[inline]
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

/// Variable<'v> - Variable<'v>
impl<'v> Sub<Variable<'v>> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(5.0);
    /// let y = g.var(2.0);
    /// let z = x - y;
    ///
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 3.0);
    /// assert_eq!(grad.wrt(&x), 1.0);
    /// assert_eq!(grad.wrt(&y), -1.0);
    /// ```
    #[inline]
    fn sub(self, other: Variable<'v>) -> Self::Output {
        assert!(std::ptr::eq(self.graph, other.graph));

        Variable {
            graph: self.graph,
            value: self.value - other.value,
            index: self
                .graph
                .push(Arity::Binary, &[self.index, other.index], &[1.0, -1.0]),
        }
    }
}

/// Variable<'v> - f64
impl<'v> Sub<f64> for Variable<'v> {
    type Output = Variable<'v>;

    #[inline]
    fn sub(self, other: f64) -> Self::Output {
        Variable {
            graph: self.graph,
            value: self.value - other,
            index: self
                .graph
                .push(Arity::Binary, &[self.index, self.index], &[1.0, 0.0]),
        }
    }
}

/// f64 - Variable<'v>
impl<'v> Sub<Variable<'v>> for f64 {
    type Output = Variable<'v>;

    #[inline]
    fn sub(self, other: Variable<'v>) -> Self::Output {
        Variable {
            graph: other.graph,
            value: self - other.value,
            index: other
                .graph
                .push(Arity::Binary, &[other.index, other.index], &[0.0, -1.0]),
        }
    }
}

/// Negation: -x = -1 * x
impl<'v> Neg for Variable<'v> {
    type Output = Variable<'v>;

    #[inline]
    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard multiplication operator (`*`).
/// d/dx x * y = y
/// d/dy x * y = x

/// MulAssign: Variable<'v> *= Variable<'v>
impl<'v> MulAssign<Variable<'v>> for Variable<'v> {
    #[inline]
    fn mul_assign(&mut self, other: Variable<'v>) {
        assert!(std::ptr::eq(self.graph, other.graph));

        *self = *self * other;
    }
}

/// MulAssign: Variable<'v> *= f64
impl MulAssign<f64> for Variable<'_> {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

/// Variable<'v> * Variable<'v>
impl<'v> Mul<Variable<'v>> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(5.0);
    /// let y = g.var(2.0);
    /// let z = x * y;
    ///
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 10.0);
    /// assert_eq!(grad.wrt(&x), 2.0);
    /// assert_eq!(grad.wrt(&y), 5.0);
    /// ```
    #[inline]
    fn mul(self, other: Variable<'v>) -> Self::Output {
        assert!(std::ptr::eq(self.graph, other.graph));

        Variable {
            graph: self.graph,
            value: self.value * other.value,
            index: self.graph.push(
                Arity::Binary,
                &[self.index, other.index],
                &[other.value, self.value],
            ),
        }
    }
}

/// Variable<'v> * f64
impl<'v> Mul<f64> for Variable<'v> {
    type Output = Variable<'v>;

    #[inline]
    fn mul(self, other: f64) -> Self::Output {
        Variable {
            graph: self.graph,
            value: self.value * other,
            index: self
                .graph
                .push(Arity::Binary, &[self.index, self.index], &[other, 0.0]),
        }
    }
}

/// f64 * Variable<'v>
impl<'v> Mul<Variable<'v>> for f64 {
    type Output = Variable<'v>;

    #[inline]
    fn mul(self, other: Variable<'v>) -> Self::Output {
        other * self
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Overload the standard division operator (`/`).
/// d/dx x/y = 1/y
/// d/dy x/y = -x/y^2
///
/// As with integer division in `std`, dividing by a zero-primal divisor
/// panics; the named fallible primitives return `Result` instead.

/// `DivAssign`: Variable<'v> /= Variable<'v>
impl<'v> DivAssign<Variable<'v>> for Variable<'v> {
    #[inline]
    fn div_assign(&mut self, other: Variable<'v>) {
        assert!(std::ptr::eq(self.graph, other.graph));

        *self = *self / other;
    }
}

/// `DivAssign`: Variable<'v> /= f64
impl DivAssign<f64> for Variable<'_> {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

/// Variable<'v> / Variable<'v>
impl<'v> Div<Variable<'v>> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(5.0);
    /// let y = g.var(2.0);
    /// let z = x / y;
    ///
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 5.0 / 2.0);
    /// assert_eq!(grad.wrt(&x), 1.0 / 2.0);
    /// assert_eq!(grad.wrt(&y), -5.0 / (2.0 * 2.0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the divisor has a value of zero.
    #[inline]
    fn div(self, other: Variable<'v>) -> Self::Output {
        assert!(std::ptr::eq(self.graph, other.graph));
        assert!(
            other.value != 0.0,
            "division by zero: divisor variable has a value of zero"
        );

        Variable {
            graph: self.graph,
            value: self.value / other.value,
            index: self.graph.push(
                Arity::Binary,
                &[self.index, other.index],
                &[
                    other.value.recip(),
                    -self.value / (other.value * other.value),
                ],
            ),
        }
    }
}

/// Variable<'v> / f64
impl<'v> Div<f64> for Variable<'v> {
    type Output = Variable<'v>;

    /// # Panics
    ///
    /// Panics if the scalar divisor is within one machine epsilon of zero.
    #[inline]
    fn div(self, other: f64) -> Self::Output {
        assert!(
            other.abs() >= f64::EPSILON,
            "division by zero: scalar divisor is zero"
        );

        Variable {
            graph: self.graph,
            value: self.value / other,
            index: self.graph.push(
                Arity::Binary,
                &[self.index, self.index],
                &[other.recip(), 0.0],
            ),
        }
    }
}

/// f64 / Variable<'v>
impl<'v> Div<Variable<'v>> for f64 {
    type Output = Variable<'v>;

    /// # Panics
    ///
    /// Panics if the divisor has a value within one machine epsilon of
    /// zero.
    #[inline]
    fn div(self, other: Variable<'v>) -> Self::Output {
        assert!(
            other.value.abs() >= f64::EPSILON,
            "division by zero: divisor variable has a value of zero"
        );

        Variable {
            graph: other.graph,
            value: self / other.value,
            index: other.graph.push(
                Arity::Binary,
                &[other.index, other.index],
                &[0.0, -self / (other.value * other.value)],
            ),
        }
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: ITERATORS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl<'v> Sum<Variable<'v>> for Variable<'v> {
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let params = (0..100).map(|x| g.var(f64::from(x))).collect::<Vec<_>>();
    ///
    /// let sum = params.iter().copied().sum::<Variable>();
    ///
    /// let derivs = sum.accumulate();
    ///
    /// for i in derivs.wrt(&params) {
    ///     assert_eq!(i, 1.0);
    /// }
    /// ```
    #[inline]
    fn sum<I: Iterator<Item = Variable<'v>>>(iter: I) -> Self {
        iter.reduce(|x, y| x + y)
            .expect("Cannot call sum() since vector is empty. Exiting ...")
    }
}

impl<'v> Product<Variable<'v>> for Variable<'v> {
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let params = (1..=5).map(|x| g.var(f64::from(x))).collect::<Vec<_>>();
    ///
    /// let prod = params.iter().copied().product::<Variable>();
    ///
    /// let derivs = prod.accumulate();
    ///
    /// assert_eq!(derivs.wrt(&params), vec![120.0, 60.0, 40.0, 30.0, 24.0]);
    /// ```
    #[inline]
    fn product<I: Iterator<Item = Variable<'v>>>(iter: I) -> Self {
        iter.reduce(|x, y| x * y)
            .expect("Cannot call product() since vector is empty. Exiting ...")
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: PRIMITIVE FUNCTIONS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl<'v> Variable<'v> {
    /// Sine function.
    /// d/dx sin(x) = cos(x)
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(1.0);
    /// let z = x.sin();
    /// let grad = z.accumulate();
    ///
    /// assert!((z.value - 0.841_470_984_807_896_5).abs() <= 1e-10);
    /// assert!((grad.wrt(&x) - 0.540_302_305_868_139_8).abs() <= 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn sin(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.sin(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.cos()]),
        }
    }

    /// Cosine function.
    /// d/dx cos(x) = -sin(x)
    #[must_use]
    #[inline]
    pub fn cos(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.cos(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.sin().neg()]),
        }
    }

    /// Tangent function.
    /// d/dx tan(x) = 1 / cos^2(x) = sec^2(x)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the cosine of the value is within one
    /// machine epsilon of zero.
    #[inline]
    pub fn tan(self) -> Result<Self> {
        if self.value.cos().abs() < f64::EPSILON {
            return Err(RustADError::domain("tangent at a zero of cosine"));
        }

        Ok(Variable {
            graph: self.graph,
            value: self.value.tan(),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[(self.value.cos() * self.value.cos()).recip()],
            ),
        })
    }

    /// Exponential function (base *e*).
    /// d/dx exp(x) = exp(x)
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(1.0);
    /// let z = x.exp();
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, std::f64::consts::E);
    /// assert_eq!(grad.wrt(&x), std::f64::consts::E);
    /// ```
    #[must_use]
    #[inline]
    pub fn exp(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.exp(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.exp()]),
        }
    }

    /// Logarithm (natural) of `x`.
    /// d/dx ln(x) = 1 / x
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(std::f64::consts::E);
    /// let z = x.ln().unwrap();
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 1.0);
    /// assert_eq!(grad.wrt(&x), 0.367_879_441_171_442_33);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a domain error for a non-positive value.
    #[inline]
    pub fn ln(self) -> Result<Self> {
        if self.value <= 0.0 {
            return Err(RustADError::domain(
                "cannot compute the logarithm of zero or a negative number",
            ));
        }

        Ok(Variable {
            graph: self.graph,
            value: self.value.ln(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.recip()]),
        })
    }

    /// Inverse sine function.
    /// d/dx sin^-1(x) = 1 / sqrt(1 - x^2)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the value lies outside $[-1, 1]$.
    #[inline]
    pub fn asin(self) -> Result<Self> {
        if !(-1.0..=1.0).contains(&self.value) {
            return Err(RustADError::domain("asin argument must lie in [-1, 1]"));
        }

        Ok(Variable {
            graph: self.graph,
            value: self.value.asin(),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[(1.0 - self.value * self.value).sqrt().recip()],
            ),
        })
    }

    /// Inverse cosine function.
    /// d/dx cos^-1(x) = -1 / sqrt(1 - x^2)
    ///
    /// # Errors
    ///
    /// Returns a domain error if the value lies outside $[-1, 1]$.
    #[inline]
    pub fn acos(self) -> Result<Self> {
        if !(-1.0..=1.0).contains(&self.value) {
            return Err(RustADError::domain("acos argument must lie in [-1, 1]"));
        }

        Ok(Variable {
            graph: self.graph,
            value: self.value.acos(),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[(1.0 - self.value * self.value).sqrt().recip().neg()],
            ),
        })
    }

    /// Inverse tangent function.
    /// d/dx tan^-1(x) = 1 / (1 + x^2)
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(0.0);
    /// let z = x.atan();
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 0.0);
    /// assert_eq!(grad.wrt(&x), 1.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn atan(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.atan(),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[(self.value * self.value + 1.0).recip()],
            ),
        }
    }

    /// Hyperbolic sine function.
    /// d/dx sinh(x) = cosh(x)
    #[must_use]
    #[inline]
    pub fn sinh(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.sinh(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.cosh()]),
        }
    }

    /// Hyperbolic cosine function.
    /// d/dx cosh(x) = sinh(x)
    #[must_use]
    #[inline]
    pub fn cosh(self) -> Self {
        Variable {
            graph: self.graph,
            value: self.value.cosh(),
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[self.value.sinh()]),
        }
    }

    /// Hyperbolic tangent function.
    /// d/dx tanh(x) = 1 - tanh^2(x)
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(1.0);
    /// let z = x.tanh();
    /// let grad = z.accumulate();
    ///
    /// assert!((z.value - 0.761_594_155_955_764_9).abs() <= 1e-10);
    /// assert!((grad.wrt(&x) - 0.419_974_341_614_026_14).abs() <= 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.value.tanh();
        Variable {
            graph: self.graph,
            value: t,
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[1.0 - t * t]),
        }
    }

    /// Standard logistic (sigmoid) function.
    /// d/dx σ(x) = σ(x)(1 - σ(x))
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(0.05);
    /// let z = x.sigmoid();
    /// let grad = z.accumulate();
    ///
    /// assert!((z.value - 0.512_497_396_484_210_3).abs() <= 1e-10);
    /// assert!((grad.wrt(&x) - 0.249_843_815_081_116_44).abs() <= 1e-10);
    /// ```
    #[must_use]
    #[inline]
    pub fn sigmoid(self) -> Self {
        let sigma = ((-self.value).exp() + 1.0).recip();
        Variable {
            graph: self.graph,
            value: sigma,
            index: self
                .graph
                .push(Arity::Unary, &[self.index], &[sigma * (1.0 - sigma)]),
        }
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

// log_{f64}(Variable<'v>)
// f(x) = ln(x) / ln(b)
// df/dx = 1 / (x ln(b))
impl<'v> Log<f64> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(2.0);
    /// let z = x.log(5.0).unwrap();
    /// let grad = z.accumulate();
    ///
    /// assert!((z.value - 0.430_676_558_073_393_06).abs() <= 1e-10);
    /// assert!((grad.wrt(&x) - 0.310_667_467_279_805_93).abs() <= 1e-10);
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
        if self.value <= 0.0 {
            return Err(RustADError::domain(
                "cannot compute the logarithm of zero or a negative number",
            ));
        }

        Ok(Variable {
            graph: self.graph,
            value: self.value.ln() / base.ln(),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[(self.value * base.ln()).recip()],
            ),
        })
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// OVERLOADING: POWER FUNCTION TRAITS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Overload the `Powf` trait.
///
/// Only the partial with respect to the base is recorded: a `Variable`
/// exponent contributes no adjoint, so differentiating *through* an
/// exponent requires the `f64`-base form.
pub trait Powf<T> {
    /// Return type of `Powf`
    type Output;

    /// Overloaded `powf` function.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the derivative has no finite value
    /// (non-positive constant base).
    fn powf(&self, other: T) -> Result<Self::Output>;
}

// Variable<'v> ^ Variable<'v>
// d/dx x^y = y x^(y-1)
impl<'v> Powf<Variable<'v>> for Variable<'v> {
    type Output = Variable<'v>;

    #[inline]
    fn powf(&self, other: Variable<'v>) -> Result<Self::Output> {
        assert!(std::ptr::eq(self.graph, other.graph));

        Ok(Variable {
            graph: self.graph,
            value: f64::powf(self.value, other.value),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[other.value * f64::powf(self.value, other.value - 1.0)],
            ),
        })
    }
}

// Variable<'v> ^ f64
// d/dx x^n = n x^(n-1)
impl<'v> Powf<f64> for Variable<'v> {
    type Output = Variable<'v>;

    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(5.0);
    /// let z = x.powf(3.0).unwrap();
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 125.0);
    /// assert_eq!(grad.wrt(&x), 75.0);
    /// ```
    #[inline]
    fn powf(&self, n: f64) -> Result<Self::Output> {
        Ok(Variable {
            graph: self.graph,
            value: f64::powf(self.value, n),
            index: self.graph.push(
                Arity::Unary,
                &[self.index],
                &[n * f64::powf(self.value, n - 1.0)],
            ),
        })
    }
}

// f64 ^ Variable<'v>
// d/dx k^x = k^x ln(k), requiring k > 0
impl<'v> Powf<Variable<'v>> for f64 {
    type Output = Variable<'v>;

    /// The inherent `f64::powf` shadows method syntax on a float
    /// receiver, so this form is called as `Powf::powf(&base, x)`.
    ///
    /// ```
    /// # use RustAD_reverse::*;
    ///
    /// let g = Graph::new();
    ///
    /// let x = g.var(2.0);
    /// let z = Powf::powf(&3.0, x).unwrap();
    /// let grad = z.accumulate();
    ///
    /// assert_eq!(z.value, 9.0);
    /// assert!((grad.wrt(&x) - 9.0 * 3_f64.ln()).abs() <= 1e-10);
    /// ```
    #[inline]
    fn powf(&self, other: Variable<'v>) -> Result<Self::Output> {
        if *self < f64::EPSILON {
            return Err(RustADError::domain(
                "power base must be positive: the derivative takes ln of the base",
            ));
        }

        let value = f64::powf(*self, other.value);
        Ok(Variable {
            graph: other.graph,
            value,
            index: other
                .graph
                .push(Arity::Unary, &[other.index], &[value * self.ln()]),
        })
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
