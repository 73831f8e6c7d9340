use crate::{MultiDimFunction, MultiDimGradient, OneDimFunction, OneDimGradient, contract};

/// A multi-dimensional function that can also compute its gradient.
///
/// This is the composite capability minimizers hold when they consume
/// derivatives: value evaluation from [`MultiDimFunction`] and derivative
/// evaluation from [`MultiDimGradient`], joined by supertraits instead of
/// shared base state. Opting in is an explicit impl, usually empty:
///
/// ```
/// use downhill_core::{MultiDimFunction, MultiDimGradient, MultiDimGradientFunction};
///
/// #[derive(Clone)]
/// struct Paraboloid;
///
/// impl MultiDimFunction for Paraboloid {
///     fn dim(&self) -> usize {
///         2
///     }
///
///     fn eval(&self, x: &[f64]) -> f64 {
///         x[0] * x[0] + x[1] * x[1]
///     }
/// }
///
/// impl MultiDimGradient for Paraboloid {
///     fn partial(&self, x: &[f64], icoord: usize) -> f64 {
///         2.0 * x[icoord]
///     }
/// }
///
/// impl MultiDimGradientFunction for Paraboloid {}
///
/// let f = Paraboloid;
/// let mut grad = [0.0; 2];
/// let value = f.value_and_gradient(&[3.0, 4.0], &mut grad);
/// assert_eq!(value, 25.0);
/// assert_eq!(grad, [6.0, 8.0]);
/// ```
///
/// Both [`gradient`](MultiDimGradient::gradient) and
/// [`value_and_gradient`](MultiDimGradientFunction::value_and_gradient)
/// have defaults built from the per-coordinate primitive, and either may
/// be overridden on its own when a concrete function can do better.
pub trait MultiDimGradientFunction: MultiDimFunction + MultiDimGradient {
    /// Evaluates the function and its full gradient together.
    ///
    /// Returns the function value and fills `grad`, which the caller must
    /// pre-size to the function dimension. The default computes the value
    /// and the gradient separately; override it when the two share
    /// sub-expressions, keeping the result semantically identical to the
    /// separate calls.
    fn value_and_gradient(&self, x: &[f64], grad: &mut [f64]) -> f64 {
        contract::check_dim(self.dim(), grad.len());
        let value = self.value(x);
        self.gradient(x, grad);
        value
    }
}

dyn_clone::clone_trait_object!(MultiDimGradientFunction);

/// A one-dimensional function that can also compute its derivative.
///
/// Composes [`OneDimFunction`] and [`OneDimGradient`]. The combined
/// evaluation default calls value and derivative separately; override it
/// when both share work. The `_multi` adapter forwards through the scalar
/// combined call, so an override flows through the multi-dimensional
/// convention as well.
pub trait OneDimGradientFunction: OneDimFunction + OneDimGradient {
    /// Evaluates the function and its derivative together.
    ///
    /// Returns `(value, derivative)`.
    fn value_and_derivative(&self, x: f64) -> (f64, f64) {
        (self.value(x), self.derivative(x))
    }

    /// Combined evaluation through the multi-dimensional calling
    /// convention.
    ///
    /// `x` and `grad` must be length-1 slices; the derivative lands in
    /// `grad[0]`. Debug builds assert the lengths.
    fn value_and_gradient_multi(&self, x: &[f64], grad: &mut [f64]) -> f64 {
        contract::check_dim(1, x.len());
        contract::check_dim(1, grad.len());
        let (value, derivative) = self.value_and_derivative(x[0]);
        grad[0] = derivative;
        value
    }
}

dyn_clone::clone_trait_object!(OneDimGradientFunction);
