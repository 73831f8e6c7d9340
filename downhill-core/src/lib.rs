//! Function-evaluation contracts for the Downhill minimization framework.
//!
//! Objective functions are described along two independent axes:
//! dimensionality (one variable or many) and capability (value only, or
//! value plus first derivatives). Minimizers drive functions purely
//! through these traits, so the same line search or quasi-Newton update
//! works for any dimension and for any mix of analytic and externally
//! supplied derivatives.
//!
//! Value-only functions implement [`MultiDimFunction`] or
//! [`OneDimFunction`]; derivative-capable ones add [`MultiDimGradient`]
//! or [`OneDimGradient`] and opt into the composite
//! [`MultiDimGradientFunction`] / [`OneDimGradientFunction`], which
//! supply combined value-plus-gradient evaluation built from the
//! per-coordinate derivative primitive. One-dimensional functions also
//! expose the multi-dimensional calling convention through length-1
//! slices, so they fit anywhere a vector-based caller expects them.

mod function;
mod gradient;
mod gradient_function;

pub mod contract;

pub use function::{MultiDimFunction, OneDimFunction};
pub use gradient::{MultiDimGradient, OneDimGradient};
pub use gradient_function::{MultiDimGradientFunction, OneDimGradientFunction};

/// Owned, dynamically dispatched one-dimensional function.
pub type BoxedOneDimFunction = Box<dyn OneDimFunction>;

/// Owned, dynamically dispatched multi-dimensional function.
pub type BoxedMultiDimFunction = Box<dyn MultiDimFunction>;

/// Owned, dynamically dispatched one-dimensional function with derivative.
pub type BoxedOneDimGradientFunction = Box<dyn OneDimGradientFunction>;

/// Owned, dynamically dispatched multi-dimensional function with gradient.
pub type BoxedMultiDimGradientFunction = Box<dyn MultiDimGradientFunction>;
