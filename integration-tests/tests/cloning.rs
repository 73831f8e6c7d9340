use approx::assert_relative_eq;
use downhill_core::{
    BoxedMultiDimFunction, BoxedMultiDimGradientFunction, BoxedOneDimFunction,
    BoxedOneDimGradientFunction, MultiDimFunction, MultiDimGradientFunction, OneDimFunction,
    OneDimGradientFunction,
};
use integration_tests::test_functions::{Parabola, Paraboloid, Rosenbrock};

#[test]
fn boxed_one_dim_clone_evaluates_identically() {
    let f: BoxedOneDimFunction = Box::new(Parabola { a: 2.0 });
    let copy = f.clone();

    for x in [-1.0, 0.0, 0.5, 3.0] {
        assert_eq!(copy.value(x), f.value(x));
    }
}

#[test]
fn boxed_multi_dim_clone_evaluates_identically() {
    let f: BoxedMultiDimFunction = Box::new(Paraboloid {
        weights: vec![1.0, 2.0, 3.0],
    });
    let copy = f.clone();

    assert_eq!(copy.dim(), f.dim());
    let x = [0.5, -1.5, 2.5];
    assert_eq!(copy.value(&x), f.value(&x));
}

#[test]
fn boxed_gradient_clone_keeps_derivative_capability() {
    let f: BoxedMultiDimGradientFunction = Box::new(Rosenbrock { a: 1.0, b: 100.0 });
    let copy = f.clone();

    let x = [-0.8, 0.6];
    let mut grad = [0.0; 2];
    let mut copy_grad = [0.0; 2];

    let value = f.value_and_gradient(&x, &mut grad);
    let copy_value = copy.value_and_gradient(&x, &mut copy_grad);

    assert_relative_eq!(copy_value, value);
    assert_eq!(copy_grad, grad);
}

#[test]
fn clone_outlives_its_source() {
    let f: BoxedOneDimGradientFunction = Box::new(Parabola { a: 1.0 });
    let copy = f.clone();
    drop(f);

    let (value, derivative) = copy.value_and_derivative(3.0);
    assert_relative_eq!(value, 9.0);
    assert_relative_eq!(derivative, 6.0);
}
