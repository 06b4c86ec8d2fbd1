//! Unit tests for the identity and composition combinators.

#![cfg(feature = "compose")]

use typecat::compose::{compose, identity};

// =============================================================================
// identity function tests
// =============================================================================

#[test]
fn test_identity_returns_same_integer() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(-100), -100);
    assert_eq!(identity(0), 0);
}

#[test]
fn test_identity_returns_same_string() {
    assert_eq!(identity("hello"), "hello");
    assert_eq!(identity(String::from("world")), String::from("world"));
}

#[test]
fn test_identity_returns_same_vector() {
    assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
    let empty: Vec<i32> = vec![];
    assert_eq!(identity(empty.clone()), empty);
}

#[test]
fn test_identity_with_custom_type() {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    let point = Point { x: 1, y: 2 };
    assert_eq!(identity(point.clone()), point);
}

#[test]
fn test_identity_preserves_ownership() {
    let owned = String::from("owned string");
    let result = identity(owned);
    assert_eq!(result, "owned string");
}

#[test]
fn test_identity_preserves_reference_target() {
    let value = 7;
    let reference = &value;
    assert!(std::ptr::eq(identity(reference), reference));
}

// =============================================================================
// compose function tests
// =============================================================================

#[test]
fn test_compose_applies_second_after_first() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    // compose(f, g)(x) = g(f(x)) = double(add_one(5)) = double(6) = 12
    let composed = compose(add_one, double);
    assert_eq!(composed(5), 12);
}

#[test]
fn test_compose_order_matters() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    let add_then_double = compose(add_one, double);
    let double_then_add = compose(double, add_one);

    assert_eq!(add_then_double(5), 12); // double(add_one(5))
    assert_eq!(double_then_add(5), 11); // add_one(double(5))
}

#[test]
fn test_compose_with_type_conversion() {
    fn to_string(value: i32) -> String {
        value.to_string()
    }
    fn get_length(text: String) -> usize {
        text.len()
    }

    let composed = compose(to_string, get_length);
    assert_eq!(composed(12345), 5);
    assert_eq!(composed(1), 1);
    assert_eq!(composed(1000000), 7);
}

#[test]
fn test_compose_parse_then_double_end_to_end() {
    fn parse(text: &str) -> i32 {
        text.parse().unwrap_or(0)
    }
    fn double(number: i32) -> i32 {
        number * 2
    }

    let composed = compose(parse, double);
    assert_eq!(composed("42"), 84);
    assert_eq!(identity(composed("42")), 84);
}

#[test]
fn test_compose_with_identity_left() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let composed = compose(identity, double);
    assert_eq!(composed(5), double(5));
    assert_eq!(composed(-3), double(-3));
}

#[test]
fn test_compose_with_identity_right() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let composed = compose(double, identity);
    assert_eq!(composed(5), double(5));
    assert_eq!(composed(-3), double(-3));
}

#[test]
fn test_compose_with_closures_capturing_environment() {
    let multiplier = 3;
    let multiply = move |value: i32| value * multiplier;
    let add_ten = |value: i32| value + 10;

    let composed = compose(multiply, add_ten);
    // add_ten(multiply(5)) = add_ten(15) = 25
    assert_eq!(composed(5), 25);
}

#[test]
fn test_compose_immediate_application() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    let result = compose(add_one, double)(5);
    assert_eq!(result, 12);
}

#[test]
fn test_compose_result_can_be_reused() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    let composed = compose(add_one, double);
    // Can call multiple times
    assert_eq!(composed(1), 4);
    assert_eq!(composed(2), 6);
    assert_eq!(composed(3), 8);
}

#[test]
fn test_compose_nested_three_functions() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }
    fn square(value: i32) -> i32 {
        value * value
    }

    // square(double(add_one(3))) = square(8) = 64
    let composed = compose(compose(add_one, double), square);
    assert_eq!(composed(3), 64);
}

#[test]
fn test_compose_composed_functions_as_arguments() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }
    fn square(value: i32) -> i32 {
        value * value
    }

    let left = compose(compose(add_one, double), square);
    let right = compose(add_one, compose(double, square));

    for input in [-5, 0, 3, 100] {
        assert_eq!(left(input), right(input));
    }
}
