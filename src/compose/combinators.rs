//! The identity and composition combinators.
//!
//! These are the two fundamental building blocks of point-free programming:
//! the I combinator ([`identity`]) and binary function composition
//! ([`compose`]).

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// Ownership passes straight through: the caller receives the exact value
/// it passed in, never a copy.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use typecat::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use typecat::compose::{compose, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two unary functions, producing "second after first".
///
/// Given `first: A -> B` and `second: B -> C`, returns a function `A -> C`
/// equivalent to `|x| second(first(x))`. The `first` function is applied
/// first, matching the mathematical reading "g ∘ f" with `f` innermost.
///
/// The composition performs no validation and no error handling of its own:
/// a panic raised while evaluating `first(x)` or `second(first(x))`
/// propagates unchanged to the caller of the composed function. It has no
/// side effects beyond those of `first` and `second` themselves, and is
/// referentially transparent whenever both parts are.
///
/// # Type Parameters
///
/// * `A` - The input type of the composed function
/// * `B` - The intermediate type (`first`'s output, `second`'s input)
/// * `C` - The output type of the composed function
/// * `F` - The type of the first function (must implement [`Fn`])
/// * `G` - The type of the second function (must implement [`Fn`])
///
/// # Laws
///
/// - **Left Identity**: `compose(identity, f)(x) == f(x)`
/// - **Right Identity**: `compose(f, identity)(x) == f(x)`
/// - **Associativity**: `compose(compose(f, g), h)(x) == compose(f, compose(g, h))(x)`
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use typecat::compose::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose(f, g)(x) = g(f(x)) = double(add_one(5)) = double(6) = 12
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// ## Type conversion
///
/// ```
/// use typecat::compose::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// // Types flow through the composition
/// let composed = compose(to_string, get_length);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use typecat::compose::compose;
///
/// let multiplier = 3;
/// let multiply = move |x: i32| x * multiplier;
/// let add_ten = |x: i32| x + 10;
///
/// let composed = compose(multiply, add_ten);
/// assert_eq!(composed(5), 25); // add_ten(multiply(5)) = add_ten(15) = 25
/// ```
///
/// ## Nested composition
///
/// ```
/// use typecat::compose::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // Associativity: grouping does not change the result
/// let left = compose(compose(add_one, double), square);
/// let right = compose(add_one, compose(double, square));
/// assert_eq!(left(3), right(3));
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}
