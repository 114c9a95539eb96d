//! Function objects of various arities and the shared list builder.

use std::io::{self, Write};

pub const BI_FUNCTION_BANNER: &str = "From biFunction ";

/// Three-argument function object. Any `Fn(T, U, V) -> R` qualifies.
pub trait TriFunction<T, U, V, R> {
    fn apply(&self, t: T, u: U, v: V) -> R;
}

impl<F, T, U, V, R> TriFunction<T, U, V, R> for F
where
    F: Fn(T, U, V) -> R,
{
    fn apply(&self, t: T, u: U, v: V) -> R {
        self(t, u, v)
    }
}

/// Named single-argument predicate. The inline closure `|x| x == 4` is
/// the same check; either one can be handed to [`count_matching`].
pub fn equals_four(x: i32) -> bool {
    x == 4
}

/// Count the values accepted by `predicate`.
pub fn count_matching(values: &[i32], predicate: impl Fn(i32) -> bool) -> usize {
    values.iter().filter(|&&value| predicate(value)).count()
}

/// Zero-argument function object producing an integer.
pub trait ZeroArguments {
    fn get(&self) -> i32;
}

impl<F> ZeroArguments for F
where
    F: Fn() -> i32,
{
    fn get(&self) -> i32 {
        self()
    }
}

/// Collect the given elements, in order, into an owned list.
pub fn get_list<T: Clone>(elements: &[T]) -> Vec<T> {
    elements.to_vec()
}

/// Accepts a zero-argument function object without calling it.
pub fn use_zero(_zero: impl ZeroArguments) {}

/// Announces the two-argument function it was handed. The function itself
/// is never called.
pub fn use_bi_function(
    out: &mut dyn Write,
    _bi_function: impl FnMut(i32, i32) -> i32,
) -> io::Result<()> {
    writeln!(out, "{BI_FUNCTION_BANNER}")
}

pub fn product(a: i32, b: i32) -> i32 {
    a * b
}
