//! Traits with one required method and default behavior built on top of it.
//!
//! Both traits are blanket-implemented for closures of the matching shape,
//! so `|| 5` is a [`StringOperator`] and `|text| ...` is a [`TextConsumer`].

use std::io::{self, Write};

/// Produces an amount; repeat-printing and the boxed accessor come for free.
pub trait StringOperator {
    fn amount(&self) -> i32;

    /// Print `text` once per unit of [`amount`](Self::amount). Zero or a
    /// negative amount prints nothing.
    fn operate(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        for _ in 0..self.amount().max(0) {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn current_number(&self) -> Option<i32> {
        Some(self.amount())
    }
}

impl<F> StringOperator for F
where
    F: Fn() -> i32,
{
    fn amount(&self) -> i32 {
        self()
    }
}

/// Consumes text; repeated invocation comes for free.
pub trait TextConsumer {
    fn take(&mut self, text: &str) -> io::Result<()>;

    /// Call [`take`](Self::take) `times` times with the same text.
    fn execute(&mut self, times: i32, text: &str) -> io::Result<()> {
        for _ in 0..times.max(0) {
            self.take(text)?;
        }
        Ok(())
    }
}

impl<F> TextConsumer for F
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn take(&mut self, text: &str) -> io::Result<()> {
        self(text)
    }
}
