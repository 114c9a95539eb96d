//! Fluent handle whose methods print a line and hand back `&mut Self`.

use std::io::{self, Write};

pub const HI: &str = "Say Hi!";
pub const BYE: &str = "Say Bye";

pub struct Chainer<W: Write> {
    out: W,
}

impl<W: Write> Chainer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn say_hi(&mut self) -> io::Result<&mut Self> {
        writeln!(self.out, "{HI}")?;
        Ok(self)
    }

    pub fn say_bye(&mut self) -> io::Result<&mut Self> {
        writeln!(self.out, "{BYE}")?;
        Ok(self)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
