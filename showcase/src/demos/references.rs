//! Function references and function objects of several arities.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::functions::{get_list, product, use_bi_function, use_zero};

pub fn run(out: &mut impl Write) -> Result<()> {
    let list = get_list(&["Erix", "Juan", "Robert"]);
    debug!(len = list.len(), "references demo");

    list.iter().try_for_each(|name| print_line(out, name))?;
    list.iter().try_for_each(|value| writeln!(out, "{value}"))?;

    use_zero(|| 3);

    // Whatever the lambdas print is collected here and written after the
    // banners; `use_bi_function` never calls them, so it stays empty.
    let mut lambda_out = String::new();
    use_bi_function(out, |a, b| a * b)?;
    use_bi_function(out, |a, b| {
        lambda_out.push_str("Hello from Lambda\n");
        a * b
    })?;
    use_bi_function(out, product)?;
    out.write_all(lambda_out.as_bytes())?;
    Ok(())
}

fn print_line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")
}
