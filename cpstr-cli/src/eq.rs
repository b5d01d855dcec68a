use clap::Parser;

use crate::operand::parse_str;

#[derive(Debug, Parser)]
pub(crate) struct Eq {
    /// The first string
    a: String,
    /// The second string
    b: String,
}

impl Eq {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let a = parse_str(&self.a)?;
        let b = parse_str(&self.b)?;
        tracing::debug!(a_compact = a.is_compact(), b_compact = b.is_compact(), "eq");
        // compare through the generic sequence walk, not Str's fast paths
        let equal = cpstr_seq::eq(&a, &b);
        println!("{}", if equal { "True" } else { "False" });
        Ok(())
    }
}
