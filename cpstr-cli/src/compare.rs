use std::cmp::Ordering;

use clap::Parser;

use crate::operand::parse_str;

#[derive(Debug, Parser)]
pub(crate) struct Compare {
    /// The first string
    a: String,
    /// The second string
    b: String,
}

impl Compare {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let a = parse_str(&self.a)?;
        let b = parse_str(&self.b)?;
        let ordering = match cpstr_seq::compare(&a, &b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        println!("{}", ordering);
        Ok(())
    }
}
