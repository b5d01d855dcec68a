use clap::Parser;

use crate::operand::parse_str;

#[derive(Debug, Parser)]
pub(crate) struct Hash {
    /// The string to hash
    a: String,
}

impl Hash {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let a = parse_str(&self.a)?;
        println!("{}", a.hash_value());
        Ok(())
    }
}
