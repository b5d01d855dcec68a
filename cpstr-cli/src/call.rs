use clap::Parser;
use cpstr::{OpResult, SpecialMethod, Value};

use crate::error::render_error;
use crate::operand::{parse_operand, parse_str};

#[derive(Debug, Parser)]
pub(crate) struct Call {
    /// The special method, such as `__getitem__`
    method: String,
    /// The string the method is called on
    this: String,
    /// Further arguments, in operand syntax
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Call {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let this = parse_str(&self.this)?;
        let args = self
            .args
            .iter()
            .map(|arg| parse_operand(arg))
            .collect::<Result<Vec<Value>, _>>()?;
        let result = SpecialMethod::lookup(&self.method)
            .and_then(|method| method.call(&this, &args));
        match result {
            Ok(OpResult::Value(value)) => println!("{}", value.repr()),
            Ok(OpResult::NotImplemented) => println!("NotImplemented"),
            Err(e) => {
                tracing::debug!(method = %self.method, code = %e.code(), "special method failed");
                render_error(&e);
                std::process::exit(1);
            }
        }
        Ok(())
    }
}
