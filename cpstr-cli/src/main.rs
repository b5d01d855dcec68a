mod call;
mod compare;
mod eq;
mod error;
mod hash;
mod logging;
mod operand;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter, such as `debug` or `cpstr=trace`.
    ///
    /// Overrides the CPSTR_LOG environment variable. The default is `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two strings for equality, code point by code point.
    Eq(eq::Eq),
    /// Order two strings by code point. Prints -1, 0 or 1.
    Compare(compare::Compare),
    /// Call a special method of a string, such as __getitem__.
    Call(call::Call),
    /// Print the hash of a string.
    Hash(hash::Hash),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());
    match cli.command {
        Commands::Eq(eq) => {
            eq.run()?;
        }
        Commands::Compare(compare) => {
            compare.run()?;
        }
        Commands::Call(call) => {
            call.run()?;
        }
        Commands::Hash(hash) => {
            hash.run()?;
        }
    }
    Ok(())
}
