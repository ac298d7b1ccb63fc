//! Command-line interface.

pub mod output;

use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::core::line::emit_secret_key_line;
use crate::core::provider::OsProvider;
use crate::error::Result;

/// mksecret - Print a freshly generated SECRET_KEY setting line.
#[derive(Parser)]
#[command(
    name = "mksecret",
    about = "Print a freshly generated SECRET_KEY setting line",
    version,
    after_help = "Paste the output into your settings file. Keep it out of version control."
)]
pub struct Cli {}

/// Generate one key and write its settings line to `out`.
pub fn execute<W: Write>(out: &mut W) -> Result<()> {
    info!("emitting secret key line");
    let line = emit_secret_key_line(&OsProvider::new())?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
