//! `json-patch-ot`: transform a proposed JSON Patch against an accepted one.
//!
//! Usage:
//!   json-patch-ot [flags] '<accepted-array-json>' '<proposed-array-json>'
//!   json-patch-ot [flags] < envelope.json
//!
//! Flags:
//!   --accepted-wins-on-equal-path
//!   --redirect-on-move
//!   --options '<options-json>'
//!
//! Without positional arguments the input is read from stdin as
//! `{ "accepted": [...], "proposed": [...], "options"?: {...} }`.
//! Set `RUST_LOG=json_patch_ot=debug` to see dropped operations.

use std::io::{self, Read, Write};

use json_patch_ot::json_cli::{parse_args, transform_envelope, transform_patches, CliError};
use tracing_subscriber::EnvFilter;

fn run() -> Result<String, CliError> {
    let invocation = parse_args(std::env::args().skip(1))?;
    match &invocation.patches {
        Some((accepted, proposed)) => transform_patches(accepted, proposed, &invocation.options),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            transform_envelope(buf.trim(), &invocation.options)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let result = run().and_then(|out| {
        let mut stdout = io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    });
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
