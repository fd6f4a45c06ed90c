use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "jsonify-cli",
    about = "Normalize JSON into jsonify's spaced compact form",
    version
)]
struct Args {
    /// Drop top-level entries whose value encodes as null
    #[arg(long)]
    ignore_nulls: bool,

    /// Decode objects as plain mappings instead of records
    #[arg(long)]
    mappings: bool,

    /// Maximum nesting depth accepted while decoding
    #[arg(long, default_value_t = jsonify::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Decode integer literals that overflow i64/u64 as strings instead of floats
    #[arg(long)]
    bigint_as_string: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let decode_options = jsonify::DecodeOptions {
        mappings: args.mappings,
        max_depth: args.max_depth,
        bigint_as_string: args.bigint_as_string,
    };
    let Some(value) = jsonify::decode_from_str(&buf, &decode_options) else {
        bail!(
            "input is not valid JSON (or nests deeper than {} levels)",
            args.max_depth
        );
    };

    let encode_options = jsonify::EncodeOptions {
        ignore_nulls: args.ignore_nulls,
        ..Default::default()
    };
    let registry = jsonify::ConversionRegistry::new();
    let out = jsonify::encode_to_string(&value, &registry, &encode_options)?;
    println!("{out}");
    Ok(())
}
