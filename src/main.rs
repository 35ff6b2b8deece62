//! `shx`: print SHA-256 digests of text, files, or stdin.

mod input;
mod report;
mod transcript;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use sha256_hex::padding::padded_len;
use sha256_hex::{digest, TextEncoding};

use crate::input::{path_inputs, reader_input, text_input, Input};
use crate::report::{write_record, Format, Record};
use crate::transcript::Transcript;

const DEFAULT_ENCODING: &str = "utf-8";

/// CLI arguments for the digest tool.
#[derive(Parser, Debug)]
#[command(
    name = "shx",
    version,
    about = "Print FIPS 180-4 SHA-256 digests as lowercase hex"
)]
struct Args {
    /// Text to hash (reads stdin as raw bytes when no text or file is given)
    text: Vec<String>,

    /// Hash the full contents of a file (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Accept directories for --file and hash every file beneath them
    #[arg(short, long)]
    recursive: bool,

    /// Encoding applied to TEXT before hashing
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = DEFAULT_ENCODING,
        value_parser = parse_encoding
    )]
    encoding: TextEncoding,

    /// Emit one JSON object per input
    #[arg(long)]
    json: bool,

    /// Print a transcript of each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_encoding(value: &str) -> Result<TextEncoding, String> {
    value.parse().map_err(|err: sha256_hex::UnknownEncoding| err.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

/// Hash every requested input and print one record per input.
fn run(args: Args) -> Result<()> {
    let mut transcript = Transcript::new(args.verbose);
    let inputs = collect_inputs(&args, &mut transcript)?;
    let format = if args.json {
        Format::JsonLines
    } else {
        Format::Plain
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for input in &inputs {
        let record = Record::new(input, digest(&input.bytes));
        transcript.block(
            &input.label,
            &format!(
                "message bytes: {}\npadded bytes: {}\nblocks: {}\nsha256: {}",
                record.bytes,
                padded_len(input.bytes.len()),
                record.blocks,
                record.sha256
            ),
        );
        write_record(&mut out, &record, format)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn collect_inputs(args: &Args, transcript: &mut Transcript) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for text in &args.text {
        transcript.note(format!("encoding text argument as {}", args.encoding));
        inputs.push(text_input(text, args.encoding)?);
    }
    for path in &args.files {
        let found = path_inputs(path, args.recursive)?;
        transcript.note(format!("{}: {} file(s)", path.display(), found.len()));
        inputs.extend(found);
    }
    if args.text.is_empty() && args.files.is_empty() {
        transcript.note("no text or files given; reading stdin");
        inputs.push(reader_input(io::stdin().lock())?);
    }
    Ok(inputs)
}
