//! Output records for hashed inputs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use sha256_hex::constants::BLOCK_LEN;
use sha256_hex::padding::padded_len;
use sha256_hex::Digest;

use crate::input::{Input, Source};

/// One hashed input, as printed or serialized.
#[derive(Serialize, Debug)]
pub(crate) struct Record {
    pub(crate) source: Source,
    pub(crate) label: String,
    pub(crate) bytes: u64,
    pub(crate) blocks: u64,
    pub(crate) sha256: Digest,
}

impl Record {
    pub(crate) fn new(input: &Input, digest: Digest) -> Self {
        Self {
            source: input.source,
            label: input.label.clone(),
            bytes: input.bytes.len() as u64,
            blocks: (padded_len(input.bytes.len()) / BLOCK_LEN) as u64,
            sha256: digest,
        }
    }
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// `<hex>  <label>`, one per line.
    Plain,
    /// One JSON object per line.
    JsonLines,
}

pub(crate) fn write_record(out: &mut impl Write, record: &Record, format: Format) -> Result<()> {
    match format {
        Format::Plain => writeln!(out, "{}  {}", record.sha256, record.label)
            .context("write digest line")?,
        Format::JsonLines => {
            let json = serde_json::to_string(record).context("serialize digest record")?;
            writeln!(out, "{json}").context("write digest record")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_record() -> Record {
        let input = Input {
            source: Source::Text,
            label: "\"abc\"".to_string(),
            bytes: b"abc".to_vec(),
        };
        Record::new(&input, sha256_hex::digest(&input.bytes))
    }

    #[test]
    fn plain_line_is_hex_then_label() {
        let mut out = Vec::new();
        write_record(&mut out, &abc_record(), Format::Plain).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  \"abc\"\n"
        );
    }

    #[test]
    fn json_line_carries_sizes() {
        let mut out = Vec::new();
        write_record(&mut out, &abc_record(), Format::JsonLines).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("parse json");
        assert_eq!(value["source"], "text");
        assert_eq!(value["label"], "\"abc\"");
        assert_eq!(value["bytes"], 3);
        assert_eq!(value["blocks"], 1);
        assert_eq!(
            value["sha256"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
