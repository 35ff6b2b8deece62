//! Input collection for the CLI: text arguments, files, directories, stdin.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use sha256_hex::TextEncoding;

/// Where an input's bytes came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Source {
    Text,
    File,
    Stdin,
}

/// A fully-read message ready to hash.
#[derive(Debug)]
pub(crate) struct Input {
    pub(crate) source: Source,
    pub(crate) label: String,
    pub(crate) bytes: Vec<u8>,
}

/// Encode a text argument with the requested encoding.
pub(crate) fn text_input(text: &str, encoding: TextEncoding) -> Result<Input> {
    let bytes = encoding
        .encode(text)
        .with_context(|| format!("encode text argument {text:?}"))?;
    Ok(Input {
        source: Source::Text,
        label: format!("{text:?}"),
        bytes: bytes.into_owned(),
    })
}

/// Read one path, expanding directories when `recursive` is set.
///
/// Directory contents are returned in sorted path order so output is stable.
pub(crate) fn path_inputs(path: &Path, recursive: bool) -> Result<Vec<Input>> {
    let metadata = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    if metadata.is_file() {
        return Ok(vec![read_file(path)?]);
    }
    if !metadata.is_dir() {
        return Err(anyhow!("{} is not a regular file", path.display()));
    }
    if !recursive {
        return Err(anyhow!(
            "{} is a directory (use --recursive to hash its files)",
            path.display()
        ));
    }
    let mut inputs = Vec::new();
    for file in walk_files(path)? {
        inputs.push(read_file(&file)?);
    }
    Ok(inputs)
}

fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn read_file(path: &Path) -> Result<Input> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Input {
        source: Source::File,
        label: path.display().to_string(),
        bytes,
    })
}

/// Read a whole reader (normally stdin) as raw bytes.
pub(crate) fn reader_input(mut reader: impl Read) -> Result<Input> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).context("read stdin")?;
    Ok(Input {
        source: Source::Stdin,
        label: "-".to_string(),
        bytes,
    })
}
