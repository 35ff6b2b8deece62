//! Text-to-bytes conversion ahead of hashing.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Encoding applied to text before it is hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
        }
    }

    /// Encode `text`, failing on the first character the encoding cannot represent.
    ///
    /// UTF-8 borrows the input. UTF-16 output carries no byte order mark.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>, EncodingError> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Ascii => self.encode_single_byte(text, 0x7f),
            TextEncoding::Latin1 => self.encode_single_byte(text, 0xff),
            TextEncoding::Utf16Le => Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            )),
            TextEncoding::Utf16Be => Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            )),
        }
    }

    fn encode_single_byte(self, text: &str, max: u32) -> Result<Cow<'_, [u8]>, EncodingError> {
        if text.is_ascii() {
            return Ok(Cow::Borrowed(text.as_bytes()));
        }
        let mut bytes = Vec::with_capacity(text.len());
        for (index, character) in text.char_indices() {
            let code = u32::from(character);
            if code > max {
                return Err(EncodingError {
                    encoding: self,
                    character,
                    index,
                });
            }
            bytes.push(code as u8);
        }
        Ok(Cow::Owned(bytes))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized encoding name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown encoding '{}' (expected utf-8, ascii, latin-1, utf-16le or utf-16be)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for TextEncoding {
    type Err = UnknownEncoding;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "utf-16le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            _ => Err(UnknownEncoding(value.to_string())),
        }
    }
}

/// Text that cannot be represented in the requested encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingError {
    pub encoding: TextEncoding,
    pub character: char,
    /// Byte offset of `character` in the source text.
    pub index: usize,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot encode character {:?} (U+{:04X}) at byte {} as {}",
            self.character,
            u32::from(self.character),
            self.index,
            self.encoding
        )
    }
}

impl std::error::Error for EncodingError {}
