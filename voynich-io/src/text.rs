//! Where the text to analyze comes from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::{Error, Result};

/// Source of the transcription to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text given directly, e.g. on the command line.
    Inline(String),
    /// UTF-8 text file.
    File(PathBuf),
    /// Standard input, read to the end.
    Stdin,
}

impl TextSource {
    /// Reads the full text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file or stdin cannot be read and
    /// [`Error::InvalidFormat`] if the bytes are not valid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        self.read_text_with(io::stdin().lock())
    }

    /// Like [`read_text`](Self::read_text), with `stdin` standing in for
    /// standard input. The reader is left untouched for the other sources.
    ///
    /// # Errors
    ///
    /// Same as [`read_text`](Self::read_text).
    pub fn read_text_with<R: Read>(&self, stdin: R) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => {
                let bytes = fs::read(path)?;
                decode_utf8(bytes, &path.display().to_string())
            }
            Self::Stdin => read_from(stdin, "stdin"),
        }
    }

    /// Short human-readable description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(text) => format!("inline text ({} bytes)", text.len()),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }
}

/// Reads `reader` to the end as UTF-8 text.
pub(crate) fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_utf8(bytes, name)
}

fn decode_utf8(bytes: Vec<u8>, name: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        Error::InvalidFormat(format!(
            "{name} is not valid UTF-8 (at byte {})",
            e.utf8_error().valid_up_to()
        ))
    })
}
