use crate::error::{Result, StripError};
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// A validated text encoding that files are decoded from and written back in.
///
/// Byte-order marks are neither detected nor preserved: a leading BOM is
/// decoded as an ordinary character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
}

impl TextEncoding {
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            StripError::UnsupportedEncoding {
                label: label.to_string(),
            }
        })?;

        // UTF-16 and the replacement encoding can be read but not written back.
        if encoding.output_encoding() != encoding {
            return Err(StripError::UnsupportedEncoding {
                label: label.to_string(),
            });
        }

        Ok(Self { encoding })
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| StripError::Decode {
                path: path.display().to_string(),
                encoding: self.name().to_string(),
            })
    }

    pub fn encode(&self, text: &str, path: &Path) -> Result<Vec<u8>> {
        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if had_unmappable {
            return Err(StripError::Encode {
                path: path.display().to_string(),
                encoding: self.name().to_string(),
            });
        }
        Ok(bytes.into_owned())
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}
