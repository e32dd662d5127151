use std::borrow::Cow;

use encoding_rs::Encoding;

pub const DEFAULT_ENCODINGS: [&str; 6] = [
    "utf-8",
    "gbk",
    "big5",
    "shift_jis",
    "euc-kr",
    "windows-1252",
];

/// Best-effort bytes-to-text conversion for documents of unknown encoding.
///
/// A byte-order mark wins outright. Otherwise each encoding of the cascade is
/// tried in order and the first one that decodes without a malformed sequence
/// is used. Lossy UTF-8 is the final step, so [`TextDecoder::decode`] always
/// produces a string.
#[derive(Debug, Clone)]
pub struct TextDecoder {
    encodings: Vec<&'static Encoding>,
}

impl TextDecoder {
    /// Builds a cascade from WHATWG encoding labels.
    pub fn new<I, S>(labels: I) -> Result<Self, TextDecoderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let encodings = labels
            .into_iter()
            .map(|label| {
                let label = label.as_ref().trim();
                Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| TextDecoderError::UnknownEncoding(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { encodings })
    }

    pub fn encoding_names(&self) -> Vec<&'static str> {
        self.encodings.iter().map(|e| e.name()).collect()
    }

    pub fn decode(&self, data: &[u8]) -> String {
        if let Some((encoding, bom_length)) = Encoding::for_bom(data) {
            if let Some(text) = decode_strict(encoding, &data[bom_length..]) {
                return text.into_owned();
            }
        }

        for &encoding in &self.encodings {
            if let Some(text) = decode_strict(encoding, data) {
                if encoding != encoding_rs::UTF_8 {
                    tracing::debug!(encoding = encoding.name(), "Decoded with fallback encoding");
                }
                return text.into_owned();
            }
        }

        tracing::debug!(bytes = data.len(), "No encoding matched, decoding lossily");
        String::from_utf8_lossy(data).into_owned()
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS
                .iter()
                .filter_map(|label| Encoding::for_label(label.as_bytes()))
                .collect(),
        }
    }
}

fn decode_strict<'a>(encoding: &'static Encoding, data: &'a [u8]) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(data)
}

#[derive(Debug, thiserror::Error)]
pub enum TextDecoderError {
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),
}
