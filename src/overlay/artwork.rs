use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Largest artwork payload held for previewing, in decoded bytes.
pub const MAX_ARTWORK_BYTES: usize = 2 * 1024 * 1024;

/// An uploaded artwork image held in memory for previewing.
///
/// Artwork never touches disk; it lives as bytes here and travels as a
/// `data:` URL between the editor, the reservation form and the stored
/// reservation row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkImage {
    content_type: String,
    data: Vec<u8>,
}

impl ArtworkImage {
    /// Accept raw upload bytes when they look like an image.
    ///
    /// `content_type` is whatever the client declared. When it is missing
    /// or not an `image/*` type, a guess from the filename extension is
    /// tried before giving up. Returns `None` for anything that is not an
    /// image; callers treat that as a quiet no-op.
    pub fn from_bytes(
        data: Vec<u8>,
        content_type: Option<&str>,
        filename: Option<&str>,
    ) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let declared = content_type.filter(|ct| ct.starts_with("image/"));
        let content_type = match declared {
            Some(ct) => ct.to_string(),
            None => {
                let guessed = filename.and_then(|name| mime_guess::from_path(name).first());
                match guessed {
                    Some(mime) if mime.type_() == mime_guess::mime::IMAGE => {
                        mime.essence_str().to_string()
                    }
                    _ => return None,
                }
            }
        };
        Some(Self { content_type, data })
    }

    /// Parse a `data:image/...;base64,` URL back into an image.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (meta, payload) = rest.split_once(',')?;
        let content_type = meta.strip_suffix(";base64")?;
        if !content_type.starts_with("image/") {
            return None;
        }
        let data = BASE64.decode(payload).ok()?;
        if data.is_empty() {
            return None;
        }
        Some(Self {
            content_type: content_type.to_string(),
            data,
        })
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encode as a `data:` URL for inline embedding.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, BASE64.encode(&self.data))
    }
}
