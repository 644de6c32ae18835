use std::sync::Arc;

use rand::Rng;
use shoebox_types::DisplayUrl;

/// Alphabet for minted URL tokens (base36, lowercase).
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random token in a minted URL.
const TOKEN_LEN: usize = 12;

/// A live display handle: the decoded bytes of one image plus the URL under
/// which they are reachable.
///
/// Bytes are shared via `Arc`, so cloning a handle (or handing it to the
/// presentation layer) never copies image data.
#[derive(Clone, Debug)]
pub struct DisplayHandle {
    /// The minted URL for this handle.
    pub url: DisplayUrl,
    /// MIME type of the decoded bytes.
    pub mime_type: String,
    /// The decoded image content.
    pub bytes: Arc<Vec<u8>>,
}

impl DisplayHandle {
    /// Create a handle around decoded bytes, minting a fresh URL.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            url: mint_url(),
            mime_type: mime_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Byte length of the handle's content.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Mint a fresh process-local URL (`mem://shoebox/{token}`).
///
/// Two handles never share a URL: a revoked-and-re-registered path gets a
/// visibly different reference, so stale URLs can be detected.
fn mint_url() -> DisplayUrl {
    let mut rng = rand::thread_rng();
    let token: String = (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();
    DisplayUrl::new(format!("mem://shoebox/{token}"))
}
