use encoding_rs::Encoding;

use super::error::{BarcodeError, BarcodeResult};

// Message preprocessing
//------------------------------------------------------------------------------

/// Decodes raw caller bytes into the message text consumed by the encoders.
///
/// A byte order mark, if present, overrides `encoding`. Malformed sequences are
/// rejected rather than replaced, since a replacement character would silently end up
/// in the symbol.
pub fn decode_message(bytes: &[u8], encoding: &'static Encoding) -> BarcodeResult<String> {
    let (text, used, has_err) = encoding.decode(bytes);

    if has_err {
        return Err(BarcodeError::InvalidEncoding { encoding: used.name() });
    }

    Ok(text.into_owned())
}
