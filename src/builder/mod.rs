mod barcode;

pub use barcode::Barcode;

use std::borrow::Cow;

use encoding_rs::Encoding;
use tracing::{debug, trace};

use crate::common::{
    error::{BarcodeError, BarcodeResult},
    message::decode_message,
};
use crate::symbology::{LinearSymbology, Symbology};

pub struct BarcodeBuilder<'a> {
    data: Cow<'a, str>,
    symbology: Symbology,
}

impl<'a> BarcodeBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data: Cow::Borrowed(data), symbology: Symbology::default() }
    }

    /// Builder for raw bytes in the given text encoding.
    pub fn from_bytes(bytes: &[u8], encoding: &'static Encoding) -> BarcodeResult<Self> {
        let data = decode_message(bytes, encoding)?;
        Ok(Self { data: Cow::Owned(data), symbology: Symbology::default() })
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = Cow::Borrowed(data);
        self
    }

    pub fn symbology(&mut self, symbology: impl Into<Symbology>) -> &mut Self {
        self.symbology = symbology.into();
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Symbology: {:?}, Length: {} }}", self.symbology, self.data.chars().count())
    }
}


impl BarcodeBuilder<'_> {
    pub fn build(&self) -> BarcodeResult<Barcode> {
        encode(&self.symbology, &self.data)
    }
}

/// Table-driven encoding shared by every linear symbology.
///
/// Fails only on validation: the message is longer than the symbology allows, or holds a
/// character outside its alphabet. Check characters and framing cannot fail afterwards.
pub fn encode<S: LinearSymbology + ?Sized>(symbology: &S, data: &str) -> BarcodeResult<Barcode> {
    let name = symbology.name();
    debug!(symbology = name, "Generating barcode...");

    let data = symbology.preprocess(data);

    debug!("Validating data...");
    let len = data.chars().count();
    let max = symbology.max_len();
    if len > max {
        return Err(BarcodeError::InvalidDataLength { len, max });
    }

    let alphabet = symbology.alphabet();
    let indices = data
        .chars()
        .enumerate()
        .map(|(pos, ch)| alphabet.index(ch).ok_or(BarcodeError::InvalidData { ch, pos }))
        .collect::<BarcodeResult<Vec<_>>>()?;

    debug!("Computing check characters...");
    let check = symbology.checksum(&indices);
    let checksum = check.iter().map(|&i| alphabet.char_at(i)).collect::<String>();

    debug!("Assembling row pattern...");
    let pattern = symbology.patterns().assemble(indices.iter().chain(&check).copied());
    trace!(%pattern);

    let text = symbology.caption(&data, &checksum);
    debug!(%text, %checksum, "Barcode generated");

    Ok(Barcode::new(name, pattern, text, checksum))
}
