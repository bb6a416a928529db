use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum BarcodeError {
    // Validation
    #[error("Data too long: {len} characters, symbology allows at most {max}")]
    InvalidDataLength { len: usize, max: usize },
    #[error("Invalid character {ch:?} at position {pos}")]
    InvalidData { ch: char, pos: usize },

    // Preprocessing
    #[error("Malformed {encoding} byte sequence")]
    InvalidEncoding { encoding: &'static str },
}

pub type BarcodeResult<T> = Result<T, BarcodeError>;

#[cfg(test)]
mod error_tests {
    use super::BarcodeError;

    #[test]
    fn test_display() {
        let err = BarcodeError::InvalidDataLength { len: 122, max: 121 };
        assert_eq!(err.to_string(), "Data too long: 122 characters, symbology allows at most 121");

        let err = BarcodeError::InvalidData { ch: 'A', pos: 3 };
        assert_eq!(err.to_string(), "Invalid character 'A' at position 3");

        let err = BarcodeError::InvalidEncoding { encoding: "UTF-8" };
        assert_eq!(err.to_string(), "Malformed UTF-8 byte sequence");
    }
}
