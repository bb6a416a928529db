mod code11;
mod code39;

pub use code11::{CheckDigits, Code11};
pub use code39::Code39;

use std::borrow::Cow;

use crate::common::{Alphabet, PatternTable};

// Encoder contract
//------------------------------------------------------------------------------

/// A linear symbology: its alphabet, pattern table and check character rule.
///
/// The shared encoder in [`builder`](crate::builder) drives every implementor the same
/// way: validate length and alphabet membership, compute check characters, then frame
/// the data patterns between the start and stop patterns.
pub trait LinearSymbology {
    fn name(&self) -> &'static str;

    fn alphabet(&self) -> &'static Alphabet;

    fn patterns(&self) -> &'static PatternTable;

    /// Maximum number of data characters, check characters excluded.
    fn max_len(&self) -> usize;

    /// Alphabet indices of the check characters for `indices`, in symbol order.
    fn checksum(&self, indices: &[usize]) -> Vec<usize>;

    /// Applies the symbology's input conventions before validation.
    fn preprocess<'a>(&self, data: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(data)
    }

    /// Human readable text printed under the symbol.
    fn caption(&self, data: &str, _checksum: &str) -> String {
        data.to_string()
    }
}

// Symbology
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Symbology {
    Code11(Code11),
    Code39(Code39),
}

impl Default for Symbology {
    fn default() -> Self {
        Self::Code11(Code11::default())
    }
}

impl From<Code11> for Symbology {
    fn from(code: Code11) -> Self {
        Self::Code11(code)
    }
}

impl From<Code39> for Symbology {
    fn from(code: Code39) -> Self {
        Self::Code39(code)
    }
}

macro_rules! dispatch {
    ($self:ident, $sym:ident => $call:expr) => {
        match $self {
            Symbology::Code11($sym) => $call,
            Symbology::Code39($sym) => $call,
        }
    };
}

impl LinearSymbology for Symbology {
    fn name(&self) -> &'static str {
        dispatch!(self, s => s.name())
    }

    fn alphabet(&self) -> &'static Alphabet {
        dispatch!(self, s => s.alphabet())
    }

    fn patterns(&self) -> &'static PatternTable {
        dispatch!(self, s => s.patterns())
    }

    fn max_len(&self) -> usize {
        dispatch!(self, s => s.max_len())
    }

    fn checksum(&self, indices: &[usize]) -> Vec<usize> {
        dispatch!(self, s => s.checksum(indices))
    }

    fn preprocess<'a>(&self, data: &'a str) -> Cow<'a, str> {
        dispatch!(self, s => s.preprocess(data))
    }

    fn caption(&self, data: &str, checksum: &str) -> String {
        dispatch!(self, s => s.caption(data, checksum))
    }
}

#[cfg(test)]
mod symbology_tests {
    use super::{CheckDigits, Code11, Code39, LinearSymbology, Symbology};

    #[test]
    fn test_dispatch() {
        let code11 = Symbology::from(Code11::new(CheckDigits::Two));
        assert_eq!(code11.name(), "Code 11");
        assert_eq!(code11.max_len(), 121);
        assert_eq!(code11.checksum(&[1, 3, 5]), vec![3, 4]);

        let code39 = Symbology::from(Code39::new(true));
        assert_eq!(code39.name(), "Code 39");
        assert_eq!(code39.max_len(), 86);
        assert_eq!(code39.preprocess("abc"), "ABC");
        assert_eq!(code39.caption("ABC", ""), "*ABC*");
    }

    #[test]
    fn test_default() {
        assert_eq!(Symbology::default(), Symbology::Code11(Code11::new(CheckDigits::One)));
    }

    #[test]
    fn test_tables_in_lockstep() {
        for sym in [Symbology::from(Code11::default()), Symbology::from(Code39::default())] {
            assert_eq!(sym.alphabet().len(), sym.patterns().len(), "{}", sym.name());
        }
    }
}
