use std::borrow::Cow;

use super::LinearSymbology;
use crate::common::{Alphabet, PatternTable};

// Code 39
//------------------------------------------------------------------------------

pub const MAX_LEN: usize = 86;

static ALPHABET: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%");

// Nine elements per character followed by a narrow inter-character gap. The stop
// pattern is the start character without its gap.
static PATTERNS: PatternTable = PatternTable::new(
    &[
        "1112212111", "2112111121", "1122111121", "2122111111", "1112211121", "2112211111",
        "1122211111", "1112112121", "2112112111", "1122112111", "2111121121", "1121121121",
        "2121121111", "1111221121", "2111221111", "1121221111", "1111122121", "2111122111",
        "1121122111", "1111222111", "2111111221", "1121111221", "2121111211", "1111211221",
        "2111211211", "1121211211", "1111112221", "2111112211", "1121112211", "1111212211",
        "2211111121", "1221111121", "2221111111", "1211211121", "2211211111", "1221211111",
        "1211112121", "2211112111", "1221112111", "1212121111", "1212111211", "1211121211",
        "1112121211",
    ],
    "1211212111",
    "121121211",
);

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Code39 {
    with_check: bool,
}

impl Code39 {
    pub const fn new(with_check: bool) -> Self {
        Self { with_check }
    }

    pub const fn with_check(&self) -> bool {
        self.with_check
    }
}

impl LinearSymbology for Code39 {
    fn name(&self) -> &'static str {
        "Code 39"
    }

    fn alphabet(&self) -> &'static Alphabet {
        &ALPHABET
    }

    fn patterns(&self) -> &'static PatternTable {
        &PATTERNS
    }

    fn max_len(&self) -> usize {
        MAX_LEN
    }

    // Modulo 43
    fn checksum(&self, indices: &[usize]) -> Vec<usize> {
        if !self.with_check {
            return Vec::new();
        }
        vec![indices.iter().sum::<usize>() % 43]
    }

    fn preprocess<'a>(&self, data: &'a str) -> Cow<'a, str> {
        if data.bytes().any(|b| b.is_ascii_lowercase()) {
            Cow::Owned(data.to_ascii_uppercase())
        } else {
            Cow::Borrowed(data)
        }
    }

    fn caption(&self, data: &str, checksum: &str) -> String {
        format!("*{data}{checksum}*")
    }
}

#[cfg(test)]
mod code39_tests {
    use std::borrow::Cow;

    use test_case::test_case;

    use super::{Code39, ALPHABET, PATTERNS};
    use crate::symbology::LinearSymbology;

    fn indices(data: &str) -> Vec<usize> {
        data.chars().map(|c| ALPHABET.index(c).unwrap()).collect()
    }

    #[test]
    fn test_patterns_have_three_wide_elements() {
        for i in 0..PATTERNS.len() {
            let pattern = PATTERNS.get(i);
            assert_eq!(pattern.len(), 10);
            let wide = pattern.bytes().filter(|&b| b == b'2').count();
            assert_eq!(wide, 3, "{}", ALPHABET.char_at(i));
            assert!(pattern.ends_with('1'));
        }
        assert_eq!(&PATTERNS.start()[..9], PATTERNS.stop());
    }

    #[test_case("CODE39", 'W'; "alphanumeric")]
    #[test_case("0", '0'; "zero")]
    #[test_case("%%", '+'; "wraps modulus")]
    fn test_checksum(data: &str, expected: char) {
        let check = Code39::new(true).checksum(&indices(data));
        assert_eq!(check.len(), 1);
        assert_eq!(ALPHABET.char_at(check[0]), expected);
    }

    #[test]
    fn test_checksum_disabled() {
        assert!(Code39::new(false).checksum(&indices("CODE39")).is_empty());
    }

    #[test]
    fn test_preprocess_folds_case() {
        let code = Code39::default();
        assert_eq!(code.preprocess("code-39"), "CODE-39");
        assert!(matches!(code.preprocess("CODE-39"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_caption() {
        let code = Code39::new(true);
        assert_eq!(code.caption("CODE39", "W"), "*CODE39W*");
        assert_eq!(code.caption("", ""), "**");
    }
}
