use super::LinearSymbology;
use crate::common::{Alphabet, PatternTable};

// Code 11
//------------------------------------------------------------------------------

pub const MAX_LEN: usize = 121;

static ALPHABET: Alphabet = Alphabet::new(b"0123456789-");

static PATTERNS: PatternTable = PatternTable::framed(
    &[
        "111131", "311131", "131131", "331111", "113131", "313111", "133111", "111331",
        "311311", "311111", "113111",
    ],
    "113311",
);

/// Number of check characters appended after the data.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum CheckDigits {
    None,
    /// C only.
    #[default]
    One,
    /// C followed by K.
    Two,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Code11 {
    check_digits: CheckDigits,
}

impl Code11 {
    pub const fn new(check_digits: CheckDigits) -> Self {
        Self { check_digits }
    }

    pub const fn check_digits(&self) -> CheckDigits {
        self.check_digits
    }
}

/// Weighted sums for the C and K check characters, walking from the last character.
/// C weights cycle through 1..=10, K weights start at 2 and cycle through 1..=9.
fn weighted_sums(indices: &[usize]) -> (usize, usize) {
    let (mut c_sum, mut k_sum) = (0, 0);
    let (mut c_weight, mut k_weight) = (1, 2);

    for &i in indices.iter().rev() {
        c_sum += i * c_weight;
        k_sum += i * k_weight;

        c_weight = if c_weight == 10 { 1 } else { c_weight + 1 };
        k_weight = if k_weight == 9 { 1 } else { k_weight + 1 };
    }

    (c_sum, k_sum)
}

impl LinearSymbology for Code11 {
    fn name(&self) -> &'static str {
        "Code 11"
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

    fn checksum(&self, indices: &[usize]) -> Vec<usize> {
        let (c_sum, k_sum) = weighted_sums(indices);
        let c = c_sum % 11;
        match self.check_digits {
            CheckDigits::None => Vec::new(),
            CheckDigits::One => vec![c],
            CheckDigits::Two => vec![c, (k_sum + c) % 11],
        }
    }
}

#[cfg(test)]
mod code11_tests {
    use test_case::test_case;

    use super::{weighted_sums, CheckDigits, Code11, ALPHABET, PATTERNS};
    use crate::symbology::LinearSymbology;

    fn indices(data: &str) -> Vec<usize> {
        data.chars().map(|c| ALPHABET.index(c).unwrap()).collect()
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(ALPHABET.index('0'), Some(0));
        assert_eq!(ALPHABET.index('9'), Some(9));
        assert_eq!(ALPHABET.index('-'), Some(10));
        assert_eq!(ALPHABET.index('A'), None);
        assert_eq!(PATTERNS.len(), 11);
    }

    #[test]
    fn test_weighted_sums() {
        assert_eq!(weighted_sums(&[1, 3, 5]), (14, 23));
        assert_eq!(weighted_sums(&[]), (0, 0));
    }

    #[test]
    fn test_weight_cycles() {
        // C weights 1..=10 then 1, K weights 2..=9 then 1, 2, 3
        assert_eq!(weighted_sums(&[1; 11]), (56, 50));
    }

    #[test_case("135", CheckDigits::None, &[]; "no check digits")]
    #[test_case("135", CheckDigits::One, &[3]; "c only")]
    #[test_case("135", CheckDigits::Two, &[3, 4]; "c and k")]
    #[test_case("123-45", CheckDigits::Two, &[5, 2]; "with dash")]
    #[test_case("11111111111", CheckDigits::Two, &[1, 7]; "weight wrap")]
    #[test_case("", CheckDigits::Two, &[0, 0]; "empty")]
    fn test_checksum(data: &str, check_digits: CheckDigits, expected: &[usize]) {
        let code = Code11::new(check_digits);
        assert_eq!(code.checksum(&indices(data)), expected);
    }

    #[test]
    fn test_check_character_can_be_dash() {
        // C sum of 10 maps to index 10, the '-' character
        let check = Code11::new(CheckDigits::One).checksum(&indices("-"));
        assert_eq!(check, vec![10]);
        assert_eq!(ALPHABET.char_at(check[0]), '-');
    }

    #[test]
    fn test_caption_omits_checksum() {
        assert_eq!(Code11::default().caption("135", "3"), "135");
    }
}
