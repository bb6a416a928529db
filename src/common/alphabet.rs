// Alphabet
//------------------------------------------------------------------------------

const ABSENT: u8 = u8::MAX;

/// Ordered set of characters a symbology accepts. A character's position is both its
/// checksum weight and its row in the symbology's [`PatternTable`](super::PatternTable).
///
/// The character to index lookup is built at compile time, so membership tests are a
/// single table read.
#[derive(Debug)]
pub struct Alphabet {
    chars: &'static [u8],
    lookup: [u8; 128],
}

impl Alphabet {
    pub const fn new(chars: &'static [u8]) -> Self {
        assert!(chars.len() < ABSENT as usize, "Alphabet has too many characters");

        let mut lookup = [ABSENT; 128];
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i] as usize;
            assert!(c < 128, "Alphabet characters must be ASCII");
            assert!(lookup[c] == ABSENT, "Alphabet characters must be unique");
            lookup[c] = i as u8;
            i += 1;
        }

        Self { chars, lookup }
    }

    pub fn index(&self, ch: char) -> Option<usize> {
        if !ch.is_ascii() {
            return None;
        }
        match self.lookup[ch as usize] {
            ABSENT => None,
            i => Some(i as usize),
        }
    }

    pub fn char_at(&self, index: usize) -> char {
        debug_assert!(index < self.chars.len(), "Index {index} is outside the alphabet");
        self.chars[index] as char
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index(ch).is_some()
    }

    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|&c| c as char)
    }
}
