// Pattern table
//------------------------------------------------------------------------------

/// Bar/space run-length patterns of a symbology, indexed in lockstep with its
/// [`Alphabet`](super::Alphabet). Every pattern digit is the width in modules of one
/// element, starting with a bar and alternating bar and space.
#[derive(Debug)]
pub struct PatternTable {
    entries: &'static [&'static str],
    start: &'static str,
    stop: &'static str,
}

impl PatternTable {
    pub const fn new(
        entries: &'static [&'static str],
        start: &'static str,
        stop: &'static str,
    ) -> Self {
        Self { entries, start, stop }
    }

    /// Table whose start and stop are the same sentinel pattern.
    pub const fn framed(entries: &'static [&'static str], sentinel: &'static str) -> Self {
        Self::new(entries, sentinel, sentinel)
    }

    pub fn get(&self, index: usize) -> &'static str {
        self.entries[index]
    }

    pub const fn start(&self) -> &'static str {
        self.start
    }

    pub const fn stop(&self) -> &'static str {
        self.stop
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenates start, the pattern of every index in order, and stop.
    pub fn assemble<I: IntoIterator<Item = usize>>(&self, indices: I) -> String {
        let indices = indices.into_iter();
        let entry_len = self.entries.first().map_or(0, |e| e.len());
        let data_len = indices.size_hint().0 * entry_len;
        let mut pattern = String::with_capacity(self.start.len() + data_len + self.stop.len());

        pattern.push_str(self.start);
        for i in indices {
            pattern.push_str(self.entries[i]);
        }
        pattern.push_str(self.stop);
        pattern
    }
}

/// Total width of a run-length pattern in modules.
pub fn module_width(pattern: &str) -> u32 {
    pattern.bytes().map(|b| (b - b'0') as u32).sum()
}
