//! Row expansion: turning a run-length pattern into drawable geometry.

use std::iter;

// Row expander
//------------------------------------------------------------------------------

/// Expands one row pattern into drawable elements.
///
/// Implementations append to `out` and never clear it, so several rows (or several
/// symbols) can share one collection.
pub trait RowExpander {
    type Element;

    fn expand(&self, pattern: &str, row: u32, out: &mut Vec<Self::Element>);
}

/// A dark rectangle, in modules.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Bar {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Emits one [`Bar`] per bar element. Rows are stacked `height` modules apart.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BarExpander {
    height: u32,
}

impl BarExpander {
    pub const DEFAULT_HEIGHT: u32 = 50;

    pub const fn new(height: u32) -> Self {
        Self { height }
    }

    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl Default for BarExpander {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT)
    }
}

impl RowExpander for BarExpander {
    type Element = Bar;

    fn expand(&self, pattern: &str, row: u32, out: &mut Vec<Bar>) {
        let y = row * self.height;
        let mut x = 0;
        for (i, width) in widths(pattern).enumerate() {
            // Even elements are bars, odd ones spaces
            if i & 1 == 0 {
                out.push(Bar { x, y, width, height: self.height });
            }
            x += width;
        }
    }
}

fn widths(pattern: &str) -> impl Iterator<Item = u32> + '_ {
    pattern.bytes().map(|b| {
        debug_assert!(b.is_ascii_digit(), "Invalid width {:?} in pattern", b as char);
        (b - b'0') as u32
    })
}

/// Module by module view of a pattern, `true` for dark.
pub fn modules(pattern: &str) -> impl Iterator<Item = bool> + '_ {
    widths(pattern)
        .enumerate()
        .flat_map(|(i, w)| iter::repeat(i & 1 == 0).take(w as usize))
}

#[cfg(test)]
mod render_tests {
    use super::{modules, Bar, BarExpander, RowExpander};

    #[test]
    fn test_expand() {
        let mut bars = Vec::new();
        BarExpander::new(10).expand("113311", 0, &mut bars);
        assert_eq!(
            bars,
            vec![
                Bar { x: 0, y: 0, width: 1, height: 10 },
                Bar { x: 2, y: 0, width: 3, height: 10 },
                Bar { x: 8, y: 0, width: 1, height: 10 },
            ]
        );
    }

    #[test]
    fn test_expand_appends() {
        let expander = BarExpander::new(4);
        let mut bars = vec![Bar { x: 9, y: 9, width: 9, height: 9 }];
        expander.expand("21", 0, &mut bars);
        expander.expand("12", 1, &mut bars);
        assert_eq!(
            bars,
            vec![
                Bar { x: 9, y: 9, width: 9, height: 9 },
                Bar { x: 0, y: 0, width: 2, height: 4 },
                Bar { x: 0, y: 4, width: 1, height: 4 },
            ]
        );
    }

    #[test]
    fn test_modules() {
        let dark = modules("1213").collect::<Vec<_>>();
        assert_eq!(dark, [true, false, false, true, false, false, false]);
        assert_eq!(modules("").count(), 0);
    }

    #[test]
    fn test_default_height() {
        assert_eq!(BarExpander::default().height(), 50);
    }
}
