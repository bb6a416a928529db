use std::error::Error;
use std::ops::Range;

use linbar::{BarcodeBuilder, CheckDigits, Code11, RowExpander};

/// Emits the pixel span covered by each bar.
struct Spans {
    module_sz: u32,
}

impl RowExpander for Spans {
    type Element = Range<u32>;

    fn expand(&self, pattern: &str, _row: u32, out: &mut Vec<Range<u32>>) {
        let mut x = 0;
        for (i, b) in pattern.bytes().enumerate() {
            let w = (b - b'0') as u32 * self.module_sz;
            if i % 2 == 0 {
                out.push(x..x + w);
            }
            x += w;
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let barcode =
        BarcodeBuilder::new("0123456789").symbology(Code11::new(CheckDigits::One)).build()?;

    let mut spans = Vec::new();
    barcode.expand_into(&Spans { module_sz: 2 }, &mut spans);

    println!("{} bars over {} pixels", spans.len(), barcode.width() * 2);
    for span in spans {
        println!("  {span:?}");
    }

    Ok(())
}
