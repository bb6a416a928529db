use image::{GrayImage, Luma};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::common::module_width;
use crate::render::{self, Bar, BarExpander, RowExpander};

/// Encoded linear barcode: the row pattern and the human readable text fields.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Barcode {
    symbology: &'static str,
    pattern: String,
    text: String,
    checksum: String,
    left_text: String,
    right_text: String,
    supplement: String,
}

impl Barcode {
    pub(crate) fn new(
        symbology: &'static str,
        pattern: String,
        text: String,
        checksum: String,
    ) -> Self {
        Self {
            symbology,
            pattern,
            text,
            checksum,
            left_text: String::new(),
            right_text: String::new(),
            supplement: String::new(),
        }
    }

    pub fn symbology_name(&self) -> &'static str {
        self.symbology
    }

    /// Run-length pattern of the row, start and stop included.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Caption printed under the bars.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check characters, empty when none were computed.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn left_text(&self) -> &str {
        &self.left_text
    }

    pub fn right_text(&self) -> &str {
        &self.right_text
    }

    pub fn supplement(&self) -> &str {
        &self.supplement
    }

    /// Width in modules.
    pub fn width(&self) -> u32 {
        module_width(&self.pattern)
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbology: {}, Text: {:?}, Checksum: {:?}, Width: {} }}",
            self.symbology,
            self.text,
            self.checksum,
            self.width()
        )
    }

    /// Appends the drawable elements of the (single) row to `out`.
    pub fn expand_into<E: RowExpander>(&self, expander: &E, out: &mut Vec<E::Element>) {
        expander.expand(&self.pattern, 0, out);
    }

    pub fn bars(&self) -> Vec<Bar> {
        let mut bars = Vec::new();
        self.expand_into(&BarExpander::default(), &mut bars);
        bars
    }
}

// Render
//------------------------------------------------------------------------------

impl Barcode {
    pub fn to_image(&self, module_sz: u32, height: u32) -> GrayImage {
        let mut canvas = GrayImage::from_pixel(self.width() * module_sz, height, Luma([255]));
        if module_sz == 0 || height == 0 {
            return canvas;
        }

        let mut bars = Vec::new();
        self.expand_into(&BarExpander::new(height), &mut bars);
        for bar in bars {
            let rect = Rect::at((bar.x * module_sz) as i32, bar.y as i32)
                .of_size(bar.width * module_sz, bar.height);
            draw_filled_rect_mut(&mut canvas, rect, Luma([0]));
        }

        canvas
    }

    pub fn to_str(&self, height: usize) -> String {
        let line = render::modules(&self.pattern).map(|dark| if dark { '█' } else { ' ' });
        let line = line.collect::<String>();

        let mut canvas = String::with_capacity((line.len() + 1) * height);
        for _ in 0..height {
            canvas.push_str(&line);
            canvas.push('\n');
        }
        canvas
    }
}
