//! # linbar
//!
//! A Rust library for generating linear (1D) barcodes. Every symbology is a table-driven
//! encoder: the message is validated against the symbology's alphabet and length limit,
//! check characters are computed from the alphabet indices, and the data patterns are
//! framed between start and stop patterns into a single bar/space run-length pattern.
//!
//! ## Features
//!
//! - **Code 11**: digits and dash, with zero, one (C) or two (C and K) check digits
//! - **Code 39**: upper case alphanumerics and `- . $ / + %` plus space, with an optional
//!   modulo 43 check character
//! - **Row expansion**: turn the run-length pattern into drawable bars, or plug in your
//!   own [`RowExpander`]
//! - **Rendering**: grayscale image or terminal preview of the bars
//!
//! ## Quick Start
//!
//! ### Code 11
//!
//! ```rust
//! use linbar::{BarcodeBuilder, CheckDigits, Code11};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = BarcodeBuilder::new("135")
//!     .symbology(Code11::new(CheckDigits::Two)) // if not provided, defaults to Code 11 with one check digit
//!     .build()?;
//!
//! assert_eq!(barcode.text(), "135");
//! assert_eq!(barcode.checksum(), "34");
//! assert!(barcode.pattern().starts_with("113311"));
//!
//! let img = barcode.to_image(2, 60); // 2 pixels per module, 60 pixels tall
//! assert_eq!(img.width(), barcode.width() * 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Code 39
//!
//! ```rust
//! use linbar::{BarcodeBuilder, Code39};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = BarcodeBuilder::new("code39")
//!     .symbology(Code39::new(true)) // lower case input is folded to upper case
//!     .build()?;
//!
//! assert_eq!(barcode.text(), "*CODE39W*");
//! # Ok(())
//! # }
//! ```
//!
//! ### Errors
//!
//! Encoding fails only on invalid input, before any pattern is produced.
//!
//! ```rust
//! use linbar::{BarcodeBuilder, BarcodeError};
//!
//! let err = BarcodeBuilder::new("12A").build().unwrap_err();
//! assert_eq!(err, BarcodeError::InvalidData { ch: 'A', pos: 2 });
//!
//! let long = "1".repeat(122);
//! let err = BarcodeBuilder::new(&long).build().unwrap_err();
//! assert_eq!(err, BarcodeError::InvalidDataLength { len: 122, max: 121 });
//! ```
//!
//! ## Row Patterns
//!
//! A row pattern is a string of single digit element widths in modules, starting with a
//! bar and alternating bar and space. Code 11 `"135"` with one check digit encodes to
//!
//! ```text
//! 113311 311131 331111 313111 331111 113311
//! start  1      3      5      C=3    stop
//! ```

pub mod builder;
pub(crate) mod common;
pub mod render;
pub mod symbology;

pub use builder::{encode, Barcode, BarcodeBuilder};
pub use common::{decode_message, Alphabet, BarcodeError, BarcodeResult, PatternTable};
pub use render::{Bar, BarExpander, RowExpander};
pub use symbology::{CheckDigits, Code11, Code39, LinearSymbology, Symbology};
