use std::error::Error;

use linbar::{BarcodeBuilder, CheckDigits, Code11};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=linbar=debug shows each encoding stage
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let barcode = BarcodeBuilder::new("123-45")
        .symbology(Code11::new(CheckDigits::Two)) // if not provided, defaults to one check digit
        .build()?;

    print!("{}", barcode.to_str(8));
    println!("{}", barcode.text());
    println!("Checksum: {}", barcode.checksum());
    println!("Pattern: {}", barcode.pattern());

    // Convert to image and save
    let img = barcode.to_image(3, 120); // 3 pixels per module, 120 pixels tall
    img.save("code11.png")?;

    println!("Code 11 barcode saved to: code11.png");
    Ok(())
}
