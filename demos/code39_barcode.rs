use std::error::Error;

use linbar::{BarcodeBuilder, Code39};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let data = "Linear barcode";

    let barcode = BarcodeBuilder::new(data)
        .symbology(Code39::new(true)) // Append the modulo 43 check character
        .build()?;

    print!("{}", barcode.to_str(8));
    println!("{}", barcode.text());
    println!("Barcode metadata: {}", barcode.metadata());

    Ok(())
}
