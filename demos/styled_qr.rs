use std::error::Error;

use qrstyle::{Gradient, StyleBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "PAY|MERCHANT123";

    // Default look: dark red center fading to charcoal, logo.png if present
    let img = StyleBuilder::new(data).logo("logo.png").build()?;
    img.save("styled_qr.png")?;
    println!("Styled QR code saved to: styled_qr.png");

    // Custom gradient & smaller modules
    let img = StyleBuilder::new(data)
        .gradient(Gradient::from_hex("#0b3d91", "#101820")?)
        .module_size(8)
        .build()?;
    img.save("styled_qr_blue.png")?;
    println!("Styled QR code saved to: styled_qr_blue.png");

    Ok(())
}
