//! # qrstyle
//!
//! A Rust library for rendering stylized QR codes that stay scannable. Data modules are drawn
//! as dots colored by a two-color radial gradient, the three corner eyes are redrawn with
//! rounded geometry, a disk at the center is kept free of dots and an optional logo is
//! composited into it.
//!
//! ## Features
//!
//! - **Radial gradient**: Module colors interpolate from a center color to an edge color by
//!   distance from the canvas center
//! - **Dot modules**: Every data module becomes a filled circle in its gradient color
//! - **Rounded corner eyes**: Outer rounded square, white inset and a center dot, each tinted by
//!   its own position
//! - **Logo clearance**: A central disk sized from the canvas is reserved for the logo
//! - **Logo compositing**: Aspect-preserving downscale, alpha-aware paste, graceful fallback
//!   when the logo is missing or unreadable
//! - **Batch rendering**: One PNG per code, rendered in parallel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qrstyle::StyleBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = StyleBuilder::new("PAY|MERCHANT123").build()?;
//! img.save("styled_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom configuration
//!
//! ```rust,no_run
//! use qrstyle::{Gradient, StyleBuilder, StyleConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StyleConfig {
//!     gradient: Gradient::from_hex("#0b3d91", "#111111")?,
//!     module_size: 12,
//!     ..StyleConfig::default()
//! };
//! let img = StyleBuilder::new("https://example.com")
//!     .config(config)
//!     .logo("logo.png")  // Skipped silently if the file does not exist
//!     .build()?;
//! img.save("custom_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Render pipeline
//!
//! Each render runs the stages in a fixed order, every stage producing a new full image:
//!
//! 1. **Encode**: payload to module matrix via the `qrcode` crate, error correction level H
//! 2. **Base render**: plain black on white image with a 4 module quiet zone
//! 3. **Gradient**: dark pixels recolored by distance from the center
//! 4. **Rasterize**: corner eyes drawn first, then one dot per dark module outside the corner
//!    eyes and the clearance disk
//! 5. **Logo**: optional, centered in the clearance disk
//!
//! Geometry is validated before rasterizing: a module grid too small for three corner eyes, or
//! a clearance disk reaching one of them, is rejected with
//! [`StyleError::GeometryInconsistency`].

pub mod batch;
pub mod builder;
pub mod common;
pub mod render;

pub use batch::{BatchJob, BatchReport};
pub use builder::StyleBuilder;
pub use common::{
    interpolate, parse_hex_color, Geometry, Gradient, ModuleMatrix, StyleConfig, StyleError,
    StyleResult,
};
pub use qrcode::EcLevel;
