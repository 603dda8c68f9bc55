//! lopdf-level composition helpers shared by the PDF tools.
//!
//! Two concerns live here:
//! - `xobject`: decoding a PNG into PDF image XObjects (DeviceRGB samples
//!   plus a DeviceGray soft mask for alpha)
//! - `stamp`: overlaying a logo onto every page of an existing PDF

pub mod error;
pub mod stamp;
pub mod xobject;

pub use error::ComposeError;
pub use stamp::{stamp_document, Placement};
pub use xobject::LogoImage;
