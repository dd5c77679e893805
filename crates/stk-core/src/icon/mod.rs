//! Icon metadata decoding.
//!
//! `descriptor` parses the fixed 9-byte image descriptor found in EF(IMG)
//! records; `icon_id` decodes the ICON IDENTIFIER element of a command.
//! Descriptor reads that fall outside the buffer yield `None` so a broken icon
//! never aborts the command it decorates. Bitmap bodies are not decoded here.

pub mod descriptor;
pub mod icon_id;
pub mod layout;
pub mod reader;

pub use descriptor::{ImageCodingScheme, ImageDescriptor};
pub use icon_id::IconId;
