//! BER-TLV and COMPREHENSION-TLV decoding (ETSI TS 102.223 Annex C).
//!
//! Layered like the other decoders in this crate:
//! - `layout`: tag values and length-form constants
//! - `reader`: bounds-checked cursor and BER length parsing
//! - `comprehension`: single elements and element sequences
//! - `ber`: the outer envelope and its length cross-check
//! - `tag`: the catalogue of known element tags
//!
//! Only the one-byte length form and `0x81` followed by a byte of at least
//! `0x80` are accepted. Values are borrowed from the input buffer.

pub mod ber;
pub mod comprehension;
pub mod layout;
pub mod reader;
pub mod tag;

pub use ber::{BerTag, BerTlv};
pub use comprehension::{ComprehensionTlv, decode_at, decode_many};
pub use tag::ComprehensionTlvTag;
