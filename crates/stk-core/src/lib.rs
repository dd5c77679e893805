//! STK core library for decoding SIM Application Toolkit proactive commands.
//!
//! This crate turns the raw bytes a UICC sends as a proactive command into a
//! typed description (ETSI TS 102.223): the BER-TLV envelope is decoded into
//! COMPREHENSION-TLV elements (`tlv`), the command header is resolved into a
//! `CommandType` (`command`), and icon metadata is read on demand (`icon`).
//! Decoding is byte-oriented, synchronous and side-effect free; wire offsets
//! live in `layout` modules and bounds-checked reads in `reader` modules so
//! parsers never index untrusted bytes directly.
//!
//! Invariants:
//! - Malformed input never panics; it yields a `ResultException` carrying the
//!   ETSI result code to report back to the card.
//! - A proactive command whose declared length disagrees with its elements is
//!   still decoded, with `BerTlv::is_length_valid()` returning `false`.
//! - Unknown command codes and unreadable icons are `None`, not errors.
//!
//! # Examples
//! ```
//! use stk_core::{BerTlv, CommandHeader, CommandType};
//!
//! let buffer = [0xD0, 0x09, 0x81, 0x03, 0x01, 0x21, 0x80, 0x82, 0x02, 0x81, 0x02];
//! let frame = BerTlv::decode(&buffer)?;
//! assert!(frame.is_length_valid());
//!
//! let header = CommandHeader::locate(&frame)?;
//! assert_eq!(header.command_type(), Some(CommandType::DisplayText));
//! # Ok::<(), stk_core::ResultException>(())
//! ```

use serde::{Deserialize, Serialize};

mod common;
pub mod command;
pub mod icon;
pub mod result;
mod summary;
pub mod tlv;

pub use command::{
    CommandDetails, CommandHeader, CommandParams, CommandPayload, CommandType, DeviceIdentities,
};
pub use icon::{IconId, ImageCodingScheme, ImageDescriptor};
pub use result::{InvalidResultException, ResultCode, ResultException};
pub use summary::summarize_command;
pub use tlv::{BerTag, BerTlv, ComprehensionTlv, ComprehensionTlvTag, decode_at, decode_many};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decode report over one or more command buffers, in input order.
///
/// # Examples
/// ```
/// use stk_core::{make_report, summarize_command};
///
/// let report = make_report(vec![summarize_command(&[0xD0, 0x00])]);
/// assert_eq!(report.report_version, stk_core::REPORT_VERSION);
/// assert_eq!(report.commands.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// One summary per input buffer.
    pub commands: Vec<CommandSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// How far decoding of one buffer got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Frame and command header decoded, lengths consistent.
    Decoded,
    /// Frame decoded but its declared length disagrees with its elements.
    LengthMismatch,
    /// Decoding failed; `result` holds the reason.
    Rejected,
}

/// Summary of one decode attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSummary {
    /// Input buffer as upper-case hex.
    pub input: String,
    pub outcome: Outcome,
    /// Outer envelope, when the frame decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ber_tag: Option<BerTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_valid: Option<bool>,
    /// Resolved command header, when COMMAND DETAILS could be decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderSummary>,
    /// Decoded elements in wire order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementSummary>,
    /// Failure reported for a rejected command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSummary {
    pub command_number: u8,
    pub type_of_command: u8,
    /// `None` for codes outside the known command set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_type: Option<CommandType>,
    pub command_qualifier: u8,
    pub comprehension_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_device: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_device: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSummary {
    /// Tag with the comprehension-required bit cleared.
    pub tag: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ComprehensionTlvTag>,
    pub comprehension_required: bool,
    pub length: usize,
    /// Value as upper-case hex.
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSummary {
    pub code: ResultCode,
    /// General result byte.
    pub value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<&ResultException> for ResultSummary {
    fn from(err: &ResultException) -> Self {
        Self {
            code: err.code(),
            value: err.code().value(),
            additional_info: err.additional_info(),
            explanation: err.explanation().map(str::to_string),
        }
    }
}

/// Wrap command summaries into a report with base fields filled.
pub fn make_report(commands: Vec<CommandSummary>) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "stk".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        commands,
    }
}
