use tracing::debug;

use crate::command::CommandHeader;
use crate::common::hex_upper;
use crate::tlv::{BerTlv, ComprehensionTlv};
use crate::{CommandSummary, ElementSummary, HeaderSummary, Outcome, ResultSummary};

/// Decodes one command buffer into a report entry.
///
/// Never fails: a buffer that cannot be decoded yields a `Rejected` summary
/// carrying the result code the terminal would answer with.
///
/// # Examples
/// ```
/// use stk_core::{Outcome, summarize_command};
///
/// let summary = summarize_command(&[0xD0, 0x05, 0x81, 0x03, 0x01, 0x21, 0x80]);
/// assert_eq!(summary.outcome, Outcome::Decoded);
/// assert_eq!(summary.elements.len(), 1);
///
/// let summary = summarize_command(&[0xD0]);
/// assert_eq!(summary.outcome, Outcome::Rejected);
/// ```
pub fn summarize_command(buffer: &[u8]) -> CommandSummary {
    let input = hex_upper(buffer);
    let frame = match BerTlv::decode(buffer) {
        Ok(frame) => frame,
        Err(err) => {
            debug!(%err, "command rejected while decoding frame");
            return CommandSummary {
                input,
                outcome: Outcome::Rejected,
                ber_tag: None,
                length_valid: None,
                header: None,
                elements: Vec::new(),
                result: Some(ResultSummary::from(&err)),
            };
        }
    };

    let elements = frame.elements().iter().map(summarize_element).collect();
    let (outcome, header, result) = match CommandHeader::locate(&frame) {
        Ok(header) if frame.is_length_valid() => (Outcome::Decoded, Some(header), None),
        Ok(header) => (Outcome::LengthMismatch, Some(header), None),
        Err(err) => {
            debug!(%err, "command rejected while locating header");
            (Outcome::Rejected, None, Some(ResultSummary::from(&err)))
        }
    };

    CommandSummary {
        input,
        outcome,
        ber_tag: Some(frame.tag()),
        length_valid: Some(frame.is_length_valid()),
        header: header.map(summarize_header),
        elements,
        result,
    }
}

fn summarize_header(header: CommandHeader) -> HeaderSummary {
    let details = header.details;
    HeaderSummary {
        command_number: details.command_number,
        type_of_command: details.type_of_command,
        command_type: details.command_type(),
        command_qualifier: details.command_qualifier,
        comprehension_required: details.comprehension_required,
        source_device: header.device_identities.map(|ids| ids.source),
        destination_device: header.device_identities.map(|ids| ids.destination),
    }
}

fn summarize_element(tlv: &ComprehensionTlv<'_>) -> ElementSummary {
    ElementSummary {
        tag: tlv.tag(),
        name: tlv.known_tag(),
        comprehension_required: tlv.comprehension_required(),
        length: tlv.length(),
        value: hex_upper(tlv.value()),
    }
}
