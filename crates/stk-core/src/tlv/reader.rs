use crate::result::ResultException;

use super::layout;

/// Cursor over a command buffer with explicit bounds checks.
///
/// Reads past the end fail with `REQUIRED_VALUES_MISSING`; BER length fields
/// that use an encoding this profile does not allow fail with
/// `CMD_DATA_NOT_UNDERSTOOD`.
pub struct TlvReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> TlvReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn at(buffer: &'a [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn read_u8(&mut self) -> Result<u8, ResultException> {
        let byte = self.buffer.get(self.position).copied().ok_or_else(|| {
            ResultException::required_values_missing(format!(
                "buffer exhausted at offset {} (length {})",
                self.position,
                self.buffer.len()
            ))
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Reads a BER length: one byte below 0x80, or 0x81 followed by one byte
    /// of at least 0x80.
    pub fn read_length(&mut self) -> Result<usize, ResultException> {
        let first = self.read_u8()?;
        if first <= layout::SHORT_LENGTH_MAX {
            return Ok(first as usize);
        }
        if first != layout::LONG_LENGTH_ONE_BYTE {
            return Err(ResultException::cmd_data_not_understood(format!(
                "unsupported length modifier 0x{first:02X}"
            )));
        }
        let length = self.read_u8()?;
        if length < layout::LONG_LENGTH_MIN {
            return Err(ResultException::cmd_data_not_understood(format!(
                "long-form length 0x{length:02X} fits the short form"
            )));
        }
        Ok(length as usize)
    }

    /// Takes `len` bytes; a value that runs past the end of the buffer is
    /// malformed data rather than a missing header.
    pub fn read_value(&mut self, len: usize) -> Result<&'a [u8], ResultException> {
        let end = self
            .position
            .checked_add(len)
            .filter(|end| *end <= self.buffer.len())
            .ok_or_else(|| {
                ResultException::cmd_data_not_understood(format!(
                    "value of {len} bytes at offset {} overruns buffer of {} bytes",
                    self.position,
                    self.buffer.len()
                ))
            })?;
        let value = &self.buffer[self.position..end];
        self.position = end;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TlvReader;
    use crate::result::ResultCode;

    #[test]
    fn read_u8_past_end() {
        let mut reader = TlvReader::new(&[0x01]);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        let err = reader.read_u8().unwrap_err();
        assert_eq!(err.code(), ResultCode::RequiredValuesMissing);
    }

    #[test]
    fn read_short_length() {
        let mut reader = TlvReader::new(&[0x7F]);
        assert_eq!(reader.read_length().unwrap(), 0x7F);
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn read_long_length() {
        let mut reader = TlvReader::new(&[0x81, 0x80]);
        assert_eq!(reader.read_length().unwrap(), 0x80);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn long_length_below_threshold() {
        let mut reader = TlvReader::new(&[0x81, 0x05]);
        let err = reader.read_length().unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
    }

    #[test]
    fn unsupported_length_modifier() {
        for first in [0x80u8, 0x82, 0x83, 0xFF] {
            let buffer = [first, 0x01, 0x00];
            let mut reader = TlvReader::new(&buffer);
            let err = reader.read_length().unwrap_err();
            assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood, "0x{first:02X}");
        }
    }

    #[test]
    fn truncated_long_length() {
        let mut reader = TlvReader::new(&[0x81]);
        let err = reader.read_length().unwrap_err();
        assert_eq!(err.code(), ResultCode::RequiredValuesMissing);
    }

    #[test]
    fn read_value_overrun() {
        let mut reader = TlvReader::at(&[0x00, 0x01, 0x02], 1);
        assert_eq!(reader.remaining(), 2);
        let err = reader.read_value(3).unwrap_err();
        assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
        assert_eq!(reader.read_value(2).unwrap(), &[0x01, 0x02]);
    }
}
