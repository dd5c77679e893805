/// Reads fields of a fixed-size structure located at `base` in a buffer.
///
/// Icon data is best effort, so out-of-range reads yield `None` instead of an
/// error.
pub struct IconReader<'a> {
    buffer: &'a [u8],
    base: usize,
}

impl<'a> IconReader<'a> {
    pub fn new(buffer: &'a [u8], base: usize) -> Self {
        Self { buffer, base }
    }

    pub fn require_len(&self, needed: usize) -> Option<()> {
        let end = self.base.checked_add(needed)?;
        (end <= self.buffer.len()).then_some(())
    }

    pub fn read_u8(&self, offset: usize) -> Option<u8> {
        let index = self.base.checked_add(offset)?;
        self.buffer.get(index).copied()
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Option<u16> {
        let bytes = self.read_slice(range)?;
        match bytes {
            [high, low] => Some(u16::from_be_bytes([*high, *low])),
            _ => None,
        }
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Option<&'a [u8]> {
        let start = self.base.checked_add(range.start)?;
        let end = self.base.checked_add(range.end)?;
        self.buffer.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::IconReader;

    #[test]
    fn reads_relative_to_base() {
        let buffer = [0xAA, 0x01, 0x02, 0x03];
        let reader = IconReader::new(&buffer, 1);
        assert_eq!(reader.read_u8(0), Some(0x01));
        assert_eq!(reader.read_u16_be(1..3), Some(0x0203));
        assert_eq!(reader.read_u8(3), None);
    }

    #[test]
    fn overflowing_base_is_none() {
        let buffer = [0u8; 4];
        let reader = IconReader::new(&buffer, usize::MAX);
        assert_eq!(reader.read_u8(1), None);
        assert_eq!(reader.require_len(1), None);
    }
}
