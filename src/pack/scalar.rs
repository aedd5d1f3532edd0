//! Float, boolean, and nil encoders

use super::buffer::PackBuffer;
use super::endian;
use super::error::Result;
use super::format;

impl PackBuffer {
    /// Encode a single-precision float: marker `0xCA` followed by the
    /// value's IEEE-754 bit pattern in big-endian order.
    ///
    /// The bit pattern is carried verbatim; negative zero and NaN payloads
    /// survive bit-for-bit. There is no double-precision format.
    pub fn pack_f32(&mut self, val: f32) -> Result<()> {
        let w = self.claim(5)?;
        w[0] = format::FLOAT32;
        endian::put_u32(&mut w[1..], val.to_bits());
        Ok(())
    }

    /// Encode a boolean: one byte, `0xC3` for true, `0xC2` for false.
    pub fn pack_bool(&mut self, val: bool) -> Result<()> {
        let w = self.claim(1)?;
        w[0] = if val { format::TRUE } else { format::FALSE };
        Ok(())
    }

    /// Encode nil: one byte, `0xC0`.
    pub fn pack_nil(&mut self) -> Result<()> {
        let w = self.claim(1)?;
        w[0] = format::NIL;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::error::Error;
    use super::*;

    #[test]
    fn float_one() {
        let mut buf = PackBuffer::alloc(5).unwrap();
        buf.pack_f32(1.0).unwrap();
        assert_eq!(buf.as_slice(), &[0xCA, 0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn float_negative_zero_keeps_sign_bit() {
        let mut buf = PackBuffer::alloc(5).unwrap();
        buf.pack_f32(-0.0).unwrap();
        assert_eq!(buf.as_slice(), &[0xCA, 0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn float_nan_payload_passes_through() {
        let mut buf = PackBuffer::alloc(5).unwrap();
        buf.pack_f32(f32::from_bits(0x7FC0_1234)).unwrap();
        assert_eq!(buf.as_slice(), &[0xCA, 0x7F, 0xC0, 0x12, 0x34]);
    }

    #[test]
    fn bool_markers() {
        let mut buf = PackBuffer::alloc(2).unwrap();
        buf.pack_bool(true).unwrap();
        buf.pack_bool(false).unwrap();
        assert_eq!(buf.as_slice(), &[0xC3, 0xC2]);
    }

    #[test]
    fn nil_marker() {
        let mut buf = PackBuffer::alloc(1).unwrap();
        buf.pack_nil().unwrap();
        assert_eq!(buf.as_slice(), &[0xC0]);
    }

    #[test]
    fn float_overflow_leaves_cursor_unchanged() {
        let mut buf = PackBuffer::alloc(4).unwrap();
        let err = buf.pack_f32(1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::Overflow {
                needed: 5,
                remaining: 4
            }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn full_buffer_rejects_single_byte_formats() {
        let mut buf = PackBuffer::alloc(1).unwrap();
        buf.pack_nil().unwrap();
        assert!(matches!(buf.pack_nil(), Err(Error::Overflow { .. })));
        assert!(matches!(buf.pack_bool(true), Err(Error::Overflow { .. })));
        assert_eq!(buf.len(), 1);
    }
}
