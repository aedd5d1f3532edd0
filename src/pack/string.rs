//! String encoder
//!
//! Emits a length-prefixed byte string: fixstr, str 8, or str 16, whichever
//! is narrowest. MessagePack strings are UTF-8 by convention but this layer
//! is agnostic over the byte content; [`PackBuffer::pack_str`] is the UTF-8
//! convenience entry, [`PackBuffer::pack_str_bytes`] takes raw bytes.
//!
//! Capacity is checked for header and payload combined before anything is
//! written, so a string either lands whole or not at all.

use super::buffer::PackBuffer;
use super::endian;
use super::error::{Error, Result};
use super::format;

impl PackBuffer {
    /// Encode a UTF-8 string.
    pub fn pack_str(&mut self, val: &str) -> Result<()> {
        self.pack_str_bytes(val.as_bytes())
    }

    /// Encode a byte string verbatim under a str header.
    pub fn pack_str_bytes(&mut self, val: &[u8]) -> Result<()> {
        let payload = self.claim_str_payload(val.len())?;
        payload.copy_from_slice(val);
        Ok(())
    }

    /// Write a str header for `len` bytes and reserve the payload region
    /// without copying anything into it.
    ///
    /// Returns the reserved window for the caller to fill out-of-band; the
    /// cursor has already advanced past it, so the encoded stream is only
    /// well-formed once the caller has written all `len` bytes. The window's
    /// prior contents are left as-is.
    pub fn reserve_str(&mut self, len: usize) -> Result<&mut [u8]> {
        self.claim_str_payload(len)
    }

    /// Header dispatch shared by the copying and reserving entry points.
    /// Claims header plus payload in one step and returns the payload part.
    fn claim_str_payload(&mut self, len: usize) -> Result<&mut [u8]> {
        if len <= format::FIXSTR_MAX {
            let w = self.claim(1 + len)?;
            w[0] = format::FIXSTR | len as u8;
            Ok(&mut w[1..])
        } else if len <= format::STR8_MAX {
            let w = self.claim(2 + len)?;
            w[0] = format::STR8;
            w[1] = len as u8;
            Ok(&mut w[2..])
        } else if len <= format::STR16_MAX {
            let w = self.claim(3 + len)?;
            w[0] = format::STR16;
            endian::put_u16(&mut w[1..], len as u16);
            Ok(&mut w[3..])
        } else {
            Err(Error::StrTooLong { len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        let mut buf = PackBuffer::alloc(1).unwrap();
        buf.pack_str("").unwrap();
        assert_eq!(buf.as_slice(), &[0xA0]);
    }

    #[test]
    fn short_string() {
        let mut buf = PackBuffer::alloc(4).unwrap();
        buf.pack_str("abc").unwrap();
        assert_eq!(buf.as_slice(), &[0xA3, b'a', b'b', b'c']);
    }

    #[test]
    fn fixstr_to_str8_boundary() {
        let pattern: Vec<u8> = (0..32).map(|i| b'a' + (i % 26)).collect();

        let mut buf = PackBuffer::alloc(64).unwrap();
        buf.pack_str_bytes(&pattern[..31]).unwrap();
        assert_eq!(buf.len(), 32);
        assert_eq!(buf.as_slice()[0], 0xBF);
        assert_eq!(&buf.as_slice()[1..], &pattern[..31]);

        buf.clear();
        buf.pack_str_bytes(&pattern).unwrap();
        assert_eq!(buf.len(), 34);
        assert_eq!(&buf.as_slice()[..2], &[0xD9, 0x20]);
        assert_eq!(&buf.as_slice()[2..], &pattern[..]);
    }

    #[test]
    fn str8_to_str16_boundary() {
        let data = vec![b'x'; 256];

        let mut buf = PackBuffer::alloc(300).unwrap();
        buf.pack_str_bytes(&data[..255]).unwrap();
        assert_eq!(&buf.as_slice()[..2], &[0xD9, 0xFF]);

        buf.clear();
        buf.pack_str_bytes(&data).unwrap();
        assert_eq!(&buf.as_slice()[..3], &[0xDA, 0x01, 0x00]);
        assert_eq!(buf.len(), 3 + 256);
    }

    #[test]
    fn over_widest_tier_fails() {
        let data = vec![0u8; 0x1_0000];
        let mut buf = PackBuffer::alloc(8).unwrap();
        let err = buf.pack_str_bytes(&data).unwrap_err();
        assert!(matches!(err, Error::StrTooLong { len: 0x1_0000 }));
        assert!(buf.is_empty());
    }

    #[test]
    fn capacity_check_covers_header_and_payload() {
        // Header fits on its own but header + payload does not.
        let mut buf = PackBuffer::alloc(10).unwrap();
        let err = buf.pack_str_bytes(&[b'z'; 31]).unwrap_err();
        assert!(matches!(
            err,
            Error::Overflow {
                needed: 32,
                remaining: 10
            }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn non_utf8_bytes_pass_verbatim() {
        let mut buf = PackBuffer::alloc(4).unwrap();
        buf.pack_str_bytes(&[0xFF, 0x00, 0xFE]).unwrap();
        assert_eq!(buf.as_slice(), &[0xA3, 0xFF, 0x00, 0xFE]);
    }

    #[test]
    fn reserve_returns_fillable_window() {
        let mut buf = PackBuffer::alloc(8).unwrap();
        let window = buf.reserve_str(4).unwrap();
        assert_eq!(window.len(), 4);
        window.copy_from_slice(b"data");

        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_slice(), &[0xA4, b'd', b'a', b't', b'a']);
    }

    #[test]
    fn reserve_checks_full_footprint() {
        let mut buf = PackBuffer::alloc(40).unwrap();
        // str 8 header (2 bytes) + 39 payload bytes > 40
        let err = buf.reserve_str(39).unwrap_err();
        assert!(matches!(
            err,
            Error::Overflow {
                needed: 41,
                remaining: 40
            }
        ));
        assert!(buf.is_empty());
    }
}
