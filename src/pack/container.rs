//! Array and map header encoders
//!
//! Only the count-prefixed header is emitted; the elements themselves are
//! whatever the caller encodes next. The packer does not track open
//! containers, so a header promising `n` elements followed by a different
//! number of values produces a malformed stream. That contract stays with
//! the caller.

use super::buffer::PackBuffer;
use super::endian;
use super::error::{Error, Result};
use super::format;

impl PackBuffer {
    /// Encode an array header for `len` elements.
    ///
    /// The caller must follow with exactly `len` encoded values. Counts
    /// above 65535 have no supported wire format and fail with
    /// [`Error::ArrayTooLong`].
    pub fn pack_array_header(&mut self, len: usize) -> Result<()> {
        if len <= format::FIXARRAY_MAX {
            let w = self.claim(1)?;
            w[0] = format::FIXARRAY | len as u8;
        } else if len <= format::ARRAY16_MAX {
            let w = self.claim(3)?;
            w[0] = format::ARRAY16;
            endian::put_u16(&mut w[1..], len as u16);
        } else {
            return Err(Error::ArrayTooLong { len });
        }
        Ok(())
    }

    /// Encode a map header for `len` key-value pairs.
    ///
    /// The caller must follow with exactly `2 * len` encoded values,
    /// alternating key and value. Counts above 4294967295 fail with
    /// [`Error::MapTooLong`].
    pub fn pack_map_header(&mut self, len: usize) -> Result<()> {
        if len <= format::FIXMAP_MAX {
            let w = self.claim(1)?;
            w[0] = format::FIXMAP | len as u8;
        } else if len <= format::MAP16_MAX {
            let w = self.claim(3)?;
            w[0] = format::MAP16;
            endian::put_u16(&mut w[1..], len as u16);
        } else if len <= format::MAP32_MAX {
            let w = self.claim(5)?;
            w[0] = format::MAP32;
            endian::put_u32(&mut w[1..], len as u32);
        } else {
            return Err(Error::MapTooLong { len });
        }
        Ok(())
    }
}
