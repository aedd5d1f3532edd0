//! Integer encoders
//!
//! Two families, unsigned and signed, each selecting the narrowest wire
//! format that represents the value losslessly. Selection is recomputed on
//! every call: a 64-bit entry point handed a value that fits a narrower
//! format emits the narrower format. That makes the output canonical and
//! deterministic regardless of which entry point the caller picked.

use super::buffer::PackBuffer;
use super::endian;
use super::error::Result;
use super::format;

impl PackBuffer {
    /// Encode an unsigned 8-bit integer.
    pub fn pack_u8(&mut self, val: u8) -> Result<()> {
        self.pack_u64(u64::from(val))
    }

    /// Encode an unsigned 16-bit integer.
    pub fn pack_u16(&mut self, val: u16) -> Result<()> {
        self.pack_u64(u64::from(val))
    }

    /// Encode an unsigned 32-bit integer.
    pub fn pack_u32(&mut self, val: u32) -> Result<()> {
        self.pack_u64(u64::from(val))
    }

    /// Encode an unsigned 64-bit integer in the narrowest format that
    /// holds it: positive fixint, then uint 8/16/32/64.
    pub fn pack_u64(&mut self, val: u64) -> Result<()> {
        if val <= u64::from(format::POS_FIXINT_MAX) {
            let w = self.claim(1)?;
            w[0] = val as u8;
        } else if val <= 0xFF {
            let w = self.claim(2)?;
            w[0] = format::UINT8;
            w[1] = val as u8;
        } else if val <= 0xFFFF {
            let w = self.claim(3)?;
            w[0] = format::UINT16;
            endian::put_u16(&mut w[1..], val as u16);
        } else if val <= 0xFFFF_FFFF {
            let w = self.claim(5)?;
            w[0] = format::UINT32;
            endian::put_u32(&mut w[1..], val as u32);
        } else {
            let w = self.claim(9)?;
            w[0] = format::UINT64;
            endian::put_u64(&mut w[1..], val);
        }
        Ok(())
    }

    /// Encode a signed 8-bit integer.
    pub fn pack_i8(&mut self, val: i8) -> Result<()> {
        self.pack_i64(i64::from(val))
    }

    /// Encode a signed 16-bit integer.
    pub fn pack_i16(&mut self, val: i16) -> Result<()> {
        self.pack_i64(i64::from(val))
    }

    /// Encode a signed 32-bit integer.
    pub fn pack_i32(&mut self, val: i32) -> Result<()> {
        self.pack_i64(i64::from(val))
    }

    /// Encode a signed 64-bit integer in the narrowest format that holds
    /// it. Non-negative values use the unsigned formats; negative values
    /// use negative fixint, then int 8/16/32/64.
    pub fn pack_i64(&mut self, val: i64) -> Result<()> {
        if val >= 0 {
            return self.pack_u64(val as u64);
        }

        if val >= i64::from(format::NEG_FIXINT_MIN) {
            let w = self.claim(1)?;
            // Two's-complement in one byte; the top three bits are 111.
            w[0] = val as u8;
        } else if val >= i64::from(i8::MIN) {
            let w = self.claim(2)?;
            w[0] = format::INT8;
            w[1] = val as u8;
        } else if val >= i64::from(i16::MIN) {
            let w = self.claim(3)?;
            w[0] = format::INT16;
            endian::put_u16(&mut w[1..], val as u16);
        } else if val >= i64::from(i32::MIN) {
            let w = self.claim(5)?;
            w[0] = format::INT32;
            endian::put_u32(&mut w[1..], val as u32);
        } else {
            let w = self.claim(9)?;
            w[0] = format::INT64;
            endian::put_u64(&mut w[1..], val as u64);
        }
        Ok(())
    }
}
