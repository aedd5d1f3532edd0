//! MessagePack wire markers and tier limits
//!
//! Marker values are fixed by the MessagePack specification. Tests and
//! decoding peers should reference these names rather than repeating the
//! literals.

/// Largest value a positive fixint can carry (the marker is the value)
pub const POS_FIXINT_MAX: u8 = 0x7F;
/// Smallest value a negative fixint can carry (two's-complement in one byte)
pub const NEG_FIXINT_MIN: i8 = -32;

/// fixmap marker base; the low nibble carries the pair count
pub const FIXMAP: u8 = 0x80;
/// fixarray marker base; the low nibble carries the element count
pub const FIXARRAY: u8 = 0x90;
/// fixstr marker base; the low five bits carry the byte length
pub const FIXSTR: u8 = 0xA0;

/// nil
pub const NIL: u8 = 0xC0;
/// boolean false
pub const FALSE: u8 = 0xC2;
/// boolean true
pub const TRUE: u8 = 0xC3;

/// float 32: four-byte big-endian IEEE-754 payload
pub const FLOAT32: u8 = 0xCA;

/// uint 8
pub const UINT8: u8 = 0xCC;
/// uint 16
pub const UINT16: u8 = 0xCD;
/// uint 32
pub const UINT32: u8 = 0xCE;
/// uint 64
pub const UINT64: u8 = 0xCF;

/// int 8
pub const INT8: u8 = 0xD0;
/// int 16
pub const INT16: u8 = 0xD1;
/// int 32
pub const INT32: u8 = 0xD2;
/// int 64
pub const INT64: u8 = 0xD3;

/// str 8: one-byte length field
pub const STR8: u8 = 0xD9;
/// str 16: two-byte big-endian length field
pub const STR16: u8 = 0xDA;

/// array 16: two-byte big-endian element count
pub const ARRAY16: u8 = 0xDC;

/// map 16: two-byte big-endian pair count
pub const MAP16: u8 = 0xDE;
/// map 32: four-byte big-endian pair count
pub const MAP32: u8 = 0xDF;

/// Largest element count a fixarray header can carry
pub const FIXARRAY_MAX: usize = 0x0F;
/// Largest element count an array 16 header can carry
pub const ARRAY16_MAX: usize = 0xFFFF;

/// Largest pair count a fixmap header can carry
pub const FIXMAP_MAX: usize = 0x0F;
/// Largest pair count a map 16 header can carry
pub const MAP16_MAX: usize = 0xFFFF;
/// Largest pair count a map 32 header can carry
pub const MAP32_MAX: usize = 0xFFFF_FFFF;

/// Largest byte length a fixstr header can carry
pub const FIXSTR_MAX: usize = 31;
/// Largest byte length a str 8 header can carry
pub const STR8_MAX: usize = 0xFF;
/// Largest byte length a str 16 header can carry
pub const STR16_MAX: usize = 0xFFFF;
