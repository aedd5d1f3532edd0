//! upack - bounded-buffer MessagePack encoder
//!
//! This library serializes primitive values and container headers into the
//! MessagePack wire format, writing into a caller-sized buffer that never
//! grows. It is built for targets that budget memory up front: the caller
//! estimates a capacity, allocates one [`PackBuffer`], and every encode call
//! either fits completely or is rejected with the buffer left untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use upack::PackBuffer;
//!
//! let mut buf = PackBuffer::alloc(64)?;
//!
//! // {"temp": 21.5, "ok": true}
//! buf.pack_map_header(2)?;
//! buf.pack_str("temp")?;
//! buf.pack_f32(21.5)?;
//! buf.pack_str("ok")?;
//! buf.pack_bool(true)?;
//!
//! assert_eq!(buf.as_slice()[0], 0x82); // fixmap, 2 pairs
//!
//! // Hand the finished wire image off without copying
//! let wire = buf.freeze();
//! assert_eq!(wire.len(), 15);
//! # Ok::<(), upack::Error>(())
//! ```
//!
//! # Features
//!
//! - **Fixed-capacity buffer** - one allocation up front and an exact bounds
//!   check on every encode; writes are all-or-nothing
//! - **Canonical minimal encoding** - every value is emitted in the narrowest
//!   wire format that represents it losslessly
//! - **Deterministic output** - identical bytes on little- and big-endian hosts
//!
//! # Wire Format
//!
//! The emitted bytes follow the MessagePack specification; see
//! [`pack::format`] for the supported markers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
// Truncating casts below are format selection: every `as` narrowing sits
// behind a range check that guarantees the value fits.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod pack;

pub use pack::{Error, MAX_SCALAR_BYTES, PackBuffer, Result};
