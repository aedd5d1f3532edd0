//! Fixed-capacity packer buffer

use bytes::Bytes;
use tracing::trace;

use super::error::{Error, Result};

/// Owned, fixed-capacity byte buffer with a write cursor.
///
/// A `PackBuffer` is the only stateful entity in the packer: every encoder
/// takes `&mut self` and shares nothing but the cursor/capacity pair. The
/// capacity is fixed at allocation and never grows; an encode that does not
/// fit is rejected whole, leaving the cursor and contents untouched.
///
/// Lifecycle: allocate, issue any sequence of `pack_*` calls, then read the
/// wire image via [`as_slice`](Self::as_slice) or take ownership of it via
/// [`freeze`](Self::freeze). Reuse for a fresh message is a
/// [`clear`](Self::clear).
///
/// The buffer is not synchronized; it assumes a single logical writer for
/// its entire lifetime, which `&mut self` receivers enforce at compile time.
#[derive(Debug)]
pub struct PackBuffer {
    storage: Box<[u8]>,
    cursor: usize,
}

impl PackBuffer {
    /// Allocate a zero-initialized buffer of exactly `capacity` bytes.
    ///
    /// Fails with [`Error::Alloc`] when the allocator refuses the request;
    /// a buffer is never partially constructed.
    pub fn alloc(capacity: usize) -> Result<Self> {
        let mut storage = Vec::new();
        if storage.try_reserve_exact(capacity).is_err() {
            return Err(Error::Alloc { capacity });
        }
        storage.resize(capacity, 0);
        trace!(capacity, "packer buffer allocated");
        Ok(Self {
            storage: storage.into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Number of bytes written so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cursor
    }

    /// Check whether any bytes have been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Total capacity, fixed at allocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes still available for encoding.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.cursor
    }

    /// The written region, `[0, len)`.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.cursor]
    }

    /// Reset the cursor so the buffer can encode a fresh message.
    ///
    /// Storage is retained and not cleared; only the written region is
    /// meaningful.
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Consume the buffer, returning the written region as an immutable
    /// [`Bytes`] handle without copying.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        let mut data = self.storage.into_vec();
        data.truncate(self.cursor);
        Bytes::from(data)
    }

    /// Claim the next `needed` bytes for an encoder to fill.
    ///
    /// This is the single bounds check every encoder funnels through: on
    /// success the cursor advances by exactly `needed` and the claimed
    /// window is returned; on overflow nothing changes. Callers must fill
    /// the whole window.
    pub(crate) fn claim(&mut self, needed: usize) -> Result<&mut [u8]> {
        // Compared against the remainder so the check cannot wrap.
        let remaining = self.remaining();
        if needed > remaining {
            trace!(needed, remaining, "encode rejected, insufficient capacity");
            return Err(Error::Overflow { needed, remaining });
        }
        let start = self.cursor;
        self.cursor += needed;
        Ok(&mut self.storage[start..self.cursor])
    }
}
