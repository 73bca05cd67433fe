//! Process-wide pool of scratch `String` buffers used while assembling console blocks.
//!
//! Buffers are cleared before they go back on the free list, and the guard returns
//! them from `Drop`, so a buffer is released even when the caller unwinds.

use once_cell::sync::Lazy;
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

const MAX_POOLED: usize = 32;
const MAX_RETAINED_CAPACITY: usize = 4 * 1024;

static POOL: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Borrowed scratch buffer; returned to the pool when dropped
pub struct PooledBuffer {
    buf: String,
}

/// Take a buffer from the pool, or allocate a new one when the pool is empty
pub fn acquire() -> PooledBuffer {
    let buf = {
        let mut free = POOL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        free.pop()
    };

    PooledBuffer {
        buf: buf.unwrap_or_default(),
    }
}

/// Number of idle buffers currently held by the pool
pub fn idle_count() -> usize {
    POOL.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .len()
}

impl Deref for PooledBuffer {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            buf.shrink_to(MAX_RETAINED_CAPACITY);
        }

        let mut free = POOL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if free.len() < MAX_POOLED {
            free.push(buf);
        }
    }
}
