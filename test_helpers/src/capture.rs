//! In-memory writers standing in for the process output streams.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use test_helpers::capture::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let mut writer: Box<dyn Write> = Box::new(buffer.clone());
//! writer.write_all(b"hello").unwrap();
//! assert_eq!(buffer.contents(), "hello");
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable writer whose clones append to the same buffer.
///
/// Hand one clone to the code under test and keep another to inspect what
/// was written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
