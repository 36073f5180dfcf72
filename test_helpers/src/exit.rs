//! Recording stand-in for the process exit callback.
//!
//! Code under test that expects the callback never to return panics once it
//! does. Run it inside [`run_to_exit`] to observe both the recorded status
//! and the panic message.
//!
//! # Examples
//!
//! ```
//! use test_helpers::exit::{ExitRecorder, run_to_exit};
//!
//! let recorder = ExitRecorder::new();
//! let mut exit = recorder.callback();
//! let outcome: Result<(), String> = run_to_exit(|| {
//!     exit(2);
//!     panic!("exit returned")
//! });
//! assert_eq!(recorder.status(), Some(2));
//! assert_eq!(outcome.unwrap_err(), "exit returned");
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

/// Remembers the status passed to the exit callback.
#[derive(Debug, Clone, Default)]
pub struct ExitRecorder {
    status: Arc<Mutex<Option<i32>>>,
}

impl ExitRecorder {
    /// Creates a recorder that has seen no exit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback storing its argument in this recorder.
    #[must_use]
    pub fn callback(&self) -> Box<dyn FnMut(i32)> {
        let status = Arc::clone(&self.status);
        Box::new(move |code| {
            *status.lock() = Some(code);
        })
    }

    /// Status passed to the most recent callback invocation.
    #[must_use]
    pub fn status(&self) -> Option<i32> {
        *self.status.lock()
    }
}

/// Runs `f`, returning its result or the message it panicked with.
///
/// # Errors
///
/// Returns the panic message when `f` panics.
pub fn run_to_exit<F, R>(f: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(&*payload))
}

/// Extracts the message carried by a panic payload.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|text| (*text).to_owned()))
        .unwrap_or_default()
}
