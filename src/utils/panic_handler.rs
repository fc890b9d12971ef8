//! Panic containment for audio host calls.
//!
//! Some audio host backends panic while probing devices instead of returning
//! an error. Opening the output stream goes through here so a bad device
//! leaves the game running without sound.

use std::panic::{catch_unwind, AssertUnwindSafe};

pub type PanicResult<T> = Result<T, String>;

/// Run `f`, turning a panic into `Err(message)`.
///
/// Uses `AssertUnwindSafe`; only wrap calls whose captured state is
/// discarded on failure.
pub fn catch_panic_mut<F, T>(f: F) -> PanicResult<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => Ok(result),
        Err(panic_info) => {
            let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in audio backend".to_string()
            };

            log::error!("Caught panic: {}", message);
            Err(message)
        }
    }
}
