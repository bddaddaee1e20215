//! The fatal path shared by every C entry point.
//!
//! Contract violations end the process: the message is logged at error
//! level, written to stderr, and the process aborts. Rust panics raised
//! below an entry point are caught and take the same path, so no unwind
//! ever crosses into C.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::FfiError;

/// Report `message` and abort.
#[cold]
pub(crate) fn fatal(message: &str) -> ! {
    log::error!("fatal: {message}");
    eprintln!("tessel: fatal: {message}");
    std::process::abort()
}

/// Abort if `result` is an error.
pub(crate) fn or_fatal<T>(result: Result<T, FfiError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => fatal(&e.to_string()),
    }
}

/// Run an entry point body, aborting instead of unwinding into C.
pub(crate) fn guard<R>(body: impl FnOnce() -> Result<R, FfiError>) -> R {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => or_fatal(result),
        Err(payload) => fatal(&panic_message(payload.as_ref())),
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_bodies_pass_through() {
        assert_eq!(guard(|| Ok(7)), 7);
    }

    #[test]
    fn panic_payloads_are_readable() {
        let payload = catch_unwind(|| panic!("slot {} missing", 3)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "slot 3 missing");
        let payload = catch_unwind(|| panic!("plain")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "plain");
    }
}
