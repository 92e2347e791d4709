//! Helpers shared by unit tests in this crate

use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Serialises tests that read or write process environment variables.
pub(crate) static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
