//! Infrastructure error handling
//!
//! Adapters convert third-party errors here so `menuslot-core` only ever
//! sees `MenuSlotError`.

pub mod conversions;

pub use conversions::InfraError;
