//! Collection scheduling domain
//!
//! Leaves first: `activation` and `overlap` share the window arithmetic,
//! `winner` and `fallback` order rules, `resolver` combines them over one
//! business's rule list, `service` adds the repository and clock ports.

pub mod activation;
pub mod fallback;
pub mod overlap;
pub mod ports;
pub mod resolver;
pub mod service;
pub mod winner;

pub use activation::is_active;
pub use fallback::{fallback, select_fallback};
pub use overlap::{days_overlap, has_overlap, overlapping_rules, times_overlap};
pub use resolver::{resolve, resolve_collections};
pub use service::ScheduleService;
pub use winner::pick_winner;

#[cfg(test)]
pub(crate) mod test_support;
