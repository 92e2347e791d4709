//! Shared test helpers for `menuslot-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! scheduling tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod clock;
pub mod repositories;
pub mod rules;
