//! Test support for service-level tests.

pub mod helpers;

pub use context::TestContext;
