//! Flutter-facing bridge crate.
//!
//! # Responsibility
//! - Expose the deep-link contract to Dart through FRB.
//! - Host the process-global bridge instance shared with the native shells.

pub mod api;
