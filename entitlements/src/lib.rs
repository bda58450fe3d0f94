#![deny(missing_docs)]
//! This crate contains the domain for resolving the effective entitlements of a profile.

/// Contains the domain for resolving the effective entitlements of a profile.
pub mod domain;

/// Contains the outbound logic for resolving entitlements
pub mod outbound;
