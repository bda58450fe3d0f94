//! The domain for resolving the effective entitlements of a profile

/// Contains the models for plan limits, module effects and entitlements
pub mod model;

/// Contains the port logic for resolving entitlements
pub mod port;

/// Contains the service logic for resolving entitlements
pub mod service;
