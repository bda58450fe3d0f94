//! Shared API models for the biolink backend.

pub mod auth;
pub mod faq;
pub mod link;
pub mod module;
pub mod paths;
pub mod photo;
pub mod plan;
pub mod product;
pub mod profile;
pub mod response;
pub mod stats;
