//! Postgres client for the biolink backend. One [`BiolinkDb`] wraps the pool;
//! its methods are grouped into one module per table family.

mod db;
mod faqs;
mod grants;
mod links;
mod login_codes;
mod modules;
mod photos;
mod plans;
mod products;
mod profiles;
mod stats;

pub use db::BiolinkDb;
