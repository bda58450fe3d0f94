/*!
Biolink Service

The HTTP backend for the biolink product: public profile pages, the
passwordless login flow, the owner admin API and the super admin plan and
module administration.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
pub mod constants;
pub mod vcard;
