pub mod error;
pub mod headers;
pub mod login_code;
pub mod token;

pub type Result<T, E = error::AuthError> = std::result::Result<T, E>;
