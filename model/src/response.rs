use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Empty response is required due to custom fetch forcing `response.json()`
#[derive(Serialize, Deserialize, Debug, ToSchema, Default)]
pub struct EmptyResponse {}
