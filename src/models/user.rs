use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// External identity injected by the authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
}
