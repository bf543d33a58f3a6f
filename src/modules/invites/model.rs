use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InviteRequest {
    /// Class name to invite students into.
    #[validate(length(min = 1))]
    pub class: String,
    /// Addresses to email a register link to. May be empty: the signed code
    /// is returned either way so the frontend can distribute it directly.
    #[serde(default)]
    pub emails: Vec<String>,
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InviteResponse {
    /// Signed invitation token; registration consumes it as `code`.
    pub code: String,
    /// Number of invitation emails sent.
    pub sent: usize,
}
