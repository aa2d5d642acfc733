use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use types::certificate::ClientFields;
use types::number::LaudoNumber;

/// Issuance form payload. All fields are free-form and optional; the
/// service performs no input validation by design.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRequest {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub sample: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub responsible: String,
}

impl IssueRequest {
    pub fn into_fields(self) -> ClientFields {
        ClientFields {
            client: self.client,
            sample: self.sample,
            observations: self.observations,
            responsible: self.responsible,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueResponse {
    pub number: LaudoNumber,
    /// Number rendered under the configured prefix/padding rule.
    pub display_number: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Whether the incremented counter landed in the backend.
    pub persisted: bool,
    /// Advisory set when it did not; the certificate is still issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub last_number: u64,
}
