//! Issued certificate records
//!
//! A certificate is ephemeral as far as the counter subsystem is concerned:
//! it is built downstream of allocation from the allocated number, the issue
//! date, and free-form client fields, and only kept in memory for listing.

use crate::number::LaudoNumber;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Certificates are valid for a fixed 15 days from the issue date.
pub const VALIDITY_DAYS: i64 = 15;

/// Free-form fields collected from the issuance form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFields {
    pub client: String,
    pub sample: String,
    pub observations: String,
    pub responsible: String,
}

/// An issued sanitation certificate ("laudo")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub number: LaudoNumber,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(flatten)]
    pub fields: ClientFields,
}

impl Certificate {
    /// Build a certificate for an allocated number, computing the expiry
    /// from the fixed validity offset.
    pub fn issue(number: LaudoNumber, issue_date: NaiveDate, fields: ClientFields) -> Self {
        Self {
            number,
            issue_date,
            expiry_date: issue_date + Duration::days(VALIDITY_DAYS),
            fields,
        }
    }
}
