use super::{Country, Registrant, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer company.
///
/// Replaced wholesale on edit; never mutated field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
}

/// A procurement portal (SAP Ariba, Jaggaer, ...).
///
/// Same shape and lifecycle as [`Client`], independent collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub id: String,
    pub name: String,
}

/// A client's registration on a portal, with status metadata, access
/// credentials and a support contact.
///
/// `portal_id` and `client_id` are weak references: they denote the relation
/// for display lookup only. Deleting the referenced client or portal leaves
/// the registration untouched; the display layer falls back to "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub portal_id: String,
    pub client_id: String,
    pub country: Country,
    pub registrant: Registrant,
    pub status: Status,
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    pub access_link: String,
    pub username: String,
    pub password: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}
