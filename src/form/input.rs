use crate::core::{Country, EntityKind, Registrant, Registration, Status};
use chrono::NaiveDate;

/// Field values of the registration form.
///
/// Text and date fields are kept as raw strings while the user edits;
/// reconciliation parses and validates them on submit. Enum fields always
/// carry an allowed value, defaulting to the first member for a fresh form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationInput {
    pub portal_id: String,
    pub client_id: String,
    pub country: Country,
    pub registrant: Registrant,
    pub status: Status,
    pub submission_date: String,
    pub expiration_date: String,
    pub access_link: String,
    pub username: String,
    pub password: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl RegistrationInput {
    /// Prefill for edit mode from the seed entity's current snapshot.
    pub fn from_entity(entity: &Registration) -> Self {
        Self {
            portal_id: entity.portal_id.clone(),
            client_id: entity.client_id.clone(),
            country: entity.country,
            registrant: entity.registrant,
            status: entity.status,
            submission_date: format_date(entity.submission_date),
            expiration_date: format_date(entity.expiration_date),
            access_link: entity.access_link.clone(),
            username: entity.username.clone(),
            password: entity.password.clone(),
            contact_name: entity.contact_name.clone(),
            contact_email: entity.contact_email.clone(),
            contact_phone: entity.contact_phone.clone(),
        }
    }
}

/// Field values of the client/portal form: just a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedInput {
    pub name: String,
}

impl NamedInput {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A submitted form, tagged by the entity kind it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPayload {
    Registration(RegistrationInput),
    Client(NamedInput),
    Portal(NamedInput),
}

impl FormPayload {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Registration(_) => EntityKind::Registration,
            Self::Client(_) => EntityKind::Client,
            Self::Portal(_) => EntityKind::Portal,
        }
    }
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
