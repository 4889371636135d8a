use super::{IdGenerator, NamedInput, RegistrationInput};
use crate::core::{Client, DeskError, EntityKind, Portal, Registration, Result};
use chrono::NaiveDate;

/// Turn a submitted registration form into a persistable entity.
///
/// Edit mode reuses the seed's identifier; every other field comes from the
/// submitted input, so a field the user cleared stays cleared. Create mode
/// mints a fresh identifier. Validation failures leave the store untouched
/// by construction: nothing has been written yet when they surface.
pub fn reconcile_registration(
    input: &RegistrationInput,
    seed: Option<&Registration>,
    ids: &mut IdGenerator,
) -> Result<Registration> {
    if input.portal_id.trim().is_empty() || input.client_id.trim().is_empty() {
        return Err(DeskError::Validation(
            "Please select a portal and a client.".to_string(),
        ));
    }

    let submission_date = parse_date_field(&input.submission_date)?;
    let expiration_date = parse_date_field(&input.expiration_date)?;

    let id = match seed {
        Some(existing) => existing.id.clone(),
        None => ids.mint(EntityKind::Registration),
    };

    Ok(Registration {
        id,
        portal_id: input.portal_id.clone(),
        client_id: input.client_id.clone(),
        country: input.country,
        registrant: input.registrant,
        status: input.status,
        submission_date,
        expiration_date,
        access_link: input.access_link.clone(),
        username: input.username.clone(),
        password: input.password.clone(),
        contact_name: input.contact_name.clone(),
        contact_email: input.contact_email.clone(),
        contact_phone: input.contact_phone.clone(),
    })
}

pub fn reconcile_client(
    input: &NamedInput,
    seed: Option<&Client>,
    ids: &mut IdGenerator,
) -> Result<Client> {
    let name = validated_name(input, EntityKind::Client)?;
    let id = match seed {
        Some(existing) => existing.id.clone(),
        None => ids.mint(EntityKind::Client),
    };
    Ok(Client { id, name })
}

pub fn reconcile_portal(
    input: &NamedInput,
    seed: Option<&Portal>,
    ids: &mut IdGenerator,
) -> Result<Portal> {
    let name = validated_name(input, EntityKind::Portal)?;
    let id = match seed {
        Some(existing) => existing.id.clone(),
        None => ids.mint(EntityKind::Portal),
    };
    Ok(Portal { id, name })
}

fn validated_name(input: &NamedInput, kind: EntityKind) -> Result<String> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(DeskError::Validation(format!(
            "The {kind} name cannot be empty."
        )));
    }
    Ok(name.to_string())
}

/// Empty is allowed; anything else must be an ISO calendar date.
fn parse_date_field(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DeskError::InvalidDate(raw.to_string()))
}
