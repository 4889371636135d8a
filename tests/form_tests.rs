/// Form reconciliation tests
///
/// Create-vs-edit identifier handling, required-field validation and the
/// date-format guard.
use chrono::NaiveDate;
use regdesk::form::{reconcile_client, reconcile_registration};
use regdesk::{
    Country, DeskError, EntityKind, IdGenerator, NamedInput, Registrant, Registration,
    RegistrationInput, Status,
};

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        portal_id: "por_1".to_string(),
        client_id: "cli_1".to_string(),
        ..RegistrationInput::default()
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn fresh_form_defaults_to_first_enum_members() {
    let input = RegistrationInput::default();
    assert_eq!(input.country, Country::Argentina);
    assert_eq!(input.registrant, Registrant::GieSa);
    assert_eq!(input.status, Status::NoActivity);
    assert!(input.portal_id.is_empty());
}

#[test]
fn create_mode_mints_fresh_identifiers() {
    let mut ids = IdGenerator::new();

    let first = reconcile_registration(&valid_input(), None, &mut ids).unwrap();
    let second = reconcile_registration(&valid_input(), None, &mut ids).unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.id.starts_with("reg_"));
    assert!(second.id.starts_with("reg_"));
}

#[test]
fn edit_mode_reuses_seed_id_and_takes_fields_from_input() {
    let mut ids = IdGenerator::new();
    let seed = reconcile_registration(&valid_input(), None, &mut ids).unwrap();

    let mut input = RegistrationInput::from_entity(&seed);
    input.username = "new_user".to_string();
    input.status = Status::Expired;
    input.access_link = String::new(); // cleared by the user, stays cleared

    let updated = reconcile_registration(&input, Some(&seed), &mut ids).unwrap();

    assert_eq!(updated.id, seed.id);
    assert_eq!(updated.username, "new_user");
    assert_eq!(updated.status, Status::Expired);
    assert_eq!(updated.access_link, "");
}

#[test]
fn registration_requires_portal_and_client() {
    let mut ids = IdGenerator::new();

    let mut missing_client = valid_input();
    missing_client.client_id = String::new();
    let err = reconcile_registration(&missing_client, None, &mut ids).unwrap_err();
    assert!(matches!(err, DeskError::Validation(_)));

    let mut missing_portal = valid_input();
    missing_portal.portal_id = "   ".to_string();
    let err = reconcile_registration(&missing_portal, None, &mut ids).unwrap_err();
    assert!(matches!(err, DeskError::Validation(_)));
}

#[test]
fn client_name_must_not_be_blank() {
    let mut ids = IdGenerator::new();

    let err = reconcile_client(&NamedInput::with_name("   "), None, &mut ids).unwrap_err();
    assert!(matches!(err, DeskError::Validation(_)));

    let ok = reconcile_client(&NamedInput::with_name("  YPF  "), None, &mut ids).unwrap();
    assert_eq!(ok.name, "YPF");
    assert!(ok.id.starts_with("cli_"));
}

#[test]
fn blank_dates_stay_unset() {
    let mut ids = IdGenerator::new();
    let entity = reconcile_registration(&valid_input(), None, &mut ids).unwrap();
    assert_eq!(entity.submission_date, None);
    assert_eq!(entity.expiration_date, None);
}

#[test]
fn iso_dates_are_parsed() {
    let mut ids = IdGenerator::new();
    let mut input = valid_input();
    input.submission_date = "2024-01-01".to_string();
    input.expiration_date = "2025-01-01".to_string();

    let entity = reconcile_registration(&input, None, &mut ids).unwrap();

    assert_eq!(entity.submission_date, Some(date("2024-01-01")));
    assert_eq!(entity.expiration_date, Some(date("2025-01-01")));
}

#[test]
fn malformed_date_is_rejected() {
    let mut ids = IdGenerator::new();
    let mut input = valid_input();
    input.submission_date = "01/07/2024".to_string();

    let err = reconcile_registration(&input, None, &mut ids).unwrap_err();
    assert!(matches!(err, DeskError::InvalidDate(_)));
}

#[test]
fn prefill_round_trips_through_the_form() {
    let mut ids = IdGenerator::new();
    let mut input = valid_input();
    input.submission_date = "2024-07-15".to_string();
    input.country = Country::Chile;
    input.password = "secret".to_string();
    let entity: Registration = reconcile_registration(&input, None, &mut ids).unwrap();

    let prefilled = RegistrationInput::from_entity(&entity);

    assert_eq!(prefilled.submission_date, "2024-07-15");
    assert_eq!(prefilled.expiration_date, "");
    assert_eq!(prefilled.country, Country::Chile);
    assert_eq!(prefilled.password, "secret");
}

#[test]
fn generator_primed_past_seed_never_reuses_seed_ids() {
    let mut ids = IdGenerator::primed_past(["cli_1", "cli_2", "por_3", "reg_2"]);
    let minted = ids.mint(EntityKind::Client);
    assert_eq!(minted, "cli_4");
}
