/// Seed fixture tests
///
/// The builtin fixture, alternate fixture files, and id-generator priming.
use regdesk::{Country, DeskError, EntityKind, FormPayload, Intent, NamedInput, SeedData, Status, Workspace};
use std::io::Write;

#[test]
fn builtin_fixture_loads_expected_collections() {
    let seed = SeedData::builtin().unwrap();

    assert_eq!(seed.clients.len(), 3);
    assert_eq!(seed.portals.len(), 3);
    assert_eq!(seed.registrations.len(), 2);

    assert_eq!(seed.clients[0].id, "cli_1");
    assert_eq!(seed.clients[0].name, "YPF");
    assert_eq!(seed.portals[0].name, "SAP Ariba");
}

#[test]
fn builtin_fixture_parses_business_labels() {
    let seed = SeedData::builtin().unwrap();

    let first = &seed.registrations[0];
    assert_eq!(first.country, Country::Argentina);
    assert_eq!(first.status, Status::Registered);

    let second = &seed.registrations[1];
    assert_eq!(second.country, Country::Peru);
    assert_eq!(second.status, Status::InProgress);
    assert_eq!(second.country.label(), "Perú");
}

#[test]
fn seeded_workspace_primes_the_id_generator_past_the_fixture() {
    let mut desk = Workspace::seeded().unwrap();

    desk.apply(Intent::OpenCreate(EntityKind::Client)).unwrap();
    desk.apply(Intent::Submit(FormPayload::Client(NamedInput::with_name("Techint"))))
        .unwrap();

    let minted = desk.clients().last().unwrap().id.clone();
    assert_eq!(minted, "cli_4");
}

#[test]
fn fixture_file_round_trips() {
    let seed = SeedData::builtin().unwrap();
    let json = serde_json::to_string_pretty(&seed).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = SeedData::from_file(file.path()).unwrap();
    assert_eq!(loaded.clients.len(), seed.clients.len());
    assert_eq!(loaded.registrations[1].country, Country::Peru);
}

#[test]
fn malformed_fixture_is_a_fixture_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let err = SeedData::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DeskError::Fixture(_)));
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let err = SeedData::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, DeskError::IoError(_)));
}

#[test]
fn missing_collections_default_to_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "clients": [{ "id": "cli_1", "name": "YPF" }] }"#)
        .unwrap();

    let seed = SeedData::from_file(file.path()).unwrap();
    assert_eq!(seed.clients.len(), 1);
    assert!(seed.portals.is_empty());
    assert!(seed.registrations.is_empty());
}
