/// Workspace tests
///
/// Drive the facade the way the terminal UI does: one intent per user
/// action, re-reading snapshots afterwards.
use chrono::NaiveDate;
use regdesk::{
    Client, Country, DeskError, EditSeed, EntityKind, FALLBACK_NAME, FormPayload, Intent,
    ModalState, NamedInput, Portal, Registrant, RegistrationInput, SeedData, Status, View,
    Workspace,
};

fn scenario_seed() -> SeedData {
    SeedData {
        clients: vec![Client {
            id: "cli_1".to_string(),
            name: "YPF".to_string(),
        }],
        portals: vec![Portal {
            id: "por_1".to_string(),
            name: "SAP Ariba".to_string(),
        }],
        registrations: vec![],
    }
}

fn registration_input() -> RegistrationInput {
    RegistrationInput {
        portal_id: "por_1".to_string(),
        client_id: "cli_1".to_string(),
        submission_date: "2024-01-01".to_string(),
        expiration_date: "2025-01-01".to_string(),
        ..RegistrationInput::default()
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn submitted_registration_lands_with_fresh_id_and_defaults() {
    let mut desk = Workspace::with_seed(scenario_seed());

    desk.apply(Intent::OpenCreate(EntityKind::Registration)).unwrap();
    desk.apply(Intent::Submit(FormPayload::Registration(registration_input())))
        .unwrap();

    let registrations = desk.registrations();
    assert_eq!(registrations.len(), 1);

    let saved = &registrations[0];
    assert!(saved.id.starts_with("reg_"));
    assert_ne!(saved.id, "cli_1");
    assert_eq!(saved.status, Status::NoActivity);
    assert_eq!(saved.country, Country::Argentina);
    assert_eq!(saved.registrant, Registrant::GieSa);
    assert_eq!(saved.submission_date, Some(date("2024-01-01")));
    assert_eq!(saved.expiration_date, Some(date("2025-01-01")));

    let directory = desk.registration_directory();
    assert_eq!(directory.portal_name(&saved.portal_id), "SAP Ariba");
    assert_eq!(directory.client_name(&saved.client_id), "YPF");

    // A successful save closes the modal.
    assert!(!desk.modal().is_open());
}

#[test]
fn deleting_a_client_leaves_the_registration_dangling() {
    let mut desk = Workspace::with_seed(scenario_seed());
    desk.apply(Intent::OpenCreate(EntityKind::Registration)).unwrap();
    desk.apply(Intent::Submit(FormPayload::Registration(registration_input())))
        .unwrap();

    desk.apply(Intent::DeleteRequested(EntityKind::Client, "cli_1".to_string()))
        .unwrap();
    desk.apply(Intent::DeleteConfirmed).unwrap();

    assert_eq!(desk.clients().len(), 0);
    // No cascade: the registration keeps its weak reference.
    let registrations = desk.registrations();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].client_id, "cli_1");

    let directory = desk.registration_directory();
    assert_eq!(directory.client_name("cli_1"), FALLBACK_NAME);
    assert_eq!(directory.portal_name("por_1"), "SAP Ariba");
}

#[test]
fn empty_client_submission_leaves_store_unchanged() {
    let mut desk = Workspace::with_seed(scenario_seed());
    desk.apply(Intent::OpenCreate(EntityKind::Registration)).unwrap();

    let mut input = registration_input();
    input.client_id = String::new();

    let err = desk
        .apply(Intent::Submit(FormPayload::Registration(input)))
        .unwrap_err();

    assert!(matches!(err, DeskError::Validation(_)));
    assert_eq!(desk.registrations().len(), 0);
    // The form stays open so the user can fix the mistake.
    assert!(desk.modal().is_open());
}

#[test]
fn edit_then_cancel_leaves_the_stored_entity_unchanged() {
    let mut desk = Workspace::seeded().unwrap();
    let before = desk.registrations()[0].clone();

    desk.apply(Intent::OpenEdit(EntityKind::Registration, before.id.clone()))
        .unwrap();

    // The seed is a copy; poking at a prefilled input touches nothing.
    let ModalState::Open { editing: Some(EditSeed::Registration(seed)), .. } = desk.modal().clone()
    else {
        panic!("expected an edit modal");
    };
    let mut input = RegistrationInput::from_entity(&seed);
    input.username = "changed_but_never_submitted".to_string();
    assert_ne!(input.username, seed.username);

    desk.apply(Intent::CloseModal).unwrap();

    assert_eq!(desk.registrations()[0], before);
    assert!(!desk.modal().is_open());
}

#[test]
fn open_edit_seeds_the_modal_with_a_snapshot() {
    let mut desk = Workspace::with_seed(scenario_seed());

    desk.apply(Intent::OpenEdit(EntityKind::Client, "cli_1".to_string()))
        .unwrap();

    match desk.modal() {
        ModalState::Open {
            kind: EntityKind::Client,
            editing: Some(EditSeed::Client(seed)),
        } => {
            assert_eq!(seed.id, "cli_1");
            assert_eq!(seed.name, "YPF");
        }
        other => panic!("unexpected modal state: {other:?}"),
    }
}

#[test]
fn open_edit_for_unknown_id_is_a_no_op() {
    let mut desk = Workspace::with_seed(scenario_seed());

    desk.apply(Intent::OpenEdit(EntityKind::Client, "cli_404".to_string()))
        .unwrap();

    assert!(!desk.modal().is_open());
    assert_eq!(desk.clients().len(), 1);
}

#[test]
fn editing_replaces_in_place_without_growing_the_collection() {
    let mut desk = Workspace::seeded().unwrap();
    assert_eq!(desk.clients().len(), 3);

    desk.apply(Intent::OpenEdit(EntityKind::Client, "cli_2".to_string()))
        .unwrap();
    desk.apply(Intent::Submit(FormPayload::Client(NamedInput::with_name(
        "Pluspetrol S.A.",
    ))))
    .unwrap();

    let clients = desk.clients();
    assert_eq!(clients.len(), 3);
    assert_eq!(clients[1].id, "cli_2");
    assert_eq!(clients[1].name, "Pluspetrol S.A.");
}

#[test]
fn select_view_never_touches_the_modal() {
    let mut desk = Workspace::with_seed(scenario_seed());
    desk.apply(Intent::OpenCreate(EntityKind::Client)).unwrap();

    desk.apply(Intent::SelectView(View::Portals)).unwrap();

    assert_eq!(desk.view(), View::Portals);
    assert!(desk.modal().is_open());
}

#[test]
fn delete_declined_changes_nothing() {
    let mut desk = Workspace::with_seed(scenario_seed());

    desk.apply(Intent::DeleteRequested(EntityKind::Client, "cli_1".to_string()))
        .unwrap();
    assert!(desk.pending_delete().is_some());

    desk.apply(Intent::DeleteDeclined).unwrap();

    assert!(desk.pending_delete().is_none());
    assert_eq!(desk.clients().len(), 1);
}

#[test]
fn delete_of_a_missing_id_is_silently_absorbed() {
    let mut desk = Workspace::with_seed(scenario_seed());

    desk.apply(Intent::DeleteRequested(EntityKind::Portal, "por_404".to_string()))
        .unwrap();
    desk.apply(Intent::DeleteConfirmed).unwrap();

    assert_eq!(desk.portals().len(), 1);
}

#[test]
fn confirm_with_nothing_armed_is_a_no_op() {
    let mut desk = Workspace::with_seed(scenario_seed());
    desk.apply(Intent::DeleteConfirmed).unwrap();
    assert_eq!(desk.clients().len(), 1);
    assert_eq!(desk.portals().len(), 1);
}

#[test]
fn submit_without_an_open_modal_is_unsupported() {
    let mut desk = Workspace::with_seed(scenario_seed());

    let err = desk
        .apply(Intent::Submit(FormPayload::Client(NamedInput::with_name("X"))))
        .unwrap_err();

    assert!(matches!(err, DeskError::Unsupported(_)));
    assert_eq!(desk.clients().len(), 1);
}

#[test]
fn mismatched_payload_kind_is_unsupported() {
    let mut desk = Workspace::with_seed(scenario_seed());
    desk.apply(Intent::OpenCreate(EntityKind::Portal)).unwrap();

    let err = desk
        .apply(Intent::Submit(FormPayload::Client(NamedInput::with_name("X"))))
        .unwrap_err();

    assert!(matches!(err, DeskError::Unsupported(_)));
    assert_eq!(desk.clients().len(), 1);
    assert_eq!(desk.portals().len(), 1);
}

#[test]
fn session_ids_never_collide() {
    let mut desk = Workspace::seeded().unwrap();
    let mut minted = Vec::new();

    for name in ["Techint", "Tenaris", "Vista"] {
        desk.apply(Intent::OpenCreate(EntityKind::Client)).unwrap();
        desk.apply(Intent::Submit(FormPayload::Client(NamedInput::with_name(name))))
            .unwrap();
        minted.push(desk.clients().last().unwrap().id.clone());
    }

    let mut unique = minted.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), minted.len());

    // Seed ids are never reused either.
    for id in &minted {
        assert!(!["cli_1", "cli_2", "cli_3"].contains(&id.as_str()));
    }
}
