// ============================================================================
// regdesk library
//
// In-memory desk for tracking client registrations on procurement portals.
// Three collections (clients, portals, registrations), seeded from fixtures,
// mutated only through Workspace::apply.
// ============================================================================

pub mod core;
pub mod facade;
pub mod form;
pub mod lookup;
pub mod seed;
pub mod storage;

// Re-export main types for convenience
pub use core::{
    Client, Country, DeskError, EntityKind, Portal, Registrant, Registration, Result, Status, View,
};
pub use facade::{EditSeed, Intent, ModalState, PendingDelete, Workspace};
pub use form::{FormPayload, IdGenerator, NamedInput, RegistrationInput};
pub use lookup::{FALLBACK_NAME, NameDirectory, Named, RegistrationDirectory};
pub use seed::SeedData;
pub use storage::{EntityStore, Keyed};
