pub mod ids;
pub mod input;
pub mod reconcile;

pub use ids::IdGenerator;
pub use input::{FormPayload, NamedInput, RegistrationInput};
pub use reconcile::{reconcile_client, reconcile_portal, reconcile_registration};
