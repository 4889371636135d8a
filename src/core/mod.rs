pub mod entity;
pub mod error;
pub mod types;

pub use entity::{Client, Portal, Registration};
pub use error::{DeskError, Result};
pub use types::{Country, EntityKind, Registrant, Status, View};
