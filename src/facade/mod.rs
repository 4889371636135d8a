pub mod workspace;

pub use workspace::{EditSeed, Intent, ModalState, PendingDelete, Workspace};
