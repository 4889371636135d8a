use crate::core::{Client, DeskError, EntityKind, Portal, Registration, Result, View};
use crate::form::{
    FormPayload, IdGenerator, reconcile_client, reconcile_portal, reconcile_registration,
};
use crate::lookup::{NameDirectory, RegistrationDirectory};
use crate::seed::SeedData;
use crate::storage::EntityStore;
use im::Vector;
use tracing::{info, warn};

/// A discrete user action. The sole way the presentation layer mutates
/// anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectView(View),
    OpenCreate(EntityKind),
    OpenEdit(EntityKind, String),
    CloseModal,
    Submit(FormPayload),
    DeleteRequested(EntityKind, String),
    DeleteConfirmed,
    DeleteDeclined,
}

/// The entity snapshot a form was seeded with in edit mode.
///
/// Always a copy taken when the modal opened; edits in the form never touch
/// the store until submit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSeed {
    Registration(Registration),
    Client(Client),
    Portal(Portal),
}

impl EditSeed {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Registration(_) => EntityKind::Registration,
            Self::Client(_) => EntityKind::Client,
            Self::Portal(_) => EntityKind::Portal,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Registration(r) => &r.id,
            Self::Client(c) => &c.id,
            Self::Portal(p) => &p.id,
        }
    }
}

/// Whether the create/edit overlay is open, and for which entity kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        kind: EntityKind,
        editing: Option<EditSeed>,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// An armed delete-confirmation gate. Nothing is removed until the user
/// confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: String,
}

/// The whole application state: active view, modal state, pending delete
/// gate, the entity store and the id source.
///
/// Every mutation goes through [`Workspace::apply`]; everything else is a
/// read-only snapshot accessor. The presentation layer re-requests state
/// after each `apply` rather than holding on to returned structures.
///
/// # Examples
///
/// ```
/// use regdesk::{EntityKind, FormPayload, Intent, NamedInput, Workspace};
///
/// let mut desk = Workspace::empty();
/// desk.apply(Intent::OpenCreate(EntityKind::Client)).unwrap();
/// desk.apply(Intent::Submit(FormPayload::Client(NamedInput::with_name("YPF")))).unwrap();
///
/// assert_eq!(desk.clients().len(), 1);
/// assert!(!desk.modal().is_open());
/// ```
#[derive(Debug, Clone)]
pub struct Workspace {
    store: EntityStore,
    view: View,
    modal: ModalState,
    pending_delete: Option<PendingDelete>,
    ids: IdGenerator,
}

impl Workspace {
    /// A workspace with no data at all.
    pub fn empty() -> Self {
        Self {
            store: EntityStore::new(),
            view: View::default(),
            modal: ModalState::Closed,
            pending_delete: None,
            ids: IdGenerator::new(),
        }
    }

    /// A workspace seeded from the builtin fixture.
    pub fn seeded() -> Result<Self> {
        Ok(Self::with_seed(SeedData::builtin()?))
    }

    pub fn with_seed(seed: SeedData) -> Self {
        let store = EntityStore::from_parts(seed.clients, seed.portals, seed.registrations);
        let ids = IdGenerator::primed_past(store.all_ids());
        Self {
            store,
            view: View::default(),
            modal: ModalState::Closed,
            pending_delete: None,
            ids,
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Cheap persistent-vector clones: a snapshot handed out here never
    /// observes later mutations.
    pub fn clients(&self) -> Vector<Client> {
        self.store.clients().clone()
    }

    pub fn portals(&self) -> Vector<Portal> {
        self.store.portals().clone()
    }

    pub fn registrations(&self) -> Vector<Registration> {
        self.store.registrations().clone()
    }

    /// Build the id -> name directories for one registration render pass.
    pub fn registration_directory(&self) -> RegistrationDirectory {
        RegistrationDirectory {
            clients: NameDirectory::from_collection(self.store.clients()),
            portals: NameDirectory::from_collection(self.store.portals()),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::SelectView(view) => {
                // Navigation never touches the modal.
                self.view = view;
                Ok(())
            }
            Intent::OpenCreate(kind) => {
                self.modal = ModalState::Open {
                    kind,
                    editing: None,
                };
                Ok(())
            }
            Intent::OpenEdit(kind, id) => self.open_edit(kind, &id),
            Intent::CloseModal => {
                // Discards any in-progress edit seed.
                self.modal = ModalState::Closed;
                Ok(())
            }
            Intent::Submit(payload) => self.submit(payload),
            Intent::DeleteRequested(kind, id) => {
                self.pending_delete = Some(PendingDelete { kind, id });
                Ok(())
            }
            Intent::DeleteConfirmed => {
                if let Some(pending) = self.pending_delete.take() {
                    self.remove(pending);
                }
                Ok(())
            }
            Intent::DeleteDeclined => {
                self.pending_delete = None;
                Ok(())
            }
        }
    }

    fn open_edit(&mut self, kind: EntityKind, id: &str) -> Result<()> {
        let editing = match kind {
            EntityKind::Registration => {
                self.store.registration(id).cloned().map(EditSeed::Registration)
            }
            EntityKind::Client => self.store.client(id).cloned().map(EditSeed::Client),
            EntityKind::Portal => self.store.portal(id).cloned().map(EditSeed::Portal),
        };

        match editing {
            Some(seed) => {
                self.modal = ModalState::Open {
                    kind,
                    editing: Some(seed),
                };
            }
            None => {
                // The row vanished between render and click; nothing to edit.
                warn!(%kind, id, "edit requested for unknown id");
            }
        }
        Ok(())
    }

    fn submit(&mut self, payload: FormPayload) -> Result<()> {
        let (kind, editing) = match &self.modal {
            ModalState::Open { kind, editing } => (*kind, editing.clone()),
            ModalState::Closed => {
                return Err(DeskError::Unsupported(
                    "submit with no open form".to_string(),
                ));
            }
        };

        if payload.kind() != kind {
            return Err(DeskError::Unsupported(format!(
                "{} payload submitted to an open {} form",
                payload.kind(),
                kind
            )));
        }

        match payload {
            FormPayload::Registration(input) => {
                let seed = match &editing {
                    Some(EditSeed::Registration(r)) => Some(r),
                    _ => None,
                };
                let entity = reconcile_registration(&input, seed, &mut self.ids)?;
                info!(id = %entity.id, "save registration");
                self.store.upsert_registration(entity);
            }
            FormPayload::Client(input) => {
                let seed = match &editing {
                    Some(EditSeed::Client(c)) => Some(c),
                    _ => None,
                };
                let entity = reconcile_client(&input, seed, &mut self.ids)?;
                info!(id = %entity.id, "save client");
                self.store.upsert_client(entity);
            }
            FormPayload::Portal(input) => {
                let seed = match &editing {
                    Some(EditSeed::Portal(p)) => Some(p),
                    _ => None,
                };
                let entity = reconcile_portal(&input, seed, &mut self.ids)?;
                info!(id = %entity.id, "save portal");
                self.store.upsert_portal(entity);
            }
        }

        // A successful save closes the modal and drops the seed.
        self.modal = ModalState::Closed;
        Ok(())
    }

    fn remove(&mut self, pending: PendingDelete) {
        info!(kind = %pending.kind, id = %pending.id, "delete confirmed");
        match pending.kind {
            // No cascade: registrations referencing a removed client or
            // portal keep their ids and resolve to the fallback name.
            EntityKind::Registration => self.store.remove_registration(&pending.id),
            EntityKind::Client => self.store.remove_client(&pending.id),
            EntityKind::Portal => self.store.remove_portal(&pending.id),
        }
    }
}
