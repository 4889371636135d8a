use super::collection;
use crate::core::{Client, Portal, Registration};
use im::Vector;
use tracing::debug;

/// Owns the three collections and the sole mutation primitives.
///
/// Collections are persistent vectors, so handing out a snapshot is a cheap
/// structural-sharing clone and earlier snapshots never observe later
/// mutations. Collections are independent; there is no cross-collection
/// transaction.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    clients: Vector<Client>,
    portals: Vector<Portal>,
    registrations: Vector<Registration>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        clients: Vec<Client>,
        portals: Vec<Portal>,
        registrations: Vec<Registration>,
    ) -> Self {
        Self {
            clients: clients.into_iter().collect(),
            portals: portals.into_iter().collect(),
            registrations: registrations.into_iter().collect(),
        }
    }

    pub fn clients(&self) -> &Vector<Client> {
        &self.clients
    }

    pub fn portals(&self) -> &Vector<Portal> {
        &self.portals
    }

    pub fn registrations(&self) -> &Vector<Registration> {
        &self.registrations
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn portal(&self, id: &str) -> Option<&Portal> {
        self.portals.iter().find(|p| p.id == id)
    }

    pub fn registration(&self, id: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.id == id)
    }

    pub fn upsert_client(&mut self, client: Client) {
        debug!(id = %client.id, "upsert client");
        self.clients = collection::upsert(&self.clients, client);
    }

    pub fn upsert_portal(&mut self, portal: Portal) {
        debug!(id = %portal.id, "upsert portal");
        self.portals = collection::upsert(&self.portals, portal);
    }

    pub fn upsert_registration(&mut self, registration: Registration) {
        debug!(id = %registration.id, "upsert registration");
        self.registrations = collection::upsert(&self.registrations, registration);
    }

    pub fn remove_client(&mut self, id: &str) {
        debug!(id, "remove client");
        self.clients = collection::remove(&self.clients, id);
    }

    pub fn remove_portal(&mut self, id: &str) {
        debug!(id, "remove portal");
        self.portals = collection::remove(&self.portals, id);
    }

    pub fn remove_registration(&mut self, id: &str) {
        debug!(id, "remove registration");
        self.registrations = collection::remove(&self.registrations, id);
    }

    /// All identifiers across the three collections. Used to prime the id
    /// generator past the seed data.
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.clients
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.portals.iter().map(|p| p.id.as_str()))
            .chain(self.registrations.iter().map(|r| r.id.as_str()))
    }
}
