use serde::{Deserialize, Serialize};
use std::fmt;

/// Country a registration was filed in.
///
/// The serialized form is the business label used by the seed fixtures,
/// which is why `Peru` carries an explicit rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Argentina,
    #[serde(rename = "Perú")]
    Peru,
    Colombia,
    Ecuador,
    Bolivia,
    Chile,
    Uruguay,
}

impl Country {
    pub const ALL: [Country; 7] = [
        Country::Argentina,
        Country::Peru,
        Country::Colombia,
        Country::Ecuador,
        Country::Bolivia,
        Country::Chile,
        Country::Uruguay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Argentina => "Argentina",
            Self::Peru => "Perú",
            Self::Colombia => "Colombia",
            Self::Ecuador => "Ecuador",
            Self::Bolivia => "Bolivia",
            Self::Chile => "Chile",
            Self::Uruguay => "Uruguay",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Legal entity the registration was filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Registrant {
    #[default]
    #[serde(rename = "GIE SA")]
    GieSa,
    #[serde(rename = "GIE PERU SAC")]
    GiePeru,
    #[serde(rename = "GIE CHILE SPA")]
    GieChile,
}

impl Registrant {
    pub const ALL: [Registrant; 3] = [Registrant::GieSa, Registrant::GiePeru, Registrant::GieChile];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GieSa => "GIE SA",
            Self::GiePeru => "GIE PERU SAC",
            Self::GieChile => "GIE CHILE SPA",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Registrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a portal registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "SIN MOVIMIENTO")]
    NoActivity,
    #[serde(rename = "REGISTRADO")]
    Registered,
    #[serde(rename = "EN PROCESO")]
    InProgress,
    #[serde(rename = "ENVIADO")]
    Sent,
    #[serde(rename = "VENCIDO")]
    Expired,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::NoActivity,
        Status::Registered,
        Status::InProgress,
        Status::Sent,
        Status::Expired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoActivity => "SIN MOVIMIENTO",
            Self::Registered => "REGISTRADO",
            Self::InProgress => "EN PROCESO",
            Self::Sent => "ENVIADO",
            Self::Expired => "VENCIDO",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three record types the desk manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Registration,
    Client,
    Portal,
}

impl EntityKind {
    /// Identifier prefix, matching the seed fixture convention (`reg_1`, `cli_1`, ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Registration => "reg",
            Self::Client => "cli",
            Self::Portal => "por",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Client => "client",
            Self::Portal => "portal",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level collection the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Registrations,
    Clients,
    Portals,
}

impl View {
    pub const ALL: [View; 3] = [View::Registrations, View::Clients, View::Portals];

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Registrations => EntityKind::Registration,
            Self::Clients => EntityKind::Client,
            Self::Portals => EntityKind::Portal,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Registrations => "Registrations",
            Self::Clients => "Clients",
            Self::Portals => "Portals",
        }
    }

    pub fn next(&self) -> View {
        match self {
            Self::Registrations => Self::Clients,
            Self::Clients => Self::Portals,
            Self::Portals => Self::Registrations,
        }
    }
}
