use crossterm::event::KeyEvent;
use regdesk::{
    Country, EditSeed, EntityKind, FormPayload, ModalState, NamedInput, Registrant,
    RegistrationInput, Status, Workspace,
};
use tui_textarea::{CursorMove, TextArea};

const MASK_CHAR: char = '\u{2022}';

/// Typed handle for every form field; collection never goes through field
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Portal,
    Client,
    Country,
    Registrant,
    Status,
    SubmissionDate,
    ExpirationDate,
    AccessLink,
    Username,
    Password,
    ContactName,
    ContactEmail,
    ContactPhone,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub enum Control {
    Text(TextArea<'static>),
    /// Masked text; reveal is toggled editor-wide.
    Secret(TextArea<'static>),
    Select {
        options: Vec<SelectOption>,
        index: usize,
    },
}

impl Control {
    pub fn value(&self) -> String {
        match self {
            Self::Text(area) | Self::Secret(area) => area.lines().join(""),
            Self::Select { options, index } => {
                options.get(*index).map(|o| o.value.clone()).unwrap_or_default()
            }
        }
    }

    /// What to render when the field is not focused.
    pub fn display(&self, reveal: bool) -> String {
        match self {
            Self::Text(area) => area.lines().join(""),
            Self::Secret(area) => {
                let raw = area.lines().join("");
                if reveal {
                    raw
                } else {
                    MASK_CHAR.to_string().repeat(raw.chars().count())
                }
            }
            Self::Select { options, index } => options
                .get(*index)
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select { .. })
    }
}

pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    pub control: Control,
}

/// Editing state of the open modal form. Lives entirely in the presentation
/// layer; the store sees nothing until the payload is submitted.
pub struct FormEditor {
    pub kind: EntityKind,
    pub editing_id: Option<String>,
    pub fields: Vec<Field>,
    pub focus: usize,
    pub reveal_secrets: bool,
}

impl FormEditor {
    /// Build the editor for whatever modal the workspace has open.
    pub fn for_modal(workspace: &Workspace) -> Option<Self> {
        match workspace.modal() {
            ModalState::Closed => None,
            ModalState::Open { kind, editing } => {
                let editing_id = editing.as_ref().map(|seed| seed.id().to_string());
                let editor = match kind {
                    EntityKind::Registration => {
                        let input = match editing {
                            Some(EditSeed::Registration(r)) => RegistrationInput::from_entity(r),
                            _ => RegistrationInput::default(),
                        };
                        Self::registration(workspace, &input, editing_id)
                    }
                    EntityKind::Client => {
                        let name = match editing {
                            Some(EditSeed::Client(c)) => c.name.clone(),
                            _ => String::new(),
                        };
                        Self::named(EntityKind::Client, name, editing_id)
                    }
                    EntityKind::Portal => {
                        let name = match editing {
                            Some(EditSeed::Portal(p)) => p.name.clone(),
                            _ => String::new(),
                        };
                        Self::named(EntityKind::Portal, name, editing_id)
                    }
                };
                Some(editor)
            }
        }
    }

    fn registration(
        workspace: &Workspace,
        input: &RegistrationInput,
        editing_id: Option<String>,
    ) -> Self {
        let portals: Vec<SelectOption> = workspace
            .portals()
            .iter()
            .map(|p| SelectOption {
                value: p.id.clone(),
                label: p.name.clone(),
            })
            .collect();
        let clients: Vec<SelectOption> = workspace
            .clients()
            .iter()
            .map(|c| SelectOption {
                value: c.id.clone(),
                label: c.name.clone(),
            })
            .collect();

        let fields = vec![
            select_field(FieldId::Portal, "Portal", portals, &input.portal_id),
            select_field(FieldId::Client, "Client", clients, &input.client_id),
            enum_field(
                FieldId::Country,
                "Country",
                Country::ALL.map(|c| c.label()),
                input.country.label(),
            ),
            enum_field(
                FieldId::Registrant,
                "Registrant",
                Registrant::ALL.map(|r| r.label()),
                input.registrant.label(),
            ),
            enum_field(
                FieldId::Status,
                "Status",
                Status::ALL.map(|s| s.label()),
                input.status.label(),
            ),
            text_field(
                FieldId::SubmissionDate,
                "Submission date",
                &input.submission_date,
            ),
            text_field(
                FieldId::ExpirationDate,
                "Expiration date",
                &input.expiration_date,
            ),
            text_field(FieldId::AccessLink, "Access link", &input.access_link),
            text_field(FieldId::Username, "Username", &input.username),
            secret_field(FieldId::Password, "Password", &input.password),
            text_field(FieldId::ContactName, "Contact name", &input.contact_name),
            text_field(FieldId::ContactEmail, "Contact email", &input.contact_email),
            text_field(FieldId::ContactPhone, "Contact phone", &input.contact_phone),
        ];

        Self {
            kind: EntityKind::Registration,
            editing_id,
            fields,
            focus: 0,
            reveal_secrets: false,
        }
    }

    fn named(kind: EntityKind, name: String, editing_id: Option<String>) -> Self {
        Self {
            kind,
            editing_id,
            fields: vec![text_field(FieldId::Name, "Name", &name)],
            focus: 0,
            reveal_secrets: false,
        }
    }

    pub fn title(&self) -> String {
        let mode = if self.editing_id.is_some() {
            "Edit"
        } else {
            "New"
        };
        format!(" {mode} {} ", self.kind)
    }

    pub fn focused(&self) -> &Field {
        &self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Cycle the focused select control. No-op on text fields.
    pub fn cycle(&mut self, forward: bool) {
        if let Control::Select { options, index } = &mut self.fields[self.focus].control {
            if options.is_empty() {
                return;
            }
            *index = if forward {
                (*index + 1) % options.len()
            } else {
                (*index + options.len() - 1) % options.len()
            };
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_secrets = !self.reveal_secrets;
        let reveal = self.reveal_secrets;
        for field in &mut self.fields {
            if let Control::Secret(area) = &mut field.control {
                if reveal {
                    area.clear_mask_char();
                } else {
                    area.set_mask_char(MASK_CHAR);
                }
            }
        }
    }

    /// Forward a keystroke to the focused text field.
    pub fn input(&mut self, key: KeyEvent) {
        match &mut self.fields[self.focus].control {
            Control::Text(area) | Control::Secret(area) => {
                area.input(key);
            }
            Control::Select { .. } => {}
        }
    }

    /// Read the current field values into a submit payload.
    pub fn collect(&self) -> FormPayload {
        match self.kind {
            EntityKind::Registration => {
                let mut input = RegistrationInput::default();
                for field in &self.fields {
                    let value = field.control.value();
                    match field.id {
                        FieldId::Portal => input.portal_id = value,
                        FieldId::Client => input.client_id = value,
                        FieldId::Country => {
                            input.country = Country::from_label(&value).unwrap_or_default()
                        }
                        FieldId::Registrant => {
                            input.registrant = Registrant::from_label(&value).unwrap_or_default()
                        }
                        FieldId::Status => {
                            input.status = Status::from_label(&value).unwrap_or_default()
                        }
                        FieldId::SubmissionDate => input.submission_date = value,
                        FieldId::ExpirationDate => input.expiration_date = value,
                        FieldId::AccessLink => input.access_link = value,
                        FieldId::Username => input.username = value,
                        FieldId::Password => input.password = value,
                        FieldId::ContactName => input.contact_name = value,
                        FieldId::ContactEmail => input.contact_email = value,
                        FieldId::ContactPhone => input.contact_phone = value,
                        FieldId::Name => {}
                    }
                }
                FormPayload::Registration(input)
            }
            EntityKind::Client => FormPayload::Client(self.collect_name()),
            EntityKind::Portal => FormPayload::Portal(self.collect_name()),
        }
    }

    fn collect_name(&self) -> NamedInput {
        let name = self
            .fields
            .iter()
            .find(|f| f.id == FieldId::Name)
            .map(|f| f.control.value())
            .unwrap_or_default();
        NamedInput::with_name(name)
    }
}

fn new_textarea(value: &str) -> TextArea<'static> {
    let mut area = TextArea::new(vec![value.to_string()]);
    area.set_cursor_line_style(ratatui::style::Style::default());
    area.move_cursor(CursorMove::End);
    area
}

fn text_field(id: FieldId, label: &'static str, value: &str) -> Field {
    Field {
        id,
        label,
        control: Control::Text(new_textarea(value)),
    }
}

fn secret_field(id: FieldId, label: &'static str, value: &str) -> Field {
    let mut area = new_textarea(value);
    area.set_mask_char(MASK_CHAR);
    Field {
        id,
        label,
        control: Control::Secret(area),
    }
}

/// Portal/client pickers: a blank placeholder entry first, then one entry
/// per collection row. A dangling reference keeps its id behind an "N/A"
/// entry so editing an unrelated field never drops it.
fn select_field(id: FieldId, label: &'static str, options: Vec<SelectOption>, current: &str) -> Field {
    let mut all = vec![SelectOption {
        value: String::new(),
        label: "(select)".to_string(),
    }];
    all.extend(options);
    let index = match all.iter().position(|o| o.value == current) {
        Some(index) => index,
        None => {
            all.push(SelectOption {
                value: current.to_string(),
                label: "N/A".to_string(),
            });
            all.len() - 1
        }
    };
    Field {
        id,
        label,
        control: Control::Select {
            options: all,
            index,
        },
    }
}

fn enum_field<const N: usize>(
    id: FieldId,
    label: &'static str,
    labels: [&'static str; N],
    current: &str,
) -> Field {
    let options: Vec<SelectOption> = labels
        .iter()
        .map(|l| SelectOption {
            value: (*l).to_string(),
            label: (*l).to_string(),
        })
        .collect();
    let index = options.iter().position(|o| o.value == current).unwrap_or(0);
    Field {
        id,
        label,
        control: Control::Select { options, index },
    }
}
