use super::form::FormEditor;
use super::ui;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use regdesk::{EntityKind, Intent, View, Workspace};
use std::io;

pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct App {
    pub workspace: Workspace,
    pub table: TableState,
    pub editor: Option<FormEditor>,
    pub status: Option<StatusLine>,
    pub exit: bool,
}

impl App {
    pub fn new(workspace: Workspace) -> Self {
        let mut table = TableState::default();
        table.select(Some(0));
        Self {
            workspace,
            table,
            editor: None,
            status: None,
            exit: false,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.workspace.pending_delete().is_some() {
            self.handle_confirm_key(key);
        } else if self.editor.is_some() {
            self.handle_form_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// The delete gate swallows everything except an explicit yes/no.
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.dispatch(Intent::DeleteConfirmed);
                self.status = Some(StatusLine::info("Deleted."));
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.dispatch(Intent::DeleteDeclined);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.dispatch(Intent::CloseModal);
                self.editor = None;
                self.status = None;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let payload = editor.collect();
                match self.workspace.apply(Intent::Submit(payload)) {
                    Ok(()) => {
                        self.editor = None;
                        self.status = Some(StatusLine::info("Saved."));
                        self.clamp_selection();
                    }
                    // Keep the form open with its values intact.
                    Err(err) => self.status = Some(StatusLine::error(err.to_string())),
                }
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.toggle_reveal();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => editor.focus_next(),
            KeyCode::BackTab | KeyCode::Up => editor.focus_prev(),
            KeyCode::Left if editor.focused().control.is_select() => editor.cycle(false),
            KeyCode::Right if editor.focused().control.is_select() => editor.cycle(true),
            _ => editor.input(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.exit = true;
            }
            KeyCode::Tab => {
                let next = self.workspace.view().next();
                self.dispatch(Intent::SelectView(next));
                self.table.select(Some(0));
            }
            KeyCode::Char('1') => self.switch_view(View::Registrations),
            KeyCode::Char('2') => self.switch_view(View::Clients),
            KeyCode::Char('3') => self.switch_view(View::Portals),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('a') => {
                let kind = self.workspace.view().kind();
                self.dispatch(Intent::OpenCreate(kind));
                self.editor = FormEditor::for_modal(&self.workspace);
                self.status = None;
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    let kind = self.workspace.view().kind();
                    self.dispatch(Intent::OpenEdit(kind, id));
                    self.editor = FormEditor::for_modal(&self.workspace);
                    self.status = None;
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let kind = self.workspace.view().kind();
                    self.dispatch(Intent::DeleteRequested(kind, id));
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if let Err(err) = self.workspace.apply(intent) {
            self.status = Some(StatusLine::error(err.to_string()));
        }
    }

    fn switch_view(&mut self, view: View) {
        self.dispatch(Intent::SelectView(view));
        self.table.select(Some(0));
    }

    fn row_count(&self) -> usize {
        match self.workspace.view() {
            View::Registrations => self.workspace.registrations().len(),
            View::Clients => self.workspace.clients().len(),
            View::Portals => self.workspace.portals().len(),
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let rows = self.row_count();
        if rows == 0 {
            self.table.select(None);
            return;
        }
        let current = self.table.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, rows as i64 - 1);
        self.table.select(Some(next as usize));
    }

    fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.table.select(None);
        } else {
            let current = self.table.selected().unwrap_or(0);
            self.table.select(Some(current.min(rows - 1)));
        }
    }

    fn selected_id(&self) -> Option<String> {
        let index = self.table.selected()?;
        match self.workspace.view() {
            View::Registrations => self
                .workspace
                .registrations()
                .get(index)
                .map(|r| r.id.clone()),
            View::Clients => self.workspace.clients().get(index).map(|c| c.id.clone()),
            View::Portals => self.workspace.portals().get(index).map(|p| p.id.clone()),
        }
    }

    /// What the pending delete would remove, for the confirm popup.
    pub fn pending_delete_label(&self) -> Option<String> {
        let pending = self.workspace.pending_delete()?;
        let label = match pending.kind {
            EntityKind::Registration => pending.id.clone(),
            EntityKind::Client => self
                .workspace
                .clients()
                .iter()
                .find(|c| c.id == pending.id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| pending.id.clone()),
            EntityKind::Portal => self
                .workspace
                .portals()
                .iter()
                .find(|p| p.id == pending.id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| pending.id.clone()),
        };
        Some(label)
    }
}
