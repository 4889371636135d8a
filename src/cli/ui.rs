use super::app::App;
use super::form::{Control, FormEditor};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table},
};
use regdesk::View;

pub fn draw(f: &mut Frame, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(1)].as_ref())
        .split(f.area());

    draw_sidebar(f, app, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(columns[1]);

    draw_table(f, app, main[0]);
    draw_status(f, app, main[1]);

    if let Some(editor) = &app.editor {
        draw_form(f, editor, f.area());
    }

    if app.workspace.pending_delete().is_some() {
        draw_confirm(f, app, f.area());
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let counts = [
        app.workspace.registrations().len(),
        app.workspace.clients().len(),
        app.workspace.portals().len(),
    ];
    let items: Vec<ListItem> = View::ALL
        .iter()
        .zip(counts)
        .map(|(view, count)| ListItem::new(format!(" {} ({count})", view.title())))
        .collect();

    let mut state = ListState::default();
    state.select(View::ALL.iter().position(|v| *v == app.workspace.view()));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" regdesk "))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    let view = app.workspace.view();
    let title = format!(" {} ", view.title());
    let block = Block::default().borders(Borders::ALL).title(title);

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let (header, widths, rows): (Row, Vec<Constraint>, Vec<Row>) = match view {
        View::Registrations => {
            let directory = app.workspace.registration_directory();
            let rows: Vec<Row> = app
                .workspace
                .registrations()
                .iter()
                .map(|r| {
                    Row::new(vec![
                        Cell::from(short_id(&r.id)),
                        Cell::from(directory.portal_name(&r.portal_id).to_string()),
                        Cell::from(directory.client_name(&r.client_id).to_string()),
                        Cell::from(r.country.label()),
                        Cell::from(r.registrant.label()),
                        Cell::from(status_cell(r.status)),
                        Cell::from(date_cell(r.submission_date)),
                        Cell::from(date_cell(r.expiration_date)),
                    ])
                })
                .collect();
            (
                Row::new(vec![
                    "ID",
                    "Portal",
                    "Client",
                    "Country",
                    "Registrant",
                    "Status",
                    "Submitted",
                    "Expires",
                ])
                .style(header_style),
                vec![
                    Constraint::Length(10),
                    Constraint::Min(12),
                    Constraint::Min(14),
                    Constraint::Length(10),
                    Constraint::Length(14),
                    Constraint::Length(15),
                    Constraint::Length(10),
                    Constraint::Length(10),
                ],
                rows,
            )
        }
        View::Clients => {
            let rows: Vec<Row> = app
                .workspace
                .clients()
                .iter()
                .map(|c| Row::new(vec![Cell::from(c.id.clone()), Cell::from(c.name.clone())]))
                .collect();
            (
                Row::new(vec!["ID", "Client"]).style(header_style),
                vec![Constraint::Length(12), Constraint::Min(20)],
                rows,
            )
        }
        View::Portals => {
            let rows: Vec<Row> = app
                .workspace
                .portals()
                .iter()
                .map(|p| Row::new(vec![Cell::from(p.id.clone()), Cell::from(p.name.clone())]))
                .collect();
            (
                Row::new(vec!["ID", "Portal"]).style(header_style),
                vec![Constraint::Length(12), Constraint::Min(20)],
                rows,
            )
        }
    };

    if rows.is_empty() {
        let empty = Paragraph::new("Nothing to show. Press 'a' to add.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.table);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { Color::Red } else { Color::Green };
            Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(color),
            ))
        }
        None => {
            let hint = if app.editor.is_some() {
                "Tab next field | Left/Right choose | Ctrl+S save | Ctrl+R reveal | Esc cancel"
            } else {
                "1/2/3 or Tab switch view | j/k move | a add | e edit | d delete | q quit"
            };
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_form(f: &mut Frame, editor: &FormEditor, screen: Rect) {
    let height = (editor.fields.len() as u16 + 2).min(screen.height.saturating_sub(2));
    let width = 64.min(screen.width.saturating_sub(4));
    let area = centered_rect(screen, width, height);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(editor.title())
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    const LABEL_WIDTH: u16 = 18;
    for (i, field) in editor.fields.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let focused = i == editor.focus;

        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label = Paragraph::new(format!("{:<width$}", field.label, width = LABEL_WIDTH as usize))
            .style(label_style);
        f.render_widget(label, Rect::new(row.x, row.y, LABEL_WIDTH.min(row.width), 1));

        let value_area = Rect::new(
            row.x + LABEL_WIDTH,
            row.y,
            row.width.saturating_sub(LABEL_WIDTH),
            1,
        );
        match &field.control {
            // The focused text field renders the live editor so the cursor
            // shows; everything else renders a plain value line.
            Control::Text(textarea) | Control::Secret(textarea) if focused => {
                f.render_widget(textarea, value_area);
            }
            Control::Select { .. } if focused => {
                let value = format!("< {} >", field.control.display(editor.reveal_secrets));
                f.render_widget(
                    Paragraph::new(value).style(Style::default().fg(Color::Yellow)),
                    value_area,
                );
            }
            control => {
                f.render_widget(
                    Paragraph::new(control.display(editor.reveal_secrets)),
                    value_area,
                );
            }
        }
    }
}

fn draw_confirm(f: &mut Frame, app: &App, screen: Rect) {
    let Some(label) = app.pending_delete_label() else {
        return;
    };
    let area = centered_rect(screen, 46.min(screen.width.saturating_sub(4)), 5);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm delete ")
        .border_style(Style::default().fg(Color::Red));
    let text = vec![
        Line::from(format!("Delete '{label}'?")),
        Line::from(Span::styled(
            "y to confirm, n to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn centered_rect(screen: Rect, width: u16, height: u16) -> Rect {
    let x = screen.x + screen.width.saturating_sub(width) / 2;
    let y = screen.y + screen.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(screen.width), height.min(screen.height))
}

fn short_id(id: &str) -> String {
    if id.chars().count() > 8 {
        let prefix: String = id.chars().take(8).collect();
        format!("{prefix}..")
    } else {
        id.to_string()
    }
}

fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn status_cell(status: regdesk::Status) -> Span<'static> {
    let color = match status {
        regdesk::Status::Expired => Color::Red,
        regdesk::Status::Registered => Color::Green,
        _ => Color::Yellow,
    };
    Span::styled(status.label(), Style::default().fg(color))
}
