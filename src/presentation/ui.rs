use crate::application::{App, AppMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_hello_card(f, app, chunks[1]);
    render_greeting_card(f, app, chunks[2]);
    render_status_bar(f, app, chunks[4]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("tgreet - Terminal Greeting Client")
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_hello_card(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(app.status_message.clone())];
    if let Some(ref payload) = app.api_payload {
        lines.push(Line::styled(
            format!("Description: {}", payload.description),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::styled(
            format!("Version: {}", payload.version),
            Style::default().fg(Color::Gray),
        ));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Greeting of the Day"),
    );
    f.render_widget(card, area);
}

fn render_greeting_card(f: &mut Frame, app: &App, area: Rect) {
    let name_style = if matches!(app.mode, AppMode::EditingName) {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::styled(
        format!("Name: {}", app.name_input),
        name_style,
    )];
    if app.is_loading {
        lines.push(Line::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    } else if !app.greeting_result.is_empty() {
        lines.push(Line::from(app.greeting_result.clone()));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Personalized Greeting"),
    );
    f.render_widget(card, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => "e: edit name | F1/?: help | q: quit".to_string(),
        AppMode::EditingName => {
            if app.is_loading {
                format!("Name: {} (waiting for greeting...)", app.name_input)
            } else {
                format!("Name: {} (Enter to greet, Esc to cancel)", app.name_input)
            }
        }
        AppMode::Help => "Esc/q/?: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::EditingName => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("tgreet Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TGREET KEY REFERENCE

=== GREETING OF THE DAY ===
Fetched from the server once at startup. The card shows the server's
message plus its description and version once the response arrives.
If the server cannot be reached, the card shows an error note instead.

=== PERSONALIZED GREETING ===
e / i / Enter   Start editing the name field
Enter           Submit the name and fetch a greeting
Esc             Stop editing (the typed name is kept)
Ctrl+U          Clear the name field

Submitting a blank name does nothing. While a request is running the
card shows "Loading..." and further submissions are ignored.

=== OTHER KEYS ===
F1 or ?         Show this help
q               Quit (from normal mode)

=== DIAGNOSTICS ===
Request failures are logged to stderr; set RUST_LOG=debug to also log
each outgoing request."#
        .to_string()
}
