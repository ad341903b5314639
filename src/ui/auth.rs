//! Loading, login and setup screens
//!
//! All three center a small card in the frame. The login and setup forms
//! share the same two-field layout; only the headline and the submit wording
//! differ.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use filetui::model::{AuthField, AuthForm};
use filetui::prefs::StyleTokens;

use super::palette::Palette;
use crate::App;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_loading(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let card = centered_card(area, 40, 5);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} Initializing system...", spinner),
            Style::default().fg(tokens.emphasis_text),
        )),
        Line::from(Span::styled(
            "Checking server status",
            Style::default().fg(palette.muted),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        ),
        card,
    );
}

pub fn render_login(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    render_auth_card(
        f,
        area,
        &app.login_form,
        "Sign in",
        "Enter: sign in   Tab: switch field   Esc: quit",
        palette,
        tokens,
    );
}

pub fn render_setup(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    render_auth_card(
        f,
        area,
        &app.setup_form,
        "First-run setup - create the admin account",
        "Enter: create account   Tab: switch field   Esc: quit",
        palette,
        tokens,
    );
}

fn render_auth_card(
    f: &mut Frame,
    area: Rect,
    form: &AuthForm,
    headline: &str,
    hint: &str,
    palette: &Palette,
    tokens: &StyleTokens,
) {
    let card = centered_card(area, 48, 12);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.emphasis_border))
            .title(Span::styled(
                format!(" {} ", headline),
                Style::default()
                    .fg(tokens.emphasis_text)
                    .add_modifier(Modifier::BOLD),
            )),
        card,
    );

    let inner = card.inner(ratatui::layout::Margin {
        horizontal: 2,
        vertical: 1,
    });
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Error / progress
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    render_field(
        f,
        rows[0],
        "Username",
        &form.username,
        form.focus == AuthField::Username,
        palette,
        tokens,
    );
    // Password rendered masked
    let masked = "*".repeat(form.password.chars().count());
    render_field(
        f,
        rows[1],
        "Password",
        &masked,
        form.focus == AuthField::Password,
        palette,
        tokens,
    );

    let status = if form.submitting {
        Line::from(Span::styled("Submitting...", Style::default().fg(palette.muted)))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(ratatui::style::Color::Red),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status), rows[2]);

    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(palette.muted))),
        rows[3],
    );
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    palette: &Palette,
    tokens: &StyleTokens,
) {
    let border = if focused { tokens.focus_ring } else { palette.border };
    f.render_widget(
        Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(label.to_string()),
        ),
        area,
    );
}

/// A rect of at most `width` x `height`, centered in `area`
fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
