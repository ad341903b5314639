//! Keyboard Input Handler
//!
//! Dispatches key events on the active screen. The settings popup and the
//! search box capture input before the dashboard bindings apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use filetui::logic::bootstrap::AppView;
use filetui::model::AuthForm;

use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.view {
        // Nothing to interact with until the probes resolve
        AppView::Loading => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            }
        }
        AppView::SetupRequired => handle_setup_key(app, key),
        AppView::Unauthenticated => handle_login_key(app, key),
        AppView::Authenticated => {
            if app.settings_open {
                handle_settings_key(app, key);
            } else if app.search_focused {
                handle_search_key(app, key);
            } else {
                handle_dashboard_key(app, key);
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        _ => handle_form_key(&mut app.login_form, &mut app.should_quit, key),
    }
}

fn handle_setup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_setup(),
        _ => handle_form_key(&mut app.setup_form, &mut app.should_quit, key),
    }
}

/// Shared editing bindings for the login and setup forms
fn handle_form_key(form: &mut AuthForm, should_quit: &mut bool, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => form.toggle_focus(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Esc => *should_quit = true,
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Down | KeyCode::Char('j') => app.browser.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.browser.select_prev(),

        KeyCode::Enter => app.descend_selected(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.ascend(),

        KeyCode::Char('r') => app.refresh_listing(),
        KeyCode::Char('v') => {
            let mode = app.browser.view_mode.toggle();
            app.browser.set_view_mode(mode);
        }

        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('s') => app.settings_open = true,
        _ => {}
    }
}

/// Search box editing. Filtering applies on every keystroke; Esc leaves
/// the box without clearing the query.
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.search_focused = false,
        KeyCode::Backspace => {
            let mut query = app.browser.search_query.clone();
            query.pop();
            app.browser.set_search(query);
        }
        KeyCode::Char(c) => {
            let mut query = app.browser.search_query.clone();
            query.push(c);
            app.browser.set_search(query);
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => app.settings_open = false,
        KeyCode::Char('t') => {
            let theme = app.prefs.theme().cycle();
            app.prefs.set_theme(theme);
        }
        KeyCode::Char('a') => {
            let accent = app.prefs.accent().cycle();
            app.prefs.set_accent(accent);
        }
        KeyCode::Char('x') => app.logout(),
        _ => {}
    }
}
