use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use filetui::logic::bootstrap::AppView;

use super::{auth, dashboard, palette::Palette, settings};
use crate::App;

/// Main render function - dispatches on the active screen
pub fn render(f: &mut Frame, app: &mut App) {
    let palette = Palette::for_mode(app.prefs.resolved_mode());
    let tokens = app.prefs.tokens();

    // Paint the whole frame so the mode flips everywhere at once
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    match app.view {
        AppView::Loading => auth::render_loading(f, area, app, &palette, &tokens),
        AppView::SetupRequired => auth::render_setup(f, area, app, &palette, &tokens),
        AppView::Unauthenticated => auth::render_login(f, area, app, &palette, &tokens),
        AppView::Authenticated => {
            dashboard::render_dashboard(f, area, app, &palette, &tokens);
            if app.settings_open {
                settings::render_settings(f, area, app, &palette, &tokens);
            }
        }
    }
}
