//! Preference store
//!
//! Durable visual preferences (theme + accent) and the style tokens derived
//! from them. The store is constructed once at startup and handed to
//! consumers explicitly; it is the only state shared across screens.
//!
//! Persistence is a flat string map in a YAML file, keyed by
//! `{namespace}-theme` / `{namespace}-accent`. Absent or unparsable values
//! fall back to the defaults (`system`, `blue`) without raising an error,
//! and a failed write never takes the app down — preferences are a comfort
//! feature, not a correctness one.

use ratatui::style::Color;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::System, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn cycle(self) -> Theme {
        match self {
            Theme::Light => Theme::System,
            Theme::System => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Blue,
    Violet,
    Emerald,
    Rose,
    Amber,
    Cyan,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Blue,
        Accent::Violet,
        Accent::Emerald,
        Accent::Rose,
        Accent::Amber,
        Accent::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Violet => "violet",
            Accent::Emerald => "emerald",
            Accent::Rose => "rose",
            Accent::Amber => "amber",
            Accent::Cyan => "cyan",
        }
    }

    pub fn parse(value: &str) -> Option<Accent> {
        match value {
            "blue" => Some(Accent::Blue),
            "violet" => Some(Accent::Violet),
            "emerald" => Some(Accent::Emerald),
            "rose" => Some(Accent::Rose),
            "amber" => Some(Accent::Amber),
            "cyan" => Some(Accent::Cyan),
            _ => None,
        }
    }

    pub fn cycle(self) -> Accent {
        match self {
            Accent::Blue => Accent::Violet,
            Accent::Violet => Accent::Emerald,
            Accent::Emerald => Accent::Rose,
            Accent::Rose => Accent::Amber,
            Accent::Amber => Accent::Cyan,
            Accent::Cyan => Accent::Blue,
        }
    }
}

/// Concrete light/dark classification after resolving `Theme::System`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// Semantic role → terminal color bundle derived from the accent.
///
/// One fixed bundle per accent; six bundles total. Every screen styles its
/// emphasis elements through these roles instead of naming colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub emphasis_text: Color,
    pub primary_surface: Color,
    pub primary_surface_hover: Color,
    pub focus_ring: Color,
    pub emphasis_border: Color,
    pub subtle_tint: Color,
}

impl StyleTokens {
    /// Derive the token bundle for an accent. Total and deterministic:
    /// every accent maps to exactly one bundle, no I/O involved.
    pub fn for_accent(accent: Accent) -> Self {
        // (500, 600, 700, 950) swatches per accent
        let (base, surface, hover, tint) = match accent {
            Accent::Blue => (
                Color::Rgb(59, 130, 246),
                Color::Rgb(37, 99, 235),
                Color::Rgb(29, 78, 216),
                Color::Rgb(23, 37, 84),
            ),
            Accent::Violet => (
                Color::Rgb(139, 92, 246),
                Color::Rgb(124, 58, 237),
                Color::Rgb(109, 40, 217),
                Color::Rgb(46, 16, 101),
            ),
            Accent::Emerald => (
                Color::Rgb(16, 185, 129),
                Color::Rgb(5, 150, 105),
                Color::Rgb(4, 120, 87),
                Color::Rgb(2, 44, 34),
            ),
            Accent::Rose => (
                Color::Rgb(244, 63, 94),
                Color::Rgb(225, 29, 72),
                Color::Rgb(190, 18, 60),
                Color::Rgb(76, 5, 25),
            ),
            Accent::Amber => (
                Color::Rgb(245, 158, 11),
                Color::Rgb(217, 119, 6),
                Color::Rgb(180, 83, 9),
                Color::Rgb(69, 26, 3),
            ),
            Accent::Cyan => (
                Color::Rgb(6, 182, 212),
                Color::Rgb(8, 145, 178),
                Color::Rgb(14, 116, 144),
                Color::Rgb(8, 51, 68),
            ),
        };

        Self {
            emphasis_text: base,
            primary_surface: surface,
            primary_surface_hover: hover,
            focus_ring: base,
            emphasis_border: surface,
            subtle_tint: tint,
        }
    }
}

/// Classify a COLORFGBG value ("fg;bg") into a color mode.
///
/// Terminals advertising background codes 0–6 or 8 are dark; 7 and 15
/// (and anything brighter) are light.
pub fn scheme_from_colorfgbg(value: &str) -> Option<ColorMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg <= 6 || bg == 8 {
        ColorMode::Dark
    } else {
        ColorMode::Light
    })
}

/// Sample the terminal's color scheme.
///
/// Falls back to dark when the terminal does not advertise COLORFGBG.
pub fn detect_terminal_scheme() -> ColorMode {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| scheme_from_colorfgbg(&v))
        .unwrap_or(ColorMode::Dark)
}

/// The durable theme/accent store.
///
/// Created once at startup, injected into whatever needs it, torn down
/// only at process exit.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    namespace: String,
    theme: Theme,
    accent: Accent,
    /// Terminal scheme sampled at load and on theme change. A live scheme
    /// change while `Theme::System` is active is picked up on the next
    /// theme mutation, not continuously.
    system_sample: ColorMode,
}

impl PrefStore {
    /// Default preference file location: `<config_dir>/filetui/prefs.yaml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("filetui")
            .join("prefs.yaml")
    }

    pub fn load(namespace: &str) -> Self {
        Self::load_from(Self::default_path(), namespace)
    }

    /// Seed the store from a specific file (or defaults when the file is
    /// missing, unreadable, or holds unknown values).
    pub fn load_from(path: PathBuf, namespace: &str) -> Self {
        let map = read_pref_map(&path);

        let theme = map
            .get(&format!("{}-theme", namespace))
            .and_then(|v| Theme::parse(v))
            .unwrap_or_default();
        let accent = map
            .get(&format!("{}-accent", namespace))
            .and_then(|v| Accent::parse(v))
            .unwrap_or_default();

        Self {
            path,
            namespace: namespace.to_string(),
            theme,
            accent,
            system_sample: detect_terminal_scheme(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Persist and apply a theme change, re-sampling the terminal scheme
    /// so `Theme::System` resolves against the current signal.
    pub fn set_theme(&mut self, theme: Theme) {
        self.persist("theme", theme.as_str());
        self.theme = theme;
        self.system_sample = detect_terminal_scheme();
    }

    pub fn set_accent(&mut self, accent: Accent) {
        self.persist("accent", accent.as_str());
        self.accent = accent;
    }

    /// The concrete light/dark mode every screen paints with
    pub fn resolved_mode(&self) -> ColorMode {
        match self.theme {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
            Theme::System => self.system_sample,
        }
    }

    pub fn tokens(&self) -> StyleTokens {
        StyleTokens::for_accent(self.accent)
    }

    fn persist(&self, suffix: &str, value: &str) {
        let mut map = read_pref_map(&self.path);
        map.insert(format!("{}-{}", self.namespace, suffix), value.to_string());

        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, serde_yaml::to_string(&map)?)?;
            Ok(())
        };

        if let Err(e) = write() {
            // Preferences just won't stick this session
            log_debug(&format!(
                "Failed to persist preference {}-{}: {}",
                self.namespace, suffix, e
            ));
        }
    }
}

fn read_pref_map(path: &Path) -> BTreeMap<String, String> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_yaml::from_str(&raw).ok())
        .unwrap_or_default()
}
