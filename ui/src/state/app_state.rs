// The headless view-model a renderer binds to: theme, search text, table
// ordering, notifications and key bindings live here; widgets only read and
// dispatch.

use serde::{Deserialize, Serialize};

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::error::UiError;
use crate::notify::NotificationCenter;
use crate::shortcuts::ShortcutRegistry;
use crate::storage::KvStore;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::default_dark(),
            Theme::Light => ThemePalette::default_light(),
        }
    }
}

/// UI actions dispatched when a bound shortcut fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    FocusSearch,
    CloseOverlay,
    ExportCsv,
}

/// Which column a table is ordered by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: usize,
    pub ascending: bool,
}

impl SortState {
    /// Header-click semantics: a new column sorts ascending, clicking the
    /// active column flips the direction.
    pub fn toggle(current: Option<SortState>, column: usize) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                ascending: !state.ascending,
            },
            _ => SortState {
                column,
                ascending: true,
            },
        }
    }
}

/// Preferences persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Preferences {
    theme: Theme,
    language: String,
}

const PREFERENCES_KEY: &str = "preferences";

pub struct AppState {
    pub theme: Theme,
    pub language: String,
    pub search_query: String,
    pub sort: Option<SortState>,
    pub notifications: NotificationCenter,
    pub shortcuts: ShortcutRegistry<UiAction>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, UiError> {
        let theme = match config.app.theme.as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => {
                tracing::warn!("Unknown theme '{}', falling back to dark", other);
                Theme::Dark
            }
        };

        let mut shortcuts = ShortcutRegistry::new();
        shortcuts.bind_str(&config.shortcuts.focus_search, UiAction::FocusSearch)?;
        shortcuts.bind_str(&config.shortcuts.close_overlay, UiAction::CloseOverlay)?;
        shortcuts.bind_str(&config.shortcuts.export_csv, UiAction::ExportCsv)?;

        Ok(Self {
            theme,
            language: config.app.language.clone(),
            search_query: String::new(),
            sort: None,
            notifications: NotificationCenter::with_timings(
                config.notification_dismiss(),
                config.notification_fade(),
            ),
            shortcuts,
        })
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Records a header click and re-sorts `table` accordingly. On failure
    /// (a ragged row) neither the table nor the recorded sort state changes.
    pub fn sort_table(&mut self, table: &mut Table, column: usize) -> Result<SortState, UiError> {
        let next = SortState::toggle(self.sort, column);
        table.sort_by_column(next.column, next.ascending)?;
        self.sort = Some(next);
        Ok(next)
    }

    /// Persists the session-spanning preferences.
    pub fn save_preferences(&self, store: &mut KvStore) -> Result<(), UiError> {
        store.set(
            PREFERENCES_KEY,
            &Preferences {
                theme: self.theme,
                language: self.language.clone(),
            },
        )
    }

    /// Restores previously saved preferences; returns whether any were found.
    pub fn load_preferences(&mut self, store: &KvStore) -> bool {
        match store.get::<Preferences>(PREFERENCES_KEY) {
            Some(prefs) => {
                self.theme = prefs.theme;
                self.language = prefs.language;
                true
            }
            None => false,
        }
    }
}
