use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Two-valued visual mode governing text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Maps the host's "light marker" to a mode. No marker means dark.
    #[must_use]
    pub fn from_light_marker(light: bool) -> Self {
        if light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read-only view of the active theme.
///
/// Presenters query this on every color resolution instead of caching the
/// mode, so a toggle is observed by the next restyle pass.
pub trait ThemeSource {
    fn current_theme(&self) -> ThemeMode;
}

impl ThemeSource for ThemeMode {
    fn current_theme(&self) -> ThemeMode {
        *self
    }
}

impl<F> ThemeSource for F
where
    F: Fn() -> ThemeMode,
{
    fn current_theme(&self) -> ThemeMode {
        self()
    }
}

/// Shared light-marker flag owned by the host page.
///
/// Clones share the same flag, so the host keeps one clone to flip the theme
/// while the presenter reads through another.
#[derive(Debug, Clone, Default)]
pub struct ThemeToggle {
    light: Rc<Cell<bool>>,
}

impl ThemeToggle {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            light: Rc::new(Cell::new(mode.is_light())),
        }
    }

    pub fn set_light_marker(&self, light: bool) {
        self.light.set(light);
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.light.set(mode.is_light());
    }

    /// Flips the marker and returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current_theme().toggled();
        self.set_mode(next);
        next
    }
}

impl ThemeSource for ThemeToggle {
    fn current_theme(&self) -> ThemeMode {
        ThemeMode::from_light_marker(self.light.get())
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, ThemeSource, ThemeToggle};

    #[test]
    fn toggle_clones_share_the_marker() {
        let host = ThemeToggle::new(ThemeMode::Dark);
        let reader = host.clone();
        assert_eq!(reader.current_theme(), ThemeMode::Dark);

        assert_eq!(host.toggle(), ThemeMode::Light);
        assert_eq!(reader.current_theme(), ThemeMode::Light);

        host.set_light_marker(false);
        assert_eq!(reader.current_theme(), ThemeMode::Dark);
    }

    #[test]
    fn closures_act_as_theme_sources() {
        let source = || ThemeMode::Light;
        assert_eq!(source.current_theme(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.current_theme(), ThemeMode::Dark);
    }
}
