// Keyboard shortcut registry. The host event loop normalizes its key events
// into `KeyCombo`s and dispatches whatever action `resolve` hands back.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// A normalized key chord: modifier flags plus a single named key.
///
/// The key name is stored lowercased ("k", "escape", "f5"), so combos built
/// programmatically and combos parsed from configuration compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub key: String,
}

impl KeyCombo {
    /// A bare key with no modifiers.
    pub fn key(key: &str) -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            key: key.to_lowercase(),
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

impl FromStr for KeyCombo {
    type Err = UiError;

    /// Parses chords like `"Ctrl+K"`, `"cmd+shift+e"` or `"Escape"`.
    /// Modifier names are case-insensitive; exactly one non-modifier key is
    /// required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| UiError::InvalidShortcut {
            combo: s.to_string(),
            reason: reason.to_string(),
        };

        let mut combo = KeyCombo::key("");
        for part in s.split('+') {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => combo.ctrl = true,
                "alt" | "option" => combo.alt = true,
                "shift" => combo.shift = true,
                "cmd" | "meta" | "super" => combo.meta = true,
                key => {
                    if !combo.key.is_empty() {
                        return Err(invalid("more than one non-modifier key"));
                    }
                    combo.key = key.to_string();
                }
            }
        }

        if combo.key.is_empty() {
            return Err(invalid("missing key"));
        }
        Ok(combo)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.meta {
            write!(f, "Cmd+")?;
        }
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Maps key chords to caller-supplied actions.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry<A> {
    bindings: HashMap<KeyCombo, A>,
}

impl<A> ShortcutRegistry<A> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `combo` to `action`. Rebinding an existing combo replaces it and
    /// returns the previous action.
    pub fn bind(&mut self, combo: KeyCombo, action: A) -> Option<A> {
        self.bindings.insert(combo, action)
    }

    /// Parses and binds a chord from configuration text.
    pub fn bind_str(&mut self, combo: &str, action: A) -> Result<Option<A>, UiError> {
        Ok(self.bind(combo.parse()?, action))
    }

    pub fn resolve(&self, combo: &KeyCombo) -> Option<&A> {
        self.bindings.get(combo)
    }

    pub fn unbind(&mut self, combo: &KeyCombo) -> Option<A> {
        self.bindings.remove(combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A> Default for ShortcutRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}
