// Keybindings for the pager.
//
// Handlers never match raw `KeyCode`s; they ask the `Keymap` which `Action`
// a key is bound to. Defaults can be overridden per action from the
// `[keys]` table of the settings file.

use std::collections::{BTreeMap, HashMap};

use crate::app::types::Action;
use crate::app::settings::read_settings::SettingsError;
use crate::input::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<KeyCode, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        use KeyCode::*;
        let defaults: [(KeyCode, Action); 19] = [
            (Home, Action::First),
            (Char('g'), Action::First),
            (PageUp, Action::Prev),
            (Char('h'), Action::Prev),
            (Char('p'), Action::Prev),
            (PageDown, Action::Next),
            (Char('l'), Action::Next),
            (Char('n'), Action::Next),
            (End, Action::Last),
            (Char('G'), Action::Last),
            (Left, Action::FocusLeft),
            (BackTab, Action::FocusLeft),
            (Right, Action::FocusRight),
            (Tab, Action::FocusRight),
            (Enter, Action::Activate),
            (Char(' '), Action::Activate),
            (Esc, Action::Clear),
            (Char('q'), Action::Quit),
            (Char('Q'), Action::Quit),
        ];
        Keymap {
            bindings: defaults.into_iter().collect(),
        }
    }
}

impl Keymap {
    /// Start from the defaults and replace the bindings of every action named
    /// in `overrides` with the given key names.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, SettingsError> {
        let mut map = Keymap::default();
        for (name, keys) in overrides {
            let action: Action = name
                .parse()
                .map_err(SettingsError::UnknownAction)?;
            let codes = keys
                .iter()
                .map(|k| {
                    parse_key(k).ok_or_else(|| SettingsError::UnknownKey {
                        action: action.name(),
                        key: k.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            map.bindings.retain(|_, a| *a != action);
            for code in codes {
                map.bindings.insert(code, action);
            }
        }
        Ok(map)
    }

    pub fn action_for(&self, code: &KeyCode) -> Option<Action> {
        self.bindings.get(code).copied()
    }

    /// Keys bound to `action`, in a stable display order.
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        let mut keys: Vec<KeyCode> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| key_name(k));
        keys
    }

    /// Short human-readable binding list, e.g. `End/G`.
    pub fn describe(&self, action: Action) -> String {
        self.keys_for(action)
            .iter()
            .map(key_name)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Parse a key name from the settings file. Single characters map to
/// themselves; everything else must be one of the named keys.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let code = match name.to_ascii_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        _ => return None,
    };
    Some(code)
}

pub fn key_name(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_action() {
        let map = Keymap::default();
        for a in Action::ALL {
            assert!(!map.keys_for(a).is_empty(), "no default key for {a}");
        }
        assert_eq!(map.action_for(&KeyCode::End), Some(Action::Last));
        assert_eq!(map.describe(Action::Last), "End/G");
    }

    #[test]
    fn overrides_replace_only_named_actions() {
        let mut o = BTreeMap::new();
        o.insert("next".to_string(), vec!["j".to_string(), "Down".to_string()]);
        let map = Keymap::with_overrides(&o).unwrap();
        assert_eq!(map.action_for(&KeyCode::Char('j')), Some(Action::Next));
        assert_eq!(map.action_for(&KeyCode::Down), Some(Action::Next));
        assert_eq!(map.action_for(&KeyCode::PageDown), None);
        assert_eq!(map.action_for(&KeyCode::PageUp), Some(Action::Prev));
    }

    #[test]
    fn overrides_reject_unknown_names() {
        let mut o = BTreeMap::new();
        o.insert("warp".to_string(), vec!["w".to_string()]);
        assert!(matches!(
            Keymap::with_overrides(&o),
            Err(SettingsError::UnknownAction(a)) if a == "warp"
        ));

        let mut o = BTreeMap::new();
        o.insert("quit".to_string(), vec!["Hyper".to_string()]);
        assert!(matches!(
            Keymap::with_overrides(&o),
            Err(SettingsError::UnknownKey { action: "quit", .. })
        ));
    }

    #[test]
    fn parse_key_names() {
        assert_eq!(parse_key("PageDown"), Some(KeyCode::PageDown));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("x"), Some(KeyCode::Char('x')));
        assert_eq!(parse_key(""), None);
    }
}
