#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press. Printable keys carry the character, others a lowercase
/// name such as `enter`, `esc`, `backspace`, `up` or `f2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The typed character, if this is a single printable key without ctrl.
    pub fn printable(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    /// Function key number for keys named `f1`..`f12`.
    pub fn function_key(&self) -> Option<usize> {
        self.key
            .strip_prefix('f')
            .filter(|rest| !rest.is_empty())
            .and_then(|rest| rest.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_accepts_single_chars() {
        assert_eq!(KeyInput::new("a", false).printable(), Some('a'));
        assert_eq!(KeyInput::new("ж", false).printable(), Some('ж'));
    }

    #[test]
    fn printable_rejects_named_and_ctrl_keys() {
        assert_eq!(KeyInput::new("enter", false).printable(), None);
        assert_eq!(KeyInput::new("g", true).printable(), None);
    }

    #[test]
    fn function_key_parses_number() {
        assert_eq!(KeyInput::new("f3", false).function_key(), Some(3));
        assert_eq!(KeyInput::new("f", false).function_key(), None);
        assert_eq!(KeyInput::new("fx", false).function_key(), None);
    }
}
