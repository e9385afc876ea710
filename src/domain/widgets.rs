//! Side panel widgets. Content is decorative; only the active set is state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Crypto,
    Music,
    Code,
    Browser,
}

impl WidgetKind {
    pub const CATALOG: [WidgetKind; 4] = [
        WidgetKind::Crypto,
        WidgetKind::Music,
        WidgetKind::Code,
        WidgetKind::Browser,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WidgetKind::Crypto => "Crypto Tracker",
            WidgetKind::Music => "Music Jam",
            WidgetKind::Code => "Code Pad",
            WidgetKind::Browser => "Shared Browser",
        }
    }

    /// Catalog slot, 1-based, as bound to the function keys.
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1)
            .and_then(|index| Self::CATALOG.get(index).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPanelState {
    active: Vec<WidgetKind>,
}

impl Default for WidgetPanelState {
    fn default() -> Self {
        Self {
            active: vec![WidgetKind::Crypto, WidgetKind::Music],
        }
    }
}

impl WidgetPanelState {
    pub fn active(&self) -> &[WidgetKind] {
        &self.active
    }

    pub fn is_active(&self, kind: WidgetKind) -> bool {
        self.active.contains(&kind)
    }

    /// Deactivates an active widget or appends an inactive one.
    pub fn toggle(&mut self, kind: WidgetKind) {
        if self.is_active(kind) {
            self.active.retain(|active| *active != kind);
        } else {
            self.active.push(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_crypto_and_music() {
        let panel = WidgetPanelState::default();

        assert_eq!(panel.active(), [WidgetKind::Crypto, WidgetKind::Music]);
    }

    #[test]
    fn toggle_appends_in_activation_order() {
        let mut panel = WidgetPanelState::default();
        panel.toggle(WidgetKind::Browser);
        panel.toggle(WidgetKind::Code);

        assert_eq!(
            panel.active(),
            [
                WidgetKind::Crypto,
                WidgetKind::Music,
                WidgetKind::Browser,
                WidgetKind::Code
            ]
        );
    }

    #[test]
    fn toggle_removes_active_widget() {
        let mut panel = WidgetPanelState::default();
        panel.toggle(WidgetKind::Crypto);

        assert_eq!(panel.active(), [WidgetKind::Music]);
        assert!(!panel.is_active(WidgetKind::Crypto));
    }

    #[test]
    fn slots_map_to_catalog() {
        assert_eq!(WidgetKind::from_slot(1), Some(WidgetKind::Crypto));
        assert_eq!(WidgetKind::from_slot(4), Some(WidgetKind::Browser));
        assert_eq!(WidgetKind::from_slot(0), None);
        assert_eq!(WidgetKind::from_slot(5), None);
    }
}
