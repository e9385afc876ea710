use chrono::{DateTime, Duration, Utc};

use super::{
    composer::{ComposerState, MAX_ADMIN_CODE_LENGTH},
    effects::AshField,
    message::{Message, MessageId},
    timeline::ChatTimeline,
    widgets::WidgetPanelState,
};

/// Which surface receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Composer,
    AdminPrompt,
    AdminOverlay,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    running: bool,
    focus: Focus,
    timeline: ChatTimeline,
    composer: ComposerState,
    admin_prompt: ComposerState,
    ghost_mode: bool,
    selected: Option<MessageId>,
    typing_until: Option<DateTime<Utc>>,
    widgets: WidgetPanelState,
    ash: AshField,
    notice: Option<String>,
    observed_at: DateTime<Utc>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ChatTimeline::default(), Utc::now())
    }
}

impl ShellState {
    pub fn new(timeline: ChatTimeline, now: DateTime<Utc>) -> Self {
        Self {
            running: true,
            focus: Focus::Composer,
            timeline,
            composer: ComposerState::default(),
            admin_prompt: ComposerState::with_limit(MAX_ADMIN_CODE_LENGTH),
            ghost_mode: false,
            selected: None,
            typing_until: None,
            widgets: WidgetPanelState::default(),
            ash: AshField::default(),
            notice: None,
            observed_at: now,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn timeline(&self) -> &ChatTimeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut ChatTimeline {
        &mut self.timeline
    }

    pub fn messages(&self) -> &[Message] {
        self.timeline.store().list()
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn admin_prompt(&self) -> &ComposerState {
        &self.admin_prompt
    }

    pub fn admin_prompt_mut(&mut self) -> &mut ComposerState {
        &mut self.admin_prompt
    }

    pub fn ghost_mode(&self) -> bool {
        self.ghost_mode
    }

    pub fn toggle_ghost_mode(&mut self) -> bool {
        self.ghost_mode = !self.ghost_mode;
        self.ghost_mode
    }

    pub fn widgets(&self) -> &WidgetPanelState {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetPanelState {
        &mut self.widgets
    }

    pub fn ash(&self) -> &AshField {
        &self.ash
    }

    pub fn ash_mut(&mut self) -> &mut AshField {
        &mut self.ash
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Latest time seen by the shell, used for countdowns and effects.
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn observe(&mut self, now: DateTime<Utc>) {
        self.observed_at = now;
    }

    pub fn show_typing(&mut self, now: DateTime<Utc>, duration: Duration) {
        self.typing_until = Some(now + duration);
    }

    pub fn is_typing(&self) -> bool {
        self.typing_until.is_some()
    }

    /// Clears the typing indicator once its deadline passed.
    pub fn settle_typing(&mut self, now: DateTime<Utc>) {
        if self.typing_until.is_some_and(|until| until <= now) {
            self.typing_until = None;
        }
    }

    /// Index of the selected message, dropping selections that no longer exist.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.messages().iter().position(|message| message.id() == id)
    }

    /// Selected message, falling back to the newest one.
    pub fn reaction_target(&self) -> Option<MessageId> {
        self.selected_index()
            .and_then(|index| self.messages().get(index))
            .or_else(|| self.messages().last())
            .map(Message::id)
    }

    pub fn select_previous(&mut self) {
        let target = match self.selected_index() {
            Some(index) => index.saturating_sub(1),
            None => match self.messages().len() {
                0 => return,
                len => len - 1,
            },
        };
        self.selected = self.messages().get(target).map(Message::id);
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        self.selected = self.messages().get(index + 1).map(Message::id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp should be valid")
    }

    fn state_with(contents: &[&str]) -> ShellState {
        let mut state = ShellState::new(ChatTimeline::default(), t0());
        for content in contents {
            state.timeline_mut().post(content, "Alice", false, t0());
        }
        state
    }

    #[test]
    fn starts_running_with_composer_focus() {
        let state = state_with(&[]);

        assert!(state.is_running());
        assert_eq!(state.focus(), Focus::Composer);
        assert!(!state.ghost_mode());
    }

    #[test]
    fn reaction_target_defaults_to_newest_message() {
        let state = state_with(&["a", "b"]);

        assert_eq!(state.reaction_target(), Some(state.messages()[1].id()));
    }

    #[test]
    fn select_previous_walks_up_from_newest() {
        let mut state = state_with(&["a", "b", "c"]);

        state.select_previous();
        assert_eq!(state.selected_index(), Some(2));
        state.select_previous();
        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn select_next_past_newest_clears_selection() {
        let mut state = state_with(&["a", "b"]);
        state.select_previous();
        state.select_previous();

        state.select_next();
        assert_eq!(state.selected_index(), Some(1));
        state.select_next();
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn selection_of_removed_message_is_dropped() {
        let mut state = state_with(&["a", "b"]);
        state.select_previous();
        let id = state.messages()[1].id();
        state.timeline_mut().remove(id);

        assert_eq!(state.selected_index(), None);
        assert_eq!(state.reaction_target(), Some(state.messages()[0].id()));
    }

    #[test]
    fn typing_indicator_settles_after_deadline() {
        let mut state = state_with(&[]);
        state.show_typing(t0(), Duration::seconds(1));

        state.settle_typing(t0() + Duration::milliseconds(500));
        assert!(state.is_typing());

        state.settle_typing(t0() + Duration::seconds(1));
        assert!(!state.is_typing());
    }
}
