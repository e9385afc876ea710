use anyhow::Result;
use chrono::Duration;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    domain::{
        admin_gate::AdminGate,
        clock::Clock,
        events::{AppEvent, KeyInput},
        shell_state::{Focus, ShellState},
        widgets::WidgetKind,
    },
    infra::config::ChatConfig,
};

use super::{
    admin::submit_admin_code,
    contracts::ShellOrchestrator,
    expire_messages::expire_due,
    react::{react, THUMBS_UP},
    send_message::{send_message, MessagePersistence, SendMessageCommand, SendMessageError},
};

const MAX_TYPING_INDICATOR_MS: u64 = 60_000;

pub struct DefaultShellOrchestrator<P, C>
where
    P: MessagePersistence,
    C: Clock,
{
    state: ShellState,
    persistence: P,
    clock: C,
    gate: AdminGate,
    author: String,
    typing_duration: Duration,
    rng: StdRng,
}

impl<P, C> DefaultShellOrchestrator<P, C>
where
    P: MessagePersistence,
    C: Clock,
{
    pub fn new(
        state: ShellState,
        chat: &ChatConfig,
        gate: AdminGate,
        persistence: P,
        clock: C,
    ) -> Self {
        Self {
            state,
            persistence,
            clock,
            gate,
            author: chat.author.clone(),
            typing_duration: Duration::milliseconds(
                chat.typing_indicator_ms.min(MAX_TYPING_INDICATOR_MS) as i64,
            ),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Brings time-driven state up to the clock. Runs before every event,
    /// not only on idle ticks.
    fn catch_up(&mut self) {
        let now = self.clock.now();
        self.state.observe(now);
        expire_due(&mut self.state, &mut self.rng, now);
        self.state.settle_typing(now);
    }

    fn handle_composer_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "g" => {
                    let enabled = self.state.toggle_ghost_mode();
                    tracing::debug!(enabled, "ghost mode toggled");
                }
                "r" => {
                    if let Some(id) = self.state.reaction_target() {
                        react(self.state.timeline_mut(), id, THUMBS_UP);
                    }
                }
                "a" => {
                    self.state.clear_notice();
                    self.state.set_focus(Focus::AdminPrompt);
                }
                _ => {}
            }
            return;
        }

        if let Some(slot) = key.function_key() {
            if let Some(widget) = WidgetKind::from_slot(slot) {
                self.state.widgets_mut().toggle(widget);
            }
            return;
        }

        if let Some(ch) = key.printable() {
            self.state.clear_notice();
            self.state.composer_mut().insert_char(ch);
            return;
        }

        match key.key.as_str() {
            "enter" => self.submit_composer(),
            "backspace" => self.state.composer_mut().backspace(),
            "delete" => self.state.composer_mut().delete(),
            "left" => self.state.composer_mut().move_left(),
            "right" => self.state.composer_mut().move_right(),
            "home" => self.state.composer_mut().move_home(),
            "end" => self.state.composer_mut().move_end(),
            "up" => self.state.select_previous(),
            "down" => self.state.select_next(),
            "esc" => self.state.clear_selection(),
            _ => {}
        }
    }

    fn submit_composer(&mut self) {
        if self.state.composer().text().trim().is_empty() {
            return;
        }

        let now = self.clock.now();
        let command = SendMessageCommand {
            content: self.state.composer_mut().take(),
            author: self.author.clone(),
            ephemeral: self.state.ghost_mode(),
        };

        match send_message(
            self.state.timeline_mut(),
            &mut self.persistence,
            command,
            now,
        ) {
            Ok(_) => {
                self.state.clear_selection();
                self.state.show_typing(now, self.typing_duration);
            }
            Err(SendMessageError::EmptyMessage) => {}
        }
    }

    fn handle_admin_prompt_key(&mut self, key: KeyInput) {
        if let Some(ch) = key.printable() {
            self.state.admin_prompt_mut().insert_char(ch);
            return;
        }

        match key.key.as_str() {
            "enter" => {
                submit_admin_code(&mut self.state, &self.gate);
            }
            "backspace" => self.state.admin_prompt_mut().backspace(),
            "esc" => {
                self.state.admin_prompt_mut().take();
                self.state.set_focus(Focus::Composer);
            }
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, key: KeyInput) {
        if key.key == "esc" {
            tracing::debug!("admin overlay closed");
            self.state.set_focus(Focus::Composer);
        }
    }
}

impl<P, C> ShellOrchestrator for DefaultShellOrchestrator<P, C>
where
    P: MessagePersistence,
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        self.catch_up();

        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => match self.state.focus() {
                Focus::Composer => self.handle_composer_key(key),
                Focus::AdminPrompt => self.handle_admin_prompt_key(key),
                Focus::AdminOverlay => self.handle_overlay_key(key),
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::timeline::ChatTimeline,
        infra::stubs::RecordingPersistence,
        test_support::ManualClock,
    };

    type TestOrchestrator<'a> = DefaultShellOrchestrator<RecordingPersistence, &'a ManualClock>;

    fn orchestrator(clock: &ManualClock) -> TestOrchestrator<'_> {
        DefaultShellOrchestrator::new(
            ShellState::new(ChatTimeline::default(), clock.now()),
            &ChatConfig::default(),
            AdminGate::from_code("121524"),
            RecordingPersistence::default(),
            clock,
        )
    }

    fn key(orchestrator: &mut TestOrchestrator<'_>, name: &str) {
        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new(name, false)))
            .expect("key must be handled");
    }

    fn ctrl(orchestrator: &mut TestOrchestrator<'_>, name: &str) {
        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new(name, true)))
            .expect("key must be handled");
    }

    fn type_text(orchestrator: &mut TestOrchestrator<'_>, text: &str) {
        for ch in text.chars() {
            key(orchestrator, &ch.to_string());
        }
    }

    fn tick(orchestrator: &mut TestOrchestrator<'_>) {
        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");
    }

    #[test]
    fn stops_on_quit_event() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn enter_sends_composed_message() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        type_text(&mut orchestrator, "hi");
        key(&mut orchestrator, "enter");

        let messages = orchestrator.state().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "hi");
        assert_eq!(messages[0].author(), "You");
        assert!(orchestrator.state().composer().is_empty());
        assert_eq!(orchestrator.persistence.records.len(), 1);
    }

    #[test]
    fn enter_with_blank_composer_is_ignored() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        type_text(&mut orchestrator, "   ");
        key(&mut orchestrator, "enter");

        assert!(orchestrator.state().messages().is_empty());
        assert!(!orchestrator.state().is_typing());
    }

    #[test]
    fn typing_indicator_clears_after_a_second() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        type_text(&mut orchestrator, "hi");
        key(&mut orchestrator, "enter");
        assert!(orchestrator.state().is_typing());

        clock.advance(Duration::milliseconds(1_000));
        tick(&mut orchestrator);

        assert!(!orchestrator.state().is_typing());
    }

    #[test]
    fn ghost_message_expires_on_tick_after_ttl() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        ctrl(&mut orchestrator, "g");
        type_text(&mut orchestrator, "secret");
        key(&mut orchestrator, "enter");
        assert!(orchestrator.state().messages()[0].is_ephemeral());

        clock.advance(Duration::milliseconds(29_900));
        tick(&mut orchestrator);
        assert_eq!(orchestrator.state().messages().len(), 1);

        clock.advance(Duration::milliseconds(200));
        tick(&mut orchestrator);
        assert!(orchestrator.state().messages().is_empty());
        assert_eq!(orchestrator.state().ash().bursts().len(), 1);
    }

    #[test]
    fn ghost_message_expires_under_continuous_typing() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        ctrl(&mut orchestrator, "g");
        type_text(&mut orchestrator, "secret");
        key(&mut orchestrator, "enter");
        let ghost = orchestrator.state().messages()[0].id();

        for _ in 0..301 {
            clock.advance(Duration::milliseconds(100));
            key(&mut orchestrator, "x");
        }
        ctrl(&mut orchestrator, "r");

        let state = orchestrator.state();
        assert!(state.messages().iter().all(|message| message.id() != ghost));
        assert!(state.messages().is_empty());
        assert_eq!(state.ash().bursts().len(), 1);
        assert_eq!(state.composer().text().chars().count(), 301);
    }

    #[test]
    fn ctrl_r_reacts_to_newest_message() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        type_text(&mut orchestrator, "one");
        key(&mut orchestrator, "enter");
        type_text(&mut orchestrator, "two");
        key(&mut orchestrator, "enter");

        ctrl(&mut orchestrator, "r");

        let messages = orchestrator.state().messages();
        assert!(messages[0].reactions().is_empty());
        assert_eq!(messages[1].reactions(), [THUMBS_UP]);
    }

    #[test]
    fn ctrl_r_reacts_to_selected_message() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        type_text(&mut orchestrator, "one");
        key(&mut orchestrator, "enter");
        type_text(&mut orchestrator, "two");
        key(&mut orchestrator, "enter");

        key(&mut orchestrator, "up");
        key(&mut orchestrator, "up");
        ctrl(&mut orchestrator, "r");

        assert_eq!(orchestrator.state().messages()[0].reactions(), [THUMBS_UP]);
    }

    #[test]
    fn function_keys_toggle_widgets() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        key(&mut orchestrator, "f1");
        key(&mut orchestrator, "f3");

        assert_eq!(
            orchestrator.state().widgets().active(),
            [WidgetKind::Music, WidgetKind::Code]
        );
    }

    #[test]
    fn admin_prompt_unlocks_overlay_and_esc_closes_it() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        ctrl(&mut orchestrator, "a");
        assert_eq!(orchestrator.state().focus(), Focus::AdminPrompt);
        type_text(&mut orchestrator, "121524");
        key(&mut orchestrator, "enter");
        assert_eq!(orchestrator.state().focus(), Focus::AdminOverlay);
        assert!(orchestrator.state().composer().is_empty());

        key(&mut orchestrator, "esc");
        assert_eq!(orchestrator.state().focus(), Focus::Composer);
    }

    #[test]
    fn admin_prompt_rejects_wrong_code() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        ctrl(&mut orchestrator, "a");
        type_text(&mut orchestrator, "999");
        key(&mut orchestrator, "enter");

        assert_eq!(orchestrator.state().focus(), Focus::Composer);
        assert!(orchestrator.state().notice().is_some());
    }
}
