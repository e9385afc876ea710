use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::{
    composer::ComposerState,
    effects::{AshBurst, AshParticle},
    message::Message,
    shell_state::{Focus, ShellState},
    widgets::WidgetKind,
};

use super::styles;

const APP_TITLE: &str = "NovaSphere OS";
const COMPOSER_PLACEHOLDER: &str = "Write a message...";
const PROMPT_SYMBOL: &str = "> ";
const ASH_SYMBOL: &str = "·";
const TYPING_FRAME_MS: i64 = 200;

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [chat_area, widgets_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .areas(body_area);

    // Composer: 1 border + 1 text + 1 border
    let [messages_area, typing_area, composer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(chat_area);

    render_header(frame, header_area, state);
    render_messages(frame, messages_area, state);
    render_ash(frame, messages_area, state);
    render_typing_indicator(frame, typing_area, state);
    render_composer(frame, composer_area, state);
    render_widgets(frame, widgets_area, state);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);

    match state.focus() {
        Focus::Composer => {}
        Focus::AdminPrompt => render_admin_prompt(frame, state.admin_prompt()),
        Focus::AdminOverlay => render_admin_overlay(frame, state),
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let line = Line::from(vec![
        Span::styled(APP_TITLE, styles::title_style()),
        Span::raw("   "),
        ghost_badge(state.ghost_mode()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );
    frame.render_widget(header, area);
}

fn ghost_badge(enabled: bool) -> Span<'static> {
    let label = if enabled {
        " 👻 Ghost mode (ON) "
    } else {
        " Ghost mode (OFF) "
    };
    Span::styled(label, styles::ghost_badge_style(enabled))
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let messages = state.messages();
    let inner_width = area.width.saturating_sub(2) as usize;
    let now = state.observed_at();

    let items: Vec<ListItem<'static>> = messages
        .iter()
        .map(|message| {
            let remaining_secs = state
                .timeline()
                .remaining(message, now)
                .map(|left| ceil_secs(left.num_milliseconds()));
            message_item(message, remaining_secs, inner_width)
        })
        .collect();

    let selected = state.selected_index();
    let mut list = List::new(items).block(
        Block::default()
            .title(format!("Main chat ({})", messages.len()))
            .borders(Borders::ALL)
            .border_style(styles::focused_border_style()),
    );
    if selected.is_some() {
        list = list.highlight_style(styles::selected_message_style());
    }

    // Without a selection, anchor the view on the newest message.
    let anchor = selected.or_else(|| messages.len().checked_sub(1));
    let mut list_state = ListState::default().with_selected(anchor);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn message_item(
    message: &Message,
    remaining_secs: Option<i64>,
    width: usize,
) -> ListItem<'static> {
    let text_style = if message.is_ephemeral() {
        styles::ghost_text_style()
    } else {
        styles::message_text_style()
    };

    let mut lines = vec![message_header_line(message, remaining_secs)];
    lines.extend(
        wrap_text(message.content(), width)
            .into_iter()
            .map(|chunk| Line::from(Span::styled(chunk, text_style))),
    );
    if let Some(reactions) = reactions_line(message.reactions()) {
        lines.push(reactions);
    }
    lines.push(Line::default());

    ListItem::new(lines)
}

fn message_header_line(message: &Message, remaining_secs: Option<i64>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(message.author().to_owned(), styles::author_style()),
        Span::raw("  "),
        Span::styled(format_time(message.created_at()), styles::message_time_style()),
    ];

    if let Some(secs) = remaining_secs {
        spans.push(Span::styled(
            format!(" ⏳ {secs}s"),
            styles::ghost_countdown_style(),
        ));
    }

    Line::from(spans)
}

fn reactions_line(reactions: &[String]) -> Option<Line<'static>> {
    if reactions.is_empty() {
        return None;
    }

    let mut spans = Vec::with_capacity(reactions.len() * 2);
    for reaction in reactions {
        spans.push(Span::styled(format!(" {reaction} "), styles::reaction_style()));
        spans.push(Span::raw(" "));
    }
    Some(Line::from(spans))
}

fn render_ash(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let now = state.observed_at();

    for burst in state.ash().bursts() {
        let progress = burst.fade_progress(now);
        let style = styles::ash_style(progress);
        for (x, y) in burst_cells(burst, inner, progress) {
            frame.buffer_mut().set_string(x, y, ASH_SYMBOL, style);
        }
    }
}

fn burst_cells(burst: &AshBurst, inner: Rect, progress: f32) -> Vec<(u16, u16)> {
    burst
        .particles()
        .iter()
        .filter_map(|particle| particle_cell(particle, inner, progress))
        .collect()
}

/// Maps a particle to a cell inside `inner`, drifting it with fade progress.
fn particle_cell(particle: &AshParticle, inner: Rect, progress: f32) -> Option<(u16, u16)> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let max_x = inner.width - 1;
    let max_y = inner.height - 1;
    let base_x = (particle.x_pct / 100.0 * f32::from(max_x)) as u16;
    let base_y = (particle.y_pct / 100.0 * f32::from(max_y)) as u16;
    let drift_x = (f32::from(particle.drift.0) * progress) as u16;
    let drift_y = (f32::from(particle.drift.1) * progress) as u16;

    Some((
        inner.x + base_x.saturating_add(drift_x).min(max_x),
        inner.y + base_y.saturating_add(drift_y).min(max_y),
    ))
}

fn render_typing_indicator(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    if !state.is_typing() {
        return;
    }

    let phase = (state.observed_at().timestamp_millis() / TYPING_FRAME_MS).rem_euclid(3);
    let dots: Vec<Span<'static>> = (0..3)
        .map(|index| {
            let symbol = if index == phase { "● " } else { "• " };
            Span::styled(symbol, styles::typing_dot_style())
        })
        .collect();

    let mut spans = vec![Span::raw(" ")];
    spans.extend(dots);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_composer(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let composer = state.composer();
    let is_focused = state.focus() == Focus::Composer;
    let border_style = if is_focused {
        styles::focused_border_style()
    } else {
        styles::panel_border_style()
    };

    let paragraph = Paragraph::new(composer_line(composer)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(display_width_before(composer.text(), composer.cursor()));
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn composer_line(composer: &ComposerState) -> Line<'static> {
    let body = if composer.is_empty() {
        Span::styled(COMPOSER_PLACEHOLDER, styles::input_placeholder_style())
    } else {
        Span::styled(composer.text().to_owned(), styles::message_text_style())
    };

    Line::from(vec![
        Span::styled(PROMPT_SYMBOL, styles::input_prompt_style()),
        body,
    ])
}

fn render_widgets(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let panel = state.widgets();
    let active = panel.active();

    let mut constraints = vec![Constraint::Length(WidgetKind::CATALOG.len() as u16 + 2)];
    constraints.extend(
        active
            .iter()
            .map(|kind| Constraint::Length(widget_body(*kind).len() as u16 + 2)),
    );
    constraints.push(Constraint::Min(0));

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let catalog: Vec<Line<'static>> = WidgetKind::CATALOG
        .iter()
        .enumerate()
        .map(|(index, kind)| catalog_line(index + 1, *kind, panel.is_active(*kind)))
        .collect();
    frame.render_widget(
        Paragraph::new(catalog).block(
            Block::default()
                .title("Widgets")
                .borders(Borders::ALL)
                .border_style(styles::panel_border_style()),
        ),
        areas[0],
    );

    for (kind, widget_area) in active.iter().zip(areas.iter().skip(1)) {
        frame.render_widget(
            Paragraph::new(widget_body(*kind)).block(
                Block::default()
                    .title(kind.title())
                    .borders(Borders::ALL)
                    .border_style(styles::panel_border_style()),
            ),
            *widget_area,
        );
    }
}

fn catalog_line(slot: usize, kind: WidgetKind, active: bool) -> Line<'static> {
    let (marker, style) = if active {
        (" ×", styles::widget_active_style())
    } else {
        ("", styles::widget_inactive_style())
    };
    Line::from(Span::styled(format!("F{slot} {}{marker}", kind.title()), style))
}

fn widget_body(kind: WidgetKind) -> Vec<Line<'static>> {
    match kind {
        WidgetKind::Crypto => vec![
            Line::from(vec![
                Span::raw("Bitcoin  "),
                Span::styled("$42,850", styles::widget_highlight_style()),
            ]),
            Line::from(Span::styled(
                "24h: +3.2%  Vol: $28B",
                styles::message_time_style(),
            )),
        ],
        WidgetKind::Music => vec![
            Line::from("NovaSphere Theme"),
            Line::from(Span::styled("Electronic", styles::message_time_style())),
            Line::from(Span::styled("━━━━────────", styles::typing_dot_style())),
            Line::from("  ⏮  ▶  ⏭"),
        ],
        WidgetKind::Code => vec![
            Line::from(Span::styled("function", styles::ghost_text_style())),
            Line::from("  liquidGlass"),
            Line::from(Span::styled(
                "    // liquid glass effect",
                styles::message_time_style(),
            )),
        ],
        WidgetKind::Browser => vec![Line::from(Span::styled(
            "No shared session",
            styles::message_time_style(),
        ))],
    }
}

fn render_admin_prompt(frame: &mut Frame<'_>, prompt: &ComposerState) {
    let area = centered_rect(36, 3, frame.area());
    let masked = "*".repeat(prompt.text().chars().count());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(PROMPT_SYMBOL, styles::input_prompt_style()),
            Span::raw(masked),
        ]))
        .block(
            Block::default()
                .title("Admin code")
                .borders(Borders::ALL)
                .border_style(styles::focused_border_style()),
        ),
        area,
    );
}

fn render_admin_overlay(frame: &mut Frame<'_>, state: &ShellState) {
    let lines = admin_stats_lines(state);
    let area = centered_rect(44, lines.len() as u16 + 2, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Admin panel (Esc to close)")
                .borders(Borders::ALL)
                .border_style(styles::focused_border_style()),
        ),
        area,
    );
}

fn admin_stats_lines(state: &ShellState) -> Vec<Line<'static>> {
    let timeline = state.timeline();
    let store = timeline.store();
    let next_expiry = timeline
        .expiry()
        .next_due()
        .map(|due| format!("{}s", ceil_secs((due - state.observed_at()).num_milliseconds())))
        .unwrap_or_else(|| "-".to_owned());

    vec![
        Line::from(format!("Messages: {}", store.len())),
        Line::from(format!("Ghost messages: {}", store.ephemeral_count())),
        Line::from(format!("Reactions: {}", store.reaction_count())),
        Line::from(format!("Scheduled expiries: {}", timeline.expiry().len())),
        Line::from(format!("Next expiry in: {next_expiry}")),
        Line::from(format!("Active widgets: {}", state.widgets().active().len())),
    ]
}

fn status_line(state: &ShellState) -> Line<'static> {
    let hints = match state.focus() {
        Focus::Composer => {
            "Enter: send | Ctrl+G: ghost | Ctrl+R: 👍 | ↑/↓: select | F1-F4: widgets | Ctrl+A: admin | Ctrl+Q: quit"
        }
        Focus::AdminPrompt => "Enter: unlock | Esc: cancel",
        Focus::AdminOverlay => "Esc: close admin panel",
    };

    let mut spans = Vec::new();
    if let Some(notice) = state.notice() {
        spans.push(Span::styled(format!("{notice} | "), styles::notice_style()));
    }
    spans.push(Span::raw(hints));
    Line::from(spans)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Splits `text` into rows no wider than `width` display cells.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_owned()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        if ch == '\n' {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    rows.push(current);
    rows
}

fn display_width_before(text: &str, cursor: usize) -> u16 {
    let width: usize = text
        .chars()
        .take(cursor)
        .map(|ch| ch.width().unwrap_or(0))
        .sum();
    width.min(u16::MAX as usize) as u16
}

fn ceil_secs(millis: i64) -> i64 {
    (millis.max(0) + 999) / 1_000
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}
