//! Chat UI rendering components

use super::state::ChatScreenState;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use vivo_core::constants::{
    CHAT_DESCRIPTION, CHAT_TITLE, DISCLAIMER, INFO_PANELS, INPUT_PLACEHOLDER, SUBTITLE, TITLE,
};
use vivo_core::session::{ChatSession, InputController, QUICK_ACTIONS};
use vivo_core::view::{Alignment, Badge, MessageRow, thread_rows};
use vivo_core::AnalysisClient;

/// Narrower terminals drop the sidebar.
const SIDEBAR_MIN_WIDTH: u16 = 90;
const SIDEBAR_WIDTH: u16 = 36;
const MAX_INPUT_LINES: u16 = 4;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface.
    ///
    /// Returns the largest valid scroll offset for the message area so the
    /// caller can clamp scrolling.
    pub fn render<C>(
        frame: &mut Frame,
        session: &ChatSession<C>,
        screen: &ChatScreenState,
        endpoint: &str,
    ) -> u16
    where
        C: AnalysisClient + 'static,
    {
        let area = frame.area();
        let (typed_rows, _) = input_rows(session.input(), input_width(area.width));
        let input_lines = u16::try_from(typed_rows.len())
            .unwrap_or(u16::MAX)
            .clamp(1, MAX_INPUT_LINES);

        // Layout: Header, Body, Input, Disclaimer, Help bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(input_lines + 2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_header(frame, rows[0], session, screen, endpoint);

        let max_scroll = if area.width >= SIDEBAR_MIN_WIDTH {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
                .split(rows[1]);
            Self::render_sidebar(frame, body[1], screen);
            Self::render_messages(frame, body[0], session, screen)
        } else {
            Self::render_messages(frame, rows[1], session, screen)
        };

        Self::render_input(frame, rows[2], session.input(), session.is_submitting());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(DISCLAIMER, theme::footer()))),
            rows[3],
        );
        Self::render_help_bar(frame, rows[4]);
        max_scroll
    }

    fn render_header<C>(
        frame: &mut Frame,
        area: Rect,
        session: &ChatSession<C>,
        screen: &ChatScreenState,
        endpoint: &str,
    ) where
        C: AnalysisClient + 'static,
    {
        let mut status = vec![
            Span::styled(format!(" ✦ {TITLE} "), theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(endpoint.to_string(), theme::subtitle()),
        ];
        if session.is_submitting() {
            status.push(Span::styled(
                format!("  {} analysing", screen.spinner()),
                theme::loading(),
            ));
        }
        if let Some(error) = session.last_error() {
            status.push(Span::styled(format!("  ✗ {error}"), theme::error()));
        } else if let Some(message) = &screen.status_message {
            status.push(Span::styled(format!("  │ {message}"), theme::subtitle()));
        }

        let lines = vec![
            Line::from(status),
            Line::from(Span::styled(format!(" {SUBTITLE}"), theme::subtitle())),
        ];
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render messages area
    fn render_messages<C>(
        frame: &mut Frame,
        area: Rect,
        session: &ChatSession<C>,
        screen: &ChatScreenState,
    ) -> u16
    where
        C: AnalysisClient + 'static,
    {
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;

        // Rows are wrapped here so the line count matches what is drawn
        let mut lines: Vec<Line> = Vec::new();
        for row in thread_rows(session.messages()) {
            lines.extend(message_lines(&row, inner_width));
            lines.push(Line::from(""));
        }

        if session.is_submitting() {
            lines.push(
                Line::from(vec![
                    Span::styled(" AI ", theme::assistant_badge()),
                    Span::styled(format!(" {} Thinking...", screen.spinner()), theme::loading()),
                ])
                .left_aligned(),
            );
        }

        let max_scroll =
            u16::try_from(lines.len().saturating_sub(inner_height)).unwrap_or(u16::MAX);
        let scroll = if screen.scroll_offset == u16::MAX {
            max_scroll
        } else {
            screen.scroll_offset.min(max_scroll)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled(format!(" {CHAT_TITLE} "), theme::title()))
            .title_bottom(Span::styled(format!(" {CHAT_DESCRIPTION} "), theme::footer()));

        let para = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(para, area);
        max_scroll
    }

    fn render_sidebar(frame: &mut Frame, area: Rect, screen: &ChatScreenState) {
        let mut lines: Vec<Line> = vec![Line::from(Span::styled("Quick Questions", theme::title()))];
        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" F{} ", i + 1), theme::key_hint()),
                Span::styled(action.text, theme::text()),
            ]));
        }

        if screen.show_help {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Commands", theme::title())));
            for (cmd, what) in [
                ("/quick [n]", "fill a quick question"),
                ("/help", "toggle this list"),
                ("/exit", "leave the chat"),
            ] {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {cmd} "), theme::key_hint()),
                    Span::styled(what, theme::subtitle()),
                ]));
            }
        }

        for (title, body) in INFO_PANELS {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(title, theme::title())));
            lines.push(Line::from(Span::styled(body, theme::subtitle())));
        }

        let block = Block::default()
            .borders(Borders::TOP | Borders::RIGHT | Borders::BOTTOM)
            .border_style(theme::border());
        let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, input: &InputController, busy: bool) {
        let lines: Vec<Line> = if input.is_empty() {
            vec![Line::from(vec![
                Span::styled("> ", theme::title()),
                Span::styled(INPUT_PLACEHOLDER, theme::subtitle()),
            ])]
        } else {
            let (rows, cursor_row) = input_rows(input, input_width(area.width));
            let visible = area.height.saturating_sub(2).max(1) as usize;
            let skip = (cursor_row + 1).saturating_sub(visible);
            rows.into_iter()
                .enumerate()
                .skip(skip)
                .map(|(i, row)| {
                    let prefix = if i == 0 { "> " } else { "  " };
                    Line::from(vec![
                        Span::styled(prefix, theme::title()),
                        Span::styled(row, theme::text()),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if busy {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if input.is_command() {
                " Command "
            } else {
                " Question "
            });

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": Send │ "),
            Span::styled("Shift+Enter", theme::key_hint()),
            Span::raw(": New line │ "),
            Span::styled("F1-F3", theme::key_hint()),
            Span::raw(": Quick question │ "),
            Span::styled("PageUp/Down", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": Exit "),
        ]);
        frame.render_widget(Paragraph::new(help_text).style(theme::footer()), area);
    }
}

/// Lines for one message: a badge/time line, then the body wrapped to `width`.
fn message_lines(row: &MessageRow<'_>, width: usize) -> Vec<Line<'static>> {
    let (badge_style, text_style) = match row.badge {
        Badge::Bot => (theme::assistant_badge(), theme::assistant_text()),
        Badge::User => (theme::user_badge(), theme::user_text()),
    };
    let badge = Span::styled(format!(" {} ", row.badge.label()), badge_style);
    let time = Span::styled(row.time.clone(), theme::timestamp());

    let mut lines = Vec::new();
    match row.alignment {
        Alignment::Left => {
            lines.push(Line::from(vec![badge, Span::raw(" "), time]).left_aligned());
            for body in wrap_text(row.content, width) {
                lines.push(Line::from(Span::styled(body, text_style)).left_aligned());
            }
        }
        Alignment::Right => {
            lines.push(Line::from(vec![time, Span::raw(" "), badge]).right_aligned());
            for body in wrap_text(row.content, width) {
                lines.push(Line::from(Span::styled(body, text_style)).right_aligned());
            }
        }
    }
    lines
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn char_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    display_width(ch.encode_utf8(&mut buf))
}

/// Word-wrap `text` into rows no wider than `width` cells.
///
/// Explicit line breaks are kept; words longer than a row are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in line.split(' ') {
            let word_width = display_width(word);
            let gap = usize::from(!current.is_empty());
            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let w = char_width(ch);
                if current_width + w > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }
        rows.push(current);
    }
    rows
}

/// Columns available for typed text: borders plus the `> ` prefix.
fn input_width(area_width: u16) -> usize {
    area_width.saturating_sub(4).max(1) as usize
}

/// Hard-wrapped input rows with the cursor marker, plus the row holding it.
fn input_rows(input: &InputController, width: usize) -> (Vec<String>, usize) {
    let mut chars: Vec<char> = input.text().chars().collect();
    let cursor = input.cursor().min(chars.len());
    if cursor == chars.len() {
        chars.push('_');
    } else {
        chars.insert(cursor, '|');
    }

    let mut rows = vec![String::new()];
    let mut row_width = 0;
    let mut cursor_row = 0;
    for (i, ch) in chars.into_iter().enumerate() {
        if ch == '\n' {
            rows.push(String::new());
            row_width = 0;
            continue;
        }
        let w = char_width(ch);
        if row_width + w > width && row_width > 0 {
            rows.push(String::new());
            row_width = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(ch);
        }
        row_width += w;
        if i == cursor {
            cursor_row = rows.len() - 1;
        }
    }
    (rows, cursor_row)
}
