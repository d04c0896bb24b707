//! TUI drawing logic for prompt-studio.
//!
//! Layout, top to bottom: provider / model / template selectors, the
//! system-prompt field, keyword / count / generate row, the result area,
//! and a one-line key help footer. A blocking notice is drawn as a centered
//! popup over everything else.

use std::time::Instant;

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Focus};
use crate::constants::{IDLE_NOTICE, LOADING_NOTICE, SPINNER_FRAMES};
use crate::render::ResultView;
use crate::store::PromptStore;

const HELP: &str =
    " Tab/Shift+Tab move  ←/→ change  Ctrl+G generate  Enter generate (newline in prompt)  ↑/↓ + c copy  Ctrl+C quit ";

/// Draws the full studio screen.
pub fn draw<S: PromptStore>(f: &mut Frame, app: &App<'_, S>) {
    let [selectors, prompt, inputs, results, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(f.area());

    draw_selectors(f, app, selectors);
    draw_system_prompt(f, app, prompt);
    draw_inputs(f, app, inputs);
    draw_results(f, app, results);
    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        footer,
    );

    if let Some(notice) = &app.notice {
        draw_notice(f, notice);
    }
}

/// Bordered block, highlighted when `focused`.
fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn selector_line(value: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ›", Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_selectors<S: PromptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let form = app.studio.form();
    let [provider, model, template] = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(45),
        Constraint::Percentage(30),
    ])
    .areas(area);

    let model_title = format!(
        " Model {}/{} ",
        form.model_index() + 1,
        form.models().len()
    );
    f.render_widget(
        Paragraph::new(selector_line(form.provider().as_str()))
            .block(field_block(" Provider ", app.focus == Focus::Provider)),
        provider,
    );
    f.render_widget(
        Paragraph::new(selector_line(form.model()))
            .block(field_block(&model_title, app.focus == Focus::Model)),
        model,
    );
    f.render_widget(
        Paragraph::new(selector_line(form.template()))
            .block(field_block(" Template ", app.focus == Focus::Template)),
        template,
    );
}

fn draw_system_prompt<S: PromptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let form = app.studio.form();
    let (title, style) = if form.prompt_editable() {
        (" System prompt (custom, saved as you type) ", Style::default())
    } else {
        (
            " System prompt (read-only) ",
            Style::default().fg(Color::Gray),
        )
    };
    let widget = Paragraph::new(form.system_prompt())
        .style(style)
        .block(field_block(title, app.focus == Focus::SystemPrompt))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn draw_inputs<S: PromptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let form = app.studio.form();
    let [keyword, count, button] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(18),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(form.keyword.as_str())
            .block(field_block(" Keyword ", app.focus == Focus::Keyword)),
        keyword,
    );
    f.render_widget(
        Paragraph::new(form.count.as_str()).block(field_block(" Count ", app.focus == Focus::Count)),
        count,
    );

    let label = if app.studio.control().is_enabled() {
        Span::styled(
            "  Generate  ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        Span::styled(
            format!(" {} Working ", SPINNER_FRAMES[app.spinner_frame]),
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(label)).block(Block::default().borders(Borders::ALL)),
        button,
    );

    // Cursor sits at the end of the focused single-line field.
    let target = match app.focus {
        Focus::Keyword => Some((keyword, form.keyword.chars().count())),
        Focus::Count => Some((count, form.count.chars().count())),
        _ => None,
    };
    if let Some((rect, len)) = target {
        let max = rect.width.saturating_sub(2) as usize;
        let x = rect.x + 1 + len.min(max) as u16;
        f.set_cursor_position(Position::new(x, rect.y + 1));
    }
}

fn draw_results<S: PromptStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let now = Instant::now();
    let focused = app.focus == Focus::Results;
    let dim = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line<'_>> = match app.studio.results() {
        ResultView::Idle => vec![Line::from(Span::styled(IDLE_NOTICE, dim))],
        ResultView::Loading => vec![Line::from(Span::styled(
            format!("{} {}", SPINNER_FRAMES[app.spinner_frame], LOADING_NOTICE),
            Style::default().fg(Color::Yellow),
        ))],
        ResultView::Notice(message) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ))],
        ResultView::Error(message) => vec![Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red),
        ))],
        ResultView::Prompts(items) => {
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let selected = focused && i == app.selected;
                let marker = if selected { "▶ " } else { "  " };
                let text_style = if selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Cyan)),
                    Span::styled(item.text.as_str(), text_style),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", item.copy_label(now)),
                        Style::default().fg(Color::Green),
                    ),
                ]));
                lines.push(Line::from(""));
            }
            lines
        }
    };

    // Keep the highlighted entry in view; each entry takes at least two lines.
    let scroll = if focused {
        (app.selected as u16 * 2).saturating_sub(area.height.saturating_sub(4))
    } else {
        0
    };
    let widget = Paragraph::new(lines)
        .block(field_block(" Results ", focused))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}

fn draw_notice(f: &mut Frame, notice: &str) {
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let widget = Paragraph::new(vec![
        Line::from(notice),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Notice "),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
