//! TUI rendering for Janken using ratatui.

mod art;
mod effects;
mod input;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use janken_engine::{AnimPhase, App, Hand, ResultDialog};

use self::art::{ART_HEIGHT, hand_art};

const TITLE: &str = "じゃんけん";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),              // Title
            Constraint::Min(ART_HEIGHT + 4),    // Opponent
            Constraint::Length(3),              // Buttons
            Constraint::Length(1),              // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_opponent(frame, app, chunks[1], &palette);
    draw_buttons(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);

    if app.is_dialog_open() {
        draw_result_dialog(frame, app, &palette);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_opponent(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hand = app.opponent_hand();
    let art = hand_art(hand, app.ui_options());

    let mut lines: Vec<Line> = Vec::with_capacity(art.len() + 2);
    for row in art {
        lines.push(Line::from(Span::styled(
            *row,
            Style::default().fg(palette.text_secondary),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hand_caption(hand),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .title(Line::from(Span::styled(
            " 相手 ",
            Style::default().fg(palette.text_muted),
        )));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(panel, area);
}

fn hand_caption(hand: Hand) -> String {
    format!("{} ({hand})", hand.label())
}

fn draw_buttons(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.focused_hand();
    let mut spans: Vec<Span> = Vec::new();
    for (i, hand) in Hand::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let is_focused = *hand == focused;
        let pointer = if is_focused { glyphs.selected } else { " " };
        spans.push(Span::styled(
            format!("{pointer} "),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::styled(
            format!("[ {} ({}) ]", hand.label(), hand.key()),
            styles::button(palette, is_focused),
        ));
    }

    let buttons = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center);
    frame.render_widget(buttons, area);
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let tally = app.tally();
    let sep = format!(" {} ", glyphs.separator);

    let (timer_glyph, timer_style) = if app.is_refreshing() {
        (glyphs.refreshing, Style::default().fg(palette.success))
    } else {
        (glyphs.paused, Style::default().fg(palette.text_muted))
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(timer_glyph, timer_style),
        Span::styled(
            format!(" {}ms", app.refresh_interval().as_millis()),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(sep.clone(), styles::key_hint(palette)),
        Span::styled(
            format!(
                "勝ち {}  負け {}  引き分け {}",
                tally.wins, tally.losses, tally.draws
            ),
            Style::default().fg(palette.text_primary),
        ),
        Span::styled(sep, styles::key_hint(palette)),
        Span::styled("r/s/p", styles::key_highlight(palette)),
        Span::styled(" play  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]));
    frame.render_widget(status, area);
}

fn draw_result_dialog(frame: &mut Frame, app: &mut App, palette: &Palette) {
    let Some(dialog) = app.dialog().copied() else {
        return;
    };

    let lines = result_dialog_lines(&dialog, palette);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let title_width = Line::from(ResultDialog::TITLE).width() as u16 + 2;
    let content_width = content_width
        .max(title_width)
        .min(frame.area().width.saturating_sub(4));

    let width = content_width.saturating_add(4);
    let height = (lines.len() as u16).saturating_add(4);
    let area = frame.area();
    let base_area = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let elapsed = app.frame_elapsed();
    let (rect, effect_done) = if let Some(effect) = app.modal_effect_mut() {
        effect.advance(elapsed);
        let done = matches!(effect.phase(), AnimPhase::Completed);
        (apply_modal_effect(effect, base_area), done)
    } else {
        (base_area, false)
    };

    if effect_done {
        app.clear_modal_effect();
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1))
        .title(Line::from(vec![Span::styled(
            format!(" {} ", ResultDialog::TITLE),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )]));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn result_dialog_lines(dialog: &ResultDialog, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            dialog.message(),
            styles::judgement(palette, dialog.judgement()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("あなた: ", styles::key_hint(palette)),
            Span::styled(
                dialog.player().label(),
                Style::default().fg(palette.text_primary),
            ),
            Span::styled("  相手: ", styles::key_hint(palette)),
            Span::styled(
                dialog.opponent().label(),
                Style::default().fg(palette.text_primary),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", ResultDialog::ACTION),
            styles::button(palette, true),
        )),
    ]
}
