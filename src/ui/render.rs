use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::game::{Board, Game, Phase, Shape};
use crate::{CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W};

/// One colour per type code; the renderer's only styling decision.
pub fn cell_color(code: u8) -> Option<Color> {
    Shape::from_code(code).map(|shape| match shape {
        Shape::Square => Color::Yellow,
        Shape::Line => Color::Cyan,
        Shape::S => Color::Green,
        Shape::Z => Color::Red,
        Shape::T => Color::Magenta,
        Shape::J => Color::Blue,
        Shape::L => Color::LightRed,
    })
}

pub fn status_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "IDLE",
        Phase::Running => "RUNNING",
        Phase::Paused => "PAUSED",
        Phase::GameOver => "OVER",
    }
}

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(PLAY_W as u16), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size well within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, &game.snapshot(), play_rect);
    if game.is_game_over() {
        draw_game_over(frame, game.score(), play_rect);
    }
    draw_sidebar(frame, game, cols[1]);
}

fn wall(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Gray))
}

fn draw_playfield(frame: &mut Frame, grid: &Board, play_rect: Rect) {
    let inner_w = PLAY_W - 2;
    let mut lines: Vec<Line> = Vec::with_capacity(PLAY_H);

    lines.push(Line::from(wall(format!("┌{}┐", "─".repeat(inner_w)))));
    for y in 0..grid.height {
        let mut spans = vec![wall("│".to_string())];
        for cell in grid.row(y) {
            let span = match cell_color(cell.code()) {
                Some(color) => Span::styled("█".repeat(CELL_W), Style::default().fg(color)),
                None => Span::raw(" ".repeat(CELL_W)),
            };
            spans.push(span);
        }
        spans.push(wall("│".to_string()));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(wall(format!("└{}┘", "═".repeat(inner_w)))));

    frame.render_widget(Paragraph::new(lines), play_rect);
}

fn draw_game_over(frame: &mut Frame, score: u64, play_rect: Rect) {
    let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
    let overlay_h = 4u16;
    let popup = Rect {
        x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
        y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w.min(play_rect.width),
        height: overlay_h.min(play_rect.height),
    };
    let overlay = Paragraph::new(vec![
        Line::raw("GAME OVER"),
        Line::raw(format!("SCORE {score}")),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, popup);
    frame.render_widget(overlay, popup);
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", game.score())),
        Line::raw(format!("{:<7} {}", "LINES:", game.lines_cleared())),
        Line::raw(format!("{:<7} {}", "STATUS:", status_label(game.phase()))),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let start_label = if game.phase() == Phase::Idle { "play" } else { "restart" };
    let pause_label = if game.is_paused() { "resume" } else { "pause" };
    let controls = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↑ rotate"),
        Line::raw("↓ drop"),
        Line::raw(format!("s {start_label}")),
        Line::raw(format!("p {pause_label}")),
        Line::raw("q/esc quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
