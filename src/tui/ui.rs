//! Stateless UI rendering: the drawing surface as a braille canvas plus the
//! status line.

use super::app::App;
use crate::animation::Rgb;
use crate::render::SURFACE_SIZE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Points},
    },
};

const HELP: &str = "click a cell to play - r: new game - q: quit";

/// Renders the whole screen and returns where the surface landed, so clicks
/// can be mapped back onto it.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Sketch - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let canvas_area = draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    canvas_area
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let block = Block::default().borders(Borders::ALL);
    let outer = square_rect(area);
    let inner = block.inner(outer);
    let layers = app.layers();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, SURFACE_SIZE.width])
        .y_bounds([0.0, SURFACE_SIZE.height])
        .paint(|ctx| {
            for (color, coords) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: to_color(*color),
                });
            }
        });
    frame.render_widget(canvas, outer);
    inner
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Largest centred rect that shows a square surface, given terminal cells
/// about twice as tall as they are wide.
fn square_rect(area: Rect) -> Rect {
    let inner_height = area.height.saturating_sub(2).min(area.width.saturating_sub(2) / 2);
    let height = inner_height + 2;
    let width = inner_height * 2 + 2;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
