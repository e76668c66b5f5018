//! Terminal input: a reader thread and the mapping from raw events to
//! game commands.

use crate::animation::{Point, Size};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, instrument};

/// How long the reader waits for an event before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left click at a terminal cell.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Maps a terminal event to a command, ignoring everything else.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
                KeyCode::Char('r') => Some(Command::Reset),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Command::Click {
                column: *column,
                row: *row,
            }),
            _ => None,
        }
    }
}

/// Converts a terminal cell to a point on the drawing surface.
///
/// `area` is where the surface is shown on screen. The point lands in the
/// middle of the cell. Cells outside `area` give points outside the
/// surface, which the game rejects as off the board.
pub fn cell_to_surface(column: u16, row: u16, area: Rect, size: Size) -> Point {
    if area.width == 0 || area.height == 0 {
        return Point::new(-1.0, -1.0);
    }
    let x = (f64::from(column) - f64::from(area.x) + 0.5) / f64::from(area.width);
    let y = (f64::from(row) - f64::from(area.y) + 0.5) / f64::from(area.height);
    Point::new(x * size.width, y * size.height)
}

/// Reads terminal events on a dedicated thread and forwards them.
///
/// The thread exits once the receiver is dropped or reading fails.
#[instrument]
pub fn spawn_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!(error = %e, "Polling terminal events failed");
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!(error = %e, "Reading terminal event failed");
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys() {
        assert_eq!(Command::from_event(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_event(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_event(&key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(Command::from_event(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_only_left_press_clicks() {
        assert_eq!(
            Command::from_event(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(Command::Click { column: 4, row: 7 })
        );
        assert_eq!(
            Command::from_event(&mouse(MouseEventKind::Down(MouseButton::Right), 4, 7)),
            None
        );
        assert_eq!(
            Command::from_event(&mouse(MouseEventKind::Up(MouseButton::Left), 4, 7)),
            None
        );
    }

    #[test]
    fn test_cell_to_surface() {
        let area = Rect::new(10, 5, 30, 15);
        let size = Size::new(300.0, 300.0);

        let close = |a: Point, b: Point| a.distance(b) < 1e-9;

        let first = cell_to_surface(10, 5, area, size);
        assert!(close(first, Point::new(5.0, 10.0)), "{first:?}");

        let last = cell_to_surface(39, 19, area, size);
        assert!(close(last, Point::new(295.0, 290.0)), "{last:?}");
    }

    #[test]
    fn test_cell_outside_area() {
        let area = Rect::new(10, 5, 30, 15);
        let size = Size::new(300.0, 300.0);
        assert!(cell_to_surface(2, 6, area, size).x < 0.0);
        assert!(cell_to_surface(12, 30, area, size).y > 300.0);
        assert_eq!(
            cell_to_surface(0, 0, Rect::default(), size),
            Point::new(-1.0, -1.0)
        );
    }
}
