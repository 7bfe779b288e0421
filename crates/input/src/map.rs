//! Mapping from terminal events to game input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Map a terminal event to a game input event.
///
/// Pointer positions are terminal columns/rows. Any mouse button release
/// counts as a click.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse) => {
            let x = mouse.column as i32;
            let y = mouse.row as i32;
            match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(InputEvent::PointerMoved { x, y })
                }
                MouseEventKind::Up(_) => Some(InputEvent::PointerUp { x, y }),
                _ => None,
            }
        }
        Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(key) => {
            Some(InputEvent::Quit)
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_pointer_events() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Moved, 12, 4)),
            Some(InputEvent::PointerMoved { x: 12, y: 4 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 9)),
            Some(InputEvent::PointerMoved { x: 3, y: 9 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Up(MouseButton::Left), 7, 2)),
            Some(InputEvent::PointerUp { x: 7, y: 2 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Up(MouseButton::Right), 0, 0)),
            Some(InputEvent::PointerUp { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_button_press_and_scroll_are_ignored() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 2)),
            None
        );
        assert_eq!(map_event(mouse(MouseEventKind::ScrollUp, 7, 2)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_key_events_map_to_quit() {
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Esc))),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(Event::Key(KeyEvent::from(KeyCode::Enter))), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            map_event(Event::Resize(100, 30)),
            Some(InputEvent::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
