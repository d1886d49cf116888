use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::app::{Field, InputMode, Overlay};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

/// Forwards terminal key presses and periodic ticks over a channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                    }
                    event = reader.next() => {
                        match event {
                            // Windows also reports releases
                            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                                if tx.send(AppEvent::Key(key)).is_err() {
                                    break;
                                }
                            }
                            Some(Ok(_)) => {}
                            Some(Err(e)) => {
                                tracing::error!("terminal event stream failed: {}", e);
                                break;
                            }
                            None => break,
                        }
                    }
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Map a key event to an action based on current app state.
///
/// `input` is the contents of the field being edited, if any.
pub fn key_to_action(
    key: KeyEvent,
    input_mode: &InputMode,
    overlay: &Overlay,
    input: &str,
) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if *overlay == Overlay::Help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match input_mode {
        InputMode::Editing(field) => {
            return match key.code {
                KeyCode::Esc => Some(Action::StopEditing),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchField),
                KeyCode::Char('u') if ctrl => Some(Action::UpdateInput(String::new())),
                KeyCode::Backspace => {
                    let mut buf = input.to_string();
                    buf.pop();
                    Some(Action::UpdateInput(buf))
                }
                KeyCode::Char(c) if !ctrl && field.accepts(c) => {
                    let mut buf = input.to_string();
                    buf.push(c);
                    Some(Action::UpdateInput(buf))
                }
                _ => None,
            };
        }
        InputMode::PendingG => {
            return match key.code {
                KeyCode::Char('g') => Some(Action::NavigateTop),
                _ => Some(Action::CancelPending),
            };
        }
        InputMode::Normal => {}
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('d') => Some(Action::PageDown),
            KeyCode::Char('u') => Some(Action::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::EditField(Field::Text)),
        KeyCode::Char('y') => Some(Action::EditField(Field::Year)),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::NavigateDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::NavigateUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Char('g') => Some(Action::EnterPendingG),
        KeyCode::Char('G') | KeyCode::End => Some(Action::NavigateBottom),
        KeyCode::Home => Some(Action::NavigateTop),
        KeyCode::Esc => Some(Action::CloseOverlay),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_appends_to_the_field() {
        let action = key_to_action(
            press(KeyCode::Char('я')),
            &InputMode::Editing(Field::Text),
            &Overlay::None,
            "ма",
        );
        assert_eq!(action, Some(Action::UpdateInput("мая".to_string())));
    }

    #[test]
    fn backspace_removes_last_char() {
        let action = key_to_action(
            press(KeyCode::Backspace),
            &InputMode::Editing(Field::Text),
            &Overlay::None,
            "мая",
        );
        assert_eq!(action, Some(Action::UpdateInput("ма".to_string())));
    }

    #[test]
    fn year_field_drops_letters() {
        let mode = InputMode::Editing(Field::Year);
        assert_eq!(
            key_to_action(press(KeyCode::Char('a')), &mode, &Overlay::None, "19"),
            None
        );
        assert_eq!(
            key_to_action(press(KeyCode::Char('4')), &mode, &Overlay::None, "19"),
            Some(Action::UpdateInput("194".to_string()))
        );
    }

    #[test]
    fn enter_submits_while_editing() {
        let action = key_to_action(
            press(KeyCode::Enter),
            &InputMode::Editing(Field::Year),
            &Overlay::None,
            "1917",
        );
        assert_eq!(action, Some(Action::Submit));
    }

    #[test]
    fn ctrl_u_clears_field_but_pages_in_normal_mode() {
        assert_eq!(
            key_to_action(ctrl('u'), &InputMode::Editing(Field::Text), &Overlay::None, "abc"),
            Some(Action::UpdateInput(String::new()))
        );
        assert_eq!(
            key_to_action(ctrl('u'), &InputMode::Normal, &Overlay::None, ""),
            Some(Action::PageUp)
        );
    }

    #[test]
    fn letters_are_text_while_editing() {
        // 'q' quits in normal mode but is just a character here
        assert_eq!(
            key_to_action(
                press(KeyCode::Char('q')),
                &InputMode::Editing(Field::Text),
                &Overlay::None,
                ""
            ),
            Some(Action::UpdateInput("q".to_string()))
        );
        assert_eq!(
            key_to_action(ctrl('c'), &InputMode::Editing(Field::Text), &Overlay::None, ""),
            Some(Action::Quit)
        );
    }

    #[test]
    fn normal_mode_bindings() {
        let normal = |code| key_to_action(press(code), &InputMode::Normal, &Overlay::None, "");
        assert_eq!(normal(KeyCode::Char('/')), Some(Action::EditField(Field::Text)));
        assert_eq!(normal(KeyCode::Char('y')), Some(Action::EditField(Field::Year)));
        assert_eq!(normal(KeyCode::Char('s')), Some(Action::Submit));
        assert_eq!(normal(KeyCode::Char('g')), Some(Action::EnterPendingG));
        assert_eq!(normal(KeyCode::Char('x')), None);
    }

    #[test]
    fn pending_g_chord() {
        let mode = InputMode::PendingG;
        assert_eq!(
            key_to_action(press(KeyCode::Char('g')), &mode, &Overlay::None, ""),
            Some(Action::NavigateTop)
        );
        assert_eq!(
            key_to_action(press(KeyCode::Char('j')), &mode, &Overlay::None, ""),
            Some(Action::CancelPending)
        );
    }

    #[test]
    fn help_overlay_swallows_keys() {
        assert_eq!(
            key_to_action(press(KeyCode::Char('j')), &InputMode::Normal, &Overlay::Help, ""),
            None
        );
        assert_eq!(
            key_to_action(press(KeyCode::Esc), &InputMode::Normal, &Overlay::Help, ""),
            Some(Action::ToggleHelp)
        );
    }
}
