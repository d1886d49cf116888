use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::action::Action;
use crate::domain::{EventStore, HistoricalEvent};
use crate::filter::Query;

const NOTICE_TTL: Duration = Duration::from_secs(3);
const PAGE_HEIGHT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Year,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Self::Text => Self::Year,
            Self::Year => Self::Text,
        }
    }

    /// Whether a typed character is accepted. The year field behaves like a
    /// numeric input.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Year => c.is_ascii_digit() || c == '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing(Field),
    PendingG,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// What the timeline is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Store order, before any search.
    Initial,
    /// Filtered and year-sorted result of the last submitted query.
    Searched(Query),
}

pub struct App {
    pub store: EventStore,
    pub displayed: Vec<HistoricalEvent>,
    pub result_view: ResultView,

    // Input
    pub text_input: String,
    pub year_input: String,
    pub input_mode: InputMode,
    pub overlay: Overlay,

    pub timeline_state: TableState,
    pub notice: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: EventStore) -> Self {
        let mut app = Self {
            store,
            displayed: store.events().to_vec(),
            result_view: ResultView::Initial,

            text_input: String::new(),
            year_input: String::new(),
            input_mode: InputMode::Normal,
            overlay: Overlay::None,

            timeline_state: TableState::default(),
            notice: None,
            should_quit: false,
        };
        app.reset_selection();
        app
    }

    pub fn update(&mut self, action: Action) {
        // Clear stale notices
        if let Some((_, at)) = &self.notice {
            if at.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }

        match action {
            // Navigation
            Action::NavigateUp => self.select_by(-1),
            Action::NavigateDown => self.select_by(1),
            Action::PageUp => self.select_by(-(PAGE_HEIGHT as isize)),
            Action::PageDown => self.select_by(PAGE_HEIGHT as isize),
            Action::NavigateTop => {
                self.input_mode = InputMode::Normal;
                self.reset_selection();
            }
            Action::NavigateBottom => {
                if !self.displayed.is_empty() {
                    self.timeline_state.select(Some(self.displayed.len() - 1));
                }
            }

            // Vim chord
            Action::EnterPendingG => self.input_mode = InputMode::PendingG,
            Action::CancelPending => self.input_mode = InputMode::Normal,

            // Search fields
            Action::EditField(field) => self.input_mode = InputMode::Editing(field),
            Action::SwitchField => {
                if let InputMode::Editing(field) = self.input_mode {
                    self.input_mode = InputMode::Editing(field.other());
                }
            }
            Action::UpdateInput(buf) => {
                if let InputMode::Editing(field) = self.input_mode {
                    *self.input_mut(field) = buf;
                }
            }
            Action::StopEditing => self.input_mode = InputMode::Normal,
            Action::Submit => {
                self.input_mode = InputMode::Normal;
                self.search();
            }

            // UI
            Action::ToggleHelp => {
                self.overlay = match self.overlay {
                    Overlay::Help => Overlay::None,
                    Overlay::None => Overlay::Help,
                };
            }
            Action::CloseOverlay => self.overlay = Overlay::None,

            // App control
            Action::Quit => self.should_quit = true,
            Action::Tick => {}
        }
    }

    /// Run the current fields through the filter and replace the timeline.
    pub fn search(&mut self) {
        let query = Query::new(self.text_input.clone(), self.year_input.clone());
        self.displayed = query.apply(self.store.events());
        tracing::debug!(
            text = %query.text,
            year = %query.year,
            matches = self.displayed.len(),
            "search"
        );
        let message = if self.displayed.is_empty() {
            "События не найдены".to_string()
        } else {
            format!("Найдено событий: {}", self.displayed.len())
        };
        self.notice = Some((message, Instant::now()));
        self.result_view = ResultView::Searched(query);
        self.reset_selection();
    }

    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Text => &self.text_input,
            Field::Year => &self.year_input,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Text => &mut self.text_input,
            Field::Year => &mut self.year_input,
        }
    }

    pub fn editing(&self) -> Option<Field> {
        match self.input_mode {
            InputMode::Editing(field) => Some(field),
            _ => None,
        }
    }

    pub fn selected_event(&self) -> Option<&HistoricalEvent> {
        self.timeline_state
            .selected()
            .and_then(|idx| self.displayed.get(idx))
    }

    pub fn is_empty_result(&self) -> bool {
        self.displayed.is_empty()
    }

    fn reset_selection(&mut self) {
        let first = if self.displayed.is_empty() { None } else { Some(0) };
        self.timeline_state.select(first);
    }

    fn select_by(&mut self, delta: isize) {
        if self.displayed.is_empty() {
            return;
        }
        let last = self.displayed.len() - 1;
        let current = self.timeline_state.selected().unwrap_or(0).min(last);
        let next = current.saturating_add_signed(delta).min(last);
        self.timeline_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(EventStore::builtin())
    }

    fn displayed_ids(app: &App) -> Vec<u32> {
        app.displayed.iter().map(|e| e.id).collect()
    }

    fn type_into(app: &mut App, field: Field, text: &str) {
        app.update(Action::EditField(field));
        app.update(Action::UpdateInput(text.to_string()));
    }

    #[test]
    fn starts_in_store_order() {
        let app = app();
        assert_eq!(app.result_view, ResultView::Initial);
        assert_eq!(displayed_ids(&app), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(app.selected_event().map(|e| e.id), Some(1));
    }

    #[test]
    fn typing_does_not_recompute() {
        let mut app = app();
        type_into(&mut app, Field::Text, "мая");
        assert_eq!(app.text_input, "мая");
        assert_eq!(app.displayed.len(), 8);
        assert_eq!(app.result_view, ResultView::Initial);
    }

    #[test]
    fn submit_filters_and_returns_to_normal_mode() {
        let mut app = app();
        type_into(&mut app, Field::Text, "мая");
        app.update(Action::Submit);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(displayed_ids(&app), vec![1]);
        assert_eq!(app.result_view, ResultView::Searched(Query::new("мая", "")));
    }

    #[test]
    fn empty_submit_sorts_by_year() {
        let mut app = app();
        app.update(Action::Submit);
        assert_eq!(displayed_ids(&app), vec![4, 5, 7, 8, 6, 3, 1, 2]);
    }

    #[test]
    fn no_matches_yields_empty_result() {
        let mut app = app();
        type_into(&mut app, Field::Text, "Гагарин");
        app.update(Action::SwitchField);
        app.update(Action::UpdateInput("1945".to_string()));
        app.update(Action::Submit);

        assert!(app.is_empty_result());
        assert!(app.selected_event().is_none());
        let notice = app.notice.as_ref().map(|(msg, _)| msg.as_str());
        assert_eq!(notice, Some("События не найдены"));
    }

    #[test]
    fn switch_field_toggles() {
        let mut app = app();
        app.update(Action::EditField(Field::Text));
        app.update(Action::SwitchField);
        assert_eq!(app.editing(), Some(Field::Year));
        app.update(Action::SwitchField);
        assert_eq!(app.editing(), Some(Field::Text));
    }

    #[test]
    fn stop_editing_keeps_fields_and_result() {
        let mut app = app();
        type_into(&mut app, Field::Year, "1917");
        app.update(Action::StopEditing);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.year_input, "1917");
        assert_eq!(app.displayed.len(), 8);
    }

    #[test]
    fn update_input_outside_editing_is_ignored() {
        let mut app = app();
        app.update(Action::UpdateInput("мая".to_string()));
        assert!(app.text_input.is_empty());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut app = app();
        app.update(Action::NavigateUp);
        assert_eq!(app.timeline_state.selected(), Some(0));

        app.update(Action::PageDown);
        app.update(Action::PageDown);
        assert_eq!(app.timeline_state.selected(), Some(7));

        app.update(Action::NavigateTop);
        app.update(Action::NavigateDown);
        assert_eq!(app.selected_event().map(|e| e.id), Some(2));

        app.update(Action::NavigateBottom);
        assert_eq!(app.selected_event().map(|e| e.id), Some(8));
    }

    #[test]
    fn search_resets_selection() {
        let mut app = app();
        app.update(Action::NavigateBottom);
        app.update(Action::Submit);
        assert_eq!(app.selected_event().map(|e| e.year), Some(1380));
    }

    #[test]
    fn help_toggles_and_quit_sets_flag() {
        let mut app = app();
        app.update(Action::ToggleHelp);
        assert_eq!(app.overlay, Overlay::Help);
        app.update(Action::ToggleHelp);
        assert_eq!(app.overlay, Overlay::None);

        app.update(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn year_field_accepts_numeric_input_only() {
        assert!(Field::Year.accepts('1'));
        assert!(Field::Year.accepts('-'));
        assert!(!Field::Year.accepts('a'));
        assert!(Field::Text.accepts('м'));
        assert!(!Field::Text.accepts('\n'));
    }
}
