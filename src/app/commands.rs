//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::AppState;
use crate::constants::GENERIC_ERROR_MESSAGE;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel.is_text_input() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Tone tags
    // ========================

    pub fn next_tone(&mut self) {
        if !self.form.tones.is_empty() {
            self.selected_tone = (self.selected_tone + 1) % self.form.tones.len();
        }
    }

    pub fn prev_tone(&mut self) {
        if !self.form.tones.is_empty() {
            self.selected_tone = self
                .selected_tone
                .checked_sub(1)
                .unwrap_or(self.form.tones.len() - 1);
        }
    }

    pub fn toggle_tone(&mut self) {
        if let Some(tag) = self.form.tones.get_mut(self.selected_tone) {
            tag.selected = !tag.selected;
        }
    }

    // ========================
    // Length selector
    // ========================

    pub fn cycle_length(&mut self) {
        self.form.length = self.form.length.next();
    }

    // ========================
    // Output scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Generation
    // ========================

    /// Dispatch one generation from the current form.
    ///
    /// Returns `None` while a request is pending: submissions are suppressed
    /// rather than raced. Otherwise moves the controller into the loading
    /// state (error cleared, output cleared) and hands back the command for
    /// the network layer.
    pub fn begin_generate(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }

        self.is_loading = true;
        self.error = None;
        self.output.clear();
        self.output_scroll = 0;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::Generate { id, request: self.form.to_request() })
    }

    /// Fold a network resolution into the controller state.
    ///
    /// Only the pending request may mutate state; anything else is a stale
    /// resolution from a request the user is no longer waiting on.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            return;
        }

        match response {
            NetworkResponse::Completed { text, time_ms, .. } => {
                self.output = text;
                self.error = None;
                self.settle(time_ms);
            }
            NetworkResponse::Failed { message, time_ms, .. } => {
                let message = if message.trim().is_empty() {
                    String::from(GENERIC_ERROR_MESSAGE)
                } else {
                    message
                };
                self.error = Some(message);
                self.settle(time_ms);
            }
        }
    }

    /// The request is resolved either way: leave the loading state and stamp
    /// the outcome.
    fn settle(&mut self, time_ms: u64) {
        self.is_loading = false;
        self.pending_request_id = None;
        self.output_scroll = 0;
        self.time_ms = time_ms;
        self.completed_at = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Panel;
    use crate::messages::OutputView;
    use crate::models::PromptLength;

    /// A teacher asking for a short, friendly gravity prompt for kids.
    fn fill_classroom_form(state: &mut AppState) {
        state.form.role = String::from("teacher");
        state.form.topic = String::from("gravity");
        state.form.language = String::from("English");
        state.form.audience = String::from("kids");
        state.form.length = PromptLength::Short;
        state.form.special_instructions = String::new();
        if let Some(tag) = state.form.tones.iter_mut().find(|t| t.name == "Friendly") {
            tag.selected = true;
        }
    }

    fn completed(id: u64, text: &str) -> NetworkResponse {
        NetworkResponse::Completed { id, text: String::from(text), time_ms: 10 }
    }

    fn failed(id: u64, message: &str) -> NetworkResponse {
        NetworkResponse::Failed { id, message: String::from(message), time_ms: 10 }
    }

    #[test]
    fn test_begin_generate_enters_loading_state_synchronously() {
        let mut state = AppState::default();
        fill_classroom_form(&mut state);
        state.error = Some(String::from("stale error"));
        state.output = String::from("stale output");

        let command = state.begin_generate().expect("first submit dispatches");

        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.output.is_empty());
        assert_eq!(state.pending_request_id, Some(1));

        match command {
            NetworkCommand::Generate { id, request } => {
                assert_eq!(id, 1);
                assert_eq!(request.role, "teacher");
                assert_eq!(request.topic, "gravity");
                assert_eq!(request.language, "English");
                assert_eq!(request.audience, "kids");
                assert_eq!(request.tones, vec![String::from("Friendly")]);
                assert_eq!(request.length, PromptLength::Short);
                assert!(request.special_instructions.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_completion_sets_output_and_leaves_loading() {
        let mut state = AppState::default();
        fill_classroom_form(&mut state);

        let command = state.begin_generate().unwrap();
        let id = match command {
            NetworkCommand::Generate { id, .. } => id,
            other => panic!("unexpected command: {:?}", other),
        };
        state.handle_response(completed(id, "Explain gravity simply."));

        assert!(!state.is_loading);
        assert_eq!(state.output, "Explain gravity simply.");
        assert!(state.error.is_none());
        assert!(state.pending_request_id.is_none());
    }

    #[test]
    fn test_failure_sets_error_and_keeps_output_empty() {
        let mut state = AppState::default();
        fill_classroom_form(&mut state);

        state.begin_generate().unwrap();
        state.handle_response(failed(1, "rate limit exceeded"));

        assert!(!state.is_loading);
        assert!(state.output.is_empty());
        assert_eq!(state.error.as_deref(), Some("rate limit exceeded"));
    }

    #[test]
    fn test_blank_failure_message_falls_back_to_generic() {
        let mut state = AppState::default();
        state.begin_generate().unwrap();
        state.handle_response(failed(1, ""));

        assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn test_two_identical_cycles_equal_one() {
        let mut once = AppState::default();
        fill_classroom_form(&mut once);
        once.begin_generate().unwrap();
        once.handle_response(completed(1, "Explain gravity simply."));

        let mut twice = AppState::default();
        fill_classroom_form(&mut twice);
        twice.begin_generate().unwrap();
        twice.handle_response(completed(1, "Explain gravity simply."));
        twice.begin_generate().unwrap();
        twice.handle_response(completed(2, "Explain gravity simply."));

        assert_eq!(once.output, twice.output);
        assert_eq!(once.is_loading, twice.is_loading);
        assert_eq!(once.error, twice.error);
    }

    #[test]
    fn test_submit_while_loading_is_suppressed() {
        let mut state = AppState::default();
        assert!(state.begin_generate().is_some());
        assert!(state.begin_generate().is_none());

        // The pending request is untouched and no id was consumed
        assert_eq!(state.pending_request_id, Some(1));
        assert_eq!(state.next_request_id, 2);
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state = AppState::default();
        state.begin_generate().unwrap();

        // A resolution for some other request changes nothing
        state.handle_response(completed(99, "from an older life"));
        assert!(state.is_loading);
        assert!(state.output.is_empty());

        // The pending one still lands
        state.handle_response(completed(1, "fresh"));
        assert_eq!(state.output, "fresh");

        // And a duplicate after settling is ignored
        state.handle_response(failed(1, "late failure"));
        assert_eq!(state.output, "fresh");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_output_panel_choice_through_lifecycle() {
        let mut state = AppState::default();
        assert_eq!(state.to_render_state().visible_panel(), OutputView::Idle);

        state.begin_generate().unwrap();
        assert_eq!(state.to_render_state().visible_panel(), OutputView::Loading);

        state.handle_response(completed(1, "text"));
        assert_eq!(state.to_render_state().visible_panel(), OutputView::Prompt("text"));

        state.begin_generate().unwrap();
        assert_eq!(state.to_render_state().visible_panel(), OutputView::Loading);

        state.handle_response(failed(2, "boom"));
        assert_eq!(state.to_render_state().visible_panel(), OutputView::Error("boom"));
    }

    #[test]
    fn test_text_editing_edits_the_focused_field() {
        let mut state = AppState::default();
        state.active_panel = Panel::Topic;
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Editing);

        for c in "gravity!".chars() {
            state.enter_char(c);
        }
        state.delete_char();
        assert_eq!(state.form.topic, "gravity");

        state.move_cursor_left();
        state.move_cursor_left();
        state.enter_char('v');
        assert_eq!(state.form.topic, "gravivty");
    }

    #[test]
    fn test_editing_ignored_on_non_text_panels() {
        let mut state = AppState::default();
        state.active_panel = Panel::Tones;
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);

        state.enter_char('x');
        assert!(state.form.role.is_empty());
    }

    #[test]
    fn test_tone_selection_wraps_and_toggles() {
        let mut state = AppState::default();
        let count = state.form.tones.len();

        state.prev_tone();
        assert_eq!(state.selected_tone, count - 1);
        state.next_tone();
        assert_eq!(state.selected_tone, 0);

        state.toggle_tone();
        assert!(state.form.tones[0].selected);
        state.toggle_tone();
        assert!(!state.form.tones[0].selected);
    }
}
