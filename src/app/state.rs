//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::constants::DEFAULT_MODEL;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{PromptLength, PromptRequest, ToneTag};

/// Form buffers for the seven prompt parameters
#[derive(Clone, Debug)]
pub struct PromptForm {
    pub role: String,
    pub topic: String,
    pub language: String,
    pub audience: String,
    pub tones: Vec<ToneTag>,
    pub length: PromptLength,
    pub special_instructions: String,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptForm {
    pub fn new() -> Self {
        let defaults = PromptRequest::default();
        PromptForm {
            role: defaults.role,
            topic: defaults.topic,
            language: defaults.language,
            audience: defaults.audience,
            tones: ToneTag::catalog(),
            length: defaults.length,
            special_instructions: defaults.special_instructions,
        }
    }

    /// Snapshot the form into the request payload sent to the service.
    /// Selected tones come out in catalog order.
    pub fn to_request(&self) -> PromptRequest {
        PromptRequest {
            role: self.role.clone(),
            topic: self.topic.clone(),
            language: self.language.clone(),
            audience: self.audience.clone(),
            tones: self
                .tones
                .iter()
                .filter(|tag| tag.selected)
                .map(|tag| tag.name.clone())
                .collect(),
            length: self.length,
            special_instructions: self.special_instructions.clone(),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Form
    pub form: PromptForm,
    pub cursor_position: usize,
    pub selected_tone: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub output_scroll: u16,
    pub show_help: bool,

    // Controller state: at most one of {loading, output non-empty, error set}
    // drives the output panel
    pub output: String,
    pub is_loading: bool,
    pub error: Option<String>,

    // Request lifecycle
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Last generation metadata
    pub time_ms: u64,
    pub completed_at: Option<DateTime<Local>>,

    // Display-only model label
    pub model: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl AppState {
    pub fn new(model: impl Into<String>) -> Self {
        AppState {
            form: PromptForm::new(),
            cursor_position: 0,
            selected_tone: 0,
            active_panel: Panel::Role,
            input_mode: InputMode::Normal,
            output_scroll: 0,
            show_help: false,
            output: String::new(),
            is_loading: false,
            error: None,
            next_request_id: 1,
            pending_request_id: None,
            time_ms: 0,
            completed_at: None,
            model: model.into(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current text input content, if the focused panel has one
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Role => &self.form.role,
            Panel::Topic => &self.form.topic,
            Panel::Language => &self.form.language,
            Panel::Audience => &self.form.audience,
            Panel::Instructions => &self.form.special_instructions,
            _ => "",
        }
    }

    /// Get a mutable reference to the current text input, if any
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_panel {
            Panel::Role => Some(&mut self.form.role),
            Panel::Topic => Some(&mut self.form.topic),
            Panel::Language => Some(&mut self.form.language),
            Panel::Audience => Some(&mut self.form.audience),
            Panel::Instructions => Some(&mut self.form.special_instructions),
            _ => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            role: self.form.role.clone(),
            topic: self.form.topic.clone(),
            language: self.form.language.clone(),
            audience: self.form.audience.clone(),
            tones: self.form.tones.clone(),
            length: self.form.length,
            special_instructions: self.form.special_instructions.clone(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            selected_tone: self.selected_tone,
            output_scroll: self.output_scroll,
            show_help: self.show_help,
            output: self.output.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            time_ms: self.time_ms,
            completed_at: self.completed_at,
            model: self.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_keeps_catalog_order() {
        let mut form = PromptForm::new();
        // Select out of order; the request lists them in catalog order
        form.tones[3].selected = true;
        form.tones[0].selected = true;

        let request = form.to_request();
        let expected = vec![form.tones[0].name.clone(), form.tones[3].name.clone()];
        assert_eq!(request.tones, expected);
    }

    #[test]
    fn test_render_state_mirrors_controller_fields() {
        let mut state = AppState::default();
        state.output = String::from("generated");
        state.time_ms = 42;

        let render = state.to_render_state();
        assert_eq!(render.output, "generated");
        assert!(!render.is_loading);
        assert!(render.error.is_none());
        assert_eq!(render.time_ms, 42);
    }
}
