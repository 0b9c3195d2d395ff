//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_MODEL};
use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{PromptLength, ToneTag};

/// The one thing the output area shows for a given state.
///
/// Loading always wins; an error and a prompt are mutually exclusive because
/// the controller clears both on dispatch and sets at most one on resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputView<'a> {
    /// Nothing generated yet
    Idle,
    /// A request is in flight
    Loading,
    /// The last request failed
    Error(&'a str),
    /// The last request produced text
    Prompt(&'a str),
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Form data
    pub role: String,
    pub topic: String,
    pub language: String,
    pub audience: String,
    pub tones: Vec<ToneTag>,
    pub length: PromptLength,
    pub special_instructions: String,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub selected_tone: usize,
    pub output_scroll: u16,
    pub show_help: bool,

    // Controller state
    pub output: String,
    pub is_loading: bool,
    pub error: Option<String>,

    // Last generation metadata
    pub time_ms: u64,
    pub completed_at: Option<DateTime<Local>>,

    // Which model answers, for the status bar
    pub model: String,
}

impl RenderState {
    /// Pick the single view the output area renders.
    pub fn visible_panel(&self) -> OutputView<'_> {
        if self.is_loading {
            OutputView::Loading
        } else if let Some(error) = &self.error {
            OutputView::Error(error)
        } else if !self.output.is_empty() {
            OutputView::Prompt(&self.output)
        } else {
            OutputView::Idle
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            role: String::new(),
            topic: String::new(),
            language: String::from(DEFAULT_LANGUAGE),
            audience: String::new(),
            tones: ToneTag::catalog(),
            length: PromptLength::default(),
            special_instructions: String::new(),
            active_panel: Panel::Role,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            selected_tone: 0,
            output_scroll: 0,
            show_help: false,
            output: String::new(),
            is_loading: false,
            error: None,
            time_ms: 0,
            completed_at: None,
            model: String::from(DEFAULT_MODEL),
        }
    }
}
