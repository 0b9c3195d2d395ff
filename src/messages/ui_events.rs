//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Tone tags
    NextTone,
    PrevTone,
    ToggleTone,

    // Length selector
    CycleLength,

    // Submission
    Generate,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Role,
    Topic,
    Language,
    Audience,
    Tones,
    Length,
    Instructions,
    Output,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Role => Panel::Topic,
            Panel::Topic => Panel::Language,
            Panel::Language => Panel::Audience,
            Panel::Audience => Panel::Tones,
            Panel::Tones => Panel::Length,
            Panel::Length => Panel::Instructions,
            Panel::Instructions => Panel::Output,
            Panel::Output => Panel::Role,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Role => Panel::Output,
            Panel::Topic => Panel::Role,
            Panel::Language => Panel::Topic,
            Panel::Audience => Panel::Language,
            Panel::Tones => Panel::Audience,
            Panel::Length => Panel::Tones,
            Panel::Instructions => Panel::Length,
            Panel::Output => Panel::Instructions,
        }
    }

    /// Whether the panel holds free text the user can edit in place.
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Panel::Role | Panel::Topic | Panel::Language | Panel::Audience | Panel::Instructions
        )
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts (also available while editing)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('g') => return Some(UiEvent::Generate),
            _ => {}
        }
    }

    // Any key dismisses the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('g') => Some(UiEvent::Generate),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                _ if active_panel.is_text_input() => Some(UiEvent::StartEditing),
                Panel::Tones => Some(UiEvent::ToggleTone),
                Panel::Length => Some(UiEvent::CycleLength),
                _ => None,
            },
            KeyCode::Char(' ') if active_panel == Panel::Tones => Some(UiEvent::ToggleTone),
            KeyCode::Char('l') if active_panel == Panel::Length => Some(UiEvent::CycleLength),
            KeyCode::Up => match active_panel {
                Panel::Tones => Some(UiEvent::PrevTone),
                Panel::Output => Some(UiEvent::ScrollUp),
                _ => None,
            },
            KeyCode::Down => match active_panel {
                Panel::Tones => Some(UiEvent::NextTone),
                Panel::Output => Some(UiEvent::ScrollDown),
                _ => None,
            },
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_from_normal_mode() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), Panel::Role, InputMode::Normal, false);
        assert_eq!(event, Some(UiEvent::Quit));
    }

    #[test]
    fn test_g_generates_in_normal_mode_only() {
        let normal = key_to_ui_event(press(KeyCode::Char('g')), Panel::Role, InputMode::Normal, false);
        assert_eq!(normal, Some(UiEvent::Generate));

        // While editing, a plain 'g' is text
        let editing =
            key_to_ui_event(press(KeyCode::Char('g')), Panel::Role, InputMode::Editing, false);
        assert_eq!(editing, Some(UiEvent::CharInput('g')));
    }

    #[test]
    fn test_ctrl_g_generates_while_editing() {
        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(key, Panel::Topic, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::Generate));
    }

    #[test]
    fn test_enter_is_context_sensitive() {
        let on_role = key_to_ui_event(press(KeyCode::Enter), Panel::Role, InputMode::Normal, false);
        assert_eq!(on_role, Some(UiEvent::StartEditing));

        let on_tones = key_to_ui_event(press(KeyCode::Enter), Panel::Tones, InputMode::Normal, false);
        assert_eq!(on_tones, Some(UiEvent::ToggleTone));

        let on_length =
            key_to_ui_event(press(KeyCode::Enter), Panel::Length, InputMode::Normal, false);
        assert_eq!(on_length, Some(UiEvent::CycleLength));

        let on_output =
            key_to_ui_event(press(KeyCode::Enter), Panel::Output, InputMode::Normal, false);
        assert_eq!(on_output, None);
    }

    #[test]
    fn test_l_cycles_length_on_length_panel_only() {
        let on_length =
            key_to_ui_event(press(KeyCode::Char('l')), Panel::Length, InputMode::Normal, false);
        assert_eq!(on_length, Some(UiEvent::CycleLength));

        let on_role = key_to_ui_event(press(KeyCode::Char('l')), Panel::Role, InputMode::Normal, false);
        assert_eq!(on_role, None);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('g')), Panel::Role, InputMode::Normal, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_release_events_ignored() {
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(key_to_ui_event(key, Panel::Role, InputMode::Normal, false), None);
    }

    #[test]
    fn test_panel_cycle_round_trips() {
        let mut panel = Panel::Role;
        for _ in 0..8 {
            panel = panel.next();
        }
        assert_eq!(panel, Panel::Role);
        assert_eq!(Panel::Role.prev(), Panel::Output);
    }
}
