//! PromptForge - terminal studio for crafting LLM prompts
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async Gemini API calls

mod models;
mod config;
mod prompt;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use messages::{UiEvent, NetworkCommand, NetworkResponse, OutputView, RenderState};
use messages::ui_events::{key_to_ui_event, InputMode, Panel};
use app::AppActor;
use config::GeminiConfig;
use network::NetworkActor;
use ui::{render_input, render_tone_list};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Resolve configuration before the terminal enters raw mode so a
    // missing API key prints a readable error
    let config = GeminiConfig::load()?;
    let model = config.model.clone();
    tracing::info!(model = %model, api_url = %config.api_url, "Starting up");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(model, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut frame: usize = 0;

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state, frame))?;
        frame = frame.wrapping_add(1);

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, frame: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Role / Topic
            Constraint::Length(3),  // Language / Audience
            Constraint::Length(10), // Tones / Length + Instructions
            Constraint::Min(6),     // Output
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_text_row(f, state, chunks[1], Panel::Role, Panel::Topic);
    draw_text_row(f, state, chunks[2], Panel::Language, Panel::Audience);
    draw_form_row(f, state, chunks[3]);
    draw_output(f, state, chunks[4], frame);
    draw_status_bar(f, state, chunks[5]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} v{} ", constants::APP_NAME, constants::APP_VERSION),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            " Describe what you need and generate a polished prompt ",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn panel_title(panel: Panel) -> &'static str {
    match panel {
        Panel::Role => " Role ",
        Panel::Topic => " Topic ",
        Panel::Language => " Language ",
        Panel::Audience => " Audience ",
        Panel::Tones => " Tones (Space:toggle) ",
        Panel::Length => " Length (Enter:cycle) ",
        Panel::Instructions => " Special Instructions ",
        Panel::Output => " Generated Prompt ",
    }
}

fn panel_content<'a>(state: &'a RenderState, panel: Panel) -> &'a str {
    match panel {
        Panel::Role => &state.role,
        Panel::Topic => &state.topic,
        Panel::Language => &state.language,
        Panel::Audience => &state.audience,
        Panel::Instructions => &state.special_instructions,
        _ => "",
    }
}

fn draw_text_row(f: &mut Frame, state: &RenderState, area: Rect, left: Panel, right: Panel) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_text_input(f, state, columns[0], left);
    draw_text_input(f, state, columns[1], right);
}

fn draw_text_input(f: &mut Frame, state: &RenderState, area: Rect, panel: Panel) {
    let is_focused = state.active_panel == panel;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let input = render_input(
        panel_content(state, panel),
        panel_title(panel),
        is_focused,
        is_editing,
    );
    f.render_widget(input, area);

    // Cursor (cursor_position is a byte offset; terminal columns are chars)
    if is_editing {
        let content = panel_content(state, panel);
        let column = content
            .get(..state.cursor_position)
            .map_or_else(|| content.chars().count(), |s| s.chars().count());
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + column as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_form_row(f: &mut Frame, state: &RenderState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let is_focused = state.active_panel == Panel::Tones;
    let tones = render_tone_list(
        &state.tones,
        state.selected_tone,
        panel_title(Panel::Tones),
        is_focused,
    );
    f.render_widget(tones, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[1]);

    let length_value = format!("< {} >", state.length.as_str());
    let length = render_input(
        &length_value,
        panel_title(Panel::Length),
        state.active_panel == Panel::Length,
        false,
    );
    f.render_widget(length, right[0]);

    draw_text_input(f, state, right[1], Panel::Instructions);
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

fn draw_output(f: &mut Frame, state: &RenderState, area: Rect, frame: usize) {
    let is_focused = state.active_panel == Panel::Output;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    match state.visible_panel() {
        OutputView::Loading => {
            let spinner = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" Generating {} ", spinner));
            let loader = Paragraph::new("Contacting the model. This can take a few seconds.")
                .block(block)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(loader, area);
        }
        OutputView::Error(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ");
            let error = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false });
            f.render_widget(error, area);
        }
        OutputView::Prompt(text) => {
            let time_text = if state.time_ms > 0 {
                format!(" {}ms ", state.time_ms)
            } else {
                String::new()
            };
            let completed_text = state
                .completed_at
                .map(|at| format!(" {} ", at.format("%H:%M:%S")))
                .unwrap_or_default();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Generated Prompt (↑/↓ scroll) ")
                .title_bottom(Line::from(format!("{}{}", completed_text, time_text)).right_aligned());

            let prompt = Paragraph::new(text)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((state.output_scroll, 0));
            f.render_widget(prompt, area);
        }
        OutputView::Idle => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(panel_title(Panel::Output));
            let hint = Paragraph::new("Fill in the form and press 'g' to generate a prompt.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, area);
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        format!(" Generating with {}... ", state.model)
    } else if state.input_mode == InputMode::Editing {
        String::from(" ESC/Tab:stop editing | arrows:move | Ctrl+G:generate ")
    } else {
        format!(
            " Tab:field | e:edit | g:generate | ?:help | q:quit | {} ",
            state.model
        )
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 PROMPTFORGE - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch fields
   ↑ / ↓              Move tone highlight / scroll output

 FORM
   e / Enter          Edit the focused text field
   Esc / Enter        Stop editing
   Space / Enter      Toggle the highlighted tone
   Enter / l          Cycle length (on the Length field)

 GENERATION
   g / Ctrl+G         Generate prompt

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
