//! User interface rendering module
//!
//! The presentation adapter: it only reads a [`Snapshot`] and never drives
//! the engine.
//! - `code` - syntax colouring and execution highlights
//! - `panels` - variables, status, and output panel content

pub mod code;
pub mod panels;

use crate::app::AppState;
use crate::components::{HelpOverlay, KeybindingContext, NavBarItem};
use crate::engine::Snapshot;
use crate::narration::explain_snapshot;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything one frame needs
pub struct View<'a> {
    pub source_lines: Vec<&'a str>,
    pub snapshot: &'a Snapshot,
    pub state: &'a AppState,
}

/// UI renderer for the application
pub struct UiRenderer {
    help: HelpOverlay,
    nav_items: Vec<NavBarItem>,
}

impl UiRenderer {
    /// Create a renderer for the given keybindings
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        Self {
            help: HelpOverlay::new(keybinding_ctx),
            nav_items: keybinding_ctx.get_nav_items(),
        }
    }

    /// Render the complete UI
    pub fn render(&self, f: &mut Frame, view: &View<'_>) {
        let snapshot = view.snapshot;
        let code_height = u16::try_from(view.source_lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .max(5);
        let error_height = if snapshot.error.is_some() { 4 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(code_height),  // Code + variables
                Constraint::Length(4),            // Explanation
                Constraint::Length(error_height), // Error
                Constraint::Length(3),            // Status
                Constraint::Min(3),               // Output
                Constraint::Length(1),            // Navigation bar
            ])
            .split(f.area());

        render_title(f, chunks[0]);
        self.render_code_row(f, chunks[1], view);
        render_explanation(f, chunks[2], view);
        if let Some(error) = &snapshot.error {
            render_error(f, chunks[3], error);
        }
        render_status(f, chunks[4], view);
        render_output(f, chunks[5], snapshot);
        self.render_nav_bar(f, chunks[6]);

        if view.state.help_visible {
            self.help.render(f, f.area());
        }
    }

    fn render_code_row(&self, f: &mut Frame, area: Rect, view: &View<'_>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let code = Paragraph::new(code::render_code_lines(
            &view.source_lines,
            view.snapshot.current_line,
            view.snapshot.cursor(),
        ))
        .style(Styles::code())
        .block(panel("Code"));
        f.render_widget(code, columns[0]);

        let variables = Paragraph::new(panels::variable_lines(view.snapshot))
            .style(Styles::code())
            .wrap(Wrap { trim: false })
            .block(panel("Variables"));
        f.render_widget(variables, columns[1]);
    }

    fn render_nav_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.nav_items.len() * 2);
        for item in &self.nav_items {
            spans.push(Span::styled(format!(" {} ", item.key_display), Styles::badge()));
            spans.push(Span::styled(format!("{}  ", item.action_label), Styles::text_muted()));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Styles::border_active())
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Python for-in Loop Explorer")
        .block(Block::default().borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

fn render_explanation(f: &mut Frame, area: Rect, view: &View<'_>) {
    let text = explain_snapshot(view.snapshot, view.state.language);
    let widget = Paragraph::new(text)
        .style(Styles::text())
        .wrap(Wrap { trim: true })
        .block(panel("Explanation"));
    f.render_widget(widget, area);
}

fn render_error(f: &mut Frame, area: Rect, error: &str) {
    let widget = Paragraph::new(error.to_string())
        .style(Styles::error())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Styles::error()),
        );
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, area: Rect, view: &View<'_>) {
    let mut lines = vec![panels::status_line(view.snapshot, view.state.language)];
    if !view.state.status_message.is_empty() {
        lines.push(Line::from(Span::styled(
            view.state.status_message.clone(),
            Styles::text_muted(),
        )));
    }
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::TOP)
            .border_style(Styles::border_active()),
    );
    f.render_widget(widget, area);
}

fn render_output(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let (lines, scroll) = panels::output_view(snapshot, area.height.saturating_sub(2));
    let widget = Paragraph::new(lines)
        .style(ratatui::style::Style::default().fg(Colors::FG_PRIMARY))
        .scroll((scroll, 0))
        .block(panel("Output"));
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepEngine;
    use crate::narration::Language;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(engine: &StepEngine, state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = UiRenderer::new(&KeybindingContext::new());
        let snapshot = engine.snapshot();
        let view = View {
            source_lines: engine.source_lines(),
            snapshot: &snapshot,
            state,
        };
        terminal.draw(|f| renderer.render(f, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_initial_screen() {
        let engine = StepEngine::new(Language::English.sample_program());
        let screen = draw(&engine, &AppState::default());
        assert!(screen.contains("for hand in basket:"));
        assert!(screen.contains("No variables to show"));
        assert!(screen.contains("Shall we start exploring"));
    }

    #[test]
    fn test_render_error_panel() {
        let mut engine = StepEngine::new("basket = [apple]");
        engine.advance();
        let screen = draw(&engine, &AppState::default());
        assert!(screen.contains("Error"));
    }

    #[test]
    fn test_render_help_overlay() {
        let engine = StepEngine::new(Language::English.sample_program());
        let state = AppState {
            help_visible: true,
            ..AppState::default()
        };
        let screen = draw(&engine, &state);
        assert!(screen.contains("Loop Explorer Help"));
    }
}
