//! Help overlay component
//!
//! Draws the keybinding reference in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a help overlay from the registered keybindings
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        Self {
            content: Self::build_content(&keybinding_ctx.get_help_content()),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  Loop Explorer Help  ", Styles::title())),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::title()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )));
        lines
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = u16::try_from(self.content.len() + 2).unwrap_or(u16::MAX);
        let area = centered_rect(parent, 50, height);

        f.render_widget(Clear, area);
        let widget = Paragraph::new(self.content.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Styles::border_active())
                .style(Styles::panel_bg()),
        );
        f.render_widget(widget, area);
    }
}

/// Rectangle of at most `width` x `height` centered in `parent`
fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(parent.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(parent.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
