//! Side panels: variables, explanation, error, status, output

use crate::engine::{RunState, Snapshot, Step};
use crate::narration::Language;
use crate::parser::{ITERABLE_NAME, LOOP_VARIABLE_NAME};
use crate::theme::{Colors, Styles};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Lines for the variables panel
pub fn variable_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(env) = &snapshot.variables else {
        return vec![Line::from(Span::styled(
            "No variables to show",
            Styles::text_muted(),
        ))];
    };

    let string_style = Style::default().fg(Colors::CODE_STRING);
    let mut list = vec![Span::raw(format!("{ITERABLE_NAME} = ["))];
    for (index, element) in env.iterable().iter().enumerate() {
        if index > 0 {
            list.push(Span::raw(", "));
        }
        let style = if snapshot.cursor() == Some(index) {
            string_style.bg(Colors::CURRENT_ELEMENT_BG)
        } else {
            string_style
        };
        list.push(Span::styled(quote(element), style));
    }
    list.push(Span::raw("]"));

    let binding = match env.current() {
        Some(value) => Span::styled(quote(value), string_style),
        None => Span::styled("<unbound>", Styles::text_muted()),
    };

    vec![
        Line::from(list),
        Line::from(vec![Span::raw(format!("{LOOP_VARIABLE_NAME} = ")), binding]),
    ]
}

/// JSON-style quoting, matching how the list was written
fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

/// One-line status: run state, step, cursor, language
pub fn status_line(snapshot: &Snapshot, language: Language) -> Line<'static> {
    let mode = match snapshot.run_state {
        RunState::Running => "Run mode",
        RunState::Idle | RunState::Stepped => "Step mode",
    };
    let step = snapshot.step();

    Line::from(vec![
        Span::styled(format!(" {mode} "), Styles::badge()),
        Span::styled(
            format!(
                " step {}/{} ({step})  cursor {}  state {}  narration {}",
                step.index(),
                Step::LoopExit.index(),
                snapshot.cursor_index,
                snapshot.run_state,
                language.label(),
            ),
            Styles::text(),
        ),
    ])
}

/// Output lines plus the scroll offset that keeps the last line visible
pub fn output_view(snapshot: &Snapshot, visible_rows: u16) -> (Vec<Line<'static>>, u16) {
    let lines: Vec<Line<'static>> = snapshot
        .output_lines()
        .into_iter()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    (lines, total.saturating_sub(visible_rows))
}
