//! Code panel: token colouring and execution highlights
//!
//! The tokenizer is deliberately small; it knows just enough Python to colour
//! the three-line program. The element the cursor points at is found by its
//! ordinal among the string literals of the assignment line, never by
//! comparing text.

use crate::engine::step::ASSIGNMENT_LINE;
use crate::theme::{Colors, Styles};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const KEYWORDS: &[&str] = &[
    "and", "break", "continue", "def", "elif", "else", "for", "if", "in", "is", "not", "or",
    "pass", "return", "while", "None", "True", "False",
];

const BUILTINS: &[&str] = &["print", "len", "range", "list", "str"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Builtin,
    Identifier,
    String,
    Number,
    Comment,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Split one source line into coloured tokens
pub fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        let start = i;
        let kind = if c == '#' {
            i = chars.len();
            TokenKind::Comment
        } else if c == '"' || c == '\'' {
            i += 1;
            while let Some(&next) = chars.get(i) {
                i += 1;
                if next == '\\' {
                    i += 1;
                } else if next == c {
                    break;
                }
            }
            TokenKind::String
        } else if c.is_ascii_digit() {
            while chars.get(i).is_some_and(|ch| ch.is_ascii_alphanumeric() || *ch == '.') {
                i += 1;
            }
            TokenKind::Number
        } else if c.is_alphabetic() || c == '_' {
            while chars.get(i).is_some_and(|ch| ch.is_alphanumeric() || *ch == '_') {
                i += 1;
            }
            TokenKind::Identifier
        } else {
            i += 1;
            while chars
                .get(i)
                .is_some_and(|ch| !(ch.is_alphanumeric() || matches!(ch, '_' | '"' | '\'' | '#')))
            {
                i += 1;
            }
            TokenKind::Other
        };

        let end = i.min(chars.len());
        let text: String = chars.get(start..end).unwrap_or_default().iter().collect();
        let kind = match kind {
            TokenKind::Identifier if KEYWORDS.contains(&text.as_str()) => TokenKind::Keyword,
            TokenKind::Identifier if BUILTINS.contains(&text.as_str()) => TokenKind::Builtin,
            other => other,
        };
        tokens.push(Token { kind, text });
    }

    tokens
}

fn token_style(kind: TokenKind) -> Style {
    // Foreground only, so the line background shows through
    let style = Style::default().fg(Colors::CODE_FG);
    match kind {
        TokenKind::Keyword => style.fg(Colors::CODE_KEYWORD),
        TokenKind::Builtin => style.fg(Colors::CODE_BUILTIN),
        TokenKind::String => style.fg(Colors::CODE_STRING),
        TokenKind::Number => style.fg(Colors::CODE_NUMBER),
        TokenKind::Comment => style.fg(Colors::CODE_COMMENT),
        TokenKind::Identifier | TokenKind::Other => style,
    }
}

/// Render the program with the current line and the cursor's element marked
pub fn render_code_lines(
    source_lines: &[&str],
    current_line: usize,
    cursor: Option<usize>,
) -> Vec<Line<'static>> {
    source_lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let mut ordinal = 0;
            let spans: Vec<Span<'static>> = tokenize(line)
                .into_iter()
                .map(|token| {
                    let mut style = token_style(token.kind);
                    if index == ASSIGNMENT_LINE && token.kind == TokenKind::String {
                        if cursor == Some(ordinal) {
                            style = style.bg(Colors::CURRENT_ELEMENT_BG);
                        }
                        ordinal += 1;
                    }
                    Span::styled(token.text, style)
                })
                .collect();

            let line = Line::from(spans).style(Styles::code());
            if index == current_line {
                line.patch_style(Style::default().bg(Colors::CURRENT_LINE_BG))
            } else {
                line
            }
        })
        .collect()
}
