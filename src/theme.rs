//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles. The code panel uses an
//! "Atom One Dark"-like palette; the rest of the chrome follows the terminal's
//! named colors.
//!
//! # Usage
//! ```rust
//! use loop_explorer::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // Code Panel (One Dark)
    // -------------------------------------------------------------------------

    /// Editor background (#282c34)
    pub const CODE_BG: Color = Color::Rgb(40, 44, 52);

    /// Plain source text (#abb2bf)
    pub const CODE_FG: Color = Color::Rgb(171, 178, 191);

    /// Keywords (#c678dd)
    pub const CODE_KEYWORD: Color = Color::Rgb(198, 120, 221);

    /// String literals (#98c379)
    pub const CODE_STRING: Color = Color::Rgb(152, 195, 121);

    /// Numbers (#d19a66)
    pub const CODE_NUMBER: Color = Color::Rgb(209, 154, 102);

    /// Builtin functions (#61afef)
    pub const CODE_BUILTIN: Color = Color::Rgb(97, 175, 239);

    /// Comments (#5c6370)
    pub const CODE_COMMENT: Color = Color::Rgb(92, 99, 112);

    /// Background of the line about to execute
    pub const CURRENT_LINE_BG: Color = Color::Rgb(38, 79, 145);

    /// Background of the list element the cursor points at (#89702c)
    pub const CURRENT_ELEMENT_BG: Color = Color::Rgb(137, 112, 44);
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Code panel base style
    pub fn code() -> Style {
        Style::default().fg(Colors::CODE_FG).bg(Colors::CODE_BG)
    }

    /// Error message style
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Run-state badge
    pub fn badge() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}
