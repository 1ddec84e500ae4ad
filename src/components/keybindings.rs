//! Keybinding registry for the stepper screen
//!
//! Maps key presses to explorer actions and supplies the labels shown in the
//! navigation bar and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Run the whole loop at once
    Run,
    /// Take one micro-step
    Step,
    /// Start over
    Reset,
    /// Switch narration language
    ToggleLanguage,
    Help,
    /// Close the help overlay, or quit when nothing is open
    Back,
    Quit,
}

impl KeyAction {
    /// Whether the action drives the engine
    pub const fn is_engine_action(self) -> bool {
        matches!(self, Self::Run | Self::Step | Self::Reset)
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
    /// Shown in the navigation bar (otherwise help overlay only)
    pub in_nav_bar: bool,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
            in_nav_bar: true,
        }
    }

    /// Same binding, listed only in the help overlay
    fn help_only(mut self) -> Self {
        self.in_nav_bar = false;
        self
    }

    /// Shift is ignored and letters match in either case, so Shift+/ is `?`
    /// and Caps Lock does not disable the letter keys
    fn matches(&self, event: &KeyEvent) -> bool {
        let code_matches = match (self.key, event.code) {
            (KeyCode::Char(bound), KeyCode::Char(pressed)) => bound.eq_ignore_ascii_case(&pressed),
            (bound, pressed) => bound == pressed,
        };
        code_matches && event.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Keybinding registry
pub struct KeybindingContext {
    bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        Self {
            bindings: vec![
                Keybinding::new(KeyCode::Char('r'), KeyAction::Run, "R", "Run all"),
                Keybinding::new(KeyCode::Enter, KeyAction::Run, "Enter", "Run all").help_only(),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Step, "N", "Next step"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Step, "Space", "Next step")
                    .help_only(),
                Keybinding::new(KeyCode::Right, KeyAction::Step, "Right", "Next step").help_only(),
                Keybinding::new(KeyCode::Char('0'), KeyAction::Reset, "0", "Start over"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Reset, "Backspace", "Start over")
                    .help_only(),
                Keybinding::new(KeyCode::Char('l'), KeyAction::ToggleLanguage, "L", "Language"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Close help / quit")
                    .help_only(),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        }
    }

    /// Action bound to a key event; key releases are ignored
    pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings
            .iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Items for the navigation bar
    pub fn get_nav_items(&self) -> Vec<NavBarItem> {
        self.bindings
            .iter()
            .filter(|b| b.in_nav_bar)
            .map(|b| NavBarItem {
                key_display: b.display.clone(),
                action_label: b.description.clone(),
            })
            .collect()
    }

    /// Full help content for the help overlay
    pub fn get_help_content(&self) -> Vec<HelpSection> {
        let section = |title: &str, engine: bool| HelpSection {
            title: title.to_string(),
            items: self
                .bindings
                .iter()
                .filter(|b| b.action.is_engine_action() == engine)
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        };

        vec![section("Stepping", true), section("General", false)]
    }
}
