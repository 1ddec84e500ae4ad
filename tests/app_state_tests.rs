//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Key events flowing through the keybinding context into the engine
//! - Help overlay gating and language toggling
//! - Rendering every screen state without panicking

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use loop_explorer::app::{App, AppState};
use loop_explorer::components::{KeyAction, KeybindingContext};
use loop_explorer::ui::{UiRenderer, View};
use loop_explorer::{Language, RunState, StepEngine};
use ratatui::{Terminal, backend::TestBackend};
use std::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(source: &str) -> App {
    App::new(
        StepEngine::new(source),
        AppState::default(),
        Duration::from_millis(50),
    )
}

/// Resolve a key through the default bindings and apply it; true means quit
fn press(app: &mut App, code: KeyCode) -> bool {
    let context = KeybindingContext::new();
    match context.action_for(&key(code)) {
        Some(action) => app.handle_action(action),
        None => false,
    }
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_language_is_english() {
    let state = AppState::default();
    assert_eq!(state.language, Language::English);
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_has_hint_message() {
    let state = AppState::default();
    assert!(!state.status_message.is_empty());
}

// =============================================================================
// Key Handling Tests
// =============================================================================

#[test]
fn test_step_keys_all_advance() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.engine().snapshot().step_index, 3);
    assert_eq!(app.engine().snapshot().run_state, RunState::Stepped);
}

#[test]
fn test_run_key_prints_everything() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Enter);
    let snapshot = app.engine().snapshot();
    assert_eq!(snapshot.output_text, "apple\nbanana\ncherry\n");
    assert!(app.state().status_message.contains('3'));
}

#[test]
fn test_reset_key_returns_to_start() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Backspace);
    let snapshot = app.engine().snapshot();
    assert_eq!(snapshot.step_index, 0);
    assert_eq!(snapshot.output_text, "");
}

#[test]
fn test_step_after_finish_reports_finished() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('n'));
    assert!(app.state().status_message.contains("finished"));
}

#[test]
fn test_bad_source_reports_failure() {
    let mut app = app_with("basket = [apple]");
    press(&mut app, KeyCode::Char('n'));
    assert!(app.engine().snapshot().error.is_some());
    assert!(app.state().status_message.contains("fix the first line"));
}

#[test]
fn test_language_toggle_round_trips() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().language, Language::Korean);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().language, Language::English);
}

#[test]
fn test_help_overlay_swallows_engine_keys() {
    let mut app = app_with(Language::English.sample_program());
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.engine().snapshot().step_index, 0);

    assert!(!press(&mut app, KeyCode::Esc));
    assert!(!app.state().help_visible);
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(Language::English.sample_program());
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn test_key_release_is_ignored() {
    let context = KeybindingContext::new();
    let mut event = key(KeyCode::Char('n'));
    event.kind = KeyEventKind::Release;
    assert_eq!(context.action_for(&event), None);
    assert_eq!(
        context.action_for(&key(KeyCode::Char('n'))),
        Some(KeyAction::Step)
    );
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_render_every_step_of_sample() {
    let context = KeybindingContext::new();
    let renderer = UiRenderer::new(&context);
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut engine = StepEngine::new(Language::Korean.sample_program());
    let mut state = AppState::new(Language::Korean);
    state.help_visible = true;

    loop {
        let snapshot = engine.advance();
        let view = View {
            source_lines: engine.source_lines(),
            snapshot: &snapshot,
            state: &state,
        };
        terminal.draw(|f| renderer.render(f, &view)).unwrap();
        if engine.is_finished() {
            break;
        }
    }
}
