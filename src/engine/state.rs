//! Engine state and the pure transition function
//!
//! All mutation of the stepper goes through [`transition`], which consumes the
//! current [`EngineState`] and an [`Event`] and returns the next state. The
//! function never fails: every reachable (state, event) pair has an outcome.
//!
//! # Transition table (`Event::Advance`)
//!
//! | From            | Guard                 | Action                        | To          |
//! |-----------------|-----------------------|-------------------------------|-------------|
//! | Init            |                       | line = 0                      | Defined     |
//! | IterableDefined |                       | line = loop header            | LoopCheck   |
//! | LoopCheck       | next < len            | cursor = next                 | Bind        |
//! | LoopCheck       | next >= len           |                               | LoopExit    |
//! | Bind            |                       | current = iterable[cursor]    | Print       |
//! | Print           |                       | output += current; line = body| LoopBack    |
//! | LoopBack        |                       | line = loop header            | LoopCheck   |
//! | LoopExit        |                       | line = after loop; idle       | LoopExit    |

use super::step::{AFTER_LOOP_LINE, ASSIGNMENT_LINE, BODY_LINE, LOOP_HEADER_LINE, Step};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Variable bindings visible to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    /// Elements of the list literal in source order
    iterable: Vec<String>,
    /// Current binding of the loop variable; absent until the first bind
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<String>,
}

impl Environment {
    /// Fresh environment with nothing bound to the loop variable
    pub fn new(iterable: Vec<String>) -> Self {
        Self {
            iterable,
            current: None,
        }
    }

    pub fn iterable(&self) -> &[String] {
        &self.iterable
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Element at `index`, if any
    pub fn element(&self, index: usize) -> Option<&str> {
        self.iterable.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.iterable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterable.is_empty()
    }

    fn bind(&mut self, index: usize) {
        self.current = self.iterable.get(index).cloned();
    }

    fn unbind(&mut self) {
        self.current = None;
    }
}

/// Whether the engine is stepping, running, or at rest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RunState {
    /// Not started, just finished, or just reset
    #[default]
    Idle,
    /// Mid manual stepping
    Stepped,
    /// A run-to-completion is in progress
    Running,
}

/// Inputs that drive the engine from one state to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Source parsed successfully; install it and take the first step
    Start(Environment),
    /// Take exactly one micro-step
    Advance,
    /// Execute the whole loop at statement granularity on a fresh environment
    Complete(Environment),
    /// Parsing failed with the given message
    Fail(String),
    /// Return to the initial state, keeping the parsed list
    Reset,
}

/// Complete state of the stepper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineState {
    pub step: Step,
    /// Index of the most recently bound element
    pub cursor: Option<usize>,
    /// Variable bindings; `None` until the source has been parsed
    pub environment: Option<Environment>,
    /// Lines printed so far
    pub output: Vec<String>,
    pub current_line: usize,
    pub run_state: RunState,
    pub error: Option<String>,
}

impl EngineState {
    /// Everything printed so far, one line per element with a trailing newline
    pub fn output_text(&self) -> String {
        self.output.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Cursor as a signed index, -1 before the first bind
    pub fn cursor_index(&self) -> isize {
        self.cursor
            .and_then(|c| isize::try_from(c).ok())
            .unwrap_or(-1)
    }

    fn iterable_len(&self) -> usize {
        self.environment.as_ref().map_or(0, Environment::len)
    }
}

/// Compute the state that follows `state` under `event`.
pub fn transition(state: EngineState, event: Event) -> EngineState {
    match event {
        Event::Start(environment) => advance(EngineState {
            environment: Some(environment),
            run_state: RunState::Stepped,
            ..EngineState::default()
        }),
        Event::Advance => advance(state),
        Event::Complete(environment) => complete(environment),
        Event::Fail(message) => EngineState {
            error: Some(message),
            ..EngineState::default()
        },
        Event::Reset => {
            let environment = state.environment.map(|mut env| {
                env.unbind();
                env
            });
            EngineState {
                environment,
                ..EngineState::default()
            }
        }
    }
}

/// Apply one row of the transition table
fn advance(mut state: EngineState) -> EngineState {
    match state.step {
        Step::Init => {
            state.current_line = ASSIGNMENT_LINE;
            state.step = Step::IterableDefined;
        }
        Step::IterableDefined => {
            state.current_line = LOOP_HEADER_LINE;
            state.step = Step::LoopCheck;
        }
        Step::LoopCheck => {
            let next = state.cursor.map_or(0, |c| c + 1);
            if next < state.iterable_len() {
                state.cursor = Some(next);
                state.step = Step::Bind;
            } else {
                state.step = Step::LoopExit;
            }
        }
        Step::Bind => {
            if let (Some(env), Some(cursor)) = (state.environment.as_mut(), state.cursor) {
                env.bind(cursor);
            }
            state.current_line = LOOP_HEADER_LINE;
            state.step = Step::Print;
        }
        Step::Print => {
            if let Some(current) = state.environment.as_ref().and_then(Environment::current) {
                state.output.push(current.to_string());
            }
            state.current_line = BODY_LINE;
            state.step = Step::LoopBack;
        }
        Step::LoopBack => {
            state.current_line = LOOP_HEADER_LINE;
            state.step = Step::LoopCheck;
        }
        Step::LoopExit => {
            state.current_line = AFTER_LOOP_LINE;
            state.run_state = RunState::Idle;
        }
    }
    state
}

/// Statement-level execution: print every element in order
fn complete(mut environment: Environment) -> EngineState {
    let output = environment.iterable().to_vec();
    let cursor = environment.len().checked_sub(1);
    if let Some(last) = cursor {
        environment.bind(last);
    }

    EngineState {
        step: Step::LoopExit,
        cursor,
        environment: Some(environment),
        output,
        current_line: AFTER_LOOP_LINE,
        run_state: RunState::Idle,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(items: &[&str]) -> Environment {
        Environment::new(items.iter().map(|s| s.to_string()).collect())
    }

    fn at(step: Step, cursor: Option<usize>, items: &[&str]) -> EngineState {
        EngineState {
            step,
            cursor,
            environment: Some(env(items)),
            run_state: RunState::Stepped,
            ..EngineState::default()
        }
    }

    #[test]
    fn test_environment_accessors() {
        assert!(env(&[]).is_empty());
        let filled = env(&["a", "b"]);
        assert!(!filled.is_empty());
        assert_eq!(filled.element(1), Some("b"));
        assert_eq!(filled.element(2), None);
    }

    #[test]
    fn test_start_installs_environment_and_moves_to_defined() {
        let next = transition(EngineState::default(), Event::Start(env(&["a"])));
        assert_eq!(next.step, Step::IterableDefined);
        assert_eq!(next.current_line, ASSIGNMENT_LINE);
        assert_eq!(next.run_state, RunState::Stepped);
        assert_eq!(next.cursor, None);
        assert_eq!(next.environment.as_ref().map(Environment::len), Some(1));
    }

    #[test]
    fn test_defined_moves_to_loop_header() {
        let next = transition(at(Step::IterableDefined, None, &["a"]), Event::Advance);
        assert_eq!(next.step, Step::LoopCheck);
        assert_eq!(next.current_line, LOOP_HEADER_LINE);
    }

    #[test]
    fn test_loop_check_with_remaining_element_advances_cursor() {
        let next = transition(at(Step::LoopCheck, None, &["a", "b"]), Event::Advance);
        assert_eq!(next.step, Step::Bind);
        assert_eq!(next.cursor, Some(0));

        let next = transition(at(Step::LoopCheck, Some(0), &["a", "b"]), Event::Advance);
        assert_eq!(next.cursor, Some(1));
    }

    #[test]
    fn test_loop_check_when_exhausted_exits() {
        let next = transition(at(Step::LoopCheck, Some(1), &["a", "b"]), Event::Advance);
        assert_eq!(next.step, Step::LoopExit);
        assert_eq!(next.cursor, Some(1));
    }

    #[test]
    fn test_bind_sets_current() {
        let next = transition(at(Step::Bind, Some(1), &["a", "b"]), Event::Advance);
        assert_eq!(next.step, Step::Print);
        assert_eq!(
            next.environment.as_ref().and_then(Environment::current),
            Some("b")
        );
    }

    #[test]
    fn test_print_appends_current_and_highlights_body() {
        let mut state = at(Step::Bind, Some(0), &["a"]);
        state = transition(state, Event::Advance);
        state = transition(state, Event::Advance);
        assert_eq!(state.step, Step::LoopBack);
        assert_eq!(state.current_line, BODY_LINE);
        assert_eq!(state.output_text(), "a\n");
    }

    #[test]
    fn test_loop_back_returns_to_check() {
        let next = transition(at(Step::LoopBack, Some(0), &["a"]), Event::Advance);
        assert_eq!(next.step, Step::LoopCheck);
        assert_eq!(next.current_line, LOOP_HEADER_LINE);
    }

    #[test]
    fn test_loop_exit_is_absorbing() {
        let first = transition(at(Step::LoopExit, Some(0), &["a"]), Event::Advance);
        assert_eq!(first.current_line, AFTER_LOOP_LINE);
        assert_eq!(first.run_state, RunState::Idle);

        let second = transition(first.clone(), Event::Advance);
        assert_eq!(first, second);
    }

    #[test]
    fn test_complete_prints_everything() {
        let state = transition(EngineState::default(), Event::Complete(env(&["x", "y"])));
        assert_eq!(state.output_text(), "x\ny\n");
        assert_eq!(state.cursor_index(), 1);
        assert_eq!(state.step, Step::LoopExit);
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.current_line, AFTER_LOOP_LINE);
    }

    #[test]
    fn test_complete_on_empty_list() {
        let state = transition(EngineState::default(), Event::Complete(env(&[])));
        assert_eq!(state.output_text(), "");
        assert_eq!(state.cursor_index(), -1);
    }

    #[test]
    fn test_fail_discards_environment() {
        let state = transition(at(Step::Print, Some(0), &["a"]), Event::Fail("bad".into()));
        assert!(state.environment.is_none());
        assert_eq!(state.error.as_deref(), Some("bad"));
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.step, Step::Init);
    }

    #[test]
    fn test_reset_keeps_list_but_unbinds() {
        let mut state = at(Step::Bind, Some(0), &["a"]);
        state = transition(state, Event::Advance);
        state = transition(state, Event::Advance);
        let reset = transition(state, Event::Reset);

        assert_eq!(reset.step, Step::Init);
        assert_eq!(reset.cursor_index(), -1);
        assert!(reset.output.is_empty());
        let env = reset.environment.expect("list kept");
        assert_eq!(env.iterable(), ["a"]);
        assert!(env.current().is_none());
    }

    #[test]
    fn test_run_state_strings() {
        assert_eq!(RunState::Stepped.to_string(), "stepped");
        assert_eq!("running".parse::<RunState>().ok(), Some(RunState::Running));
    }
}
