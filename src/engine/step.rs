//! Micro-step enumeration
//!
//! The stepper walks a fixed cycle of seven micro-steps:
//!
//! ```text
//! Init
//!   ↓
//! IterableDefined
//!   ↓
//! LoopCheck ──(no element left)──→ LoopExit (absorbing)
//!   ↓                  ↑
//! Bind                 │
//!   ↓                  │
//! Print                │
//!   ↓                  │
//! LoopBack ────────────┘ (back to LoopCheck)
//! ```

use std::fmt;
use strum::EnumIter;

/// Line holding the `basket = [...]` assignment
pub const ASSIGNMENT_LINE: usize = 0;

/// Line holding the `for hand in basket:` header
pub const LOOP_HEADER_LINE: usize = 1;

/// Line holding the indented `print(hand)` body
pub const BODY_LINE: usize = 2;

/// First line after the loop
pub const AFTER_LOOP_LINE: usize = 3;

/// Step index of the engine, numbered as shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
#[repr(u8)]
pub enum Step {
    /// Nothing has run yet
    #[default]
    Init = 0,

    /// The list assignment has been executed
    IterableDefined = 1,

    /// About to check whether another element remains
    LoopCheck = 2,

    /// The next element is bound to the loop variable
    Bind = 3,

    /// The body `print` runs
    Print = 4,

    /// Control returns to the loop header
    LoopBack = 5,

    /// The loop has finished (terminal)
    LoopExit = 6,
}

impl Step {
    /// Numeric index of this step (0-6)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look a step up by its numeric index
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Init),
            1 => Some(Self::IterableDefined),
            2 => Some(Self::LoopCheck),
            3 => Some(Self::Bind),
            4 => Some(Self::Print),
            5 => Some(Self::LoopBack),
            6 => Some(Self::LoopExit),
            _ => None,
        }
    }

    /// Returns true once the loop has exited
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::LoopExit)
    }

    /// Short human-readable name of the step
    pub const fn description(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::IterableDefined => "iterable defined",
            Self::LoopCheck => "loop-entry check",
            Self::Bind => "bind element",
            Self::Print => "execute print",
            Self::LoopBack => "loop back",
            Self::LoopExit => "loop exit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for step in Step::iter() {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
        assert_eq!(Step::from_index(7), None);
    }

    #[test]
    fn test_only_loop_exit_is_terminal() {
        let terminal: Vec<Step> = Step::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![Step::LoopExit]);
    }

    #[test]
    fn test_default_is_init() {
        assert_eq!(Step::default(), Step::Init);
        assert_eq!(Step::default().to_string(), "init");
    }
}
