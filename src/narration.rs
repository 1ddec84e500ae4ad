//! Narration provider
//!
//! Maps a step index, cursor, and environment to the sentence shown to the
//! learner. Pure and total: every step has a template, missing values are
//! rendered as `?`, and nothing here touches engine state.
//!
//! Narration is written as a forecast. At `LoopCheck` the learner is told
//! which element comes next, so the position announced is `cursor + 2`
//! (1-based position of the element after the cursor).

use crate::engine::{Environment, Snapshot, Step};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Placeholder for a value that is not bound yet
const MISSING: &str = "?";

/// Languages the narration is available in.
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
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
    #[serde(rename = "ko")]
    #[strum(serialize = "ko")]
    Korean,
}

impl Language {
    /// Native display name
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Korean => "한국어",
        }
    }

    /// The other language
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Korean,
            Self::Korean => Self::English,
        }
    }

    /// Program shown when no source is configured
    pub const fn sample_program(self) -> &'static str {
        match self {
            Self::English => {
                "basket = [\"apple\", \"banana\", \"cherry\"]\nfor hand in basket:\n    print(hand)"
            }
            Self::Korean => {
                "basket = [\"사과\", \"바나나\", \"체리\"]\nfor hand in basket:\n    print(hand)"
            }
        }
    }
}

/// Explain the given step to the learner.
pub fn explain(
    step: Step,
    cursor: Option<usize>,
    environment: Option<&Environment>,
    language: Language,
) -> String {
    let len = environment.map_or(0, Environment::len);
    let next_position = cursor.map_or(0, |c| c + 1);

    match step {
        Step::Init => match language {
            Language::English => "Shall we start exploring the fruit?".to_string(),
            Language::Korean => "과일 탐색을 시작해볼까요?".to_string(),
        },
        Step::IterableDefined => match language {
            Language::English => "The fruit basket (basket) is ready! Let's start the for loop \
                                  and check the fruit one at a time."
                .to_string(),
            Language::Korean => "과일 바구니(basket)가 준비됐어요! 이제 for 문을 시작해서 \
                                 과일을 하나씩 확인해볼까요?"
                .to_string(),
        },
        Step::LoopCheck if next_position < len => {
            let ordinal = next_position + 1;
            match language {
                Language::English => {
                    format!("Time to look at fruit number {ordinal}. Which fruit could it be?")
                }
                Language::Korean => {
                    format!("{ordinal}번째 과일을 살펴볼 차례예요. 어떤 과일일까요?")
                }
            }
        }
        Step::LoopCheck => match language {
            Language::English => {
                "Wow! We've looked at every fruit. Time to finish the for loop.".to_string()
            }
            Language::Korean => {
                "와! 모든 과일을 다 살펴봤어요. 이제 for 문을 마칠 시간이에요.".to_string()
            }
        },
        Step::Bind => {
            let element = environment
                .zip(cursor)
                .and_then(|(env, c)| env.element(c))
                .unwrap_or(MISSING);
            match language {
                Language::English => format!(
                    "Took '{element}' out of the basket (basket) into the hand (hand). \
                     The fruit is now in the hand (hand)."
                ),
                Language::Korean => format!(
                    "'바구니(basket)'에서 '{element}'를 '손(hand)'으로 꺼냈어요. \
                     과일은 현재 '손(hand)에 있어요."
                ),
            }
        }
        Step::Print => match language {
            Language::English => "Now we move to the next line and print which fruit the \
                                  hand (hand) is holding."
                .to_string(),
            Language::Korean => "이제 다음 줄로 넘어가 '손(hand)' 안에 어떤 과일을 쥐고 있는지 \
                                 출력해볼 거예요."
                .to_string(),
        },
        Step::LoopBack => {
            let current = environment.and_then(Environment::current).unwrap_or(MISSING);
            match language {
                Language::English => format!(
                    "'{current}', held in the hand (hand), was printed. Check the output window!"
                ),
                Language::Korean => format!(
                    "'손(hand)'에 쥐고 있는 '{current}'가 출력됐어요. 결과 창을 확인해보세요!"
                ),
            }
        }
        Step::LoopExit => match language {
            Language::English => {
                "We've checked every fruit. Fruit exploration complete!".to_string()
            }
            Language::Korean => "모든 과일을 다 확인해봤어요. 과일 탐색 끝!".to_string(),
        },
    }
}

/// Explain a snapshot; the snapshot is the only input
pub fn explain_snapshot(snapshot: &Snapshot, language: Language) -> String {
    explain(
        snapshot.step(),
        snapshot.cursor(),
        snapshot.variables.as_ref(),
        language,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn basket() -> Environment {
        Environment::new(vec!["apple".into(), "banana".into(), "cherry".into()])
    }

    #[test]
    fn test_every_step_has_text_in_every_language() {
        let env = basket();
        for language in Language::iter() {
            for step in Step::iter() {
                assert!(!explain(step, Some(0), Some(&env), language).is_empty());
                assert!(!explain(step, None, None, language).is_empty());
            }
        }
    }

    #[test]
    fn test_loop_check_announces_upcoming_position() {
        let env = basket();
        let text = explain(Step::LoopCheck, None, Some(&env), Language::English);
        assert!(text.contains("number 1"));

        let text = explain(Step::LoopCheck, Some(1), Some(&env), Language::Korean);
        assert!(text.starts_with("3번째"));
    }

    #[test]
    fn test_loop_check_when_exhausted() {
        let env = basket();
        let text = explain(Step::LoopCheck, Some(2), Some(&env), Language::English);
        assert!(text.contains("every fruit"));
    }

    #[test]
    fn test_bind_names_element_at_cursor() {
        let env = basket();
        let text = explain(Step::Bind, Some(1), Some(&env), Language::English);
        assert!(text.contains("'banana'"));
    }

    #[test]
    fn test_missing_binding_renders_placeholder() {
        let env = basket();
        let text = explain(Step::LoopBack, Some(0), Some(&env), Language::English);
        assert!(text.starts_with("'?'"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Korean.to_string(), "ko");
        assert_eq!("en".parse::<Language>().ok(), Some(Language::English));
        assert_eq!(Language::English.toggled(), Language::Korean);
        let json = serde_json::to_string(&Language::Korean).unwrap();
        assert_eq!(json, "\"ko\"");
    }

    #[test]
    fn test_sample_programs_parse() {
        for language in Language::iter() {
            let env = crate::parser::parse_source(language.sample_program()).unwrap();
            assert_eq!(env.len(), 3);
        }
    }
}
