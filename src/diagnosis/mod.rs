// SPDX-License-Identifier: PMPL-1.0-or-later

//! Eligibility diagnosis: questionnaire state and the scoring engine.
//!
//! The questionnaire is a fixed ordered sequence of 10 yes/no questions.
//! Scoring is a pure function from the answer vector to a percentage, a
//! tier, and a tier-dependent list of recommended next steps. Two distinct
//! counters exist by design: the progress indicator is position-based
//! (question index), the score is value-based (yes answers). Unanswered
//! positions count as not-yes; the denominator is always the full question
//! count.

use crate::i18n::{self, Key, Lang};
use crate::store::{DiagnosisAnswer, DiagnosisRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of questions in the eligibility questionnaire.
pub const QUESTION_COUNT: usize = 10;

/// The questionnaire, in presentation order.
pub const QUESTION_KEYS: [Key; QUESTION_COUNT] = [
    Key::DiagnosisQ1,
    Key::DiagnosisQ2,
    Key::DiagnosisQ3,
    Key::DiagnosisQ4,
    Key::DiagnosisQ5,
    Key::DiagnosisQ6,
    Key::DiagnosisQ7,
    Key::DiagnosisQ8,
    Key::DiagnosisQ9,
    Key::DiagnosisQ10,
];

/// Supplementary explanation shown with a question, where one exists.
///
/// Only the good-conduct question (index 2) carries one.
pub fn explanation_key(index: usize) -> Option<Key> {
    (index == 2).then_some(Key::CriminalRecordExplanation)
}

// ─── Questionnaire Session ──────────────────────────────────────────

/// In-memory state of one pass through the questionnaire.
///
/// Answers are recorded once per index and the cursor advances; stepping
/// back leaves later answers set, so the cursor can sit on an earlier
/// question while later positions already hold values.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    current: usize,
    answers: [Option<bool>; QUESTION_COUNT],
}

impl Questionnaire {
    pub fn new() -> Self {
        Self {
            current: 0,
            answers: [None; QUESTION_COUNT],
        }
    }

    /// Index of the question currently presented (0-based).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Key of the question currently presented.
    pub fn current_question(&self) -> Key {
        QUESTION_KEYS[self.current]
    }

    /// Position-based progress: (questions shown, total).
    ///
    /// This counts the cursor, not recorded answers; it is intentionally
    /// distinct from the yes-ratio used for scoring.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, QUESTION_COUNT)
    }

    /// Position-based progress as a whole percentage.
    pub fn progress_percent(&self) -> u8 {
        (((self.current + 1) * 100) / QUESTION_COUNT) as u8
    }

    /// Record an answer for the current question and advance.
    ///
    /// Returns `true` once the last question has been answered.
    pub fn answer(&mut self, yes: bool) -> bool {
        self.answers[self.current] = Some(yes);
        if self.current + 1 < QUESTION_COUNT {
            self.current += 1;
            false
        } else {
            true
        }
    }

    /// Move the cursor back one question. No-op on the first question.
    pub fn step_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn answers(&self) -> &[Option<bool>; QUESTION_COUNT] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Scoring ────────────────────────────────────────────────────────

/// Eligibility tier derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Eligible,
    PossibleEligibility,
    InsufficientEligibility,
}

impl Tier {
    /// Threshold mapping: >= 80 eligible, 60..80 possible, < 60 insufficient.
    pub fn from_percentage(percentage: u8) -> Tier {
        if percentage >= 80 {
            Tier::Eligible
        } else if percentage >= 60 {
            Tier::PossibleEligibility
        } else {
            Tier::InsufficientEligibility
        }
    }

    /// Localization key of the tier label.
    pub fn key(&self) -> Key {
        match self {
            Tier::Eligible => Key::Eligible,
            Tier::PossibleEligibility => Key::PossibleEligibility,
            Tier::InsufficientEligibility => Key::InsufficientEligibility,
        }
    }
}

/// Per-question weights consumed by the scorer.
///
/// The default is equal weighting, `round(100 * yes / 10)`. All questions
/// carry the same weight in shipped content despite materially different
/// legal significance; callers who disagree supply their own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights([u32; QUESTION_COUNT]);

impl Weights {
    /// Custom per-question weights. Zero-weight questions are allowed as
    /// long as at least one weight is positive.
    pub fn new(weights: [u32; QUESTION_COUNT]) -> Option<Self> {
        weights.iter().any(|&w| w > 0).then_some(Self(weights))
    }

    fn total(&self) -> u64 {
        self.0.iter().map(|&w| w as u64).sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self([1; QUESTION_COUNT])
    }
}

/// A recommended next step: (title key, description key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: Key,
    pub description: Key,
}

/// Next steps shown when the tier is [`Tier::Eligible`].
pub const STEPS_ELIGIBLE: [Recommendation; 4] = [
    Recommendation {
        title: Key::DiagnosisStep1Title,
        description: Key::DiagnosisStep1Desc,
    },
    Recommendation {
        title: Key::DiagnosisStep2Title,
        description: Key::DiagnosisStep2Desc,
    },
    Recommendation {
        title: Key::DiagnosisStep3Title,
        description: Key::DiagnosisStep3Desc,
    },
    Recommendation {
        title: Key::DiagnosisStep4Title,
        description: Key::DiagnosisStep4Desc,
    },
];

/// Next steps shown for every other tier.
pub const STEPS_SHORTFALL: [Recommendation; 3] = [
    Recommendation {
        title: Key::DiagnosisStepNg1Title,
        description: Key::DiagnosisStepNg1Desc,
    },
    Recommendation {
        title: Key::DiagnosisStepNg2Title,
        description: Key::DiagnosisStepNg2Desc,
    },
    Recommendation {
        title: Key::DiagnosisStepNg3Title,
        description: Key::DiagnosisStepNg3Desc,
    },
];

/// Result of scoring one answer vector.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub percentage: u8,
    pub tier: Tier,
    pub recommendations: &'static [Recommendation],
}

impl Evaluation {
    pub fn eligible(&self) -> bool {
        self.tier == Tier::Eligible
    }
}

/// Score an answer vector.
///
/// Pure and deterministic: the same vector always yields the same result.
/// Unanswered positions contribute nothing to the numerator but stay in
/// the denominator. The recommendation list is fixed per tier and does not
/// depend on which specific questions were answered no.
pub fn evaluate(answers: &[Option<bool>; QUESTION_COUNT], weights: &Weights) -> Evaluation {
    let yes_weight: u64 = answers
        .iter()
        .zip(weights.0.iter())
        .filter(|(a, _)| **a == Some(true))
        .map(|(_, &w)| w as u64)
        .sum();
    let total = weights.total();
    let percentage = ((yes_weight as f64 / total as f64) * 100.0).round() as u8;
    let tier = Tier::from_percentage(percentage);
    let recommendations: &'static [Recommendation] = match tier {
        Tier::Eligible => &STEPS_ELIGIBLE,
        _ => &STEPS_SHORTFALL,
    };
    Evaluation {
        percentage,
        tier,
        recommendations,
    }
}

/// Materialize an evaluation into a persistable record, with question
/// texts, recommendations, and explanations resolved in `lang`.
pub fn into_record(
    evaluation: &Evaluation,
    answers: &[Option<bool>; QUESTION_COUNT],
    lang: Lang,
    notes: String,
) -> DiagnosisRecord {
    let answer_rows = QUESTION_KEYS
        .iter()
        .enumerate()
        .map(|(i, &q)| DiagnosisAnswer {
            question: i18n::resolve(lang, q).to_string(),
            answer: answers[i] == Some(true),
            explanation: explanation_key(i)
                .map(|k| i18n::resolve(lang, k).to_string())
                .unwrap_or_default(),
        })
        .collect();
    let recommendations = evaluation
        .recommendations
        .iter()
        .map(|r| {
            format!(
                "{}: {}",
                i18n::resolve(lang, r.title),
                i18n::resolve(lang, r.description)
            )
        })
        .collect();
    DiagnosisRecord {
        id: Uuid::new_v4(),
        date: Utc::now(),
        score: evaluation.percentage,
        eligibility: evaluation.eligible(),
        answers: answer_rows,
        recommendations,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(yes: usize, no: usize) -> [Option<bool>; QUESTION_COUNT] {
        let mut v = [None; QUESTION_COUNT];
        for slot in v.iter_mut().take(yes) {
            *slot = Some(true);
        }
        for slot in v.iter_mut().skip(yes).take(no) {
            *slot = Some(false);
        }
        v
    }

    #[test]
    fn score_matches_yes_ratio_for_all_full_vectors() {
        // Exhaustive over the 2^10 fully-answered vectors.
        let weights = Weights::default();
        for bits in 0u16..1024 {
            let mut answers = [None; QUESTION_COUNT];
            for (i, slot) in answers.iter_mut().enumerate() {
                *slot = Some(bits & (1 << i) != 0);
            }
            let yes = bits.count_ones() as u32;
            let eval = evaluate(&answers, &weights);
            assert_eq!(eval.percentage as u32, yes * 10);
        }
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(Tier::from_percentage(80), Tier::Eligible);
        assert_eq!(Tier::from_percentage(100), Tier::Eligible);
        assert_eq!(Tier::from_percentage(79), Tier::PossibleEligibility);
        assert_eq!(Tier::from_percentage(60), Tier::PossibleEligibility);
        assert_eq!(Tier::from_percentage(59), Tier::InsufficientEligibility);
        assert_eq!(Tier::from_percentage(0), Tier::InsufficientEligibility);
    }

    #[test]
    fn eight_yes_two_no_is_eligible_with_four_steps() {
        let eval = evaluate(&vec_of(8, 2), &Weights::default());
        assert_eq!(eval.percentage, 80);
        assert_eq!(eval.tier, Tier::Eligible);
        assert_eq!(eval.recommendations.len(), 4);
        assert_eq!(eval.recommendations[0].title, Key::DiagnosisStep1Title);
    }

    #[test]
    fn five_yes_five_no_is_insufficient_with_three_steps() {
        let eval = evaluate(&vec_of(5, 5), &Weights::default());
        assert_eq!(eval.percentage, 50);
        assert_eq!(eval.tier, Tier::InsufficientEligibility);
        assert_eq!(eval.recommendations.len(), 3);
    }

    #[test]
    fn possible_tier_still_gets_the_shortfall_list() {
        let eval = evaluate(&vec_of(7, 3), &Weights::default());
        assert_eq!(eval.tier, Tier::PossibleEligibility);
        assert_eq!(eval.recommendations.len(), 3);
        assert_eq!(eval.recommendations[0].title, Key::DiagnosisStepNg1Title);
    }

    #[test]
    fn unanswered_counts_as_not_yes() {
        // 6 yes, 4 unanswered: 60%, not 100% of the answered subset.
        let eval = evaluate(&vec_of(6, 0), &Weights::default());
        assert_eq!(eval.percentage, 60);
        assert_eq!(eval.tier, Tier::PossibleEligibility);
    }

    #[test]
    fn custom_weights_shift_the_score() {
        let weights = Weights::new([5, 1, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();
        // Only the heavy question answered yes: 5/14 ≈ 36%.
        let mut answers = [Some(false); QUESTION_COUNT];
        answers[0] = Some(true);
        let eval = evaluate(&answers, &weights);
        assert_eq!(eval.percentage, 36);
    }

    #[test]
    fn zero_weight_table_is_rejected() {
        assert!(Weights::new([0; QUESTION_COUNT]).is_none());
    }

    #[test]
    fn questionnaire_progress_is_position_based() {
        let mut q = Questionnaire::new();
        assert_eq!(q.progress(), (1, 10));
        assert_eq!(q.progress_percent(), 10);
        q.answer(true);
        q.answer(false);
        assert_eq!(q.progress(), (3, 10));
        // Stepping back moves the cursor without clearing later answers.
        q.step_back();
        assert_eq!(q.progress(), (2, 10));
        assert_eq!(q.answers()[1], Some(false));
    }

    #[test]
    fn questionnaire_finishes_on_tenth_answer() {
        let mut q = Questionnaire::new();
        for i in 0..QUESTION_COUNT {
            let finished = q.answer(i % 2 == 0);
            assert_eq!(finished, i == QUESTION_COUNT - 1);
        }
        assert!(q.is_complete());
    }

    #[test]
    fn record_resolves_question_text_and_explanation() {
        let answers = vec_of(8, 2);
        let eval = evaluate(&answers, &Weights::default());
        let record = into_record(&eval, &answers, Lang::En, String::new());
        assert_eq!(record.score, 80);
        assert!(record.eligibility);
        assert_eq!(record.answers.len(), QUESTION_COUNT);
        assert_eq!(
            record.answers[0].question,
            "Have you lived in Japan continuously for more than 5 years?"
        );
        assert!(record.answers[2].explanation.contains("criminal record"));
        assert!(record.answers[0].explanation.is_empty());
        assert_eq!(record.recommendations.len(), 4);
    }
}
