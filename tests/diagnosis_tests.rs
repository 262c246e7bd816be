// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the eligibility scoring engine against its documented laws.

use kika::diagnosis::{self, Questionnaire, Tier, Weights, QUESTION_COUNT};
use kika::i18n::Lang;

fn answers_from_bools(values: &[bool]) -> [Option<bool>; QUESTION_COUNT] {
    let mut answers = [None; QUESTION_COUNT];
    for (slot, &v) in answers.iter_mut().zip(values) {
        *slot = Some(v);
    }
    answers
}

#[test]
fn test_score_law_for_full_vectors() {
    // score == round(100 * count(true) / 10) for every full vector.
    for yes in 0..=QUESTION_COUNT {
        let values: Vec<bool> = (0..QUESTION_COUNT).map(|i| i < yes).collect();
        let eval = diagnosis::evaluate(&answers_from_bools(&values), &Weights::default());
        assert_eq!(eval.percentage as usize, yes * 10);
    }
}

#[test]
fn test_scenario_eight_yes_two_no() {
    // answers = [true*8, false*2] -> 80 -> eligible -> 4 items, step 1 first.
    let values = [true, true, true, true, true, true, true, true, false, false];
    let eval = diagnosis::evaluate(&answers_from_bools(&values), &Weights::default());
    assert_eq!(eval.percentage, 80);
    assert_eq!(eval.tier, Tier::Eligible);
    assert!(eval.eligible());
    assert_eq!(eval.recommendations.len(), 4);

    let record = diagnosis::into_record(&eval, &answers_from_bools(&values), Lang::En, String::new());
    assert!(record.recommendations[0].starts_with("Prepare Required Documents"));
}

#[test]
fn test_scenario_five_yes_five_no() {
    let values = [true, true, true, true, true, false, false, false, false, false];
    let eval = diagnosis::evaluate(&answers_from_bools(&values), &Weights::default());
    assert_eq!(eval.percentage, 50);
    assert_eq!(eval.tier, Tier::InsufficientEligibility);
    assert!(!eval.eligible());
    assert_eq!(eval.recommendations.len(), 3);
}

#[test]
fn test_determinism() {
    let values = [true, false, true, false, true, false, true, false, true, false];
    let answers = answers_from_bools(&values);
    let first = diagnosis::evaluate(&answers, &Weights::default());
    let second = diagnosis::evaluate(&answers, &Weights::default());
    assert_eq!(first.percentage, second.percentage);
    assert_eq!(first.tier, second.tier);
    assert_eq!(first.recommendations.len(), second.recommendations.len());
}

#[test]
fn test_partial_vector_scores_against_full_denominator() {
    // 7 yes and 3 unanswered is 70%, not 100%.
    let mut answers = [None; QUESTION_COUNT];
    for slot in answers.iter_mut().take(7) {
        *slot = Some(true);
    }
    let eval = diagnosis::evaluate(&answers, &Weights::default());
    assert_eq!(eval.percentage, 70);
    assert_eq!(eval.tier, Tier::PossibleEligibility);
}

#[test]
fn test_progress_counter_diverges_from_score() {
    // The progress indicator tracks the cursor even when earlier answers
    // were revisited; the score only counts yes values.
    let mut q = Questionnaire::new();
    q.answer(true);
    q.answer(true);
    q.answer(false);
    q.step_back();
    q.step_back();
    assert_eq!(q.progress(), (2, 10));
    let eval = diagnosis::evaluate(q.answers(), &Weights::default());
    assert_eq!(eval.percentage, 20);
}

#[test]
fn test_record_is_localized_at_save_time() {
    let values = [true; QUESTION_COUNT];
    let answers = answers_from_bools(&values);
    let eval = diagnosis::evaluate(&answers, &Weights::default());

    let en = diagnosis::into_record(&eval, &answers, Lang::En, "memo".to_string());
    let ja = diagnosis::into_record(&eval, &answers, Lang::Ja, "memo".to_string());
    assert_ne!(en.answers[0].question, ja.answers[0].question);
    assert_eq!(en.score, ja.score);
    assert_eq!(en.notes, "memo");
    assert_eq!(en.answers.len(), QUESTION_COUNT);
}
