//! Quiz poll rendering

use rand::Rng;

use crate::sanitize::strip_markup;
use crate::types::{QuizPoll, TriviaQuestion};

/// Render a question as a quiz poll with the correct answer at a random
/// position. Every slot from before the first incorrect answer to after the
/// last one is equally likely.
pub fn build_poll<R: Rng + ?Sized>(question: &TriviaQuestion, rng: &mut R) -> QuizPoll {
    let slot = rng.random_range(0..=question.incorrect_answers.len());
    build_poll_at(question, slot)
}

/// Render a question with the correct answer inserted at `slot`.
/// `slot` is clamped to the number of incorrect answers.
pub fn build_poll_at(question: &TriviaQuestion, slot: usize) -> QuizPoll {
    let mut options: Vec<String> = question
        .incorrect_answers
        .iter()
        .map(|answer| strip_markup(answer))
        .collect();

    let correct_option = slot.min(options.len());
    options.insert(correct_option, strip_markup(&question.correct_answer));

    QuizPoll {
        question: strip_markup(&question.question),
        options,
        correct_option,
    }
}
