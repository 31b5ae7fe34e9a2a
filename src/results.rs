// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;
use serde::Serialize;

use crate::session::SessionState;
use crate::types::timestamp::Timestamp;

/// Correct answers per session that count as 100%.
pub const GOAL: u32 = 10;

const ENCOURAGEMENT_MESSAGES: [&str; 20] = [
    "What you learned today is already quietly changing your future.",
    "Steady, patient practice looks good on you.",
    "Today's step turns into tomorrow's confidence.",
    "You kept going, and that is real progress.",
    "Every word that clicks makes English a little more fun.",
    "You looked after yourself and still studied. Well done.",
    "Small efforts are adding up to real strength.",
    "Keeping your own pace is a skill in itself.",
    "You took on today's challenge. Be proud of that.",
    "Consistency is going to be your biggest advantage.",
    "Your attitude toward learning is inspiring.",
    "You grew a little more today.",
    "Slow progress is still progress, and you are making it.",
    "Don't forget: every day of effort makes you stronger.",
    "You worked hard today. Wonderful!",
    "The way you keep showing up is admirable.",
    "Give yourself some credit for studying today.",
    "Another step forward today. That is how futures are built.",
    "You have what it takes to keep going.",
    "Today's effort brought you one step closer to your goal.",
];

/// Percentage of the session goal achieved, saturating at 100.
pub fn goal_rate(correct_answers: u32) -> u32 {
    let rate = (f64::from(correct_answers) / f64::from(GOAL) * 100.0).round();
    rate.min(100.0) as u32
}

/// A cosmetic stretch projection: 1.2 times the goal rate, capped at 100.
pub fn predicted_rate(goal_rate: u32) -> u32 {
    if goal_rate == 100 {
        return 100;
    }
    let rate = (f64::from(goal_rate) * 1.2).round();
    rate.min(100.0) as u32
}

pub fn encouragement_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ENCOURAGEMENT_MESSAGES[rng.random_range(0..ENCOURAGEMENT_MESSAGES.len())]
}

/// What the results screen shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub correct_answers: u32,
    pub total_answers: u32,
    pub time_spent_secs: u64,
    pub goal_rate: u32,
    pub predicted_rate: u32,
    /// Cumulative correct answers today, including this session.
    pub today_total: u32,
    pub message: &'static str,
}

impl Summary {
    pub fn new<R: Rng + ?Sized>(
        session: &SessionState,
        ended_at: Timestamp,
        today_total: u32,
        rng: &mut R,
    ) -> Self {
        let goal = goal_rate(session.correct_count());
        Self {
            correct_answers: session.correct_count(),
            total_answers: session.total_count(),
            time_spent_secs: ended_at.seconds_since(session.started_at()),
            goal_rate: goal,
            predicted_rate: predicted_rate(goal),
            today_total,
            message: encouragement_message(rng),
        }
    }

    /// Fraction of answers that were correct, or 0 with no answers.
    pub fn accuracy(&self) -> f64 {
        if self.total_answers == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.total_answers)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::helper::sample_vocabulary;
    use crate::session::SessionError;

    #[test]
    fn test_goal_rate() {
        assert_eq!(goal_rate(0), 0);
        assert_eq!(goal_rate(3), 30);
        assert_eq!(goal_rate(5), 50);
        assert_eq!(goal_rate(10), 100);
        assert_eq!(goal_rate(12), 100);
    }

    #[test]
    fn test_predicted_rate() {
        assert_eq!(predicted_rate(100), 100);
        assert_eq!(predicted_rate(50), 60);
        assert_eq!(predicted_rate(90), 100);
        assert_eq!(predicted_rate(30), 36);
        assert_eq!(predicted_rate(0), 0);
    }

    #[test]
    fn test_encouragement_message_is_from_the_list() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let message = encouragement_message(&mut rng);
            assert!(ENCOURAGEMENT_MESSAGES.contains(&message));
        }
    }

    #[test]
    fn test_accuracy_without_answers() {
        let summary = Summary {
            correct_answers: 0,
            total_answers: 0,
            time_spent_secs: 0,
            goal_rate: 0,
            predicted_rate: 0,
            today_total: 0,
            message: ENCOURAGEMENT_MESSAGES[0],
        };
        assert_eq!(summary.accuracy(), 0.0);
    }

    /// Three items, all answered correctly.
    #[test]
    fn test_three_correct_answers() -> Result<(), SessionError> {
        let mut rng = StdRng::seed_from_u64(8);
        let vocabulary = sample_vocabulary(3);
        let started_at = Timestamp::now();
        let mut session = SessionState::start(&vocabulary, started_at, &mut rng)?;
        for _ in 0..3 {
            let item = session.next_question(&mut rng)?;
            assert_eq!(session.record_answer(item.correct(), &item), Some(true));
            session.advance();
        }
        let summary = Summary::new(&session, started_at, 3, &mut rng);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.total_answers, 3);
        assert_eq!(summary.goal_rate, 30);
        assert_eq!(summary.predicted_rate, 36);
        assert_eq!(summary.time_spent_secs, 0);
        assert_eq!(summary.accuracy(), 1.0);
        Ok(())
    }
}
