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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use rand::Rng;

use crate::shuffle::shuffle;
use crate::shuffle::shuffle_in_place;
use crate::types::timestamp::Timestamp;
use crate::types::vocabulary_item::VocabularyItem;

#[derive(Debug, PartialEq)]
pub enum SessionError {
    /// A session was started with no vocabulary.
    EmptyVocabulary,
    /// A question was requested but there is nothing to ask.
    NoVocabulary,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyVocabulary => write!(f, "no vocabulary items to quiz on."),
            SessionError::NoVocabulary => write!(f, "no vocabulary loaded."),
        }
    }
}

impl Error for SessionError {}

/// The state of one quiz session.
///
/// Questions are drawn from a shuffled copy of the vocabulary. Each pass asks
/// every item once; when a pass is exhausted the vocabulary is reshuffled.
pub struct SessionState {
    /// The vocabulary this session draws from.
    vocabulary: Vec<VocabularyItem>,
    /// The order of the current pass.
    order: Vec<VocabularyItem>,
    /// Index into `order` of the current question. Never exceeds its length.
    cursor: usize,
    correct_count: u32,
    total_count: u32,
    started_at: Timestamp,
    /// Set between scoring an answer and advancing.
    locked: bool,
    /// The number of passes started so far, from 1.
    pass: usize,
}

impl SessionState {
    pub fn start<R: Rng + ?Sized>(
        vocabulary: &[VocabularyItem],
        started_at: Timestamp,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if vocabulary.is_empty() {
            return Err(SessionError::EmptyVocabulary);
        }
        let order = shuffle(vocabulary, rng);
        log::debug!("Session started with {} items.", order.len());
        Ok(Self {
            vocabulary: vocabulary.to_vec(),
            order,
            cursor: 0,
            correct_count: 0,
            total_count: 0,
            started_at,
            locked: false,
            pass: 1,
        })
    }

    /// The item at the cursor. Starts a new pass first if the current one is
    /// exhausted.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<VocabularyItem, SessionError> {
        if self.vocabulary.is_empty() {
            return Err(SessionError::NoVocabulary);
        }
        if self.cursor >= self.order.len() {
            log::debug!("Pass {} complete, reshuffling.", self.pass);
            self.order = shuffle(&self.vocabulary, rng);
            self.cursor = 0;
            self.pass += 1;
        }
        Ok(self.order[self.cursor].clone())
    }

    /// Score `selected` against `item`. Returns `None` without touching the
    /// counters if there is no active question or an answer is already
    /// pending.
    pub fn record_answer(&mut self, selected: &str, item: &VocabularyItem) -> Option<bool> {
        if self.cursor >= self.order.len() {
            log::error!("Answer submitted with no active question.");
            return None;
        }
        if self.locked {
            log::error!("Answer submitted while the previous answer is pending.");
            return None;
        }
        let is_correct = selected == item.correct();
        self.total_count += 1;
        if is_correct {
            self.correct_count += 1;
        }
        self.locked = true;
        log::debug!(
            "{} -> {selected} ({})",
            item.word(),
            if is_correct { "correct" } else { "incorrect" }
        );
        Some(is_correct)
    }

    /// Move past the current question and unlock input.
    pub fn advance(&mut self) {
        if self.cursor >= self.order.len() {
            log::error!("Advancing past the end of the pass.");
            return;
        }
        self.cursor += 1;
        self.locked = false;
    }

    /// True while an answer has been scored but the session has not advanced.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn pass(&self) -> usize {
        self.pass
    }

    /// One-based position of the current question within its pass, and the
    /// pass length.
    pub fn position(&self) -> (usize, usize) {
        ((self.cursor + 1).min(self.order.len()), self.order.len())
    }
}

/// The correct answer and the three distractors in uniformly random order.
pub fn compose_choices<R: Rng + ?Sized>(item: &VocabularyItem, rng: &mut R) -> [String; 4] {
    let [a, b, c] = item.options().clone();
    let mut choices = [item.correct().to_string(), a, b, c];
    shuffle_in_place(&mut choices, rng);
    choices
}
