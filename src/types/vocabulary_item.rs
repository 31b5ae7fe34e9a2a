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

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// A multiple-choice question: a word, its correct meaning, and three
/// distractors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct VocabularyItem {
    /// The word being asked about.
    word: String,
    /// The correct answer.
    correct: String,
    /// Three distinct distractors, none equal to `correct`.
    options: [String; 3],
}

impl VocabularyItem {
    pub fn new(
        word: impl Into<String>,
        correct: impl Into<String>,
        options: [String; 3],
    ) -> Fallible<Self> {
        let word = word.into();
        let correct = correct.into();
        if word.is_empty() {
            return fail("vocabulary item has an empty word.");
        }
        if options.contains(&correct) {
            return fail(format!(
                "the correct answer for '{word}' is also a distractor."
            ));
        }
        let [a, b, c] = &options;
        if a == b || a == c || b == c {
            return fail(format!("the distractors for '{word}' are not distinct."));
        }
        Ok(Self {
            word,
            correct,
            options,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn correct(&self) -> &str {
        &self.correct
    }

    pub fn options(&self) -> &[String; 3] {
        &self.options
    }
}

/// The on-disk shape of an item, validated on the way in.
#[derive(Deserialize)]
struct ItemFields {
    word: String,
    correct: String,
    options: [String; 3],
}

impl TryFrom<ItemFields> for VocabularyItem {
    type Error = ErrorReport;

    fn try_from(value: ItemFields) -> Result<Self, Self::Error> {
        VocabularyItem::new(value.word, value.correct, value.options)
    }
}
