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

use crate::types::vocabulary_item::VocabularyItem;

const MIN_FIELDS: usize = 7;

/// The result of converting a CSV file.
pub struct Conversion {
    pub items: Vec<VocabularyItem>,
    /// Non-blank data rows that were dropped as malformed.
    pub skipped: usize,
}

/// Convert CSV rows of the form
/// `ignored,word,choice1,choice2,choice3,choice4,correct_index` into
/// vocabulary items. `correct_index` is 1-based.
///
/// The first line is a header. Fields are split naively on `,` with no
/// quoting. Malformed rows are skipped and counted.
pub fn parse_csv(content: &str) -> Conversion {
    let mut items = Vec::new();
    let mut skipped = 0;
    for (index, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(item) => items.push(item),
            None => {
                log::debug!("Skipping malformed row on line {}: {line}", index + 1);
                skipped += 1;
            }
        }
    }
    Conversion { items, skipped }
}

fn parse_row(line: &str) -> Option<VocabularyItem> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let word = fields[1];
    if word.is_empty() {
        return None;
    }
    let correct_index = parse_leading_index(fields[6])?;
    if !(1..=4).contains(&correct_index) {
        return None;
    }
    let choices = &fields[2..6];
    let correct = choices[correct_index - 1];
    let mut options = choices
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct_index - 1)
        .map(|(_, choice)| choice.to_string());
    let (Some(a), Some(b), Some(c)) = (options.next(), options.next(), options.next()) else {
        return None;
    };
    VocabularyItem::new(word, correct, [a, b, c]).ok()
}

/// Read the integer at the start of a field, ignoring anything after the
/// digits, so `2.0` and `3abc` read as 2 and 3.
fn parse_leading_index(field: &str) -> Option<usize> {
    let field = field.trim();
    let field = field.strip_prefix('+').unwrap_or(field);
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}
