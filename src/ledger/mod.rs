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

#[cfg(test)]
pub mod memory;
pub mod sqlite;

use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::score_key::ScoreKey;

/// Per-user, per-day cumulative correct answers.
pub trait ScoreLedger {
    /// The stored total for the day, or zero if nothing was stored.
    fn load(&self, username: &str, date: Date) -> Fallible<u32>;

    /// Overwrite the stored total for the day.
    fn save(&mut self, username: &str, date: Date, total: u32) -> Fallible<()>;
}

/// Add a session's correct answers to the day's total. Returns the new
/// total.
pub fn add_to_daily_total(
    ledger: &mut dyn ScoreLedger,
    username: &str,
    date: Date,
    correct: u32,
) -> Fallible<u32> {
    let total = ledger.load(username, date)?.saturating_add(correct);
    ledger.save(username, date, total)?;
    log::debug!("Saved daily total {total} for {username} on {date}.");
    Ok(total)
}

/// Read a stored value. Anything that is not a decimal count reads as zero.
fn parse_total(key: &ScoreKey, value: Option<String>) -> u32 {
    match value {
        None => 0,
        Some(value) => match value.trim().parse::<u32>() {
            Ok(total) => total,
            Err(_) => {
                log::warn!("Ignoring invalid score '{value}' under {key}.");
                0
            }
        },
    }
}
