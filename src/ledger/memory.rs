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

use std::collections::HashMap;

use crate::error::Fallible;
use crate::ledger::ScoreLedger;
use crate::ledger::parse_total;
use crate::types::date::Date;
use crate::types::score_key::ScoreKey;

/// A ledger that lives only as long as the process.
#[derive(Default)]
pub struct MemoryLedger {
    /// Keys and values as they would appear in a key-value store.
    entries: HashMap<String, String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreLedger for MemoryLedger {
    fn load(&self, username: &str, date: Date) -> Fallible<u32> {
        let key = ScoreKey::new(username, date);
        let value = self.entries.get(&key.to_string()).cloned();
        Ok(parse_total(&key, value))
    }

    fn save(&mut self, username: &str, date: Date, total: u32) -> Fallible<()> {
        let key = ScoreKey::new(username, date);
        self.entries.insert(key.to_string(), total.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_key_is_zero() -> Fallible<()> {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.load("alice", Date::parse("2025-01-01")?)?, 0);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Fallible<()> {
        let mut ledger = MemoryLedger::new();
        let day = Date::parse("2025-01-01")?;
        let next_day = Date::parse("2025-01-02")?;
        ledger.save("alice", day, 7)?;
        assert_eq!(ledger.load("alice", day)?, 7);
        ledger.save("alice", next_day, 2)?;
        assert_eq!(ledger.load("alice", day)?, 7);
        assert_eq!(ledger.load("bob", day)?, 0);
        // Last write wins.
        ledger.save("alice", day, 1)?;
        assert_eq!(ledger.load("alice", day)?, 1);
        Ok(())
    }
}
