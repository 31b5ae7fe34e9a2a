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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::date::Date;

/// Identifies a daily score: `score_<username>_<YYYY-MM-DD>`.
///
/// The date is fixed-width and always last, so two keys with different dates
/// never render to the same string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ScoreKey {
    username: String,
    date: Date,
}

impl ScoreKey {
    pub fn new(username: &str, date: Date) -> Self {
        Self {
            username: username.to_string(),
            date,
        }
    }
}

impl Display for ScoreKey {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "score_{}_{}", self.username, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_display() -> Fallible<()> {
        let key = ScoreKey::new("alice", Date::parse("2025-10-01")?);
        assert_eq!(key.to_string(), "score_alice_2025-10-01");
        Ok(())
    }

    #[test]
    fn test_dates_do_not_collide() -> Fallible<()> {
        let a = ScoreKey::new("alice", Date::parse("2025-10-01")?);
        let b = ScoreKey::new("alice", Date::parse("2025-10-02")?);
        assert_ne!(a.to_string(), b.to_string());
        Ok(())
    }
}
