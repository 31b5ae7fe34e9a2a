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

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date, rendered as `YYYY-MM-DD`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(s: &str) -> Fallible<Self> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| ErrorReport::new(format!("invalid date: {s}")))?;
        Ok(Self(date))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() -> Fallible<()> {
        let date = Date::parse("2025-03-07")?;
        assert_eq!(date.to_string(), "2025-03-07");
        Ok(())
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::parse("2025-13-01").is_err());
        assert!(Date::parse("yesterday").is_err());
    }
}
