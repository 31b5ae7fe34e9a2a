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

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;

use crate::types::date::Date;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[cfg(test)]
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self(ts)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The calendar date of this timestamp in the local timezone.
    pub fn local_date(self) -> Date {
        let ts = self.0.with_timezone(&Local);
        Date::new(ts.date_naive())
    }

    /// Whole seconds elapsed since `earlier`, truncated. Zero if `earlier`
    /// is in the future.
    pub fn seconds_since(self, earlier: Timestamp) -> u64 {
        let seconds = (self.0 - earlier.0).num_seconds();
        u64::try_from(seconds).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_seconds_since() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let end = start + Duration::milliseconds(4999);
        let a = Timestamp::new(start);
        let b = Timestamp::new(end);
        assert_eq!(b.seconds_since(a), 4);
        assert_eq!(a.seconds_since(b), 0);
    }
}
