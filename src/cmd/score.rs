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

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::ledger::ScoreLedger;
use crate::results::GOAL;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum ScoreFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for ScoreFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreFormat::Text => write!(f, "text"),
            ScoreFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    username: String,
    date: Date,
    total_correct: u32,
    vocabulary_count: usize,
    session_goal: u32,
}

pub fn print_score(
    directory: Option<String>,
    username: Option<String>,
    date: Option<String>,
    format: ScoreFormat,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let score = get_score(&coll, username, date)?;
    match format {
        ScoreFormat::Text => {
            println!(
                "{} answered {} correctly on {}.",
                score.username, score.total_correct, score.date
            );
        }
        ScoreFormat::Json => {
            let json = serde_json::to_string_pretty(&score)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn get_score(
    coll: &Collection,
    username: Option<String>,
    date: Option<String>,
) -> Fallible<Score> {
    let username = username.unwrap_or_else(|| coll.config.username.clone());
    let date = match date {
        Some(date) => Date::parse(&date)?,
        None => Timestamp::now().local_date(),
    };
    let total_correct = coll.ledger.load(&username, date)?;
    Ok(Score {
        username,
        date,
        total_correct,
        vocabulary_count: coll.vocabulary.len(),
        session_goal: GOAL,
    })
}
