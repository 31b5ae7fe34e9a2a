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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::ledger::ScoreLedger;
use crate::ledger::parse_total;
use crate::types::date::Date;
use crate::types::score_key::ScoreKey;

/// File name of the score database inside a quiz directory.
pub const DATABASE_FILE: &str = "scores.db";

/// A ledger backed by a key-value table in SQLite.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating score database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }
}

impl ScoreLedger for SqliteLedger {
    fn load(&self, username: &str, date: Date) -> Fallible<u32> {
        let key = ScoreKey::new(username, date);
        let sql = "select value from scores where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [key.to_string()], |row| row.get(0))
            .optional()?;
        Ok(parse_total(&key, value))
    }

    fn save(&mut self, username: &str, date: Date, total: u32) -> Fallible<()> {
        let key = ScoreKey::new(username, date);
        let sql = "insert into scores (key, value) values (?, ?) on conflict (key) do update set value = excluded.value;";
        self.conn.execute(sql, (key.to_string(), total.to_string()))?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["scores"], |row| row.get(0))?;
    Ok(count > 0)
}
