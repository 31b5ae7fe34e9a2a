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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// File name of the optional config inside a quiz directory.
pub const CONFIG_FILE: &str = "wordquiz.toml";

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whose daily score is tracked.
    pub username: String,
    /// Port the quiz server listens on.
    pub port: u16,
    /// How long answer feedback stays on screen before the next question.
    pub feedback_delay_ms: u64,
    /// Whether to open the quiz in a browser on start.
    pub open_browser: bool,
    /// Seed for question and choice order. Random if absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "you".to_string(),
            port: 8000,
            feedback_delay_ms: 1000,
            open_browser: true,
            seed: None,
        }
    }
}

impl Config {
    /// Read `wordquiz.toml` from `directory`, or use the defaults if there is
    /// none.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No config file, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded config from {}.", path.display());
        Ok(config)
    }
}
