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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rand::rngs::StdRng;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::ledger::ScoreLedger;
use crate::results::Summary;
use crate::session::SessionState;
use crate::types::vocabulary_item::VocabularyItem;
use crate::vocabulary::VocabularyStore;

#[derive(Clone)]
pub struct ServerState {
    pub username: String,
    pub feedback_delay_ms: u64,
    pub vocabulary: Arc<VocabularyStore>,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub screen: Screen,
    pub ledger: Box<dyn ScoreLedger + Send>,
    pub rng: StdRng,
    pub session: Option<SessionState>,
    pub question: Option<Question>,
    pub feedback: Option<Feedback>,
    pub summary: Option<Summary>,
    /// Today's cumulative correct answers, as of the last ledger read.
    pub today_total: u32,
    /// Shown on the start screen when a session could not start.
    pub error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Start,
    Quiz,
    Results,
}

/// The question on screen and its choices, in display order.
pub struct Question {
    pub item: VocabularyItem,
    pub choices: [String; 4],
}

/// The answer being shown while input is locked.
pub struct Feedback {
    pub selected: String,
    pub correct: bool,
}

impl ServerState {
    pub fn lock(&self) -> Fallible<MutexGuard<'_, MutableState>> {
        self.mutable
            .lock()
            .map_err(|_| ErrorReport::new("quiz state lock is poisoned."))
    }
}
