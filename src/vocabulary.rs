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
use std::fs::write;
use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::vocabulary_item::VocabularyItem;

/// File name of the vocabulary inside a quiz directory.
pub const VOCABULARY_FILE: &str = "vocabulary.json";

/// The read-only set of questions. Sessions copy out of it and never write
/// back.
pub struct VocabularyStore {
    items: Vec<VocabularyItem>,
}

impl VocabularyStore {
    pub fn new(items: Vec<VocabularyItem>) -> Self {
        Self { items }
    }

    /// Load a vocabulary file written by the converter.
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("vocabulary file {} does not exist.", path.display()));
        }
        let content = read_to_string(path)?;
        let items: Vec<VocabularyItem> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} vocabulary items.", items.len());
        Ok(Self { items })
    }

    pub fn save(&self, path: &Path) -> Fallible<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        write(path, json)?;
        Ok(())
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
