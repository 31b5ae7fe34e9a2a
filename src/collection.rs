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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::ledger::sqlite::DATABASE_FILE;
use crate::ledger::sqlite::SqliteLedger;
use crate::vocabulary::VOCABULARY_FILE;
use crate::vocabulary::VocabularyStore;

/// A quiz directory: the vocabulary, the score database and the config.
pub struct Collection {
    pub directory: PathBuf,
    pub vocabulary: VocabularyStore,
    pub ledger: SqliteLedger,
    pub config: Config,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;

        let vocabulary = {
            log::debug!("Loading vocabulary...");
            let start = Instant::now();
            let vocabulary = VocabularyStore::load(&directory.join(VOCABULARY_FILE))?;
            let duration = start.elapsed().as_millis();
            log::debug!("Vocabulary loaded in {duration}ms.");
            vocabulary
        };

        let db_path: PathBuf = directory.join(DATABASE_FILE);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let ledger = SqliteLedger::new(db_path)?;

        Ok(Self {
            directory,
            vocabulary,
            ledger,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_quiz_directory;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.to_string(), "error: directory does not exist.");
        }
    }

    #[test]
    fn test_directory_without_vocabulary() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let result = Collection::new(Some(directory.display().to_string()));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_quiz_directory() -> Fallible<()> {
        let directory = create_quiz_directory(4)?;
        let coll = Collection::new(Some(directory.display().to_string()))?;
        assert_eq!(coll.vocabulary.len(), 4);
        assert_eq!(coll.config, Config::default());
        assert!(directory.join(DATABASE_FILE).exists());
        Ok(())
    }
}
