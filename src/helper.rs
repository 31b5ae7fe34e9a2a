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

use std::path::PathBuf;

use tempfile::tempdir;

use crate::error::Fallible;
use crate::types::vocabulary_item::VocabularyItem;
use crate::vocabulary::VOCABULARY_FILE;
use crate::vocabulary::VocabularyStore;

/// Create a scratch directory that outlives the test.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let directory: PathBuf = tempdir()?.keep();
    Ok(directory.canonicalize()?)
}

/// Items `word0 .. wordN`, where the correct answer for `wordI` is
/// `meaningI`.
pub fn sample_vocabulary(n: usize) -> Vec<VocabularyItem> {
    (0..n)
        .map(|i| {
            let options = [
                format!("wrong{i}a"),
                format!("wrong{i}b"),
                format!("wrong{i}c"),
            ];
            match VocabularyItem::new(format!("word{i}"), format!("meaning{i}"), options) {
                Ok(item) => item,
                Err(e) => panic!("invalid sample item: {e}"),
            }
        })
        .collect()
}

/// A scratch quiz directory containing `n` sample items.
pub fn create_quiz_directory(n: usize) -> Fallible<PathBuf> {
    let directory = create_tmp_directory()?;
    VocabularyStore::new(sample_vocabulary(n)).save(&directory.join(VOCABULARY_FILE))?;
    Ok(directory)
}

mod tests {
    use super::*;

    #[test]
    fn test_create_quiz_directory() -> Fallible<()> {
        let directory = create_quiz_directory(2)?;
        assert!(directory.join(VOCABULARY_FILE).exists());
        Ok(())
    }
}
