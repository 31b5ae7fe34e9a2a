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
use std::path::PathBuf;

use crate::converter::Conversion;
use crate::converter::parse_csv;
use crate::error::Fallible;
use crate::error::fail;
use crate::vocabulary::VOCABULARY_FILE;
use crate::vocabulary::VocabularyStore;

/// Convert a CSV file into a vocabulary file. Returns the number of items
/// written.
pub fn convert_csv(input: &Path, output: Option<PathBuf>) -> Fallible<usize> {
    if !input.exists() {
        return fail(format!("input file {} does not exist.", input.display()));
    }
    let output = output.unwrap_or_else(|| PathBuf::from(VOCABULARY_FILE));
    let content = read_to_string(input)?;
    let Conversion { items, skipped } = parse_csv(&content);
    let count = items.len();
    VocabularyStore::new(items).save(&output)?;
    println!(
        "Converted {count} vocabulary items to {}.",
        output.display()
    );
    if skipped > 0 {
        println!("Skipped {skipped} malformed rows.");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_missing_input() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let result = convert_csv(&directory.join("nope.csv"), None);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_convert_file() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let input = directory.join("quiz.csv");
        write(
            &input,
            "id,word,c1,c2,c3,c4,answer\n\
             1,abundant,scarce,plentiful,angry,quiet,2\n\
             2,brief,short,long,wide,tall,1\n\
             3,broken,row\n",
        )?;
        let output = directory.join(VOCABULARY_FILE);
        let count = convert_csv(input.as_path(), Some(output.clone()))?;
        assert_eq!(count, 2);
        let store = VocabularyStore::load(&output)?;
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].correct(), "plentiful");
        Ok(())
    }
}
