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

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::convert::convert_csv;
use crate::cmd::quiz::server::start_server;
use crate::cmd::score::ScoreFormat;
use crate::cmd::score::print_score;
use crate::collection::Collection;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Convert a CSV file of questions into a vocabulary file.
    Convert {
        /// Path to the CSV file.
        input: PathBuf,
        /// Where to write the vocabulary. Defaults to `vocabulary.json`.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check that a quiz directory loads.
    Check {
        /// Path to the quiz directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Take a quiz in the browser.
    Quiz {
        /// Path to the quiz directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Whose score to track.
        #[arg(long)]
        username: Option<String>,
        /// The port to use for the web server.
        #[arg(long)]
        port: Option<u16>,
        /// Seed for question and choice order.
        #[arg(long)]
        seed: Option<u64>,
        /// Do not open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Print the number of correct answers for a day.
    Score {
        /// Path to the quiz directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Whose score to print.
        #[arg(long)]
        username: Option<String>,
        /// The day, as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = ScoreFormat::Text)]
        format: ScoreFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Convert { input, output } => {
            convert_csv(&input, output)?;
            Ok(())
        }
        Command::Check { directory } => check_collection(directory),
        Command::Quiz {
            directory,
            username,
            port,
            seed,
            no_open,
        } => {
            let mut coll = Collection::new(directory)?;
            if let Some(username) = username {
                coll.config.username = username;
            }
            if let Some(port) = port {
                coll.config.port = port;
            }
            if seed.is_some() {
                coll.config.seed = seed;
            }
            if no_open {
                coll.config.open_browser = false;
            }
            start_server(coll).await
        }
        Command::Score {
            directory,
            username,
            date,
            format,
        } => print_score(directory, username, date, format),
    }
}
