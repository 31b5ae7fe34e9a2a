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

use std::future::pending;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::cmd::quiz::get::get_handler;
use crate::cmd::quiz::post::post_handler;
use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::Screen;
use crate::cmd::quiz::state::ServerState;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::ledger::ScoreLedger;
use crate::types::timestamp::Timestamp;

pub async fn start_server(coll: Collection) -> Fallible<()> {
    let Collection {
        directory,
        vocabulary,
        ledger,
        config,
    } = coll;
    log::debug!(
        "Quizzing on {} items from {}.",
        vocabulary.len(),
        directory.display()
    );
    if vocabulary.is_empty() {
        log::warn!("The vocabulary is empty, sessions cannot start.");
    }

    let today_total = ledger.load(&config.username, Timestamp::now().local_date())?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let state = ServerState {
        username: config.username,
        feedback_delay_ms: config.feedback_delay_ms,
        vocabulary: Arc::new(vocabulary),
        mutable: Arc::new(Mutex::new(MutableState {
            screen: Screen::Start,
            ledger: Box::new(ledger),
            rng,
            session: None,
            question: None,
            feedback: None,
            summary: None,
            today_total,
            error: None,
        })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler).post(post_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{}", config.port);

    // Start a separate task to open the browser.
    if config.open_browser {
        let url = format!("http://{bind}/");
        let bind = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::debug!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        pending::<()>().await;
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    let content = include_str!("script.js");
    (StatusCode::OK, [(CONTENT_TYPE, "text/javascript")], content)
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
