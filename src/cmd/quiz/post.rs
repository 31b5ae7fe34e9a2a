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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::quiz::state::Feedback;
use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::Question;
use crate::cmd::quiz::state::Screen;
use crate::cmd::quiz::state::ServerState;
use crate::error::Fallible;
use crate::ledger::add_to_daily_total;
use crate::results::Summary;
use crate::session::SessionState;
use crate::session::compose_choices;
use crate::types::timestamp::Timestamp;

#[derive(Debug, Deserialize)]
enum Action {
    Start,
    Answer,
    Continue,
    Results,
    Finish,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    choice: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, form: FormData) -> Fallible<()> {
    let mut guard = state.lock()?;
    let mutable: &mut MutableState = &mut guard;
    match form.action {
        Action::Start => {
            if mutable.screen != Screen::Start {
                log::error!("Starting a session from the {:?} screen.", mutable.screen);
                return Ok(());
            }
            let started_at = Timestamp::now();
            let session =
                match SessionState::start(state.vocabulary.items(), started_at, &mut mutable.rng) {
                    Ok(session) => session,
                    Err(e) => {
                        mutable.error = Some(e.to_string());
                        return Err(e.into());
                    }
                };
            mutable.today_total = mutable
                .ledger
                .load(&state.username, started_at.local_date())?;
            mutable.session = Some(session);
            mutable.error = None;
            load_question(mutable)?;
            mutable.screen = Screen::Quiz;
        }
        Action::Answer => {
            let (Some(session), Some(question)) = (&mut mutable.session, &mutable.question)
            else {
                log::error!("Answering with no active question.");
                return Ok(());
            };
            let Some(selected) = form.choice else {
                log::error!("Answer submitted without a choice.");
                return Ok(());
            };
            if let Some(correct) = session.record_answer(&selected, &question.item) {
                mutable.feedback = Some(Feedback { selected, correct });
            }
        }
        Action::Continue => {
            let Some(session) = &mut mutable.session else {
                log::error!("Continuing with no active session.");
                return Ok(());
            };
            if !session.is_locked() {
                log::error!("Continuing before the question was answered.");
                return Ok(());
            }
            session.advance();
            load_question(mutable)?;
        }
        Action::Results => {
            let Some(session) = mutable.session.take() else {
                log::error!("Requesting results with no active session.");
                return Ok(());
            };
            let ended_at = Timestamp::now();
            let today_total = add_to_daily_total(
                mutable.ledger.as_mut(),
                &state.username,
                ended_at.local_date(),
                session.correct_count(),
            )?;
            let summary = Summary::new(&session, ended_at, today_total, &mut mutable.rng);
            log::debug!(
                "Session completed: {} / {} correct.",
                summary.correct_answers,
                summary.total_answers
            );
            mutable.today_total = today_total;
            mutable.summary = Some(summary);
            mutable.question = None;
            mutable.feedback = None;
            mutable.screen = Screen::Results;
        }
        Action::Finish => {
            if mutable.screen != Screen::Results {
                log::error!("Finishing from the {:?} screen.", mutable.screen);
                return Ok(());
            }
            mutable.summary = None;
            mutable.screen = Screen::Start;
        }
    }
    Ok(())
}

/// Draw the next question from the session and shuffle its choices.
fn load_question(mutable: &mut MutableState) -> Fallible<()> {
    let Some(session) = &mut mutable.session else {
        return Ok(());
    };
    let item = session.next_question(&mut mutable.rng)?;
    let choices = compose_choices(&item, &mut mutable.rng);
    mutable.question = Some(Question { item, choices });
    mutable.feedback = None;
    Ok(())
}
