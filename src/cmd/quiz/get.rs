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

use std::f64::consts::PI;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::Screen;
use crate::cmd::quiz::state::ServerState;
use crate::cmd::quiz::template::page_template;
use crate::results::Summary;

/// Radius of the accuracy ring on the results screen.
const CHART_RADIUS: f64 = 85.0;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = match state.lock() {
        Ok(mutable) => mutable,
        Err(e) => {
            log::error!("{e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            );
        }
    };
    let body = match mutable.screen {
        Screen::Start => render_start(&state, &mutable),
        Screen::Quiz => render_quiz(&state, &mutable),
        Screen::Results => match &mutable.summary {
            Some(summary) => render_results(summary),
            None => render_start(&state, &mutable),
        },
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn render_start(state: &ServerState, mutable: &MutableState) -> Markup {
    let cannot_start = state.vocabulary.is_empty();
    html! {
        div.root {
            div.card.start {
                h1 { "Vocabulary Quiz" }
                p.greeting {
                    "Welcome, " (state.username) "."
                }
                p.today {
                    "Correct answers today: "
                    span #today-total { (mutable.today_total) }
                }
                @if cannot_start {
                    p.error { "No vocabulary loaded." }
                }
                @if let Some(error) = &mutable.error {
                    p.error { (error) }
                }
                form action="/" method="post" {
                    input type="hidden" name="action" value="Start";
                    button #start type="submit" disabled[cannot_start] { "Start" }
                }
            }
        }
    }
}

fn render_quiz(state: &ServerState, mutable: &MutableState) -> Markup {
    let (Some(session), Some(question)) = (&mutable.session, &mutable.question) else {
        return html! {
            div.root {
                p.error { "No active question." }
            }
        };
    };
    let locked = session.is_locked();
    let (position, pass_length) = session.position();
    let correct = question.item.correct();
    html! {
        div.root {
            div.card.quiz {
                div.header {
                    div.progress {
                        span #correct-count { (session.correct_count()) }
                        " / "
                        span #total-count { (session.total_count()) }
                    }
                    div.position {
                        "Pass " (session.pass()) ": " (position) " of " (pass_length)
                    }
                }
                h1.word { (question.item.word()) }
                form.choices action="/" method="post" {
                    input type="hidden" name="action" value="Answer";
                    @for choice in &question.choices {
                        @let selected = mutable
                            .feedback
                            .as_ref()
                            .is_some_and(|f| &f.selected == choice);
                        button.choice
                            .correct[locked && choice == correct]
                            .incorrect[locked && selected && choice != correct]
                            type="submit"
                            name="choice"
                            value=(choice)
                            disabled[locked] {
                            (choice)
                        }
                    }
                }
                @if let Some(feedback) = &mutable.feedback {
                    div #feedback data-delay=(state.feedback_delay_ms) {
                        @if feedback.correct {
                            p.verdict.correct { "Correct!" }
                        } @else {
                            p.verdict.incorrect { "The answer was " (correct) "." }
                        }
                        form #continue action="/" method="post" {
                            input type="hidden" name="action" value="Continue";
                            noscript {
                                button type="submit" { "Next" }
                            }
                        }
                    }
                }
                form.controls action="/" method="post" {
                    input type="hidden" name="action" value="Results";
                    button #view-results type="submit" { "View results" }
                }
            }
        }
    }
}

fn render_results(summary: &Summary) -> Markup {
    let circumference = 2.0 * PI * CHART_RADIUS;
    let offset = circumference * (1.0 - summary.accuracy());
    html! {
        div.root {
            div.card.results {
                h1 { "Results" }
                svg.chart width="200" height="200" viewBox="0 0 200 200" {
                    circle.chart-track cx="100" cy="100" r=(CHART_RADIUS) {}
                    circle #chart-progress
                        cx="100"
                        cy="100"
                        r=(CHART_RADIUS)
                        stroke-dasharray=(format!("{circumference:.2}"))
                        stroke-dashoffset=(format!("{offset:.2}")) {}
                }
                dl.summary {
                    dt { "Correct" }
                    dd {
                        span #correct-count { (summary.correct_answers) }
                        " / "
                        span #total-count { (summary.total_answers) }
                    }
                    dt { "Time spent" }
                    dd { span #time-spent { (summary.time_spent_secs) } " s" }
                    dt { "Goal rate" }
                    dd { span #goal-rate { (summary.goal_rate) } "%" }
                    dt { "Predicted rate" }
                    dd { span #predicted-rate { (summary.predicted_rate) } "%" }
                    dt { "Correct today" }
                    dd { span #today-total { (summary.today_total) } }
                }
                p #encouragement-message { (summary.message) }
                form action="/" method="post" {
                    input type="hidden" name="action" value="Finish";
                    button #finish type="submit" { "Finish" }
                }
            }
        }
    }
}
