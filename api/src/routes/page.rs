//! The clip form. Submissions run the form controller in-process; a finished
//! clip comes back as an attachment, anything else re-renders the form with
//! the fields as entered.

use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use crate::save::ResponseSink;
use crate::ui::{Phase, TimeField, UiController, UiState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show_form).post(submit_form))
}

#[derive(Debug, Default, Deserialize)]
struct ClipForm {
    #[serde(rename = "tweetUrl", default)]
    tweet_url: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

async fn show_form() -> Html<String> {
    Html(render(&UiState::default()))
}

async fn submit_form(State(state): State<Arc<AppState>>, Form(form): Form<ClipForm>) -> Response {
    let mut ui = UiController::new(state.relay_backend());
    ui.set_tweet_url(form.tweet_url);
    ui.set_time(TimeField::Start, form.start);
    ui.set_time(TimeField::End, form.end);

    let mut sink = ResponseSink::default();
    match (ui.submit(&mut sink).await, sink.take()) {
        (Phase::Idle, Some(video)) => video.into_response(),
        _ => Html(render(ui.state())).into_response(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn notice(class: &str, message: Option<&str>) -> String {
    message
        .map(|m| format!("<p class=\"{}\">{}</p>", class, escape_html(m)))
        .unwrap_or_default()
}

fn render(state: &UiState) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ClipX</title>
</head>
<body>
<h1>ClipX</h1>
<p>Download any X/Twitter video in just 1 click!</p>
<form method="post" action="/">
<label>Twitter/X URL <input type="text" name="tweetUrl" placeholder="https://twitter.com/username/status/..." value="{url}"></label>
<label>Start Time <input type="text" name="start" placeholder="00:00:05" value="{start}"></label>
<label>End Time <input type="text" name="end" placeholder="00:00:15" value="{end}"></label>
<button type="submit">Download Clip</button>
</form>
{time_error}{error}
</body>
</html>
"#,
        url = escape_html(&state.tweet_url),
        start = escape_html(&state.start),
        end = escape_html(&state.end),
        time_error = notice("time-error", state.time_error.as_deref()),
        error = notice("error", state.error.as_deref()),
    )
}
