//! Request handlers

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use super::{AppState, views};
use crate::RainCheckError;

/// Body of `POST /forecast`
#[derive(Debug, Deserialize)]
pub struct ForecastForm {
    #[serde(default)]
    pub location: String,
}

pub async fn index() -> Html<&'static str> {
    Html(views::index_page())
}

pub async fn forecast(
    State(state): State<AppState>,
    form: Result<Form<ForecastForm>, FormRejection>,
) -> Response {
    // An unreadable body carries no location; it gets the missing-location page
    let location = match form {
        Ok(Form(form)) => form.location,
        Err(rejection) => {
            debug!("Unreadable forecast form: {}", rejection);
            String::new()
        }
    };

    // Tomorrow is relative to the server's wall clock, not the place's
    let today = Local::now().date_naive();

    match state.service.check(&location, today).await {
        Ok(report) => Html(views::result_page(&report)).into_response(),
        Err(err) => {
            match &err {
                RainCheckError::ServiceFailure { message }
                | RainCheckError::Config { message } => {
                    error!("Error: {}", message);
                }
                other => warn!("Rain check failed: {}", other),
            }
            err.into_response()
        }
    }
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}
