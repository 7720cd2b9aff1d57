use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue},
    response::Response,
    Form,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{error, info, warn};

use crate::error::RegistrationError;
use crate::services::registration_service::{self, RegistrationForm};
use crate::web::render::render_html;

pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");
pub const AUTO_CLOSE_EVENT: &str = "autoCloseModal";
pub const AUTO_CLOSE_DELAY_MS: u64 = 3000;

#[derive(Template)]
#[template(path = "partials/registration_confirm.html")]
pub struct RegistrationConfirmTemplate {
    pub name: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "partials/registration_success.html")]
pub struct RegistrationSuccessTemplate {
    pub name: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "partials/registration_error.html")]
pub struct RegistrationErrorTemplate {
    pub message: &'static str,
}

pub async fn submit_registration(
    State(pool): State<SqlitePool>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    match registration_service::register_participant(&pool, &form).await {
        Ok(participant) => {
            info!(participant_id = participant.id, "Participant registered");
            render_html(&RegistrationConfirmTemplate {
                name: participant.name,
                email: participant.email,
            })
        }
        Err(e) => {
            match &e {
                RegistrationError::DuplicateEmail => {
                    warn!("Registration rejected, email already registered")
                }
                RegistrationError::Database(cause) => {
                    error!("Registration insert failed: {}", cause)
                }
            }
            render_html(&RegistrationErrorTemplate {
                message: e.user_message(),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegistrationConfirmedQuery {
    pub name: String,
    pub email: String,
}

/// Echoes the values carried over from the confirm fragment; storage is not consulted.
pub async fn registration_confirmed(
    Query(query): Query<RegistrationConfirmedQuery>,
) -> Response {
    let mut response = render_html(&RegistrationSuccessTemplate {
        name: query.name,
        email: query.email,
    });

    if response.status().is_success() {
        let trigger = json!({ AUTO_CLOSE_EVENT: { "delay": AUTO_CLOSE_DELAY_MS } }).to_string();
        match HeaderValue::from_str(&trigger) {
            Ok(value) => {
                response.headers_mut().insert(HX_TRIGGER, value);
            }
            Err(e) => warn!("Could not build {} header: {}", HX_TRIGGER, e),
        }
    }

    response
}
