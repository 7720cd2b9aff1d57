use askama::Template;
use axum::{http::StatusCode, response::Response};

use crate::web::render::render_html;

#[derive(Template)]
#[template(path = "partials/modal_join_online.html")]
pub struct JoinOnlineModalTemplate;

pub async fn join_online_modal() -> Response {
    render_html(&JoinOnlineModalTemplate)
}

/// The client drops `#modal` itself; there is nothing to track here.
pub async fn close_modal() -> StatusCode {
    StatusCode::OK
}
