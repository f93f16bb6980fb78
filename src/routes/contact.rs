use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use reachout_contact::{ContactMessage, SubmissionStatus};

use crate::{
    config::SiteConfig,
    routes::AppState,
    template::{filters, Template},
};

pub const SUCCESS_MESSAGE: &str = "Thank you, your message has been sent.";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong and your message was not sent. Please try again later.";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: SiteConfig,
    pub message: ContactMessage,
    pub status: SubmissionStatus,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    template.render(ContactTemplate {
        site: app_state.config.site,
        message: ContactMessage::default(),
        status: SubmissionStatus::idle(),
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(mut message): Form<ContactMessage>,
) -> impl IntoResponse {
    let status = SubmissionStatus::submitting();

    let status = match app_state.relay.submit(&message).await {
        Ok(()) => {
            message.reset();
            status.submitted(SUCCESS_MESSAGE)
        }
        Err(err) => {
            // Keep the submitted values so the visitor can retry without
            // retyping the whole message.
            tracing::error!(error = %err, "Relay submission failed");
            status.failed(FAILURE_MESSAGE)
        }
    };

    template.render(ContactTemplate {
        site: app_state.config.site,
        message,
        status,
    })
}
