//! Static informational pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    /// Show the post-submission confirmation banner.
    pub sent: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContactPageQuery {
    pub sent: Option<String>,
}

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Display the about page.
pub async fn about() -> impl IntoResponse {
    AboutTemplate
}

/// Display the contact page.
pub async fn contact(Query(query): Query<ContactPageQuery>) -> impl IntoResponse {
    ContactTemplate {
        sent: query.sent.is_some(),
    }
}

/// Accept a contact form submission.
///
/// There is no mailbox behind this; the message is logged and the page
/// re-renders with a confirmation banner.
#[instrument(skip(form))]
pub async fn submit_contact(Form(form): Form<ContactForm>) -> impl IntoResponse {
    tracing::info!(
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        "Contact form submitted"
    );

    Redirect::to("/contact?sent=1")
}
