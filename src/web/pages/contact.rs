use askama::Template;
use axum::{response::IntoResponse, Form};
use serde::Deserialize;
use validator::Validate;

use crate::web::templates::{nav_items, HtmlTemplate, NavItem};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    #[serde(default)]
    pub message: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub nav: Vec<NavItem>,
    pub form: ContactForm,
    pub sent: bool,
    pub error: Option<String>,
}

pub async fn contact_page() -> impl IntoResponse {
    HtmlTemplate(ContactTemplate {
        nav: nav_items("/contact-us"),
        form: ContactForm::default(),
        sent: false,
        error: None,
    })
}

pub async fn contact_submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    match form.validate() {
        Ok(()) => {
            // No mail transport is wired up; the submission is logged for
            // the events team to follow up on.
            tracing::info!("Contact request from {} ({})", form.name, form.email);
            HtmlTemplate(ContactTemplate {
                nav: nav_items("/contact-us"),
                form: ContactForm::default(),
                sent: true,
                error: None,
            })
        }
        Err(errors) => {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .next()
                .unwrap_or_else(|| "Please check the form and try again".to_string());

            HtmlTemplate(ContactTemplate {
                nav: nav_items("/contact-us"),
                form,
                sent: false,
                error: Some(message),
            })
        }
    }
}
