//! Marketing form endpoints
//!
//! Every form renders its prompt from the posted body and relays the
//! normalized completion with HTTP 200, failures included. Bodies may be JSON
//! or url-encoded.

pub mod templates;

use crate::core::providers::sendgrid::EmailMessage;
use crate::core::traits::EmailSender;
use crate::core::types::CompletionResult;
use crate::server::state::AppState;
use actix_web::{Either, HttpResponse, web};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

pub use templates::{FORMS, FormTemplate};

const DEFAULT_TEST_RECIPIENT: &str = "test@example.com";
const DEFAULT_SUBJECT: &str = "Campaign";
const EMPTY_HTML: &str = "<p></p>";

/// A form body as posted, JSON or url-encoded
type FormBody = Either<web::Json<Value>, web::Form<Map<String, Value>>>;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for template in FORMS {
        cfg.route(
            &template.path(),
            web::post().to(move |state: web::Data<AppState>, body: Option<FormBody>| {
                submit_form(template, state, body)
            }),
        );
    }
}

async fn submit_form(
    template: &'static FormTemplate,
    state: web::Data<AppState>,
    body: Option<FormBody>,
) -> HttpResponse {
    let body = match body {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => Value::Object(form.into_inner()),
        None => Value::Null,
    };
    let body = if body.is_null() { json!({}) } else { body };

    debug!(form = %template.path(), "Form submitted");
    let result = state
        .completion
        .complete(&template.render(&body), "")
        .await;

    let response = if template.sends_email {
        let default_sender = &state.config.providers().sendgrid.default_sender;
        deliver_campaign(state.email.as_deref(), default_sender, &body, result).await
    } else {
        result.into_value()
    };

    HttpResponse::Ok().json(response)
}

/// Send the generated campaign when the caller asked for it
///
/// Only successful results are sent, and only when a sender is configured.
/// The outcome is reported on the result as `sent` plus `sentTo` or
/// `sendError`.
async fn deliver_campaign(
    email: Option<&dyn EmailSender>,
    default_sender: &str,
    body: &Value,
    result: CompletionResult,
) -> Value {
    let send_now = body.get("sendNow").is_some_and(is_truthy);
    let sender = match email {
        Some(sender) if send_now && result.is_ok() => sender,
        _ => return result.into_value(),
    };

    let text = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };
    let to = text("testTo").unwrap_or(DEFAULT_TEST_RECIPIENT).to_string();
    let message = EmailMessage {
        to: to.clone(),
        from: text("from").unwrap_or(default_sender).to_string(),
        subject: result
            .text_field("subject")
            .or_else(|| text("subjectHint"))
            .unwrap_or(DEFAULT_SUBJECT)
            .to_string(),
        html: result
            .text_field("htmlBody")
            .or_else(|| result.text_field("raw"))
            .or_else(|| result.raw())
            .unwrap_or(EMPTY_HTML)
            .to_string(),
    };

    let outcome = sender.send(&message).await;

    let mut value = result.into_value();
    if let Value::Object(fields) = &mut value {
        match outcome {
            Ok(()) => {
                fields.insert("sent".to_string(), Value::Bool(true));
                fields.insert("sentTo".to_string(), Value::String(to));
            }
            Err(e) => {
                warn!(error = %e, "Campaign email not sent");
                fields.insert("sent".to_string(), Value::Bool(false));
                fields.insert("sendError".to_string(), Value::String(e.to_string()));
            }
        }
    }
    value
}

/// Loose truthiness for flags posted by browsers
///
/// Any non-empty string counts, so url-encoded `sendNow=true` (and
/// `sendNow=false`) both request a send.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
