use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use super::service::ServicesSite;
use crate::forms::{FormOutcome, FormValues, SubmitHandler};
use crate::page::{FormView, INQUIRY_ACTION};

pub const INQUIRY_API_PATH: &str = "/api/v1/inquiries";

const SUBMIT_FAILURE_NOTICE: &str =
    "We couldn't send your inquiry right now. Please try again in a few minutes.";

/// Router serving the services page and both inquiry entry points.
pub fn services_router<H>(site: Arc<ServicesSite<H>>) -> Router
where
    H: SubmitHandler + 'static,
{
    Router::new()
        .route("/", get(page_handler::<H>))
        .route("/services", get(page_handler::<H>))
        .route(INQUIRY_ACTION, post(inquiry_form_handler::<H>))
        .route(INQUIRY_API_PATH, post(inquiry_api_handler::<H>))
        .with_state(site)
}

pub(crate) async fn page_handler<H>(State(site): State<Arc<ServicesSite<H>>>) -> Html<String>
where
    H: SubmitHandler + 'static,
{
    Html(site.render(&FormView::empty()))
}

pub(crate) async fn inquiry_form_handler<H>(
    State(site): State<Arc<ServicesSite<H>>>,
    Form(values): Form<FormValues>,
) -> Response
where
    H: SubmitHandler + 'static,
{
    match site.submit(&values) {
        Ok(FormOutcome::Submitted(_)) => {
            (StatusCode::OK, Html(site.render(&FormView::submitted()))).into_response()
        }
        Ok(FormOutcome::Rejected(errors)) => {
            let view = FormView::rejected(values, errors);
            (StatusCode::UNPROCESSABLE_ENTITY, Html(site.render(&view))).into_response()
        }
        Err(error) => {
            warn!(%error, "inquiry could not be delivered");
            let view = FormView::failed(values, SUBMIT_FAILURE_NOTICE);
            (StatusCode::BAD_GATEWAY, Html(site.render(&view))).into_response()
        }
    }
}

pub(crate) async fn inquiry_api_handler<H>(
    State(site): State<Arc<ServicesSite<H>>>,
    body: Result<Json<BTreeMap<String, Option<String>>>, JsonRejection>,
) -> Response
where
    H: SubmitHandler + 'static,
{
    let values = match body {
        Ok(Json(raw)) => present_values(raw),
        Err(rejection) => {
            let body = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(body)).into_response();
        }
    };

    match site.submit(&values) {
        Ok(FormOutcome::Submitted(payload)) => {
            let body = json!({
                "status": "received",
                "received_at": Utc::now().to_rfc3339(),
                "fields": payload,
            });
            (StatusCode::ACCEPTED, Json(body)).into_response()
        }
        Ok(FormOutcome::Rejected(errors)) => {
            let body = json!({ "errors": errors.messages() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
        Err(error) => {
            warn!(%error, "inquiry could not be delivered");
            let body = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

/// A JSON `null` counts as an absent field.
fn present_values(raw: BTreeMap<String, Option<String>>) -> FormValues {
    raw.into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
}
