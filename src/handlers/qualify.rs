use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{LeadSubmission, QualificationResult};
use crate::services::scoring;
use crate::state::AppState;

pub async fn qualify_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<Json<QualificationResult>, AppError> {
    let Json(lead) = payload.map_err(|e| AppError::InvalidPayload(e.to_string()))?;

    tracing::info!(company = %lead.company_name, email = %lead.email, "qualifying lead");

    let result = scoring::qualify(&lead);

    tracing::info!(
        company = %lead.company_name,
        score = result.score,
        category = result.category.as_str(),
        "lead qualified"
    );

    if let Some(sink) = &state.webhook {
        let sink = Arc::clone(sink);
        let payload = relay_payload(&lead, &result);
        // Fire-and-forget: the response never waits on delivery, and delivery
        // failures are intentionally unobserved beyond a log line.
        tokio::spawn(async move {
            if let Err(e) = sink.deliver(payload).await {
                tracing::warn!(error = %e, "webhook delivery failed");
            }
        });
    }

    Ok(Json(result))
}

/// Full submission merged with the full result, plus a completion timestamp.
/// The two field sets are disjoint, so the merge never overwrites anything.
fn relay_payload(lead: &LeadSubmission, result: &QualificationResult) -> Value {
    let mut merged = serde_json::Map::new();
    if let Ok(Value::Object(fields)) = serde_json::to_value(lead) {
        merged.extend(fields);
    }
    if let Ok(Value::Object(fields)) = serde_json::to_value(result) {
        merged.extend(fields);
    }
    merged.insert(
        "timestamp".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    Value::Object(merged)
}
