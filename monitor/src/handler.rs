use crate::check::Checker;
use crate::metadata::MetadataSource;
use crate::notifier::Notifier;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Response returned to the Lambda runtime
///
/// Always the same, the outcome of the check is only visible in logs and emails.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status_code: 200,
            body: String::new(),
        }
    }
}

/// Handle a scheduled invocation, the event payload is not used
pub async fn handle<S, N>(checker: &Checker<S, N>) -> eyre::Result<Response>
where
    S: MetadataSource + Sync,
    N: Notifier + Sync,
{
    let staleness = checker.check(Utc::now()).await?;

    if staleness.alerted {
        tracing::warn!(days_old = staleness.days_old, "Data is stale");
    }

    Ok(Response::default())
}
