use crate::config::Config;
use crate::metadata::{LastModified, MetadataSource};
use crate::notifier::Notifier;
use chrono::{DateTime, Utc};
use eyre::Context;

/// Outcome of a single check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staleness {
    pub last_modified: LastModified,
    pub days_old: i64,

    /// True when an alert was sent
    pub alerted: bool,
}

pub fn alert_subject(days_old: i64) -> String {
    format!("git-top-repos data is {days_old} days old")
}

pub fn alert_message(last_modified: &LastModified) -> String {
    format!(
        "The git-top-repos data fetched from Github has been last updated on {}.",
        last_modified.raw
    )
}

/// Checks the age of the data and alerts when it is older than allowed
pub struct Checker<S, N> {
    source: S,
    notifier: N,
    max_age_days: i64,
}

impl<S, N> Checker<S, N>
where
    S: MetadataSource + Sync,
    N: Notifier + Sync,
{
    pub fn new(config: &Config, source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            max_age_days: config.max_age_days,
        }
    }

    /// Run the check against the given current time
    ///
    /// The data is stale only when strictly more whole days than allowed have passed.
    pub async fn check(&self, now: DateTime<Utc>) -> eyre::Result<Staleness> {
        let last_modified = self.source.last_modified().await?;
        let days_old = last_modified.days_old(now);
        let alerted = days_old > self.max_age_days;

        tracing::info!(
            last_modified = %last_modified.raw,
            days_old,
            max_age_days = self.max_age_days,
            "Checked data age"
        );

        if alerted {
            self.notifier
                .notify(&alert_subject(days_old), &alert_message(&last_modified))
                .await
                .wrap_err("Failed to notify about stale data")?;
        }

        Ok(Staleness {
            last_modified,
            days_old,
            alerted,
        })
    }
}
