use crate::env::env;

/// Data older than this number of whole days triggers an alert
pub const MAX_DATA_AGE_DAYS: i64 = 7;

/// Runtime configuration of the monitor
///
/// Read once per cold start and passed into the checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// From-address of alert emails
    pub sender: String,

    /// To-address of alert emails
    pub recipient: String,

    /// URL whose Last-Modified header is checked
    pub metadata_url: String,

    pub max_age_days: i64,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            sender: env("SENDER_EMAIL_ADDRESS")?,
            recipient: env("TARGET_EMAIL_ADDRESS")?,
            metadata_url: env("METADATA_URL")?,
            max_age_days: MAX_DATA_AGE_DAYS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, keep all from_env assertions in one test
    #[test]
    fn reads_all_variables() {
        std::env::set_var("SENDER_EMAIL_ADDRESS", "monitor@example.com");
        std::env::set_var("TARGET_EMAIL_ADDRESS", "ops@example.com");
        std::env::remove_var("METADATA_URL");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("METADATA_URL"));

        std::env::set_var("METADATA_URL", "https://example.com/metadata.json");

        assert_eq!(
            Config::from_env().unwrap(),
            Config {
                sender: "monitor@example.com".into(),
                recipient: "ops@example.com".into(),
                metadata_url: "https://example.com/metadata.json".into(),
                max_age_days: 7,
            }
        );
    }
}
