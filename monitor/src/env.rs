use eyre::OptionExt;

/// Return the value of a required env variable
///
/// Fails when the variable is missing or set to an empty string.
pub fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_eyre(format!("{name} is missing or empty"))
}
