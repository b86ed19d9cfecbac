use std::env;

/// Retrieves an environment variable, trimming surrounding whitespace.
///
/// # Arguments
/// - `var`: The name of the environment variable.
///
/// # Returns
/// - `Some(value)` when the variable is set to a non-empty value, `None` otherwise.
pub fn env_var_trimmed(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
