//! `${VAR}` expansion in configuration strings.
//!
//! `${VAR:-default}` falls back to `default` when VAR is unset. A bare `$VAR`
//! is left as written.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` references in `value` in place.
///
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let lookup = |var: &str| std::env::var(var).map(Some);
    let expanded = shellexpand::env_with_context(value.as_str(), lookup)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match e.cause {
                VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", e.var_name),
            },
        })?
        .into_owned();
    *value = expanded;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NDOCS_TEST_EXPAND_SIMPLE", "api.example.com");
        }
        let mut value = "https://${NDOCS_TEST_EXPAND_SIMPLE}/v1".to_owned();
        expand_env(&mut value, "notion.base_url").unwrap();
        assert_eq!(value, "https://api.example.com/v1");
        unsafe {
            std::env::remove_var("NDOCS_TEST_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NDOCS_TEST_EXPAND_UNSET");
        }
        let mut value = "${NDOCS_TEST_EXPAND_UNSET:-0.0.0.0}".to_owned();
        expand_env(&mut value, "server.host").unwrap();
        assert_eq!(value, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NDOCS_TEST_EXPAND_MISSING");
        }
        let mut value = "${NDOCS_TEST_EXPAND_MISSING}".to_owned();
        let err = expand_env(&mut value, "server.host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NDOCS_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("server.host"));
        assert_eq!(value, "${NDOCS_TEST_EXPAND_MISSING}");
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let mut value = "literal $HOME".to_owned();
        expand_env(&mut value, "server.host").unwrap();
        assert_eq!(value, "literal $HOME");
    }
}
