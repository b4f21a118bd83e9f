//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// A `${VAR}` reference with no value and no `:-` default.
struct UnsetVar(String);

fn lookup(name: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(name)
        .map(Some)
        .map_err(|_| UnsetVar(name.to_owned()))
}

/// Substitute `${VAR}` and `${VAR:-default}` in a config value.
///
/// `field` names the setting in the error for an unset variable. Values
/// without any `${` are returned as is, so a lone `$VAR` stays literal.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(Cow::into_owned(expanded)),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause.0),
        }),
    }
}
