//! Formatter configuration (deterministic, env-overridable).
//!
//! Configuration only selects between accepted Estonian spellings; it never
//! changes which inputs are valid.

use std::env;
use std::fmt;

const ENV_SCALE: &str = "ESTONIAN_NUMBERS_SCALE";
const ENV_EXPLICIT_ONE_HUNDRED: &str = "ESTONIAN_NUMBERS_EXPLICIT_ONE_HUNDRED";
const ENV_EXPLICIT_ONE_THOUSAND: &str = "ESTONIAN_NUMBERS_EXPLICIT_ONE_THOUSAND";

/// Naming system for powers of a thousand above 10⁶.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleSystem {
    /// `miljon`, `miljard`, `triljon`, `kvadriljon`, … (10⁶, 10⁹, 10¹², 10¹⁵).
    #[default]
    Short,
    /// `miljon`, `miljard`, `biljon`, `biljard`, … (10⁶, 10⁹, 10¹², 10¹⁵).
    Long,
}

impl ScaleSystem {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for ScaleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spelling options for [`crate::NumeralFormatter`].
///
/// # Environment Variables
/// - `ESTONIAN_NUMBERS_SCALE` = short|long
/// - `ESTONIAN_NUMBERS_EXPLICIT_ONE_HUNDRED` (bool): `ükssada` instead of `sada`
/// - `ESTONIAN_NUMBERS_EXPLICIT_ONE_THOUSAND` (bool): `üks tuhat` instead of `tuhat`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    pub scale: ScaleSystem,
    pub explicit_one_hundred: bool,
    pub explicit_one_thousand: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            scale: ScaleSystem::Short,
            explicit_one_hundred: false,
            explicit_one_thousand: true,
        }
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: FormatterConfig,
    pub errors: Vec<ConfigError>,
}

impl FormatterConfig {
    #[must_use]
    pub fn with_scale(mut self, scale: ScaleSystem) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_explicit_one_hundred(mut self, explicit: bool) -> Self {
        self.explicit_one_hundred = explicit;
        self
    }

    #[must_use]
    pub fn with_explicit_one_thousand(mut self, explicit: bool) -> Self {
        self.explicit_one_thousand = explicit;
        self
    }

    /// Parse config from environment variables, ignoring bad values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Short human-readable summary.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let flag = |on: bool| if on { "on" } else { "off" };
        format!(
            "scale={} · explicit-100={} · explicit-1000={}",
            self.scale,
            flag(self.explicit_one_hundred),
            flag(self.explicit_one_thousand)
        )
    }
}

fn from_env_with<F>(mut get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = FormatterConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_SCALE) {
        match ScaleSystem::parse(&value) {
            Some(parsed) => config.scale = parsed,
            None => errors.push(ConfigError::new("scale", value, "expected short|long")),
        }
    }

    if let Some(value) = get(ENV_EXPLICIT_ONE_HUNDRED) {
        match parse_bool(&value) {
            Some(parsed) => config.explicit_one_hundred = parsed,
            None => errors.push(ConfigError::new(
                "explicit_one_hundred",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_EXPLICIT_ONE_THOUSAND) {
        match parse_bool(&value) {
            Some(parsed) => config.explicit_one_thousand = parsed,
            None => errors.push(ConfigError::new(
                "explicit_one_thousand",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    ConfigParse { config, errors }
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse_with(vars: &[(&str, &str)]) -> ConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let parsed = parse_with(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, FormatterConfig::default());
        assert_eq!(parsed.config.scale, ScaleSystem::Short);
        assert!(!parsed.config.explicit_one_hundred);
        assert!(parsed.config.explicit_one_thousand);
    }

    #[test]
    fn env_overrides() {
        let parsed = parse_with(&[
            (ENV_SCALE, " Long "),
            (ENV_EXPLICIT_ONE_HUNDRED, "yes"),
            (ENV_EXPLICIT_ONE_THOUSAND, "0"),
        ]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config.scale, ScaleSystem::Long);
        assert!(parsed.config.explicit_one_hundred);
        assert!(!parsed.config.explicit_one_thousand);
    }

    #[test]
    fn bad_values_keep_defaults_and_report() {
        let parsed = parse_with(&[
            (ENV_SCALE, "metric"),
            (ENV_EXPLICIT_ONE_THOUSAND, "maybe"),
        ]);
        assert_eq!(parsed.config, FormatterConfig::default());
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].field, "scale");
        assert_eq!(
            parsed.errors[0].to_string(),
            "scale=metric (expected short|long)"
        );
        assert_eq!(parsed.errors[1].field, "explicit_one_thousand");
    }

    #[test]
    fn builders_and_summary() {
        let config = FormatterConfig::default()
            .with_scale(ScaleSystem::Long)
            .with_explicit_one_hundred(true)
            .with_explicit_one_thousand(false);
        assert_eq!(
            config.summary_short(),
            "scale=long · explicit-100=on · explicit-1000=off"
        );
    }
}
