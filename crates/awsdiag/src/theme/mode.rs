//! Color mode detection from the environment.

use serde::Serialize;

use crate::env::{EnvReader, RealEnv};

/// Environment variable that switches diagrams to dark mode.
pub const DARK_MODE_ENV: &str = "AWS_DARK";

/// The diagram color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// White background, black text and arrows.
    #[default]
    Light,
    /// Black background, white text, gray arrows, dark icon variants.
    Dark,
}

impl ColorMode {
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

/// Returns true for `"1"` and for `"true"` in any letter case.
///
/// The value is not trimmed: `" true"` is not truthy.
pub fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Resolves the color mode from [`DARK_MODE_ENV`] as seen by `env`.
pub fn resolve_color_mode(env: &dyn EnvReader) -> ColorMode {
    let mode = match env.var(DARK_MODE_ENV) {
        Some(value) if is_truthy(&value) => ColorMode::Dark,
        _ => ColorMode::Light,
    };
    tracing::debug!(?mode, "resolved diagram color mode from {}", DARK_MODE_ENV);
    mode
}

/// Resolves the color mode from the process environment.
pub fn detect_color_mode() -> ColorMode {
    resolve_color_mode(&RealEnv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use serial_test::serial;

    fn mode_for(value: &str) -> ColorMode {
        resolve_color_mode(&MockEnv::new().with_var(DARK_MODE_ENV, value))
    }

    #[test]
    fn test_unset_is_light() {
        assert_eq!(resolve_color_mode(&MockEnv::new()), ColorMode::Light);
    }

    #[test]
    fn test_one_is_dark() {
        assert_eq!(mode_for("1"), ColorMode::Dark);
    }

    #[test]
    fn test_true_any_case_is_dark() {
        assert_eq!(mode_for("true"), ColorMode::Dark);
        assert_eq!(mode_for("TRUE"), ColorMode::Dark);
        assert_eq!(mode_for("tRuE"), ColorMode::Dark);
    }

    #[test]
    fn test_other_values_are_light() {
        for value in ["", "0", "false", "yes", "on", "2", " true", "true ", "1 "] {
            assert_eq!(mode_for(value), ColorMode::Light, "value {:?}", value);
        }
    }

    #[test]
    fn test_other_variables_are_ignored() {
        let env = MockEnv::new().with_var("DARK", "1").with_var("aws_dark", "1");
        assert_eq!(resolve_color_mode(&env), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_detect_color_mode_with_env_var() {
        std::env::set_var(DARK_MODE_ENV, "True");
        assert_eq!(detect_color_mode(), ColorMode::Dark);
        std::env::remove_var(DARK_MODE_ENV);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
