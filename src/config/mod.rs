use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};
use crate::validation::PasswordPolicy;

mod logging;

pub use self::logging::{InvalidLoggingStyle, Logging, LoggingStyle};

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct LoadConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rules applied to passwords when a form is submitted.
    pub password: PasswordPolicy,
    pub logging: Logging,
}

impl Config {
    pub const DEFAULT_CONFIG_FILE: &'static str = "formwise.toml";

    /// Loads the configuration from `path`, or from [`DEFAULT_CONFIG_FILE`]
    /// if it exists, then applies `FORMWISE_*` environment variables on top.
    ///
    /// [`DEFAULT_CONFIG_FILE`]: Config::DEFAULT_CONFIG_FILE
    pub fn load(path: Option<&Path>) -> Result<Self, LoadConfigError> {
        dotenvy::dotenv().ok();

        if let Some(path) = path {
            if !path.is_file() {
                return Err(
                    Report::new(LoadConfigError)
                        .attach_printable(format!("config file {} not found", path.display())),
                );
            }
        }

        let config = Self::figment(path)
            .extract::<Self>()
            .map_err(|e| Report::new(LoadConfigError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(LoadConfigError)?;

        Ok(config)
    }

    pub(crate) fn figment(path: Option<&Path>) -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        let file = path.unwrap_or_else(|| Path::new(Self::DEFAULT_CONFIG_FILE));
        Figment::new()
            .merge(Toml::file(file))
            // Keys with underscores in their names need an explicit mapping,
            // everything else splits on the first underscore.
            .merge(Env::prefixed("FORMWISE_").map(|v| {
                match v.as_str().to_ascii_lowercase().as_str() {
                    "password_min_length" => "password.min_length".into(),
                    other => other.replacen('_', ".", 1).into(),
                }
            }))
    }
}

impl Validate for Config {
    fn errors(&self) -> ValidationErrors {
        let mut fields = ValidationErrors::field_builder();
        for (field, message) in self.password.errors().iter() {
            fields.insert(format!("password.{field}"), Some(message.to_string().into()));
        }
        fields.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_| {
            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.password, PasswordPolicy::default());
            assert_eq!(config.logging.style, LoggingStyle::Full);
            assert!(config.logging.targets.is_empty());
            Ok(())
        });
    }

    #[test]
    fn file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                Config::DEFAULT_CONFIG_FILE,
                r#"
                    [password]
                    min_length = 10

                    [logging]
                    style = "compact"
                    targets = "formwise=debug"
                "#,
            )?;

            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.password.min_length, 10);
            assert_eq!(config.logging.style, LoggingStyle::Compact);
            assert_eq!(config.logging.targets, "formwise=debug");

            jail.set_env("FORMWISE_PASSWORD_MIN_LENGTH", "12");
            jail.set_env("FORMWISE_LOGGING_STYLE", "pretty");
            jail.set_env("FORMWISE_LOGGING_TARGETS", "warn");

            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.password.min_length, 12);
            assert_eq!(config.logging.style, LoggingStyle::Pretty);
            assert_eq!(config.logging.targets, "warn");
            Ok(())
        });
    }

    #[test]
    fn explicit_path() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[password]\nmin_length = 9")?;

            let config = Config::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.password.min_length, 9);

            assert!(Config::load(Some(Path::new("missing.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn rejects_invalid_policy() {
        Jail::expect_with(|jail| {
            jail.set_env("FORMWISE_PASSWORD_MIN_LENGTH", "0");

            let config: Config = Config::figment(None).extract()?;
            let errors = config.validate().unwrap_err();
            assert!(errors.contains("password.min_length"));
            assert!(Config::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn rejects_unknown_style() {
        Jail::expect_with(|jail| {
            jail.set_env("FORMWISE_LOGGING_STYLE", "fancy");
            assert!(Config::load(None).is_err());
            Ok(())
        });
    }
}
