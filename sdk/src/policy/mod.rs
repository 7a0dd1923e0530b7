// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Validation policy: constraint levels, time-stamp delay, and cryptographic
//! constraints.
//!
//! A policy is immutable for the duration of a validation run. It can be
//! loaded from JSON or TOML; any value not specified falls back to
//! [`ValidationPolicy::default`].

/// Cryptographic constraints.
pub mod cryptographic;

use chrono::TimeDelta;
use config::{Config, FileFormat};
pub use cryptographic::{
    AlgorithmExpiration, AlgorithmIssue, CryptographicConstraint, CryptographicConstraints,
    MinKeySize,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const VERSION: u32 = 1;

// trait used to validate user input to make sure user supplied policies are valid
pub(crate) trait PolicyValidate {
    // returns error if the policy is invalid
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// How a check failure is handled.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A failure terminates the validation process.
    #[default]
    Fail,

    /// A failure is reported as a warning; processing continues.
    Warn,

    /// A failure is reported as information; processing continues.
    Inform,

    /// The check is not evaluated.
    Ignore,
}

/// A constraint that only carries a [`Level`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LevelConstraint {
    /// Level applied when the constrained check fails.
    pub level: Level,
}

/// Unit of a [`TimeConstraint`] value.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// A duration-valued constraint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimeConstraint {
    /// Level applied when the constrained check fails.
    #[serde(default)]
    pub level: Level,

    /// Amount of time, in `unit`s.
    pub value: i64,

    /// Unit of `value`.
    pub unit: TimeUnit,
}

impl TimeConstraint {
    /// Returns the constraint as a duration.
    ///
    /// Returns `None` if the value is out of range for a [`TimeDelta`].
    pub fn duration(&self) -> Option<TimeDelta> {
        match self.unit {
            TimeUnit::Milliseconds => TimeDelta::try_milliseconds(self.value),
            TimeUnit::Seconds => TimeDelta::try_seconds(self.value),
            TimeUnit::Minutes => TimeDelta::try_minutes(self.value),
            TimeUnit::Hours => TimeDelta::try_hours(self.value),
            TimeUnit::Days => TimeDelta::try_days(self.value),
        }
    }
}

impl PolicyValidate for TimeConstraint {
    fn validate(&self) -> Result<()> {
        if self.value < 0 {
            return Err(Error::BadParam(format!(
                "time constraint value must not be negative (got {})",
                self.value
            )));
        }
        Ok(())
    }
}

/// Context in which a cryptographic constraint applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Context {
    /// The signature itself.
    Signature,

    /// A counter-signature.
    CounterSignature,

    /// A time-stamp token.
    Timestamp,

    /// A revocation token.
    Revocation,
}

/// Validation policy for the long-term validation process.
///
/// Only the time-stamp delay and cryptographic constraints are configurable.
/// Every other check is fatal on failure; a policy naming any other section is
/// rejected.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Version of the policy format.
    pub version: u32,

    /// Maximum delay between the claimed signing time and the
    /// best-signature-time.
    ///
    /// When absent, neither the signing-time presence check nor the time-stamp
    /// delay check is evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_delay: Option<TimeConstraint>,

    /// Cryptographic constraints, per context.
    pub cryptographic: CryptographicConstraints,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            version: VERSION,
            timestamp_delay: None,
            cryptographic: CryptographicConstraints::default(),
        }
    }
}

impl PolicyValidate for ValidationPolicy {
    fn validate(&self) -> Result<()> {
        if self.version != VERSION {
            return Err(Error::BadParam(format!(
                "unsupported policy version {}",
                self.version
            )));
        }

        if let Some(delay) = &self.timestamp_delay {
            delay.validate()?;
        }

        self.cryptographic.validate()
    }
}

impl ValidationPolicy {
    /// Load a policy from its string representation. Format must be supplied
    /// (`json` or `toml`).
    ///
    /// Values that are not specified keep their default.
    pub fn from_string(policy_str: &str, format: &str) -> Result<Self> {
        Self::default().update_from_str(policy_str, format)
    }

    /// Load a policy from TOML.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Self::from_string(toml, "toml")
    }

    /// Load a policy from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_string(json, "json")
    }

    /// Returns a copy of this policy overlaid with the provided configuration.
    ///
    /// # Example
    /// ```
    /// use ltv_validation::{policy::Level, ValidationPolicy};
    ///
    /// let policy = ValidationPolicy::default()
    ///     .update_from_str(
    ///         r#"
    ///     [timestamp_delay]
    ///     level = "warn"
    ///     value = 2
    ///     unit = "days"
    /// "#,
    ///         "toml",
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(policy.timestamp_delay.unwrap().level, Level::Warn);
    /// ```
    pub fn update_from_str(&self, policy_str: &str, format: &str) -> Result<Self> {
        let f = match format.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            _ => return Err(Error::UnsupportedType),
        };

        let current = Config::try_from(self)
            .map_err(|e| Error::BadParam(format!("could not encode policy: {e}")))?;

        let merged = Config::builder()
            .add_source(current)
            .add_source(config::File::from_str(policy_str, f))
            .build() // merge overrides, allows for partial changes
            .map_err(|_e| Error::BadParam("could not parse policy".into()))?;

        // sanity check the values before committing
        let policy = merged
            .try_deserialize::<ValidationPolicy>()
            .map_err(|e| Error::BadParam(e.to_string()))?;

        policy.validate()?;

        Ok(policy)
    }

    /// Constraint used by checks that have no dedicated constraint. Always
    /// [`Level::Fail`].
    pub fn fail_level_constraint(&self) -> LevelConstraint {
        LevelConstraint { level: Level::Fail }
    }

    /// Constraint on the delay between signing time and best-signature-time.
    pub fn timestamp_delay_signing_time_constraint(&self) -> Option<&TimeConstraint> {
        self.timestamp_delay.as_ref()
    }

    /// Cryptographic constraint for the given context.
    ///
    /// Counter-signatures fall back to the signature constraint when they have
    /// none of their own.
    pub fn signature_cryptographic_constraint(
        &self,
        context: Context,
    ) -> Option<&CryptographicConstraint> {
        let constraints = &self.cryptographic;
        match context {
            Context::Signature => constraints.signature.as_ref(),
            Context::CounterSignature => constraints
                .counter_signature
                .as_ref()
                .or(constraints.signature.as_ref()),
            Context::Timestamp => constraints.timestamp.as_ref(),
            Context::Revocation => constraints.revocation.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn default_policy() {
        let policy = ValidationPolicy::default();

        assert_eq!(policy.fail_level_constraint().level, Level::Fail);
        assert!(policy.timestamp_delay_signing_time_constraint().is_none());
        assert!(policy
            .signature_cryptographic_constraint(Context::Signature)
            .is_some());
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn from_toml_overlays_defaults() {
        let policy = ValidationPolicy::from_toml(
            r#"
            [timestamp_delay]
            value = 36
            unit = "hours"
            "#,
        )
        .unwrap();

        let delay = policy.timestamp_delay.unwrap();
        assert_eq!(delay.level, Level::Fail);
        assert_eq!(delay.duration(), TimeDelta::try_hours(36));

        // Untouched sections keep their defaults.
        assert_eq!(policy.cryptographic, CryptographicConstraints::default());
    }

    #[test]
    fn from_json_cryptographic_constraint() {
        let policy = ValidationPolicy::from_json(
            r#"{
                "cryptographic": {
                    "timestamp": {
                        "level": "warn",
                        "acceptable_encryption_algorithms": ["RSA"],
                        "acceptable_digest_algorithms": ["SHA256"],
                        "min_public_key_sizes": [{ "algorithm": "RSA", "bits": 2048 }],
                        "algorithm_expirations": [
                            { "algorithm": "SHA256", "expires": "2030-01-01T00:00:00Z" }
                        ]
                    }
                }
            }"#,
        )
        .unwrap();

        let constraint = policy
            .signature_cryptographic_constraint(Context::Timestamp)
            .unwrap();

        assert_eq!(constraint.level, Level::Warn);
        assert_eq!(constraint.acceptable_encryption_algorithms, vec!["RSA"]);
        assert_eq!(constraint.min_public_key_sizes[0].bits, 2048);
        assert_eq!(
            constraint.algorithm_expirations[0].expires,
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
        );

        // counter-signatures fall back to the signature constraint
        assert_eq!(
            policy.signature_cryptographic_constraint(Context::CounterSignature),
            policy.signature_cryptographic_constraint(Context::Signature)
        );
        assert!(policy
            .signature_cryptographic_constraint(Context::Revocation)
            .is_none());
    }

    #[test]
    fn update_from_str_keeps_original() {
        let original = ValidationPolicy::default();
        let updated = original
            .update_from_str(
                r#"{ "timestamp_delay": { "level": "inform", "value": 5, "unit": "minutes" } }"#,
                "json",
            )
            .unwrap();

        assert!(original.timestamp_delay.is_none());
        assert_eq!(updated.timestamp_delay.unwrap().level, Level::Inform);
    }

    #[test]
    fn rejects_unsupported_format() {
        assert!(matches!(
            ValidationPolicy::from_string("", "yaml"),
            Err(Error::UnsupportedType)
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            ValidationPolicy::from_toml("version = 7"),
            Err(Error::BadParam(_))
        ));

        assert!(matches!(
            ValidationPolicy::from_toml(
                r#"
                [timestamp_delay]
                value = -1
                unit = "days"
                "#
            ),
            Err(Error::BadParam(_))
        ));

        assert!(matches!(
            ValidationPolicy::from_toml(
                r#"
                [timestamp_delay]
                level = "sometimes"
                value = 1
                unit = "days"
                "#
            ),
            Err(Error::BadParam(_))
        ));
    }

    #[test]
    fn fail_level_is_not_configurable() {
        for level in ["warn", "inform", "ignore", "fail"] {
            let toml = format!("[fail_level]\nlevel = \"{level}\"\n");
            assert!(
                matches!(ValidationPolicy::from_toml(&toml), Err(Error::BadParam(_))),
                "{level}"
            );
        }

        let policy = ValidationPolicy::from_toml(
            r#"
            [timestamp_delay]
            level = "ignore"
            value = 1
            unit = "days"
            "#,
        )
        .unwrap();
        assert_eq!(policy.fail_level_constraint().level, Level::Fail);
    }

    #[test]
    fn time_constraint_duration() {
        let constraint = TimeConstraint {
            level: Level::Fail,
            value: 90,
            unit: TimeUnit::Seconds,
        };
        assert_eq!(constraint.duration(), TimeDelta::try_seconds(90));

        let huge = TimeConstraint {
            level: Level::Fail,
            value: i64::MAX,
            unit: TimeUnit::Days,
        };
        assert!(huge.duration().is_none());
    }
}
