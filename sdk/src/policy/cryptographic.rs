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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Level, PolicyValidate};
use crate::{Error, Result, SignatureInfo};

/// Minimum public key size for an encryption algorithm.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MinKeySize {
    /// Encryption algorithm name, e.g. `RSA`.
    pub algorithm: String,

    /// Minimum key length in bits.
    pub bits: u32,
}

/// Date after which an algorithm is no longer considered reliable.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AlgorithmExpiration {
    /// Encryption or digest algorithm name.
    pub algorithm: String,

    /// Expiration date.
    pub expires: DateTime<Utc>,
}

/// Describes why a signature's algorithms are not acceptable at a given time.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AlgorithmIssue {
    /// The signature does not identify its encryption or digest algorithm.
    #[error("{0} algorithm is unknown")]
    MissingAlgorithm(&'static str),

    /// The encryption algorithm is not on the acceptable list.
    #[error("encryption algorithm {0} is not acceptable")]
    EncryptionNotAcceptable(String),

    /// The digest algorithm is not on the acceptable list.
    #[error("digest algorithm {0} is not acceptable")]
    DigestNotAcceptable(String),

    /// The public key is shorter than the policy's minimum.
    #[error("public key size {bits:?} is below the minimum of {min} bits for {algorithm}")]
    KeyTooSmall {
        /// Encryption algorithm.
        algorithm: String,
        /// Key length found on the signature.
        bits: Option<u32>,
        /// Minimum key length required by the policy.
        min: u32,
    },

    /// The algorithm had expired at the control time.
    #[error("algorithm {algorithm} expired on {expires}")]
    Expired {
        /// Expired algorithm.
        algorithm: String,
        /// Expiration date.
        expires: DateTime<Utc>,
    },
}

/// Cryptographic constraint applied to the algorithms of a signed object.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CryptographicConstraint {
    /// Level applied when the constraint is not met.
    #[serde(default)]
    pub level: Level,

    /// Acceptable encryption algorithms.
    #[serde(default)]
    pub acceptable_encryption_algorithms: Vec<String>,

    /// Acceptable digest algorithms.
    #[serde(default)]
    pub acceptable_digest_algorithms: Vec<String>,

    /// Minimum public key sizes per encryption algorithm.
    #[serde(default)]
    pub min_public_key_sizes: Vec<MinKeySize>,

    /// Expiration dates of encryption and digest algorithms.
    #[serde(default)]
    pub algorithm_expirations: Vec<AlgorithmExpiration>,
}

impl Default for CryptographicConstraint {
    fn default() -> Self {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();

        Self {
            level: Level::Fail,
            acceptable_encryption_algorithms: names(&["RSA", "RSASSA-PSS", "ECDSA", "EdDSA"]),
            acceptable_digest_algorithms: names(&[
                "SHA256", "SHA384", "SHA512", "SHA3-256", "SHA3-384", "SHA3-512",
            ]),
            min_public_key_sizes: vec![
                MinKeySize {
                    algorithm: "RSA".into(),
                    bits: 1900,
                },
                MinKeySize {
                    algorithm: "RSASSA-PSS".into(),
                    bits: 1900,
                },
                MinKeySize {
                    algorithm: "ECDSA".into(),
                    bits: 256,
                },
            ],
            algorithm_expirations: vec![],
        }
    }
}

impl CryptographicConstraint {
    /// Checks that the signature's algorithms were acceptable, and none of them
    /// expired, at `control_time`.
    ///
    /// Algorithm names are compared case-insensitively.
    pub fn check_at(
        &self,
        signature: &SignatureInfo,
        control_time: DateTime<Utc>,
    ) -> std::result::Result<(), AlgorithmIssue> {
        let encryption = signature
            .encryption_algorithm
            .as_deref()
            .ok_or(AlgorithmIssue::MissingAlgorithm("encryption"))?;

        let digest = signature
            .digest_algorithm
            .as_deref()
            .ok_or(AlgorithmIssue::MissingAlgorithm("digest"))?;

        if !contains(&self.acceptable_encryption_algorithms, encryption) {
            return Err(AlgorithmIssue::EncryptionNotAcceptable(encryption.to_string()));
        }

        if !contains(&self.acceptable_digest_algorithms, digest) {
            return Err(AlgorithmIssue::DigestNotAcceptable(digest.to_string()));
        }

        if let Some(min) = self
            .min_public_key_sizes
            .iter()
            .find(|m| m.algorithm.eq_ignore_ascii_case(encryption))
        {
            if signature.key_length.map_or(true, |bits| bits < min.bits) {
                return Err(AlgorithmIssue::KeyTooSmall {
                    algorithm: encryption.to_string(),
                    bits: signature.key_length,
                    min: min.bits,
                });
            }
        }

        // An algorithm expiring exactly at the control time is still reliable.
        match self.algorithm_expirations.iter().find(|e| {
            (e.algorithm.eq_ignore_ascii_case(encryption)
                || e.algorithm.eq_ignore_ascii_case(digest))
                && e.expires < control_time
        }) {
            Some(expired) => Err(AlgorithmIssue::Expired {
                algorithm: expired.algorithm.clone(),
                expires: expired.expires,
            }),
            None => Ok(()),
        }
    }
}

fn contains(list: &[String], name: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(name))
}

impl PolicyValidate for CryptographicConstraint {
    fn validate(&self) -> Result<()> {
        let named = self
            .acceptable_encryption_algorithms
            .iter()
            .chain(self.acceptable_digest_algorithms.iter())
            .chain(self.min_public_key_sizes.iter().map(|m| &m.algorithm))
            .chain(self.algorithm_expirations.iter().map(|e| &e.algorithm));

        for name in named {
            if name.trim().is_empty() {
                return Err(Error::BadParam(
                    "cryptographic constraint contains an empty algorithm name".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Cryptographic constraints for each signing context.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CryptographicConstraints {
    /// Constraint for signatures.
    pub signature: Option<CryptographicConstraint>,

    /// Constraint for counter-signatures. Falls back to `signature`.
    pub counter_signature: Option<CryptographicConstraint>,

    /// Constraint for time-stamp tokens.
    pub timestamp: Option<CryptographicConstraint>,

    /// Constraint for revocation data.
    pub revocation: Option<CryptographicConstraint>,
}

impl Default for CryptographicConstraints {
    fn default() -> Self {
        Self {
            signature: Some(CryptographicConstraint::default()),
            counter_signature: None,
            timestamp: None,
            revocation: None,
        }
    }
}

impl PolicyValidate for CryptographicConstraints {
    fn validate(&self) -> Result<()> {
        [
            &self.signature,
            &self.counter_signature,
            &self.timestamp,
            &self.revocation,
        ]
        .into_iter()
        .flatten()
        .try_for_each(|c| c.validate())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;

    fn rsa_signature(key_length: Option<u32>) -> SignatureInfo {
        SignatureInfo {
            encryption_algorithm: Some("RSA".into()),
            digest_algorithm: Some("SHA256".into()),
            key_length,
            ..SignatureInfo::new("S-1")
        }
    }

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn default_accepts_rsa_2048_sha256() {
        let constraint = CryptographicConstraint::default();
        assert_eq!(constraint.check_at(&rsa_signature(Some(2048)), at(2024)), Ok(()));
    }

    #[test]
    fn names_are_case_insensitive() {
        let constraint = CryptographicConstraint::default();
        let signature = SignatureInfo {
            encryption_algorithm: Some("ecdsa".into()),
            digest_algorithm: Some("sha384".into()),
            key_length: Some(384),
            ..SignatureInfo::new("S-1")
        };
        assert!(constraint.check_at(&signature, at(2024)).is_ok());
    }

    #[test]
    fn missing_algorithm() {
        let constraint = CryptographicConstraint::default();
        assert_eq!(
            constraint.check_at(&SignatureInfo::new("S-1"), at(2024)),
            Err(AlgorithmIssue::MissingAlgorithm("encryption"))
        );
    }

    #[test]
    fn unacceptable_digest() {
        let constraint = CryptographicConstraint::default();
        let signature = SignatureInfo {
            digest_algorithm: Some("SHA1".into()),
            ..rsa_signature(Some(2048))
        };
        assert_eq!(
            constraint.check_at(&signature, at(2024)),
            Err(AlgorithmIssue::DigestNotAcceptable("SHA1".into()))
        );
    }

    #[test]
    fn key_too_small_or_unknown() {
        let constraint = CryptographicConstraint::default();

        assert!(matches!(
            constraint.check_at(&rsa_signature(Some(1024)), at(2024)),
            Err(AlgorithmIssue::KeyTooSmall { min: 1900, .. })
        ));
        assert!(matches!(
            constraint.check_at(&rsa_signature(None), at(2024)),
            Err(AlgorithmIssue::KeyTooSmall { bits: None, .. })
        ));
    }

    #[test]
    fn expiration_is_relative_to_control_time() {
        let constraint = CryptographicConstraint {
            algorithm_expirations: vec![AlgorithmExpiration {
                algorithm: "sha256".into(),
                expires: at(2022),
            }],
            ..Default::default()
        };

        let signature = rsa_signature(Some(2048));

        assert!(constraint.check_at(&signature, at(2021)).is_ok());
        assert!(constraint.check_at(&signature, at(2022)).is_ok());
        assert!(matches!(
            constraint.check_at(&signature, at(2023)),
            Err(AlgorithmIssue::Expired { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_names() {
        let constraint = CryptographicConstraint {
            acceptable_digest_algorithms: vec![" ".into()],
            ..Default::default()
        };
        assert!(constraint.validate().is_err());
        assert!(CryptographicConstraints::default().validate().is_ok());
    }
}
