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
use ltv_status_tracker::validation_codes::ALGORITHM_RELIABLE_AT_BEST_SIGNATURE_TIME;

use crate::{
    policy::{cryptographic::CryptographicConstraint, Level},
    Check, CheckOutcome, SignatureInfo, SubIndication, Verdict,
};

/// Checks that the signature's algorithms were still considered reliable at
/// a given control time.
///
/// The level comes from the cryptographic constraint. Without a constraint
/// the check is ignored.
#[derive(Debug)]
pub struct CryptographicCheck<'a> {
    signature: &'a SignatureInfo,
    constraint: Option<&'a CryptographicConstraint>,
    control_time: DateTime<Utc>,
}

impl<'a> CryptographicCheck<'a> {
    /// Creates the check for `signature` evaluated at `control_time`.
    pub fn new(
        signature: &'a SignatureInfo,
        constraint: Option<&'a CryptographicConstraint>,
        control_time: DateTime<Utc>,
    ) -> Self {
        Self {
            signature,
            constraint,
            control_time,
        }
    }
}

impl Check for CryptographicCheck<'_> {
    fn code(&self) -> &'static str {
        ALGORITHM_RELIABLE_AT_BEST_SIGNATURE_TIME
    }

    fn description(&self) -> &'static str {
        "Are the signature algorithms reliable at best-signature-time?"
    }

    fn level(&self) -> Level {
        self.constraint.map_or(Level::Ignore, |c| c.level)
    }

    fn evaluate(&self) -> CheckOutcome {
        let Some(constraint) = self.constraint else {
            return CheckOutcome::Passed;
        };

        match constraint.check_at(self.signature, self.control_time) {
            Ok(()) => CheckOutcome::Passed,
            Err(issue) => CheckOutcome::failed(
                Verdict::Indeterminate(SubIndication::CryptoConstraintsFailureNoPoe),
                format!("{issue} at {}", self.control_time),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;
    use crate::policy::cryptographic::AlgorithmExpiration;

    fn signature() -> SignatureInfo {
        SignatureInfo {
            encryption_algorithm: Some("RSA".into()),
            digest_algorithm: Some("SHA256".into()),
            key_length: Some(2048),
            ..SignatureInfo::new("S-1")
        }
    }

    #[test]
    fn no_constraint_is_ignored() {
        let sig = signature();
        let check = CryptographicCheck::new(&sig, None, Utc::now());

        assert_eq!(check.level(), Level::Ignore);
        assert_eq!(check.evaluate(), CheckOutcome::Passed);
    }

    #[test]
    fn level_follows_constraint() {
        let sig = signature();
        let constraint = CryptographicConstraint {
            level: Level::Warn,
            ..Default::default()
        };

        let check = CryptographicCheck::new(&sig, Some(&constraint), Utc::now());
        assert_eq!(check.level(), Level::Warn);
    }

    #[test]
    fn expired_algorithm() {
        let sig = signature();
        let constraint = CryptographicConstraint {
            algorithm_expirations: vec![AlgorithmExpiration {
                algorithm: "SHA256".into(),
                expires: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            }],
            ..Default::default()
        };

        let before = Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            CryptographicCheck::new(&sig, Some(&constraint), before).evaluate(),
            CheckOutcome::Passed
        );

        let after = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            CryptographicCheck::new(&sig, Some(&constraint), after).evaluate(),
            CheckOutcome::Failed {
                verdict: Verdict::Indeterminate(SubIndication::CryptoConstraintsFailureNoPoe),
                ..
            }
        ));
    }
}
