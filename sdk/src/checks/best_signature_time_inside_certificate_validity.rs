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
use ltv_status_tracker::validation_codes::BEST_SIGNATURE_TIME_INSIDE_VALIDITY;

use crate::{policy::Level, CertificateInfo, Check, CheckOutcome, SubIndication, Verdict};

/// Checks that best-signature-time is after the issuance date and before the
/// expiration date of the signing certificate.
///
/// Fails with `INDETERMINATE/OUT_OF_BOUNDS_NO_POE`.
#[derive(Debug)]
pub struct BestSignatureTimeInsideCertificateValidityCheck<'a> {
    signing_certificate: &'a CertificateInfo,
    best_signature_time: DateTime<Utc>,
    level: Level,
}

impl<'a> BestSignatureTimeInsideCertificateValidityCheck<'a> {
    /// Creates the check.
    pub fn new(
        signing_certificate: &'a CertificateInfo,
        best_signature_time: DateTime<Utc>,
        level: Level,
    ) -> Self {
        Self {
            signing_certificate,
            best_signature_time,
            level,
        }
    }
}

impl Check for BestSignatureTimeInsideCertificateValidityCheck<'_> {
    fn code(&self) -> &'static str {
        BEST_SIGNATURE_TIME_INSIDE_VALIDITY
    }

    fn description(&self) -> &'static str {
        "Is best-signature-time after the issuance date and before the expiration date of the signing certificate?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let cert = self.signing_certificate;
        let best = self.best_signature_time;

        CheckOutcome::from_condition(
            cert.not_before < best && best < cert.not_after,
            Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe),
            format!(
                "best-signature-time {best} is outside the validity range {} - {} of certificate {}",
                cert.not_before, cert.not_after, cert.id
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;
    use crate::checks::BestSignatureTimeNotBeforeCertificateIssuanceCheck;

    fn certificate() -> CertificateInfo {
        CertificateInfo {
            id: "C-1".into(),
            not_before: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            revocation_date: None,
        }
    }

    fn verdicts(best: DateTime<Utc>) -> (Option<Verdict>, Option<Verdict>) {
        let cert = certificate();
        let verdict = |outcome: CheckOutcome| match outcome {
            CheckOutcome::Passed => None,
            CheckOutcome::Failed { verdict, .. } => Some(verdict),
        };

        (
            verdict(
                BestSignatureTimeNotBeforeCertificateIssuanceCheck::new(&cert, best, Level::Fail)
                    .evaluate(),
            ),
            verdict(
                BestSignatureTimeInsideCertificateValidityCheck::new(&cert, best, Level::Fail)
                    .evaluate(),
            ),
        )
    }

    #[test]
    fn before_issuance() {
        let best = Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            verdicts(best),
            (
                Some(Verdict::Failed(SubIndication::NotYetValid)),
                Some(Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe))
            )
        );
    }

    #[test]
    fn inside_validity() {
        let best = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(verdicts(best), (None, None));
    }

    #[test]
    fn at_issuance() {
        // Not before issuance, but not strictly after it either.
        let best = certificate().not_before;
        assert_eq!(
            verdicts(best),
            (
                None,
                Some(Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe))
            )
        );
    }

    #[test]
    fn after_expiration() {
        let best = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            verdicts(best),
            (
                None,
                Some(Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe))
            )
        );
    }
}
