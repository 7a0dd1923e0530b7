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
use ltv_status_tracker::validation_codes::REVOCATION_DATE_AFTER_BEST_SIGNATURE_TIME;

use crate::{policy::Level, CertificateInfo, Check, CheckOutcome, SubIndication, Verdict};

/// Checks that the signing certificate was revoked strictly after
/// best-signature-time.
///
/// A certificate with no known revocation date gives no such proof, so the
/// check fails with `INDETERMINATE/REVOKED_NO_POE`.
#[derive(Debug)]
pub struct RevocationDateAfterBestSignatureTimeCheck<'a> {
    signing_certificate: &'a CertificateInfo,
    best_signature_time: DateTime<Utc>,
    level: Level,
}

impl<'a> RevocationDateAfterBestSignatureTimeCheck<'a> {
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

impl Check for RevocationDateAfterBestSignatureTimeCheck<'_> {
    fn code(&self) -> &'static str {
        REVOCATION_DATE_AFTER_BEST_SIGNATURE_TIME
    }

    fn description(&self) -> &'static str {
        "Is the revocation time posterior to best-signature-time?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let verdict = Verdict::Indeterminate(SubIndication::RevokedNoPoe);

        match self.signing_certificate.revocation_date {
            Some(revoked) => CheckOutcome::from_condition(
                revoked > self.best_signature_time,
                verdict,
                format!(
                    "certificate {} was revoked at {revoked}, not after best-signature-time {}",
                    self.signing_certificate.id, self.best_signature_time
                ),
            ),

            None => CheckOutcome::failed(
                verdict,
                format!(
                    "no revocation time is known for certificate {}",
                    self.signing_certificate.id
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;

    fn certificate(revocation_date: Option<DateTime<Utc>>) -> CertificateInfo {
        CertificateInfo {
            id: "C-1".into(),
            not_before: Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap(),
            revocation_date,
        }
    }

    fn evaluate(revoked: Option<DateTime<Utc>>, best: DateTime<Utc>) -> CheckOutcome {
        let cert = certificate(revoked);
        RevocationDateAfterBestSignatureTimeCheck::new(&cert, best, Level::Fail).evaluate()
    }

    #[test]
    fn revocation_after_best_signature_time() {
        let best = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        let revoked = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(evaluate(Some(revoked), best), CheckOutcome::Passed);
    }

    #[test]
    fn revocation_at_or_before_best_signature_time() {
        let best = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();

        for revoked in [best, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()] {
            assert!(matches!(
                evaluate(Some(revoked), best),
                CheckOutcome::Failed {
                    verdict: Verdict::Indeterminate(SubIndication::RevokedNoPoe),
                    ..
                }
            ));
        }
    }

    #[test]
    fn unknown_revocation_date() {
        let best = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();

        assert!(matches!(
            evaluate(None, best),
            CheckOutcome::Failed {
                verdict: Verdict::Indeterminate(SubIndication::RevokedNoPoe),
                ..
            }
        ));
    }
}
