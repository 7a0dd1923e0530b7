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
use ltv_status_tracker::validation_codes::BEST_SIGNATURE_TIME_NOT_BEFORE_ISSUANCE;

use crate::{policy::Level, CertificateInfo, Check, CheckOutcome, SubIndication, Verdict};

/// Checks that best-signature-time is not before the issuance date of the
/// signing certificate. Fails with `FAILED/NOT_YET_VALID`.
#[derive(Debug)]
pub struct BestSignatureTimeNotBeforeCertificateIssuanceCheck<'a> {
    signing_certificate: &'a CertificateInfo,
    best_signature_time: DateTime<Utc>,
    level: Level,
}

impl<'a> BestSignatureTimeNotBeforeCertificateIssuanceCheck<'a> {
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

impl Check for BestSignatureTimeNotBeforeCertificateIssuanceCheck<'_> {
    fn code(&self) -> &'static str {
        BEST_SIGNATURE_TIME_NOT_BEFORE_ISSUANCE
    }

    fn description(&self) -> &'static str {
        "Is best-signature-time not before the issuance date of the signing certificate?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let not_before = self.signing_certificate.not_before;
        CheckOutcome::from_condition(
            self.best_signature_time >= not_before,
            Verdict::Failed(SubIndication::NotYetValid),
            format!(
                "best-signature-time {} is before certificate issuance {not_before}",
                self.best_signature_time
            ),
        )
    }
}
