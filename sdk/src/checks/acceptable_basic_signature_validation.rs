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

use ltv_status_tracker::validation_codes::ACCEPTABLE_BASIC_SIGNATURE_VALIDATION;

use crate::{policy::Level, ChainReport, Check, CheckOutcome, SubIndication, Verdict};

/// Checks that the validation process for basic signatures returned a result
/// the long-term validation process can build on.
///
/// Acceptable results are `PASSED` and `INDETERMINATE` with one of the
/// sub-indications `CRYPTO_CONSTRAINTS_FAILURE_NO_POE`, `REVOKED_NO_POE`, or
/// `OUT_OF_BOUNDS_NO_POE`. Any other result is returned unchanged.
#[derive(Debug)]
pub struct AcceptableBasicSignatureValidationCheck<'a> {
    basic_signature_validation: &'a ChainReport,
    level: Level,
}

impl<'a> AcceptableBasicSignatureValidationCheck<'a> {
    /// Creates the check over the basic signature validation report.
    pub fn new(basic_signature_validation: &'a ChainReport, level: Level) -> Self {
        Self {
            basic_signature_validation,
            level,
        }
    }
}

impl Check for AcceptableBasicSignatureValidationCheck<'_> {
    fn code(&self) -> &'static str {
        ACCEPTABLE_BASIC_SIGNATURE_VALIDATION
    }

    fn description(&self) -> &'static str {
        "Is the result of the basic validation process acceptable?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let conclusion = self.basic_signature_validation.conclusion;
        match conclusion {
            Verdict::Passed
            | Verdict::Indeterminate(
                SubIndication::CryptoConstraintsFailureNoPoe
                | SubIndication::RevokedNoPoe
                | SubIndication::OutOfBoundsNoPoe,
            ) => CheckOutcome::Passed,

            _ => CheckOutcome::failed(
                conclusion,
                format!("the basic validation process returned {conclusion}"),
            ),
        }
    }
}
