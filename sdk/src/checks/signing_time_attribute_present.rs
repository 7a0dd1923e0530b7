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

use ltv_status_tracker::validation_codes::SIGNING_TIME_PRESENT;

use crate::{policy::Level, Check, CheckOutcome, SignatureInfo, SubIndication, Verdict};

/// Checks that the signature carries a signing-time attribute.
#[derive(Debug)]
pub struct SigningTimeAttributePresentCheck<'a> {
    signature: &'a SignatureInfo,
    level: Level,
}

impl<'a> SigningTimeAttributePresentCheck<'a> {
    /// Creates the check.
    pub fn new(signature: &'a SignatureInfo, level: Level) -> Self {
        Self { signature, level }
    }
}

impl Check for SigningTimeAttributePresentCheck<'_> {
    fn code(&self) -> &'static str {
        SIGNING_TIME_PRESENT
    }

    fn description(&self) -> &'static str {
        "Is the signing-time attribute present?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        CheckOutcome::from_condition(
            self.signature.signing_time.is_some(),
            Verdict::Indeterminate(SubIndication::SigConstraintsFailure),
            format!("signature {} has no signing time", self.signature.id),
        )
    }
}
