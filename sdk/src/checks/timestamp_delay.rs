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

use chrono::{DateTime, TimeDelta, Utc};
use ltv_status_tracker::validation_codes::TIMESTAMP_DELAY;

use crate::{policy::Level, Check, CheckOutcome, SignatureInfo, SubIndication, Verdict};

/// Checks that best-signature-time falls within the allowed delay after the
/// signature's claimed signing time.
///
/// A signature without a signing time fails. A delay too large to add to the
/// signing time is treated as unbounded.
#[derive(Debug)]
pub struct TimestampDelayCheck<'a> {
    signature: &'a SignatureInfo,
    delay: Option<TimeDelta>,
    best_signature_time: DateTime<Utc>,
    level: Level,
}

impl<'a> TimestampDelayCheck<'a> {
    /// Creates the check. A `delay` of `None` is unbounded.
    pub fn new(
        signature: &'a SignatureInfo,
        delay: Option<TimeDelta>,
        best_signature_time: DateTime<Utc>,
        level: Level,
    ) -> Self {
        Self {
            signature,
            delay,
            best_signature_time,
            level,
        }
    }
}

impl Check for TimestampDelayCheck<'_> {
    fn code(&self) -> &'static str {
        TIMESTAMP_DELAY
    }

    fn description(&self) -> &'static str {
        "Is the time-stamp delay within the allowed range?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let verdict = Verdict::Failed(SubIndication::SigConstraintsFailure);

        let Some(signing_time) = self.signature.signing_time else {
            return CheckOutcome::failed(
                verdict,
                format!("signature {} has no signing time", self.signature.id),
            );
        };

        let within_delay = self
            .delay
            .and_then(|delay| signing_time.checked_add_signed(delay))
            .map_or(true, |limit| limit > self.best_signature_time);

        CheckOutcome::from_condition(
            within_delay,
            verdict,
            format!(
                "best-signature-time {} is too late after signing time {signing_time}",
                self.best_signature_time
            ),
        )
    }
}
