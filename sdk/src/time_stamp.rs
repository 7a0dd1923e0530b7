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

//! Time-stamp admission and best-signature-time computation.
//!
//! These run before the long-term validation chain is built. They never fail:
//! rejected or unvalidated time-stamps are reported through the
//! [`StatusTracker`] and otherwise ignored.

use chrono::{DateTime, Utc};
use ltv_status_tracker::{
    log_item,
    validation_codes::{
        BEST_SIGNATURE_TIME_UPDATED, TIMESTAMP_MESSAGE_IMPRINT_REJECTED,
        TIMESTAMP_VALIDATION_MISSING,
    },
    StatusTracker,
};

use crate::{TimestampOutcome, TimestampToken};

/// Returns the time-stamps whose message imprint was found and is intact.
///
/// Every other time-stamp is left out and reported with
/// [`TIMESTAMP_MESSAGE_IMPRINT_REJECTED`]. The relative order of admitted
/// time-stamps is preserved.
pub fn filter_invalid_message_imprint<'a>(
    timestamps: &[&'a TimestampToken],
    validation_log: &mut impl StatusTracker,
) -> Vec<&'a TimestampToken> {
    let mut admitted = Vec::with_capacity(timestamps.len());

    for &ts in timestamps {
        if ts.has_valid_message_imprint() {
            admitted.push(ts);
            continue;
        }

        let reason = if ts.message_imprint_found {
            "message imprint is not intact"
        } else {
            "message imprint not found"
        };

        log_item!(
            ts.id.clone(),
            format!("time-stamp rejected: {reason}"),
            "filter_invalid_message_imprint"
        )
        .validation_status(TIMESTAMP_MESSAGE_IMPRINT_REJECTED)
        .informational(validation_log);
    }

    admitted
}

/// Computes best-signature-time: the earliest production time of an admitted
/// time-stamp whose validation succeeded, or `current_time` if there is none.
///
/// Only a strictly earlier production time replaces the running value, so the
/// result never exceeds `current_time`. A time-stamp without a validation
/// outcome contributes nothing and is reported as a warning with
/// [`TIMESTAMP_VALIDATION_MISSING`].
pub fn best_signature_time(
    current_time: DateTime<Utc>,
    admitted: &[&TimestampToken],
    outcomes: &[TimestampOutcome],
    validation_log: &mut impl StatusTracker,
) -> DateTime<Utc> {
    admitted.iter().fold(current_time, |best, ts| {
        let Some(outcome) = outcomes.iter().find(|o| o.id == ts.id) else {
            log_item!(
                ts.id.clone(),
                "time-stamp has no validation outcome",
                "best_signature_time"
            )
            .validation_status(TIMESTAMP_VALIDATION_MISSING)
            .warning(validation_log);

            return best;
        };

        if outcome.is_ok() && ts.production_time < best {
            log_item!(
                ts.id.clone(),
                format!("best-signature-time set to {}", ts.production_time),
                "best_signature_time"
            )
            .validation_status(BEST_SIGNATURE_TIME_UPDATED)
            .success(validation_log);

            ts.production_time
        } else {
            best
        }
    })
}
