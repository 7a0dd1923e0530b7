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

use std::collections::BTreeMap;

use ltv_status_tracker::validation_codes::TIMESTAMP_COHERENCE_ORDER;

use crate::{policy::Level, Check, CheckOutcome, SubIndication, TimestampToken, Verdict};

/// Checks that a signature's time-stamps were produced in the order their
/// types imply.
///
/// Time-stamps are grouped by [`TimestampType::coherence_rank`]. Every
/// time-stamp of a group must not precede any time-stamp of an earlier group.
/// Time-stamps within the same group may appear in any order, and equal
/// production times are coherent.
///
/// [`TimestampType::coherence_rank`]: crate::TimestampType::coherence_rank
#[derive(Debug)]
pub struct TimestampCoherenceOrderCheck<'a> {
    timestamps: Vec<&'a TimestampToken>,
    level: Level,
}

impl<'a> TimestampCoherenceOrderCheck<'a> {
    /// Creates the check over the admitted time-stamps.
    pub fn new(timestamps: Vec<&'a TimestampToken>, level: Level) -> Self {
        Self { timestamps, level }
    }
}

impl Check for TimestampCoherenceOrderCheck<'_> {
    fn code(&self) -> &'static str {
        TIMESTAMP_COHERENCE_ORDER
    }

    fn description(&self) -> &'static str {
        "Is the time-stamp order coherent?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        // (earliest, latest) per rank
        let mut groups: BTreeMap<u8, (&TimestampToken, &TimestampToken)> = BTreeMap::new();
        for &ts in &self.timestamps {
            groups
                .entry(ts.timestamp_type.coherence_rank())
                .and_modify(|(earliest, latest)| {
                    if ts.production_time < earliest.production_time {
                        *earliest = ts;
                    }
                    if ts.production_time > latest.production_time {
                        *latest = ts;
                    }
                })
                .or_insert((ts, ts));
        }

        let mut previous: Option<&TimestampToken> = None;
        for (earliest, latest) in groups.into_values() {
            if let Some(prev) = previous {
                if earliest.production_time < prev.production_time {
                    return CheckOutcome::failed(
                        Verdict::Failed(SubIndication::TimestampOrderFailure),
                        format!(
                            "{:?} {} produced at {} precedes {:?} {} produced at {}",
                            earliest.timestamp_type,
                            earliest.id,
                            earliest.production_time,
                            prev.timestamp_type,
                            prev.id,
                            prev.production_time
                        ),
                    );
                }
            }

            previous = Some(latest);
        }

        CheckOutcome::Passed
    }
}
