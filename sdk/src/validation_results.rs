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

//! Results of the validation processes that run before the long-term
//! validation process.

use serde::{Deserialize, Serialize};

use crate::{ChainReport, CheckStatus, Verdict};

/// Prior validation result of one time-stamp token.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimestampOutcome {
    /// Id of the time-stamp token this outcome applies to.
    pub id: String,

    /// Status reported by the time-stamp validation process.
    pub status: CheckStatus,
}

impl TimestampOutcome {
    /// Creates an outcome from the conclusion of a time-stamp validation
    /// process. Only a `PASSED` conclusion maps to [`CheckStatus::Ok`].
    pub fn from_verdict<S: Into<String>>(id: S, verdict: Verdict) -> Self {
        Self {
            id: id.into(),
            status: if verdict.is_passed() {
                CheckStatus::Ok
            } else {
                CheckStatus::NotOk
            },
        }
    }

    /// Returns `true` if the time-stamp validation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

/// Conclusion of the basic building blocks run independently over one
/// revocation token.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BasicBuildingBlocks {
    /// Id of the revocation token.
    pub id: String,

    /// Conclusion of the basic building blocks.
    pub conclusion: Verdict,
}

/// Results produced for one signature before the long-term validation
/// process runs.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SignatureAnalysis {
    /// Report of the validation process for basic signatures.
    pub basic_signature_validation: Option<ChainReport>,

    /// Outcomes of the time-stamp validation process, one entry per
    /// validated time-stamp token.
    pub timestamp_validations: Vec<TimestampOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubIndication;

    #[test]
    fn timestamp_outcome_from_verdict() {
        assert!(TimestampOutcome::from_verdict("T-1", Verdict::Passed).is_ok());
        assert!(!TimestampOutcome::from_verdict(
            "T-1",
            Verdict::Indeterminate(SubIndication::TryLater)
        )
        .is_ok());
    }
}
