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

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ltv_status_tracker::DetailedStatusTracker;
use ltv_validation::{
    BasicBuildingBlocks, DiagnosticData, LongTermValidation, LongTermValidationResult, Result,
    SignatureAnalysis, ValidationPolicy,
};
use serde::Deserialize;

#[allow(unused_macros)]
macro_rules! assert_err {
    ($expression:expr, $($pattern:tt)+) => {
        match $expression {
            $($pattern)+ => (),
            ref e => panic!("expected `{}` but got `{:?}`", stringify!($($pattern)+), e),
        }
    }
}
#[allow(unused_imports)]
pub(super) use assert_err;

/// Inputs of one long-term validation run, as stored under
/// `tests/fixtures/ltv`.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub current_time: DateTime<Utc>,
    pub signature_id: String,
    pub analysis: SignatureAnalysis,
    pub diagnostic_data: DiagnosticData,
    #[serde(default)]
    pub revocation_bbbs: Vec<BasicBuildingBlocks>,
}

impl Fixture {
    pub fn load(json: &str) -> Self {
        serde_json::from_str(json).unwrap()
    }

    /// Runs the validation against `policy` and returns its result along with
    /// the diagnostics it produced.
    pub fn validate(
        &self,
        policy: &ValidationPolicy,
    ) -> (Result<LongTermValidationResult>, DetailedStatusTracker) {
        let bbbs: HashMap<String, BasicBuildingBlocks> = self
            .revocation_bbbs
            .iter()
            .map(|bbb| (bbb.id.clone(), bbb.clone()))
            .collect();

        let mut tracker = DetailedStatusTracker::default();
        let result = LongTermValidation::new(
            &self.analysis,
            &self.diagnostic_data,
            &self.signature_id,
            &bbbs,
            policy,
            self.current_time,
        )
        .and_then(|ltv| ltv.validate(&mut tracker));

        (result, tracker)
    }
}
