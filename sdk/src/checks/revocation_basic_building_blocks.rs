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

use ltv_status_tracker::validation_codes::REVOCATION_BBB_VALID;

use crate::{policy::Level, BasicBuildingBlocks, Check, CheckOutcome};

/// Checks that the basic building blocks run independently over a revocation
/// token concluded `PASSED`.
///
/// On failure the building blocks' own conclusion is reported.
#[derive(Debug)]
pub struct RevocationBasicBuildingBlocksCheck<'a> {
    bbb: &'a BasicBuildingBlocks,
    level: Level,
}

impl<'a> RevocationBasicBuildingBlocksCheck<'a> {
    /// Creates the check over one revocation token's building blocks.
    pub fn new(bbb: &'a BasicBuildingBlocks, level: Level) -> Self {
        Self { bbb, level }
    }
}

impl Check for RevocationBasicBuildingBlocksCheck<'_> {
    fn code(&self) -> &'static str {
        REVOCATION_BBB_VALID
    }

    fn description(&self) -> &'static str {
        "Is the result of the revocation data basic validation process acceptable?"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn evaluate(&self) -> CheckOutcome {
        let conclusion = self.bbb.conclusion;
        CheckOutcome::from_condition(
            conclusion.is_passed(),
            conclusion,
            format!(
                "basic building blocks for revocation data {} concluded {conclusion}",
                self.bbb.id
            ),
        )
    }
}
