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

//! Generic check-sequencing engine.
//!
//! A [`Chain`] holds an ordered list of [`Check`]s. Executing the chain
//! evaluates each check in order against its constraint [`Level`] and stops at
//! the first check that fails under [`Level::Fail`]. Every check appears
//! exactly once in the resulting [`ChainReport`], in construction order, so
//! the report shows which checks ran and which were cut off.

use std::{borrow::Cow, fmt::Debug};

use ltv_status_tracker::{log_item, StatusTracker};
use serde::{Deserialize, Serialize};

use crate::{policy::Level, Verdict};

/// Result of evaluating one [`Check`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckOutcome {
    /// The check's condition holds.
    Passed,

    /// The check's condition does not hold.
    Failed {
        /// Verdict of the chain if this failure is fatal.
        verdict: Verdict,

        /// Explanation of the failure.
        message: Cow<'static, str>,
    },
}

impl CheckOutcome {
    /// Creates a failed outcome.
    pub fn failed<S: Into<Cow<'static, str>>>(verdict: Verdict, message: S) -> Self {
        Self::Failed {
            verdict,
            message: message.into(),
        }
    }

    /// Returns [`CheckOutcome::Passed`] if `condition` holds, otherwise a
    /// failed outcome built from `verdict` and `message`.
    pub fn from_condition<S: Into<Cow<'static, str>>>(
        condition: bool,
        verdict: Verdict,
        message: S,
    ) -> Self {
        if condition {
            Self::Passed
        } else {
            Self::failed(verdict, message)
        }
    }
}

/// A single-purpose predicate that contributes one [`CheckReport`] to a
/// chain.
///
/// Checks capture the data they need when they are constructed; evaluating a
/// check has no side effects.
pub trait Check: Debug {
    /// Stable code identifying the check in reports.
    fn code(&self) -> &'static str;

    /// Human-readable description of the condition being checked.
    fn description(&self) -> &'static str;

    /// Constraint level governing how a failure is handled.
    fn level(&self) -> Level;

    /// Evaluates the check.
    fn evaluate(&self) -> CheckOutcome;
}

/// Status of one check in a [`ChainReport`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// The check passed.
    Ok,

    /// The check failed under [`Level::Fail`] and terminated the chain.
    NotOk,

    /// The check failed under [`Level::Warn`].
    Warning,

    /// The check failed under [`Level::Inform`].
    Information,

    /// The check was not evaluated because its level is [`Level::Ignore`].
    Ignored,

    /// The check was not evaluated because an earlier check terminated the
    /// chain.
    NotExecuted,
}

impl CheckStatus {
    /// Returns `true` if the check was actually evaluated.
    pub fn is_executed(&self) -> bool {
        !matches!(self, Self::Ignored | Self::NotExecuted)
    }
}

/// Report entry for one check.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CheckReport {
    /// Code of the check.
    pub code: String,

    /// Description of the check.
    pub description: String,

    /// Status of the check.
    pub status: CheckStatus,

    /// Explanation attached to a failed check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ordered check reports and the conclusion of a chain.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChainReport {
    /// Name of the validation process.
    pub title: String,

    /// One entry per check, in execution order.
    #[serde(default)]
    pub checks: Vec<CheckReport>,

    /// Final verdict.
    pub conclusion: Verdict,
}

impl ChainReport {
    /// Creates a report with no checks.
    pub fn new<S: Into<String>>(title: S, conclusion: Verdict) -> Self {
        Self {
            title: title.into(),
            checks: vec![],
            conclusion,
        }
    }

    /// Returns the report entry for the check with the given code, if any.
    pub fn check(&self, code: &str) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.code == code)
    }

    /// Returns the codes of all checks, in order.
    pub fn codes(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.code.as_str()).collect()
    }
}

/// An ordered, growable sequence of checks.
#[derive(Debug)]
pub struct Chain<'a> {
    title: Cow<'static, str>,
    items: Vec<Box<dyn Check + 'a>>,
}

impl<'a> Chain<'a> {
    /// Creates an empty chain.
    pub fn new<S: Into<Cow<'static, str>>>(title: S) -> Self {
        Self {
            title: title.into(),
            items: vec![],
        }
    }

    /// Appends a check to the end of the chain.
    pub fn push<C: Check + 'a>(&mut self, check: C) -> &mut Self {
        self.items.push(Box::new(check));
        self
    }

    /// Number of checks in the chain.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the chain has no checks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Codes of the checks in the chain, in order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.items.iter().map(|c| c.code()).collect()
    }

    /// Executes the checks in order and produces the chain's report.
    ///
    /// Every evaluated check also adds a [`LogItem`] to `validation_log`.
    ///
    /// [`LogItem`]: ltv_status_tracker::LogItem
    pub fn execute(self, validation_log: &mut impl StatusTracker) -> ChainReport {
        let mut report = ChainReport::new(self.title.clone(), Verdict::Passed);
        let mut terminated = false;

        for item in &self.items {
            let (status, message) = if terminated {
                (CheckStatus::NotExecuted, None)
            } else {
                self.run(item.as_ref(), &mut report.conclusion, validation_log)
            };

            terminated |= status == CheckStatus::NotOk;

            report.checks.push(CheckReport {
                code: item.code().to_string(),
                description: item.description().to_string(),
                status,
                message,
            });
        }

        report
    }

    fn run(
        &self,
        item: &dyn Check,
        conclusion: &mut Verdict,
        validation_log: &mut impl StatusTracker,
    ) -> (CheckStatus, Option<String>) {
        let level = item.level();
        if level == Level::Ignore {
            return (CheckStatus::Ignored, None);
        }

        let log = log_item!(self.title.clone(), item.description(), "Chain::execute")
            .validation_status(item.code());

        match item.evaluate() {
            CheckOutcome::Passed => {
                log.success(validation_log);
                (CheckStatus::Ok, None)
            }

            CheckOutcome::Failed { verdict, message } => {
                let status = match level {
                    Level::Fail => {
                        *conclusion = verdict;
                        log.failure_no_throw(validation_log, verdict);
                        CheckStatus::NotOk
                    }
                    Level::Warn => {
                        log.failure_no_throw(validation_log, &message);
                        CheckStatus::Warning
                    }
                    Level::Inform | Level::Ignore => {
                        log.informational(validation_log);
                        CheckStatus::Information
                    }
                };

                (status, Some(message.into_owned()))
            }
        }
    }
}
