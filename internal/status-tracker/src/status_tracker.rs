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

use std::fmt::Debug;

use crate::LogItem;

/// A `StatusTracker` is used in the validation logic of ltv-validation to
/// aggregate diagnostic items as they are generated.
pub trait StatusTracker: Debug + Send {
    /// Return the current list of validation log items.
    fn logged_items(&self) -> &[LogItem];

    /// Add a [`LogItem`] to this status tracker.
    ///
    /// Primarily intended for use by [`LogItem::success()`],
    /// [`LogItem::informational()`], [`LogItem::warning()`] and
    /// [`LogItem::failure_no_throw()`]. Adding an item never stops the
    /// validation.
    fn add_non_error(&mut self, log_item: LogItem);

    /// Returns the [`LogItem`]s that have error conditions (`err_val` is
    /// populated).
    fn filter_errors(&self) -> impl Iterator<Item = &LogItem> {
        self.logged_items()
            .iter()
            .filter(|item| item.err_val.is_some())
    }

    /// Returns `true` if the log contains a specific diagnostic status code.
    fn has_status(&self, val: &str) -> bool {
        self.logged_items()
            .iter()
            .any(|item| item.validation_status.as_deref() == Some(val))
    }

    /// Returns `true` if the log contains any error.
    fn has_any_error(&self) -> bool {
        self.filter_errors().next().is_some()
    }
}

mod detailed;
pub use detailed::DetailedStatusTracker;
