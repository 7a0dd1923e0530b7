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

use std::fmt::{self, Display, Formatter};

use crate::{LogItem, LogKind, StatusTracker};

/// A `DetailedStatusTracker` aggregates all log conditions observed during a
/// validation pass.
///
/// Every item added is also forwarded to the [`log`] facade.
#[derive(Default, Debug)]
#[non_exhaustive]
pub struct DetailedStatusTracker {
    /// List of items that were logged during validation
    pub logged_items: Vec<LogItem>,
}

impl StatusTracker for DetailedStatusTracker {
    fn logged_items(&self) -> &[LogItem] {
        &self.logged_items
    }

    fn add_non_error(&mut self, log_item: LogItem) {
        match log_item.kind {
            LogKind::Failure => ::log::warn!("Validation failure: {log_item:#?}"),
            LogKind::Warning => ::log::warn!("Validation warning: {log_item:#?}"),
            _ => ::log::info!("Validation info: {log_item:#?}"),
        }
        self.logged_items.push(log_item);
    }
}

impl Display for DetailedStatusTracker {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self.logged_items)
    }
}
