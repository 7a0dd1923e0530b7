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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod chain;
pub use chain::{Chain, ChainReport, Check, CheckOutcome, CheckReport, CheckStatus};

pub mod checks;

mod diagnostic_data;
pub use diagnostic_data::{
    CertificateInfo, DiagnosticData, RevocationToken, SignatureInfo, TimestampToken,
    TimestampType,
};

mod error;
pub use error::{Error, Result};

mod indication;
pub use indication::{Indication, SubIndication, Verdict};

mod long_term_validation;
pub use long_term_validation::{LongTermChain, LongTermValidation, LongTermValidationResult};

pub mod policy;
pub use policy::ValidationPolicy;

pub mod time_stamp;

mod validation_results;
pub use validation_results::{BasicBuildingBlocks, SignatureAnalysis, TimestampOutcome};
