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

//! Leaf checks used by the long-term validation process.
//!
//! Each check captures its inputs at construction and evaluates a single
//! condition. On failure it reports the verdict the chain concludes with when
//! the check's level is [`Level::Fail`](crate::policy::Level::Fail).

mod acceptable_basic_signature_validation;
pub use acceptable_basic_signature_validation::AcceptableBasicSignatureValidationCheck;

mod best_signature_time_inside_certificate_validity;
pub use best_signature_time_inside_certificate_validity::BestSignatureTimeInsideCertificateValidityCheck;

mod best_signature_time_not_before_certificate_issuance;
pub use best_signature_time_not_before_certificate_issuance::BestSignatureTimeNotBeforeCertificateIssuanceCheck;

mod cryptographic;
pub use cryptographic::CryptographicCheck;

mod revocation_basic_building_blocks;
pub use revocation_basic_building_blocks::RevocationBasicBuildingBlocksCheck;

mod revocation_date_after_best_signature_time;
pub use revocation_date_after_best_signature_time::RevocationDateAfterBestSignatureTimeCheck;

mod signing_time_attribute_present;
pub use signing_time_attribute_present::SigningTimeAttributePresentCheck;

mod timestamp_coherence_order;
pub use timestamp_coherence_order::TimestampCoherenceOrderCheck;

mod timestamp_delay;
pub use timestamp_delay::TimestampDelayCheck;
