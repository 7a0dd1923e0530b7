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

//! Diagnostic status codes reported while validating a signature with time
//! and long-term validation data.
//!
//! Codes are attached to [`LogItem`](crate::LogItem)s via
//! [`LogItem::validation_status`](crate::LogItem::validation_status).

// -- informational codes --

/// A time-stamp token was removed from the set of signature time-stamp tokens
/// because its message imprint was not found or did not match the signed
/// data.
///
/// The label of the corresponding item is the time-stamp token's id.
pub const TIMESTAMP_MESSAGE_IMPRINT_REJECTED: &str = "timeStamp.messageImprint.rejected";

/// No time-stamp validation outcome was found for an admitted time-stamp
/// token. The token does not contribute to the best-signature-time.
///
/// The label of the corresponding item is the time-stamp token's id.
pub const TIMESTAMP_VALIDATION_MISSING: &str = "timeStamp.validation.missing";

/// A revocation token has no independent basic building block validation and
/// is not checked.
///
/// The label of the corresponding item is the revocation token's id.
pub const REVOCATION_BBB_MISSING: &str = "revocation.basicBuildingBlocks.missing";

/// The best-signature-time was moved earlier by a valid time-stamp token.
pub const BEST_SIGNATURE_TIME_UPDATED: &str = "bestSignatureTime.updated";

// -- check codes --

/// The validation process for basic signatures returned an acceptable result.
pub const ACCEPTABLE_BASIC_SIGNATURE_VALIDATION: &str = "ltv.basicSignatureValidation.acceptable";

/// A revocation token's basic building block validation concluded PASSED.
pub const REVOCATION_BBB_VALID: &str = "ltv.revocation.basicBuildingBlocks.valid";

/// The signing certificate's revocation is posterior to best-signature-time.
pub const REVOCATION_DATE_AFTER_BEST_SIGNATURE_TIME: &str =
    "ltv.revocationDate.afterBestSignatureTime";

/// Best-signature-time is not before the signing certificate's issuance.
pub const BEST_SIGNATURE_TIME_NOT_BEFORE_ISSUANCE: &str =
    "ltv.bestSignatureTime.notBeforeCertificateIssuance";

/// Best-signature-time falls inside the signing certificate's validity range.
pub const BEST_SIGNATURE_TIME_INSIDE_VALIDITY: &str =
    "ltv.bestSignatureTime.insideCertificateValidity";

/// The signature's algorithms were still reliable at best-signature-time.
pub const ALGORITHM_RELIABLE_AT_BEST_SIGNATURE_TIME: &str =
    "ltv.cryptographic.reliableAtBestSignatureTime";

/// The admitted time-stamp tokens are coherent in time.
pub const TIMESTAMP_COHERENCE_ORDER: &str = "ltv.timeStamp.coherenceOrder";

/// The signature carries a signing-time attribute.
pub const SIGNING_TIME_PRESENT: &str = "ltv.signingTime.present";

/// Signing time plus the policy's time-stamp delay is after
/// best-signature-time.
pub const TIMESTAMP_DELAY: &str = "ltv.timeStamp.delay";
