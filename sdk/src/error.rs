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

use thiserror::Error;

/// `Error` enumerates contract violations detected while setting up or
/// running the long-term validation process.
///
/// Expected validation outcomes are never reported as errors; they resolve to
/// a [`Verdict`](crate::Verdict) instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The validation process for basic signatures produced no conclusion.
    #[error("basic signature validation result is missing")]
    MissingBasicSignatureValidation,

    /// The diagnostic data does not describe the requested signature.
    #[error("signature not found: id = {id}")]
    SignatureNotFound {
        /// Id of the requested signature.
        id: String,
    },

    /// A check requires the signing certificate, but the diagnostic data
    /// doesn't contain it.
    #[error("signing certificate not found for signature {signature_id}")]
    MissingSigningCertificate {
        /// Id of the signature being validated.
        signature_id: String,
    },

    /// A configuration value was rejected.
    #[error("bad parameter: {0}")]
    BadParam(String),

    /// The configuration format is not supported.
    #[error("type is unsupported")]
    UnsupportedType,
}

/// A specialized `Result` type for long-term validation operations.
pub type Result<T> = std::result::Result<T, Error>;
