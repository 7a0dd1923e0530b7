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

//! Read-only view of the diagnostic data collected for a validation job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of time-stamp token, as determined by the data it was computed over.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampType {
    /// Content time-stamp computed over the signed data objects.
    ContentTimestamp,

    /// Time-stamp computed over all signed data objects.
    AllDataObjectsTimestamp,

    /// Time-stamp computed over some individual signed data objects.
    IndividualDataObjectsTimestamp,

    /// Time-stamp computed over the signature value.
    SignatureTimestamp,

    /// Time-stamp computed over the references to validation data only.
    ValidationDataRefsOnlyTimestamp,

    /// Time-stamp computed over the signature and the references to
    /// validation data.
    ValidationDataTimestamp,

    /// Archive time-stamp.
    ArchiveTimestamp,
}

impl TimestampType {
    /// Position of this kind of time-stamp in the expected chronological order
    /// of a signature's time-stamps.
    ///
    /// Time-stamps over signed data come first, followed by signature
    /// time-stamps, time-stamps over validation data, and archive time-stamps.
    pub fn coherence_rank(&self) -> u8 {
        match self {
            Self::ContentTimestamp
            | Self::AllDataObjectsTimestamp
            | Self::IndividualDataObjectsTimestamp => 0,
            Self::SignatureTimestamp => 1,
            Self::ValidationDataRefsOnlyTimestamp | Self::ValidationDataTimestamp => 2,
            Self::ArchiveTimestamp => 3,
        }
    }
}

/// A time-stamp token attached to a signature.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimestampToken {
    /// Unique id of the token within the diagnostic data.
    pub id: String,

    /// Kind of time-stamp.
    #[serde(default = "default_timestamp_type")]
    pub timestamp_type: TimestampType,

    /// Generation time claimed by the time-stamping authority.
    pub production_time: DateTime<Utc>,

    /// `true` if the data covered by the message imprint could be located.
    pub message_imprint_found: bool,

    /// `true` if the message imprint matches the covered data.
    pub message_imprint_intact: bool,
}

fn default_timestamp_type() -> TimestampType {
    TimestampType::SignatureTimestamp
}

impl TimestampToken {
    /// Returns `true` if the message imprint was found and matches the data it
    /// attests to.
    pub fn has_valid_message_imprint(&self) -> bool {
        self.message_imprint_found && self.message_imprint_intact
    }
}

/// Revocation evidence (CRL or OCSP response) consulted during validation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RevocationToken {
    /// Unique id of the token within the diagnostic data.
    pub id: String,
}

impl RevocationToken {
    /// Creates a token reference with the given id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

/// The subset of an X.509 certificate used by this validation process.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CertificateInfo {
    /// Unique id of the certificate within the diagnostic data.
    pub id: String,

    /// Start of the validity period (issuance date).
    pub not_before: DateTime<Utc>,

    /// End of the validity period (expiration date).
    pub not_after: DateTime<Utc>,

    /// Revocation time, if the certificate was found to be revoked.
    #[serde(default)]
    pub revocation_date: Option<DateTime<Utc>>,
}

/// The subset of a signature used by this validation process.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SignatureInfo {
    /// Unique id of the signature within the diagnostic data.
    pub id: String,

    /// Id of the signing certificate, if it could be identified.
    pub signing_certificate_id: Option<String>,

    /// Claimed signing time (signing-time attribute or property).
    pub signing_time: Option<DateTime<Utc>>,

    /// Signature (encryption) algorithm, e.g. `RSA` or `ECDSA`.
    pub encryption_algorithm: Option<String>,

    /// Digest algorithm, e.g. `SHA256`.
    pub digest_algorithm: Option<String>,

    /// Public key length in bits.
    pub key_length: Option<u32>,

    /// Ids of the time-stamp tokens attached to this signature.
    pub timestamp_ids: Vec<String>,
}

impl SignatureInfo {
    /// Creates a signature description with the given id and no other
    /// properties.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Diagnostic data collected for one validation job.
///
/// Owned by the caller; the validation process only reads and filters it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DiagnosticData {
    /// Signatures found in the signed document.
    pub signatures: Vec<SignatureInfo>,

    /// Certificates used anywhere in the validation job.
    pub certificates: Vec<CertificateInfo>,

    /// Revocation data used anywhere in the validation job.
    pub revocations: Vec<RevocationToken>,

    /// Time-stamp tokens found in the signed document.
    pub timestamps: Vec<TimestampToken>,
}

impl DiagnosticData {
    /// Look up a signature by id.
    pub fn signature(&self, id: &str) -> Option<&SignatureInfo> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Look up a certificate by id.
    pub fn certificate(&self, id: &str) -> Option<&CertificateInfo> {
        self.certificates.iter().find(|c| c.id == id)
    }

    /// Look up the signing certificate of a signature.
    pub fn signing_certificate(&self, signature: &SignatureInfo) -> Option<&CertificateInfo> {
        signature
            .signing_certificate_id
            .as_deref()
            .and_then(|id| self.certificate(id))
    }

    /// Returns the time-stamp tokens attached to the given signature, in the
    /// order the signature references them.
    ///
    /// References to unknown tokens are ignored.
    pub fn timestamps_for(&self, signature_id: &str) -> Vec<&TimestampToken> {
        let Some(signature) = self.signature(signature_id) else {
            return vec![];
        };

        signature
            .timestamp_ids
            .iter()
            .filter_map(|id| self.timestamps.iter().find(|ts| &ts.id == id))
            .collect()
    }

    /// Returns the set of revocation tokens across the whole validation job,
    /// sorted by id and without duplicates.
    pub fn all_revocation_data(&self) -> Vec<&RevocationToken> {
        let mut revocations: Vec<&RevocationToken> = self.revocations.iter().collect();
        revocations.sort_by(|a, b| a.id.cmp(&b.id));
        revocations.dedup_by(|a, b| a.id == b.id);
        revocations
    }
}
