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

//! Validation process for signatures with time and signatures with long-term
//! validation data.
//!
//! [`LongTermValidation`] combines the result of the validation process for
//! basic signatures with the signature's time-stamps and revocation data. It
//! computes best-signature-time, the earliest time the signature is proven to
//! have existed, and uses it to re-evaluate basic validation failures that
//! lacked proof of existence.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ltv_status_tracker::{log_item, validation_codes::REVOCATION_BBB_MISSING, StatusTracker};
use serde::{Deserialize, Serialize};

use crate::{
    checks::{
        AcceptableBasicSignatureValidationCheck, BestSignatureTimeInsideCertificateValidityCheck,
        BestSignatureTimeNotBeforeCertificateIssuanceCheck, CryptographicCheck,
        RevocationBasicBuildingBlocksCheck, RevocationDateAfterBestSignatureTimeCheck,
        SigningTimeAttributePresentCheck, TimestampCoherenceOrderCheck, TimestampDelayCheck,
    },
    policy::{Context, Level},
    time_stamp, BasicBuildingBlocks, CertificateInfo, Chain, ChainReport, DiagnosticData, Error,
    Result, SignatureAnalysis, SignatureInfo, SubIndication, TimestampOutcome, TimestampToken,
    ValidationPolicy, Verdict,
};

const TITLE: &str =
    "Validation Process for Signatures with Time and Signatures with Long-Term Validation Data";

/// Long-term validation of one signature.
///
/// All inputs are borrowed for the duration of the validation run. The
/// process itself holds no mutable state, so the chain can be rebuilt or
/// validated repeatedly with the same result.
#[derive(Debug)]
pub struct LongTermValidation<'a> {
    signature: &'a SignatureInfo,
    basic_signature_validation: &'a ChainReport,
    timestamp_validations: &'a [TimestampOutcome],
    diagnostic_data: &'a DiagnosticData,
    revocation_bbbs: &'a HashMap<String, BasicBuildingBlocks>,
    policy: &'a ValidationPolicy,
    current_time: DateTime<Utc>,
}

/// A long-term validation chain that is ready to execute, together with the
/// values computed while building it.
///
/// The chain cannot be changed once built; it can only be inspected or
/// executed.
#[derive(Debug)]
pub struct LongTermChain<'a> {
    chain: Chain<'a>,
    best_signature_time: DateTime<Utc>,
    admitted: Vec<&'a TimestampToken>,
}

impl<'a> LongTermChain<'a> {
    /// Checks in execution order.
    pub fn chain(&self) -> &Chain<'a> {
        &self.chain
    }

    /// Best-signature-time used by the checks.
    pub fn best_signature_time(&self) -> DateTime<Utc> {
        self.best_signature_time
    }

    /// Time-stamps that passed the message imprint filter, sorted by id.
    pub fn admitted(&self) -> &[&'a TimestampToken] {
        &self.admitted
    }

    /// Executes the chain and produces the validation result.
    pub fn execute(self, validation_log: &mut impl StatusTracker) -> LongTermValidationResult {
        LongTermValidationResult {
            report: self.chain.execute(validation_log),
            best_signature_time: self.best_signature_time,
            admitted_timestamps: self.admitted.iter().map(|ts| ts.id.clone()).collect(),
        }
    }
}

/// Result of [`LongTermValidation::validate`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LongTermValidationResult {
    /// Report of the executed chain. Its conclusion is the final verdict.
    pub report: ChainReport,

    /// Best-signature-time the checks were evaluated against.
    pub best_signature_time: DateTime<Utc>,

    /// Ids of the time-stamps that passed the message imprint filter.
    pub admitted_timestamps: Vec<String>,
}

impl<'a> LongTermValidation<'a> {
    /// Prepares the long-term validation of the signature `signature_id`.
    ///
    /// `revocation_bbbs` maps revocation token ids to the conclusion of the
    /// basic building blocks run for that token. `current_time` is the
    /// validation time and the starting point of best-signature-time.
    ///
    /// Fails if `analysis` holds no basic signature validation report or
    /// `diagnostic_data` does not describe the signature.
    pub fn new(
        analysis: &'a SignatureAnalysis,
        diagnostic_data: &'a DiagnosticData,
        signature_id: &str,
        revocation_bbbs: &'a HashMap<String, BasicBuildingBlocks>,
        policy: &'a ValidationPolicy,
        current_time: DateTime<Utc>,
    ) -> Result<Self> {
        let basic_signature_validation = analysis
            .basic_signature_validation
            .as_ref()
            .ok_or(Error::MissingBasicSignatureValidation)?;

        let signature = diagnostic_data
            .signature(signature_id)
            .ok_or_else(|| Error::SignatureNotFound {
                id: signature_id.to_string(),
            })?;

        Ok(Self {
            signature,
            basic_signature_validation,
            timestamp_validations: &analysis.timestamp_validations,
            diagnostic_data,
            revocation_bbbs,
            policy,
            current_time,
        })
    }

    /// The signature being validated.
    pub fn signature(&self) -> &'a SignatureInfo {
        self.signature
    }

    /// Builds the chain of checks without executing it.
    ///
    /// Time-stamp admission and best-signature-time are computed here, and
    /// their diagnostics are added to `validation_log`. Which checks follow
    /// the revocation checks depends on the conclusion of the basic signature
    /// validation.
    ///
    /// Returns [`Error::MissingSigningCertificate`] if a check needs the
    /// signing certificate and the diagnostic data lacks it.
    pub fn build_chain(
        &self,
        validation_log: &mut impl StatusTracker,
    ) -> Result<LongTermChain<'a>> {
        let fail_level = self.policy.fail_level_constraint().level;
        let mut chain = Chain::new(TITLE);

        chain.push(AcceptableBasicSignatureValidationCheck::new(
            self.basic_signature_validation,
            fail_level,
        ));

        for revocation in self.diagnostic_data.all_revocation_data() {
            match self.revocation_bbbs.get(&revocation.id) {
                Some(bbb) => {
                    chain.push(RevocationBasicBuildingBlocksCheck::new(bbb, fail_level));
                }
                None => {
                    log_item!(
                        revocation.id.clone(),
                        "no basic building blocks result for revocation data",
                        "LongTermValidation::build_chain"
                    )
                    .validation_status(REVOCATION_BBB_MISSING)
                    .informational(validation_log);
                }
            }
        }

        let mut timestamps = self.diagnostic_data.timestamps_for(&self.signature.id);
        timestamps.sort_by(|a, b| a.id.cmp(&b.id));
        timestamps.dedup_by(|a, b| a.id == b.id);

        let admitted = time_stamp::filter_invalid_message_imprint(&timestamps, validation_log);
        let best_signature_time = time_stamp::best_signature_time(
            self.current_time,
            &admitted,
            self.timestamp_validations,
            validation_log,
        );

        log::debug!(
            "best-signature-time for signature {} is {best_signature_time} ({} of {} time-stamps admitted)",
            self.signature.id,
            admitted.len(),
            timestamps.len()
        );

        match self.basic_signature_validation.conclusion {
            Verdict::Indeterminate(SubIndication::RevokedNoPoe) => {
                chain.push(RevocationDateAfterBestSignatureTimeCheck::new(
                    self.signing_certificate()?,
                    best_signature_time,
                    fail_level,
                ));
            }

            Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe) => {
                let cert = self.signing_certificate()?;
                chain
                    .push(BestSignatureTimeNotBeforeCertificateIssuanceCheck::new(
                        cert,
                        best_signature_time,
                        fail_level,
                    ))
                    .push(BestSignatureTimeInsideCertificateValidityCheck::new(
                        cert,
                        best_signature_time,
                        fail_level,
                    ));
            }

            Verdict::Indeterminate(SubIndication::CryptoConstraintsFailureNoPoe) => {
                chain.push(CryptographicCheck::new(
                    self.signature,
                    self.policy.signature_cryptographic_constraint(Context::Signature),
                    best_signature_time,
                ));
            }

            _ => {}
        }

        chain.push(TimestampCoherenceOrderCheck::new(admitted.clone(), fail_level));

        let delay = self.policy.timestamp_delay_signing_time_constraint();
        let delay_level = delay.map_or(Level::Ignore, |c| c.level);

        chain
            .push(SigningTimeAttributePresentCheck::new(self.signature, delay_level))
            .push(TimestampDelayCheck::new(
                self.signature,
                delay.and_then(|c| c.duration()),
                best_signature_time,
                delay_level,
            ));

        Ok(LongTermChain {
            chain,
            best_signature_time,
            admitted,
        })
    }

    /// Runs the long-term validation process.
    ///
    /// Every evaluated check and every diagnostic is added to
    /// `validation_log`. The conclusion of the returned report is the final
    /// verdict for the signature.
    pub fn validate(
        &self,
        validation_log: &mut impl StatusTracker,
    ) -> Result<LongTermValidationResult> {
        let result = self.build_chain(validation_log)?.execute(validation_log);

        log::debug!(
            "long-term validation of signature {} concluded {}",
            self.signature.id,
            result.report.conclusion
        );

        Ok(result)
    }

    fn signing_certificate(&self) -> Result<&'a CertificateInfo> {
        self.diagnostic_data
            .signing_certificate(self.signature)
            .ok_or_else(|| Error::MissingSigningCertificate {
                signature_id: self.signature.id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;
    use ltv_status_tracker::{
        validation_codes::{
            ACCEPTABLE_BASIC_SIGNATURE_VALIDATION, ALGORITHM_RELIABLE_AT_BEST_SIGNATURE_TIME,
            BEST_SIGNATURE_TIME_INSIDE_VALIDITY, BEST_SIGNATURE_TIME_NOT_BEFORE_ISSUANCE,
            REVOCATION_BBB_VALID, REVOCATION_DATE_AFTER_BEST_SIGNATURE_TIME, SIGNING_TIME_PRESENT,
            TIMESTAMP_COHERENCE_ORDER, TIMESTAMP_DELAY,
        },
        DetailedStatusTracker,
    };

    use super::*;
    use crate::{CheckStatus, RevocationToken};

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn analysis(conclusion: Verdict) -> SignatureAnalysis {
        SignatureAnalysis {
            basic_signature_validation: Some(ChainReport::new("basic", conclusion)),
            timestamp_validations: vec![],
        }
    }

    fn diagnostic_data() -> DiagnosticData {
        DiagnosticData {
            signatures: vec![SignatureInfo {
                signing_certificate_id: Some("C-1".into()),
                ..SignatureInfo::new("S-1")
            }],
            certificates: vec![CertificateInfo {
                id: "C-1".into(),
                not_before: at(2019),
                not_after: at(2029),
                revocation_date: None,
            }],
            revocations: vec![RevocationToken::new("R-2"), RevocationToken::new("R-1")],
            timestamps: vec![],
        }
    }

    fn codes(conclusion: Verdict, bbbs: &HashMap<String, BasicBuildingBlocks>) -> Vec<&'static str> {
        let analysis = analysis(conclusion);
        let data = diagnostic_data();
        let policy = ValidationPolicy::default();

        let ltv = LongTermValidation::new(&analysis, &data, "S-1", bbbs, &policy, at(2025)).unwrap();
        let built = ltv
            .build_chain(&mut DetailedStatusTracker::default())
            .unwrap();
        built.chain().codes()
    }

    #[test]
    fn chain_for_passed_signature() {
        assert_eq!(
            codes(Verdict::Passed, &HashMap::new()),
            vec![
                ACCEPTABLE_BASIC_SIGNATURE_VALIDATION,
                TIMESTAMP_COHERENCE_ORDER,
                SIGNING_TIME_PRESENT,
                TIMESTAMP_DELAY
            ]
        );
    }

    #[test]
    fn built_chain_executes_like_validate() {
        let analysis = analysis(Verdict::Passed);
        let data = diagnostic_data();
        let policy = ValidationPolicy::default();
        let bbbs = HashMap::new();

        let ltv = LongTermValidation::new(&analysis, &data, "S-1", &bbbs, &policy, at(2025)).unwrap();

        let mut tracker = DetailedStatusTracker::default();
        let built = ltv.build_chain(&mut tracker).unwrap();

        assert_eq!(built.chain().len(), 4);
        assert_eq!(built.best_signature_time(), at(2025));
        assert!(built.admitted().is_empty());

        let executed = built.execute(&mut tracker);
        assert_eq!(
            executed,
            ltv.validate(&mut DetailedStatusTracker::default()).unwrap()
        );
    }

    #[test]
    fn chain_per_upstream_sub_indication() {
        let none = HashMap::new();

        assert_eq!(
            codes(Verdict::Indeterminate(SubIndication::RevokedNoPoe), &none)[1],
            REVOCATION_DATE_AFTER_BEST_SIGNATURE_TIME
        );

        assert_eq!(
            codes(Verdict::Indeterminate(SubIndication::OutOfBoundsNoPoe), &none)[1..3],
            [
                BEST_SIGNATURE_TIME_NOT_BEFORE_ISSUANCE,
                BEST_SIGNATURE_TIME_INSIDE_VALIDITY
            ]
        );

        assert_eq!(
            codes(
                Verdict::Indeterminate(SubIndication::CryptoConstraintsFailureNoPoe),
                &none
            )[1],
            ALGORITHM_RELIABLE_AT_BEST_SIGNATURE_TIME
        );

        // unacceptable results get no branch checks
        assert_eq!(codes(Verdict::Failed(SubIndication::HashFailure), &none).len(), 4);
    }

    #[test]
    fn revocation_checks_and_missing_building_blocks() {
        let bbbs: HashMap<String, BasicBuildingBlocks> = ["R-2", "R-1"]
            .into_iter()
            .map(|id| {
                (
                    id.to_string(),
                    BasicBuildingBlocks {
                        id: id.to_string(),
                        conclusion: Verdict::Passed,
                    },
                )
            })
            .collect();

        let analysis = analysis(Verdict::Passed);
        let mut data = diagnostic_data();
        data.revocations.push(RevocationToken::new("R-3"));
        let policy = ValidationPolicy::default();

        let mut tracker = DetailedStatusTracker::default();
        let ltv = LongTermValidation::new(&analysis, &data, "S-1", &bbbs, &policy, at(2025)).unwrap();
        let result = ltv.validate(&mut tracker).unwrap();

        assert_eq!(result.report.codes()[1..3], [REVOCATION_BBB_VALID; 2]);
        assert!(tracker.has_status(REVOCATION_BBB_MISSING));
        assert_eq!(result.report.conclusion, Verdict::Passed);
    }

    #[test]
    fn delay_checks_ignored_without_constraint() {
        let analysis = analysis(Verdict::Passed);
        let data = diagnostic_data();
        let policy = ValidationPolicy::default();
        let bbbs = HashMap::new();

        let ltv = LongTermValidation::new(&analysis, &data, "S-1", &bbbs, &policy, at(2025)).unwrap();
        let result = ltv.validate(&mut DetailedStatusTracker::default()).unwrap();

        assert_eq!(result.best_signature_time, at(2025));
        assert_eq!(
            result.report.check(TIMESTAMP_DELAY).unwrap().status,
            CheckStatus::Ignored
        );
        assert_eq!(
            result.report.check(SIGNING_TIME_PRESENT).unwrap().status,
            CheckStatus::Ignored
        );
    }

    #[test]
    fn missing_signing_certificate() {
        let analysis = analysis(Verdict::Indeterminate(SubIndication::RevokedNoPoe));
        let mut data = diagnostic_data();
        data.certificates.clear();
        let policy = ValidationPolicy::default();
        let bbbs = HashMap::new();

        let ltv = LongTermValidation::new(&analysis, &data, "S-1", &bbbs, &policy, at(2025)).unwrap();
        assert!(matches!(
            ltv.validate(&mut DetailedStatusTracker::default()),
            Err(Error::MissingSigningCertificate { signature_id }) if signature_id == "S-1"
        ));
    }

    #[test]
    fn new_rejects_incomplete_inputs() {
        let data = diagnostic_data();
        let policy = ValidationPolicy::default();
        let bbbs = HashMap::new();

        assert!(matches!(
            LongTermValidation::new(
                &SignatureAnalysis::default(),
                &data,
                "S-1",
                &bbbs,
                &policy,
                at(2025)
            ),
            Err(Error::MissingBasicSignatureValidation)
        ));

        assert!(matches!(
            LongTermValidation::new(
                &analysis(Verdict::Passed),
                &data,
                "S-404",
                &bbbs,
                &policy,
                at(2025)
            ),
            Err(Error::SignatureNotFound { id }) if id == "S-404"
        ));
    }
}
