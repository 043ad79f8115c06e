// SPDX-License-Identifier: Apache-2.0

use cir_gate_core::{format_location, ErrorCode, ErrorItem, Segment};
use cir_gate_model::{decode_cir_json, AcceptanceCriterion, Cir, CirDecodeError};
use cir_gate_policies::Policy;

use crate::density::placeholder_density;
use crate::report::Report;

const FUNCTIONAL_REQUIREMENTS: &str = "functional_requirements";

/// Validates `cir` against `policy` in one fixed-order pass.
///
/// Passes: metadata, AC count, per-AC checks in array order, externalized
/// state, placeholder density over the global string pool. Never fails and
/// never touches `cir`.
#[must_use]
pub fn validate_cir(cir: &Cir, policy: &Policy) -> Report {
    let span = tracing::debug_span!(
        "cir_validate",
        story_id = %cir.story_metadata.story_id,
        contract_version = %policy.contract_version()
    );
    let _entered = span.enter();

    let mut findings = Findings::default();
    let mut pool: Vec<&str> = Vec::new();

    check_metadata(cir, policy, &mut findings);
    check_acceptance_criteria_count(cir, policy, &mut findings);
    for (index, ac) in cir.functional_requirements.iter().enumerate() {
        check_acceptance_criterion(index, ac, policy, &mut findings);
        pool.extend(ac.text_items());
    }
    check_externalized_state(cir, policy, &mut findings);
    check_placeholder_density(&pool, policy, &mut findings);

    let report = Report::freeze(
        policy.contract_version().clone(),
        findings.errors,
        findings.warnings,
    );
    tracing::debug!(
        errors = report.errors().len(),
        warnings = report.warnings().len(),
        is_valid = report.is_valid(),
        "cir validation finished"
    );
    report
}

/// Decodes then validates. Decode failures are boundary violations, not findings.
pub fn validate_cir_json(raw: &str, policy: &Policy) -> Result<Report, CirDecodeError> {
    let cir = decode_cir_json(raw)?;
    Ok(validate_cir(&cir, policy))
}

/// A policy bound to a validation entry point. Cheap to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'p> {
    policy: &'p Policy,
}

impl<'p> Validator<'p> {
    #[must_use]
    pub const fn new(policy: &'p Policy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &'p Policy {
        self.policy
    }

    #[must_use]
    pub fn validate(&self, cir: &Cir) -> Report {
        validate_cir(cir, self.policy)
    }

    pub fn validate_json(&self, raw: &str) -> Result<Report, CirDecodeError> {
        validate_cir_json(raw, self.policy)
    }
}

#[derive(Default)]
struct Findings {
    errors: Vec<ErrorItem>,
    warnings: Vec<ErrorItem>,
}

impl Findings {
    fn error(&mut self, item: ErrorItem) {
        tracing::debug!(code = %item.code(), location = item.location(), "validation error");
        self.errors.push(item);
    }

    fn warning(&mut self, item: ErrorItem) {
        tracing::debug!(code = %item.code(), location = item.location(), "validation warning");
        self.warnings.push(item);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn ac_location(index: usize, field: Option<&str>) -> String {
    match field {
        Some(name) => format_location(&[
            Segment::Field(FUNCTIONAL_REQUIREMENTS),
            Segment::Index(index),
            Segment::Field(name),
        ]),
        None => format_location(&[Segment::Field(FUNCTIONAL_REQUIREMENTS), Segment::Index(index)]),
    }
}

fn with_ac_notes(item: ErrorItem, ac: &AcceptanceCriterion) -> ErrorItem {
    if is_blank(&ac.ac_id) {
        item
    } else {
        item.with_notes(format!("ac_id={}", ac.ac_id.trim()))
    }
}

fn check_metadata(cir: &Cir, policy: &Policy, findings: &mut Findings) {
    let meta = &cir.story_metadata;
    if policy.require_story_id() && is_blank(&meta.story_id) {
        findings.error(ErrorItem::new(
            ErrorCode::MissingStoryId,
            format_location(&[Segment::Field("story_metadata"), Segment::Field("story_id")]),
            "story_metadata.story_id is blank",
        ));
    }
    if policy.require_story_name() && is_blank(&meta.name) {
        findings.error(ErrorItem::new(
            ErrorCode::MissingStoryName,
            format_location(&[Segment::Field("story_metadata"), Segment::Field("name")]),
            "story_metadata.name is blank",
        ));
    }
}

fn check_acceptance_criteria_count(cir: &Cir, policy: &Policy, findings: &mut Findings) {
    let n = cir.acceptance_criteria_count();
    let min = policy.min_acceptance_criteria();
    let max = policy.max_acceptance_criteria();
    if n < min {
        findings.error(ErrorItem::new(
            ErrorCode::TooFewAcceptanceCriteria,
            FUNCTIONAL_REQUIREMENTS,
            format!("expected at least {min} acceptance criteria, found {n}"),
        ));
    }
    if n > max {
        findings.warning(ErrorItem::new(
            ErrorCode::TooManyAcceptanceCriteria,
            FUNCTIONAL_REQUIREMENTS,
            format!("{n} acceptance criteria exceed the maximum of {max}; possible over-segmentation"),
        ));
    }
}

fn check_acceptance_criterion(
    index: usize,
    ac: &AcceptanceCriterion,
    policy: &Policy,
    findings: &mut Findings,
) {
    if is_blank(&ac.ac_id) {
        findings.error(ErrorItem::new(
            ErrorCode::AcMissingId,
            ac_location(index, Some("ac_id")),
            "acceptance criterion has a blank ac_id",
        ));
    }
    if is_blank(&ac.description) {
        findings.error(with_ac_notes(
            ErrorItem::new(
                ErrorCode::AcMissingDescription,
                ac_location(index, Some("description")),
                "acceptance criterion has a blank description",
            ),
            ac,
        ));
    }
    let min_outcomes = policy.min_expected_outcomes_per_ac();
    if ac.expected_outcome.len() < min_outcomes {
        findings.error(with_ac_notes(
            ErrorItem::new(
                ErrorCode::AcMissingExpectedOutcome,
                ac_location(index, Some("expected_outcome")),
                format!(
                    "expected at least {min_outcomes} expected_outcome entries, found {}",
                    ac.expected_outcome.len()
                ),
            ),
            ac,
        ));
    }
    let steps = ac.step_count();
    let cap = policy.max_steps_like_items_per_ac();
    if steps > cap {
        findings.warning(with_ac_notes(
            ErrorItem::new(
                ErrorCode::AcStepCountOverCap,
                ac_location(index, None),
                format!(
                    "{steps} preconditions, triggers and expected outcomes exceed the cap of {cap}"
                ),
            ),
            ac,
        ));
    }
}

fn check_externalized_state(cir: &Cir, policy: &Policy, findings: &mut Findings) {
    let state = &cir.state_and_external_persistence;
    if state.externalized_state_required
        && policy.require_rules_if_externalized_state()
        && state.rules.is_empty()
    {
        findings.warning(ErrorItem::new(
            ErrorCode::ExternalizedStateWithoutRules,
            format_location(&[
                Segment::Field("state_and_external_persistence"),
                Segment::Field("rules"),
            ]),
            "externalized state is required but no persistence rules are listed",
        ));
    }
}

fn check_placeholder_density(pool: &[&str], policy: &Policy, findings: &mut Findings) {
    let count = placeholder_density(pool.iter().copied());
    let Some(ratio) = count.ratio() else {
        return;
    };
    if !policy.allow_tbd_fields() && count.placeholder_count > 0 {
        findings.error(ErrorItem::new(
            ErrorCode::PlaceholdersNotAllowed,
            FUNCTIONAL_REQUIREMENTS,
            format!(
                "{} of {} text values are TBD/UNKNOWN placeholders; placeholders are not allowed by policy",
                count.placeholder_count, count.total_count
            ),
        ));
    } else if ratio > policy.max_tbd_density_ratio() {
        findings.warning(ErrorItem::new(
            ErrorCode::PlaceholderDensityOverThreshold,
            FUNCTIONAL_REQUIREMENTS,
            format!(
                "placeholder density {:.1}% ({} of {}) exceeds the maximum of {:.1}%",
                ratio * 100.0,
                count.placeholder_count,
                count.total_count,
                policy.max_tbd_density_ratio() * 100.0
            ),
        ));
    }
}
