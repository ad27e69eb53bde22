//! Whole-interview audits: traversal order, extension registries, output shape.

use futures::FutureExt;
use futures::future::BoxFuture;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use svy_audits::context::{SegmentAuditContext, TripAuditContext};
use svy_audits::{
    AuditCheck, AuditConfig, AuditRegistries, CheckError, CheckOutcome, CheckRegistry, CheckResult,
    audit_interview, merge_registries,
};
use svy_core::audit::AuditForObject;
use svy_core::entities::Interview;
use svy_core::enums::{AuditLevel, ObjectType};

const INTERVIEW: &str = include_str!("fixtures/interview_with_issues.json");

fn fixture() -> Interview {
    Interview::from_json(INTERVIEW).unwrap()
}

fn summary(audits: &[AuditForObject]) -> Vec<(ObjectType, &str, &str, AuditLevel)> {
    audits
        .iter()
        .map(|a| (a.object_type, a.object_uuid.as_str(), a.error_code.as_str(), a.level))
        .collect()
}

#[tokio::test]
async fn findings_follow_the_tree_top_down() {
    let interview = fixture();
    let config = AuditConfig::default();
    let registries = AuditRegistries::baseline();

    let audits = audit_interview(&interview, &config, &registries).await.unwrap();

    assert_eq!(
        summary(&audits),
        [
            (ObjectType::Home, "home-42", "HM_L_PreGeographyFarWarning", AuditLevel::Warning),
            (ObjectType::Household, "hh-42", "HH_L_SizeMembersMismatch", AuditLevel::Warning),
            (ObjectType::Journey, "jo-1", "J_L_EndBeforeStart", AuditLevel::Error),
            (ObjectType::Segment, "seg-1", "S_L_DriverWithoutLicense", AuditLevel::Warning),
            (ObjectType::Trip, "tr-2", "T_I_UnknownVisitedPlace", AuditLevel::Error),
            (ObjectType::Segment, "seg-2", "S_I_Mode", AuditLevel::Error),
            (ObjectType::Person, "per-2", "P_I_Age", AuditLevel::Error),
        ]
    );
    assert!(audits.iter().all(|a| a.version == 1 && !a.ignore));
    assert_eq!(
        audits[4].message,
        "Trip refers to visited places not in its journey: vp-9"
    );
}

#[tokio::test]
async fn interview_without_household_audits_interview_and_home() {
    let interview = Interview {
        household: None,
        started_at: None,
        ..fixture()
    };
    let config = AuditConfig::default();
    let registries = AuditRegistries::baseline();

    let audits = audit_interview(&interview, &config, &registries).await.unwrap();

    assert_eq!(
        summary(&audits),
        [
            (ObjectType::Interview, "itv-42", "I_M_StartedAt", AuditLevel::Error),
            (ObjectType::Home, "home-42", "HM_L_PreGeographyFarWarning", AuditLevel::Warning),
        ]
    );
}

fn long_trip(ctx: &TripAuditContext<'_>) -> CheckResult {
    if ctx.trip.segments.len() < 2 {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(format!(
        "Trip has {} segments",
        ctx.trip.segments.len()
    ))))
}

fn quiet_mode(_: &SegmentAuditContext<'_>) -> CheckResult {
    Ok(None)
}

#[tokio::test]
async fn extension_checks_add_and_override() {
    let interview = fixture();
    let config = AuditConfig::default();
    let mut registries = AuditRegistries::baseline();
    registries.trip = merge_registries(
        registries.trip,
        CheckRegistry::new().with("T_L_ManySegments", AuditCheck::sync(long_trip)),
    );
    registries.segment = merge_registries(
        registries.segment,
        CheckRegistry::new().with("S_I_Mode", AuditCheck::sync(quiet_mode)),
    );

    let audits = audit_interview(&interview, &config, &registries).await.unwrap();
    let codes: Vec<&str> = audits.iter().map(|a| a.error_code.as_str()).collect();

    assert!(codes.contains(&"T_L_ManySegments"));
    assert!(!codes.contains(&"S_I_Mode"));
}

fn unreachable_service<'c>(_: &'c SegmentAuditContext<'_>) -> BoxFuture<'c, CheckResult> {
    async { Err(CheckError::Failed("routing service unreachable".into())) }.boxed()
}

#[tokio::test]
async fn a_broken_check_fails_the_whole_interview() {
    let interview = fixture();
    let config = AuditConfig::default();
    let mut registries = AuditRegistries::baseline();
    registries
        .segment
        .insert("S_L_Routing", AuditCheck::from_async(unreachable_service));

    let err = audit_interview(&interview, &config, &registries).await.unwrap_err();

    assert_eq!(err.to_string(), "Audit check failed: routing service unreachable");
}

#[tokio::test]
async fn findings_match_their_json_schema() {
    let interview = fixture();
    let config = AuditConfig::default();
    let registries = AuditRegistries::baseline();

    let audits = audit_interview(&interview, &config, &registries).await.unwrap();

    let schema = serde_json::to_value(schema_for!(Vec<AuditForObject>)).unwrap();
    let instance = serde_json::to_value(&audits).unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();
    let errors: Vec<String> = validator.iter_errors(&instance).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "{errors:?}");

    assert_eq!(instance[0]["objectType"], "home");
    assert_eq!(instance[0]["errorCode"], "HM_L_PreGeographyFarWarning");
    assert_eq!(instance[0]["level"], "warning");
}
