use hr_copilot::actions::FollowUp;
use hr_copilot::decisions::RiskKind;
use hr_copilot::decisions::DecisionService;
use hr_copilot::engagement::EngagementLevel;
use hr_copilot::facts::{seed_sample_organisation, EmployeeId, InMemoryFactStore};
use hr_copilot::survey::{sync_engagement, SurveyError, SurveyImporter};
use std::path::PathBuf;
use std::sync::Arc;

fn write_survey(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hr-copilot-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("survey fixture written");
    path
}

#[test]
fn survey_file_drives_triage() {
    let path = write_survey(
        "triage.csv",
        "employee_id,score,comment\n1,1,overloaded\n2,4,\n3,3,steady\n",
    );
    let store = Arc::new(InMemoryFactStore::new());
    seed_sample_organisation(store.as_ref(), false).expect("seed");

    let records = SurveyImporter::from_path(&path).expect("survey loads");
    let summary = sync_engagement(store.as_ref(), &records).expect("sync");
    std::fs::remove_file(&path).ok();

    assert_eq!(summary.updated, 3);
    assert!(summary.survey_only.is_empty());

    let service = DecisionService::new(store);
    let alice = service
        .triage(&EmployeeId::new("E1"))
        .expect("store available")
        .found()
        .expect("Alice triaged");
    assert_eq!(alice.engagement, EngagementLevel::Low);
    assert_eq!(alice.follow_up, FollowUp::NotifyManager);

    let carol = service
        .triage(&EmployeeId::new("E3"))
        .expect("store available")
        .found()
        .expect("Carol triaged");
    assert_eq!(carol.engagement, EngagementLevel::Medium);
    assert_eq!(carol.follow_up, FollowUp::Observe);

    assert!(!service
        .triage(&EmployeeId::new("E4"))
        .expect("store available")
        .is_found());
}

#[test]
fn survey_only_ids_are_triaged() {
    let path = write_survey("survey-only.csv", "employee_id,score
5,1
6,5
");
    let store = Arc::new(InMemoryFactStore::new());
    seed_sample_organisation(store.as_ref(), false).expect("seed");

    let records = SurveyImporter::from_path(&path).expect("survey loads");
    let summary = sync_engagement(store.as_ref(), &records).expect("sync");
    std::fs::remove_file(&path).ok();

    assert_eq!(summary.updated, 0);
    assert_eq!(summary.survey_only, vec!["E5".to_string(), "E6".to_string()]);

    let service = DecisionService::new(store);
    let low = service
        .triage(&EmployeeId::new("E5"))
        .expect("store available")
        .found()
        .expect("E5 triaged");
    assert!(low.employee.is_none());
    assert_eq!(low.risk.risk, RiskKind::Burnout);
    assert_eq!(low.follow_up, FollowUp::NotifyManager);

    let high = service
        .triage(&EmployeeId::new("E6"))
        .expect("store available")
        .found()
        .expect("E6 triaged");
    assert_eq!(high.follow_up, FollowUp::Observe);
}

#[test]
fn malformed_survey_is_a_csv_error() {
    let path = write_survey("malformed.csv", "employee_id,score\nE1,high\n");

    let error = SurveyImporter::from_path(&path).expect_err("invalid rows");
    std::fs::remove_file(&path).ok();

    assert!(matches!(error, SurveyError::Csv(_)));
}
