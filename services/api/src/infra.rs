use chrono::NaiveDate;
use hr_copilot::config::FactStoreConfig;
use hr_copilot::engagement::EngagementLevel;
use hr_copilot::error::AppError;
use hr_copilot::facts::{seed_sample_organisation, FactStore, InMemoryFactStore};
use hr_copilot::survey::{sync_engagement, SurveyImporter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds a fresh in-memory fact store: sample seed first, then the survey sync.
pub(crate) fn bootstrap_store(
    config: &FactStoreConfig,
) -> Result<Arc<InMemoryFactStore>, AppError> {
    let store = Arc::new(InMemoryFactStore::new());

    if config.seed_sample_org {
        seed_sample_organisation(store.as_ref(), false)?;
    }

    if let Some(path) = &config.survey_path {
        let records = SurveyImporter::from_path(path)?;
        sync_engagement(store.as_ref(), &records)?;
    }

    info!(employees = store.employee_count()?, "fact store ready");
    Ok(store)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_engagement(raw: &str) -> Result<EngagementLevel, String> {
    raw.parse::<EngagementLevel>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_copilot::facts::EmployeeId;

    #[test]
    fn bootstrap_seeds_sample_organisation() {
        let store = bootstrap_store(&FactStoreConfig::default()).expect("store builds");

        assert_eq!(store.employee_count().expect("count"), 4);
        assert!(store
            .employee(&EmployeeId::new("E2"))
            .expect("read")
            .is_some());
    }

    #[test]
    fn bootstrap_can_start_empty() {
        let config = FactStoreConfig {
            survey_path: None,
            seed_sample_org: false,
        };

        let store = bootstrap_store(&config).expect("store builds");

        assert_eq!(store.employee_count().expect("count"), 0);
    }

    #[test]
    fn bootstrap_syncs_survey_after_seeding() {
        let path = std::env::temp_dir().join(format!(
            "hr-copilot-api-{}-bootstrap.csv",
            std::process::id()
        ));
        std::fs::write(&path, "employee_id,score\n1,1\n7,2\n").expect("survey written");
        let config = FactStoreConfig {
            survey_path: Some(path.clone()),
            seed_sample_org: true,
        };

        let store = bootstrap_store(&config);
        std::fs::remove_file(&path).ok();
        let store = store.expect("store builds");

        assert_eq!(store.employee_count().expect("count"), 4);
        let alice = store
            .employee(&EmployeeId::new("E1"))
            .expect("read")
            .expect("Alice seeded");
        assert_eq!(alice.engagement, Some(EngagementLevel::Low));
        assert_eq!(
            store.engagement_of(&EmployeeId::new("E7")).expect("read"),
            Some(EngagementLevel::Low)
        );
    }

    #[test]
    fn bootstrap_surfaces_missing_survey() {
        let config = FactStoreConfig {
            survey_path: Some("./missing-survey.csv".into()),
            seed_sample_org: true,
        };

        assert!(matches!(
            bootstrap_store(&config),
            Err(AppError::Survey(_))
        ));
    }

    #[test]
    fn parsers_reject_bad_input() {
        assert!(parse_date("2025-13-01").is_err());
        assert_eq!(
            parse_date(" 2025-03-03 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date"))
        );
        assert_eq!(parse_engagement("low"), Ok(EngagementLevel::Low));
        assert!(parse_engagement("ecstatic").is_err());
    }
}
