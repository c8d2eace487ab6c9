use crate::cli::GlobalArgs;
use crate::infra::{bootstrap_store, parse_engagement};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use hr_copilot::config::AppConfig;
use hr_copilot::decisions::{
    ActionPlan, Assessment, DecisionService, Lookup, OrganizationalAnalytics, PlannedAction,
    StrategicDecision, StrategicRequest, Triage,
};
use hr_copilot::engagement::{EngagementLevel, EngagementRecord};
use hr_copilot::error::AppError;
use hr_copilot::facts::{EmployeeId, EmployeeSnapshot, InMemoryFactStore};
use hr_copilot::survey::{sync_engagement, SurveyImporter, SyncSummary};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EmployeeArgs {
    /// Employee id, e.g. E1
    pub(crate) employee_id: String,
    /// Engagement level to evaluate against (low, medium, high)
    #[arg(long, value_parser = parse_engagement)]
    pub(crate) engagement: Option<EngagementLevel>,
    /// Print the raw JSON payload instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DecisionKind {
    Promotion,
    SkillDevelopment,
    OrgHealth,
}

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    #[arg(value_enum)]
    pub(crate) kind: DecisionKind,
    /// Employee the promotion or skill-development decision is about
    #[arg(
        long,
        required_if_eq_any([("kind", "promotion"), ("kind", "skill-development")])
    )]
    pub(crate) employee: Option<String>,
    /// Print the raw JSON payload instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SurveyArgs {
    /// Survey CSV with employee_id and score columns
    pub(crate) path: PathBuf,
}

fn load_service(global: &GlobalArgs) -> Result<DecisionService<InMemoryFactStore>, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = &global.survey {
        config.facts.survey_path = Some(path.clone());
    }
    let store = bootstrap_store(&config.facts)?;
    Ok(DecisionService::new(store))
}

fn resolve_today(global: &GlobalArgs) -> NaiveDate {
    global.today.unwrap_or_else(|| Local::now().date_naive())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("payload unavailable: {err}"),
    }
}

pub(crate) fn run_assessment(args: EmployeeArgs, global: &GlobalArgs) -> Result<(), AppError> {
    let service = load_service(global)?;
    let id = EmployeeId::new(args.employee_id);
    let outcome = service.comprehensive_assessment(&id, args.engagement, resolve_today(global))?;

    if args.json {
        print_json(&outcome);
        return Ok(());
    }
    match outcome {
        Lookup::Found(assessment) => render_assessment(&assessment),
        Lookup::NotFound { message } => println!("{id}: {message}"),
    }
    Ok(())
}

pub(crate) fn run_plan(args: EmployeeArgs, global: &GlobalArgs) -> Result<(), AppError> {
    let service = load_service(global)?;
    let id = EmployeeId::new(args.employee_id);
    let outcome = service.create_action_plan(&id, args.engagement, resolve_today(global))?;

    if args.json {
        print_json(&outcome);
        return Ok(());
    }
    match outcome {
        Lookup::Found(plan) => render_plan(&plan),
        Lookup::NotFound { message } => println!("{id}: {message}"),
    }
    Ok(())
}

pub(crate) fn run_org_analytics(global: &GlobalArgs) -> Result<(), AppError> {
    let service = load_service(global)?;
    let analytics = service.organizational_analytics(resolve_today(global))?;
    render_analytics(&analytics);
    Ok(())
}

/// Maps the CLI decision kind onto a request; `None` when a required employee is missing.
fn strategic_request(kind: DecisionKind, employee: Option<String>) -> Option<StrategicRequest> {
    match (kind, employee) {
        (DecisionKind::OrgHealth, _) => Some(StrategicRequest::OrganizationalHealth),
        (DecisionKind::Promotion, Some(employee)) => Some(StrategicRequest::Promotion {
            employee_id: EmployeeId::new(employee),
        }),
        (DecisionKind::SkillDevelopment, Some(employee)) => {
            Some(StrategicRequest::SkillDevelopment {
                employee_id: EmployeeId::new(employee),
            })
        }
        (_, None) => None,
    }
}

pub(crate) fn run_decision(args: DecideArgs, global: &GlobalArgs) -> Result<(), AppError> {
    let Some(request) = strategic_request(args.kind, args.employee) else {
        println!("--employee is required for {:?} decisions", args.kind);
        return Ok(());
    };

    let service = load_service(global)?;
    let outcome = service.strategic_decision(&request, resolve_today(global))?;

    if args.json {
        print_json(&outcome);
        return Ok(());
    }
    match outcome {
        Lookup::Found(decision) => render_decision(&decision),
        Lookup::NotFound { message } => println!("{message}"),
    }
    Ok(())
}

pub(crate) fn run_survey(args: SurveyArgs) -> Result<(), AppError> {
    let records = SurveyImporter::from_path(&args.path)?;
    let mut config = AppConfig::load()?;
    config.facts.survey_path = None;
    let store = bootstrap_store(&config.facts)?;
    let summary = sync_engagement(store.as_ref(), &records)?;

    println!("Survey engagement ({} rows)", records.len());
    for record in &records {
        println!("{}", survey_line(record));
    }
    for line in sync_lines(&summary) {
        println!("{line}");
    }

    let service = DecisionService::new(store);
    for record in &records {
        if let Lookup::Found(triage) = service.triage(&record.employee_id)? {
            println!("{}", triage_line(&triage));
        }
    }
    Ok(())
}

fn survey_line(record: &EngagementRecord) -> String {
    format!(
        "- {}: score {:.1} -> {} ({}; {})",
        record.employee_id,
        record.score,
        record.engagement,
        record.engagement.description(),
        record.engagement.interpretation()
    )
}

fn sync_lines(summary: &SyncSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Synced onto {} employee(s); {} survey-only",
        summary.updated,
        summary.survey_only.len()
    )];
    if !summary.survey_only.is_empty() {
        lines.push(format!(
            "  Survey-only ids: {}",
            summary.survey_only.join(", ")
        ));
    }
    lines
}

fn triage_line(triage: &Triage) -> String {
    let who = match &triage.employee {
        Some(employee) => format!("{} ({})", employee.name, employee.id),
        None => format!("{} (survey only)", triage.employee_id),
    };
    format!(
        "  {who}: {:?} risk -> {}",
        triage.risk.risk,
        triage.follow_up.label()
    )
}

fn level_line(employee: &EmployeeSnapshot) -> String {
    format!(
        "- Level: {} ({}) | Role: {} | Department: {}",
        employee.level,
        employee.level.description(),
        employee.role.as_deref().unwrap_or("unassigned"),
        employee.department.as_deref().unwrap_or("unassigned")
    )
}

fn render_assessment(assessment: &Assessment) {
    let employee = &assessment.employee;
    println!(
        "Assessment for {} ({}) on {}",
        employee.name, employee.id, assessment.assessed_on
    );
    println!("{}", level_line(employee));
    if assessment.skills.is_empty() {
        println!("- Skills: none recorded");
    } else {
        println!("- Skills:");
        for (skill, proficiency) in &assessment.skills {
            println!("    - {skill}: {proficiency:?}");
        }
    }

    let promotion = &assessment.promotion_eligible;
    println!(
        "- Promotion: {} ({})",
        if promotion.eligible { "eligible" } else { "not eligible" },
        promotion.reason
    );

    let recommendations = &assessment.skill_recommendations;
    if recommendations.recommended_skills.is_empty() {
        println!("- Skill recommendations: none");
    } else {
        println!(
            "- Skill recommendations ({} priority): {}",
            recommendations.priority,
            recommendations.recommended_skills.join(", ")
        );
    }

    if let Some(context) = &assessment.engagement_analysis {
        println!(
            "- Engagement: {} ({})",
            context.engagement, context.interpretation
        );
        for factor in &context.risk_factors {
            println!("    risk: {factor}");
        }
        for opportunity in &context.opportunities {
            println!("    opportunity: {opportunity}");
        }
    }
    if let Some(actions) = &assessment.engagement_actions {
        println!("- Engagement actions:");
        for action in &actions.recommended_actions {
            println!("    - {action}");
        }
    }
}

fn render_plan(plan: &ActionPlan) {
    println!(
        "Action plan for {} ({}) over {}",
        plan.employee.name, plan.employee_id, plan.timeline
    );
    if plan.planned_actions.is_empty() {
        println!("- No actions required");
        return;
    }
    for action in &plan.planned_actions {
        match action {
            PlannedAction::SkillDevelopment {
                skills,
                priority,
                timeline,
            } => println!(
                "- Skill development [{priority}, {timeline}]: {}",
                skills.join(", ")
            ),
            PlannedAction::EngagementAction {
                actions,
                priority,
                timeline,
            } => {
                println!("- Engagement action [{priority}, {timeline}]:");
                for item in actions {
                    println!("    - {item}");
                }
            }
            PlannedAction::PromotionPathway {
                target_role,
                timeline,
            } => println!("- Promotion pathway [{timeline}]: {target_role}"),
        }
    }
}

fn render_analytics(analytics: &OrganizationalAnalytics) {
    println!("Organizational analytics on {}", analytics.analyzed_on);
    println!(
        "- Reporting lines: {}",
        analytics.team_structure.total_reports
    );
    for line in &analytics.team_structure.reporting_lines {
        println!(
            "    - {} -> {} ({})",
            line.employee, line.manager, line.manager_level
        );
    }
    println!("- Skill gaps: {}", analytics.skill_gaps.total_gaps);
    for gap in &analytics.skill_gaps.critical_skill_gaps {
        println!(
            "    - {} [{}]: {} expert(s)",
            gap.skill, gap.priority, gap.experts
        );
    }
}

fn render_decision(decision: &StrategicDecision) {
    match decision {
        StrategicDecision::Promotion {
            decision,
            reason,
            confidence,
            employee,
            ..
        } => {
            println!("Promotion decision for {} ({})", employee.name, employee.id);
            println!("- Verdict: {decision:?}");
            println!("- Reason: {reason}");
            if let Some(confidence) = confidence {
                println!("- Confidence: {:.0}%", confidence * 100.0);
            }
        }
        StrategicDecision::SkillDevelopment {
            decision,
            recommendations,
            employee,
            priority,
        } => {
            println!(
                "Skill development decision for {} ({})",
                employee.name, employee.id
            );
            println!("- Decision: {decision} ({priority} priority)");
            if recommendations.recommended_skills.is_empty() {
                println!("- Role requirements already covered");
            } else {
                println!(
                    "- Train on: {}",
                    recommendations.recommended_skills.join(", ")
                );
            }
        }
        StrategicDecision::OrganizationalStrategy {
            strategic_decisions,
            analytics,
        } => {
            render_analytics(analytics);
            println!("Strategic decisions:");
            for action in strategic_decisions {
                println!("- {:?}: {}", action.action, action.reason);
            }
        }
    }
}
