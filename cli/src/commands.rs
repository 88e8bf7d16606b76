//! Command handlers
//!
//! Each handler returns the text to print so callers (and tests) decide where
//! it goes.

use crate::cli::{CalculateArgs, Command, OutputArgs, ProjectArgs, RecommendArgs};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::render;
use crate::store::ReportStore;
use health_planner_shared::{
    build_plan, project_weight, DietPreference, Goal, HealthReport, WeightUnit,
};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Dispatch a parsed command
pub async fn run(command: Command, config: &AppConfig) -> AppResult<String> {
    let store = ReportStore::new(&config.storage.report_path);

    match command {
        Command::Calculate(args) => calculate(&args, config, &store).await,
        Command::Show(args) => show(&args, &store).await,
        Command::Project(args) => project(&args, config),
        Command::Recommend(args) => recommend(&args, config),
        Command::Clear => clear(&store).await,
    }
}

/// Compute a full plan and, unless disabled, overwrite the saved report
#[instrument(skip_all, fields(goal = %args.goal, diet = %args.diet))]
pub async fn calculate(args: &CalculateArgs, config: &AppConfig, store: &ReportStore) -> AppResult<String> {
    let input = args.to_input()?;
    let unit = args.output.display_unit()?;
    let periods = args.periods.unwrap_or(config.projection.periods);

    let plan = build_plan(&input, &config.diet.catalog, periods)?;
    debug!(
        bmi = plan.result.bmi,
        category = ?plan.result.bmi_category,
        calories = plan.result.daily_calorie_target,
        "Metrics computed"
    );

    if !args.no_save {
        store.save(&HealthReport::now(plan.input, plan.result)).await?;
    }

    if config.presentation.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.presentation.delay_ms)).await;
    }

    if args.output.json {
        to_json(&plan)
    } else {
        Ok(render::render_plan(&plan, unit))
    }
}

/// Render the saved report without recomputing it
pub async fn show(args: &OutputArgs, store: &ReportStore) -> AppResult<String> {
    let unit = args.display_unit()?;

    match store.load().await? {
        Some(report) if args.json => to_json(&report),
        Some(report) => Ok(render::render_report(&report, unit)),
        None if args.json => Ok("null".to_string()),
        None => Ok("No saved report found.".to_string()),
    }
}

pub fn project(args: &ProjectArgs, config: &AppConfig) -> AppResult<String> {
    let goal: Goal = args.goal.parse()?;
    let input_unit = args
        .weight_unit
        .parse::<WeightUnit>()
        .map_err(|e| AppError::invalid_argument("weight_unit", e))?;
    let unit = args.output.display_unit()?;
    let periods = args.periods.unwrap_or(config.projection.periods);

    let projection = project_weight(input_unit.to_kg(args.weight), goal, periods);
    if args.output.json {
        to_json(&projection)
    } else {
        Ok(render::render_projection(&projection, goal, unit))
    }
}

pub fn recommend(args: &RecommendArgs, config: &AppConfig) -> AppResult<String> {
    let goal: Goal = args.goal.parse()?;
    let preference: DietPreference = args.diet.parse()?;

    let plan = config.diet.catalog.recommend(preference, goal)?;
    if args.output.json {
        to_json(&plan)
    } else {
        Ok(render::render_diet(&plan, goal))
    }
}

pub async fn clear(store: &ReportStore) -> AppResult<String> {
    if store.clear().await? {
        info!("Saved report cleared");
        Ok("Saved report removed.".to_string())
    } else {
        Ok("No saved report to remove.".to_string())
    }
}
