//! Command-line arguments
//!
//! Enumerations arrive as raw strings and are parsed by the core so that bad
//! values surface as the core's own error kinds.

use crate::error::{AppError, AppResult};
use clap::{Args, Parser, Subcommand};
use health_planner_shared::{
    ActivityLevel, DietPreference, Gender, Goal, HealthInput, HeightUnit, WeightUnit,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "health-planner",
    about = "Compute BMI, calorie targets, weight projections and meal suggestions",
    version
)]
pub struct Cli {
    /// Extra TOML config file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute metrics, projection and meal plan, then save the report
    Calculate(CalculateArgs),
    /// Show the last saved report
    Show(OutputArgs),
    /// Project weight over a number of periods
    Project(ProjectArgs),
    /// Suggest meals for a diet preference
    Recommend(RecommendArgs),
    /// Delete the saved report
    Clear,
}

impl Command {
    /// Whether output (including errors) should be JSON
    pub fn wants_json(&self) -> bool {
        match self {
            Command::Calculate(args) => args.output.json,
            Command::Show(args) => args.json,
            Command::Project(args) => args.output.json,
            Command::Recommend(args) => args.output.json,
            Command::Clear => false,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Unit for displayed weights (kg, lbs)
    #[arg(long, default_value = "kg")]
    pub display_unit: String,
}

impl OutputArgs {
    pub fn display_unit(&self) -> AppResult<WeightUnit> {
        parse_unit("display_unit", &self.display_unit)
    }
}

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// male or female
    #[arg(long)]
    pub gender: String,

    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// cm or in
    #[arg(long, default_value = "cm")]
    pub height_unit: String,

    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// kg or lbs
    #[arg(long, default_value = "kg")]
    pub weight_unit: String,

    /// Numeric activity multiplier, e.g. 1.55
    #[arg(long, allow_negative_numbers = true, conflicts_with = "activity")]
    pub activity_factor: Option<f64>,

    /// Activity preset: sedentary, lightly_active, moderately_active, very_active, extra_active
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// non-veg, veg or vegan
    #[arg(long, default_value = "non-veg")]
    pub diet: String,

    /// Projection periods (defaults to the configured value)
    #[arg(long)]
    pub periods: Option<usize>,

    /// Compute without overwriting the saved report
    #[arg(long)]
    pub no_save: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CalculateArgs {
    /// Convert raw arguments into a `HealthInput`
    ///
    /// Only parses and converts units; range checks belong to the engine.
    pub fn to_input(&self) -> AppResult<HealthInput> {
        let height_unit: HeightUnit = self
            .height_unit
            .parse()
            .map_err(|e: String| AppError::invalid_argument("height_unit", e))?;
        let weight_unit = parse_unit("weight_unit", &self.weight_unit)?;

        let activity_factor = match (self.activity_factor, self.activity.as_deref()) {
            (Some(factor), _) => factor,
            (None, Some(preset)) => preset.parse::<ActivityLevel>()?.multiplier(),
            (None, None) => ActivityLevel::default().multiplier(),
        };

        Ok(HealthInput {
            age: self.age,
            gender: self.gender.parse::<Gender>()?,
            height_cm: height_unit.to_cm(self.height),
            weight_kg: weight_unit.to_kg(self.weight),
            activity_factor,
            goal: self.goal.parse::<Goal>()?,
            diet_preference: self.diet.parse::<DietPreference>()?,
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Starting weight
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    #[arg(long, default_value = "kg")]
    pub weight_unit: String,

    #[arg(long)]
    pub goal: String,

    #[arg(long)]
    pub periods: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[arg(long)]
    pub diet: String,

    #[arg(long, default_value = "maintain")]
    pub goal: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_unit(field: &str, raw: &str) -> AppResult<WeightUnit> {
    raw.parse()
        .map_err(|e: String| AppError::invalid_argument(field, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use health_planner_shared::MetricsError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("health-planner").chain(args.iter().copied())).unwrap()
    }

    fn calculate_args(extra: &[&str]) -> CalculateArgs {
        let mut args = vec![
            "calculate", "--age", "30", "--gender", "male", "--height", "180", "--weight", "80",
            "--activity-factor", "1.55",
        ];
        args.extend_from_slice(extra);
        match parse(&args).command {
            Command::Calculate(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calculate_defaults() {
        let input = calculate_args(&[]).to_input().unwrap();
        assert_eq!(input.goal, Goal::Maintain);
        assert_eq!(input.diet_preference, DietPreference::NonVeg);
        assert_eq!(input.activity_factor, 1.55);
        assert_eq!(input.height_cm, 180.0);
    }

    #[test]
    fn test_imperial_units_are_converted() {
        let input = calculate_args(&["--height-unit", "in", "--weight-unit", "lbs"])
            .to_input()
            .unwrap();
        assert!((input.height_cm - 457.2).abs() < 1e-9);
        assert!((input.weight_kg - 36.287).abs() < 0.001);
    }

    #[test]
    fn test_activity_preset() {
        let args = parse(&[
            "calculate", "--age", "30", "--gender", "female", "--height", "165", "--weight", "60",
            "--activity", "very_active",
        ]);
        let Command::Calculate(args) = args.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.to_input().unwrap().activity_factor, 1.725);
    }

    #[test]
    fn test_negative_weight_reaches_engine() {
        let input = calculate_args(&[]);
        let input = CalculateArgs { weight: -5.0, ..input }.to_input().unwrap();
        assert_eq!(input.weight_kg, -5.0);

        let parsed = parse(&[
            "calculate", "--age", "30", "--gender", "male", "--height", "180", "--weight", "-5",
        ]);
        let Command::Calculate(args) = parsed.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.weight, -5.0);
    }

    #[test]
    fn test_bad_enums_map_to_core_errors() {
        let err = calculate_args(&["--diet", "keto"]).to_input().unwrap_err();
        assert!(matches!(err, AppError::Metrics(MetricsError::UnknownPreference(_))));

        let err = calculate_args(&["--goal", "bulk"]).to_input().unwrap_err();
        assert!(matches!(err, AppError::Metrics(MetricsError::InvalidInput { .. })));

        let err = calculate_args(&["--weight-unit", "stone"]).to_input().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { .. }));
    }

    #[test]
    fn test_wants_json() {
        assert!(parse(&["show", "--json"]).command.wants_json());
        assert!(!parse(&["clear"]).command.wants_json());
        assert!(parse(&["recommend", "--diet", "veg", "--json"]).command.wants_json());
    }

    #[test]
    fn test_activity_flags_conflict() {
        let result = Cli::try_parse_from([
            "health-planner", "calculate", "--age", "30", "--gender", "male", "--height", "180",
            "--weight", "80", "--activity-factor", "1.2", "--activity", "sedentary",
        ]);
        assert!(result.is_err());
    }
}
