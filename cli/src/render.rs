//! Plain-text rendering of core results
//!
//! Weights are converted to the user's display unit here; everything upstream
//! stays in kilograms. Each renderer returns newline-terminated lines.

use health_planner_shared::{
    healthy_weight_range_kg, DietPlan, Goal, HealthPlan, HealthReport, HealthResult,
    WeightProjection, WeightUnit,
};

fn weight(kg: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", unit.from_kg(kg), unit)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn metrics_lines(result: &HealthResult, height_cm: f64, unit: WeightUnit) -> Vec<String> {
    let (min, max) = healthy_weight_range_kg(height_cm);
    vec![
        format!("BMI:            {:.1} ({})", result.display_bmi(), result.bmi_category),
        format!("                {}", result.bmi_category.advice()),
        format!("Healthy weight: {} - {}", weight(min, unit), weight(max, unit)),
        format!("Daily calories: {} kcal", result.daily_calorie_target),
    ]
}

/// Projection table; the goal only labels the direction
pub fn render_projection(projection: &WeightProjection, goal: Goal, unit: WeightUnit) -> String {
    let mut lines = vec![format!("Weight projection ({}):", goal)];
    if projection.is_empty() {
        lines.push("  (no periods requested)".to_string());
    }
    lines.extend(
        projection
            .points
            .iter()
            .map(|point| format!("  {:<10} {}", point.label, weight(point.weight_kg, unit))),
    );
    join_lines(lines)
}

/// Meal list with the weekly annotation as stored
///
/// The annotation is unsigned; the goal is printed beside it rather than
/// folded into the text.
pub fn render_diet(plan: &DietPlan, goal: Goal) -> String {
    let mut lines = vec![format!("Meal plan ({}):", plan.preference)];
    lines.extend(
        plan.meals
            .iter()
            .enumerate()
            .map(|(i, meal)| format!("  {}. {}", i + 1, meal)),
    );
    lines.push(format!("Weekly target:  {} (goal: {})", plan.weekly_target, goal));
    lines.push(format!("                {}", plan.guidance));
    join_lines(lines)
}

pub fn render_plan(plan: &HealthPlan, unit: WeightUnit) -> String {
    let mut lines = metrics_lines(&plan.result, plan.input.height_cm, unit);
    lines.push(format!(
        "BMR / TDEE:     {} / {} kcal",
        plan.energy.bmr.round(),
        plan.energy.tdee.round()
    ));

    let mut out = join_lines(lines);
    out.push('\n');
    out.push_str(&render_projection(&plan.projection, plan.input.goal, unit));
    out.push('\n');
    out.push_str(&render_diet(&plan.diet, plan.input.goal));
    out
}

/// Summary of a restored report; nothing is recomputed
pub fn render_report(report: &HealthReport, unit: WeightUnit) -> String {
    let inputs = &report.inputs;
    let mut lines = vec![
        format!("Saved report from {}", report.date),
        format!(
            "Inputs:         {} y, {}, {:.1} cm, {}, activity x{}, goal {}, diet {}",
            inputs.age,
            inputs.gender,
            inputs.height_cm,
            weight(inputs.weight_kg, unit),
            inputs.activity_factor,
            inputs.goal,
            inputs.diet_preference
        ),
    ];
    lines.extend(metrics_lines(&report.results, inputs.height_cm, unit));
    join_lines(lines)
}
