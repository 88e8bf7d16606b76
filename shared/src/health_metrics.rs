//! Health metrics calculations module
//!
//! Computes BMI, BMR, TDEE and a goal-adjusted calorie target from a
//! [`HealthInput`], and classifies BMI into a [`BmiCategory`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No I/O, no hidden state, same input gives the same bits
//! 2. **Fail Loudly**: Invalid input is rejected before any arithmetic runs
//! 3. **Type Safety**: Closed enumerations for gender, goal and diet preference

use crate::diet::DietPreference;
use crate::errors::{MetricsError, MetricsResult};
use crate::validation::{validate_health_input, VALID_GENDERS, VALID_GOALS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calorie offset applied for a lose or gain goal
pub const GOAL_CALORIE_ADJUSTMENT: i32 = 500;

/// Weekly weight change magnitude used by projections and diet annotations
pub const WEEKLY_CHANGE_KG: f64 = 0.5;

// ============================================================================
// Input Types
// ============================================================================

/// Gender used for the Mifflin-St Jeor offset
/// Note: the formula only defines two offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// BMR offset added after the weight/height/age terms
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(MetricsError::invalid_input(
                "gender",
                format!("must be one of: {}", VALID_GENDERS.join(", ")),
            )),
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Calories added to the rounded TDEE for this goal
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::Lose => -GOAL_CALORIE_ADJUSTMENT,
            Goal::Maintain => 0,
            Goal::Gain => GOAL_CALORIE_ADJUSTMENT,
        }
    }

    /// Signed weight change per period in kg
    pub fn weekly_change_kg(&self) -> f64 {
        match self {
            Goal::Lose => -WEEKLY_CHANGE_KG,
            Goal::Maintain => 0.0,
            Goal::Gain => WEEKLY_CHANGE_KG,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(MetricsError::invalid_input(
                "goal",
                format!("must be one of: {}", VALID_GOALS.join(", ")),
            )),
        }
    }
}

/// Named activity presets for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

}

impl FromStr for ActivityLevel {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(MetricsError::invalid_input(
                "activity_factor",
                format!("unknown activity level '{}'", s),
            )),
        }
    }
}

/// Biometric input for one calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// TDEE multiplier, typically 1.2-1.9
    pub activity_factor: f64,
    pub goal: Goal,
    pub diet_preference: DietPreference,
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open BMI range `[low, high)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Short guidance shown next to the category
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Consider a calorie surplus with nutrient-dense foods.",
            BmiCategory::Normal => "You are in a healthy range. Keep up balanced habits.",
            BmiCategory::Overweight => "A modest calorie deficit and regular activity can help.",
            BmiCategory::Obese => "Consult a healthcare professional for a personalised plan.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Weights giving a normal BMI for a given height
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, 25.0 * height_m_sq)
}

/// Round to one decimal place for display
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset()
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Daily calorie target: rounded TDEE shifted by the goal adjustment
///
/// Fails instead of saturating when the TDEE does not fit an `i32`.
pub fn calorie_target(tdee: f64, goal: Goal) -> MetricsResult<i32> {
    let rounded = tdee.round();
    if !rounded.is_finite() || rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(out_of_range("tdee", tdee));
    }

    (rounded as i32)
        .checked_add(goal.calorie_adjustment())
        .ok_or_else(|| out_of_range("tdee", tdee))
}

fn out_of_range(field: &str, value: f64) -> MetricsError {
    MetricsError::invalid_input(
        field,
        format!("derived value {} is out of range; check weight, height and activity factor", value),
    )
}

/// BMR and TDEE at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
}

/// Validate input and compute BMR/TDEE
pub fn compute_energy(input: &HealthInput) -> MetricsResult<EnergyBreakdown> {
    validate_health_input(input)?;
    derive_energy(input)
}

fn derive_energy(input: &HealthInput) -> MetricsResult<EnergyBreakdown> {
    let bmr = calculate_bmr_mifflin(input.weight_kg, input.height_cm, input.age, input.gender);
    if !bmr.is_finite() {
        return Err(out_of_range("bmr", bmr));
    }

    let tdee = calculate_tdee(bmr, input.activity_factor);
    if !tdee.is_finite() {
        return Err(out_of_range("tdee", tdee));
    }

    Ok(EnergyBreakdown { bmr, tdee })
}

// ============================================================================
// Engine Entry Point
// ============================================================================

/// Derived metrics for one [`HealthInput`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthResult {
    /// BMI at full precision
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Rounded TDEE adjusted for the goal, in kcal
    pub daily_calorie_target: i32,
}

impl HealthResult {
    /// BMI rounded to one decimal
    pub fn display_bmi(&self) -> f64 {
        round_to_tenth(self.bmi)
    }
}

/// Compute BMI, category and calorie target
///
/// The category is classified from the unrounded BMI. The calorie target is
/// derived from BMR and activity factor only. Inputs that pass validation but
/// drive a derived value out of range (an overflowing BMI for a vanishing
/// height, say) are rejected rather than returned.
pub fn compute_metrics(input: &HealthInput) -> MetricsResult<HealthResult> {
    validate_health_input(input)?;

    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    if !bmi.is_finite() {
        return Err(out_of_range("bmi", bmi));
    }
    let energy = derive_energy(input)?;

    Ok(HealthResult {
        bmi,
        bmi_category: classify_bmi(bmi),
        daily_calorie_target: calorie_target(energy.tdee, input.goal)?,
    })
}
