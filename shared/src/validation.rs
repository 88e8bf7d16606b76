//! Input validation functions
//!
//! Field-level checks for [`HealthInput`]. Each validator returns a plain
//! message; [`validate_health_input`] attaches the field name and turns the
//! first failure into [`MetricsError::InvalidInput`].

use crate::errors::{MetricsError, MetricsResult};
use crate::health_metrics::HealthInput;

/// Exclusive upper bound for age in years
pub const MAX_AGE_YEARS: u32 = 150;

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female"];

/// Valid goal values
pub const VALID_GOALS: &[&str] = &["lose", "maintain", "gain"];

/// Valid diet preference values
pub const VALID_DIET_PREFERENCES: &[&str] = &["non-veg", "veg", "vegan"];

fn validate_positive(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if value <= 0.0 {
        return Err("must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate age: must be between 1 and 149 years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age == 0 {
        return Err("must be at least 1 year".to_string());
    }
    if age >= MAX_AGE_YEARS {
        return Err(format!("must be less than {} years", MAX_AGE_YEARS));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    validate_positive(height_cm)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    validate_positive(weight_kg)
}

/// Validate the TDEE activity multiplier
pub fn validate_activity_factor(factor: f64) -> Result<(), String> {
    validate_positive(factor)
}

/// Validate every field of a [`HealthInput`], reporting the first failure
pub fn validate_health_input(input: &HealthInput) -> MetricsResult<()> {
    let checks = [
        ("age", validate_age(input.age)),
        ("height_cm", validate_height_cm(input.height_cm)),
        ("weight_kg", validate_weight_kg(input.weight_kg)),
        ("activity_factor", validate_activity_factor(input.activity_factor)),
    ];

    for (field, check) in checks {
        if let Err(message) = check {
            return Err(ValidationError::new(field, &message).into());
        }
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "activity_factor" => "Activity Factor",
        "goal" => "Goal",
        "diet_preference" => "Diet Preference",
        "bmi" => "BMI",
        "bmr" => "Basal Metabolic Rate",
        "tdee" => "Daily Energy Expenditure",
        "diet_catalog" => "Diet Catalog",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl From<ValidationError> for MetricsError {
    fn from(err: ValidationError) -> Self {
        MetricsError::InvalidInput {
            field: err.field,
            reason: err.message,
        }
    }
}
