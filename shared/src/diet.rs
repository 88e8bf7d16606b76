//! Diet recommendation module
//!
//! Looks up meal suggestions for a [`DietPreference`] in a [`DietCatalog`] and
//! annotates them with the weekly weight-change target for a [`Goal`].
//!
//! The catalog is plain configuration data. [`DietCatalog::default`] carries
//! the built-in meals; adapters may deserialize their own.

use crate::errors::{MetricsError, MetricsResult};
use crate::health_metrics::{Goal, WEEKLY_CHANGE_KG};
use crate::validation::VALID_DIET_PREFERENCES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every catalog entry lists exactly this many meals
pub const MEALS_PER_PREFERENCE: usize = 3;

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    #[default]
    NonVeg,
    Veg,
    Vegan,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::NonVeg => "non-veg",
            DietPreference::Veg => "veg",
            DietPreference::Vegan => "vegan",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietPreference {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "non-veg" | "nonveg" | "non_veg" => Ok(DietPreference::NonVeg),
            "veg" | "vegetarian" => Ok(DietPreference::Veg),
            "vegan" => Ok(DietPreference::Vegan),
            _ => Err(MetricsError::UnknownPreference(format!(
                "'{}' (expected one of: {})",
                s,
                VALID_DIET_PREFERENCES.join(", ")
            ))),
        }
    }
}

/// Meals offered for one preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub preference: DietPreference,
    pub meals: Vec<String>,
}

/// Static meal catalog keyed by preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietCatalog {
    pub entries: Vec<CatalogEntry>,
}

impl Default for DietCatalog {
    fn default() -> Self {
        let entry = |preference, meals: [&str; 3]| CatalogEntry {
            preference,
            meals: meals.iter().map(|m| m.to_string()).collect(),
        };

        Self {
            entries: vec![
                entry(
                    DietPreference::NonVeg,
                    [
                        "Grilled chicken with brown rice",
                        "Egg omelette with whole-grain toast",
                        "Baked salmon with steamed vegetables",
                    ],
                ),
                entry(
                    DietPreference::Veg,
                    [
                        "Paneer tikka with quinoa",
                        "Greek yogurt with berries and nuts",
                        "Lentil dal with brown rice",
                    ],
                ),
                entry(
                    DietPreference::Vegan,
                    [
                        "Tofu stir-fry with vegetables",
                        "Chickpea salad with avocado",
                        "Oatmeal with almond milk and fruit",
                    ],
                ),
            ],
        }
    }
}

impl DietCatalog {
    /// Meals for a preference, if the catalog has an entry
    pub fn meals(&self, preference: DietPreference) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.preference == preference)
            .map(|e| e.meals.as_slice())
    }

    /// Check the catalog shape: one entry per preference, three meals each
    ///
    /// Catalogs loaded from configuration should pass this before use.
    pub fn validate(&self) -> MetricsResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            check_meal_count(entry)?;
            if self.entries[..i].iter().any(|e| e.preference == entry.preference) {
                return Err(MetricsError::invalid_input(
                    "diet_catalog",
                    format!("'{}' is listed more than once", entry.preference),
                ));
            }
        }
        Ok(())
    }

    /// Build a plan for a preference and goal
    ///
    /// Meals are returned unchanged regardless of goal.
    pub fn recommend(&self, preference: DietPreference, goal: Goal) -> MetricsResult<DietPlan> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.preference == preference)
            .ok_or_else(|| MetricsError::UnknownPreference(format!("'{}' is not in the catalog", preference)))?;
        check_meal_count(entry)?;

        Ok(DietPlan {
            preference,
            meals: entry.meals.clone(),
            weekly_target: weekly_target_annotation(goal),
            guidance: goal_guidance(goal).to_string(),
        })
    }
}

/// Meal suggestions plus the weekly target annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub preference: DietPreference,
    pub meals: Vec<String>,
    /// "0 kg/week" for maintain, otherwise the unsigned weekly magnitude
    pub weekly_target: String,
    pub guidance: String,
}

/// Weekly change annotation; direction is implied by the goal, not encoded
pub fn weekly_target_annotation(goal: Goal) -> String {
    match goal {
        Goal::Maintain => "0 kg/week".to_string(),
        Goal::Lose | Goal::Gain => format!("{} kg/week", WEEKLY_CHANGE_KG),
    }
}

/// Supporting guidance text for a goal
pub fn goal_guidance(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => "Keep a steady 500 kcal daily deficit and prioritise protein and vegetables.",
        Goal::Maintain => "Eat close to your daily target and keep portions consistent.",
        Goal::Gain => "Add a 500 kcal daily surplus from whole foods and pair it with strength training.",
    }
}

fn check_meal_count(entry: &CatalogEntry) -> MetricsResult<()> {
    if entry.meals.len() != MEALS_PER_PREFERENCE {
        return Err(MetricsError::invalid_input(
            "diet_catalog",
            format!(
                "'{}' lists {} meals, expected {}",
                entry.preference,
                entry.meals.len(),
                MEALS_PER_PREFERENCE
            ),
        ));
    }
    Ok(())
}

/// Recommend meals from the built-in catalog for a raw preference string
pub fn recommend_diet(preference: &str, goal: Goal) -> MetricsResult<DietPlan> {
    let preference: DietPreference = preference.parse()?;
    DietCatalog::default().recommend(preference, goal)
}
