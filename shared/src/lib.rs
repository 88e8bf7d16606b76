//! Health Planner Core Library
//!
//! Pure, synchronous health metrics: BMI, BMR, TDEE, calorie targets,
//! weight projection and diet recommendations. Shared by the CLI and
//! WASM front ends.

pub mod diet;
pub mod errors;
pub mod health_metrics;
pub mod plan;
pub mod projection;
pub mod report;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use diet::{recommend_diet, DietCatalog, DietPlan, DietPreference};
pub use errors::*;
pub use health_metrics::*;
pub use plan::{build_plan, HealthPlan};
pub use projection::{project_weight, ProjectionPoint, WeightProjection, DEFAULT_PROJECTION_PERIODS};
pub use report::HealthReport;
pub use units::{HeightUnit, WeightUnit};
