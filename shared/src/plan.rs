//! Combined plan: metrics, projection and diet in one call

use crate::diet::{DietCatalog, DietPlan};
use crate::errors::MetricsResult;
use crate::health_metrics::{compute_energy, compute_metrics, EnergyBreakdown, HealthInput, HealthResult};
use crate::projection::{project_weight, WeightProjection};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPlan {
    pub input: HealthInput,
    pub result: HealthResult,
    pub energy: EnergyBreakdown,
    pub projection: WeightProjection,
    pub diet: DietPlan,
}

/// Run the engine, then feed its input to projection and recommendation
pub fn build_plan(input: &HealthInput, catalog: &DietCatalog, periods: usize) -> MetricsResult<HealthPlan> {
    let result = compute_metrics(input)?;
    let energy = compute_energy(input)?;
    let projection = project_weight(input.weight_kg, input.goal, periods);
    let diet = catalog.recommend(input.diet_preference, input.goal)?;

    Ok(HealthPlan {
        input: *input,
        result,
        energy,
        projection,
        diet,
    })
}
