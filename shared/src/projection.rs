//! Weight projection module
//!
//! Linear forecast: each period moves the weight by the goal's fixed weekly
//! change (±0.5 kg, or 0 for maintain). No plateau modelling.

use crate::health_metrics::{round_to_tenth, Goal};
use serde::{Deserialize, Serialize};

/// Number of periods emitted when the caller does not choose
pub const DEFAULT_PROJECTION_PERIODS: usize = 4;

/// One projected point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// "Period 1".."Period N"
    pub label: String,
    /// Rounded to one decimal
    pub weight_kg: f64,
}

/// Ordered weight forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeightProjection {
    pub points: Vec<ProjectionPoint>,
}

impl WeightProjection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Projected weights without labels
    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.weight_kg).collect()
    }

    /// Weight at the last period, if any
    pub fn final_weight(&self) -> Option<f64> {
        self.points.last().map(|p| p.weight_kg)
    }
}

/// Project weight over `periods` periods
///
/// The first point already includes one period of change; the starting
/// weight itself is not emitted.
pub fn project_weight(starting_weight_kg: f64, goal: Goal, periods: usize) -> WeightProjection {
    let delta = goal.weekly_change_kg();

    let points = (1..=periods)
        .map(|period| ProjectionPoint {
            label: format!("Period {}", period),
            weight_kg: round_to_tenth(starting_weight_kg + delta * period as f64),
        })
        .collect();

    WeightProjection { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_project_lose() {
        let projection = project_weight(80.0, Goal::Lose, DEFAULT_PROJECTION_PERIODS);
        assert_eq!(projection.weights(), vec![79.5, 79.0, 78.5, 78.0]);
        assert_eq!(projection.points[0].label, "Period 1");
        assert_eq!(projection.points[3].label, "Period 4");
    }

    #[test]
    fn test_project_maintain() {
        let projection = project_weight(80.0, Goal::Maintain, 4);
        assert_eq!(projection.weights(), vec![80.0; 4]);
    }

    #[test]
    fn test_project_gain() {
        let projection = project_weight(60.0, Goal::Gain, 4);
        assert_eq!(projection.weights(), vec![60.5, 61.0, 61.5, 62.0]);
        assert_eq!(projection.final_weight(), Some(62.0));
    }

    #[test]
    fn test_project_rounds_to_one_decimal() {
        let projection = project_weight(72.34, Goal::Lose, 2);
        assert_eq!(projection.weights(), vec![71.8, 71.3]);
    }

    #[test]
    fn test_zero_periods_is_empty() {
        let projection = project_weight(80.0, Goal::Gain, 0);
        assert!(projection.is_empty());
        assert_eq!(projection.final_weight(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: one point per period, labelled in order
        #[test]
        fn prop_projection_length_and_labels(weight in 30.0f64..200.0, periods in 0usize..52) {
            let projection = project_weight(weight, Goal::Lose, periods);
            prop_assert_eq!(projection.len(), periods);
            for (i, point) in projection.points.iter().enumerate() {
                prop_assert_eq!(&point.label, &format!("Period {}", i + 1));
            }
        }

        /// Property: total change after N periods is N × 0.5 kg
        #[test]
        fn prop_projection_is_linear(weight in 30.0f64..200.0, periods in 1usize..52) {
            let projection = project_weight(weight, Goal::Gain, periods);
            let last = projection.final_weight().unwrap();
            let expected = weight + 0.5 * periods as f64;
            prop_assert!((last - expected).abs() <= 0.05 + 1e-9);
        }
    }
}
