//! Persisted report record
//!
//! The last successful calculation is stored as one JSON object:
//! `{ "inputs": HealthInput, "results": HealthResult, "date": "<RFC 3339>" }`.
//! There is no history; a new report replaces the old one.

use crate::errors::{MetricsError, MetricsResult};
use crate::health_metrics::{classify_bmi, HealthInput, HealthResult};
use crate::validation::validate_health_input;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One input/result pair and when it was computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub inputs: HealthInput,
    pub results: HealthResult,
    /// RFC 3339 UTC timestamp
    pub date: String,
}

impl HealthReport {
    pub fn new(inputs: HealthInput, results: HealthResult, computed_at: DateTime<Utc>) -> Self {
        Self {
            inputs,
            results,
            date: computed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Stamp a report with the current time
    pub fn now(inputs: HealthInput, results: HealthResult) -> Self {
        Self::new(inputs, results, Utc::now())
    }

    /// Parsed report date
    pub fn computed_at(&self) -> MetricsResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| MetricsError::MalformedPersistedState(format!("invalid date '{}': {}", self.date, e)))
    }

    /// Serialize for storage
    ///
    /// JSON has no representation for NaN or infinity, so a report carrying
    /// one is refused here instead of being written as `null`.
    pub fn to_json(&self) -> MetricsResult<String> {
        let numbers = [
            ("height_cm", self.inputs.height_cm),
            ("weight_kg", self.inputs.weight_kg),
            ("activity_factor", self.inputs.activity_factor),
            ("bmi", self.results.bmi),
        ];
        if let Some((field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MetricsError::MalformedPersistedState(format!(
                "{} is {} and cannot be stored",
                field, value
            )));
        }

        serde_json::to_string_pretty(self)
            .map_err(|e| MetricsError::MalformedPersistedState(e.to_string()))
    }

    /// Parse and check a stored report
    ///
    /// Rejects unparseable JSON, inputs that fail validation, and results
    /// whose category does not match their BMI.
    pub fn from_json(raw: &str) -> MetricsResult<Self> {
        let report: HealthReport =
            serde_json::from_str(raw).map_err(|e| MetricsError::MalformedPersistedState(e.to_string()))?;

        validate_health_input(&report.inputs)
            .map_err(|e| MetricsError::MalformedPersistedState(format!("stored inputs rejected: {}", e)))?;

        if !report.results.bmi.is_finite() || classify_bmi(report.results.bmi) != report.results.bmi_category {
            return Err(MetricsError::MalformedPersistedState(
                "stored results are inconsistent with their BMI".to_string(),
            ));
        }

        report.computed_at()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet::DietPreference;
    use crate::health_metrics::{compute_metrics, BmiCategory, Gender, Goal};
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample_report() -> HealthReport {
        let inputs = HealthInput {
            age: 28,
            gender: Gender::Female,
            height_cm: 163.5,
            weight_kg: 58.3,
            activity_factor: 1.725,
            goal: Goal::Gain,
            diet_preference: DietPreference::Veg,
        };
        let results = compute_metrics(&inputs).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
        HealthReport::new(inputs, results, at)
    }

    #[test]
    fn test_round_trip_is_field_equal() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let restored = HealthReport::from_json(&json).unwrap();
        assert_eq!(restored.inputs, report.inputs);
        assert_eq!(restored.results, report.results);
        assert_eq!(restored.results.bmi.to_bits(), report.results.bmi.to_bits());
        assert_eq!(restored.date, "2024-03-09T14:30:00Z");
    }

    #[test]
    fn test_json_shape() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["gender"], "female");
        assert_eq!(value["inputs"]["diet_preference"], "veg");
        assert_eq!(value["results"]["bmi_category"], "normal");
        assert!(value["date"].is_string());
    }

    #[test]
    fn test_garbage_is_malformed() {
        for raw in ["", "not json", "{}", r#"{"inputs": 1, "results": 2, "date": "x"}"#] {
            let err = HealthReport::from_json(raw).unwrap_err();
            assert!(matches!(err, MetricsError::MalformedPersistedState(_)), "{}", raw);
        }
    }

    #[test]
    fn test_invalid_stored_inputs_are_malformed() {
        let mut report = sample_report();
        report.inputs.height_cm = 0.0;
        let json = serde_json::to_string(&report).unwrap();
        assert!(matches!(
            HealthReport::from_json(&json),
            Err(MetricsError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_inconsistent_category_is_malformed() {
        let mut report = sample_report();
        report.results.bmi_category = BmiCategory::Obese;
        let json = serde_json::to_string(&report).unwrap();
        assert!(HealthReport::from_json(&json).is_err());
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let mut report = sample_report();
        report.date = "yesterday".to_string();
        let json = serde_json::to_string(&report).unwrap();
        assert!(HealthReport::from_json(&json).is_err());
    }

    #[test]
    fn test_non_finite_bmi_is_not_stored() {
        let mut report = sample_report();
        report.results.bmi = f64::INFINITY;
        assert!(matches!(
            report.to_json(),
            Err(MetricsError::MalformedPersistedState(_))
        ));
    }

    #[rstest]
    #[case(80.0, 1.0e-160)]
    #[case(1.0e9, 180.0)]
    #[case(500_000.0, 180.0)]
    #[case(80.0, 0.5)]
    #[case(0.01, 272.0)]
    fn test_extreme_inputs_reject_or_round_trip(#[case] weight_kg: f64, #[case] height_cm: f64) {
        let inputs = HealthInput {
            weight_kg,
            height_cm,
            ..sample_report().inputs
        };
        match compute_metrics(&inputs) {
            Ok(results) => {
                let report = HealthReport::now(inputs, results);
                let restored = HealthReport::from_json(&report.to_json().unwrap()).unwrap();
                assert_eq!(restored, report);
            }
            Err(err) => assert!(matches!(err, MetricsError::InvalidInput { .. })),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: whatever the engine accepts can be stored and restored
        #[test]
        fn prop_accepted_extremes_round_trip(
            height_exp in -200i32..6,
            weight_exp in -3i32..12
        ) {
            let inputs = HealthInput {
                height_cm: 10f64.powi(height_exp),
                weight_kg: 10f64.powi(weight_exp),
                ..sample_report().inputs
            };
            if let Ok(results) = compute_metrics(&inputs) {
                let report = HealthReport::now(inputs, results);
                let restored = HealthReport::from_json(&report.to_json().unwrap()).unwrap();
                prop_assert_eq!(restored, report);
            }
        }

        /// Property: any computed report survives a JSON round trip unchanged
        #[test]
        fn prop_report_round_trip(
            age in 1u32..150,
            height in 50.0f64..250.0,
            weight in 2.0f64..300.0,
            factor in 1.0f64..2.5
        ) {
            let inputs = HealthInput {
                age,
                gender: Gender::Male,
                height_cm: height,
                weight_kg: weight,
                activity_factor: factor,
                goal: Goal::Lose,
                diet_preference: DietPreference::NonVeg,
            };
            let report = HealthReport::now(inputs, compute_metrics(&inputs).unwrap());
            let restored = HealthReport::from_json(&report.to_json().unwrap()).unwrap();
            prop_assert_eq!(restored, report);
        }
    }
}
