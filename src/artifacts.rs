//! Serialized artifacts: two fitted scalers and a linear classifier.
//!
//! The producer (an offline training job) exports fitted parameters as JSON.
//! All three files are loaded and shape-checked once at startup; a failure
//! here is fatal because the server cannot predict without them.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ArtifactPaths;
use crate::errors::{AdvisorError, AdvisorResult};
use crate::features::FEATURE_COUNT;

/// Fitted min-max scaler: maps each feature into [0, 1] using the per-feature
/// minimum and maximum observed during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
}

impl MinMaxScaler {
    pub fn transform(&self, input: &[f64]) -> AdvisorResult<Vec<f64>> {
        if input.len() != self.data_min.len() {
            return Err(AdvisorError::dimension_mismatch(
                "minmax scaler",
                self.data_min.len(),
                input.len(),
            ));
        }

        Ok(input
            .iter()
            .zip(self.data_min.iter().zip(self.data_max.iter()))
            .map(|(x, (min, max))| {
                let range = max - min;
                // Zero-range feature: every training sample had the same
                // value, so the scaled coordinate is pinned at 0.
                if range == 0.0 {
                    0.0
                } else {
                    (x - min) / range
                }
            })
            .collect())
    }

    fn validate(&self) -> AdvisorResult<()> {
        if self.data_min.len() != FEATURE_COUNT || self.data_max.len() != FEATURE_COUNT {
            return Err(AdvisorError::artifact(
                "minmax scaler",
                format!(
                    "fitted for {}/{} features, expected {FEATURE_COUNT}",
                    self.data_min.len(),
                    self.data_max.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Fitted standard scaler: centers each feature on its training mean and
/// divides by its training standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn transform(&self, input: &[f64]) -> AdvisorResult<Vec<f64>> {
        if input.len() != self.mean.len() {
            return Err(AdvisorError::dimension_mismatch(
                "standard scaler",
                self.mean.len(),
                input.len(),
            ));
        }

        Ok(input
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                if *scale == 0.0 {
                    x - mean
                } else {
                    (x - mean) / scale
                }
            })
            .collect())
    }

    fn validate(&self) -> AdvisorResult<()> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(AdvisorError::artifact(
                "standard scaler",
                format!(
                    "fitted for {}/{} features, expected {FEATURE_COUNT}",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Trained linear multi-class classifier: one weight row and intercept per
/// class; prediction is the argmax of the per-class scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub model_id: String,
    pub classes: Vec<i64>,
    pub weights: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Score every class against the transformed vector and return the label
    /// with the highest score. Ties resolve to the first class listed, which
    /// matches argmax over the class order the model was exported with.
    pub fn predict(&self, input: &[f64]) -> AdvisorResult<i64> {
        if self.classes.is_empty() {
            return Err(AdvisorError::inference("model has no classes"));
        }

        let mut best_label = self.classes[0];
        let mut best_score = f64::NEG_INFINITY;

        for ((label, row), intercept) in self
            .classes
            .iter()
            .zip(self.weights.iter())
            .zip(self.intercepts.iter())
        {
            if row.len() != input.len() {
                return Err(AdvisorError::inference(format!(
                    "class {label} weight row has {} entries, input has {}",
                    row.len(),
                    input.len()
                )));
            }

            let score: f64 = intercept + row.iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f64>();
            if score > best_score {
                best_score = score;
                best_label = *label;
            }
        }

        Ok(best_label)
    }

    fn validate(&self) -> AdvisorResult<()> {
        if self.classes.is_empty() {
            return Err(AdvisorError::artifact("model", "class list is empty"));
        }
        if self.weights.len() != self.classes.len() || self.intercepts.len() != self.classes.len() {
            return Err(AdvisorError::artifact(
                "model",
                format!(
                    "{} classes but {} weight rows and {} intercepts",
                    self.classes.len(),
                    self.weights.len(),
                    self.intercepts.len()
                ),
            ));
        }
        for (label, row) in self.classes.iter().zip(self.weights.iter()) {
            if row.len() != FEATURE_COUNT {
                return Err(AdvisorError::artifact(
                    "model",
                    format!(
                        "class {label} weight row has {} entries, expected {FEATURE_COUNT}",
                        row.len()
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// The three artifacts the server needs, loaded and validated together.
pub struct ArtifactSet {
    pub minmax: MinMaxScaler,
    pub standard: StandardScaler,
    pub classifier: LinearClassifier,
}

impl ArtifactSet {
    /// Load and shape-check all three artifact files. Any failure is fatal
    /// to startup.
    pub fn load(paths: &ArtifactPaths) -> AdvisorResult<Self> {
        let minmax: MinMaxScaler = read_json(&paths.minmax_path(), "minmax scaler")?;
        let standard: StandardScaler = read_json(&paths.standard_path(), "standard scaler")?;
        let classifier: LinearClassifier = read_json(&paths.model_path(), "model")?;

        minmax.validate()?;
        standard.validate()?;
        classifier.validate()?;

        info!(
            model_id = %classifier.model_id,
            classes = classifier.classes.len(),
            "artifacts loaded and validated"
        );

        Ok(ArtifactSet {
            minmax,
            standard,
            classifier,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, artifact: &str) -> AdvisorResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        AdvisorError::artifact(artifact, format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AdvisorError::artifact(artifact, format!("invalid JSON in {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn minmax() -> MinMaxScaler {
        MinMaxScaler {
            data_min: vec![0.0; FEATURE_COUNT],
            data_max: vec![100.0, 100.0, 200.0, 50.0, 100.0, 14.0, 300.0],
        }
    }

    #[test]
    fn minmax_maps_fitted_bounds_to_unit_interval() {
        let scaler = minmax();
        let lo = scaler.transform(&[0.0; FEATURE_COUNT]).unwrap();
        let hi = scaler
            .transform(&[100.0, 100.0, 200.0, 50.0, 100.0, 14.0, 300.0])
            .unwrap();
        assert!(lo.iter().all(|v| *v == 0.0));
        assert!(hi.iter().all(|v| *v == 1.0));
    }

    #[test]
    fn minmax_rejects_wrong_dimensionality() {
        let err = minmax().transform(&[1.0, 2.0]).unwrap_err();
        match err {
            AdvisorError::DimensionMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, FEATURE_COUNT);
                assert_eq!(actual, 2);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn standard_scaler_centers_the_fitted_mean() {
        let scaler = StandardScaler {
            mean: vec![0.5; FEATURE_COUNT],
            scale: vec![0.25; FEATURE_COUNT],
        };
        let centered = scaler.transform(&[0.5; FEATURE_COUNT]).unwrap();
        assert!(centered.iter().all(|v| v.abs() < 1e-12));

        let shifted = scaler.transform(&[0.75; FEATURE_COUNT]).unwrap();
        assert!(shifted.iter().all(|v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn classifier_picks_highest_scoring_class() {
        let model = LinearClassifier {
            model_id: "test".to_string(),
            classes: vec![1, 22],
            weights: vec![
                vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                vec![-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ],
            intercepts: vec![0.0, 0.0],
        };
        assert_eq!(model.predict(&[2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(), 1);
        assert_eq!(
            model.predict(&[-2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(),
            22
        );
    }

    #[test]
    fn classifier_tie_goes_to_first_listed_class() {
        let model = LinearClassifier {
            model_id: "test".to_string(),
            classes: vec![3, 4],
            weights: vec![vec![0.0; FEATURE_COUNT], vec![0.0; FEATURE_COUNT]],
            intercepts: vec![1.0, 1.0],
        };
        assert_eq!(model.predict(&[0.0; FEATURE_COUNT]).unwrap(), 3);
    }

    #[test]
    fn classifier_rejects_mismatched_weight_row() {
        let model = LinearClassifier {
            model_id: "test".to_string(),
            classes: vec![1],
            weights: vec![vec![1.0, 2.0]],
            intercepts: vec![0.0],
        };
        assert!(matches!(
            model.predict(&[0.0; FEATURE_COUNT]),
            Err(AdvisorError::Inference { .. })
        ));
    }

    #[test]
    fn load_rejects_scaler_with_wrong_feature_count() {
        let dir = tempfile::tempdir().expect("temp dir");
        let paths = ArtifactPaths {
            dir: dir.path().to_string_lossy().to_string(),
            ..ArtifactPaths::default()
        };

        let bad_minmax = MinMaxScaler {
            data_min: vec![0.0; 3],
            data_max: vec![1.0; 3],
        };
        let standard = StandardScaler {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        };
        let model = LinearClassifier {
            model_id: "test".to_string(),
            classes: vec![1],
            weights: vec![vec![0.0; FEATURE_COUNT]],
            intercepts: vec![0.0],
        };

        fs::write(
            paths.minmax_path(),
            serde_json::to_string(&bad_minmax).unwrap(),
        )
        .unwrap();
        fs::write(
            paths.standard_path(),
            serde_json::to_string(&standard).unwrap(),
        )
        .unwrap();
        fs::write(paths.model_path(), serde_json::to_string(&model).unwrap()).unwrap();

        assert!(matches!(
            ArtifactSet::load(&paths),
            Err(AdvisorError::Artifact { .. })
        ));
    }

    #[test]
    fn load_fails_when_a_file_is_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let paths = ArtifactPaths {
            dir: dir.path().to_string_lossy().to_string(),
            ..ArtifactPaths::default()
        };
        assert!(matches!(
            ArtifactSet::load(&paths),
            Err(AdvisorError::Artifact { .. })
        ));
    }
}
