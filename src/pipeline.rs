//! Feature pipeline and classifier adapter: raw 7-vector in, crop label out.

use crate::artifacts::ArtifactSet;
use crate::errors::AdvisorResult;
use crate::features::FEATURE_COUNT;

/// Owns the loaded artifacts and applies them in the order they were fitted.
pub struct InferencePipeline {
    artifacts: ArtifactSet,
}

impl InferencePipeline {
    pub fn new(artifacts: ArtifactSet) -> Self {
        Self { artifacts }
    }

    /// Scale a raw feature vector into the representation the classifier
    /// expects. Min-max first, then standardization; the standard scaler was
    /// fitted on min-max output, so reversing the order would silently
    /// produce wrong results.
    pub fn transform(&self, raw: &[f64; FEATURE_COUNT]) -> AdvisorResult<Vec<f64>> {
        let scaled = self.artifacts.minmax.transform(raw)?;
        self.artifacts.standard.transform(&scaled)
    }

    /// Full inference: scale then classify, producing an integer crop label.
    pub fn predict(&self, raw: &[f64; FEATURE_COUNT]) -> AdvisorResult<i64> {
        let transformed = self.transform(raw)?;
        self.artifacts.classifier.predict(&transformed)
    }

    pub fn model_id(&self) -> &str {
        &self.artifacts.classifier.model_id
    }

    pub fn class_count(&self) -> usize {
        self.artifacts.classifier.classes.len()
    }
}
