use tracing::debug;

use crate::domain::{
    common::{
        DEFAULT_SUPPRESSION_THRESHOLD,
        entities::app_errors::CoreError,
        geometry::{BoundingBox, UNIT_FRAME},
    },
    detection::{
        entities::{Detection, RawCandidate},
        helpers::suppress_duplicates,
        rules::{LabelNormalizer, LabelRules},
    },
};

/// Turns raw vision candidates into clean, deduplicated detections.
///
/// Holds only immutable configuration; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct DetectionNormalizer {
    labels: LabelNormalizer,
    suppression_threshold: f64,
    frame: BoundingBox,
}

impl DetectionNormalizer {
    pub fn new(rules: &LabelRules, suppression_threshold: f64) -> Result<Self, CoreError> {
        if !is_unit_interval(suppression_threshold) {
            return Err(CoreError::InvalidSuppressionThreshold(
                suppression_threshold,
            ));
        }

        Ok(Self {
            labels: LabelNormalizer::new(rules),
            suppression_threshold,
            frame: UNIT_FRAME,
        })
    }

    /// Frame substituted for candidates without a box. Must be expressed in
    /// the same units as the boxes the vision capability reports.
    pub fn with_frame(mut self, frame: BoundingBox) -> Self {
        self.frame = frame;
        self
    }

    pub fn suppression_threshold(&self) -> f64 {
        self.suppression_threshold
    }

    pub fn canonical_category(&self, label: &str) -> Option<String> {
        self.labels.canonicalize(label)
    }

    /// Filters by confidence, canonicalizes labels and suppresses duplicate
    /// boxes. Malformed candidates are dropped; only an out-of-range
    /// threshold is an error.
    pub fn normalize(
        &self,
        candidates: &[RawCandidate],
        confidence_threshold: f64,
    ) -> Result<Vec<Detection>, CoreError> {
        if !is_unit_interval(confidence_threshold) {
            return Err(CoreError::InvalidThreshold(confidence_threshold));
        }

        let mut accepted = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Some(detection) = self.accept(candidate, confidence_threshold) {
                accepted.push(detection);
            }
        }

        let filtered = accepted.len();
        let detections = suppress_duplicates(accepted, self.suppression_threshold);

        debug!(
            received = candidates.len(),
            filtered,
            kept = detections.len(),
            "normalized detections"
        );

        Ok(detections)
    }

    fn accept(&self, candidate: &RawCandidate, confidence_threshold: f64) -> Option<Detection> {
        let confidence = candidate.confidence;
        if !is_unit_interval(confidence) {
            debug!(label = %candidate.label, confidence, "dropping candidate with invalid confidence");
            return None;
        }

        if confidence < confidence_threshold {
            return None;
        }

        let category = self.labels.canonicalize(&candidate.label)?;

        let (bbox, localized) = match &candidate.bbox {
            None => (self.frame, false),
            Some(coords) => match BoundingBox::from_slice(coords) {
                Some(bbox) => (bbox, true),
                None => {
                    debug!(label = %candidate.label, ?coords, "dropping candidate with malformed box");
                    return None;
                }
            },
        };

        Some(Detection {
            category,
            confidence,
            bbox,
            localized,
        })
    }
}

impl Default for DetectionNormalizer {
    fn default() -> Self {
        Self {
            labels: LabelNormalizer::default(),
            suppression_threshold: DEFAULT_SUPPRESSION_THRESHOLD,
            frame: UNIT_FRAME,
        }
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
