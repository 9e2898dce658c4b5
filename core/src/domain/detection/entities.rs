use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::common::geometry::BoundingBox;

/// A recognized food instance after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    /// Canonical snake-case token, e.g. `bell_pepper`
    pub category: String,
    pub confidence: f64,
    #[schema(value_type = Vec<f64>, example = json!([0.0, 0.0, 10.0, 10.0]))]
    pub bbox: BoundingBox,
    /// `false` when the upstream model reported presence without a box and
    /// the full frame was substituted.
    pub localized: bool,
}

/// A candidate exactly as the vision capability reported it.
///
/// Deserialization is lenient: a non-numeric confidence or box coordinate is
/// kept as `NaN`, and a non-string label becomes empty, so the normalizer can
/// drop that single candidate instead of the whole payload failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawCandidate {
    #[serde(
        default,
        deserialize_with = "lenient_label",
        alias = "name",
        alias = "class",
        alias = "item"
    )]
    pub label: String,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "lenient_coords", alias = "box", alias = "box_2d")]
    pub bbox: Option<Vec<f64>>,
}

impl RawCandidate {
    pub fn new(label: impl Into<String>, confidence: f64, bbox: Option<[f64; 4]>) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox: bbox.map(|b| b.to_vec()),
        }
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn value_as_f64(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

fn lenient_coords<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let coords = match value {
        serde_json::Value::Null => None,
        serde_json::Value::Array(items) => Some(items.iter().map(value_as_f64).collect()),
        // present but unusable; an empty list never forms a valid box
        _ => Some(Vec::new()),
    };
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_candidate_accepts_aliases_and_numeric_strings() {
        let raw: RawCandidate =
            serde_json::from_value(json!({"name": "Milk", "confidence": "0.8", "box": [0, 0, 1, 1]}))
                .unwrap();
        assert_eq!(raw.label, "Milk");
        assert_eq!(raw.confidence, 0.8);
        assert_eq!(raw.bbox, Some(vec![0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_raw_candidate_keeps_garbage_as_nan() {
        let raw: RawCandidate =
            serde_json::from_value(json!({"label": "egg", "confidence": "high", "bbox": ["a", 1, 2, 3]}))
                .unwrap();
        assert!(raw.confidence.is_nan());
        let coords = raw.bbox.unwrap();
        assert!(coords[0].is_nan());
        assert_eq!(coords.len(), 4);
    }

    #[test]
    fn test_raw_candidate_missing_box_is_none() {
        let raw: RawCandidate =
            serde_json::from_value(json!({"label": "egg", "confidence": 0.9, "bbox": null})).unwrap();
        assert!(raw.bbox.is_none());

        let raw: RawCandidate = serde_json::from_value(json!({"label": "egg"})).unwrap();
        assert!(raw.bbox.is_none());
        assert!(raw.confidence.is_nan());
    }

    #[test]
    fn test_raw_candidate_non_string_label_is_empty() {
        let raw: RawCandidate =
            serde_json::from_value(json!({"label": null, "confidence": 0.9})).unwrap();
        assert_eq!(raw.label, "");

        let raw: RawCandidate =
            serde_json::from_value(json!({"name": 42, "confidence": 0.9})).unwrap();
        assert_eq!(raw.label, "");
    }
}
