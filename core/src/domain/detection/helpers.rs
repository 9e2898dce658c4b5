use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::entities::{Detection, RawCandidate},
};

/// Greedy per-category non-max suppression.
///
/// Groups keep the order in which their category first appears in
/// `detections`; inside a group survivors are sorted by descending
/// confidence, ties keeping input order. A detection survives only if its IoU
/// with every survivor already kept in its group is below `iou_threshold`.
///
/// Full-frame (non-localized) boxes are compared like any other box, so two
/// of them in one category always suppress each other.
pub fn suppress_duplicates(detections: Vec<Detection>, iou_threshold: f64) -> Vec<Detection> {
    let mut groups: Vec<(String, Vec<Detection>)> = Vec::new();

    for detection in detections {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == detection.category)
        {
            Some((_, members)) => members.push(detection),
            None => groups.push((detection.category.clone(), vec![detection])),
        }
    }

    let mut kept_all = Vec::new();
    for (_, mut members) in groups {
        members.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let mut kept: Vec<Detection> = Vec::with_capacity(members.len());
        for candidate in members {
            let overlaps = kept
                .iter()
                .any(|k| k.bbox.iou(&candidate.bbox) >= iou_threshold);
            if !overlaps {
                kept.push(candidate);
            }
        }

        kept_all.extend(kept);
    }

    kept_all
}

/// Average confidence of a detection list, `0.0` when empty.
pub fn average_confidence(detections: &[Detection]) -> f64 {
    if detections.is_empty() {
        return 0.0;
    }

    detections.iter().map(|d| d.confidence).sum::<f64>() / detections.len() as f64
}

/// Parses the text returned by the vision model into raw candidates.
///
/// Accepts `{"items": [...]}` or a bare array, optionally wrapped in a
/// markdown code fence. Array elements that are not objects are skipped.
pub fn parse_candidates(raw: &str) -> Result<Vec<RawCandidate>, CoreError> {
    let trimmed = strip_code_fence(raw);

    let parsed: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
        tracing::error!("Failed to parse vision response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse vision response: {}", e))
    })?;

    let items = match parsed {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("items") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(CoreError::ExternalServiceError(
                    "No items field in vision response".to_string(),
                ));
            }
        },
        _ => {
            return Err(CoreError::ExternalServiceError(
                "Unexpected vision response shape".to_string(),
            ));
        }
    };

    let total = items.len();
    let candidates: Vec<RawCandidate> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if candidates.len() < total {
        tracing::debug!(
            skipped = total - candidates.len(),
            "skipped unreadable vision candidates"
        );
    }

    Ok(candidates)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop an optional language tag on the opening fence
    let body = body.split_once('\n').map_or("", |(_, rest)| rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}
