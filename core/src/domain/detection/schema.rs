use serde_json::json;

/// Returns the JSON schema for vision model food detection responses
pub fn get_detection_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "confidence": { "type": "number" },
                        "bbox": {
                            "type": "array",
                            "items": { "type": "number" }
                        }
                    },
                    "required": ["name", "confidence"]
                }
            }
        },
        "required": ["items"]
    })
}

/// Builds the instruction sent alongside the image.
pub fn detection_prompt(confidence_hint: f64) -> String {
    format!(
        "You are looking at a photo of the inside of a refrigerator. \
         List every distinct food item you can see. For each item give a short \
         generic name (for example \"milk\", \"bell pepper\", \"eggs\"), a confidence \
         between 0 and 1, and a bounding box [x1, y1, x2, y2] with coordinates \
         normalized to the image size (0 to 1). Omit the box if you cannot localize \
         the item. Only report items with confidence of at least {:.2}. \
         Report each physical item once.",
        confidence_hint
    )
}
