pub mod analyze_image;
pub mod normalize_detections;
