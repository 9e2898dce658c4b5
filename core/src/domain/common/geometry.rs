use serde::{Deserialize, Serialize};

/// Axis-aligned box in image-relative coordinates, serialized as
/// `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Unit square, the default frame for candidates reported without a box.
pub const UNIT_FRAME: BoundingBox = BoundingBox {
    x1: 0.0,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

impl BoundingBox {
    /// Builds a box, rejecting non-finite coordinates and inverted or empty
    /// extents.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Self> {
        let finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
        if !finite || x1 >= x2 || y1 >= y2 {
            return None;
        }

        Some(Self { x1, y1, x2, y2 })
    }

    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        match coords {
            [x1, y1, x2, y2] => Self::new(*x1, *y1, *x2, *y2),
            _ => None,
        }
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_degenerate(&self) -> bool {
        let area = self.area();
        area.is_nan() || area <= 0.0
    }

    pub fn intersection_area(&self, other: &BoundingBox) -> f64 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        (x2 - x1).max(0.0) * (y2 - y1).max(0.0)
    }

    /// Intersection over union. Degenerate boxes score 0 against anything,
    /// including themselves.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        if self.is_degenerate() || other.is_degenerate() {
            return 0.0;
        }

        let intersection = self.intersection_area(other);
        if intersection <= 0.0 {
            return 0.0;
        }

        let union = self.area() + other.area() - intersection;
        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = String;

    fn try_from(value: [f64; 4]) -> Result<Self, Self::Error> {
        BoundingBox::from_slice(&value)
            .ok_or_else(|| format!("invalid bounding box: {:?}", value))
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(value: BoundingBox) -> Self {
        [value.x1, value.y1, value.x2, value.y2]
    }
}

/// Free-function form used by the suppression pass.
pub fn iou(a: &BoundingBox, b: &BoundingBox) -> f64 {
    a.iou(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x1: f64, y1: f64, x2: f64, y2: f64) -> BoundingBox {
        BoundingBox::new(x1, y1, x2, y2).expect("valid box")
    }

    #[test]
    fn test_iou_identical_boxes_is_one() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        assert!((a.iou(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iou_is_symmetric() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        let b = bbox(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.iou(&b), b.iou(&a));
        // 25 / (100 + 100 - 25)
        assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-12);
    }

    #[test]
    fn test_iou_disjoint_and_touching_boxes_is_zero() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&bbox(20.0, 20.0, 30.0, 30.0)), 0.0);
        assert_eq!(a.iou(&bbox(10.0, 0.0, 20.0, 10.0)), 0.0);
    }

    #[test]
    fn test_iou_degenerate_box_is_zero() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        let flat = BoundingBox {
            x1: 2.0,
            y1: 2.0,
            x2: 2.0,
            y2: 8.0,
        };
        assert_eq!(a.iou(&flat), 0.0);
        assert_eq!(flat.iou(&flat), 0.0);
    }

    #[test]
    fn test_new_rejects_malformed_coordinates() {
        assert!(BoundingBox::new(10.0, 0.0, 0.0, 10.0).is_none());
        assert!(BoundingBox::new(0.0, 5.0, 10.0, 5.0).is_none());
        assert!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_none());
        assert!(BoundingBox::from_slice(&[0.0, 0.0, 1.0]).is_none());
    }

    #[test]
    fn test_serializes_as_four_tuple() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        let json = serde_json::to_value(a).unwrap();
        assert_eq!(json, serde_json::json!([0.0, 0.0, 10.0, 10.0]));

        let parsed: Result<BoundingBox, _> = serde_json::from_value(serde_json::json!([5, 0, 1, 1]));
        assert!(parsed.is_err());
    }
}
