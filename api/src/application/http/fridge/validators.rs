use fridgevision_core::domain::recipe::RecipePreferences;

use crate::application::http::{
    image_upload::ImageUpload, server::api_entities::api_error::ApiError,
};

/// Text parts accepted next to the image on `/fridge/analyze`.
#[derive(Debug, Default, PartialEq)]
pub struct FridgeAnalysisForm {
    pub confidence_threshold: Option<f64>,
    pub preferences: RecipePreferences,
    pub max_results: Option<usize>,
}

impl TryFrom<&ImageUpload> for FridgeAnalysisForm {
    type Error = ApiError;

    fn try_from(upload: &ImageUpload) -> Result<Self, Self::Error> {
        let max_results = upload.parse_field::<usize>("max_results")?;
        if max_results == Some(0) {
            return Err(ApiError::BadRequest(
                "max_results must be between 1 and 100".to_string(),
            ));
        }

        Ok(Self {
            confidence_threshold: upload.parse_field::<f64>("confidence_threshold")?,
            preferences: RecipePreferences {
                cuisine: upload.field("cuisine").map(str::to_string),
                diet: upload.field("diet").map(str::to_string),
                max_ready_time: upload.parse_field::<u32>("max_ready_time")?,
            },
            max_results: max_results.map(|n| n.min(100)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn upload(fields: &[(&str, &str)]) -> ImageUpload {
        ImageUpload {
            image_data: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_form_fields_are_optional() {
        let form = FridgeAnalysisForm::try_from(&upload(&[("cuisine", "  ")])).unwrap();
        assert_eq!(form, FridgeAnalysisForm::default());
    }

    #[test]
    fn test_form_parses_preferences() {
        let form = FridgeAnalysisForm::try_from(&upload(&[
            ("cuisine", "Mexican"),
            ("max_ready_time", "30"),
            ("max_results", "3"),
            ("confidence_threshold", "0.4"),
        ]))
        .unwrap();

        assert_eq!(form.preferences.cuisine.as_deref(), Some("Mexican"));
        assert_eq!(form.preferences.max_ready_time, Some(30));
        assert_eq!(form.max_results, Some(3));
        assert_eq!(form.confidence_threshold, Some(0.4));
    }

    #[test]
    fn test_form_rejects_garbage_numbers() {
        assert!(FridgeAnalysisForm::try_from(&upload(&[("max_ready_time", "soon")])).is_err());
        assert!(FridgeAnalysisForm::try_from(&upload(&[("max_results", "0")])).is_err());
    }
}
