use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const CATEGORY_GENERAL: &str = "general";
pub const CATEGORY_PRICING: &str = "pricing";
pub const CATEGORY_BENEFITS: &str = "benefits";
pub const CATEGORY_WELCOME: &str = "welcome";
pub const CATEGORY_MULTIPLE_LOCATIONS: &str = "multiple-locations";
pub const CATEGORY_PARKING: &str = "parking";

/// Categories shown to every visitor regardless of recommendation.
pub const DEFAULT_CATEGORY_IDS: &[&str] = &[CATEGORY_GENERAL, CATEGORY_PRICING, CATEGORY_BENEFITS];

/// Placeholder replaced with the recommended membership's display name.
pub const MEMBERSHIP_TYPE_PLACEHOLDER: &str = "%MEMBERSHIP_TYPE%";
/// Placeholder replaced with the dollar-prefixed promo cost.
pub const PRICE_PLACEHOLDER: &str = "%PRICE%";

const BUILTIN_CATALOG: &str = include_str!("../../../config/faq.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqQuestion {
    pub id: String,
    pub question: String,
    /// Answer template; may contain the `%MEMBERSHIP_TYPE%` and `%PRICE%` placeholders.
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    pub title: String,
    pub questions: Vec<FaqQuestion>,
}

/// The static FAQ catalog. Category order is the order the page renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCatalog {
    pub categories: Vec<FaqCategory>,
}

impl FaqCatalog {
    /// The catalog compiled into the binary from `config/faq.yaml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not a valid catalog.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let catalog: FaqCatalog = serde_yaml::from_str(content)?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&FaqCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Load and validate an FAQ catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_faq_catalog(path: &Path) -> Result<FaqCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;

    FaqCatalog::from_yaml(&content)
}

fn validate_catalog(catalog: &FaqCatalog) -> Result<(), ConfigError> {
    let mut seen_categories = HashSet::new();
    let mut seen_questions = HashSet::new();

    for category in &catalog.categories {
        if category.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category id must be non-empty".to_string(),
            ));
        }

        if category.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has an empty title",
                category.id
            )));
        }

        if !seen_categories.insert(category.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category id: '{}'",
                category.id
            )));
        }

        for question in &category.questions {
            if question.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{}' has a question with an empty id",
                    category.id
                )));
            }

            if !seen_questions.insert(question.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate question id: '{}' (in category '{}')",
                    question.id, category.id
                )));
            }
        }
    }

    for required in DEFAULT_CATEGORY_IDS {
        if !seen_categories.contains(required) {
            return Err(ConfigError::Validation(format!(
                "required category '{required}' is missing"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "faq_test.rs"]
mod tests;
