use std::path::Path;

use super::*;

fn question(id: &str) -> FaqQuestion {
    FaqQuestion {
        id: id.to_string(),
        question: format!("Question {id}?"),
        answer: "An answer.".to_string(),
    }
}

fn category(id: &str, questions: Vec<FaqQuestion>) -> FaqCategory {
    FaqCategory {
        id: id.to_string(),
        title: format!("{id} title"),
        questions,
    }
}

fn minimal_catalog() -> FaqCatalog {
    FaqCatalog {
        categories: vec![
            category("general", vec![question("g1")]),
            category("pricing", vec![question("p1")]),
            category("benefits", vec![question("b1")]),
        ],
    }
}

#[test]
fn validate_accepts_minimal_catalog() {
    assert!(validate_catalog(&minimal_catalog()).is_ok());
}

#[test]
fn validate_rejects_duplicate_category() {
    let mut catalog = minimal_catalog();
    catalog
        .categories
        .push(category("pricing", vec![question("p2")]));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("duplicate category id"));
}

#[test]
fn validate_rejects_duplicate_question_across_categories() {
    let mut catalog = minimal_catalog();
    catalog.categories[2].questions.push(question("g1"));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("duplicate question id: 'g1'"));
}

#[test]
fn validate_rejects_empty_category_id() {
    let mut catalog = minimal_catalog();
    catalog.categories.push(category("  ", vec![]));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("category id must be non-empty"));
}

#[test]
fn validate_rejects_empty_title() {
    let mut catalog = minimal_catalog();
    catalog.categories[0].title = String::new();
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("empty title"));
}

#[test]
fn validate_rejects_missing_default_category() {
    let mut catalog = minimal_catalog();
    catalog.categories.retain(|c| c.id != "benefits");
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("required category 'benefits'"));
}

#[test]
fn from_yaml_reports_parse_errors() {
    let result = FaqCatalog::from_yaml("categories: [not, a, category]");
    assert!(matches!(result, Err(ConfigError::CatalogParse(_))));
}

#[test]
fn builtin_catalog_declares_every_category_in_page_order() {
    let catalog = FaqCatalog::builtin().expect("embedded catalog should be valid");
    let ids: Vec<_> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            CATEGORY_GENERAL,
            CATEGORY_PRICING,
            CATEGORY_BENEFITS,
            CATEGORY_WELCOME,
            CATEGORY_MULTIPLE_LOCATIONS,
            CATEGORY_PARKING,
        ]
    );
    for category in &catalog.categories {
        assert!(
            !category.questions.is_empty(),
            "category '{}' should have at least one question",
            category.id
        );
    }
}

#[test]
fn builtin_catalog_uses_placeholders() {
    let catalog = FaqCatalog::builtin().unwrap();
    let pricing = catalog.category(CATEGORY_PRICING).unwrap();
    assert!(pricing
        .questions
        .iter()
        .any(|q| q.answer.contains(PRICE_PLACEHOLDER)
            && q.answer.contains(MEMBERSHIP_TYPE_PLACEHOLDER)));
}

#[test]
fn category_lookup_misses_unknown_id() {
    let catalog = minimal_catalog();
    assert!(catalog.category("general").is_some());
    assert!(catalog.category("parking").is_none());
}

#[test]
fn load_faq_catalog_reports_missing_file() {
    let result = load_faq_catalog(Path::new("/nonexistent/faq.yaml"));
    assert!(matches!(result, Err(ConfigError::CatalogIo { .. })));
}

#[test]
fn load_faq_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("faq.yaml");
    assert!(
        path.exists(),
        "faq.yaml missing at {path:?}, required for this test"
    );
    let catalog = load_faq_catalog(&path).expect("failed to load faq.yaml");
    assert_eq!(catalog, FaqCatalog::builtin().unwrap());
}
