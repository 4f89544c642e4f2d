//! Subcommand handlers.
//!
//! Each handler loads its JSON inputs, calls into `dpm_insights`, and returns
//! the document `main` prints. Only input loading can fail.

use std::path::Path;

use anyhow::Context;
use dpm_core::{AppConfig, Breakdown, Recommendation, VisitCounts};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Read and deserialize a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize a command's document in the layout the environment expects.
pub(crate) fn render_output(config: &AppConfig, output: &Value) -> anyhow::Result<String> {
    let rendered = if config.pretty_output() {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(rendered)
}

pub(crate) fn run_summary(
    config: &AppConfig,
    breakdown_path: &Path,
    regular_cost: Option<Decimal>,
) -> anyhow::Result<Value> {
    let breakdown: Breakdown = read_json(breakdown_path)?;
    let regular_cost = regular_cost
        .or(config.default_regular_admission_cost)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no regular admission cost; pass --regular-cost or set DPM_REGULAR_ADMISSION_COST"
            )
        })?;
    Ok(summary_document(&breakdown, regular_cost))
}

fn summary_document(breakdown: &Breakdown, regular_cost: Decimal) -> Value {
    let summary = dpm_insights::compute_summary(breakdown, regular_cost);
    let rows = |items: Vec<&dpm_core::LineItem>| -> Vec<Value> {
        items
            .into_iter()
            .map(|item| {
                json!({
                    "label": item.label,
                    "amount": item.display_amount(),
                    "details": item.details,
                })
            })
            .collect()
    };

    json!({
        "charges": rows(breakdown.charges().collect()),
        "savings": rows(breakdown.savings().collect()),
        "guestSavingsDetails": breakdown.guest_savings_details,
        "regularAdmissionCost": regular_cost,
        "summary": summary,
        "empty": summary.is_empty(),
    })
}

pub(crate) fn run_distribution(
    recommendation_path: Option<&Path>,
    science: u32,
    dpkh: u32,
    dpkr: u32,
) -> anyhow::Result<Value> {
    let counts = match recommendation_path {
        Some(path) => read_json::<Recommendation>(path)?.visit_counts(),
        None => VisitCounts::new(science, dpkh, dpkr),
    };
    Ok(json!(dpm_insights::analyze_distribution(&counts)))
}

pub(crate) fn run_seasonal(
    total: Option<u64>,
    recommendation_path: Option<&Path>,
) -> anyhow::Result<Value> {
    let total = match (total, recommendation_path) {
        (Some(total), _) => total,
        (None, Some(path)) => read_json::<Recommendation>(path)?.visit_counts().total(),
        (None, None) => anyhow::bail!("pass --total or --recommendation"),
    };
    Ok(seasonal_document(total))
}

fn seasonal_document(total: u64) -> Value {
    let months: Vec<Value> = dpm_insights::estimate_monthly(total)
        .iter()
        .map(|m| json!({ "month": m.label(), "visits": m.visits }))
        .collect();
    json!({ "totalVisits": total, "months": months })
}

pub(crate) fn run_faq(
    config: &AppConfig,
    recommendation_path: Option<&Path>,
) -> anyhow::Result<Value> {
    let catalog = config
        .faq_catalog()
        .context("failed to load FAQ catalog")?;
    let recommendation = recommendation_path
        .map(read_json::<Recommendation>)
        .transpose()?;

    let categories: Vec<_> = dpm_insights::select_categories(&catalog, recommendation.as_ref())
        .into_iter()
        .map(|category| dpm_insights::render_category(category, recommendation.as_ref()))
        .collect();
    Ok(json!({ "categories": categories }))
}

pub(crate) fn run_banner(recommendation_path: &Path) -> anyhow::Result<Value> {
    let recommendation: Recommendation = read_json(recommendation_path)?;
    Ok(json!({ "banner": dpm_insights::promo_banner(&recommendation) }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use dpm_core::{Environment, LineItem};

    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            faq_path: None,
            default_regular_admission_cost: None,
        }
    }

    /// Write `content` to a per-process file under the system temp dir.
    fn fixture(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dpm-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn output_layout_follows_environment() {
        let doc = json!({ "banner": null });
        assert_eq!(render_output(&config(), &doc).unwrap(), r#"{"banner":null}"#);

        let mut cfg = config();
        cfg.env = Environment::Development;
        assert!(render_output(&cfg, &doc).unwrap().contains('\n'));
    }

    #[test]
    fn summary_document_partitions_rows() {
        let breakdown = Breakdown::new(vec![
            LineItem::new("Membership", Decimal::from(100)),
            LineItem::new("Guest admission", Decimal::from(-20)),
        ]);
        let doc = summary_document(&breakdown, Decimal::from(150));
        assert_eq!(doc["charges"][0]["label"], "Membership");
        assert_eq!(doc["savings"][0]["label"], "Guest admission");
        assert_eq!(doc["summary"]["savingsPercentage"], 47);
        assert_eq!(doc["empty"], false);
    }

    #[test]
    fn summary_requires_regular_cost() {
        let path = fixture("breakdown-no-cost.json", r#"{"items": []}"#);
        let err = run_summary(&config(), &path, None).unwrap_err();
        assert!(err.to_string().contains("--regular-cost"));
    }

    #[test]
    fn summary_uses_configured_regular_cost() {
        let path = fixture(
            "breakdown.json",
            r#"{"items": [{"label": "A", "cost": 100}]}"#,
        );
        let mut cfg = config();
        cfg.default_regular_admission_cost = Some(Decimal::from(150));
        let doc = run_summary(&cfg, &path, None).unwrap();
        assert_eq!(doc["summary"]["savingsPercentage"], 33);
    }

    #[test]
    fn summary_reports_unreadable_file() {
        let err = run_summary(
            &config(),
            Path::new("/nonexistent/breakdown.json"),
            Some(Decimal::ONE),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn distribution_from_flags() {
        let doc = run_distribution(None, 10, 0, 0).unwrap();
        assert_eq!(doc["entries"][0]["percentageOfTotal"], 100);
        assert_eq!(doc["kind"]["type"], "exclusive");
    }

    #[test]
    fn distribution_from_recommendation() {
        let path = fixture(
            "rec-distribution.json",
            r#"{"bestMembershipType": "Science", "scienceVisits": 8, "dpkhVisits": 1, "dpkrVisits": 1}"#,
        );
        let doc = run_distribution(Some(&path), 0, 0, 0).unwrap();
        assert_eq!(doc["kind"]["type"], "primary");
        assert_eq!(doc["kind"]["percentage"], 80);
    }

    #[test]
    fn seasonal_document_has_twelve_labeled_months() {
        let doc = seasonal_document(8);
        let months = doc["months"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[6]["month"], "Jul");
        assert_eq!(months[6]["visits"], 3);
    }

    #[test]
    fn seasonal_from_recommendation_uses_visit_total() {
        let path = fixture(
            "rec-seasonal.json",
            r#"{"bestMembershipType": "Welcome", "scienceVisits": 50, "dpkhVisits": 50}"#,
        );
        let doc = run_seasonal(None, Some(&path)).unwrap();
        assert_eq!(doc["totalVisits"], 100);
    }

    #[test]
    fn faq_renders_selected_categories() {
        let path = fixture(
            "rec-faq.json",
            r#"{"bestMembershipType": "Welcome", "bestMembershipPromoCost": 25}"#,
        );
        let doc = run_faq(&config(), Some(&path)).unwrap();
        let categories = doc["categories"].as_array().unwrap();
        let ids: Vec<_> = categories.iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["general", "pricing", "benefits", "welcome"]);
        let answers = serde_json::to_string(&doc).unwrap();
        assert!(!answers.contains("%PRICE%"));
        assert!(answers.contains("$25"));
    }

    #[test]
    fn banner_is_null_for_pay_as_you_go() {
        let path = fixture(
            "rec-banner.json",
            r#"{"bestMembershipType": "PayAsYouGo", "bestMembershipSavings": 10}"#,
        );
        let doc = run_banner(&path).unwrap();
        assert!(doc["banner"].is_null());
    }
}
