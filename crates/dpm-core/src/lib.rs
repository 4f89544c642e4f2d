pub mod app_config;
pub mod breakdown;
pub mod config;
pub mod faq;
pub mod membership;
pub mod recommendation;
pub mod visits;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use breakdown::{Breakdown, GuestSaving, LineItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use faq::{load_faq_catalog, FaqCatalog, FaqCategory, FaqQuestion};
pub use membership::MembershipType;
pub use recommendation::Recommendation;
pub use visits::{Location, VisitCounts};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read FAQ catalog at {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse FAQ catalog: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("FAQ catalog validation failed: {0}")]
    Validation(String),
}
