//! Intellectual-property risk scoring for images.
//!
//! Per-category signals from a vision provider, either direct numeric scores
//! or a qualitative [`analyzers::LlmInsight`], are reduced to one weighted
//! score and a [`risk::RiskTier`] by [`aggregator::RiskAggregator`].

pub mod aggregator;
pub mod analyzers;
pub mod config;
pub mod engine;
pub mod error;
pub mod provider;
pub mod reporter;
pub mod risk;
pub mod validate;
pub mod weights;

pub use aggregator::RiskAggregator;
pub use error::{Result, RiskError};
pub use risk::{AnalysisResult, RiskCategory, RiskResult, RiskTier};
pub use weights::CategoryWeights;
