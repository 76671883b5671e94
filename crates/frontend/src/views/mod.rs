//! Содержимое вкладок дашборда.
//!
//! Каждое представление получает нужные ему сервисы через props.

pub mod dashboard;
pub mod data_features;
pub mod evaluation;
pub mod recommendations;
pub mod visualization;

pub use dashboard::DashboardView;
pub use data_features::DataFeaturesView;
pub use evaluation::EvaluationView;
pub use recommendations::RecommendationsView;
pub use visualization::VisualizationView;
