//! # SCM Advisor
//!
//! 갭 규칙 기반 추천 모듈 (재고 최적화 추천, KPI 개선 제안)

pub mod gap_rule;
pub mod kpi;
pub mod optimization;

// Re-export 주요 타입
pub use gap_rule::{GapDirection, GapRule, Materiality, Priority};
pub use kpi::{
    filter_proposals_by_category, generate_kpi_improvement_proposals, sort_proposals_by_priority,
    ImprovementProposal, KpiCategory, KpiMetrics, KpiTarget,
};
pub use optimization::{
    generate_bulk_optimization_recommendations, generate_inventory_optimization_recommendations,
    summarize_organization_optimization,
    InventoryOptimizationInput, OptimizationMetrics, OptimizationRecommendation,
    OptimizationType, OrganizationOptimizationSummary,
};
