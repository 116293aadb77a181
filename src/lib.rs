//! # SCM 재고 보충 의사결정 엔진
//!
//! 제품의 재고 상태, 수요 통계, 분류 등급을 입력받아 우선순위가 매겨진
//! 설명 가능한 추천(발주 수량, 시점, 긴급도, What-if 전망)을 생성한다.
//!
//! 모든 구성 요소는 순수·동기 함수다. I/O, 공유 상태, 락이 없으므로
//! 단건/배치 진입점 모두 임의의 동시성 전략으로 호출해도 안전하다.
//!
//! ## 구성
//!
//! - [`scm_core`] — 도메인 모델 (제품, 재고 포지션, 수요 프로파일, 재고 상태)
//! - [`scm_calc`] — 계산 엔진 (안전재고, 발주점, EOQ, 발주 점수, 재발주, 시나리오)
//! - [`scm_advisor`] — 갭 규칙 기반 추천 (재고 최적화, KPI 개선 제안)
//!
//! ## 예시
//!
//! ```
//! use scm::{classify_inventory_status, InventoryStatus};
//!
//! let status = classify_inventory_status(0, 100, 150);
//! assert_eq!(status, InventoryStatus::OutOfStock);
//! assert!(status.needs_reorder());
//! ```

pub use scm_advisor;
pub use scm_calc;
pub use scm_core;

// 핵심 타입과 진입점 재수출
pub use scm_core::{
    classify_inventory_status, AbcGrade, DemandProfile, InventoryStatus, ProductSnapshot,
    ScmError, StockPosition, XyzGrade,
};

pub use scm_calc::{
    eoq::{calculate_eoq, compare_order_quantity_cost, EoqInput, EoqResult},
    reorder::{
        calculate_reorder_priority, convert_to_reorder_item, sort_reorder_items,
        ProductReorderData, ReorderItem,
    },
    reorder_point::{calculate_order_quantity, calculate_reorder_point, should_reorder},
    safety_stock::{calculate_safety_stock, SafetyStockInput, SafetyStockResult},
    scenario::{run_bulk_simulation, run_scenario_simulation, SimulationInput, SimulationResult},
    scoring::{
        calculate_order_score, calculate_order_score_list, OrderScoringInput, OrderScoringResult,
        PriorityLevel,
    },
};

pub use scm_advisor::{
    generate_bulk_optimization_recommendations, generate_inventory_optimization_recommendations,
    generate_kpi_improvement_proposals,
    sort_proposals_by_priority, summarize_organization_optimization, ImprovementProposal,
    InventoryOptimizationInput, KpiMetrics, KpiTarget, OptimizationRecommendation, Priority,
};
