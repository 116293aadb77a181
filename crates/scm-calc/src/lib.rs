//! # SCM Calculation Engine
//!
//! 재고 보충 의사결정의 폐쇄형 계산 모듈 모음.
//! 모든 함수는 순수·동기 계산이며 입력을 변경하지 않는다.

pub mod eoq;
pub mod reorder;
pub mod reorder_point;
pub mod safety_stock;
pub mod scenario;
pub mod scoring;

// Re-export 주요 타입
pub use eoq::{calculate_eoq, EoqInput, EoqResult};
pub use reorder::{convert_to_reorder_item, ProductReorderData, ReorderItem};
pub use reorder_point::{calculate_reorder_point, should_reorder};
pub use safety_stock::{calculate_safety_stock, SafetyStockInput, SafetyStockResult};
pub use scenario::{run_bulk_simulation, run_scenario_simulation, SimulationInput, SimulationResult};
pub use scoring::{calculate_order_score, calculate_order_score_list, OrderScoringInput};

/// 정수 반올림 (절반은 +∞ 방향, JS `Math.round` 와 동일)
pub(crate) fn round_i64(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// 소수점 1자리 반올림
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_i64_halves_go_up() {
        assert_eq!(round_i64(2.5), 3);
        assert_eq!(round_i64(2.4), 2);
        // 음수 절반은 +∞ 방향: -2.5 → -2
        assert_eq!(round_i64(-2.5), -2);
        assert_eq!(round_i64(-2.6), -3);
        assert_eq!(round_i64(-0.5), 0);
        assert_eq!(round_i64(0.0), 0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.24), 1.2);
    }
}
