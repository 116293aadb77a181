//! 재고상태 분류
//!
//! 7단계 재고상태를 판정하는 공용 임계값 함수.
//! 스코어링/발주추천/최적화 컴포넌트는 모두 이 enum 을 받아
//! 각자의 점수표로 변환한다. 비교 로직이 한 곳에만 존재하도록 유지할 것.

use serde::{Deserialize, Serialize};

/// 재고상태 (7단계)
///
/// 판정 조건 (위에서부터 첫 일치):
/// - 품절: 현재고 = 0
/// - 위험: 현재고 < 안전재고 × 0.5
/// - 부족: 현재고 < 안전재고
/// - 주의: 현재고 < 발주점
/// - 적정: 현재고 < 안전재고 × 3.0
/// - 과다: 현재고 < 안전재고 × 5.0
/// - 과잉: 현재고 ≥ 안전재고 × 5.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    OutOfStock,
    Critical,
    Shortage,
    Caution,
    Optimal,
    Excess,
    Overstock,
}

impl InventoryStatus {
    /// 상태 키 문자열 (외부 계약의 snake_case 값)
    pub fn key(&self) -> &'static str {
        match self {
            Self::OutOfStock => "out_of_stock",
            Self::Critical => "critical",
            Self::Shortage => "shortage",
            Self::Caution => "caution",
            Self::Optimal => "optimal",
            Self::Excess => "excess",
            Self::Overstock => "overstock",
        }
    }

    /// 조치 필요 여부 (적정 상태만 false)
    pub fn needs_action(&self) -> bool {
        !matches!(self, Self::Optimal)
    }

    /// 긴급도 (0-3)
    pub fn urgency_level(&self) -> u8 {
        match self {
            Self::OutOfStock | Self::Critical => 3,
            Self::Shortage | Self::Overstock => 2,
            Self::Caution | Self::Excess => 1,
            Self::Optimal => 0,
        }
    }

    /// 발주가 필요한 상태인지 여부
    pub fn needs_reorder(&self) -> bool {
        matches!(
            self,
            Self::OutOfStock | Self::Critical | Self::Shortage | Self::Caution
        )
    }

    /// 재고 과다 상태인지 여부
    pub fn is_overstocked(&self) -> bool {
        matches!(self, Self::Excess | Self::Overstock)
    }

    /// 권장 조치 문구
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::OutOfStock => "즉시 긴급 발주 필요",
            Self::Critical => "긴급 발주 권장, 리드타임 단축 협의 필요",
            Self::Shortage => "발주 진행 필요",
            Self::Caution => "발주 검토 권장",
            Self::Optimal => "적정 재고 유지 중",
            Self::Excess => "재고 소진 방안 검토 (프로모션, 타 사업장 이동)",
            Self::Overstock => "재고 처분 계획 수립 필요 (할인, 반품, 폐기 검토)",
        }
    }
}

/// 재고상태 분류
///
/// 입력을 검증하지 않는다. 음수 입력도 동일한 비교 규칙으로 판정되며
/// 어떤 경우에도 panic 하지 않는다.
pub fn classify_inventory_status(
    current_stock: i64,
    safety_stock: i64,
    reorder_point: i64,
) -> InventoryStatus {
    let current = current_stock as f64;
    let safety = safety_stock as f64;

    if current_stock == 0 {
        InventoryStatus::OutOfStock
    } else if current < safety * 0.5 {
        InventoryStatus::Critical
    } else if current_stock < safety_stock {
        InventoryStatus::Shortage
    } else if current_stock < reorder_point {
        InventoryStatus::Caution
    } else if current < safety * 3.0 {
        InventoryStatus::Optimal
    } else if current < safety * 5.0 {
        InventoryStatus::Excess
    } else {
        InventoryStatus::Overstock
    }
}
