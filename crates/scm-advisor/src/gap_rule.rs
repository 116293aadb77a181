//! 갭 규칙 엔진
//!
//! "측정값 vs 목표값, 중요도 임계값, 우선순위 티어, 템플릿 조치 목록"
//! 패턴의 공통 부분. 재고 최적화 추천과 KPI 개선 제안이 같은 규칙
//! 구조를 데이터만 바꿔 인스턴스화한다.

use serde::{Deserialize, Serialize};

/// 추천/제안 우선순위
///
/// 정렬 시 `High < Medium < Low` 순서를 그대로 사용한다
/// (오름차순 정렬 = 높은 우선순위 먼저).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// 지표 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapDirection {
    /// 높을수록 좋은 지표 (예: 재고회전율)
    HigherIsBetter,
    /// 낮을수록 좋은 지표 (예: 품절률)
    LowerIsBetter,
}

/// 중요도 임계값
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Materiality {
    /// 절대 갭 기준 (지표 단위)
    Absolute(f64),
    /// 목표 대비 상대 갭 기준 (%)
    RelativePercent(f64),
}

/// 단일 지표 갭 규칙
#[derive(Debug, Clone, Copy)]
pub struct GapRule {
    pub direction: GapDirection,
    pub materiality: Materiality,
}

impl GapRule {
    pub const fn new(direction: GapDirection, materiality: Materiality) -> Self {
        Self {
            direction,
            materiality,
        }
    }

    /// 목표 미달 갭 (미달일 때 양수, 달성이면 0 이하)
    pub fn shortfall(&self, measured: f64, target: f64) -> f64 {
        match self.direction {
            GapDirection::HigherIsBetter => target - measured,
            GapDirection::LowerIsBetter => measured - target,
        }
    }

    /// 목표 달성 여부 (경계 포함)
    pub fn meets_target(&self, measured: f64, target: f64) -> bool {
        self.shortfall(measured, target) <= 0.0
    }

    /// 조치가 필요한 갭이면 `Some(갭)`, 임계값 미만이면 `None`
    pub fn material_gap(&self, measured: f64, target: f64) -> Option<f64> {
        let gap = self.shortfall(measured, target);
        if gap <= 0.0 {
            return None;
        }

        let material = match self.materiality {
            Materiality::Absolute(threshold) => gap > threshold,
            Materiality::RelativePercent(threshold) => {
                target != 0.0 && (gap / target) * 100.0 > threshold
            }
        };

        material.then_some(gap)
    }
}
