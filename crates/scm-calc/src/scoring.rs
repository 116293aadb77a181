//! 발주 우선순위 스코어링
//!
//! 재고 긴급도, ABC 등급, 판매 추세, 리드타임 리스크 4개 요소를
//! 합산해 0-100점 우선순위를 계산한다.

use std::cmp::Reverse;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use scm_core::{classify_inventory_status, AbcGrade, InventoryStatus};

/// 스코어링 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderScoringInput {
    /// 현재 재고
    pub current_stock: i64,

    /// 안전재고
    pub safety_stock: i64,

    /// 발주점
    pub reorder_point: i64,

    /// ABC 등급 (미지정 가능)
    pub abc_grade: Option<AbcGrade>,

    /// 리드타임 (일)
    pub lead_time_days: u32,

    /// 최근 구간 판매량
    pub recent_sales: f64,

    /// 이전 구간 판매량
    pub prior_sales: f64,
}

/// 우선순위 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Urgent,
    High,
    Normal,
    Low,
}

impl PriorityLevel {
    /// 총점으로부터 우선순위 등급 결정
    pub fn from_total_score(total_score: u32) -> Self {
        if total_score >= 80 {
            Self::Urgent
        } else if total_score >= 60 {
            Self::High
        } else if total_score >= 40 {
            Self::Normal
        } else {
            Self::Low
        }
    }

    /// 등급별 권장 조치 문구
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Urgent => "즉시 발주 필요 (금일 처리)",
            Self::High => "우선 발주 권장 (1-2일 내 처리)",
            Self::Normal => "정상 발주 진행 (다음 발주일)",
            Self::Low => "발주 보류 가능 (재고 충분)",
        }
    }
}

/// 세부 점수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 재고 긴급도 점수 (0-40)
    pub inventory_urgency: u32,

    /// ABC 등급 점수 (0-30)
    pub abc_score: u32,

    /// 판매 추세 점수 (0-20)
    pub sales_trend: u32,

    /// 리드타임 리스크 점수 (0-10)
    pub lead_time_risk: u32,
}

/// 스코어링 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderScoringResult {
    /// 총점 (0-100, 세부 점수의 합)
    pub total_score: u32,

    /// 세부 점수
    pub breakdown: ScoreBreakdown,

    /// 우선순위 등급
    pub priority_level: PriorityLevel,

    /// 권장 조치
    pub recommendation: String,
}

/// 재고 긴급도 점수 (0-40)
///
/// 재고상태 분류와 동일한 경계, 다른 배점.
fn inventory_urgency_score(status: InventoryStatus) -> u32 {
    match status {
        InventoryStatus::OutOfStock => 40,
        InventoryStatus::Critical => 35,
        InventoryStatus::Shortage => 30,
        InventoryStatus::Caution => 20,
        InventoryStatus::Optimal => 10,
        InventoryStatus::Excess | InventoryStatus::Overstock => 0,
    }
}

/// ABC 등급 점수 (0-30), 미지정 시 중간값 15
pub(crate) fn abc_grade_score(grade: Option<AbcGrade>) -> u32 {
    match grade {
        Some(AbcGrade::A) => 30,
        Some(AbcGrade::B) => 20,
        Some(AbcGrade::C) => 10,
        None => 15,
    }
}

/// 판매 추세 점수 (0-20)
///
/// 증가율 = (최근 − 이전) / 이전. 0% → 10점, +100% → 20점.
/// 이전 판매가 없으면 최근 판매 유무로 10점/0점.
fn sales_trend_score(recent_sales: f64, prior_sales: f64) -> u32 {
    if prior_sales <= 0.0 {
        return if recent_sales > 0.0 { 10 } else { 0 };
    }

    let growth = (recent_sales - prior_sales) / prior_sales;
    let score = (10.0 + growth * 10.0).round();
    score.clamp(0.0, 20.0) as u32
}

/// 리드타임 리스크 점수 (0-10)
///
/// `min(10, round(리드타임 / 3))` — 30일 이상에서 포화.
fn lead_time_risk_score(lead_time_days: u32) -> u32 {
    ((lead_time_days as f64 / 3.0).round() as u32).min(10)
}

/// 발주 우선순위 점수 계산
///
/// 총점은 네 세부 점수의 합이며 별도로 클램프하지 않는다.
pub fn calculate_order_score(input: &OrderScoringInput) -> OrderScoringResult {
    let status = classify_inventory_status(
        input.current_stock,
        input.safety_stock,
        input.reorder_point,
    );

    let breakdown = ScoreBreakdown {
        inventory_urgency: inventory_urgency_score(status),
        abc_score: abc_grade_score(input.abc_grade),
        sales_trend: sales_trend_score(input.recent_sales, input.prior_sales),
        lead_time_risk: lead_time_risk_score(input.lead_time_days),
    };

    let total_score = breakdown.inventory_urgency
        + breakdown.abc_score
        + breakdown.sales_trend
        + breakdown.lead_time_risk;

    let priority_level = PriorityLevel::from_total_score(total_score);

    OrderScoringResult {
        total_score,
        breakdown,
        priority_level,
        recommendation: priority_level.recommendation().to_string(),
    }
}

/// 목록 스코어링 입력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderScoringListItem {
    /// 제품 ID
    pub product_id: String,

    /// 제품명
    pub product_name: String,

    /// 스코어링 입력
    #[serde(flatten)]
    pub input: OrderScoringInput,
}

/// 목록 스코어링 결과 항목 (순위 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOrderScore {
    pub product_id: String,
    pub product_name: String,

    /// 점수 결과
    pub scoring: OrderScoringResult,

    /// 정렬 순위 (1부터)
    pub rank: usize,
}

/// 여러 제품의 발주 우선순위 계산 및 정렬
///
/// 총점 내림차순 안정 정렬. 동점 항목은 입력 순서를 유지한다.
pub fn calculate_order_score_list(items: &[OrderScoringListItem]) -> Vec<RankedOrderScore> {
    tracing::debug!("발주 우선순위 스코어링: {} 품목", items.len());

    let mut scored: Vec<RankedOrderScore> = items
        .par_iter()
        .map(|item| RankedOrderScore {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            scoring: calculate_order_score(&item.input),
            rank: 0,
        })
        .collect();

    scored.sort_by_key(|item| Reverse(item.scoring.total_score));

    for (index, item) in scored.iter_mut().enumerate() {
        item.rank = index + 1;
    }

    scored
}

/// 우선순위 등급별 필터링
pub fn filter_by_priority(
    items: &[RankedOrderScore],
    levels: &[PriorityLevel],
) -> Vec<RankedOrderScore> {
    items
        .iter()
        .filter(|item| levels.contains(&item.scoring.priority_level))
        .cloned()
        .collect()
}

/// 긴급/우선 발주 목록만 추출
pub fn get_urgent_orders(items: &[RankedOrderScore]) -> Vec<RankedOrderScore> {
    filter_by_priority(items, &[PriorityLevel::Urgent, PriorityLevel::High])
}
