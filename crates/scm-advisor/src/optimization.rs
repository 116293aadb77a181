//! 재고 최적화 추천
//!
//! 과잉재고 감소, 발주주기 최적화, EOQ 비용 절감 세 가지 규칙을
//! 독립적으로 평가하고, 중요도 임계값을 넘은 추천만 반환한다.

use std::cmp::Reverse;
use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use scm_calc::eoq::{
    calculate_eoq, compare_order_quantity_cost, EoqInput, DEFAULT_HOLDING_RATE,
    DEFAULT_ORDERING_COST,
};
use scm_core::{classify_inventory_status, AbcGrade, DemandProfile, InventoryStatus,
    ProductSnapshot, StockPosition, XyzGrade};

use crate::gap_rule::Priority;

/// 발주주기 갭 중요도 임계값 (일)
const CYCLE_DIFF_THRESHOLD_DAYS: i64 = 7;

/// EOQ 절감 중요도 임계값 (%)
const EOQ_SAVINGS_THRESHOLD_PERCENT: f64 = 5.0;

/// 과잉재고 연간 유지비용 회수율 가정 (재고가치의 25%)
const EXCESS_RECOVERY_RATE: f64 = 0.25;

/// 최적화 추천 입력 (제품 1건)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOptimizationInput {
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub abc_grade: Option<AbcGrade>,
    pub xyz_grade: Option<XyzGrade>,
    pub unit_price: f64,
    pub average_daily_demand: f64,
    pub lead_time_days: u32,

    /// 현재 사용 중인 발주량
    pub current_order_quantity: Option<f64>,

    /// 1회 발주비용 (기본 50,000원)
    pub ordering_cost: Option<f64>,

    /// 연간 유지비율 (기본 0.25)
    pub holding_rate: Option<f64>,
}

impl InventoryOptimizationInput {
    /// 핵심 도메인 타입으로부터 조립
    pub fn from_parts(
        product: &ProductSnapshot,
        stock: &StockPosition,
        demand: &DemandProfile,
    ) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            sku: product.sku.clone(),
            current_stock: stock.current_stock,
            safety_stock: stock.safety_stock,
            reorder_point: stock.reorder_point,
            abc_grade: product.abc_grade,
            xyz_grade: product.xyz_grade,
            unit_price: product.unit_price,
            average_daily_demand: demand.average_daily_demand,
            lead_time_days: product.lead_time_days,
            current_order_quantity: demand.current_order_quantity,
            ordering_cost: demand.ordering_cost,
            holding_rate: demand.holding_rate,
        }
    }
}

/// 추천 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationType {
    ExcessReduction,
    OrderFrequency,
    EoqCostSaving,
}

/// 추천 지표 (희소 맵: 해당 값이 있을 때만 채운다)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,

    /// 예상 절감액 (원)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_krw: Option<i64>,
}

/// 최적화 추천
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRecommendation {
    #[serde(rename = "type")]
    pub kind: OptimizationType,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub expected_impact: String,
    pub action_items: Vec<String>,
    pub metrics: OptimizationMetrics,
}

// ============================================================================
// 과잉재고 감소 추천
// ============================================================================

/// 과잉재고 감소 추천 생성
///
/// 재고상태가 과다/과잉일 때만 생성. 과잉(안전재고 5배 이상)은 high,
/// 과다(3~5배)는 medium.
pub fn generate_excess_inventory_reduction(
    input: &InventoryOptimizationInput,
) -> Option<OptimizationRecommendation> {
    let status = classify_inventory_status(
        input.current_stock,
        input.safety_stock,
        input.reorder_point,
    );
    if !status.is_overstocked() {
        return None;
    }

    let is_overstock = status == InventoryStatus::Overstock;

    let excess_qty = input.current_stock - input.safety_stock * 3;
    let excess_value = (excess_qty as f64 * input.unit_price).round();
    let days_of_excess =
        (excess_qty as f64 / input.average_daily_demand.max(1.0) * 10.0).round() / 10.0;

    let stock_ratio = if input.safety_stock > 0 {
        (input.current_stock as f64 / input.safety_stock as f64).round() as i64
    } else {
        0
    };

    let action_items: Vec<String> = if is_overstock {
        vec![
            "즉시 할인 프로모션 검토 (10~20% 할인)".into(),
            "타 사업장/창고 재배치 검토".into(),
            "공급자 반품 협의 (가능 시)".into(),
            "폐기 또는 기부 검토 (회전 불가 시)".into(),
            "향후 발주량 축소 (EOQ 재계산)".into(),
        ]
    } else {
        vec![
            "프로모션 또는 번들 상품 기획".into(),
            "타 사업장 재고 이관 검토".into(),
            "발주 주기 연장 또는 발주량 축소".into(),
            "재고 처분 계획 수립 (6개월 이내)".into(),
        ]
    };

    Some(OptimizationRecommendation {
        kind: OptimizationType::ExcessReduction,
        product_id: input.product_id.clone(),
        product_name: input.product_name.clone(),
        sku: input.sku.clone(),
        priority: if is_overstock {
            Priority::High
        } else {
            Priority::Medium
        },
        title: if is_overstock {
            "과잉재고 긴급 처분 필요".into()
        } else {
            "과다재고 감소 권장".into()
        },
        description: format!(
            "현재 재고가 안전재고의 {}으로, 과도한 재고 보유 중입니다. \
             재고 유지비용 증가 및 진부화 리스크가 있습니다.",
            if is_overstock { "5배 이상" } else { "3~5배" }
        ),
        expected_impact: format!(
            "재고 {}개 감소 시 약 {}원의 유동자금 확보 및 연간 유지비용 절감 (재고가치의 20~25%)",
            excess_qty, excess_value as i64
        ),
        action_items,
        metrics: OptimizationMetrics {
            current: Some(format!("{}개 ({}배)", input.current_stock, stock_ratio)),
            recommended: Some(format!("{}개 이하", input.safety_stock * 3)),
            improvement: Some(format!("{}개 감소 (약 {}일분)", excess_qty, days_of_excess)),
            savings_krw: Some((excess_value * EXCESS_RECOVERY_RATE).round() as i64),
        },
    })
}

// ============================================================================
// 발주주기 최적화 추천
// ============================================================================

/// ABC×XYZ 등급별 권장 발주 주기 (일)
///
/// A→C, X→Z 로 갈수록 주기를 늘리는 단조 테이블.
fn recommended_cycle_days(abc: AbcGrade, xyz: XyzGrade) -> i64 {
    match (abc, xyz) {
        (AbcGrade::A, XyzGrade::X) => 7,
        (AbcGrade::A, XyzGrade::Y) => 10,
        (AbcGrade::A, XyzGrade::Z) => 14,
        (AbcGrade::B, XyzGrade::X) => 14,
        (AbcGrade::B, XyzGrade::Y) => 21,
        (AbcGrade::B, XyzGrade::Z) => 30,
        (AbcGrade::C, _) => 30,
    }
}

/// ABC×XYZ 등급별 권장 발주 전략
fn order_strategy(abc: AbcGrade, xyz: XyzGrade) -> &'static str {
    match (abc, xyz) {
        (AbcGrade::A, XyzGrade::X) => "JIT(Just-In-Time) 공급, 자동 발주 시스템 활용",
        (AbcGrade::A, XyzGrade::Y) => "정기 발주 (격주), 수요예측 정교화 필수",
        (AbcGrade::A, XyzGrade::Z) => "혼합 발주 (정기+긴급), 높은 안전재고 유지",
        (AbcGrade::B, XyzGrade::X) => "정기 발주, 적정 재고 유지",
        (AbcGrade::B, XyzGrade::Y) => "주기적 검토, 표준 안전재고",
        (AbcGrade::B, XyzGrade::Z) => "수요패턴 분석 후 발주 주기 조정",
        (AbcGrade::C, XyzGrade::X) => "대량 발주, 낮은 발주빈도 (연 4~12회)",
        (AbcGrade::C, XyzGrade::Y) => "간헐적 검토, 최소 재고 유지",
        (AbcGrade::C, XyzGrade::Z) => "주문생산 검토, 재고 최소화 또는 단종 검토",
    }
}

/// 발주주기 최적화 추천 생성
///
/// ABC/XYZ 등급이 모두 있어야 평가한다. 현재 주기를 추정할 수 있고
/// 권장 주기와의 차이가 7일 미만이면 추천하지 않는다.
pub fn generate_order_frequency_optimization(
    input: &InventoryOptimizationInput,
) -> Option<OptimizationRecommendation> {
    let (abc, xyz) = match (input.abc_grade, input.xyz_grade) {
        (Some(abc), Some(xyz)) => (abc, xyz),
        _ => return None, // 등급 미할당 시 추천 불가
    };

    let recommended_days = recommended_cycle_days(abc, xyz);

    // 현재 발주주기 추정 (현재 발주량 / 일평균 판매량)
    let current_cycle_days = match input.current_order_quantity {
        Some(quantity) if input.average_daily_demand > 0.0 => {
            Some((quantity / input.average_daily_demand).round() as i64)
        }
        _ => None,
    };

    let cycle_diff = current_cycle_days.map(|days| (days - recommended_days).abs());

    if let Some(diff) = cycle_diff {
        if diff < CYCLE_DIFF_THRESHOLD_DAYS {
            return None;
        }
    }

    let priority = match cycle_diff {
        Some(_) if abc == AbcGrade::A => Priority::High,
        Some(_) => Priority::Medium,
        None => Priority::Low,
    };

    let expected_impact = match abc {
        AbcGrade::A => "품절 리스크 감소, 고객 서비스 수준 향상",
        AbcGrade::B => "재고 회전율 개선, 적정 재고 유지",
        AbcGrade::C => "재고 유지비용 절감, 재고 과잉 방지",
    };

    let improvement = match (cycle_diff, current_cycle_days) {
        (Some(diff), Some(current)) if current > recommended_days => {
            format!("발주 주기 단축 ({}일 감소)", diff)
        }
        (Some(diff), Some(_)) => format!("발주 주기 연장 ({}일 증가)", diff),
        _ => "최적 주기 적용".to_string(),
    };

    Some(OptimizationRecommendation {
        kind: OptimizationType::OrderFrequency,
        product_id: input.product_id.clone(),
        product_name: input.product_name.clone(),
        sku: input.sku.clone(),
        priority,
        title: format!("발주주기 최적화 ({:?}{:?} 등급)", abc, xyz),
        description: format!(
            "현재 {:?}등급 (매출 기여도), {:?}등급 (수요 안정성) 제품으로 분류됩니다. \
             이 등급에 맞는 최적 발주 전략을 적용하면 재고효율을 높일 수 있습니다.",
            abc, xyz
        ),
        expected_impact: expected_impact.to_string(),
        action_items: vec![
            format!("발주 주기를 {}일로 조정", recommended_days),
            order_strategy(abc, xyz).to_string(),
            "발주 주기 변경 후 2~4주간 재고 수준 모니터링".into(),
            if xyz == XyzGrade::Z {
                "수요 변동성 높음 → 안전재고 상향 검토".into()
            } else {
                "현재 안전재고 유지".to_string()
            },
        ],
        metrics: OptimizationMetrics {
            current: Some(
                current_cycle_days
                    .map(|days| format!("{}일", days))
                    .unwrap_or_else(|| "미설정".to_string()),
            ),
            recommended: Some(format!("{}일", recommended_days)),
            improvement: Some(improvement),
            savings_krw: None,
        },
    })
}

// ============================================================================
// EOQ 기반 비용 절감 추천
// ============================================================================

/// EOQ 비용 절감 추천 생성
///
/// 현재 발주량과 EOQ 의 연간 총비용을 비교해 절감 비율이 5% 이상이면
/// 추천한다. 절감 비율은 현재 연간 비용 기준이다.
pub fn generate_eoq_cost_saving(
    input: &InventoryOptimizationInput,
) -> Option<OptimizationRecommendation> {
    let annual_demand = (input.average_daily_demand * 365.0).round();
    let current_order_quantity = input.current_order_quantity.unwrap_or(0.0);

    if annual_demand <= 0.0 || current_order_quantity <= 0.0 {
        return None; // 수요 없거나 현재 발주량 미설정 시 추천 불가
    }

    let ordering_cost = input.ordering_cost.unwrap_or(DEFAULT_ORDERING_COST);
    let holding_cost_per_unit =
        input.unit_price * input.holding_rate.unwrap_or(DEFAULT_HOLDING_RATE);

    let eoq_result = calculate_eoq(&EoqInput {
        annual_demand,
        ordering_cost,
        holding_cost_per_unit,
    });
    if eoq_result.eoq == 0 {
        return None;
    }

    let comparison = compare_order_quantity_cost(
        &eoq_result,
        current_order_quantity,
        annual_demand,
        ordering_cost,
        holding_cost_per_unit,
    );

    if comparison.cost_difference <= 0
        || comparison.savings_percent < EOQ_SAVINGS_THRESHOLD_PERCENT
    {
        return None;
    }

    let priority = if comparison.savings_percent >= 20.0 {
        Priority::High
    } else if comparison.savings_percent >= 10.0 {
        Priority::Medium
    } else {
        Priority::Low
    };

    let quantity_diff = eoq_result.eoq as f64 - current_order_quantity;
    let direction = if quantity_diff > 0.0 { "증가" } else { "감소" };
    let diff_percent = (quantity_diff.abs() / current_order_quantity * 100.0).round() as i64;
    let savings_percent_display = comparison.savings_percent.round() as i64;

    Some(OptimizationRecommendation {
        kind: OptimizationType::EoqCostSaving,
        product_id: input.product_id.clone(),
        product_name: input.product_name.clone(),
        sku: input.sku.clone(),
        priority,
        title: format!(
            "EOQ 적용으로 연간 {}% 비용 절감 가능",
            savings_percent_display
        ),
        description: format!(
            "현재 발주량({}개)을 경제적 발주량(EOQ)인 {}개로 조정하면, \
             발주비용과 재고유지비용의 균형을 맞춰 총 재고비용을 최소화할 수 있습니다.",
            current_order_quantity as i64, eoq_result.eoq
        ),
        expected_impact: format!(
            "연간 재고 관련 비용 약 {}원 절감 ({}% 감소)",
            comparison.cost_difference, savings_percent_display
        ),
        action_items: vec![
            format!(
                "발주량을 현재 {}개에서 {}개로 {} ({}% {})",
                current_order_quantity as i64, eoq_result.eoq, direction, diff_percent, direction
            ),
            format!(
                "연간 발주 횟수: {}회 (약 {}일 주기)",
                eoq_result.orders_per_year, eoq_result.order_cycle_days
            ),
            "공급자와 MOQ 협의 (EOQ가 MOQ보다 작을 경우)".into(),
            "1~2회 시범 적용 후 재고 수준 및 비용 검증".into(),
            "EOQ는 수요 변화 시 재계산 필요 (분기별 검토 권장)".into(),
        ],
        metrics: OptimizationMetrics {
            current: Some(format!(
                "{}개 (연간 비용 {}원)",
                current_order_quantity as i64, comparison.actual_annual_cost
            )),
            recommended: Some(format!(
                "{}개 (연간 비용 {}원)",
                eoq_result.eoq, eoq_result.total_annual_cost
            )),
            improvement: Some(format!("{}% 비용 절감", savings_percent_display)),
            savings_krw: Some(comparison.cost_difference),
        },
    })
}

// ============================================================================
// 통합 생성 및 조직 요약
// ============================================================================

/// 제품별 모든 최적화 추천 생성
///
/// 세 규칙을 모두 평가하고 우선순위 순으로 안정 정렬해 반환한다.
pub fn generate_inventory_optimization_recommendations(
    input: &InventoryOptimizationInput,
) -> Vec<OptimizationRecommendation> {
    let mut recommendations: Vec<OptimizationRecommendation> = [
        generate_excess_inventory_reduction(input),
        generate_order_frequency_optimization(input),
        generate_eoq_cost_saving(input),
    ]
    .into_iter()
    .flatten()
    .collect();

    recommendations.sort_by_key(|rec| rec.priority);

    tracing::debug!(
        product_id = %input.product_id,
        count = recommendations.len(),
        "재고 최적화 추천 생성"
    );

    recommendations
}

/// 여러 제품의 최적화 추천 일괄 생성
///
/// 제품별 병렬 계산 후 입력 순서대로 이어 붙인다. 정렬은 제품 내부에서만
/// 이루어지므로 제품 간 순서는 입력 그대로다.
pub fn generate_bulk_optimization_recommendations(
    inputs: &[InventoryOptimizationInput],
) -> Vec<OptimizationRecommendation> {
    let per_product: Vec<Vec<OptimizationRecommendation>> = inputs
        .par_iter()
        .map(generate_inventory_optimization_recommendations)
        .collect();

    let recommendations: Vec<OptimizationRecommendation> =
        per_product.into_iter().flatten().collect();

    tracing::debug!(
        products = inputs.len(),
        count = recommendations.len(),
        "일괄 최적화 추천 생성"
    );

    recommendations
}

/// 유형별 추천 건수
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CountByType {
    pub excess_reduction: usize,
    pub order_frequency: usize,
    pub eoq_cost_saving: usize,
}

/// 우선순위별 추천 건수
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct CountByPriority {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// 조직 전체 최적화 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationOptimizationSummary {
    pub total_products: usize,
    pub products_with_recommendations: usize,
    pub total_recommendations: usize,
    pub by_type: CountByType,
    pub by_priority: CountByPriority,

    /// 전체 예상 절감액 (원)
    pub total_potential_savings: i64,

    /// 상위 5개 추천 (우선순위, 절감액 순)
    pub top_recommendations: Vec<OptimizationRecommendation>,
}

/// 조직 전체 최적화 요약 생성
pub fn summarize_organization_optimization(
    recommendations: &[OptimizationRecommendation],
) -> OrganizationOptimizationSummary {
    let mut by_type = CountByType::default();
    let mut by_priority = CountByPriority::default();
    let mut total_potential_savings = 0i64;
    let mut product_ids: HashSet<&str> = HashSet::new();

    for rec in recommendations {
        match rec.kind {
            OptimizationType::ExcessReduction => by_type.excess_reduction += 1,
            OptimizationType::OrderFrequency => by_type.order_frequency += 1,
            OptimizationType::EoqCostSaving => by_type.eoq_cost_saving += 1,
        }
        match rec.priority {
            Priority::High => by_priority.high += 1,
            Priority::Medium => by_priority.medium += 1,
            Priority::Low => by_priority.low += 1,
        }
        product_ids.insert(rec.product_id.as_str());
        total_potential_savings += rec.metrics.savings_krw.unwrap_or(0);
    }

    let mut top: Vec<OptimizationRecommendation> = recommendations.to_vec();
    top.sort_by_key(|rec| (rec.priority, Reverse(rec.metrics.savings_krw.unwrap_or(0))));
    top.truncate(5);

    OrganizationOptimizationSummary {
        total_products: product_ids.len(),
        products_with_recommendations: product_ids.len(),
        total_recommendations: recommendations.len(),
        by_type,
        by_priority,
        total_potential_savings,
        top_recommendations: top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input() -> InventoryOptimizationInput {
        InventoryOptimizationInput {
            product_id: "P-001".into(),
            product_name: "테스트 제품".into(),
            sku: "SKU-001".into(),
            current_stock: 100,
            safety_stock: 50,
            reorder_point: 100,
            abc_grade: None,
            xyz_grade: None,
            unit_price: 1000.0,
            average_daily_demand: 10.0,
            lead_time_days: 7,
            current_order_quantity: None,
            ordering_cost: None,
            holding_rate: None,
        }
    }

    // ---- 과잉재고 감소 ----

    #[test]
    fn test_excess_math() {
        // 250 = 안전재고 5배 → 과잉, excessQty = 250 - 150 = 100
        let mut data = input();
        data.current_stock = 250;

        let rec = generate_excess_inventory_reduction(&data).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.action_items.len(), 5);
        assert_eq!(rec.metrics.savings_krw, Some(25_000));
        assert_eq!(rec.metrics.improvement.as_deref(), Some("100개 감소 (약 10일분)"));
        assert_eq!(rec.title, "과잉재고 긴급 처분 필요");
    }

    #[test]
    fn test_excess_medium_band() {
        // 3~5배 구간은 medium, 조치 4개
        let mut data = input();
        data.current_stock = 180;

        let rec = generate_excess_inventory_reduction(&data).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.action_items.len(), 4);
        assert_eq!(rec.title, "과다재고 감소 권장");
        // excessQty = 180 - 150 = 30, savings = 30 × 1000 × 0.25
        assert_eq!(rec.metrics.savings_krw, Some(7_500));
    }

    #[rstest]
    #[case(100)] // 적정
    #[case(149)] // 3배 미만
    #[case(80)] // 주의 (발주점 미만)
    #[case(0)] // 품절
    fn test_excess_not_applicable(#[case] current: i64) {
        let mut data = input();
        data.current_stock = current;
        assert!(generate_excess_inventory_reduction(&data).is_none());
    }

    // ---- 발주주기 최적화 ----

    #[test]
    fn test_frequency_requires_both_grades() {
        let mut data = input();
        data.abc_grade = Some(AbcGrade::A);
        assert!(generate_order_frequency_optimization(&data).is_none());

        data.abc_grade = None;
        data.xyz_grade = Some(XyzGrade::X);
        assert!(generate_order_frequency_optimization(&data).is_none());
    }

    #[rstest]
    #[case(AbcGrade::A, XyzGrade::X, 7)]
    #[case(AbcGrade::A, XyzGrade::Y, 10)]
    #[case(AbcGrade::A, XyzGrade::Z, 14)]
    #[case(AbcGrade::B, XyzGrade::X, 14)]
    #[case(AbcGrade::B, XyzGrade::Y, 21)]
    #[case(AbcGrade::B, XyzGrade::Z, 30)]
    #[case(AbcGrade::C, XyzGrade::X, 30)]
    #[case(AbcGrade::C, XyzGrade::Y, 30)]
    #[case(AbcGrade::C, XyzGrade::Z, 30)]
    fn test_cycle_matrix(#[case] abc: AbcGrade, #[case] xyz: XyzGrade, #[case] expected: i64) {
        assert_eq!(recommended_cycle_days(abc, xyz), expected);
    }

    #[test]
    fn test_frequency_small_diff_suppressed() {
        // 현재 주기 = 100 / 10 = 10일, 권장 AX 7일 → 차이 3일 < 7일
        let mut data = input();
        data.abc_grade = Some(AbcGrade::A);
        data.xyz_grade = Some(XyzGrade::X);
        data.current_order_quantity = Some(100.0);
        assert!(generate_order_frequency_optimization(&data).is_none());
    }

    #[test]
    fn test_frequency_large_diff_a_grade_is_high() {
        // 현재 주기 = 300 / 10 = 30일, 권장 7일 → 차이 23일
        let mut data = input();
        data.abc_grade = Some(AbcGrade::A);
        data.xyz_grade = Some(XyzGrade::X);
        data.current_order_quantity = Some(300.0);

        let rec = generate_order_frequency_optimization(&data).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.metrics.current.as_deref(), Some("30일"));
        assert_eq!(rec.metrics.recommended.as_deref(), Some("7일"));
        assert_eq!(rec.metrics.improvement.as_deref(), Some("발주 주기 단축 (23일 감소)"));
    }

    #[test]
    fn test_frequency_unknown_cycle_still_recommended() {
        let mut data = input();
        data.abc_grade = Some(AbcGrade::B);
        data.xyz_grade = Some(XyzGrade::Y);

        let rec = generate_order_frequency_optimization(&data).unwrap();
        assert_eq!(rec.priority, Priority::Low);
        assert_eq!(rec.metrics.current.as_deref(), Some("미설정"));
        assert_eq!(rec.metrics.improvement.as_deref(), Some("최적 주기 적용"));
    }

    // ---- EOQ 비용 절감 ----

    #[test]
    fn test_eoq_gating_near_optimum() {
        // EOQ ≈ 1209, 현재 발주량 1200 → 절감 5% 미만, 추천 없음
        let mut data = input();
        data.current_order_quantity = Some(1200.0);
        data.ordering_cost = Some(50_000.0);
        assert!(generate_eoq_cost_saving(&data).is_none());
    }

    #[test]
    fn test_eoq_far_from_optimum_is_high() {
        let mut data = input();
        data.current_order_quantity = Some(50.0);
        data.ordering_cost = Some(50_000.0);

        let rec = generate_eoq_cost_saving(&data).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.metrics.savings_krw.unwrap() > 0);
        assert_eq!(rec.action_items.len(), 5);
    }

    #[test]
    fn test_eoq_requires_demand_and_quantity() {
        let mut data = input();
        assert!(generate_eoq_cost_saving(&data).is_none()); // 발주량 미설정

        data.current_order_quantity = Some(500.0);
        data.average_daily_demand = 0.0;
        assert!(generate_eoq_cost_saving(&data).is_none()); // 수요 없음
    }

    // ---- 통합 생성 / 요약 ----

    #[test]
    fn test_generate_sorts_by_priority() {
        // 과잉(high) + 발주주기(medium) + EOQ(high) 조합
        let mut data = input();
        data.current_stock = 300;
        data.abc_grade = Some(AbcGrade::B);
        data.xyz_grade = Some(XyzGrade::Y);
        data.current_order_quantity = Some(50.0);

        let recs = generate_inventory_optimization_recommendations(&data);
        assert_eq!(recs.len(), 3);
        for pair in recs.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
        // 동순위(high)는 평가 순서 유지: 과잉재고가 EOQ보다 앞
        assert_eq!(recs[0].kind, OptimizationType::ExcessReduction);
    }

    #[test]
    fn test_generate_empty_for_healthy_product() {
        let recs = generate_inventory_optimization_recommendations(&input());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_summary_counts_and_top() {
        let mut data = input();
        data.current_stock = 300;
        data.abc_grade = Some(AbcGrade::B);
        data.xyz_grade = Some(XyzGrade::Y);
        data.current_order_quantity = Some(50.0);

        let mut all = generate_inventory_optimization_recommendations(&data);

        let mut other = data.clone();
        other.product_id = "P-002".into();
        all.extend(generate_inventory_optimization_recommendations(&other));

        let summary = summarize_organization_optimization(&all);
        assert_eq!(summary.total_recommendations, 6);
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.by_type.excess_reduction, 2);
        assert_eq!(summary.by_type.order_frequency, 2);
        assert_eq!(summary.by_type.eoq_cost_saving, 2);
        assert_eq!(summary.by_priority.high, 4);
        assert_eq!(summary.by_priority.medium, 2);
        assert_eq!(summary.by_priority.low, 0);
        assert_eq!(summary.top_recommendations.len(), 5);
        assert_eq!(summary.top_recommendations[0].priority, Priority::High);
        assert!(summary.total_potential_savings > 0);

        // 상위 추천은 같은 우선순위 안에서 절감액 내림차순
        let top = &summary.top_recommendations;
        for pair in top.windows(2) {
            if pair[0].priority == pair[1].priority {
                assert!(
                    pair[0].metrics.savings_krw.unwrap_or(0)
                        >= pair[1].metrics.savings_krw.unwrap_or(0)
                );
            }
        }
    }

    #[test]
    fn test_bulk_matches_single_concatenation() {
        let mut first = input();
        first.current_stock = 300;
        let mut second = input();
        second.product_id = "P-002".into();
        second.current_order_quantity = Some(50.0);

        let bulk = generate_bulk_optimization_recommendations(&[first.clone(), second.clone()]);
        let mut sequential = generate_inventory_optimization_recommendations(&first);
        sequential.extend(generate_inventory_optimization_recommendations(&second));

        assert_eq!(bulk.len(), sequential.len());
        for (a, b) in bulk.iter().zip(&sequential) {
            assert_eq!(a.product_id, b.product_id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.priority, b.priority);
        }
    }

    #[test]
    fn test_summary_empty() {
        let summary = summarize_organization_optimization(&[]);
        assert_eq!(summary.total_recommendations, 0);
        assert_eq!(summary.total_potential_savings, 0);
        assert!(summary.top_recommendations.is_empty());
    }
}
