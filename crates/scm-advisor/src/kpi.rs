//! KPI 개선 제안
//!
//! 측정된 KPI 와 목표 KPI 를 비교해 갭 규칙([`GapRule`]) 기반 개선 제안을
//! 생성한다. KPI 측정 자체(DB 집계)는 상위 서비스 계층의 책임이다.

use serde::{Deserialize, Serialize};

use crate::gap_rule::{GapDirection, GapRule, Materiality, Priority};

/// 측정된 KPI 지표
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    /// 재고회전율 (회/년)
    pub inventory_turnover_rate: f64,
    /// 평균 재고일수 (일)
    pub average_inventory_days: f64,
    /// 재고 정확도 (%)
    pub inventory_accuracy: f64,
    /// 품절률 (%)
    pub stockout_rate: f64,
    /// 적시 발주율 (%)
    pub on_time_order_rate: f64,
    /// 평균 리드타임 (일)
    pub average_lead_time: f64,
    /// 발주 충족률 (%)
    pub order_fulfillment_rate: f64,
}

/// 목표 KPI 지표 (측정 지표와 같은 7개 항목)
pub type KpiTarget = KpiMetrics;

/// KPI 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiCategory {
    Inventory,
    Order,
    Cost,
}

/// 개선 제안
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementProposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kpi_category: KpiCategory,

    /// 영향을 받는 KPI 이름
    pub affected_kpis: Vec<String>,
    pub priority: Priority,

    /// 예상 효과 (예: "재고회전율 +1.5회/년")
    pub estimated_impact: String,

    /// 실행 단계 (순서 있음, 비어 있지 않음)
    pub action_steps: Vec<String>,

    /// 구현 기간 (예: "2-4주")
    pub time_to_implement: String,
}

// 지표별 갭 규칙. 회전율만 목표 대비 상대 갭, 나머지는 절대 갭 기준.
const TURNOVER_RULE: GapRule = GapRule::new(
    GapDirection::HigherIsBetter,
    Materiality::RelativePercent(10.0),
);
const INVENTORY_DAYS_RULE: GapRule =
    GapRule::new(GapDirection::LowerIsBetter, Materiality::Absolute(5.0));
const STOCKOUT_RULE: GapRule =
    GapRule::new(GapDirection::LowerIsBetter, Materiality::Absolute(0.5));
const ON_TIME_ORDER_RULE: GapRule =
    GapRule::new(GapDirection::HigherIsBetter, Materiality::Absolute(3.0));
const LEAD_TIME_RULE: GapRule =
    GapRule::new(GapDirection::LowerIsBetter, Materiality::Absolute(1.0));
const ACCURACY_RULE: GapRule =
    GapRule::new(GapDirection::HigherIsBetter, Materiality::Absolute(2.0));
const FULFILLMENT_RULE: GapRule =
    GapRule::new(GapDirection::HigherIsBetter, Materiality::Absolute(2.0));

/// KPI 기반 개선 제안 생성
///
/// 7개 지표를 각각 갭 규칙으로 평가하고, 임계값을 넘는 갭마다 제안을
/// 하나씩 생성한다. 7개 지표가 모두 목표를 달성했으면 "지속적 개선"
/// 제안 하나만 반환한다.
pub fn generate_kpi_improvement_proposals(
    metrics: &KpiMetrics,
    targets: &KpiTarget,
) -> Vec<ImprovementProposal> {
    let mut proposals = Vec::new();

    // 재고회전율
    if let Some(gap) =
        TURNOVER_RULE.material_gap(metrics.inventory_turnover_rate, targets.inventory_turnover_rate)
    {
        let percent_gap = gap / targets.inventory_turnover_rate * 100.0;
        let improved_days = 365.0 / (metrics.inventory_turnover_rate + gap);
        proposals.push(ImprovementProposal {
            id: "turnover-1".into(),
            title: "과다 재고 정리 및 재고 최적화".into(),
            description: format!(
                "현재 재고회전율이 목표보다 {:.1}% 낮습니다. ABC 분석 결과 C등급 제품의 \
                 과다 재고를 정리하고, 재고 최적화를 진행하세요.",
                percent_gap
            ),
            kpi_category: KpiCategory::Inventory,
            affected_kpis: vec!["재고회전율".into(), "평균 재고일수".into(), "총 재고금액".into()],
            priority: Priority::High,
            estimated_impact: format!(
                "재고회전율 +{:.1}회/년, 재고일수 -{:.0}일",
                gap, improved_days
            ),
            action_steps: vec![
                "1. ABC 분석: C등급 제품 중 3개월 미판매 제품 식별".into(),
                "2. 재고 정리: 폐기/할인 판매를 통한 과다 재고 처분".into(),
                "3. 발주 정책 조정: EOQ 계산 기반 최적 발주량 설정".into(),
                "4. 정기 모니터링: 월 1회 회전율 추이 확인".into(),
            ],
            time_to_implement: "4-6주".into(),
        });
    }

    // 평균 재고일수
    if let Some(gap) =
        INVENTORY_DAYS_RULE.material_gap(metrics.average_inventory_days, targets.average_inventory_days)
    {
        proposals.push(ImprovementProposal {
            id: "inventory-days-1".into(),
            title: "발주 주기 단축 및 재고 회전 가속화".into(),
            description: format!(
                "평균 재고일수가 목표보다 {:.0}일 많습니다. 발주 주기를 단축하고 \
                 공급자와의 협력을 강화하세요.",
                gap
            ),
            kpi_category: KpiCategory::Inventory,
            affected_kpis: vec!["평균 재고일수".into(), "재고회전율".into()],
            priority: Priority::Medium,
            estimated_impact: format!("평균 재고일수 -{:.0}일", gap),
            action_steps: vec![
                "1. 공급자 협력: 더 빈번한 배송(예: 주 2회 → 주 3회) 협의".into(),
                "2. 발주 정책: 발주량 감소, 발주 빈도 증가".into(),
                "3. 수요예측: 정확도 개선으로 안전재고 감소".into(),
                "4. JIT 도입: A급 제품부터 시범 운영".into(),
            ],
            time_to_implement: "2-4주".into(),
        });
    }

    // 품절률
    if let Some(gap) = STOCKOUT_RULE.material_gap(metrics.stockout_rate, targets.stockout_rate) {
        proposals.push(ImprovementProposal {
            id: "stockout-1".into(),
            title: "안전재고 및 발주점 최적화".into(),
            description: format!(
                "품절률이 목표보다 {:.2}% 높습니다. A/B급 제품의 안전재고와 발주점을 \
                 재계산하세요.",
                gap
            ),
            kpi_category: KpiCategory::Inventory,
            affected_kpis: vec!["품절률".into(), "적시 발주율".into()],
            priority: Priority::High,
            estimated_impact: format!("품절률 -{:.2}%, 고객 만족도 향상", gap),
            action_steps: vec![
                "1. 수요 분석: 최근 6개월 판매 데이터 재분석".into(),
                "2. 안전재고 재계산: 서비스 수준(예: 95% → 98%) 상향 검토".into(),
                "3. 리드타임 확인: 공급자 리드타임 단축 협의".into(),
                "4. 자동 발주: 발주점 기반 자동 발주 활성화".into(),
            ],
            time_to_implement: "1-2주".into(),
        });
    }

    // 적시 발주율
    if let Some(gap) =
        ON_TIME_ORDER_RULE.material_gap(metrics.on_time_order_rate, targets.on_time_order_rate)
    {
        proposals.push(ImprovementProposal {
            id: "ontime-order-1".into(),
            title: "발주 프로세스 자동화 및 리드타임 단축".into(),
            description: format!(
                "적시 발주율이 목표보다 {:.1}% 낮습니다. 발주 프로세스를 자동화하고 \
                 리드타임을 단축하세요.",
                gap
            ),
            kpi_category: KpiCategory::Order,
            affected_kpis: vec!["적시 발주율".into(), "발주 충족률".into()],
            priority: Priority::High,
            estimated_impact: format!("적시 발주율 +{:.1}%", gap),
            action_steps: vec![
                "1. 자동 발주: 발주점 도달 시 자동 발주 활성화".into(),
                "2. 공급자 리드타임: 주요 공급자와 리드타임 단축 협의".into(),
                "3. 발주 승인: 승인 프로세스 간소화 (자동 승인 규칙 설정)".into(),
                "4. 모니터링: 주 1회 발주 현황 검토".into(),
            ],
            time_to_implement: "2-3주".into(),
        });
    }

    // 평균 리드타임
    if let Some(gap) =
        LEAD_TIME_RULE.material_gap(metrics.average_lead_time, targets.average_lead_time)
    {
        proposals.push(ImprovementProposal {
            id: "leadtime-1".into(),
            title: "공급자 성과 관리 및 대체 공급자 개발".into(),
            description: format!(
                "평균 리드타임이 목표보다 {:.1}일 깁니다. 주요 공급자의 납기 성과를 \
                 개선하고 대체 공급자를 발굴하세요.",
                gap
            ),
            kpi_category: KpiCategory::Order,
            affected_kpis: vec!["평균 리드타임".into(), "발주 충족률".into(), "적시 발주율".into()],
            priority: Priority::Medium,
            estimated_impact: format!("평균 리드타임 -{:.1}일", gap),
            action_steps: vec![
                "1. 공급자 분석: 리드타임별 공급자 성과 현황 파악".into(),
                "2. KPI 계약: 주요 공급자와 납기 KPI 계약서 작성".into(),
                "3. 대체 공급자: 리드타임이 짧은 대체 공급자 발굴".into(),
                "4. 벌크 주문: A급 제품 공급자와 벌크 계약 협의".into(),
            ],
            time_to_implement: "3-4주".into(),
        });
    }

    // 재고 정확도
    if let Some(gap) =
        ACCURACY_RULE.material_gap(metrics.inventory_accuracy, targets.inventory_accuracy)
    {
        proposals.push(ImprovementProposal {
            id: "accuracy-1".into(),
            title: "재고 실사 및 시스템 점검 강화".into(),
            description: format!(
                "재고 정확도가 목표보다 {:.1}% 낮습니다. 정기 실사를 강화하고 시스템 \
                 오류를 파악하세요.",
                gap
            ),
            kpi_category: KpiCategory::Inventory,
            affected_kpis: vec!["재고 정확도".into(), "재고회전율".into()],
            priority: Priority::Medium,
            estimated_impact: format!("재고 정확도 +{:.1}%", gap),
            action_steps: vec![
                "1. 정기 실사: 주기를 월 1회 → 월 2회로 증가".into(),
                "2. ABC 실사: A급(매월), B급(분기), C급(반기) 구분 실시".into(),
                "3. 시스템 점검: 오류 발생 빈도 및 원인 분석".into(),
                "4. 교육: 재고 관리 담당자 교육 강화".into(),
            ],
            time_to_implement: "2주".into(),
        });
    }

    // 발주 충족률
    if let Some(gap) =
        FULFILLMENT_RULE.material_gap(metrics.order_fulfillment_rate, targets.order_fulfillment_rate)
    {
        proposals.push(ImprovementProposal {
            id: "fulfillment-1".into(),
            title: "공급자 신뢰도 개선 및 계약 조건 조정".into(),
            description: format!(
                "발주 충족률이 목표보다 {:.1}% 낮습니다. 공급자 신뢰도를 높이고 계약 \
                 조건을 재검토하세요.",
                gap
            ),
            kpi_category: KpiCategory::Order,
            affected_kpis: vec!["발주 충족률".into(), "적시 발주율".into()],
            priority: Priority::Medium,
            estimated_impact: format!("발주 충족률 +{:.1}%", gap),
            action_steps: vec![
                "1. 공급자 성과: 납기, 품질, 정량 정확도 평가".into(),
                "2. 미충족 분석: 부분 납품 원인 파악".into(),
                "3. 계약 조정: 패널티/인센티브 구조 개선".into(),
                "4. 협력 강화: 정기 협력사 미팅 개최 (월 1회)".into(),
            ],
            time_to_implement: "3-4주".into(),
        });
    }

    // 7개 지표 모두 목표 달성 시 종합 제안
    if all_targets_met(metrics, targets) {
        proposals.push(ImprovementProposal {
            id: "excellence-1".into(),
            title: "지속적 개선 및 고도화 전략".into(),
            description: "축하합니다! 모든 KPI가 목표를 달성했습니다. 이제 경쟁 우위를 \
                          확보하고 고도화된 전략을 추진하세요."
                .into(),
            kpi_category: KpiCategory::Cost,
            affected_kpis: vec!["모든 KPI".into()],
            priority: Priority::Medium,
            estimated_impact: "경쟁력 강화, 고객 만족도 향상".into(),
            action_steps: vec![
                "1. 벤치마킹: 산업 평균 대비 성과 분석".into(),
                "2. AI 적용: 수요예측 정확도 고도화 (딥러닝 모델)".into(),
                "3. 공급망 최적화: 다단계 네트워크 분석".into(),
                "4. 지속적 개선: PDCA 사이클 운영 강화".into(),
            ],
            time_to_implement: "4주 이상".into(),
        });
    }

    tracing::debug!(count = proposals.len(), "KPI 개선 제안 생성");

    proposals
}

/// 7개 지표 전부 목표 달성 여부
fn all_targets_met(metrics: &KpiMetrics, targets: &KpiTarget) -> bool {
    TURNOVER_RULE.meets_target(metrics.inventory_turnover_rate, targets.inventory_turnover_rate)
        && INVENTORY_DAYS_RULE
            .meets_target(metrics.average_inventory_days, targets.average_inventory_days)
        && ACCURACY_RULE.meets_target(metrics.inventory_accuracy, targets.inventory_accuracy)
        && STOCKOUT_RULE.meets_target(metrics.stockout_rate, targets.stockout_rate)
        && ON_TIME_ORDER_RULE.meets_target(metrics.on_time_order_rate, targets.on_time_order_rate)
        && LEAD_TIME_RULE.meets_target(metrics.average_lead_time, targets.average_lead_time)
        && FULFILLMENT_RULE
            .meets_target(metrics.order_fulfillment_rate, targets.order_fulfillment_rate)
}

/// 개선 제안 우선순위 정렬 (입력 불변, 안정 정렬)
pub fn sort_proposals_by_priority(proposals: &[ImprovementProposal]) -> Vec<ImprovementProposal> {
    let mut sorted = proposals.to_vec();
    sorted.sort_by_key(|proposal| proposal.priority);
    sorted
}

/// 카테고리별 제안 필터링
pub fn filter_proposals_by_category(
    proposals: &[ImprovementProposal],
    category: KpiCategory,
) -> Vec<ImprovementProposal> {
    proposals
        .iter()
        .filter(|proposal| proposal.kpi_category == category)
        .cloned()
        .collect()
}
