//! 시나리오 시뮬레이션
//!
//! 수요 변동·리드타임 변동 시나리오별로 안전재고와 발주점을 재계산한다.
//! 시나리오 집합은 데이터 테이블로 유지한다. 시뮬레이션 함수 자체는
//! 하나의 공식이 테이블 행 수만큼 적용되는 구조다.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::reorder_point::{calculate_reorder_point, ReorderPointInput};
use crate::safety_stock::{calculate_safety_stock, SafetyStockInput};
use crate::round1;

/// 발주량 산정의 목표 재고 기간 (일)
const TARGET_HORIZON_DAYS: f64 = 30.0;

/// 시나리오 정의 (이름, 수요 변동률 %, 리드타임 변동 일)
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSpec {
    pub name: &'static str,
    pub demand_change_percent: f64,
    pub lead_time_change_days: i64,
}

/// 고정 시나리오 테이블 (기준 제외 10개)
pub const SCENARIOS: [ScenarioSpec; 10] = [
    ScenarioSpec { name: "수요 +10%", demand_change_percent: 10.0, lead_time_change_days: 0 },
    ScenarioSpec { name: "수요 +20%", demand_change_percent: 20.0, lead_time_change_days: 0 },
    ScenarioSpec { name: "수요 +30%", demand_change_percent: 30.0, lead_time_change_days: 0 },
    ScenarioSpec { name: "수요 -10%", demand_change_percent: -10.0, lead_time_change_days: 0 },
    ScenarioSpec { name: "수요 -20%", demand_change_percent: -20.0, lead_time_change_days: 0 },
    ScenarioSpec { name: "리드타임 +2일", demand_change_percent: 0.0, lead_time_change_days: 2 },
    ScenarioSpec { name: "리드타임 +5일", demand_change_percent: 0.0, lead_time_change_days: 5 },
    ScenarioSpec { name: "리드타임 -2일", demand_change_percent: 0.0, lead_time_change_days: -2 },
    ScenarioSpec { name: "최악: 수요↑20% + 리드타임↑5일", demand_change_percent: 20.0, lead_time_change_days: 5 },
    ScenarioSpec { name: "최선: 수요↓20% + 리드타임↓2일", demand_change_percent: -20.0, lead_time_change_days: -2 },
];

/// 시뮬레이션 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    /// 제품 ID
    pub product_id: String,

    /// 제품명
    pub product_name: String,

    /// 현재 재고
    pub current_stock: i64,

    /// 일평균 판매량 (기준)
    pub average_daily_demand: f64,

    /// 판매량 표준편차
    pub demand_std_dev: f64,

    /// 리드타임 (일, 기준)
    pub lead_time_days: u32,

    /// 리드타임 표준편차 (선택)
    pub lead_time_std_dev: Option<f64>,

    /// 서비스 레벨 (선택, 기본 0.95)
    pub service_level: Option<f64>,
}

/// 시나리오별 재고 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "충분")]
    Sufficient,
    #[serde(rename = "발주필요")]
    ReorderNeeded,
    #[serde(rename = "긴급")]
    Urgent,
}

impl StockStatus {
    /// 표시용 라벨
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sufficient => "충분",
            Self::ReorderNeeded => "발주필요",
            Self::Urgent => "긴급",
        }
    }
}

/// 시나리오 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// 시나리오 이름
    pub scenario_name: String,

    /// 수요 변동률 (%)
    pub demand_change_percent: f64,

    /// 리드타임 변동 (일)
    pub lead_time_change_days: i64,

    /// 변경된 일평균 판매량 (소수점 1자리)
    pub adjusted_demand: f64,

    /// 변경된 리드타임 (1일 미만으로 내려가지 않음)
    pub adjusted_lead_time: i64,

    /// 새로운 안전재고
    pub new_safety_stock: i64,

    /// 새로운 발주점
    pub new_reorder_point: i64,

    /// 현재 재고 상태
    pub stock_status: StockStatus,

    /// 필요 발주량 (충분하면 0)
    pub required_order_quantity: i64,

    /// 안전재고 대비 현재고 비율 (%)
    pub safety_stock_ratio: i64,
}

/// 시뮬레이션 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    /// 최악 시나리오 (복합 악화)
    pub worst_case: ScenarioResult,

    /// 최선 시나리오 (복합 개선)
    pub best_case: ScenarioResult,

    /// 평균 안전재고 (기준 포함, 올림)
    pub average_safety_stock: i64,

    /// 평균 발주점 (기준 포함, 올림)
    pub average_reorder_point: i64,
}

/// 시뮬레이션 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// 기준 시나리오 (변동 없음)
    pub baseline: ScenarioResult,

    /// 시나리오 결과 (테이블 순서, 10개)
    pub scenarios: Vec<ScenarioResult>,

    /// 요약
    pub summary: SimulationSummary,
}

/// 단일 시나리오 계산
fn calculate_scenario(
    input: &SimulationInput,
    name: &str,
    demand_change_percent: f64,
    lead_time_change_days: i64,
) -> ScenarioResult {
    let factor = 1.0 + demand_change_percent / 100.0;
    let adjusted_demand = input.average_daily_demand * factor;
    let adjusted_lead_time = (input.lead_time_days as i64 + lead_time_change_days).max(1);

    // 수요 변동에 비례해 표준편차도 조정
    let adjusted_demand_std_dev = input.demand_std_dev * factor;

    let safety = calculate_safety_stock(&SafetyStockInput {
        average_daily_demand: adjusted_demand,
        demand_std_dev: adjusted_demand_std_dev,
        lead_time_days: adjusted_lead_time as f64,
        lead_time_std_dev: input.lead_time_std_dev,
        service_level: input.service_level,
    });

    let reorder = calculate_reorder_point(&ReorderPointInput {
        average_daily_demand: adjusted_demand,
        lead_time_days: adjusted_lead_time as f64,
        safety_stock: safety.safety_stock,
    });

    let current = input.current_stock as f64;
    let stock_status = if current < safety.safety_stock as f64 * 0.5 {
        StockStatus::Urgent
    } else if input.current_stock <= reorder.reorder_point {
        StockStatus::ReorderNeeded
    } else {
        StockStatus::Sufficient
    };

    let required_order_quantity = if stock_status == StockStatus::Sufficient {
        0
    } else {
        (reorder.reorder_point as f64 + adjusted_demand * TARGET_HORIZON_DAYS - current)
            .max(0.0)
            .ceil() as i64
    };

    let safety_stock_ratio = if safety.safety_stock > 0 {
        (current / safety.safety_stock as f64 * 100.0).round() as i64
    } else {
        0
    };

    ScenarioResult {
        scenario_name: name.to_string(),
        demand_change_percent,
        lead_time_change_days,
        adjusted_demand: round1(adjusted_demand),
        adjusted_lead_time,
        new_safety_stock: safety.safety_stock,
        new_reorder_point: reorder.reorder_point,
        stock_status,
        required_order_quantity,
        safety_stock_ratio,
    }
}

/// 시나리오 시뮬레이션 실행
///
/// 기준 시나리오 1개와 고정 테이블 10개를 계산하고 요약을 만든다.
pub fn run_scenario_simulation(input: &SimulationInput) -> SimulationResult {
    let baseline = calculate_scenario(input, "기준 (현재)", 0.0, 0);

    let scenarios: Vec<ScenarioResult> = SCENARIOS
        .iter()
        .map(|spec| {
            calculate_scenario(
                input,
                spec.name,
                spec.demand_change_percent,
                spec.lead_time_change_days,
            )
        })
        .collect();

    // 최악/최선은 복합 시나리오를 이름으로 지정
    let worst_case = scenarios
        .iter()
        .find(|s| s.scenario_name.contains("최악"))
        .cloned()
        .unwrap_or_else(|| baseline.clone());
    let best_case = scenarios
        .iter()
        .find(|s| s.scenario_name.contains("최선"))
        .cloned()
        .unwrap_or_else(|| baseline.clone());

    let count = (scenarios.len() + 1) as f64;
    let average_safety_stock = ((baseline.new_safety_stock
        + scenarios.iter().map(|s| s.new_safety_stock).sum::<i64>())
        as f64
        / count)
        .ceil() as i64;
    let average_reorder_point = ((baseline.new_reorder_point
        + scenarios.iter().map(|s| s.new_reorder_point).sum::<i64>())
        as f64
        / count)
        .ceil() as i64;

    SimulationResult {
        baseline,
        scenarios,
        summary: SimulationSummary {
            worst_case,
            best_case,
            average_safety_stock,
            average_reorder_point,
        },
    }
}

/// 여러 제품 일괄 시뮬레이션
///
/// 항목별 계산은 독립적이므로 병렬 실행하며, 결과는 입력 순서를 유지한다.
pub fn run_bulk_simulation(inputs: &[SimulationInput]) -> Vec<SimulationResult> {
    tracing::debug!("시나리오 일괄 시뮬레이션: {} 품목", inputs.len());

    inputs.par_iter().map(run_scenario_simulation).collect()
}
