//! 발주점(ROP) 계산
//!
//! 재고 보충 시점과 권장 발주량을 결정한다.

use serde::{Deserialize, Serialize};

/// 기본 목표 재고일수
pub const DEFAULT_TARGET_DAYS_OF_INVENTORY: f64 = 30.0;

/// 발주점 계산 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPointInput {
    /// 일평균 판매량
    pub average_daily_demand: f64,

    /// 리드타임 (일)
    pub lead_time_days: f64,

    /// 안전재고 수량
    pub safety_stock: i64,
}

/// 발주점 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPointResult {
    /// 발주점 수량
    pub reorder_point: i64,

    /// 리드타임 중 예상 수요
    pub lead_time_demand: i64,

    /// 안전재고
    pub safety_stock: i64,
}

/// 발주점 계산
///
/// 발주점 = 일평균판매량 × 리드타임(일) + 안전재고 (올림)
pub fn calculate_reorder_point(input: &ReorderPointInput) -> ReorderPointResult {
    let lead_time_demand = input.average_daily_demand * input.lead_time_days;
    let reorder_point = lead_time_demand + input.safety_stock as f64;

    ReorderPointResult {
        reorder_point: reorder_point.ceil() as i64,
        lead_time_demand: lead_time_demand.ceil() as i64,
        safety_stock: input.safety_stock,
    }
}

/// 발주 필요 여부 (현재고가 발주점 이하)
pub fn should_reorder(current_stock: i64, reorder_point: i64) -> bool {
    current_stock <= reorder_point
}

/// 발주점 도달까지 남은 재고일수
///
/// 일평균 판매량이 0 이하이면 `None`.
pub fn days_until_reorder(
    current_stock: i64,
    reorder_point: i64,
    average_daily_demand: f64,
) -> Option<i64> {
    if average_daily_demand <= 0.0 {
        return None;
    }
    if current_stock <= reorder_point {
        return Some(0);
    }
    Some(((current_stock - reorder_point) as f64 / average_daily_demand).floor() as i64)
}

/// 권장 발주량 계산 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuantityInput {
    pub current_stock: i64,
    pub safety_stock: i64,
    pub average_daily_demand: f64,

    /// 목표 재고일수 (기본 30일)
    pub target_days_of_inventory: Option<f64>,

    /// EOQ (제공 시 우선 사용)
    pub eoq: Option<i64>,

    /// 최소 발주량
    pub min_order_quantity: Option<i64>,

    /// 발주 배수 (예: 박스 단위)
    pub order_multiple: Option<i64>,
}

/// 발주량 산정 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderQuantityMethod {
    Eoq,
    TargetDays,
}

/// 권장 발주량 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuantityResult {
    /// 권장 발주량
    pub recommended_quantity: i64,

    /// 발주 후 예상 재고
    pub projected_stock: i64,

    /// 발주 후 예상 재고일수
    pub projected_days_of_inventory: i64,

    /// 계산 방식
    pub method: OrderQuantityMethod,
}

/// 권장 발주량 계산
///
/// EOQ 가 주어지면 EOQ 기반, 아니면 목표 재고일수 기반.
/// 결과는 항상 최소 발주량 이상이고 발주 배수의 올림 배수다.
pub fn calculate_order_quantity(input: &OrderQuantityInput) -> OrderQuantityResult {
    let target_days = input
        .target_days_of_inventory
        .unwrap_or(DEFAULT_TARGET_DAYS_OF_INVENTORY);
    let min_order = input.min_order_quantity.unwrap_or(1).max(1);
    let multiple = input.order_multiple.unwrap_or(1).max(1);

    let (base_quantity, method) = match input.eoq {
        Some(eoq) if eoq > 0 => (eoq as f64, OrderQuantityMethod::Eoq),
        _ => {
            let target_stock =
                input.average_daily_demand * target_days + input.safety_stock as f64;
            (
                (target_stock - input.current_stock as f64).max(0.0),
                OrderQuantityMethod::TargetDays,
            )
        }
    };

    let mut quantity = base_quantity.max(min_order as f64).ceil() as i64;
    if multiple > 1 {
        quantity = ((quantity as f64 / multiple as f64).ceil() as i64) * multiple;
    }

    let projected_stock = input.current_stock + quantity;
    let projected_days_of_inventory = if input.average_daily_demand > 0.0 {
        ((projected_stock - input.safety_stock) as f64 / input.average_daily_demand).floor() as i64
    } else {
        0
    };

    OrderQuantityResult {
        recommended_quantity: quantity,
        projected_stock,
        projected_days_of_inventory,
        method,
    }
}
