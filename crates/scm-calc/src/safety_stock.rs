//! 안전재고 계산
//!
//! 수요 및 리드타임 불확실성을 흡수하는 버퍼 재고 산정.

use serde::{Deserialize, Serialize};

/// 기본 서비스 레벨 (95%)
pub const DEFAULT_SERVICE_LEVEL: f64 = 0.95;

/// 서비스 레벨별 표준정규분포 Z값 테이블
const SERVICE_LEVEL_Z_SCORES: &[(f64, f64)] = &[
    (0.90, 1.28),
    (0.91, 1.34),
    (0.92, 1.41),
    (0.93, 1.48),
    (0.94, 1.55),
    (0.95, 1.65),
    (0.96, 1.75),
    (0.97, 1.88),
    (0.98, 2.05),
    (0.99, 2.33),
    (0.995, 2.58),
    (0.999, 3.09),
];

/// 안전재고 계산 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyStockInput {
    /// 일평균 판매량
    pub average_daily_demand: f64,

    /// 일별 수요 표준편차
    pub demand_std_dev: f64,

    /// 평균 리드타임 (일)
    pub lead_time_days: f64,

    /// 리드타임 표준편차 (일, 선택)
    pub lead_time_std_dev: Option<f64>,

    /// 서비스 레벨 (0-1, 기본 0.95)
    pub service_level: Option<f64>,
}

/// 계산 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStockMethod {
    /// 단순화 공식 (수요 변동만 고려)
    Simplified,
    /// 전체 공식 (수요 + 리드타임 변동)
    Full,
}

/// 안전재고 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyStockResult {
    /// 안전재고 수량 (올림)
    pub safety_stock: i64,

    /// 적용된 서비스 레벨
    pub service_level: f64,

    /// 적용된 Z값
    pub z_score: f64,

    /// 계산 방식
    pub method: SafetyStockMethod,
}

/// 서비스 레벨에 해당하는 Z값 반환
///
/// 테이블 범위 밖은 양끝 값으로 고정하고, 사이 값은 선형 보간한다.
pub fn z_score(service_level: f64) -> f64 {
    if !service_level.is_finite() || service_level < 0.90 {
        return 1.28;
    }
    if service_level >= 0.999 {
        return 3.09;
    }

    for window in SERVICE_LEVEL_Z_SCORES.windows(2) {
        let (level_lo, z_lo) = window[0];
        let (level_hi, z_hi) = window[1];

        if (service_level - level_lo).abs() < 1e-9 {
            return z_lo;
        }
        if service_level > level_lo && service_level < level_hi {
            let ratio = (service_level - level_lo) / (level_hi - level_lo);
            return z_lo + ratio * (z_hi - z_lo);
        }
    }

    1.65
}

/// 안전재고 계산
///
/// 공식 (전체): `SS = Z × sqrt(LT × σd² + d̄² × σLT²)`
/// 공식 (단순화): `SS = Z × σd × sqrt(LT)`
///
/// 리드타임 표준편차가 주어지고 0보다 크면 전체 공식을 쓴다.
pub fn calculate_safety_stock(input: &SafetyStockInput) -> SafetyStockResult {
    let service_level = input.service_level.unwrap_or(DEFAULT_SERVICE_LEVEL);
    let z = z_score(service_level);
    let lead_time_std_dev = input.lead_time_std_dev.unwrap_or(0.0);

    let (raw, method) = if lead_time_std_dev > 0.0 {
        let demand_variance = input.lead_time_days * input.demand_std_dev.powi(2);
        let lead_time_variance = input.average_daily_demand.powi(2) * lead_time_std_dev.powi(2);
        (
            z * (demand_variance + lead_time_variance).sqrt(),
            SafetyStockMethod::Full,
        )
    } else {
        (
            z * input.demand_std_dev * input.lead_time_days.max(0.0).sqrt(),
            SafetyStockMethod::Simplified,
        )
    };

    SafetyStockResult {
        safety_stock: raw.max(0.0).ceil() as i64,
        service_level,
        z_score: z,
        method,
    }
}

/// 단순 안전재고 계산 (리드타임 수요의 배수)
pub fn calculate_simple_safety_stock(
    average_daily_demand: f64,
    lead_time_days: f64,
    safety_factor: f64,
) -> i64 {
    (average_daily_demand * lead_time_days * safety_factor)
        .max(0.0)
        .ceil() as i64
}
