//! 재고 포지션 및 수요 통계 모델

use serde::{Deserialize, Serialize};

use crate::{ensure_non_negative, Result};

/// 재고 포지션
///
/// 엔진은 `reorder_point >= safety_stock` 순서를 강제하지 않는다.
/// 위반된 입력이 들어와도 비교 연산 결과 그대로 동작한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPosition {
    /// 현재고
    pub current_stock: i64,

    /// 안전재고
    pub safety_stock: i64,

    /// 발주점
    pub reorder_point: i64,
}

impl StockPosition {
    pub fn new(current_stock: i64, safety_stock: i64, reorder_point: i64) -> Self {
        Self {
            current_stock,
            safety_stock,
            reorder_point,
        }
    }

    /// 가용 재고 (안전재고 제외분, 0 미만이면 0)
    pub fn available_stock(&self) -> i64 {
        (self.current_stock - self.safety_stock).max(0)
    }
}

/// 수요 통계 프로필
///
/// 판매 이력 집계 계층이 공급하는 값. 최근/이전 구간 판매량은
/// 판매 추세 점수 계산에, 표준편차는 안전재고 산정에 쓰인다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandProfile {
    /// 일평균 판매량
    pub average_daily_demand: f64,

    /// 일별 수요 표준편차
    pub demand_std_dev: f64,

    /// 리드타임 표준편차 (일)
    pub lead_time_std_dev: f64,

    /// 최근 구간 판매량 (예: 최근 4주)
    pub recent_window_sales: f64,

    /// 이전 구간 판매량 (예: 직전 4주)
    pub prior_window_sales: f64,

    /// 현재 사용 중인 발주량 (미설정 가능)
    pub current_order_quantity: Option<f64>,

    /// 1회 발주 비용 (원, 미설정 시 기본값 적용)
    pub ordering_cost: Option<f64>,

    /// 연간 재고 유지비율 (미설정 시 0.25)
    pub holding_rate: Option<f64>,
}

impl DemandProfile {
    pub fn new(average_daily_demand: f64, demand_std_dev: f64) -> Self {
        Self {
            average_daily_demand,
            demand_std_dev,
            lead_time_std_dev: 0.0,
            recent_window_sales: 0.0,
            prior_window_sales: 0.0,
            current_order_quantity: None,
            ordering_cost: None,
            holding_rate: None,
        }
    }

    /// 빌더: 최근/이전 구간 판매량 설정
    pub fn with_window_sales(mut self, recent: f64, prior: f64) -> Self {
        self.recent_window_sales = recent;
        self.prior_window_sales = prior;
        self
    }

    /// 빌더: 리드타임 표준편차 설정
    pub fn with_lead_time_std_dev(mut self, std_dev: f64) -> Self {
        self.lead_time_std_dev = std_dev;
        self
    }

    /// 빌더: 현재 발주량 설정
    pub fn with_current_order_quantity(mut self, quantity: f64) -> Self {
        self.current_order_quantity = Some(quantity);
        self
    }

    /// 빌더: 발주 비용 설정
    pub fn with_ordering_cost(mut self, cost: f64) -> Self {
        self.ordering_cost = Some(cost);
        self
    }

    /// 빌더: 유지비율 설정
    pub fn with_holding_rate(mut self, rate: f64) -> Self {
        self.holding_rate = Some(rate);
        self
    }

    /// 경계 검증
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("average_daily_demand", self.average_daily_demand)?;
        ensure_non_negative("demand_std_dev", self.demand_std_dev)?;
        ensure_non_negative("lead_time_std_dev", self.lead_time_std_dev)?;
        ensure_non_negative("recent_window_sales", self.recent_window_sales)?;
        ensure_non_negative("prior_window_sales", self.prior_window_sales)?;
        if let Some(qty) = self.current_order_quantity {
            ensure_non_negative("current_order_quantity", qty)?;
        }
        if let Some(cost) = self.ordering_cost {
            ensure_non_negative("ordering_cost", cost)?;
        }
        if let Some(rate) = self.holding_rate {
            ensure_non_negative("holding_rate", rate)?;
        }
        Ok(())
    }
}
