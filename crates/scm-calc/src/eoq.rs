//! 경제적 발주량(EOQ) 계산
//!
//! 발주비용과 유지비용의 합을 최소화하는 발주량과 파생 지표 산정.

use serde::{Deserialize, Serialize};

use crate::round_i64;

/// 기본 1회 발주 비용 (원)
pub const DEFAULT_ORDERING_COST: f64 = 50_000.0;

/// 기본 연간 유지비율 (25%)
pub const DEFAULT_HOLDING_RATE: f64 = 0.25;

/// EOQ 계산 입력
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqInput {
    /// 연간 수요량
    pub annual_demand: f64,

    /// 1회 발주 비용 (원)
    pub ordering_cost: f64,

    /// 단위당 연간 유지비용 (원)
    pub holding_cost_per_unit: f64,
}

/// EOQ 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqResult {
    /// 경제적 발주량 (올림)
    pub eoq: i64,

    /// 연간 발주 횟수
    pub orders_per_year: f64,

    /// 발주 주기 (일)
    pub order_cycle_days: i64,

    /// 연간 총 발주비용
    pub annual_ordering_cost: i64,

    /// 연간 총 유지비용
    pub annual_holding_cost: i64,

    /// 연간 총 재고비용
    pub total_annual_cost: i64,
}

impl EoqResult {
    fn zero() -> Self {
        Self {
            eoq: 0,
            orders_per_year: 0.0,
            order_cycle_days: 0,
            annual_ordering_cost: 0,
            annual_holding_cost: 0,
            total_annual_cost: 0,
        }
    }
}

/// EOQ 계산
///
/// 공식: `EOQ = sqrt(2 × D × S / H)`
///
/// - D: 연간 수요량
/// - S: 1회 발주 비용
/// - H: 단위당 연간 유지비용
///
/// 세 입력 중 하나라도 0 이하이면 전 항목 0 인 결과를 반환한다 (에러 아님).
pub fn calculate_eoq(input: &EoqInput) -> EoqResult {
    if input.annual_demand <= 0.0
        || input.ordering_cost <= 0.0
        || input.holding_cost_per_unit <= 0.0
    {
        return EoqResult::zero();
    }

    let eoq = ((2.0 * input.annual_demand * input.ordering_cost) / input.holding_cost_per_unit)
        .sqrt()
        .ceil();

    let orders_per_year = input.annual_demand / eoq;
    let order_cycle_days = 365.0 / orders_per_year;

    let annual_ordering_cost = orders_per_year * input.ordering_cost;
    let annual_holding_cost = (eoq / 2.0) * input.holding_cost_per_unit;

    EoqResult {
        eoq: eoq as i64,
        orders_per_year: (orders_per_year * 100.0).round() / 100.0,
        order_cycle_days: round_i64(order_cycle_days),
        annual_ordering_cost: round_i64(annual_ordering_cost),
        annual_holding_cost: round_i64(annual_holding_cost),
        total_annual_cost: round_i64(annual_ordering_cost + annual_holding_cost),
    }
}

/// 유지비용 계산 입력
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingCostInput {
    /// 단가 (원)
    pub unit_price: f64,

    /// 연간 유지비율 (기본 0.25)
    pub holding_rate: Option<f64>,

    /// 창고 비용 (월, 단위당)
    pub monthly_storage_cost: Option<f64>,

    /// 보험료 (연, 단위당)
    pub annual_insurance_cost: Option<f64>,

    /// 기타 비용 (연, 단위당)
    pub other_annual_cost: Option<f64>,
}

/// 단위당 연간 유지비용 계산
///
/// 유지비용 = 단가 × 유지비율 + 창고비(연 환산) + 보험료 + 기타
pub fn calculate_holding_cost(input: &HoldingCostInput) -> f64 {
    let capital_cost = input.unit_price * input.holding_rate.unwrap_or(DEFAULT_HOLDING_RATE);
    let annual_storage_cost = input.monthly_storage_cost.unwrap_or(0.0) * 12.0;

    capital_cost
        + annual_storage_cost
        + input.annual_insurance_cost.unwrap_or(0.0)
        + input.other_annual_cost.unwrap_or(0.0)
}

/// 발주량 비용 비교 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    /// 실제 발주량 기준 연간 총 비용
    pub actual_annual_cost: i64,

    /// EOQ 대비 추가 비용 (실제 − EOQ)
    pub cost_difference: i64,

    /// 실제 연간 비용 대비 절감 가능 비율 (%)
    pub savings_percent: f64,
}

/// 실제 발주량과 EOQ 의 연간 비용 비교
///
/// 절감 비율은 현재(실제) 연간 비용 기준이다.
pub fn compare_order_quantity_cost(
    eoq_result: &EoqResult,
    actual_quantity: f64,
    annual_demand: f64,
    ordering_cost: f64,
    holding_cost_per_unit: f64,
) -> CostComparison {
    if actual_quantity <= 0.0 {
        return CostComparison {
            actual_annual_cost: 0,
            cost_difference: 0,
            savings_percent: 0.0,
        };
    }

    let actual_orders_per_year = annual_demand / actual_quantity;
    let actual_ordering_cost = actual_orders_per_year * ordering_cost;
    let actual_holding_cost = (actual_quantity / 2.0) * holding_cost_per_unit;
    let actual_annual_cost = actual_ordering_cost + actual_holding_cost;

    let cost_difference = actual_annual_cost - eoq_result.total_annual_cost as f64;
    let savings_percent = if actual_annual_cost > 0.0 {
        (cost_difference / actual_annual_cost) * 100.0
    } else {
        0.0
    };

    CostComparison {
        actual_annual_cost: round_i64(actual_annual_cost),
        cost_difference: round_i64(cost_difference),
        savings_percent: (savings_percent * 100.0).round() / 100.0,
    }
}

/// 수량 할인 구간
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityDiscountBracket {
    /// 최소 발주량
    pub min_quantity: i64,

    /// 할인된 단가
    pub discounted_price: f64,
}

/// 수량 할인 EOQ 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountEoqResult {
    pub optimal_quantity: i64,
    pub optimal_price: f64,
    pub total_annual_cost: i64,
}

/// 수량 할인을 고려한 최적 발주량 결정
///
/// 각 할인 구간에서 (구매비용 + 발주비용 + 유지비용) 을 비교해
/// 총비용이 최소인 구간을 고른다. 구간이 비어 있으면 `None`.
pub fn calculate_eoq_with_discount(
    annual_demand: f64,
    ordering_cost: f64,
    holding_rate: f64,
    brackets: &[QuantityDiscountBracket],
) -> Option<DiscountEoqResult> {
    let mut best: Option<DiscountEoqResult> = None;

    for bracket in brackets {
        let holding_cost = bracket.discounted_price * holding_rate;
        let eoq_result = calculate_eoq(&EoqInput {
            annual_demand,
            ordering_cost,
            holding_cost_per_unit: holding_cost,
        });

        // EOQ가 구간 최소 수량보다 작으면 최소 수량 사용
        let quantity = eoq_result.eoq.max(bracket.min_quantity);
        if quantity <= 0 {
            continue;
        }

        let purchase_cost = annual_demand * bracket.discounted_price;
        let orders_per_year = annual_demand / quantity as f64;
        let order_cost = orders_per_year * ordering_cost;
        let hold_cost = (quantity as f64 / 2.0) * holding_cost;
        let total_cost = round_i64(purchase_cost + order_cost + hold_cost);

        let better = match &best {
            Some(current) => total_cost < current.total_annual_cost,
            None => true,
        };
        if better {
            best = Some(DiscountEoqResult {
                optimal_quantity: quantity,
                optimal_price: bracket.discounted_price,
                total_annual_cost: total_cost,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eoq_known_value() {
        // EOQ = sqrt(2 × 3650 × 50000 / 250) = sqrt(1,460,000) ≈ 1208.3 → 1209
        let result = calculate_eoq(&EoqInput {
            annual_demand: 3650.0,
            ordering_cost: 50_000.0,
            holding_cost_per_unit: 250.0,
        });

        assert_eq!(result.eoq, 1209);
        assert!(result.orders_per_year > 3.0 && result.orders_per_year < 3.1);
        assert_eq!(
            result.total_annual_cost,
            result.annual_ordering_cost + result.annual_holding_cost
        );
    }

    #[test]
    fn test_eoq_invalid_inputs_return_zero() {
        let result = calculate_eoq(&EoqInput {
            annual_demand: 0.0,
            ordering_cost: 50_000.0,
            holding_cost_per_unit: 250.0,
        });
        assert_eq!(result.eoq, 0);
        assert_eq!(result.total_annual_cost, 0);
    }

    #[test]
    fn test_holding_cost() {
        // 1000 × 0.25 + 10 × 12 + 30 + 20 = 420
        let cost = calculate_holding_cost(&HoldingCostInput {
            unit_price: 1000.0,
            holding_rate: None,
            monthly_storage_cost: Some(10.0),
            annual_insurance_cost: Some(30.0),
            other_annual_cost: Some(20.0),
        });
        assert!((cost - 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_cost_near_eoq_has_no_savings() {
        let eoq_result = calculate_eoq(&EoqInput {
            annual_demand: 3650.0,
            ordering_cost: 50_000.0,
            holding_cost_per_unit: 250.0,
        });

        let comparison =
            compare_order_quantity_cost(&eoq_result, 1200.0, 3650.0, 50_000.0, 250.0);
        assert!(comparison.savings_percent.abs() < 5.0);
    }

    #[test]
    fn test_compare_cost_far_from_eoq() {
        let eoq_result = calculate_eoq(&EoqInput {
            annual_demand: 3650.0,
            ordering_cost: 50_000.0,
            holding_cost_per_unit: 250.0,
        });

        let comparison = compare_order_quantity_cost(&eoq_result, 50.0, 3650.0, 50_000.0, 250.0);
        assert!(comparison.cost_difference > 0);
        assert!(comparison.savings_percent >= 20.0);
    }

    #[test]
    fn test_compare_cost_zero_quantity() {
        let eoq_result = calculate_eoq(&EoqInput {
            annual_demand: 3650.0,
            ordering_cost: 50_000.0,
            holding_cost_per_unit: 250.0,
        });
        let comparison = compare_order_quantity_cost(&eoq_result, 0.0, 3650.0, 50_000.0, 250.0);
        assert_eq!(comparison.actual_annual_cost, 0);
        assert_eq!(comparison.savings_percent, 0.0);
    }

    #[test]
    fn test_discount_eoq_picks_cheapest_bracket() {
        let brackets = vec![
            QuantityDiscountBracket {
                min_quantity: 0,
                discounted_price: 1000.0,
            },
            QuantityDiscountBracket {
                min_quantity: 2000,
                discounted_price: 900.0,
            },
        ];

        let result =
            calculate_eoq_with_discount(3650.0, 50_000.0, 0.25, &brackets).unwrap();
        // 할인 구간이 구매비용 차이(연 365,000원)를 상쇄하고도 남는지 확인
        assert!(result.optimal_quantity >= 1209);
        assert!(result.total_annual_cost > 0);
    }

    #[test]
    fn test_discount_eoq_empty_brackets() {
        assert!(calculate_eoq_with_discount(3650.0, 50_000.0, 0.25, &[]).is_none());
    }
}
