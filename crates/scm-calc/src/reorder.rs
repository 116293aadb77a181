//! 발주 추천
//!
//! 발주가 필요한 품목을 식별하고 추천 수량과 우선순위 점수를 계산한다.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use scm_core::{classify_inventory_status, AbcGrade, InventoryStatus};

use crate::eoq::{calculate_eoq, calculate_holding_cost, EoqInput, HoldingCostInput};
use crate::reorder_point::{calculate_order_quantity, should_reorder, OrderQuantityInput};
use crate::scoring::abc_grade_score;

/// 발주 추천 계산 입력 (제품 1건)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReorderData {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    pub current_stock: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub avg_daily_sales: f64,
    pub abc_grade: Option<AbcGrade>,
    pub moq: i64,
    pub lead_time: u32,
    pub unit_price: f64,
    pub cost_price: f64,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
}

/// 공급자 참조 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRef {
    pub id: String,
    pub name: String,
    pub lead_time: u32,
}

/// 발주 필요 품목
///
/// 재고상태가 발주 대상(품절/위험/부족/주의)인 경우에만 생성된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    pub current_stock: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub avg_daily_sales: f64,

    /// 현재 재고로 버틸 수 있는 일수 (판매량 0 이면 None)
    pub days_of_stock: Option<i64>,

    /// 추천 발주 수량 (항상 MOQ 배수, 양수)
    pub recommended_qty: i64,

    /// 긴급도 (1-3)
    pub urgency_level: u8,

    /// 재고상태
    pub status: InventoryStatus,

    /// 공급자 (ID와 이름이 모두 있을 때만)
    pub supplier: Option<SupplierRef>,
}

/// 재고일수 계산
///
/// 안전재고를 제외한 가용 재고 기준. 일평균 판매량이 0 이하이면 `None`.
pub fn calculate_days_of_stock(
    current_stock: i64,
    avg_daily_sales: f64,
    safety_stock: i64,
) -> Option<i64> {
    if avg_daily_sales <= 0.0 {
        return None;
    }

    let available_stock = (current_stock - safety_stock).max(0);
    Some((available_stock as f64 / avg_daily_sales).floor() as i64)
}

/// 추천 발주 수량 계산
///
/// 매입 단가와 판매량이 있으면 EOQ 기반, 아니면 목표 재고일수(30일) 기반.
/// 결과는 항상 MOQ 이상이고 MOQ 의 올림 배수다.
pub fn calculate_recommended_quantity(data: &ProductReorderData) -> i64 {
    let annual_demand = data.avg_daily_sales * 365.0;

    let eoq_qty = if annual_demand > 0.0 && data.cost_price > 0.0 {
        let holding_cost = calculate_holding_cost(&HoldingCostInput {
            unit_price: data.cost_price,
            ..Default::default()
        });

        let eoq_result = calculate_eoq(&EoqInput {
            annual_demand,
            ordering_cost: crate::eoq::DEFAULT_ORDERING_COST,
            holding_cost_per_unit: holding_cost,
        });

        (eoq_result.eoq > 0).then_some(eoq_result.eoq)
    } else {
        None
    };

    let moq = data.moq.max(1);
    let result = calculate_order_quantity(&OrderQuantityInput {
        current_stock: data.current_stock,
        safety_stock: data.safety_stock,
        average_daily_demand: data.avg_daily_sales,
        target_days_of_inventory: None,
        eoq: eoq_qty,
        min_order_quantity: Some(moq),
        order_multiple: Some(moq),
    });

    result.recommended_quantity
}

/// 발주 필요 품목으로 변환
///
/// 현재고가 발주점을 넘거나 상태가 발주 대상이 아니면 `None`.
pub fn convert_to_reorder_item(data: &ProductReorderData) -> Option<ReorderItem> {
    if !should_reorder(data.current_stock, data.reorder_point) {
        return None;
    }

    let status = classify_inventory_status(
        data.current_stock,
        data.safety_stock,
        data.reorder_point,
    );
    if !status.needs_reorder() {
        return None;
    }

    let supplier = match (&data.supplier_id, &data.supplier_name) {
        (Some(id), Some(name)) => Some(SupplierRef {
            id: id.clone(),
            name: name.clone(),
            lead_time: data.lead_time,
        }),
        _ => None,
    };

    Some(ReorderItem {
        product_id: data.product_id.clone(),
        sku: data.sku.clone(),
        product_name: data.product_name.clone(),
        current_stock: data.current_stock,
        safety_stock: data.safety_stock,
        reorder_point: data.reorder_point,
        avg_daily_sales: data.avg_daily_sales,
        days_of_stock: calculate_days_of_stock(
            data.current_stock,
            data.avg_daily_sales,
            data.safety_stock,
        ),
        recommended_qty: calculate_recommended_quantity(data),
        urgency_level: status.urgency_level(),
        status,
        supplier,
    })
}

/// 발주 우선순위 점수 (0-100)
///
/// 재고상태(최대 50) + ABC 등급(최대 30) + 재고일수(최대 20).
pub fn calculate_reorder_priority(item: &ReorderItem, abc_grade: Option<AbcGrade>) -> u32 {
    let status_score = match item.status {
        InventoryStatus::OutOfStock => 50,
        InventoryStatus::Critical => 40,
        InventoryStatus::Shortage => 30,
        InventoryStatus::Caution => 20,
        // 발주 대상이 아닌 상태는 생성 단계에서 걸러진다
        _ => 0,
    };

    let days_score = match item.days_of_stock {
        None => 20,
        Some(days) if days <= 0 => 20,
        Some(days) if days <= 3 => 15,
        Some(days) if days <= 7 => 10,
        Some(_) => 5,
    };

    status_score + abc_grade_score(abc_grade) + days_score
}

/// 발주 필요 품목 정렬 (우선순위 점수 내림차순, 동점은 입력 순서 유지)
///
/// 등급 맵에 없는 제품은 등급 미지정으로 취급한다.
pub fn sort_reorder_items(
    mut items: Vec<ReorderItem>,
    abc_grades: &HashMap<String, AbcGrade>,
) -> Vec<ReorderItem> {
    items.sort_by_key(|item| {
        Reverse(calculate_reorder_priority(
            item,
            abc_grades.get(&item.product_id).copied(),
        ))
    });
    items
}

/// 긴급도별 필터링 (`min_level` 미지정 시 전체 반환)
pub fn filter_by_urgency(items: &[ReorderItem], min_level: Option<u8>) -> Vec<ReorderItem> {
    match min_level {
        None => items.to_vec(),
        Some(level) => items
            .iter()
            .filter(|item| item.urgency_level >= level)
            .cloned()
            .collect(),
    }
}

/// ABC 등급별 필터링 (`grade` 미지정 시 전체 반환)
pub fn filter_by_abc_grade(
    items: &[ReorderItem],
    abc_grades: &HashMap<String, AbcGrade>,
    grade: Option<AbcGrade>,
) -> Vec<ReorderItem> {
    match grade {
        None => items.to_vec(),
        Some(grade) => items
            .iter()
            .filter(|item| abc_grades.get(&item.product_id) == Some(&grade))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn data(current: i64, safety: i64, reorder: i64, avg: f64) -> ProductReorderData {
        ProductReorderData {
            product_id: "P-001".into(),
            sku: "SKU-001".into(),
            product_name: "테스트 제품".into(),
            current_stock: current,
            safety_stock: safety,
            reorder_point: reorder,
            avg_daily_sales: avg,
            abc_grade: None,
            moq: 10,
            lead_time: 7,
            unit_price: 1500.0,
            cost_price: 1000.0,
            supplier_id: None,
            supplier_name: None,
        }
    }

    #[test]
    fn test_days_of_stock() {
        assert_eq!(calculate_days_of_stock(130, 10.0, 50), Some(8));
        assert_eq!(calculate_days_of_stock(30, 10.0, 50), Some(0)); // 가용 재고 0
        assert_eq!(calculate_days_of_stock(130, 0.0, 50), None);
    }

    #[test]
    fn test_optimal_stock_yields_no_item() {
        // 현재고 == 발주점은 발주 대상이 아니다
        assert!(convert_to_reorder_item(&data(101, 50, 100, 10.0)).is_none());
    }

    #[test]
    fn test_reorder_point_boundary_emits_item() {
        // 현재고 == 발주점 → shouldReorder 는 포함 비교지만 상태는 적정이므로 제외
        assert!(convert_to_reorder_item(&data(100, 50, 100, 10.0)).is_none());
        // 발주점 미만부터 품목 생성
        let item = convert_to_reorder_item(&data(99, 50, 100, 10.0)).unwrap();
        assert_eq!(item.status, InventoryStatus::Caution);
        assert_eq!(item.urgency_level, 1);
    }

    #[rstest]
    #[case(0, InventoryStatus::OutOfStock, 3)]
    #[case(20, InventoryStatus::Critical, 3)]
    #[case(40, InventoryStatus::Shortage, 2)]
    #[case(80, InventoryStatus::Caution, 1)]
    fn test_status_and_urgency(
        #[case] current: i64,
        #[case] expected_status: InventoryStatus,
        #[case] expected_urgency: u8,
    ) {
        let item = convert_to_reorder_item(&data(current, 50, 100, 10.0)).unwrap();
        assert_eq!(item.status, expected_status);
        assert_eq!(item.urgency_level, expected_urgency);
    }

    #[test]
    fn test_recommended_qty_is_moq_multiple() {
        let item = convert_to_reorder_item(&data(0, 50, 100, 10.0)).unwrap();
        assert!(item.recommended_qty > 0);
        assert_eq!(item.recommended_qty % 10, 0);
    }

    #[test]
    fn test_recommended_qty_zero_sales_floors_at_moq() {
        let mut product = data(0, 50, 100, 0.0);
        product.moq = 25;
        let qty = calculate_recommended_quantity(&product);
        assert_eq!(qty, 50); // 목표 재고 = 안전재고 50 → MOQ 25 의 배수
        assert_eq!(qty % 25, 0);

        // 목표 재고조차 없으면 MOQ 로 바닥
        let mut empty = data(40, 50, 100, 0.0);
        empty.moq = 25;
        assert_eq!(calculate_recommended_quantity(&empty), 25);
    }

    #[test]
    fn test_recommended_qty_without_cost_uses_target_days() {
        let mut product = data(0, 50, 100, 10.0);
        product.cost_price = 0.0;
        // 목표 재고 10×30 + 50 = 350 → MOQ 10 배수
        assert_eq!(calculate_recommended_quantity(&product), 350);
    }

    #[test]
    fn test_supplier_requires_both_fields() {
        let mut product = data(0, 50, 100, 10.0);
        product.supplier_id = Some("S-1".into());
        assert!(convert_to_reorder_item(&product).unwrap().supplier.is_none());

        product.supplier_name = Some("한빛상사".into());
        let supplier = convert_to_reorder_item(&product).unwrap().supplier.unwrap();
        assert_eq!(supplier.id, "S-1");
        assert_eq!(supplier.lead_time, 7);
    }

    #[test]
    fn test_priority_score_components() {
        let item = convert_to_reorder_item(&data(0, 50, 100, 10.0)).unwrap();
        // 품절 50 + A등급 30 + 재고일수 0 → 20
        assert_eq!(calculate_reorder_priority(&item, Some(AbcGrade::A)), 100);
        // 미지정 등급은 중간값 15
        assert_eq!(calculate_reorder_priority(&item, None), 85);
    }

    #[rstest]
    #[case(Some(0), 20)]
    #[case(Some(3), 15)]
    #[case(Some(7), 10)]
    #[case(Some(8), 5)]
    #[case(None, 20)]
    fn test_days_score_bands(#[case] days: Option<i64>, #[case] expected: u32) {
        let mut item = convert_to_reorder_item(&data(0, 50, 100, 10.0)).unwrap();
        item.days_of_stock = days;
        item.status = InventoryStatus::Caution;
        let score = calculate_reorder_priority(&item, None);
        assert_eq!(score, 20 + 15 + expected);
    }

    #[test]
    fn test_sort_stability_on_ties() {
        let first = convert_to_reorder_item(&data(0, 50, 100, 10.0)).unwrap();
        let mut second = first.clone();
        second.product_id = "P-002".into();

        let sorted = sort_reorder_items(vec![first, second], &HashMap::new());
        assert_eq!(sorted[0].product_id, "P-001");
        assert_eq!(sorted[1].product_id, "P-002");
    }

    #[test]
    fn test_sort_orders_by_priority() {
        let out_of_stock = convert_to_reorder_item(&data(0, 50, 100, 10.0)).unwrap();
        let caution = convert_to_reorder_item(&data(90, 50, 100, 10.0)).unwrap();

        let sorted = sort_reorder_items(vec![caution.clone(), out_of_stock.clone()], &HashMap::new());
        assert_eq!(sorted[0].status, InventoryStatus::OutOfStock);
    }

    #[test]
    fn test_filters() {
        let critical = convert_to_reorder_item(&data(20, 50, 100, 10.0)).unwrap();
        let caution = convert_to_reorder_item(&data(90, 50, 100, 10.0)).unwrap();
        let items = vec![critical, caution];

        assert_eq!(filter_by_urgency(&items, None).len(), 2);
        assert_eq!(filter_by_urgency(&items, Some(2)).len(), 1);
        assert_eq!(filter_by_urgency(&items, Some(3)).len(), 1);

        let mut grades = HashMap::new();
        grades.insert("P-001".to_string(), AbcGrade::A);
        assert_eq!(filter_by_abc_grade(&items, &grades, Some(AbcGrade::A)).len(), 2);
        assert_eq!(filter_by_abc_grade(&items, &grades, Some(AbcGrade::B)).len(), 0);
        assert_eq!(filter_by_abc_grade(&items, &grades, None).len(), 2);
    }
}
