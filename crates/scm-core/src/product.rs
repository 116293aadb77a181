//! 제품 모델

use serde::{Deserialize, Serialize};

use crate::{ensure_non_negative, Result};

/// ABC 등급 (매출 기여도 분류)
///
/// 등급 미지정 상태는 `Option<AbcGrade>` 으로 표현한다.
/// 미지정 → 중간값 기본 점수 규칙은 소비자 측에서 `match` 한 번으로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcGrade {
    A,
    B,
    C,
}

/// XYZ 등급 (수요 안정성 분류)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XyzGrade {
    X,
    Y,
    Z,
}

/// 제품 스냅샷
///
/// 호출 시점의 제품 마스터 정보. 엔진은 이 값을 변경하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// 제품 ID
    pub id: String,

    /// SKU
    pub sku: String,

    /// 제품명
    pub name: String,

    /// ABC 등급 (미지정 가능)
    pub abc_grade: Option<AbcGrade>,

    /// XYZ 등급 (미지정 가능)
    pub xyz_grade: Option<XyzGrade>,

    /// 판매 단가 (원)
    pub unit_price: f64,

    /// 매입 단가 (원)
    pub cost_price: f64,

    /// 리드타임 (일)
    pub lead_time_days: u32,

    /// 최소 발주 수량 (MOQ)
    pub moq: i64,
}

impl ProductSnapshot {
    /// 새 제품 스냅샷 생성
    pub fn new(id: impl Into<String>, sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            abc_grade: None,
            xyz_grade: None,
            unit_price: 0.0,
            cost_price: 0.0,
            lead_time_days: 0,
            moq: 1,
        }
    }

    /// 빌더: ABC 등급 설정
    pub fn with_abc_grade(mut self, grade: AbcGrade) -> Self {
        self.abc_grade = Some(grade);
        self
    }

    /// 빌더: XYZ 등급 설정
    pub fn with_xyz_grade(mut self, grade: XyzGrade) -> Self {
        self.xyz_grade = Some(grade);
        self
    }

    /// 빌더: 판매/매입 단가 설정
    pub fn with_prices(mut self, unit_price: f64, cost_price: f64) -> Self {
        self.unit_price = unit_price;
        self.cost_price = cost_price;
        self
    }

    /// 빌더: 리드타임 설정
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 빌더: MOQ 설정
    pub fn with_moq(mut self, moq: i64) -> Self {
        self.moq = moq;
        self
    }

    /// 경계 검증: 가격과 MOQ 가 유효한지 확인
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("unit_price", self.unit_price)?;
        ensure_non_negative("cost_price", self.cost_price)?;
        ensure_non_negative("moq", self.moq as f64)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let product = ProductSnapshot::new("P-001", "SKU-001", "공업용 베어링")
            .with_abc_grade(AbcGrade::A)
            .with_xyz_grade(XyzGrade::X)
            .with_prices(12000.0, 8500.0)
            .with_lead_time_days(7)
            .with_moq(50);

        assert_eq!(product.abc_grade, Some(AbcGrade::A));
        assert_eq!(product.xyz_grade, Some(XyzGrade::X));
        assert_eq!(product.moq, 50);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_unassigned_grades_default() {
        let product = ProductSnapshot::new("P-002", "SKU-002", "포장 필름");
        assert!(product.abc_grade.is_none());
        assert!(product.xyz_grade.is_none());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product = ProductSnapshot::new("P-003", "SKU-003", "테스트");
        product.unit_price = -100.0;
        assert!(product.validate().is_err());
    }
}
