//! # SCM Core
//!
//! 핵심 도메인 모델과 타입 정의

pub mod product;
pub mod status;
pub mod stock;

// Re-export 주요 타입
pub use product::{AbcGrade, ProductSnapshot, XyzGrade};
pub use status::{classify_inventory_status, InventoryStatus};
pub use stock::{DemandProfile, StockPosition};

/// SCM 엔진 에러 타입
///
/// 순수 계산 함수는 에러를 반환하지 않는다. 이 타입은 외부 계층이
/// 넘겨주는 입력을 경계에서 검증할 때만 사용된다.
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("음수가 허용되지 않는 필드: {field} = {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("유한하지 않은 숫자 필드: {0}")]
    NonFinite(&'static str),

    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScmError>;

/// 숫자 필드 경계 검증 헬퍼
///
/// 음수이거나 NaN/무한대인 값을 거부한다. 엔진 내부 함수는 검증 없이
/// 주어진 값 그대로 비교 연산을 수행하므로, 외부 계층은 이 헬퍼로
/// 입력을 먼저 확인하는 것을 권장한다.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ScmError::NonFinite(field));
    }
    if value < 0.0 {
        return Err(ScmError::NegativeValue { field, value });
    }
    Ok(())
}
