//! 변화율 계산 공통 로직.
//!
//! 모든 변화율은 소수점 4자리에서 반올림하며, 반올림 방식은
//! "0에서 멀어지는 방향" (half away from zero) 입니다.
//! 예: 0.12345 → 0.1235, -0.12345 → -0.1235
//!
//! 나눗셈 몫은 먼저 Decimal 정밀도(소수점 28자리)로 반올림된 뒤 다시
//! 소수점 4자리로 반올림됩니다. 참값이 중간값보다 1e-28 이내로 작으면
//! 첫 반올림에서 중간값이 되어 0에서 먼 쪽으로 올라갈 수 있습니다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// 변화율의 소수점 자릿수.
pub const CHANGE_DECIMAL_PLACES: u32 = 4;

/// 변화율을 계산할 수 없는 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// 비교 기준 값이 0
    DivisionByZero,
    /// Decimal 범위를 벗어남
    Overflow,
}

impl UndefinedReason {
    /// 직렬화 시 사용하는 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            UndefinedReason::DivisionByZero => "division_by_zero",
            UndefinedReason::Overflow => "overflow",
        }
    }
}

/// 필드 단위 변화 결과 (변화율 또는 변화량).
///
/// 정의되지 않는 변화율은 NaN 대신 명시적인 `Undefined`로 표현되며,
/// 다른 필드의 계산에는 영향을 주지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeValue {
    /// 계산된 값 (변화율은 반올림됨, 0.5 = +50%)
    Defined(Decimal),
    /// 계산 불가
    Undefined(UndefinedReason),
}

impl ChangeValue {
    /// 정의된 값이면 반환합니다.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            ChangeValue::Defined(v) => Some(*v),
            ChangeValue::Undefined(_) => None,
        }
    }

    /// 0으로 나눔 때문에 계산되지 않았는지 확인합니다.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            ChangeValue::Undefined(UndefinedReason::DivisionByZero)
        )
    }
}

impl fmt::Display for ChangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeValue::Defined(v) => write!(f, "{}", v),
            ChangeValue::Undefined(reason) => write!(f, "{}", reason.as_str()),
        }
    }
}

impl Serialize for ChangeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChangeValue::Defined(v) => rust_decimal::serde::float::serialize(v, serializer),
            ChangeValue::Undefined(reason) => serializer.serialize_str(reason.as_str()),
        }
    }
}

/// 변화율을 소수점 4자리로 반올림합니다 (half away from zero).
pub fn round_change(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CHANGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `base`에서 `current`로의 변화율을 계산합니다.
///
/// `(current - base) / base`를 소수점 4자리로 반올림합니다.
///
/// # Examples
///
/// ```
/// use pricefeed_core::domain::change::{percent_change, ChangeValue};
/// use rust_decimal::Decimal;
///
/// let change = percent_change(Decimal::from(150), Decimal::from(100));
/// assert_eq!(change, ChangeValue::Defined(Decimal::new(5, 1)));
///
/// let undefined = percent_change(Decimal::from(50), Decimal::ZERO);
/// assert!(undefined.is_division_by_zero());
/// ```
pub fn percent_change(current: Decimal, base: Decimal) -> ChangeValue {
    if base.is_zero() {
        return ChangeValue::Undefined(UndefinedReason::DivisionByZero);
    }

    current
        .checked_sub(base)
        .and_then(|delta| delta.checked_div(base))
        .map(|ratio| ChangeValue::Defined(round_change(ratio)))
        .unwrap_or(ChangeValue::Undefined(UndefinedReason::Overflow))
}
