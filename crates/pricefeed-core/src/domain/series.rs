//! 관측치와 시계열.
//!
//! `Series`는 생성 시점에 날짜 오름차순으로 정렬되며 이후 변경되지 않습니다.
//! 모든 분석은 이 불변 스냅샷 위에서 순수 함수로 수행됩니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricefeedError, PricefeedResult};

/// 단일 (날짜, 값) 관측치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// 관측 날짜
    pub date: NaiveDate,
    /// 관측 값
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl Observation {
    /// 새 관측치 생성.
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// 날짜 오름차순으로 정렬된 비어 있지 않은 관측치 시퀀스.
///
/// 같은 날짜가 여러 번 나타나는 경우는 호출자가 보장하지 않는 한 정의되지
/// 않습니다. 안정 정렬을 사용하므로 입력 순서상 나중 관측치가 조회에서 우선합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// 관측치 목록으로 시계열을 생성합니다.
    ///
    /// # Errors
    ///
    /// 관측치가 없으면 [`PricefeedError::EmptySeries`]를 반환합니다.
    pub fn new(mut observations: Vec<Observation>) -> PricefeedResult<Self> {
        if observations.is_empty() {
            return Err(PricefeedError::EmptySeries);
        }

        // sort_by_key는 안정 정렬
        observations.sort_by_key(|obs| obs.date);

        Ok(Self { observations })
    }

    /// 모든 관측치 (날짜 오름차순).
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// 관측치 개수.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// 항상 `false`. 빈 시계열은 생성할 수 없습니다.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// 가장 오래된 관측치.
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// 가장 최근 관측치 (분석 기준점).
    pub fn latest(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// 시계열의 최소 날짜.
    pub fn start_date(&self) -> NaiveDate {
        self.first().date
    }

    /// 시계열의 최대 날짜. 값과 무관하게 가장 늦은 날짜입니다.
    pub fn max_date(&self) -> NaiveDate {
        self.latest().date
    }

    /// 주어진 날짜 이하인 관측치 중 가장 최근 것을 찾습니다.
    ///
    /// 해당 날짜 이전에 관측치가 없으면 `None`.
    pub fn at_or_before(&self, date: NaiveDate) -> Option<&Observation> {
        let idx = self.observations.partition_point(|obs| obs.date <= date);
        idx.checked_sub(1).map(|i| &self.observations[i])
    }

    /// 주어진 날짜 이후(포함)의 관측치들.
    pub fn since(&self, date: NaiveDate) -> &[Observation] {
        let idx = self.observations.partition_point(|obs| obs.date < date);
        &self.observations[idx..]
    }

    /// 최댓값을 가진 관측치. 동률이면 가장 이른 날짜가 선택됩니다.
    pub fn peak(&self) -> &Observation {
        let mut peak = self.first();
        for obs in &self.observations[1..] {
            if obs.value > peak.value {
                peak = obs;
            }
        }
        peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(points: &[(NaiveDate, Decimal)]) -> Series {
        Series::new(
            points
                .iter()
                .map(|(d, v)| Observation::new(*d, *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = Series::new(Vec::new()).unwrap_err();
        assert!(matches!(err, PricefeedError::EmptySeries));
    }

    #[test]
    fn test_series_sorted_on_construction() {
        let s = series(&[
            (date(2024, 3, 1), dec!(3)),
            (date(2024, 1, 1), dec!(1)),
            (date(2024, 2, 1), dec!(2)),
        ]);

        assert_eq!(s.start_date(), date(2024, 1, 1));
        assert_eq!(s.max_date(), date(2024, 3, 1));
        assert_eq!(s.latest().value, dec!(3));
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_at_or_before() {
        let s = series(&[
            (date(2024, 1, 1), dec!(1)),
            (date(2024, 1, 10), dec!(2)),
            (date(2024, 1, 20), dec!(3)),
        ]);

        assert!(s.at_or_before(date(2023, 12, 31)).is_none());
        assert_eq!(s.at_or_before(date(2024, 1, 1)).unwrap().value, dec!(1));
        assert_eq!(s.at_or_before(date(2024, 1, 15)).unwrap().value, dec!(2));
        assert_eq!(s.at_or_before(date(2025, 1, 1)).unwrap().value, dec!(3));
    }

    #[test]
    fn test_since() {
        let s = series(&[
            (date(2024, 1, 1), dec!(1)),
            (date(2024, 1, 10), dec!(2)),
            (date(2024, 1, 20), dec!(3)),
        ]);

        assert_eq!(s.since(date(2024, 1, 10)).len(), 2);
        assert_eq!(s.since(date(2024, 1, 21)).len(), 0);
    }

    #[test]
    fn test_peak_prefers_earliest_date() {
        let s = series(&[
            (date(2024, 1, 1), dec!(10)),
            (date(2024, 1, 2), dec!(20)),
            (date(2024, 1, 3), dec!(20)),
            (date(2024, 1, 4), dec!(15)),
        ]);

        let peak = s.peak();
        assert_eq!(peak.date, date(2024, 1, 2));
        assert_eq!(peak.value, dec!(20));
    }

    #[test]
    fn test_duplicate_dates_keep_input_order() {
        let s = series(&[(date(2024, 1, 1), dec!(1)), (date(2024, 1, 1), dec!(2))]);

        assert_eq!(s.at_or_before(date(2024, 1, 1)).unwrap().value, dec!(2));
    }
}
