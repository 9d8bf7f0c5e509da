//! 52주 가격 범위 및 전년 대비 통계.
//!
//! 기술적 차트의 헤더 주석(52주 최고/최저, 최근 값, 전년 대비 변화)에
//! 사용되는 수치를 계산합니다.

use chrono::{Days, NaiveDate};
use pricefeed_core::{percent_change, ChangeValue, Series, UndefinedReason};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// 52주 구간 길이 (일).
pub const WEEKS_52_DAYS: u64 = 52 * 7;

/// 전년 대비 변화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearOverYear {
    /// 비교에 사용된 1년 전 관측 날짜
    pub base_date: NaiveDate,
    /// 1년 전 값
    #[serde(with = "rust_decimal::serde::float")]
    pub base_value: Decimal,
    /// 절대 변화량 (현재 - 1년 전). Decimal 범위를 벗어나면 `Undefined(Overflow)`
    pub change_delta: ChangeValue,
    /// 변화율
    pub change_pct: ChangeValue,
}

impl YearOverYear {
    /// 변화량 표시용 부호 ("-" 또는 빈 문자열).
    pub fn sign(&self) -> &'static str {
        match self.change_delta {
            ChangeValue::Defined(delta) if delta.is_sign_negative() && !delta.is_zero() => "-",
            _ => "",
        }
    }
}

/// 52주 범위 통계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRangeStats {
    /// 52주 구간 시작일
    pub window_start: NaiveDate,
    /// 가장 최근 날짜
    pub last_date: NaiveDate,
    /// 52주 최고가
    #[serde(with = "rust_decimal::serde::float")]
    pub high_52w: Decimal,
    /// 52주 최저가
    #[serde(with = "rust_decimal::serde::float")]
    pub low_52w: Decimal,
    /// 가장 최근 값
    #[serde(with = "rust_decimal::serde::float")]
    pub last_value: Decimal,
    /// 전년 대비 (1년 전 관측치가 없으면 `None`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_over_year: Option<YearOverYear>,
}

/// 시계열의 52주 범위 통계를 계산합니다.
///
/// 52주 구간은 가장 최근 날짜에서 364일 전부터 시작합니다. 1년 전 값은
/// 구간 시작일 이하의 가장 최근 관측치입니다.
pub fn year_range_stats(series: &Series) -> YearRangeStats {
    let last = series.latest();
    let window_start = last
        .date
        .checked_sub_days(Days::new(WEEKS_52_DAYS))
        .unwrap_or_else(|| series.start_date());

    // 최근 관측치는 항상 구간에 포함되므로 비어 있지 않음
    let window = series.since(window_start);
    let (high_52w, low_52w) = window.iter().fold((last.value, last.value), |(hi, lo), obs| {
        (hi.max(obs.value), lo.min(obs.value))
    });

    let year_over_year = series.at_or_before(window_start).map(|base| YearOverYear {
        base_date: base.date,
        base_value: base.value,
        change_delta: last
            .value
            .checked_sub(base.value)
            .map(ChangeValue::Defined)
            .unwrap_or(ChangeValue::Undefined(UndefinedReason::Overflow)),
        change_pct: percent_change(last.value, base.value),
    });

    debug!(
        window_start = %window_start,
        window_len = window.len(),
        has_yoy = year_over_year.is_some(),
        "Computed 52-week stats"
    );

    YearRangeStats {
        window_start,
        last_date: last.date,
        high_52w,
        low_52w,
        last_value: last.value,
        year_over_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricefeed_core::Observation;
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
    fn test_year_range_stats() {
        let s = series(&[
            (date(2022, 12, 1), dec!(500)),
            (date(2023, 1, 1), dec!(100)),
            (date(2023, 6, 1), dec!(140)),
            (date(2023, 9, 1), dec!(90)),
            (date(2024, 1, 1), dec!(120)),
        ]);
        let stats = year_range_stats(&s);

        // 2024-01-01 - 364일 = 2023-01-02
        assert_eq!(stats.window_start, date(2023, 1, 2));
        // 2022-12-01의 500은 구간 밖
        assert_eq!(stats.high_52w, dec!(140));
        assert_eq!(stats.low_52w, dec!(90));
        assert_eq!(stats.last_value, dec!(120));

        let yoy = stats.year_over_year.unwrap();
        assert_eq!(yoy.base_date, date(2023, 1, 1));
        assert_eq!(yoy.change_delta, ChangeValue::Defined(dec!(20)));
        assert_eq!(yoy.change_pct, ChangeValue::Defined(dec!(0.2)));
        assert_eq!(yoy.sign(), "");
    }

    #[test]
    fn test_exact_year_ago_observation_is_used() {
        let s = series(&[
            (date(2023, 1, 1), dec!(100)),
            (date(2023, 1, 2), dec!(150)),
            (date(2024, 1, 1), dec!(120)),
        ]);
        let yoy = year_range_stats(&s).year_over_year.unwrap();

        assert_eq!(yoy.base_date, date(2023, 1, 2));
        assert_eq!(yoy.change_delta, ChangeValue::Defined(dec!(-30)));
        assert_eq!(yoy.change_pct, ChangeValue::Defined(dec!(-0.2)));
        assert_eq!(yoy.sign(), "-");
    }

    #[test]
    fn test_short_series_has_no_year_over_year() {
        let s = series(&[(date(2024, 1, 1), dec!(100)), (date(2024, 2, 1), dec!(110))]);
        let stats = year_range_stats(&s);

        assert!(stats.year_over_year.is_none());
        assert_eq!(stats.high_52w, dec!(110));
        assert_eq!(stats.low_52w, dec!(100));
    }

    #[test]
    fn test_year_over_year_overflow_is_reported() {
        let s = series(&[
            (date(2023, 1, 1), Decimal::MIN),
            (date(2024, 1, 1), Decimal::MAX),
        ]);
        let stats = year_range_stats(&s);

        assert_eq!(stats.high_52w, Decimal::MAX);
        assert_eq!(stats.low_52w, Decimal::MAX);

        let yoy = stats.year_over_year.unwrap();
        assert_eq!(
            yoy.change_delta,
            ChangeValue::Undefined(UndefinedReason::Overflow)
        );
        assert_eq!(
            yoy.change_pct,
            ChangeValue::Undefined(UndefinedReason::Overflow)
        );
        assert_eq!(yoy.sign(), "");
    }
}
