//! 중앙값 기준 구간 분할.
//!
//! 라인 차트에서 중앙값 위/아래 구간을 다른 색으로 그리기 위해, 시계열을
//! 중앙값 기준으로 연속 구간으로 나눕니다. 렌더링은 외부에서 수행합니다.

use chrono::NaiveDate;
use pricefeed_core::{Observation, Series};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// 관측치가 중앙값 기준 어느 쪽에 있는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// 중앙값 이상
    AboveMedian,
    /// 중앙값 미만
    BelowMedian,
}

impl Band {
    fn classify(value: Decimal, median: Decimal) -> Self {
        if value >= median {
            Band::AboveMedian
        } else {
            Band::BelowMedian
        }
    }
}

/// 같은 밴드에 속하는 연속 관측치.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub band: Band,
    pub points: Vec<Observation>,
}

/// 중앙값 기준선과 분할된 구간.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedianSegments {
    /// 전체 값의 중앙값
    #[serde(with = "rust_decimal::serde::float")]
    pub median: Decimal,
    /// 중앙값 기준선 시작일 (시계열 최소 날짜)
    pub start_date: NaiveDate,
    /// 중앙값 기준선 종료일 (시계열 최대 날짜)
    pub end_date: NaiveDate,
    pub segments: Vec<Segment>,
}

/// 값들의 중앙값. 개수가 짝수면 가운데 두 값의 평균입니다.
pub fn median(series: &Series) -> Decimal {
    let mut values: Vec<Decimal> = series.observations().iter().map(|o| o.value).collect();
    values.sort();

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        midpoint(values[mid - 1], values[mid])
    } else {
        values[mid]
    }
}

/// `lo <= hi`인 두 값의 평균.
fn midpoint(lo: Decimal, hi: Decimal) -> Decimal {
    match lo.checked_add(hi) {
        Some(sum) => sum / Decimal::TWO,
        // 합이 넘치면 두 값의 부호가 같으므로 차이는 넘치지 않음
        None => lo + (hi - lo) / Decimal::TWO,
    }
}

/// 시계열을 중앙값 기준 연속 구간으로 나눕니다.
pub fn median_segments(series: &Series) -> MedianSegments {
    let median = median(series);

    let mut segments: Vec<Segment> = Vec::new();
    for obs in series.observations() {
        let band = Band::classify(obs.value, median);
        match segments.last_mut() {
            Some(segment) if segment.band == band => segment.points.push(*obs),
            _ => segments.push(Segment {
                band,
                points: vec![*obs],
            }),
        }
    }

    debug!(median = %median, segments = segments.len(), "Split series at median");

    MedianSegments {
        median,
        start_date: series.start_date(),
        end_date: series.max_date(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn series(values: &[Decimal]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Series::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Observation::new(start + chrono::Days::new(i as u64), *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&series(&[dec!(3), dec!(1), dec!(2)])), dec!(2));
        assert_eq!(median(&series(&[dec!(4), dec!(1), dec!(2), dec!(3)])), dec!(2.5));
    }

    #[test]
    fn test_segments_split_on_band_change() {
        let result = median_segments(&series(&[
            dec!(1),
            dec!(2),
            dec!(5),
            dec!(6),
            dec!(1),
        ]));

        assert_eq!(result.median, dec!(2));
        let bands: Vec<(Band, usize)> = result
            .segments
            .iter()
            .map(|s| (s.band, s.points.len()))
            .collect();
        // 중앙값과 같은 값은 위쪽 밴드
        assert_eq!(
            bands,
            vec![
                (Band::BelowMedian, 1),
                (Band::AboveMedian, 3),
                (Band::BelowMedian, 1),
            ]
        );
        assert_eq!(result.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(result.end_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_median_of_extreme_values() {
        assert_eq!(median(&series(&[Decimal::MAX, Decimal::MAX])), Decimal::MAX);
        assert_eq!(median(&series(&[Decimal::MIN, Decimal::MIN])), Decimal::MIN);
        assert_eq!(median(&series(&[Decimal::MIN, Decimal::MAX])), Decimal::ZERO);

        let result = median_segments(&series(&[Decimal::MAX, Decimal::MAX]));
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].band, Band::AboveMedian);
    }

    #[test]
    fn test_single_point_is_one_segment() {
        let result = median_segments(&series(&[dec!(7)]));
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].band, Band::AboveMedian);
    }
}
