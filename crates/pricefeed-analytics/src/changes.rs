//! 시계열 변화율 계산기.
//!
//! 가장 최근 관측치(기준점)를 각 비교 구간 이전 시점의 관측치와 비교합니다.
//!
//! # 계산 항목
//!
//! - 구간별 변화율: 24시간, 7일, 1/3/6/12개월, 2/5/10년
//! - 고점 대비 현재 (peak-to-current): 전체 최댓값 대비 현재 값의 변화율
//! - 특정일 이후 변화 (since-date): 호출자가 지정한 날짜 대비 변화율
//!
//! 과거 비교 시점이 시계열 시작 이전이면 해당 구간은 결과에서 빠집니다.
//! 비교 값이 0이면 그 필드만 `division_by_zero`로 표시됩니다.

use chrono::NaiveDate;
use pricefeed_core::{
    percent_change, series_span, ChangeValue, Frequency, Observation, PricefeedResult, Series,
};
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::offsets::Offset;

/// 단일 비교 구간의 변화율.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetChange {
    /// 비교 구간
    pub offset: Offset,
    /// 비교에 사용된 과거 관측치
    pub base: Observation,
    /// 변화율
    pub percent_change: ChangeValue,
}

/// 고점 대비 현재 변화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakToCurrent {
    /// 변화율 (보통 0 이하)
    pub percent_change: ChangeValue,
    /// 최댓값이 처음 나타난 날짜
    pub peak_date: NaiveDate,
    /// 최댓값
    #[serde(with = "rust_decimal::serde::float")]
    pub peak_value: Decimal,
}

/// 지정일 이후 변화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SinceDateChange {
    /// 변화율
    pub percent_change: ChangeValue,
    /// 정규화된 기준일 (월별 데이터는 해당 월 1일)
    pub change_date: NaiveDate,
    /// 기준일 이하 가장 최근 관측치의 값
    #[serde(with = "rust_decimal::serde::float")]
    pub change_value: Decimal,
}

/// 변화율 계산 결과.
///
/// 직렬화하면 구간 키(`"12_month"` 등)와 `peak_to_current`,
/// `series_max_date`, `change_since_date`를 가진 평평한 객체가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    /// 기준점 (가장 최근 관측치)
    pub current: Observation,
    /// 계산된 구간별 변화율 (구간 순서 유지)
    pub changes: Vec<OffsetChange>,
    /// 고점 대비 현재
    pub peak_to_current: PeakToCurrent,
    /// 시계열의 가장 늦은 날짜
    pub series_max_date: NaiveDate,
    /// 지정일 이후 변화 (기준일이 주어지고 비교 관측치가 있을 때만)
    pub change_since_date: Option<SinceDateChange>,
}

impl ChangeReport {
    /// 구간의 변화율. 비교 관측치가 없어 계산되지 않았으면 `None`.
    pub fn get(&self, offset: Offset) -> Option<ChangeValue> {
        self.changes
            .iter()
            .find(|c| c.offset == offset)
            .map(|c| c.percent_change)
    }

    /// 구간이 결과에 포함되어 있는지 확인합니다.
    pub fn contains(&self, offset: Offset) -> bool {
        self.get(offset).is_some()
    }
}

impl Serialize for ChangeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = 2 + usize::from(self.change_since_date.is_some());
        let mut map = serializer.serialize_map(Some(self.changes.len() + extra))?;
        for change in &self.changes {
            map.serialize_entry(change.offset.key(), &change.percent_change)?;
        }
        map.serialize_entry("peak_to_current", &self.peak_to_current)?;
        map.serialize_entry("series_max_date", &self.series_max_date)?;
        if let Some(since) = &self.change_since_date {
            map.serialize_entry("change_since_date", since)?;
        }
        map.end()
    }
}

/// 시계열 변화율 계산기.
///
/// 생성 후 불변이며, [`compute`](Self::compute)는 같은 입력에 대해 항상 같은
/// 결과를 반환합니다.
#[derive(Debug, Clone)]
pub struct ChangeCalculator {
    series: Series,
    frequency: Frequency,
}

impl ChangeCalculator {
    /// 정렬된 시계열과 빈도로 계산기를 생성합니다.
    pub fn new(series: Series, frequency: Frequency) -> Self {
        Self { series, frequency }
    }

    /// 관측치 목록과 빈도 코드("D", "M")로 계산기를 생성합니다.
    ///
    /// # Errors
    ///
    /// - 빈도 코드가 일별/월별이 아니면 `InvalidFrequency`
    /// - 관측치가 없으면 `EmptySeries`
    pub fn from_observations(
        observations: Vec<Observation>,
        frequency: &str,
    ) -> PricefeedResult<Self> {
        let frequency: Frequency = frequency.parse()?;
        let series = Series::new(observations)?;
        Ok(Self::new(series, frequency))
    }

    /// 분석 대상 시계열.
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// 샘플링 빈도.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// 모든 변화율을 계산합니다.
    ///
    /// `since`가 주어지면 해당 날짜 대비 변화도 계산합니다.
    pub fn compute(&self, since: Option<NaiveDate>) -> ChangeReport {
        let _span = series_span!("compute_changes", self.frequency, self.series.len()).entered();

        let current = *self.series.latest();

        let changes = Offset::for_frequency(self.frequency)
            .iter()
            .filter_map(|offset| self.offset_change(&current, *offset))
            .collect();

        let peak = self.series.peak();
        let peak_to_current = PeakToCurrent {
            percent_change: percent_change(current.value, peak.value),
            peak_date: peak.date,
            peak_value: peak.value,
        };

        let change_since_date = since.and_then(|date| self.since_date_change(&current, date));

        ChangeReport {
            current,
            changes,
            peak_to_current,
            series_max_date: self.series.max_date(),
            change_since_date,
        }
    }

    fn offset_change(&self, current: &Observation, offset: Offset) -> Option<OffsetChange> {
        let target = offset.subtract_from(current.date)?;

        let Some(base) = self.series.at_or_before(target) else {
            debug!(offset = %offset, target_date = %target, "No observation before target date");
            return None;
        };

        let change = percent_change(current.value, base.value);
        debug!(
            offset = %offset,
            target_date = %target,
            base_date = %base.date,
            change = %change,
            "Computed offset change"
        );

        Some(OffsetChange {
            offset,
            base: *base,
            percent_change: change,
        })
    }

    fn since_date_change(&self, current: &Observation, date: NaiveDate) -> Option<SinceDateChange> {
        let change_date = self.frequency.align(date);

        let Some(base) = self.series.at_or_before(change_date) else {
            debug!(change_date = %change_date, "No observation at or before since-date");
            return None;
        };

        Some(SinceDateChange {
            percent_change: percent_change(current.value, base.value),
            change_date,
            change_value: base.value,
        })
    }
}
