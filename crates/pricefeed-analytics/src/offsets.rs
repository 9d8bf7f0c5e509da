//! 변화율 비교 구간(오프셋) 정의.
//!
//! 월/연 단위 구간은 달력 기준으로 빼며, 대상 월에 같은 일자가 없으면
//! 그 달의 마지막 날로 맞춥니다 (예: 3월 31일 - 1개월 = 2월 29일/28일).

use chrono::{Days, Months, NaiveDate};
use pricefeed_core::Frequency;
use serde::{Serialize, Serializer};
use std::fmt;

/// 이름이 붙은 달력 기준 비교 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Offset {
    /// 24시간 (1일)
    Hours24,
    /// 7일
    Days7,
    /// 1개월
    Months1,
    /// 3개월
    Months3,
    /// 6개월
    Months6,
    /// 12개월
    Months12,
    /// 2년
    Years2,
    /// 5년
    Years5,
    /// 10년
    Years10,
}

/// 일별 데이터의 비교 구간.
pub const DAILY_OFFSETS: &[Offset] = &[
    Offset::Hours24,
    Offset::Days7,
    Offset::Months1,
    Offset::Months3,
    Offset::Months6,
    Offset::Months12,
    Offset::Years2,
    Offset::Years5,
    Offset::Years10,
];

/// 월별 데이터의 비교 구간. 월 미만 구간은 의미가 없으므로 제외합니다.
pub const MONTHLY_OFFSETS: &[Offset] = &[
    Offset::Months1,
    Offset::Months3,
    Offset::Months6,
    Offset::Months12,
    Offset::Years2,
    Offset::Years5,
    Offset::Years10,
];

/// 구간 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Days(u64),
    Months(u32),
}

impl Offset {
    /// 빈도에 맞는 비교 구간 목록.
    pub fn for_frequency(frequency: Frequency) -> &'static [Offset] {
        match frequency {
            Frequency::Daily => DAILY_OFFSETS,
            Frequency::Monthly => MONTHLY_OFFSETS,
        }
    }

    /// 결과 맵에서 사용하는 키.
    pub fn key(&self) -> &'static str {
        match self {
            Offset::Hours24 => "24_hour",
            Offset::Days7 => "7_day",
            Offset::Months1 => "1_month",
            Offset::Months3 => "3_month",
            Offset::Months6 => "6_month",
            Offset::Months12 => "12_month",
            Offset::Years2 => "2_year",
            Offset::Years5 => "5_year",
            Offset::Years10 => "10_year",
        }
    }

    fn span(&self) -> Span {
        match self {
            Offset::Hours24 => Span::Days(1),
            Offset::Days7 => Span::Days(7),
            Offset::Months1 => Span::Months(1),
            Offset::Months3 => Span::Months(3),
            Offset::Months6 => Span::Months(6),
            Offset::Months12 => Span::Months(12),
            Offset::Years2 => Span::Months(24),
            Offset::Years5 => Span::Months(60),
            Offset::Years10 => Span::Months(120),
        }
    }

    /// `date`에서 이 구간만큼 거슬러 올라간 날짜.
    ///
    /// 달력 범위를 벗어나면 `None`.
    pub fn subtract_from(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.span() {
            Span::Days(days) => date.checked_sub_days(Days::new(days)),
            Span::Months(months) => date.checked_sub_months(Months::new(months)),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Offset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
