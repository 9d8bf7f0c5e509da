//! 가격 피드 시계열의 샘플링 빈도 정의.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricefeedError;

/// 시계열의 명목 샘플링 빈도.
///
/// 빈도에 따라 사용할 수 있는 변화율 구간과 기준일 정렬 방식이 달라집니다.
///
/// 설정 파일과 환경 변수에서도 [`FromStr`]과 같은 규칙으로 읽습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Frequency {
    /// 일별 데이터
    #[default]
    Daily,
    /// 월별 데이터
    Monthly,
}

impl Frequency {
    /// 한 글자 빈도 코드를 반환합니다 ("D", "M").
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "D",
            Frequency::Monthly => "M",
        }
    }

    /// 빈도 코드에서 파싱합니다.
    ///
    /// `D`/`daily`, `M`/`monthly`를 대소문자 구분 없이 허용합니다.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "d" | "daily" => Some(Frequency::Daily),
            "m" | "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// 기준일을 이 빈도의 기간 시작일로 정렬합니다.
    ///
    /// 월별 데이터는 해당 월의 1일로, 일별 데이터는 그대로 반환합니다.
    pub fn align(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date,
            Frequency::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Frequency {
    type Err = PricefeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| PricefeedError::InvalidFrequency(s.to_string()))
    }
}

impl TryFrom<String> for Frequency {
    type Error = PricefeedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
