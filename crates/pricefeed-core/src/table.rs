//! CSV 테이블 로딩.
//!
//! 날짜/값 두 컬럼을 가진 테이블을 읽어 [`Series`]로 변환합니다.
//! 컬럼 이름은 호출자가 지정합니다.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::{Observation, Series};
use crate::error::{PricefeedError, PricefeedResult};

/// 허용하는 날짜 형식.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 허용하는 날짜+시간 형식 (시간은 버림).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// 입력 테이블의 날짜/값 컬럼 이름.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// 날짜 컬럼
    pub date: String,
    /// 값 컬럼
    pub value: String,
}

impl ColumnSpec {
    /// 새 컬럼 지정 생성.
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
        }
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new("date", "price_feed")
    }
}

/// 파일에서 시계열을 읽습니다.
pub fn read_series_from_path<P: AsRef<Path>>(
    path: P,
    columns: &ColumnSpec,
) -> PricefeedResult<Series> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PricefeedError::Io(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    read_series(file, columns)
}

/// CSV 리더에서 시계열을 읽습니다.
///
/// 값이 비어 있는 행은 경고를 남기고 건너뜁니다. 날짜나 값을 해석할 수
/// 없는 행은 줄 번호와 함께 에러를 반환합니다.
pub fn read_series<R: Read>(reader: R, columns: &ColumnSpec) -> PricefeedResult<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = find_column(&headers, &columns.date)?;
    let value_idx = find_column(&headers, &columns.value)?;

    let mut observations = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // 헤더가 1번 줄
        let line = idx + 2;
        let record = result?;

        let raw_date = record.get(date_idx).unwrap_or("");
        let raw_value = record.get(value_idx).unwrap_or("");

        if raw_value.is_empty() {
            warn!(line, "Skipping row with empty value");
            skipped += 1;
            continue;
        }

        let date = parse_date(raw_date)
            .map_err(|e| PricefeedError::Parse(format!("line {}: {}", line, e)))?;
        let value = parse_value(raw_value)
            .map_err(|e| PricefeedError::Parse(format!("line {}: {}", line, e)))?;

        observations.push(Observation::new(date, value));
    }

    debug!(
        rows = observations.len(),
        skipped,
        date_column = %columns.date,
        value_column = %columns.value,
        "Loaded series table"
    );

    Series::new(observations)
}

fn find_column(headers: &StringRecord, name: &str) -> PricefeedResult<usize> {
    headers
        .iter()
        .position(|h| normalize_header(h) == name.trim())
        .ok_or_else(|| PricefeedError::MissingColumn(name.to_string()))
}

fn normalize_header(name: &str) -> &str {
    // 엑셀이 붙이는 UTF-8 BOM 제거
    name.trim().trim_start_matches('\u{feff}')
}

/// 날짜 문자열을 파싱합니다. 시간 부분이 있으면 버립니다.
pub fn parse_date(s: &str) -> PricefeedResult<NaiveDate> {
    let s = s.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(PricefeedError::Parse(format!(
        "Invalid date format: '{}'. Expected YYYY-MM-DD",
        s
    )))
}

/// 값 문자열을 Decimal로 파싱합니다. 지수 표기도 허용합니다.
pub fn parse_value(s: &str) -> PricefeedResult<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| PricefeedError::Parse(format!("Invalid value: '{}'", s)))
}
