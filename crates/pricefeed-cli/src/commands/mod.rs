//! CLI 명령어 구현 모듈.

pub mod changes;
pub mod output;
pub mod segments;
pub mod stats;
pub mod ticker;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pricefeed_core::{read_series_from_path, AnalysisConfig, ColumnSpec, Frequency, Series};
use std::path::PathBuf;
use tracing::info;

/// 시계열 입력 설정 (파일 + 컬럼 + 빈도).
#[derive(Debug, Clone)]
pub struct SeriesInput {
    pub path: PathBuf,
    pub columns: ColumnSpec,
    pub frequency: Frequency,
}

impl SeriesInput {
    /// CLI 인자를 설정 기본값 위에 덮어써서 입력 설정을 만듭니다.
    pub fn resolve(
        path: PathBuf,
        date_column: Option<String>,
        value_column: Option<String>,
        frequency: Option<&str>,
        defaults: &AnalysisConfig,
    ) -> Result<Self> {
        let frequency = match frequency {
            Some(code) => code.parse::<Frequency>()?,
            None => defaults.frequency,
        };

        Ok(Self {
            path,
            columns: ColumnSpec::new(
                date_column.unwrap_or_else(|| defaults.date_column.clone()),
                value_column.unwrap_or_else(|| defaults.value_column.clone()),
            ),
            frequency,
        })
    }

    /// 입력 파일에서 시계열을 읽습니다.
    pub fn load(&self) -> Result<Series> {
        info!(
            path = %self.path.display(),
            date_column = %self.columns.date,
            value_column = %self.columns.value,
            "Loading series"
        );

        let series = read_series_from_path(&self.path, &self.columns)
            .with_context(|| format!("Failed to load series from {}", self.path.display()))?;

        info!(
            observations = series.len(),
            start = %series.start_date(),
            end = %series.max_date(),
            "Series loaded"
        );

        Ok(series)
    }
}

/// 날짜 문자열 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}
