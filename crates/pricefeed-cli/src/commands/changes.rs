//! 변화율 계산 명령어.
//!
//! # 사용 예시
//!
//! ```bash
//! # 일별 가격 피드의 구간별 변화율 (JSON)
//! pricefeed changes -i data/nyc_price_feed.csv
//!
//! # 월별 지수, 2024-03 이후 변화 포함, 테이블 출력
//! pricefeed changes -i data/case_shiller.csv --value-column index -q M --since 2024-03-15 --format table
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use pricefeed_analytics::{ChangeCalculator, ChangeReport};
use tracing::info;

use super::output::{format_json, write_output, OutputFormat};
use super::SeriesInput;

/// 변화율 명령 설정.
#[derive(Debug, Clone)]
pub struct ChangesConfig {
    pub input: SeriesInput,
    pub since: Option<NaiveDate>,
    pub format: OutputFormat,
    pub output: Option<String>,
}

/// 입력 시계열의 변화율을 계산하고 출력합니다.
pub fn run_changes(config: ChangesConfig) -> Result<ChangeReport> {
    let series = config.input.load()?;
    let calculator = ChangeCalculator::new(series, config.input.frequency);
    let report = calculator.compute(config.since);

    info!(
        offsets = report.changes.len(),
        since = report.change_since_date.is_some(),
        "Computed changes"
    );

    let content = match config.format {
        OutputFormat::Table => format_changes_table(&report),
        OutputFormat::Json => format_json(&report)?,
    };
    write_output(&content, config.output.as_deref())?;

    Ok(report)
}

/// 테이블 형식 출력.
pub fn format_changes_table(report: &ChangeReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Current: {} @ {}\n\n",
        report.current.value, report.current.date
    ));

    // 헤더
    output.push_str(&format!(
        "{:<18} {:>18} {:<12} {:>16}\n",
        "PERIOD", "CHANGE", "BASE_DATE", "BASE_VALUE"
    ));
    output.push_str(&"-".repeat(67));
    output.push('\n');

    for change in &report.changes {
        output.push_str(&format!(
            "{:<18} {:>18} {:<12} {:>16}\n",
            change.offset.key(),
            change.percent_change.to_string(),
            change.base.date.to_string(),
            change.base.value.to_string()
        ));
    }

    let peak = &report.peak_to_current;
    output.push_str(&format!(
        "{:<18} {:>18} {:<12} {:>16}\n",
        "peak_to_current",
        peak.percent_change.to_string(),
        peak.peak_date.to_string(),
        peak.peak_value.to_string()
    ));

    if let Some(since) = &report.change_since_date {
        output.push_str(&format!(
            "{:<18} {:>18} {:<12} {:>16}\n",
            "change_since_date",
            since.percent_change.to_string(),
            since.change_date.to_string(),
            since.change_value.to_string()
        ));
    }

    output.push('\n');
    output.push_str(&format!("Series max date: {}", report.series_max_date));

    output
}
