//! 52주 범위 통계 명령어.

use anyhow::Result;
use pricefeed_analytics::{year_range_stats, YearRangeStats};
use pricefeed_core::ChangeValue;
use tracing::{info, warn};

use super::output::{format_json, write_output, OutputFormat};
use super::SeriesInput;

/// 통계 명령 설정.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub input: SeriesInput,
    pub format: OutputFormat,
    pub output: Option<String>,
}

/// 입력 시계열의 52주 통계를 계산하고 출력합니다.
pub fn run_stats(config: StatsConfig) -> Result<YearRangeStats> {
    let series = config.input.load()?;
    let stats = year_range_stats(&series);

    if stats.year_over_year.is_none() {
        warn!(
            window_start = %stats.window_start,
            "Series does not reach back 52 weeks; year-over-year change omitted"
        );
    }
    info!(high = %stats.high_52w, low = %stats.low_52w, "Computed 52-week stats");

    let content = match config.format {
        OutputFormat::Table => format_stats_table(&stats),
        OutputFormat::Json => format_json(&stats)?,
    };
    write_output(&content, config.output.as_deref())?;

    Ok(stats)
}

/// 테이블 형식 출력.
pub fn format_stats_table(stats: &YearRangeStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<16} {}\n", "Last", stats.last_value));
    output.push_str(&format!("{:<16} {}\n", "Last date", stats.last_date));
    output.push_str(&format!("{:<16} {}\n", "52W high", stats.high_52w));
    output.push_str(&format!("{:<16} {}\n", "52W low", stats.low_52w));

    match &stats.year_over_year {
        Some(yoy) => {
            let delta = match yoy.change_delta {
                ChangeValue::Defined(delta) => format!("{}{}", yoy.sign(), delta.abs()),
                undefined => undefined.to_string(),
            };
            output.push_str(&format!(
                "{:<16} {} ({})\n",
                "YoY change", delta, yoy.change_pct
            ));
            output.push_str(&format!("{:<16} {}", "YoY base date", yoy.base_date));
        }
        None => output.push_str(&format!("{:<16} -", "YoY change")),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pricefeed_core::{Observation, Series};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_stats_table() {
        let series = Series::new(vec![
            Observation::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), dec!(150)),
            Observation::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), dec!(120)),
        ])
        .unwrap();
        let table = format_stats_table(&year_range_stats(&series));

        assert!(table.contains("52W high         120"));
        assert!(table.contains("YoY change       -30 (-0.2)"));
    }

    #[test]
    fn test_format_stats_table_overflow() {
        let series = Series::new(vec![
            Observation::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), Decimal::MIN),
            Observation::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), Decimal::MAX),
        ])
        .unwrap();
        let table = format_stats_table(&year_range_stats(&series));

        assert!(table.contains("YoY change       overflow (overflow)"));
    }

    #[test]
    fn test_format_stats_table_without_yoy() {
        let series = Series::new(vec![Observation::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            dec!(120),
        )])
        .unwrap();
        let table = format_stats_table(&year_range_stats(&series));

        assert!(table.ends_with("YoY change       -"));
    }
}
