//! 중앙값 구간 분할 명령어.
//!
//! 외부 차트 렌더러가 바로 사용할 수 있도록 구간 데이터를 JSON으로 출력합니다.

use anyhow::Result;
use pricefeed_analytics::{median_segments, MedianSegments};
use tracing::info;

use super::output::{format_json, write_output};
use super::SeriesInput;

/// 구간 분할 명령 설정.
#[derive(Debug, Clone)]
pub struct SegmentsConfig {
    pub input: SeriesInput,
    pub output: Option<String>,
}

/// 입력 시계열을 중앙값 기준으로 나누고 출력합니다.
pub fn run_segments(config: SegmentsConfig) -> Result<MedianSegments> {
    let series = config.input.load()?;
    let result = median_segments(&series);

    info!(
        median = %result.median,
        segments = result.segments.len(),
        "Split series into median bands"
    );

    write_output(&format_json(&result)?, config.output.as_deref())?;

    Ok(result)
}
