//! 설정 관리.
//!
//! 설정은 다음 순서로 병합됩니다 (뒤가 우선):
//! 1. 내장 기본값
//! 2. TOML 설정 파일 (기본 경로의 파일은 없으면 건너뜀, 명시한 파일은 필수)
//! 3. `PRICEFEED__` 접두사 환경 변수 (예: `PRICEFEED__ANALYSIS__FREQUENCY=M`)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PricefeedResult;
use crate::logging::{LogConfig, LogFormat};
use crate::table::ColumnSpec;
use crate::types::Frequency;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 환경 변수 접두사.
pub const ENV_PREFIX: &str = "PRICEFEED";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 기본값
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 계산 span 진입/종료 이벤트 기록 여부
    #[serde(default)]
    pub span_events: bool,
    /// 파일명/줄 번호 기록 여부
    #[serde(default)]
    pub file_line: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            span_events: false,
            file_line: false,
        }
    }
}

impl LoggingConfig {
    /// 로깅 초기화용 설정으로 변환합니다.
    ///
    /// 알 수 없는 형식은 기본 형식으로 대체합니다.
    pub fn to_log_config(&self) -> LogConfig {
        let format = self.format.parse().unwrap_or(LogFormat::Compact);
        LogConfig::new(self.level.clone())
            .with_format(format)
            .with_span_events(self.span_events)
            .with_file(self.file_line)
    }
}

/// 분석 기본값.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// 날짜 컬럼 이름
    pub date_column: String,
    /// 값 컬럼 이름
    pub value_column: String,
    /// 샘플링 빈도
    pub frequency: Frequency,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            value_column: "price_feed".to_string(),
            frequency: Frequency::Daily,
        }
    }
}

impl AnalysisConfig {
    /// CSV 컬럼 지정으로 변환합니다.
    pub fn column_spec(&self) -> ColumnSpec {
        ColumnSpec::new(self.date_column.clone(), self.value_column.clone())
    }
}

impl AppConfig {
    /// 지정한 설정 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 명시적으로 지정한 파일이므로 없으면 에러를 반환합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> PricefeedResult<Self> {
        Self::load_from(path.as_ref(), true)
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// 기본 설정 파일이 없으면 내장 기본값과 환경 변수만 사용합니다.
    pub fn load_default() -> PricefeedResult<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH), false)
    }

    fn load_from(path: &Path, required: bool) -> PricefeedResult<Self> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "compact")?
            .set_default("analysis.date_column", "date")?
            .set_default("analysis.value_column", "price_feed")?
            .set_default("analysis.frequency", "daily")?
            // 파일에서 로드
            .add_source(config::File::from(path).required(required))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
