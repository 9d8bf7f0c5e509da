//! 가격 피드 분석의 에러 타입.
//!
//! 이 모듈은 워크스페이스 전반에서 사용되는 에러 타입을 정의합니다.
//! 필드 단위로 계산이 정의되지 않는 경우(0으로 나눔 등)는 에러가 아니라
//! `ChangeValue::Undefined`로 표현되며, 여기에는 포함되지 않습니다.

use thiserror::Error;

/// 핵심 가격 피드 에러.
#[derive(Debug, Error)]
pub enum PricefeedError {
    /// 지원하지 않는 샘플링 빈도
    #[error("Unsupported frequency: {0}. Use 'D' for daily or 'M' for monthly")]
    InvalidFrequency(String),

    /// 관측치가 하나도 없는 시계열
    #[error("Series contains no observations")]
    EmptySeries,

    /// 입력 테이블에 필요한 컬럼이 없음
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// 파싱 에러 (날짜, 값)
    #[error("Parse error: {0}")]
    Parse(String),

    /// CSV 읽기 에러
    #[error("CSV error: {0}")]
    Csv(String),

    /// 파일 입출력 에러
    #[error("I/O error: {0}")]
    Io(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 가격 피드 작업을 위한 Result 타입.
pub type PricefeedResult<T> = Result<T, PricefeedError>;

impl PricefeedError {
    /// 호출자가 제공한 입력 데이터가 원인인 에러인지 확인합니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PricefeedError::EmptySeries
                | PricefeedError::MissingColumn(_)
                | PricefeedError::Parse(_)
                | PricefeedError::Csv(_)
        )
    }
}

impl From<csv::Error> for PricefeedError {
    fn from(err: csv::Error) -> Self {
        PricefeedError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for PricefeedError {
    fn from(err: std::io::Error) -> Self {
        PricefeedError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for PricefeedError {
    fn from(err: config::ConfigError) -> Self {
        PricefeedError::Config(err.to_string())
    }
}
