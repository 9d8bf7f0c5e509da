//! 가격 피드 분석의 도메인 모델.
//!
//! 이 모듈은 분석 전반에서 사용되는 핵심 타입과 계산을 포함합니다:
//! - `series`: 관측치와 정렬된 시계열
//! - `change`: 반올림된 변화율과 필드 단위 계산 불가 표시
//! - `names`: 시장 이름/티커 포맷팅

pub mod change;
pub mod names;
pub mod series;

pub use change::{percent_change, round_change, ChangeValue, UndefinedReason};
pub use names::{case_shiller_city, display_name, market_ticker};
pub use series::{Observation, Series};
