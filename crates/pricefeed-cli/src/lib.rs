//! CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - CSV 가격 피드의 구간별 변화율 계산
//! - 52주 범위 통계
//! - 차트용 중앙값 구간 분할
//! - 시장 이름/티커 변환

pub mod commands;

pub use commands::*;
