//! # Pricefeed Core
//!
//! 부동산 시장 가격 피드 분석의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 관측치 및 시계열 구조체
//! - 샘플링 빈도 정의
//! - 시장 이름/티커 포맷팅
//! - CSV 테이블 로딩
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod table;
pub mod types;

pub use crate::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use table::{read_series, read_series_from_path, ColumnSpec};
pub use types::*;
