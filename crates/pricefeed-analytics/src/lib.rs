//! 가격 피드 시계열 분석.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 구간별 변화율, 고점 대비 현재, 지정일 이후 변화 계산
//! - 52주 범위 및 전년 대비 통계
//! - 차트용 중앙값 기준 구간 분할
//!
//! 모든 계산은 불변 [`Series`](pricefeed_core::Series) 위의 순수 함수이며
//! 외부 상태를 변경하지 않습니다.

pub mod changes;
pub mod offsets;
pub mod segments;
pub mod stats;

pub use changes::{ChangeCalculator, ChangeReport, OffsetChange, PeakToCurrent, SinceDateChange};
pub use offsets::{Offset, DAILY_OFFSETS, MONTHLY_OFFSETS};
pub use segments::{median, median_segments, Band, MedianSegments, Segment};
pub use stats::{year_range_stats, YearOverYear, YearRangeStats};
