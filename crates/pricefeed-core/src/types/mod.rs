//! 공통 타입 정의.

pub mod frequency;

pub use frequency::*;
