//! 시장 이름 변환 명령어.

use anyhow::Result;
use pricefeed_core::{case_shiller_city, display_name, market_ticker};

/// 이름 변환 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// 짧은 티커 (예: NYC)
    Ticker,
    /// 표시용 이름 (예: Brooklyn, NY)
    Display,
    /// Case-Shiller 대도시권 → 도시 이름
    CaseShiller,
}

impl NameStyle {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ticker" => Ok(Self::Ticker),
            "display" => Ok(Self::Display),
            "case-shiller" | "case_shiller" | "cs10" => Ok(Self::CaseShiller),
            _ => Err(anyhow::anyhow!(
                "Invalid style: {}. Use: ticker, display, case-shiller",
                s
            )),
        }
    }
}

/// 이름을 주어진 방식으로 변환합니다.
pub fn format_name(name: &str, style: NameStyle) -> String {
    match style {
        NameStyle::Ticker => market_ticker(name),
        NameStyle::Display => display_name(name),
        NameStyle::CaseShiller => case_shiller_city(name),
    }
}
