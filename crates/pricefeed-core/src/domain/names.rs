//! 시장 이름 및 티커 포맷팅.
//!
//! 치환 테이블은 순서대로 적용됩니다. 앞선 치환 결과가 뒤 치환의 입력이
//! 되므로 순서를 바꾸면 결과가 달라집니다 (예: "Miami Beach"는 "Miami"보다
//! 먼저 치환되어야 함).

/// 티커 생성용 치환 테이블.
const TICKER_REPLACEMENTS: &[(&str, &str)] = &[
    ("City", ""),
    ("New York", "NYC"),
    ("Los Angeles", "LAX"),
    ("Atlanta", "ATL"),
    ("Las Vegas", "LAS"),
    ("San Diego", "SAN"),
    ("Boston", "BOS"),
    ("Miami Beach", "MIABCH"),
    ("San Francisco", "SFO"),
    ("Denver", "DEN"),
    ("Chicago", "CHI"),
    ("Washington, DC", "DC"),
    ("Washington", "DC"),
    ("Austin", "ATX"),
    ("United States Of America", "USA"),
    ("Kings County", "BRKLYN"),
    ("Miami", "MIA"),
];

/// 표시용 이름 치환 테이블.
const DISPLAY_REPLACEMENTS: &[(&str, &str)] = &[
    ("United States Of America", "USA"),
    ("Kings County", "Brooklyn, NY"),
    ("Washington City", "Washington, DC"),
];

/// Case-Shiller 10 대도시권 이름 → 도시 이름.
const CASE_SHILLER_REPLACEMENTS: &[(&str, &str)] = &[
    ("Denver-Aurora-Lakewood, Co", "Denver"),
    ("Boston-Cambridge-Newton, Ma-Nh", "Boston"),
    ("Las Vegas-Henderson-Paradise, Nv", "Las Vegas"),
    ("San Francisco-Oakland-Berkeley, Ca", "San Francisco"),
    ("Chicago-Naperville-Elgin, Il-In-Wi", "Chicago"),
    ("Los Angeles-Long Beach-Anaheim, Ca", "Los Angeles"),
    ("San Diego-Chula Vista-Carlsbad, Ca", "San Diego"),
    ("Washington-Arlington-Alexandria, Dc-Va-Md-Wv", "Washington, DC"),
    ("Miami-Fort Lauderdale-Pompano Beach, Fl", "Miami"),
    ("New York-Newark-Jersey City, Ny-Nj-Pa", "New York"),
];

fn apply_replacements(name: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// 시장 이름을 짧은 티커로 변환합니다.
///
/// ```
/// use pricefeed_core::domain::names::market_ticker;
///
/// assert_eq!(market_ticker("New York City"), "NYC");
/// assert_eq!(market_ticker("Miami Beach City"), "MIABCH");
/// ```
pub fn market_ticker(name: &str) -> String {
    apply_replacements(name, TICKER_REPLACEMENTS).trim().to_string()
}

/// 시장 이름을 차트/리포트 표시용으로 변환합니다.
pub fn display_name(name: &str) -> String {
    apply_replacements(name, DISPLAY_REPLACEMENTS)
}

/// Case-Shiller 10 대도시권 이름을 도시 이름으로 줄입니다.
pub fn case_shiller_city(name: &str) -> String {
    apply_replacements(name, CASE_SHILLER_REPLACEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_ticker() {
        assert_eq!(market_ticker("Los Angeles City"), "LAX");
        assert_eq!(market_ticker("Washington City"), "DC");
        assert_eq!(market_ticker("Washington, DC"), "DC");
        assert_eq!(market_ticker("Kings County"), "BRKLYN");
        assert_eq!(market_ticker("United States Of America"), "USA");
        assert_eq!(market_ticker("Miami City"), "MIA");
        assert_eq!(market_ticker("Miami Beach City"), "MIABCH");
        // 테이블에 없는 이름은 그대로
        assert_eq!(market_ticker("Seattle"), "Seattle");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Kings County"), "Brooklyn, NY");
        assert_eq!(display_name("Washington City"), "Washington, DC");
        assert_eq!(display_name("United States Of America"), "USA");
        assert_eq!(display_name("Austin City"), "Austin City");
    }

    #[test]
    fn test_case_shiller_city() {
        assert_eq!(
            case_shiller_city("New York-Newark-Jersey City, Ny-Nj-Pa"),
            "New York"
        );
        assert_eq!(
            case_shiller_city("Washington-Arlington-Alexandria, Dc-Va-Md-Wv"),
            "Washington, DC"
        );
        assert_eq!(case_shiller_city("Denver"), "Denver");
    }
}
