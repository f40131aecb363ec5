//! 금액·수량 표시 형식. 통화는 언어 설정과 무관하게 폴란드 표기
//! (천 단위 공백, 소수점 없음, "zł" 접미)로 고정한다.

use crate::costing::QuantityUnit;

/// 금액을 "12 345 zł" 형태로 만든다. 소수점 없이 반올림한다.
pub fn currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{} zł", group_thousands(rounded.unsigned_abs()))
}

/// 큰 금액의 축약 표기. 백만 이상은 "1.2M PLN", 천 이상은 "123K PLN",
/// 그 외에는 일반 표기로 돌아간다.
pub fn currency_compact(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M PLN", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.0}K PLN", value / 1_000.0)
    } else {
        currency(value)
    }
}

/// 수량을 단위에 맞는 정밀도로 표기한다. 개수는 정수, 연속량은 소수 1자리.
pub fn quantity(value: f64, unit: QuantityUnit) -> String {
    match unit {
        QuantityUnit::Piece => format!("{value:.0}"),
        QuantityUnit::SquareMeter | QuantityUnit::LinearMeter => format!("{value:.1}"),
    }
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    let mut out = groups.pop().unwrap_or_default();
    // 최상위 그룹의 선행 0 제거
    out = out.trim_start_matches('0').to_string();
    if out.is_empty() {
        out = "0".to_string();
    }
    for group in groups.iter().rev() {
        out.push(' ');
        out.push_str(group);
    }
    out
}
