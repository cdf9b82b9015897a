//! Number and date formatting for the en-IN locale

use chrono::NaiveDate;

/// Group the digits of an integer the Indian way: the last three digits,
/// then pairs (`432450` → `4,32,450`).
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a count (`1240` → `1,240`)
pub fn format_count(n: u64) -> String {
    group_digits(n)
}

/// Format a monetary amount with its currency symbol
///
/// Whole amounts are printed without decimals; fractional amounts keep two.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let amount = amount.abs();
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    if cents == 0 {
        format!("{sign}{symbol}{}", group_digits(whole))
    } else {
        format!("{sign}{symbol}{}.{:02}", group_digits(whole), cents)
    }
}

/// Format an ISO date (`2024-01-15`) as a short en-IN date (`15/1/2024`)
///
/// Unparseable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1240), "1,240");
        assert_eq!(group_digits(15750), "15,750");
        assert_eq!(group_digits(432450), "4,32,450");
        assert_eq!(group_digits(12345678), "1,23,45,678");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("₹", 22300.0), "₹22,300");
        assert_eq!(format_amount("₹", 121400.0), "₹1,21,400");
        assert_eq!(format_amount("₹", 99.5), "₹99.50");
        assert_eq!(format_amount("$", -1500.0), "-$1,500");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "15/1/2024");
        assert_eq!(format_date("2024-02-01"), "1/2/2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
