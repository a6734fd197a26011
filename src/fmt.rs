/// Format a float as a dollar amount with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Row amount as shown in the transaction list: two decimals, sign kept.
pub fn signed_amount(val: f64) -> String {
    let formatted = format!("{:.2}", val.abs());
    if val < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(-500.00), "-$500.00");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(42.10), "$42.10");
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(-15.67), "-15.67");
        assert_eq!(signed_amount(32.4), "32.40");
        assert_eq!(signed_amount(0.0), "0.00");
    }
}
