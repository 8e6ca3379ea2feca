pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let digits = value
        .unsigned_abs()
        .to_string()
        .chars()
        .rev()
        .collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_won(amount: i64) -> String {
    format!("{} KRW", format_with_commas(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(12500), "12,500");
        assert_eq!(format_with_commas(1234567), "1,234,567");
        assert_eq!(format_with_commas(-91000), "-91,000");
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(format_with_commas(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(format_with_commas(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn amounts_carry_currency_suffix() {
        assert_eq!(format_won(12500), "12,500 KRW");
    }
}
