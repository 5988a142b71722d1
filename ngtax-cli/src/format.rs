use rust_decimal::Decimal;

/// Formats an amount for display with the naira sign and comma thousands
/// separators, e.g. `₦1,234,567`. Trailing fractional zeros are dropped.
pub fn naira(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("₦{sign}{grouped}.{frac}"),
        None => format!("₦{sign}{grouped}"),
    }
}

/// Formats a rate as a percentage, e.g. `10.72%`.
pub fn percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}
