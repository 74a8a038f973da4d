use rust_decimal::Decimal;

/// Formats a monetary value with Brazilian separators: `.` for thousands
/// grouping, `,` for the decimal mark, always two decimal places.
/// `1234` renders as `1.234,00`.
pub fn format_amount_pt_br(value: Decimal) -> String {
    let negative = value.is_sign_negative();
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rendered.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{},{}", sign, int_grouped, frac_part)
}
