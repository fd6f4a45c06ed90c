/// Format a finite f64 as plain decimal text:
/// - shortest round-trip digits (via ryu)
/// - no exponent notation
/// - no trailing fractional zeros (the decimal point is dropped when none remain)
/// - -0 normalized to 0
pub(crate) fn format_decimal_f64(value: f64) -> String {
    debug_assert!(value.is_finite(), "format_decimal_f64 called with non-finite value");
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);

    let (mantissa, exp) = match raw.find(['e', 'E']) {
        Some(pos) => (&raw[..pos], raw[pos + 1..].parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // Position of the decimal point within the digit string once the
    // exponent is applied.
    let point = int_part.len() as i32 + exp;

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let kept = digits.trim_end_matches('0').len().max(1);
    digits.truncate(kept);

    if digits == "0" {
        return String::from("0");
    }

    let mut out = String::from(sign);
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..(-point) {
            out.push('0');
        }
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        for _ in 0..(point as usize - digits.len()) {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    out
}
