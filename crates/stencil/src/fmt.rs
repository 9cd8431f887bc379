//! Textual rendering of values.

use crate::{Value, ValueError, ValueErrorKind};

/// Render the given value into `out`.
///
/// Fails with [ValueErrorKind::RenderUndefined] if the value, or any value
/// nested inside of it, is undefined. `out` might have been partially written
/// to when that happens.
pub(crate) fn render(value: &Value, out: &mut String) -> Result<(), ValueError> {
    match value {
        Value::Undefined => return Err(ValueError::from(ValueErrorKind::RenderUndefined)),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(integer) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(*integer));
        }
        Value::Float(float) => format_float(*float, out),
        Value::String(string) => out.push_str(string),
        Value::List(list) => {
            out.push('[');

            let mut it = list.iter().peekable();

            while let Some(value) = it.next() {
                render(value, out)?;

                if it.peek().is_some() {
                    out.push_str(", ");
                }
            }

            out.push(']');
        }
        Value::Dict(dict) => {
            out.push('{');

            let mut it = dict.sorted().peekable();

            while let Some((key, value)) = it.next() {
                out.push_str(key);
                out.push_str(": ");
                render(value, out)?;

                if it.peek().is_some() {
                    out.push_str(", ");
                }
            }

            out.push('}');
        }
    }

    Ok(())
}

/// Format a float using the shortest representation that round-trips, laid
/// out in general notation.
///
/// Exponent notation is used when the decimal exponent is less than -4 or at
/// least 6, so `1e6` is written as `1e+06` and `0.0001` stays as is.
pub(crate) fn format_float(float: f64, out: &mut String) {
    if float.is_nan() {
        out.push_str("NaN");
        return;
    }

    if float.is_infinite() {
        out.push_str(if float.is_sign_negative() { "-Inf" } else { "+Inf" });
        return;
    }

    if float.is_sign_negative() {
        out.push('-');
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, point) = decimal_digits(buffer.format_finite(float.abs()));

    if digits.is_empty() {
        out.push('0');
        return;
    }

    let exp = point - 1;

    if exp < -4 || exp >= 6 {
        out.push(char::from(digits[0]));

        if digits.len() > 1 {
            out.push('.');
            push_digits(out, &digits[1..]);
        }

        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });

        let exp = exp.unsigned_abs();

        if exp < 10 {
            out.push('0');
        }

        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(exp));
        return;
    }

    if point <= 0 {
        out.push_str("0.");

        for _ in point..0 {
            out.push('0');
        }

        push_digits(out, &digits);
        return;
    }

    let point = point as usize;

    if digits.len() <= point {
        push_digits(out, &digits);

        for _ in digits.len()..point {
            out.push('0');
        }
    } else {
        push_digits(out, &digits[..point]);
        out.push('.');
        push_digits(out, &digits[point..]);
    }
}

/// Decompose the output of ryu into its significant digits and the position
/// of the decimal point relative to the first digit, so that the value is
/// `0.DIGITS * 10^point`.
///
/// Leading and trailing zeros are stripped, zero produces no digits.
fn decimal_digits(formatted: &str) -> (Vec<u8>, i32) {
    let (mantissa, exponent) = match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (formatted, 0),
    };

    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point = None;

    for b in mantissa.bytes() {
        match b {
            b'.' => point = Some(digits.len() as i32),
            b'0'..=b'9' => digits.push(b),
            _ => {}
        }
    }

    let mut point = point.unwrap_or(digits.len() as i32) + exponent;

    let leading = digits.iter().take_while(|&&b| b == b'0').count();
    digits.drain(..leading);
    point -= leading as i32;

    while digits.last() == Some(&b'0') {
        digits.pop();
    }

    if digits.is_empty() {
        point = 0;
    }

    (digits, point)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&b| char::from(b)));
}
