const BASE: u64 = 3;

/// Value of a single ternary digit at `position` (0 = least significant).
/// Digits above 2 are worth nothing.
pub fn decode_ternary_digit(digit: u32, position: u32) -> u64 {
    if digit > 2 {
        return 0;
    }
    BASE.saturating_pow(position).saturating_mul(u64::from(digit))
}

/// Decimal value of a ternary string such as `"102012"`.
///
/// Each character is judged on its own: anything other than `0`, `1` or `2`
/// contributes 0 at its position while the rest of the string still counts.
pub fn decode_ternary(ternary: &str) -> u64 {
    let length = ternary.chars().count();
    ternary
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            let position = u32::try_from(length - 1 - index).unwrap_or(u32::MAX);
            match symbol.to_digit(10) {
                Some(digit) => decode_ternary_digit(digit, position),
                None => 0,
            }
        })
        .fold(0u64, u64::saturating_add)
}
