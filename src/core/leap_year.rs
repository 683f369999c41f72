const FOUR: u32 = 4;
const ONE_HUNDRED: u32 = 100;
const FOUR_HUNDRED: u32 = FOUR * ONE_HUNDRED;

fn is_divisible(number: u32, divider: u32) -> bool {
    number % divider == 0
}

/// Gregorian rule: every 4th year, except centuries not divisible by 400.
pub fn is_leap_year(year: u32) -> bool {
    if is_divisible(year, FOUR_HUNDRED) {
        return true;
    }
    if is_divisible(year, ONE_HUNDRED) {
        return false;
    }
    is_divisible(year, FOUR)
}
