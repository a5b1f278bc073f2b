//! Russian cardinal-number agreement for «круг»

/// Pick the grammatical form of «круг» for a count.
///
/// The teens check (11–14 of the last two digits) must run before the
/// last-digit rules: 11 takes "кругов", not the singular that digit 1
/// would otherwise select.
pub fn plural_circles(n: u64) -> &'static str {
    let last_two = n % 100;
    let last_one = n % 10;

    if (11..=14).contains(&last_two) {
        return "кругов";
    }

    match last_one {
        1 => "круг",
        2..=4 => "круга",
        _ => "кругов",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_forms() {
        let cases = [
            (0, "кругов"),
            (1, "круг"),
            (2, "круга"),
            (4, "круга"),
            (5, "кругов"),
            (11, "кругов"),
            (12, "кругов"),
            (14, "кругов"),
            (21, "круг"),
            (22, "круга"),
            (25, "кругов"),
            (101, "круг"),
            (111, "кругов"),
        ];

        for (n, expected) in cases {
            assert_eq!(plural_circles(n), expected, "wrong form for {n}");
        }
    }

    #[test]
    fn test_teens_override_last_digit() {
        // 111 and 112 end in 1 and 2 but sit in the teens of their hundred
        assert_eq!(plural_circles(111), "кругов");
        assert_eq!(plural_circles(112), "кругов");
        assert_eq!(plural_circles(211), "кругов");
    }
}
