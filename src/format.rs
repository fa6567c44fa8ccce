//! Credit formatting for presentation collaborators.

/// How large numbers are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotationStyle {
    /// 1.5K, 2.3M, 4.7B
    #[default]
    Abbreviated,
    /// 1,500 / 2,300,000
    Full,
}

/// Format a credit amount in the given style.
pub fn format_credits(n: f64, style: NotationStyle) -> String {
    match style {
        NotationStyle::Abbreviated => format_abbreviated(n),
        NotationStyle::Full => format_full(n),
    }
}

/// Suffix notation with one decimal: 1.5K, 2.3M, 4.7B, 1.2T.
fn format_abbreviated(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_abbreviated(-n));
    }
    const SUFFIXES: [(f64, &str); 4] = [
        (1e12, "T"),
        (1e9, "B"),
        (1e6, "M"),
        (1e3, "K"),
    ];
    for (scale, suffix) in SUFFIXES {
        if n >= scale {
            let value = n / scale;
            return if value >= 100.0 {
                format!("{:.0}{}", value, suffix)
            } else {
                format!("{:.1}{}", value, suffix)
            };
        }
    }
    format!("{:.0}", n.floor())
}

/// Comma-grouped integer notation (e.g. 1234567 → "1,234,567").
fn format_full(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_full(-n));
    }
    let int_part = n.floor() as u64;
    let s = int_part.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_no_panic(n in -1e15f64..1e15) {
            let _ = format_credits(n, NotationStyle::Abbreviated);
            let _ = format_credits(n, NotationStyle::Full);
        }

        #[test]
        fn prop_nonneg_no_leading_minus(n in 0.0f64..1e15) {
            prop_assert!(!format_credits(n, NotationStyle::Abbreviated).starts_with('-'));
            prop_assert!(!format_credits(n, NotationStyle::Full).starts_with('-'));
        }

        #[test]
        fn prop_negative_has_minus(n in -1e15f64..-1.0) {
            prop_assert!(format_credits(n, NotationStyle::Abbreviated).starts_with('-'));
            prop_assert!(format_credits(n, NotationStyle::Full).starts_with('-'));
        }

        #[test]
        fn prop_full_commas_strip_to_integer(int_val in 0u64..1_000_000_000) {
            let s = format_credits(int_val as f64, NotationStyle::Full);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, int_val.to_string());
        }
    }
}
