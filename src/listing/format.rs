//! Display helpers: grouped numbers and filter option lists.

use std::collections::BTreeSet;

use super::sort::locale_cmp;

/// Group the digits of `n` in threes, e.g. `12345` → `"12,345"` with `","`.
pub fn format_thousands(n: u64, separator: &str) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Distinct values in the same order as the name column, for seeding a
/// filter control.
pub fn distinct_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options: Vec<String> = values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect();
    options.sort_by(|a, b| locale_cmp(a, b));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_threes() {
        assert_eq!(format_thousands(0, ","), "0");
        assert_eq!(format_thousands(999, ","), "999");
        assert_eq!(format_thousands(1000, ","), "1,000");
        assert_eq!(format_thousands(12345, ","), "12,345");
        assert_eq!(format_thousands(1_234_567, ","), "1,234,567");
    }

    #[test]
    fn custom_separator() {
        assert_eq!(format_thousands(1_234_567, "."), "1.234.567");
        assert_eq!(format_thousands(1_234_567, "\u{202f}"), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let values = ["Canada", "Australia", "Canada", "Brazil"];
        assert_eq!(
            distinct_sorted(values.iter().copied()),
            ["Australia", "Brazil", "Canada"]
        );
        assert!(distinct_sorted(std::iter::empty::<&str>()).is_empty());
    }

    #[test]
    fn accented_options_file_under_their_base_letter() {
        let values = ["Österreich", "Peru", "Norway", "Éire"];
        assert_eq!(
            distinct_sorted(values.iter().copied()),
            ["Éire", "Norway", "Österreich", "Peru"]
        );
    }
}
