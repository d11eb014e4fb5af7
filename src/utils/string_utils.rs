/// Pure string processing utilities (terminal-agnostic)

/// Format an integer with comma thousands separators ("1,234,567")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Pick the singular form only for exactly one
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Pad a string to a specific width with a character, counting chars
pub fn pad_left(text: &str, total_length: usize, pad_char: char) -> String {
    let len = text.chars().count();
    if len >= total_length {
        text.to_string()
    } else {
        let padding: String = std::iter::repeat_n(pad_char, total_length - len).collect();
        format!("{}{}", padding, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(60_300), "60,300");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-12_345), "-12,345");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "day", "days"), "day");
        assert_eq!(pluralize(0, "day", "days"), "days");
        assert_eq!(pluralize(5, "day", "days"), "days");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("42", 5, ' '), "   42");
        assert_eq!(pad_left("1,005", 3, ' '), "1,005");
        assert_eq!(pad_left("", 2, '0'), "00");
    }
}
