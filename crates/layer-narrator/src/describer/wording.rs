//! Small English wording helpers shared by the formatters.

const ORDINAL_WORDS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Ordinal for a 1-based position: "first" … "tenth", then "11th", "22nd", …
pub fn ordinal(position: usize) -> String {
    if let Some(word) = position
        .checked_sub(1)
        .and_then(|index| ORDINAL_WORDS.get(index))
    {
        return (*word).to_string();
    }

    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", position, suffix)
}

/// Pick the singular form only for exactly one item.
pub fn pluralize<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// `part` as a whole-number percentage of `whole`, rounding halves up.
///
/// Returns 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let ratio = part as f64 * 100.0 / whole as f64;
    (ratio + 0.5).floor() as u64
}

/// Render a number the way a script runtime prints it: `1`, `-10`, `2.5`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // -0.0 prints as 0
        return format!("{}", value as i64);
    }
    format!("{}", value)
}

/// `'a', 'b', 'c'`
pub fn single_quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"a"`, `"a" and "b"`, `"a", "b" and "c"`
pub fn double_quoted_enumeration<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("\"{}\"", item))
        .collect();

    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
