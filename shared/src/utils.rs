// Display formatting shared across the trading desk front end.

/// US-style rendering for the prices, percentages and timestamps the UI shows.
pub mod usd_format {
    use chrono::{DateTime, Utc};

    /// Formats a dollar amount with two decimals and comma thousand
    /// separators. The sign sits between the dollar sign and the digits:
    /// `-1234.5` renders as `"$-1,234.50"`.
    pub fn format_currency(value: f64) -> String {
        format!("${}", group_thousands(&format!("{value:.2}")))
    }

    /// Formats a percentage with an explicit sign for non-negative values:
    /// `2.5` renders as `"+2.50%"`.
    pub fn format_percent(value: f64) -> String {
        let sign = if value >= 0.0 { "+" } else { "" };
        format!("{sign}{value:.2}%")
    }

    /// Renders a timestamp the way the dashboard shows it, e.g.
    /// `"Dec 30, 2024, 06:20 PM"`. Always en-US month names and a 12-hour
    /// clock; this is a single documented rendering, not host-locale output.
    pub fn format_timestamp(ts: DateTime<Utc>) -> String {
        ts.format("%b %-d, %Y, %I:%M %p").to_string()
    }

    // Inserts commas into the integer digits of an already fixed-point
    // rendered number such as "-1234.56".
    fn group_thousands(fixed: &str) -> String {
        let (sign, rest) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (rest, None),
        };

        let digits = int_part.len();
        let mut grouped = String::with_capacity(fixed.len() + digits / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        match frac_part {
            Some(frac) => format!("{sign}{grouped}.{frac}"),
            None => format!("{sign}{grouped}"),
        }
    }

}
