//! Shared formatting helpers for the rendered pages.

/// Escape text for interpolation into HTML body or attribute context.
pub(crate) fn html_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Comma-grouped integer, e.g. `59000` renders as `59,000`.
pub(crate) fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Dollar amount with comma grouping. Whole amounts drop the cents.
pub(crate) fn usd(amount: f64) -> String {
    let total_cents = (amount * 100.0).round() as i64;
    let whole = total_cents / 100;
    let cents = (total_cents % 100).abs();
    if cents == 0 {
        format!("${}", thousands(whole))
    } else {
        format!("${}.{:02}", thousands(whole), cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Bud & Co's"</b>"#),
            "&lt;b&gt;&quot;Bud &amp; Co&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(950), "950");
        assert_eq!(thousands(2_950), "2,950");
        assert_eq!(thousands(59_000), "59,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(-59_000), "-59,000");
    }

    #[test]
    fn test_usd_drops_whole_cents() {
        assert_eq!(usd(59_000.0), "$59,000");
        assert_eq!(usd(2_950.0), "$2,950");
        assert_eq!(usd(0.0), "$0");
    }

    #[test]
    fn test_usd_keeps_fractional_cents() {
        assert_eq!(usd(120.41), "$120.41");
        assert_eq!(usd(240.82), "$240.82");
        assert_eq!(usd(722.46), "$722.46");
        assert_eq!(usd(1_204.1), "$1,204.10");
    }
}
