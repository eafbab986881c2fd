//! Display string helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, appending an ellipsis when cut
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Group digits with commas (e.g. 4200 -> "4,200")
pub fn format_grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rupee amount, e.g. "₹1,800"
pub fn format_rupees(value: u32) -> String {
    format!("₹{}", format_grouped(value))
}

/// Temperature range, e.g. "21-32°C"
pub fn format_temp_range(low_c: i8, high_c: i8) -> String {
    format!("{}-{}°C", low_c, high_c)
}

/// Distance, e.g. "4.5 km"
pub fn format_distance_km(km: f64) -> String {
    format!("{:.1} km", km)
}

/// Lux reading, e.g. "1,234 lx"
pub fn format_lux(lux: f64) -> String {
    format!("{} lx", format_grouped(lux.round() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a longer name", 8), "a longe…");
        assert_eq!(truncate_with_ellipsis("anything", 0), "");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(1800), "₹1,800");
    }

    #[test]
    fn test_format_temp_range() {
        assert_eq!(format_temp_range(21, 32), "21-32°C");
        assert_eq!(format_temp_range(-2, 8), "-2-8°C");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance_km(4.5), "4.5 km");
        assert_eq!(format_distance_km(10.0), "10.0 km");
    }

    #[test]
    fn test_format_lux() {
        assert_eq!(format_lux(1234.4), "1,234 lx");
    }
}
