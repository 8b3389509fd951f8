use crate::models::{BaselineStat, PlatformStat};

/// Reads the leading number of a free-form input (`"12k"` is 12); anything
/// without a numeric prefix counts as 0.
pub fn parse_count(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// One-decimal rendering of the exact binary value. Exact ties (values that
/// are an odd number of quarters) go away from zero.
pub fn format_percent(value: f64) -> String {
    let value = value + 0.0;
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0).abs().ceil().copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Percentage change from `baseline` to `current` at one decimal, as shown
/// in the growth field. A zero baseline yields 0.
pub fn growth(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    growth_label(current, baseline).parse().unwrap_or(0.0)
}

pub fn growth_label(current: f64, baseline: f64) -> String {
    if baseline == 0.0 {
        return "0".to_string();
    }
    format_percent((current - baseline) / baseline * 100.0)
}

pub fn combined_growth(stat: &PlatformStat, baseline: &BaselineStat) -> String {
    let followers = growth(parse_count(&stat.followers), baseline.followers);
    let views = growth(parse_count(&stat.views), baseline.views);
    format_percent((followers + views) / 2.0)
}
