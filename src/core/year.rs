//! Year labels, ranges and era anchoring.
//!
//! Years are plain signed integers: negative values are BCE, positive values
//! are CE and `0` is rendered as a bare `"0"`.

const BCE: &str = "BCE";
const CE: &str = "CE";

/// Formats a single year as `"{abs} BCE"`, `"{abs} CE"` or `"0"`.
#[must_use]
pub fn format_year_label(year: i32) -> String {
    if year == 0 {
        return "0".to_owned();
    }

    let suffix = if year < 0 { BCE } else { CE };
    format!("{} {suffix}", year.unsigned_abs())
}

/// Formats an inclusive year range.
///
/// Ranges inside one era use the compact `"10–1 BCE"` form. Ranges that
/// cross from BCE into CE label each endpoint: `"5 BCE – 5 CE"`.
#[must_use]
pub fn format_year_range(start: i32, end: i32) -> String {
    if start == end {
        return format_year_label(start);
    }

    let same_era = (start <= 0 && end <= 0) || (start >= 0 && end >= 0) || end == 0;
    if same_era {
        let suffix = if end < 0 || (end == 0 && start < 0) {
            BCE
        } else {
            CE
        };
        return format!(
            "{}\u{2013}{} {suffix}",
            start.unsigned_abs(),
            end.unsigned_abs()
        );
    }

    format!(
        "{} \u{2013} {}",
        format_year_label(start),
        format_year_label(end)
    )
}

/// Two-sided clamp that never panics.
///
/// Unlike `i32::clamp`, an inverted `min > max` pair resolves to `max`.
#[must_use]
pub fn clamp_year(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Era steps below one collapse to one.
#[must_use]
pub fn normalize_era_step(step: i32) -> i32 {
    step.max(1)
}

/// Floor-aligned era anchor for `year`.
///
/// Anchoring rounds toward negative infinity, so `era_anchor(-1, 25) == -25`.
/// A non-positive step returns `year` unchanged.
#[must_use]
pub fn era_anchor(year: i32, step: i32) -> i32 {
    if step <= 0 {
        return year;
    }

    let step = normalize_era_step(step);
    year.div_euclid(step) * step
}

/// Label for the inclusive window `[anchor, anchor + step - 1]`.
#[must_use]
pub fn era_window_label(anchor: i32, step: i32) -> String {
    let window_end = anchor.saturating_add(normalize_era_step(step) - 1);
    format_year_range(anchor, window_end)
}

/// Whether `year` falls on a major tick for the given era step.
#[must_use]
pub fn is_major_year(year: i32, step: i32) -> bool {
    year.rem_euclid(normalize_era_step(step)) == 0
}
