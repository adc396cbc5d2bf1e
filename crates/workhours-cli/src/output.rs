use serde_json::{json, Value};
use workhours_engine::{ParsedInterval, Report};

/// JSON view of one parsed range, with its display label.
pub fn interval_json(interval: &ParsedInterval) -> Value {
    json!({
        "start": interval.start.to_rfc3339(),
        "end": interval.end.to_rfc3339(),
        "time_label": interval.time_label(),
        "hours": interval.hours,
        "minutes": interval.minutes,
        "total_minutes": interval.total_minutes(),
        "wall_clock_minutes": interval.wall_clock_minutes,
        "dst_adjusted": interval.dst_adjusted,
    })
}

/// Plain-text table of a report.
pub fn render_text(report: &Report) -> String {
    let mut lines = vec![
        report.heading.clone(),
        report.period_title.clone(),
        format!("Timezone: {}", report.timezone),
        String::new(),
        format!(
            "{:<10}  {:<9}  {:<22}  {:>5}  {:>3}",
            "Date", "Day", "Time", "Hours", "Min"
        ),
    ];

    lines.extend(report.rows.iter().map(|row| {
        format!(
            "{:<10}  {:<9}  {:<22}  {:>5}  {:>3}{}",
            row.display_date,
            row.weekday,
            row.time_label,
            row.hours(),
            row.display_minutes(),
            if row.dst_adjusted() { " *" } else { "" }
        )
    }));

    let totals = &report.totals;
    lines.push(String::new());
    lines.push(format!(
        "{:<47}  {:>5}  {:>3}",
        "Subtotal", totals.subtotal_hours, totals.subtotal_minutes
    ));
    lines.push(format!(
        "{:<47}  {:>5}  {:>3}",
        "Total",
        totals.total_hours,
        totals.display_total_minutes()
    ));

    if report.dst_adjusted {
        lines.push(String::new());
        lines.push("* crosses a daylight-saving change; hours are real elapsed time".to_string());
    }
    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.extend(
            report
                .skipped
                .iter()
                .map(|skipped| format!("skipped row {}: {}", skipped.index + 1, skipped.reason)),
        );
    }

    lines.join("\n")
}
