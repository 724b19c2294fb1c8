//! HTML pages: the search form, the result and the error page

use crate::service::RainReport;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// The static search form
#[must_use]
pub fn index_page() -> &'static str {
    INDEX_HTML
}

/// Result page for a completed rain check
#[must_use]
pub fn result_page(report: &RainReport) -> String {
    let forecast = &report.forecast;
    let (verdict, class) = if report.will_rain {
        ("Yes", "rain")
    } else {
        ("No", "dry")
    };

    let mut body = format!(
        "<h1>Will it rain tomorrow in {place}?</h1>\n\
         <p class=\"verdict {class}\">{verdict}</p>\n\
         <p>Forecast for {date} (you searched for \u{201c}{query}\u{201d}).</p>\n\
         <dl>\n",
        place = escape_html(&report.place.display_name),
        date = forecast.date.format("%Y-%m-%d"),
        query = escape_html(&report.query),
    );

    if let Some(conditions) = forecast.conditions() {
        body.push_str(&format!(
            "<dt>Conditions</dt><dd>{}</dd>\n",
            escape_html(conditions)
        ));
    }
    let rows = [
        (
            "Chance of precipitation",
            reading(forecast.precipitation_probability_max, "%"),
        ),
        ("Rain", reading(forecast.rain_sum, " mm")),
        ("Precipitation hours", reading(forecast.precipitation_hours, " h")),
        ("High", reading(forecast.temperature_max, "\u{b0}C")),
        ("Low", reading(forecast.temperature_min, "\u{b0}C")),
        ("Coordinates", report.place.format_coordinates()),
    ];
    for (label, value) in rows {
        body.push_str(&format!("<dt>{label}</dt><dd>{value}</dd>\n"));
    }
    body.push_str("</dl>\n<p><a href=\"/\">Check another place</a></p>");

    layout("Will it rain tomorrow?", "result", &body)
}

/// Error page with a title and a user-facing message
#[must_use]
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Try again</a></p>",
        escape_html(title),
        escape_html(message)
    );
    layout(title, "error", &body)
}

fn layout(title: &str, class: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n\
         <body>\n\
         <main class=\"card {class}\">\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

/// Absent readings show as "n/a"
fn reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value}{unit}"),
        None => "n/a".to_string(),
    }
}

/// Escape text for use in HTML element content and quoted attributes
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
