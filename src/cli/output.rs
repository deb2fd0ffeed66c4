//! Output formatting utilities

use crate::domain::markup::to_plain_text;
use crate::domain::{Day, TripSummary};
use crate::infrastructure::Config;

fn display_date<'a>(day: &'a Day, config: &'a Config) -> &'a str {
    if day.has_date() {
        &day.date
    } else {
        &config.date_fallback
    }
}

/// Format the day list: one line per day
pub fn format_day_list(days: &[Day], config: &Config) -> String {
    if days.is_empty() {
        return "No days found\n".to_string();
    }

    let width = days
        .iter()
        .map(|day| day.day_number.len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for day in days {
        let label = format!("Day {:<width$}", day.day_number, width = width);
        if day.has_title() {
            output.push_str(&format!(
                "{}  {}  {}\n",
                label,
                display_date(day, config),
                day.day_title
            ));
        } else {
            output.push_str(&format!("{}  {}\n", label, display_date(day, config)));
        }
    }
    output
}

/// Format one day with its heading and content paragraphs
pub fn format_day(day: &Day, config: &Config, plain: bool) -> String {
    let mut heading = format!("Day {}: {}", day.day_number, display_date(day, config));
    if day.has_title() {
        heading.push_str(" - ");
        heading.push_str(&day.day_title);
    }

    let mut output = String::new();
    output.push_str(&heading);
    output.push('\n');
    output.push_str(&"=".repeat(heading.chars().count()));
    output.push('\n');

    for paragraph in &day.content {
        if plain {
            output.push_str(&to_plain_text(paragraph));
        } else {
            output.push_str(paragraph);
        }
        output.push('\n');
    }
    output
}

/// Format several days separated by blank lines
pub fn format_days(days: &[&Day], config: &Config, plain: bool) -> String {
    if days.is_empty() {
        return "No days found\n".to_string();
    }

    days.iter()
        .map(|day| format_day(day, config, plain))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the trip summary; lines for unknown fields are left out
pub fn format_summary(summary: &TripSummary) -> String {
    let mut output = String::new();

    match summary.route() {
        Some(route) => output.push_str(&format!("Trip: {}\n", route)),
        None => output.push_str("Trip\n"),
    }
    if let Some(start) = &summary.start {
        output.push_str(&format!("Start: {}\n", start));
    }
    if let Some(end) = &summary.end {
        output.push_str(&format!("End: {}\n", end));
    }
    if let Some(length) = summary.length_days {
        let unit = if length == 1 { "day" } else { "days" };
        output.push_str(&format!("Length: {} {}\n", length, unit));
    }
    if let Some(travelers) = summary.travelers {
        output.push_str(&format!("Travelers: {}\n", travelers));
    }
    if let Some(budget) = &summary.budget {
        output.push_str(&format!("Budget: {}\n", budget));
    }
    if let Some(pace) = &summary.pace {
        output.push_str(&format!("Pace: {}\n", pace));
    }
    if let Some(weather) = &summary.weather {
        let mut line = format!("Weather: {} ({})", weather.status, weather.kind);
        if let Some(temperature) = weather.temperature {
            line.push_str(&format!(", {}°", temperature));
        }
        if let Some(feels_like) = weather.feels_like {
            line.push_str(&format!(", feels like {}°", feels_like));
        }
        if let Some(humidity) = weather.humidity {
            line.push_str(&format!(", humidity {}%", humidity));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}
