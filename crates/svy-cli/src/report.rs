//! Aggregate report view

use serde_json::json;

use svy_core::{Result, SurveySummary};

/// Render the results view as plain text.
///
/// The empty store gets its dedicated message instead of zeroed
/// statistics; everything else follows the report's fixed line labels.
pub fn render_text(summary: Option<&SurveySummary>) -> String {
    let Some(summary) = summary else {
        return "No Surveys Available".to_string();
    };

    let lines = [
        "Survey Results".to_string(),
        String::new(),
        format!("Total number of surveys : {} surveys", summary.total_surveys),
        format!("Average Age : {:.1} average age", summary.avg_age),
        format!(
            "Oldest person who participated in survey : {} max age",
            summary.oldest_age
        ),
        format!(
            "Youngest person who participated in survey : {} min age",
            summary.youngest_age
        ),
        format!(
            "Percentage of people who like Pizza : {:.1} % Pizza",
            summary.pizza_percentage
        ),
        format!(
            "Percentage of people who like Pasta : {:.1} % Pasta",
            summary.pasta_percentage
        ),
        format!(
            "Percentage of people who like Pap and Wors : {:.1} % Pap and Wors",
            summary.pap_and_wors_percentage
        ),
        format!(
            "People like to watch movies : {:.1} average of rating",
            summary.watch_movies_avg
        ),
        format!(
            "People like to listen to radio : {:.1} average of rating",
            summary.listen_to_radio_avg
        ),
        format!(
            "People like to eat out : {:.1} average of rating",
            summary.eat_out_avg
        ),
        format!(
            "People like to watch TV : {:.1} average of rating",
            summary.watch_tv_avg
        ),
    ];
    lines.join("\n")
}

/// Render the results view as pretty JSON for machine consumption
pub fn render_json(summary: Option<&SurveySummary>) -> Result<String> {
    let value = match summary {
        Some(summary) => serde_json::to_value(summary)?,
        None => json!({ "noData": true }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
