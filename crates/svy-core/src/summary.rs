//! Aggregate statistics over the accepted responses

use log::debug;
use serde::Serialize;

use crate::fields::{FoodOption, RatingKey};
use crate::response::AcceptedResponse;

/// Percentages are reported for these three options; "other" is collected
/// on the form but deliberately excluded from the report.
const TRACKED_FOODS: [FoodOption; 3] = [FoodOption::Pizza, FoodOption::Pasta, FoodOption::PapAndWors];

/// Summary statistics over every accepted response.
///
/// Averages and percentages are rounded to one decimal place; the count
/// and the age extremes stay unrounded integers. Rating averages keep the
/// inverted scale (1 = strongly agree), so lower means stronger agreement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveySummary {
    pub total_surveys: usize,
    pub avg_age: f64,
    pub oldest_age: i32,
    pub youngest_age: i32,
    pub pizza_percentage: f64,
    pub pasta_percentage: f64,
    pub pap_and_wors_percentage: f64,
    pub watch_movies_avg: f64,
    pub listen_to_radio_avg: f64,
    pub eat_out_avg: f64,
    pub watch_tv_avg: f64,
}

/// Reduce a snapshot of the store to summary statistics in one pass.
///
/// `None` marks the empty store; the report view renders its own
/// empty-state message for it instead of zeroed statistics.
pub fn summarize(responses: &[AcceptedResponse]) -> Option<SurveySummary> {
    if responses.is_empty() {
        return None;
    }

    let total = responses.len();
    let mut age_sum = 0i64;
    let mut oldest = i32::MIN;
    let mut youngest = i32::MAX;
    let mut food_counts = [0usize; TRACKED_FOODS.len()];
    let mut rating_sums = [0u32; RatingKey::ALL.len()];

    for response in responses {
        age_sum += i64::from(response.age);
        oldest = oldest.max(response.age);
        youngest = youngest.min(response.age);
        for (count, option) in food_counts.iter_mut().zip(TRACKED_FOODS) {
            if response.favorite_foods.is_selected(option) {
                *count += 1;
            }
        }
        for (sum, key) in rating_sums.iter_mut().zip(RatingKey::ALL) {
            *sum += u32::from(response.ratings.get(key).value());
        }
    }

    let percentage = |count: usize| round1(count as f64 / total as f64 * 100.0);
    let rating_avg = |sum: u32| round1(f64::from(sum) / total as f64);

    debug!("summarized {total} responses");

    Some(SurveySummary {
        total_surveys: total,
        avg_age: round1(age_sum as f64 / total as f64),
        oldest_age: oldest,
        youngest_age: youngest,
        pizza_percentage: percentage(food_counts[0]),
        pasta_percentage: percentage(food_counts[1]),
        pap_and_wors_percentage: percentage(food_counts[2]),
        watch_movies_avg: rating_avg(rating_sums[0]),
        listen_to_radio_avg: rating_avg(rating_sums[1]),
        eat_out_avg: rating_avg(rating_sums[2]),
        watch_tv_avg: rating_avg(rating_sums[3]),
    })
}

/// Round to one decimal place, halves away from zero (`f64::round`).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
