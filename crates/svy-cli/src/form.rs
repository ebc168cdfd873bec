//! Interactive survey form view

use chrono::NaiveDate;
use colored::*;
use log::debug;

use svy_core::{
    FieldInput, FoodOption, Rating, RatingKey, Result, Session, SubmitOutcome, TextField,
};

use crate::ui::{prompt_line, prompt_with_current};

/// Run one pass over the survey form: elicit every field, then submit.
///
/// Previously entered values are kept when the reply is empty, so a
/// rejected draft can be corrected without retyping everything. Every
/// committed value reaches the session as a tagged [`FieldInput`] event.
pub fn run_form(session: &mut Session) -> Result<()> {
    println!();
    println!("{}", "Personal Details:".bold());

    let full_name = prompt_with_current("Full Names", &session.draft().full_name)?;
    session.apply(FieldInput::Text(TextField::FullName, full_name));

    let email = prompt_with_current("Email", &session.draft().email)?;
    session.apply(FieldInput::Text(TextField::Email, email));

    let date_of_birth = prompt_date(session.draft().date_of_birth)?;
    session.apply(FieldInput::DateOfBirth(date_of_birth));

    let contact_number = prompt_with_current("Contact Number", &session.draft().contact_number)?;
    session.apply(FieldInput::Text(TextField::ContactNumber, contact_number));

    println!();
    println!("{}", "What is your favorite food?".bold());
    for option in FoodOption::ALL {
        let current = session.draft().favorite_foods.is_selected(option);
        let selected = prompt_yes_no(option.display_name(), current)?;
        session.apply(FieldInput::Food(option, selected));
    }

    println!();
    println!("{}", "Please rate your level of agreement on a scale from 1 to 5.".bold());
    println!(
        "{}",
        "  1 Strongly Agree | 2 Agree | 3 Neutral | 4 Disagree | 5 Strongly Disagree".dimmed()
    );
    for key in RatingKey::ALL {
        if let Some(rating) = prompt_rating(key, session.draft().ratings.get(key))? {
            session.apply(FieldInput::Rating(key, rating));
        }
    }

    println!();
    match session.submit()? {
        SubmitOutcome::Accepted(id) => {
            debug!("submission {id} accepted");
            println!("{} {}", "✅".green(), "Survey submitted successfully!".green());
        }
        SubmitOutcome::Rejected(errors) => {
            println!("{} Please fix the following and run 'fill' again:", "❌".red());
            for (field, message) in errors.iter() {
                println!("  {} {}: {}", "•".red(), field.as_str().red(), message);
            }
        }
    }
    Ok(())
}

fn prompt_date(current: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    let shown = current.map(|date| date.to_string()).unwrap_or_default();
    let reply = prompt_with_current("Date of Birth (YYYY-MM-DD)", &shown)?;
    if reply.is_empty() {
        return Ok(None);
    }
    match NaiveDate::parse_from_str(&reply, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            println!(
                "{} '{}' is not a valid date, leaving the field unset",
                "⚠️".yellow(),
                reply
            );
            Ok(None)
        }
    }
}

fn prompt_yes_no(label: &str, current: bool) -> Result<bool> {
    let hint = if current { "Y/n" } else { "y/N" };
    let reply = prompt_line(&format!("  {label} [{hint}]:"))?;
    Ok(match reply.to_lowercase().as_str() {
        "" => current,
        "y" | "yes" => true,
        _ => false,
    })
}

fn prompt_rating(key: RatingKey, current: Option<Rating>) -> Result<Option<Rating>> {
    let label = match current {
        Some(rating) => format!("  {} [1-5, current {}]:", key.label(), rating.value()),
        None => format!("  {} [1-5]:", key.label()),
    };
    let reply = prompt_line(&label)?;
    if reply.is_empty() {
        // Radio semantics: an empty reply keeps whatever is selected.
        return Ok(None);
    }
    match reply.parse::<u8>().ok().and_then(|digit| Rating::try_from(digit).ok()) {
        Some(rating) => Ok(Some(rating)),
        None => {
            println!(
                "{} ratings are 1 to 5, leaving the statement unanswered",
                "⚠️".yellow()
            );
            Ok(None)
        }
    }
}
