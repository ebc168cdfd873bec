//! Tests for the validator, the aggregator, and the session round-trip

#[cfg(test)]
mod validation_tests {
    use chrono::NaiveDate;
    use insta::assert_yaml_snapshot;

    use crate::{
        DraftResponse, FieldId, FieldInput, FoodOption, Rating, RatingKey, TextField,
        calculate_age, validate,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn valid_draft() -> DraftResponse {
        let mut draft = DraftResponse::empty();
        draft.apply(FieldInput::Text(TextField::FullName, "Thandi Mokoena".into()));
        draft.apply(FieldInput::Text(TextField::Email, "thandi@example.com".into()));
        draft.apply(FieldInput::DateOfBirth(NaiveDate::from_ymd_opt(1996, 3, 2)));
        draft.apply(FieldInput::Text(TextField::ContactNumber, "082 555 0199".into()));
        draft.apply(FieldInput::Food(FoodOption::Pizza, true));
        for key in RatingKey::ALL {
            draft.apply(FieldInput::Rating(key, Rating::Neutral));
        }
        draft
    }

    #[test]
    fn accepts_a_fully_filled_draft() {
        let errors = validate(&valid_draft(), today());
        assert!(errors.is_empty(), "expected acceptance, got {errors:?}");
    }

    #[test]
    fn accepts_any_food_combination_including_none() {
        let mut draft = valid_draft();
        for option in FoodOption::ALL {
            draft.apply(FieldInput::Food(option, false));
        }
        assert!(validate(&draft, today()).is_empty());
    }

    #[test]
    fn flags_every_required_field_on_a_blank_draft() {
        let errors = validate(&DraftResponse::empty(), today());
        assert_yaml_snapshot!(errors, @r###"
        ---
        fullName: Full name is required
        email: Email is required
        dateOfBirth: Date of birth is required
        contactNumber: Contact number is required
        rating-watchMovies: Please select a rating
        rating-listenToRadio: Please select a rating
        rating-eatOut: Please select a rating
        rating-watchTV: Please select a rating
        "###);
    }

    #[test]
    fn missing_text_fields_are_reported_in_isolation() {
        let cases = [
            (TextField::FullName, FieldId::FullName, "Full name is required"),
            (TextField::Email, FieldId::Email, "Email is required"),
            (
                TextField::ContactNumber,
                FieldId::ContactNumber,
                "Contact number is required",
            ),
        ];
        for (field, id, message) in cases {
            let mut draft = valid_draft();
            // Whitespace-only input counts as empty after trimming.
            draft.apply(FieldInput::Text(field, "   ".into()));
            let errors = validate(&draft, today());
            assert_eq!(errors.len(), 1, "only {id:?} should be flagged");
            assert_eq!(errors.get(id), Some(message));
        }
    }

    #[test]
    fn missing_date_of_birth_is_reported_in_isolation() {
        let mut draft = valid_draft();
        draft.apply(FieldInput::DateOfBirth(None));
        let errors = validate(&draft, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldId::DateOfBirth), Some("Date of birth is required"));
    }

    #[test]
    fn missing_ratings_are_reported_in_isolation() {
        for missing in RatingKey::ALL {
            let mut draft = valid_draft();
            draft.ratings = Default::default();
            for key in RatingKey::ALL {
                if key != missing {
                    draft.apply(FieldInput::Rating(key, Rating::Agree));
                }
            }
            let errors = validate(&draft, today());
            assert_eq!(errors.len(), 1, "only {missing:?} should be flagged");
            assert_eq!(errors.get(missing.field_id()), Some("Please select a rating"));
        }
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let cases = [
            (NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(), true), // turns 5 today
            (NaiveDate::from_ymd_opt(2021, 6, 16).unwrap(), false), // still 4
            (NaiveDate::from_ymd_opt(1906, 6, 15).unwrap(), true), // turns 120 today
            (NaiveDate::from_ymd_opt(1905, 6, 15).unwrap(), false), // 121
        ];
        for (date_of_birth, ok) in cases {
            let mut draft = valid_draft();
            draft.apply(FieldInput::DateOfBirth(Some(date_of_birth)));
            let errors = validate(&draft, today());
            if ok {
                assert!(errors.is_empty(), "dob {date_of_birth} should pass");
            } else {
                assert_eq!(errors.len(), 1, "dob {date_of_birth} should fail");
                assert_eq!(
                    errors.get(FieldId::DateOfBirth),
                    Some("Age must be between 5 and 120")
                );
            }
        }
    }

    #[test]
    fn age_error_stands_alone_even_on_an_otherwise_blank_draft() {
        let mut draft = DraftResponse::empty();
        draft.apply(FieldInput::DateOfBirth(NaiveDate::from_ymd_opt(2025, 1, 1)));
        let errors = validate(&draft, today());
        // The date is present, so the only message for this field is the
        // range error, regardless of the other fields' state.
        assert_eq!(
            errors.get(FieldId::DateOfBirth),
            Some("Age must be between 5 and 120")
        );
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut draft = valid_draft();
        draft.apply(FieldInput::Text(TextField::Email, String::new()));
        draft.apply(FieldInput::DateOfBirth(None));
        assert_eq!(validate(&draft, today()), validate(&draft, today()));
    }

    #[test]
    fn birthday_later_in_the_year_decrements_the_age() {
        let as_of = today();
        // Born 1990-09-01: the birthday has not happened yet on 2026-06-15.
        assert_eq!(calculate_age(NaiveDate::from_ymd_opt(1990, 9, 1).unwrap(), as_of), 35);
        // Birthday exactly today counts the full year.
        assert_eq!(calculate_age(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(), as_of), 36);
        // One day later in the month does not.
        assert_eq!(calculate_age(NaiveDate::from_ymd_opt(1990, 6, 16).unwrap(), as_of), 35);
    }

    #[test]
    fn field_identifiers_match_the_wire_strings() {
        assert_eq!(FieldId::FullName.as_str(), "fullName");
        assert_eq!(FieldId::Email.as_str(), "email");
        assert_eq!(FieldId::DateOfBirth.as_str(), "dateOfBirth");
        assert_eq!(FieldId::ContactNumber.as_str(), "contactNumber");
        assert_eq!(FieldId::Rating(RatingKey::WatchMovies).as_str(), "rating-watchMovies");
        assert_eq!(FieldId::Rating(RatingKey::ListenToRadio).as_str(), "rating-listenToRadio");
        assert_eq!(FieldId::Rating(RatingKey::EatOut).as_str(), "rating-eatOut");
        assert_eq!(FieldId::Rating(RatingKey::WatchTV).as_str(), "rating-watchTV");
    }

    #[test]
    fn ratings_only_accept_the_five_point_scale() {
        assert_eq!(Rating::try_from(1).unwrap(), Rating::StronglyAgree);
        assert_eq!(Rating::try_from(3).unwrap(), Rating::Neutral);
        assert_eq!(Rating::try_from(5).unwrap(), Rating::StronglyDisagree);
        assert!(Rating::try_from(0).is_err());
        assert!(Rating::try_from(6).is_err());
    }
}

#[cfg(test)]
mod aggregation_tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::{
        AcceptedResponse, DraftResponse, FieldInput, FoodOption, Rating, RatingKey, TextField,
        commit, summarize,
    };
    use crate::summary::round1;

    /// Commit a response aged `2026 - dob_year` as of the fixed reference
    /// date 2026-06-15.
    fn accepted(dob_year: i32, foods: &[FoodOption], watch_movies: Rating) -> AcceptedResponse {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let mut draft = DraftResponse::empty();
        draft.apply(FieldInput::Text(TextField::FullName, format!("Respondent {dob_year}")));
        draft.apply(FieldInput::Text(TextField::Email, format!("r{dob_year}@example.com")));
        draft.apply(FieldInput::DateOfBirth(NaiveDate::from_ymd_opt(dob_year, 6, 15)));
        draft.apply(FieldInput::Text(TextField::ContactNumber, "082 555 0100".into()));
        for food in foods {
            draft.apply(FieldInput::Food(*food, true));
        }
        draft.apply(FieldInput::Rating(RatingKey::WatchMovies, watch_movies));
        for key in [RatingKey::ListenToRadio, RatingKey::EatOut, RatingKey::WatchTV] {
            draft.apply(FieldInput::Rating(key, Rating::Neutral));
        }
        commit(&draft, now).unwrap()
    }

    #[test]
    fn empty_store_yields_the_no_data_marker() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn summarizes_the_reference_scenario() {
        // Ages 20, 30, 40; everyone likes pizza, nobody likes pasta;
        // watchMovies rated 1, 3, 5.
        let responses = vec![
            accepted(2006, &[FoodOption::Pizza], Rating::StronglyAgree),
            accepted(1996, &[FoodOption::Pizza], Rating::Neutral),
            accepted(1986, &[FoodOption::Pizza], Rating::StronglyDisagree),
        ];

        let summary = summarize(&responses).unwrap();
        assert_eq!(summary.total_surveys, 3);
        assert_eq!(summary.avg_age, 30.0);
        assert_eq!(summary.oldest_age, 40);
        assert_eq!(summary.youngest_age, 20);
        assert_eq!(summary.pizza_percentage, 100.0);
        assert_eq!(summary.pasta_percentage, 0.0);
        assert_eq!(summary.watch_movies_avg, 3.0);
    }

    #[test]
    fn percentages_and_averages_round_to_one_decimal() {
        let responses = vec![
            accepted(1990, &[FoodOption::Pizza, FoodOption::PapAndWors], Rating::StronglyAgree),
            accepted(1991, &[FoodOption::Pasta], Rating::Agree),
            accepted(1992, &[FoodOption::Pasta], Rating::Agree),
        ];

        let summary = summarize(&responses).unwrap();
        assert_eq!(summary.pizza_percentage, 33.3);
        assert_eq!(summary.pap_and_wors_percentage, 33.3);
        assert_eq!(summary.pasta_percentage, 66.7);
        // (1 + 2 + 2) / 3 = 1.666...
        assert_eq!(summary.watch_movies_avg, 1.7);
        // Ages 36, 35, 34.
        assert_eq!(summary.avg_age, 35.0);
    }

    #[test]
    fn other_is_excluded_from_food_reporting() {
        let responses = vec![accepted(1990, &[FoodOption::Other], Rating::Neutral)];
        let summary = summarize(&responses).unwrap();
        assert_eq!(summary.pizza_percentage, 0.0);
        assert_eq!(summary.pasta_percentage, 0.0);
        assert_eq!(summary.pap_and_wors_percentage, 0.0);
    }

    #[test]
    fn half_ages_keep_their_decimal() {
        let responses = vec![accepted(2006, &[], Rating::Neutral), accepted(2005, &[], Rating::Neutral)];
        let summary = summarize(&responses).unwrap();
        assert_eq!(summary.avg_age, 20.5);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(-2.25), -2.3);
        assert_eq!(round1(33.333_333), 33.3);
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round1(3.0), 3.0);
    }

    #[test]
    fn commit_normalizes_text_and_freezes_age() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let mut draft = DraftResponse::empty();
        draft.apply(FieldInput::Text(TextField::FullName, "  Thandi Mokoena  ".into()));
        draft.apply(FieldInput::Text(TextField::Email, " thandi@example.com ".into()));
        draft.apply(FieldInput::DateOfBirth(NaiveDate::from_ymd_opt(1996, 3, 2)));
        draft.apply(FieldInput::Text(TextField::ContactNumber, " 082 555 0199 ".into()));
        for key in RatingKey::ALL {
            draft.apply(FieldInput::Rating(key, Rating::Agree));
        }

        let response = commit(&draft, now).unwrap();
        assert_eq!(response.full_name, "Thandi Mokoena");
        assert_eq!(response.email, "thandi@example.com");
        assert_eq!(response.contact_number, "082 555 0199");
        assert_eq!(response.age, 30);
        assert_eq!(response.submitted_at, now);
    }

    #[test]
    fn commit_rejects_an_unvalidated_draft() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        assert!(commit(&DraftResponse::empty(), now).is_err());
    }
}

#[cfg(test)]
mod session_tests {
    use chrono::{NaiveDate, Utc};

    use crate::{
        DraftResponse, FieldInput, FoodOption, Rating, RatingKey, Session, SubmitOutcome,
        TextField, calculate_age,
    };

    fn fill_valid(session: &mut Session, name: &str) {
        session.apply(FieldInput::Text(TextField::FullName, name.to_string()));
        session.apply(FieldInput::Text(TextField::Email, "someone@example.com".into()));
        session.apply(FieldInput::DateOfBirth(NaiveDate::from_ymd_opt(1996, 3, 2)));
        session.apply(FieldInput::Text(TextField::ContactNumber, "082 555 0199".into()));
        session.apply(FieldInput::Food(FoodOption::Pizza, true));
        for key in RatingKey::ALL {
            session.apply(FieldInput::Rating(key, Rating::Agree));
        }
    }

    #[test]
    fn submit_appends_resets_and_freezes_age() {
        let mut session = Session::new();
        fill_valid(&mut session, "First Respondent");

        let outcome = session.submit().unwrap();
        let id = match outcome {
            SubmitOutcome::Accepted(id) => id,
            SubmitOutcome::Rejected(errors) => panic!("unexpected rejection: {errors:?}"),
        };

        assert_eq!(session.store().len(), 1);
        let stored = session.store().latest().unwrap();
        assert_eq!(stored.id, id);
        // The frozen age matches the submission date, not some later read.
        let expected_age = calculate_age(
            NaiveDate::from_ymd_opt(1996, 3, 2).unwrap(),
            Utc::now().date_naive(),
        );
        assert_eq!(stored.age, expected_age);
        // The form is blank again for the next respondent.
        assert_eq!(session.draft(), &DraftResponse::empty());
    }

    #[test]
    fn rejected_submission_leaves_store_and_draft_untouched() {
        let mut session = Session::new();
        session.apply(FieldInput::Text(TextField::FullName, "Only A Name".into()));

        let outcome = session.submit().unwrap();
        match outcome {
            SubmitOutcome::Rejected(errors) => assert_eq!(errors.len(), 7),
            SubmitOutcome::Accepted(id) => panic!("blank draft accepted as {id}"),
        }
        assert!(session.store().is_empty());
        assert_eq!(session.draft().full_name, "Only A Name");
    }

    #[test]
    fn store_preserves_insertion_order() {
        let mut session = Session::new();
        fill_valid(&mut session, "First Respondent");
        session.submit().unwrap();
        fill_valid(&mut session, "Second Respondent");
        session.submit().unwrap();

        let names: Vec<_> = session
            .store()
            .iter()
            .map(|response| response.full_name.as_str())
            .collect();
        assert_eq!(names, ["First Respondent", "Second Respondent"]);
        assert_eq!(session.store().latest().unwrap().full_name, "Second Respondent");
    }

    #[test]
    fn summary_reflects_the_store() {
        let mut session = Session::new();
        assert!(session.summary().is_none());

        fill_valid(&mut session, "First Respondent");
        session.submit().unwrap();
        let summary = session.summary().unwrap();
        assert_eq!(summary.total_surveys, 1);
        assert_eq!(summary.pizza_percentage, 100.0);
    }
}
