use chrono::NaiveDate;
use decoy_gen::core::error::AppError;
use decoy_gen::core::rng::{ScriptedRandomSource, SeededRandomSource, ThreadRandomSource};
use decoy_gen::services::identity::username::USERNAME_MAX;
use decoy_gen::services::identity::IdentityGenerator;
use decoy_gen::services::names::NameList;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn test_generate_deterministic_record_with_scripted_source() {
    let first = NameList::new(vec!["Ann".to_string()]);
    let last = NameList::new(vec!["Lee".to_string()]);

    // All-zero draws: single-entry lists, base "ann", every username
    // attempt rejected (too short), fallback "ann_10", DOB at the bottom
    // of every range.
    let mut rng = ScriptedRandomSource::new(vec![0.0]);
    let record = IdentityGenerator::generate(&first, &last, today(), &mut rng).unwrap();

    assert_eq!(record.full_name, "Ann Lee");
    assert_eq!(record.username, "ann_10");
    assert_eq!(record.dob_display, "January 1, 2009 (Age: 15)");
    assert_eq!(record.age, 15);
    assert_eq!(record.birth_year, 2009);
    assert_eq!(record.birth_month, 1);
    assert_eq!(record.birth_day, 1);
}

#[test]
fn test_generate_fields_stay_plausible() {
    let first = NameList::new(vec!["Ann".to_string(), "Mary-Jane".to_string()]);
    let last = NameList::new(vec!["Lee".to_string(), "O'Brien".to_string()]);
    let mut rng = ThreadRandomSource;

    for _ in 0..300 {
        let record = IdentityGenerator::generate(&first, &last, today(), &mut rng).unwrap();

        assert!(record.full_name.contains(' '));
        assert!(record.username.len() <= USERNAME_MAX);
        assert!(record
            .username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.'));

        // never the bare concatenation of the real name
        assert_ne!(record.username, "annlee");
        assert_ne!(record.username, "maryjaneobrien");
        assert_ne!(record.username, "annobrien");
        assert_ne!(record.username, "maryjanelee");

        assert!((2009..=2012).contains(&record.birth_year));
        assert!((1..=12).contains(&record.birth_month));
        assert!((1..=31).contains(&record.birth_day));
        assert!((11..=15).contains(&record.age), "age was {}", record.age);

        let expected_display = format!(
            "{}, {} (Age: {})",
            record.birth_day, record.birth_year, record.age
        );
        assert!(record.dob_display.ends_with(&expected_display));
    }
}

#[test]
fn test_generate_is_reproducible_with_a_seed() {
    let first = NameList::new(vec!["Ann".to_string(), "Bea".to_string()]);
    let last = NameList::new(vec!["Lee".to_string(), "Cho".to_string()]);

    let mut a = SeededRandomSource::new(1234);
    let mut b = SeededRandomSource::new(1234);

    for _ in 0..20 {
        let ra = IdentityGenerator::generate(&first, &last, today(), &mut a).unwrap();
        let rb = IdentityGenerator::generate(&first, &last, today(), &mut b).unwrap();
        assert_eq!(ra, rb);
    }
}

#[test]
fn test_generate_rejects_empty_first_list() {
    let first = NameList::new(vec![]);
    let last = NameList::new(vec!["Lee".to_string()]);
    let mut rng = ThreadRandomSource;

    let err = IdentityGenerator::generate(&first, &last, today(), &mut rng).unwrap_err();
    assert!(matches!(err, AppError::EmptyNameList { which: "first" }));
}

#[test]
fn test_generate_rejects_empty_last_list() {
    let first = NameList::new(vec!["Ann".to_string()]);
    let last = NameList::new(vec![]);
    let mut rng = ThreadRandomSource;

    let err = IdentityGenerator::generate(&first, &last, today(), &mut rng).unwrap_err();
    assert!(matches!(err, AppError::EmptyNameList { which: "last" }));
}

#[test]
fn test_record_serializes_to_json_with_all_fields() {
    let first = NameList::new(vec!["Ann".to_string()]);
    let last = NameList::new(vec!["Lee".to_string()]);
    let mut rng = SeededRandomSource::new(7);

    let record = IdentityGenerator::generate(&first, &last, today(), &mut rng).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    for key in [
        "full_name",
        "username",
        "dob_display",
        "age",
        "birth_year",
        "birth_month",
        "birth_day",
    ] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }
}
