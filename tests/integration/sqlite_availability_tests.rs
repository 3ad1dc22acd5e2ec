/*!
 * Availability checks running against the SQLite event store
 */

use event_availability::app_config::FallbackType;
use event_availability::availability::EventAvailability;
use event_availability::database::{DatabaseConnection, EventRecord, Repository};
use event_availability::errors::{AvailabilityError, ConfigurationError};
use event_availability::localization_store::{InMemoryLocalizationStore, LocalizationStore};

use crate::common::{create_temp_dir, create_test_file, init_logging, language, strict};

/// Rows covering every shape the store predicate distinguishes
fn fixture_rows() -> Vec<EventRecord> {
    vec![
        // Default language source with a German translation
        EventRecord::source(10, 0, "Concert"),
        EventRecord::translation(11, 10, 1, "Konzert"),
        // Valid for all languages
        EventRecord::source(20, -1, "Workshop"),
        // German only source
        EventRecord::source(30, 1, "Stammtisch"),
        // French translation of a default language source
        EventRecord::source(40, 0, "Lecture"),
        EventRecord::translation(41, 40, 2, "Conférence"),
    ]
}

fn fixture_repository() -> Repository {
    let repository = Repository::new_in_memory().expect("Failed to open in-memory database");
    repository
        .insert_events(&fixture_rows())
        .expect("Failed to insert fixture rows");
    repository
}

#[test]
fn test_check_withStrictDefaultAndNoRow_shouldBeHidden() {
    init_logging();
    let repository = Repository::new_in_memory().unwrap();
    repository.insert_event(&EventRecord::source(7, 0, "Other")).unwrap();

    let checker = EventAvailability::new(&repository);

    assert!(!checker.check(0, 42, &[strict(0)]).unwrap());
}

#[test]
fn test_check_withStrictDefaultAndDefaultRow_shouldBeAvailable() {
    let repository = Repository::new_in_memory().unwrap();
    repository.insert_event(&EventRecord::source(42, 0, "Concert")).unwrap();

    let checker = EventAvailability::new(&repository);

    assert!(checker.check(0, 42, &[strict(0)]).unwrap());
}

#[test]
fn test_check_withStrictLanguageAndLocalizedChild_shouldBeAvailable() {
    let repository = Repository::new_in_memory().unwrap();
    repository
        .insert_event(&EventRecord::translation(42, 42, 2, "Konzert"))
        .unwrap();

    let checker = EventAvailability::new(&repository);

    assert!(checker.check(2, 42, &[strict(2)]).unwrap());
}

#[test]
fn test_check_withFreeTargetLanguage_shouldIgnoreEmptyStore() {
    let repository = Repository::new_in_memory().unwrap();
    let checker = EventAvailability::new(&repository);
    let languages = vec![strict(0), language(1, Some(FallbackType::Free))];

    assert!(checker.check(1, 42, &languages).unwrap());
}

#[test]
fn test_check_withUnconfiguredLanguage_shouldFail() {
    let repository = fixture_repository();
    let checker = EventAvailability::new(&repository);

    let result = checker.check(5, 42, &[]);

    assert!(matches!(
        result,
        Err(AvailabilityError::Configuration(
            ConfigurationError::TargetLanguageNotFound { language_id: 5 }
        ))
    ));
}

#[test]
fn test_check_withTranslationOnlyInOtherLanguage_shouldBeHidden() {
    let repository = fixture_repository();
    let checker = EventAvailability::new(&repository);
    let languages = vec![strict(0), strict(1), strict(2)];

    // Source 40 only has a French translation
    assert!(checker.check(0, 40, &languages).unwrap());
    assert!(checker.check(2, 40, &languages).unwrap());
    assert!(!checker.check(1, 40, &languages).unwrap());
}

#[test]
fn test_check_withAllLanguagesRow_shouldBeAvailableEverywhere() {
    let repository = fixture_repository();
    let checker = EventAvailability::new(&repository);
    let languages = vec![strict(0), strict(1), strict(2)];

    for language_id in [0, 1, 2] {
        assert!(checker.check(language_id, 20, &languages).unwrap());
    }
}

#[test]
fn test_check_withSourceInNonDefaultLanguage_shouldOnlyMatchThatLanguage() {
    let repository = fixture_repository();
    let checker = EventAvailability::new(&repository);
    let languages = vec![strict(0), strict(1), strict(2)];

    assert!(checker.check(1, 30, &languages).unwrap());
    assert!(!checker.check(0, 30, &languages).unwrap());
    assert!(!checker.check(2, 30, &languages).unwrap());
}

/// The SQL lookup and the in-memory predicate agree on every combination
#[test]
fn test_isAvailable_shouldAgreeWithInMemoryStore() {
    let repository = fixture_repository();
    let in_memory = InMemoryLocalizationStore::with_rows(fixture_rows());

    for event_uid in [10, 11, 20, 30, 40, 41, 99] {
        for language_id in [-1, 0, 1, 2, 3] {
            assert_eq!(
                repository.is_available(event_uid, language_id).unwrap(),
                in_memory.is_available(event_uid, language_id).unwrap(),
                "event {} language {}",
                event_uid,
                language_id
            );
        }
    }
}

#[test]
fn test_countMatching_shouldCountEveryMatchingRow() {
    let repository = fixture_repository();

    assert_eq!(repository.count_matching(10, 1).unwrap(), 1);
    assert_eq!(repository.count_matching(10, 2).unwrap(), 0);
    assert_eq!(repository.count_matching(20, 3).unwrap(), 1);
    assert_eq!(repository.count_matching(99, 0).unwrap(), 0);
}

#[test]
fn test_fileDatabase_shouldPersistRowsAcrossConnections() {
    let temp_dir = create_temp_dir().unwrap();
    let db_path = temp_dir.path().join("nested").join("events.db");

    {
        let repository = Repository::new(DatabaseConnection::new(&db_path).unwrap());
        repository.insert_events(&fixture_rows()).unwrap();
    }

    let reopened = Repository::new(DatabaseConnection::new(&db_path).unwrap());
    let checker = EventAvailability::new(&reopened);

    assert_eq!(reopened.list_events().unwrap().len(), fixture_rows().len());
    assert!(checker.check(1, 10, &[strict(1)]).unwrap());
    assert!(!checker.check(1, 40, &[strict(1)]).unwrap());
}

#[test]
fn test_importFromJson_shouldLoadRowsWithDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let file = create_test_file(
        temp_dir.path(),
        "events.json",
        r#"[
            { "uid": 1, "sys_language_uid": 0, "title": "Concert" },
            { "uid": 2, "sys_language_uid": 1, "l10n_parent": 1 },
            { "uid": 3, "sys_language_uid": -1 }
        ]"#,
    )
    .unwrap();

    let repository = Repository::new_in_memory().unwrap();
    let imported = repository.import_from_json(&file).unwrap();

    assert_eq!(imported, 3);
    let translation = repository.get_event(2).unwrap().expect("Row 2 should exist");
    assert_eq!(translation.l10n_parent, 1);
    assert!(translation.title.is_empty());
    assert!(repository.is_available(1, 1).unwrap());
    assert!(repository.is_available(3, 7).unwrap());
}

#[test]
fn test_importFromJson_withDuplicateUid_shouldImportNothing() {
    let temp_dir = create_temp_dir().unwrap();
    let file = create_test_file(
        temp_dir.path(),
        "events.json",
        r#"[
            { "uid": 1, "sys_language_uid": 0 },
            { "uid": 1, "sys_language_uid": 1 }
        ]"#,
    )
    .unwrap();

    let repository = Repository::new_in_memory().unwrap();

    assert!(repository.import_from_json(&file).is_err());
    assert!(repository.list_events().unwrap().is_empty());
}
