use facultydir_session::{DEFAULT_TTL_SECONDS, SessionRecord};

#[test]
fn flash_read_once_law() {
    let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
    record.push_flash("error", "User not found");
    record.push_flash("success", "saved");

    let first = record.take_flash();
    assert_eq!(first.len(), 2);
    assert_eq!(
        first.get("error"),
        Some(&vec!["User not found".to_string()])
    );

    let second = record.take_flash();
    assert!(second.is_empty());
}

#[test]
fn messages_within_a_category_keep_insertion_order() {
    let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
    record.push_flash("error", "first");
    record.push_flash("error", "second");
    record.push_flash("error", "third");

    let drained = record.take_flash();
    assert_eq!(
        drained.get("error"),
        Some(&vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string()
        ])
    );
}

#[test]
fn categories_are_independent() {
    let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
    record.push_flash("error", "oops");

    let drained = record.take_flash();
    assert!(drained.get("success").is_none());
    assert_eq!(drained.get("error"), Some(&vec!["oops".to_string()]));

    // Writing after a drain starts a fresh queue.
    record.push_flash("success", "done");
    let drained = record.take_flash();
    assert!(drained.get("error").is_none());
    assert_eq!(drained.get("success"), Some(&vec!["done".to_string()]));
}
