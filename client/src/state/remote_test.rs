use super::*;

#[test]
fn default_is_loading() {
    let remote = Remote::<u8>::default();
    assert!(remote.is_loading());
    assert_eq!(remote.ready(), None);
    assert_eq!(remote.error(), None);
}

#[test]
fn from_result_splits_ready_and_failed() {
    assert_eq!(Remote::from_result(Ok(3)), Remote::Ready(3));
    let failed = Remote::<u8>::from_result(Err("Failed to load events.".to_owned()));
    assert_eq!(failed.error(), Some("Failed to load events."));
    assert!(!failed.is_loading());
}

#[test]
fn items_are_empty_until_ready() {
    assert!(Remote::<Vec<u8>>::Loading.items().is_empty());
    assert!(Remote::<Vec<u8>>::Failed("x".to_owned()).items().is_empty());
    assert_eq!(Remote::Ready(vec![1, 2]).items(), &[1, 2]);
}
