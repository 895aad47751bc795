use triplog::core::segmenter::{segment, spans};
use triplog::errors::AppError;

fn seg(ts: &[Option<&str>]) -> Vec<usize> {
    segment("Session Time", ts).expect("segment")
}

#[test]
fn test_backwards_time_starts_new_session() {
    let b = seg(&[Some("10"), Some("20"), Some("5"), Some("15")]);
    assert_eq!(b, vec![0, 2, 4]);

    let s: Vec<(usize, usize)> = spans(&b).collect();
    assert_eq!(s, vec![(0, 2), (2, 4)]);
}

#[test]
fn test_monotonic_input_is_one_session() {
    let b = seg(&[Some("1"), Some("2"), Some("2.5"), Some("100")]);
    assert_eq!(b, vec![0, 4]);
}

#[test]
fn test_equal_timestamps_do_not_split() {
    let b = seg(&[Some("10"), Some("10"), Some("10")]);
    assert_eq!(b, vec![0, 3]);
}

#[test]
fn test_empty_input_has_no_sentinel() {
    let b = seg(&[]);
    assert!(b.is_empty());
}

#[test]
fn test_blank_timestamps_are_skipped() {
    // la riga vuota non aggiorna il tempo di riferimento
    let b = seg(&[Some("10"), None, Some("5"), Some(""), Some("7")]);
    assert_eq!(b, vec![0, 2, 5]);

    let b = seg(&[Some("10"), None, Some("12")]);
    assert_eq!(b, vec![0, 3]);
}

#[test]
fn test_leading_blank_rows_open_session_at_first_timestamp() {
    let b = seg(&[None, Some("3"), Some("4")]);
    assert_eq!(b, vec![1, 3]);
}

#[test]
fn test_all_blank_gives_only_sentinel() {
    let b = segment("Session Time", &[None::<&str>, None]).unwrap();
    assert_eq!(b, vec![2]);
    assert_eq!(spans(&b).count(), 0);
}

#[test]
fn test_segmentation_is_deterministic() {
    let ts = [Some("3"), Some("1"), Some("2"), Some("0"), Some("9"), Some("9")];
    assert_eq!(seg(&ts), seg(&ts));
    assert_eq!(seg(&ts), vec![0, 1, 3, 6]);
}

#[test]
fn test_date_time_strings_are_ordered() {
    let b = segment(
        "GPS Date & Time",
        &[
            Some("2024-05-01 10:00:00"),
            Some("2024-05-01 10:00:05"),
            Some("2024-05-01 09:00:00"),
            Some("2024-05-01T09:00:01"),
        ],
    )
    .unwrap();
    assert_eq!(b, vec![0, 2, 4]);
}

#[test]
fn test_unparseable_timestamp_is_fatal() {
    let r = segment("Session Time", &[Some("10"), Some("soon")]);
    assert!(matches!(r, Err(AppError::MalformedNumeric { .. })));
}

#[test]
fn test_parse_timestamp_formats() {
    use triplog::utils::parse_timestamp;

    assert_eq!(parse_timestamp("12.5"), Some(12.5));
    assert_eq!(parse_timestamp(" 7 "), Some(7.0));
    assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(60.0));
    assert_eq!(parse_timestamp("1970-01-01T00:00:01.500"), Some(1.5));
    assert_eq!(parse_timestamp("1970-01-01T00:00:10Z"), Some(10.0));
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp("NaN"), None);
}

#[test]
fn test_sub_millisecond_step_back_starts_session() {
    let b = segment(
        "GPS Date & Time",
        &[
            Some("2024-05-01 10:00:00.0009"),
            Some("2024-05-01 10:00:00.0001"),
        ],
    )
    .unwrap();
    assert_eq!(b, vec![0, 1, 2]);
}
