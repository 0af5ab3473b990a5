use super::*;

// =============================================================================
// convert_file_size
// =============================================================================

#[test]
fn bytes_below_one_kilobyte() {
    assert_eq!(convert_file_size(0), "0 Bytes");
    assert_eq!(convert_file_size(1023), "1023 Bytes");
}

#[test]
fn kilobytes_use_one_decimal() {
    assert_eq!(convert_file_size(1024), "1.0 KB");
    assert_eq!(convert_file_size(1536), "1.5 KB");
}

#[test]
fn megabytes_use_one_decimal() {
    assert_eq!(convert_file_size(5 * 1024 * 1024), "5.0 MB");
}

#[test]
fn gigabytes_use_two_decimals() {
    assert_eq!(convert_file_size(2 * 1024 * 1024 * 1024), "2.00 GB");
    assert_eq!(convert_file_size(3 * 1024 * 1024 * 1024 / 2), "1.50 GB");
}

// =============================================================================
// format_date_time
// =============================================================================

#[test]
fn morning_time() {
    assert_eq!(format_date_time(Some("2024-01-05T09:07:00.000+00:00")), "9:07am, 5 Jan");
}

#[test]
fn afternoon_time() {
    assert_eq!(format_date_time(Some("2024-11-23T15:30:12.345+00:00")), "3:30pm, 23 Nov");
}

#[test]
fn midnight_and_noon_show_twelve() {
    assert_eq!(format_date_time(Some("2024-03-01T00:05:00Z")), "12:05am, 1 Mar");
    assert_eq!(format_date_time(Some("2024-03-01T12:00:00Z")), "12:00pm, 1 Mar");
}

#[test]
fn keeps_the_timestamp_offset() {
    assert_eq!(format_date_time(Some("2024-06-10T22:45:00+02:00")), "10:45pm, 10 Jun");
}

#[test]
fn missing_or_invalid_is_dash() {
    assert_eq!(format_date_time(None), MISSING_DATE);
    assert_eq!(format_date_time(Some("yesterday")), MISSING_DATE);
}
