use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn whole_amounts_have_no_fraction() {
    assert_eq!(format_currency(150.0), "150\u{a0}₽");
}

#[test]
fn thousands_are_grouped_with_nbsp() {
    assert_eq!(format_currency(1500.0), "1\u{a0}500\u{a0}₽");
    assert_eq!(format_currency(1_234_567.0), "1\u{a0}234\u{a0}567\u{a0}₽");
}

#[test]
fn inner_groups_are_zero_padded() {
    assert_eq!(format_currency(1_000_005.0), "1\u{a0}000\u{a0}005\u{a0}₽");
}

#[test]
fn fractional_amounts_keep_two_decimals() {
    assert_eq!(format_currency(99.5), "99,50\u{a0}₽");
    assert_eq!(format_currency(1234.05), "1\u{a0}234,05\u{a0}₽");
}

#[test]
fn fraction_rounding_carries_into_whole() {
    assert_eq!(format_currency(99.999), "100\u{a0}₽");
}

#[test]
fn zero_renders_as_zero_rubles() {
    assert_eq!(format_currency(0.0), "0\u{a0}₽");
}

#[test]
fn negative_amounts_keep_the_sign() {
    assert_eq!(format_currency(-1500.0), "-1\u{a0}500\u{a0}₽");
}

// =============================================================
// format_date / format_date_time
// =============================================================

#[test]
fn bare_date_formats_day_month_year() {
    assert_eq!(format_date("2024-01-05"), "05.01.2024");
}

#[test]
fn rfc3339_date_time_formats_date_part() {
    assert_eq!(format_date("2024-03-08T14:30:00"), "08.03.2024");
}

#[test]
fn sql_date_time_formats_with_time() {
    assert_eq!(format_date_time("2024-03-08 14:30:00"), "08.03.2024, 14:30");
}

#[test]
fn bare_date_gets_midnight_time() {
    assert_eq!(format_date_time("2024-12-31"), "31.12.2024, 00:00");
}

#[test]
fn fractional_seconds_are_accepted() {
    assert_eq!(format_date("2024-03-08T14:30:00.123456"), "08.03.2024");
}

#[test]
fn unparseable_input_passes_through() {
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date_time(""), "");
}
