use super::*;

#[test]
fn js_month_is_zero_based() {
    let date = date_from_js_parts(2025, 0, 31).unwrap();
    assert_eq!(date, Date::from_calendar_date(2025, Month::January, 31).unwrap());
    let date = date_from_js_parts(2024, 11, 9).unwrap();
    assert_eq!(date.month(), Month::December);
}

#[test]
fn impossible_dates_are_rejected() {
    assert!(date_from_js_parts(2025, 1, 30).is_none());
    assert!(date_from_js_parts(2025, 12, 1).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_fallbacks_are_stable() {
    assert_eq!(random_roll(), 0.0);
    assert_eq!(today().year(), 1970);
}
