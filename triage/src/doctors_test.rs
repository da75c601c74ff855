use super::*;

#[test]
fn directory_has_four_entries() {
    assert_eq!(DOCTORS.len(), 4);
    assert_eq!(DOCTORS[3].name, "Dr. Reshma Suresh");
    assert_eq!(DOCTORS[3].fee_inr, 700);
}

#[test]
fn featured_fee_maps_roll_onto_directory() {
    assert_eq!(featured_fee(0.0), 400);
    assert_eq!(featured_fee(0.3), 350);
    assert_eq!(featured_fee(0.6), 300);
    assert_eq!(featured_fee(0.99), 700);
}

#[test]
fn featured_fee_clamps_bad_rolls() {
    assert_eq!(featured_fee(-1.0), 400);
    assert_eq!(featured_fee(1.0), 700);
    assert_eq!(featured_fee(f64::NAN), 400);
}

#[test]
fn tel_href_strips_dashes() {
    assert_eq!(DOCTORS[0].tel_href(), "tel:+919022000110");
}

#[test]
fn fee_uses_rupee_sign() {
    assert_eq!(format_fee(350), "\u{20b9}350");
}
