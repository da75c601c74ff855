use super::*;

#[test]
fn critical_cards_get_modifier() {
    assert_eq!(card_class(false), "finding-card");
    assert_eq!(card_class(true), "finding-card finding-card--critical");
}
