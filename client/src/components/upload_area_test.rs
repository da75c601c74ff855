use super::*;

#[test]
fn hover_adds_modifier_class() {
    assert_eq!(drop_zone_class(false), "upload-area");
    assert_eq!(drop_zone_class(true), "upload-area upload-area--hover");
}
