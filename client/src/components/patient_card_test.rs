use super::*;

#[test]
fn age_label_appends_years() {
    assert_eq!(age_label(19), "19 years");
}

#[test]
fn missing_user_renders_dash() {
    assert_eq!(user_field(None, |u| u.name.clone()), "—");
    let user = User {
        name: "Amogh".to_owned(),
        age: 19,
        gender: "Male".to_owned(),
        patient_id: "PES1UG24CS053".to_owned(),
    };
    assert_eq!(user_field(Some(&user), |u| u.patient_id.clone()), "PES1UG24CS053");
}
