use super::*;
use triage::User;
use triage::session::{SessionStore, THEME_KEY, Theme, USER_KEY};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("radethix-store-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn patient() -> User {
    User {
        name: "Amogh".to_owned(),
        age: 19,
        gender: "Male".to_owned(),
        patient_id: "PES1UG24CS053".to_owned(),
    }
}

#[test]
fn missing_file_reads_as_empty() {
    let store = FileStore::new(&scratch_dir("missing"));
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn set_creates_state_dir_and_persists() {
    let dir = scratch_dir("persist");
    let store = FileStore::new(&dir);
    store.set(THEME_KEY, "light");

    let reopened = FileStore::new(&dir);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn session_round_trip_and_clear() {
    let dir = scratch_dir("session");
    let session = SessionStore::new(FileStore::new(&dir));
    session.save(&patient());
    session.save_theme(Theme::Light);
    assert_eq!(session.load(), Some(patient()));

    session.clear();
    assert_eq!(session.load(), None);
    assert_eq!(session.load_theme(), Theme::Light);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_state_file_reads_as_empty() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let store = FileStore::new(&dir);
    fs::write(store.path(), "{not json").unwrap();
    assert_eq!(store.get(USER_KEY), None);
    let _ = fs::remove_dir_all(&dir);
}
