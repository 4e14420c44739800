//! Integration tests for saving and loading editor state.

use resume_state::{
    decode_resume, decode_settings, Action, AppState, ControlBar, ControlBarConfig, DefaultState,
    LoadOutcome, Result, Revision, Section, StateContainer, StateEvent, StateStore,
    SubscriptionConfig, SubscriptionFilter,
};
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn render(state: &AppState) -> Result<Vec<u8>> {
    Ok(format!("%PDF-1.4 {}", state.resume["profile"]["name"]).into_bytes())
}

type Renderer = fn(&AppState) -> Result<Vec<u8>>;

fn control_bar(store: &Arc<StateStore>) -> ControlBar<Renderer> {
    ControlBar::new(ControlBarConfig::default(), store.clone(), render as Renderer)
}

// --- Realistic Workflow Tests ---

#[test]
fn test_edit_save_reload_workflow() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let store = Arc::new(StateStore::new());
    let bar = control_bar(&store);

    let mut resume = store.section(Section::Resume);
    resume["profile"]["name"] = json!("Ada Lovelace");
    resume["profile"]["email"] = json!("ada@example.com");
    resume["workExperiences"] = json!([
        {"company": "Analytical Engines", "jobTitle": "Programmer", "date": "1843", "descriptions": ["Wrote the first program"]}
    ]);
    store.dispatch(Action::SetResume(resume.clone())).unwrap();
    store
        .dispatch(Action::ChangeSetting {
            field: "themeColor".into(),
            value: json!("#0f766e"),
        })
        .unwrap();

    let report = bar.save(dir.path()).unwrap();
    assert_eq!(
        fs::read(&report.document.path).unwrap(),
        b"%PDF-1.4 \"Ada Lovelace\""
    );

    // A fresh editor session picks the file back up
    let restored = Arc::new(StateStore::new());
    let outcome = control_bar(&restored).load(&[&report.state.path]).unwrap();

    assert!(matches!(outcome, LoadOutcome::Applied(ref r) if r.replaced.len() == 2));
    assert_eq!(restored.get_state(), store.get_state());
    assert!(decode_resume(&restored.section(Section::Resume)).is_ok());
    assert_eq!(
        decode_settings(&restored.section(Section::Settings))
            .unwrap()
            .theme_color,
        "#0f766e"
    );
}

#[test]
fn test_snapshot_from_older_schema() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(StateStore::new());

    // Saved before skills ratings, custom section and bullet toggles existed
    let old = json!({
        "resume": {
            "profile": {"name": "Grace", "summary": "Compilers"},
            "skills": {"descriptions": ["COBOL"]}
        },
        "settings": {
            "themeColor": "#ff0000",
            "formToShow": {"workExperiences": true, "educations": false, "projects": true, "skills": true}
        }
    });
    let path = dir.path().join("old.pdf.json");
    fs::write(&path, serde_json::to_vec(&old).unwrap()).unwrap();

    control_bar(&store).load(&[&path]).unwrap();

    let resume = store.section(Section::Resume);
    assert_eq!(resume["profile"]["name"], "Grace");
    assert_eq!(resume["profile"]["url"], "");
    assert_eq!(resume["skills"]["descriptions"], json!(["COBOL"]));
    assert_eq!(resume["skills"]["featuredSkills"].as_array().unwrap().len(), 6);
    assert_eq!(resume["custom"], json!({"descriptions": []}));

    let settings = store.section(Section::Settings);
    assert_eq!(settings["themeColor"], "#ff0000");
    assert_eq!(settings["formToShow"]["educations"], false);
    assert_eq!(settings["formToShow"]["custom"], false);
    assert_eq!(settings["showBulletPoints"]["skills"], true);
    assert_eq!(settings["fontFamily"], "Roboto");

    // Old file plus new defaults is a complete, valid state
    assert!(decode_resume(&resume).is_ok());
    assert!(decode_settings(&settings).is_ok());
}

#[test]
fn test_saved_list_replaces_default_list() {
    let store = StateStore::new();
    let text = r#"{"resume": {"educations": []}}"#;

    resume_state::load_str(&store, DefaultState::current(), text).unwrap();

    // Arrays are taken as saved, not merged with the default entry
    assert_eq!(store.section(Section::Resume)["educations"], json!([]));
}

#[test]
fn test_unknown_keys_survive_load_and_save() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(StateStore::new());
    let bar = control_bar(&store);

    resume_state::load_str(
        &*store,
        DefaultState::current(),
        r#"{"resume": {"profile": {"pronouns": "she/her"}}, "extra": {"ignored": true}}"#,
    )
    .unwrap();

    let report = bar.save(dir.path()).unwrap();
    let saved: Value = serde_json::from_slice(&fs::read(&report.state.path).unwrap()).unwrap();

    assert_eq!(saved["resume"]["profile"]["pronouns"], "she/her");
    assert!(saved.get("extra").is_none());
}

#[test]
fn test_load_notifies_subscribers() {
    let store = StateStore::new();
    let handle = store.subscribe(SubscriptionConfig {
        filter: SubscriptionFilter::sections(vec![Section::Settings]),
        ..Default::default()
    });

    resume_state::load_str(
        &store,
        DefaultState::current(),
        r#"{"resume": {}, "settings": {"fontSize": "10"}}"#,
    )
    .unwrap();

    match handle.recv_timeout(Duration::from_millis(100)).unwrap() {
        StateEvent::SectionReplaced {
            section,
            revision,
            data: Some(data),
            ..
        } => {
            assert_eq!(section, Section::Settings);
            assert_eq!(revision, Revision(2));
            assert_eq!(data["fontSize"], "10");
        }
        other => panic!("Expected SectionReplaced with data, got {:?}", other),
    }
}

#[test]
fn test_zoom_through_control_bar() {
    let store = Arc::new(StateStore::new());
    let mut bar = control_bar(&store);

    assert!(bar.zoom().autoscale());
    assert_eq!(bar.on_viewport_resize(1000.0), 0.8);
    assert_eq!(bar.scale_label(), "80%");

    assert_eq!(bar.set_scale(1.25), 1.25);
    assert_eq!(bar.scale_label(), "125%");
    assert_eq!(bar.on_viewport_resize(700.0), 1.25);

    assert!(bar.toggle_autoscale());
    assert_eq!(bar.on_viewport_resize(1000.0), 0.8);
}
