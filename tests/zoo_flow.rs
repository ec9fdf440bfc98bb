use menagerie::{
    create_animal, render_animals, run_routine, save_animals_to_file, Animal,
    BackgroundScheduler, Country, Kennel, ShutdownOutcome, Species, StatusReport,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn stock_animals() -> Vec<Box<dyn Animal>> {
    vec![
        create_animal(Species::Dog, "Loki"),
        create_animal(Species::Cat, "Ziggy"),
        create_animal(Species::Rabbit, "Sooty"),
    ]
}

/// The whole demo sequence, with the export pointed at a path that can't be
/// written. Everything after the failed save still has to run.
#[tokio::test]
async fn demo_sequence_survives_failed_export() {
    let scheduler = BackgroundScheduler::new();
    let background_ran = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&background_ran);
    scheduler
        .schedule_once(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();

    let animals = stock_animals();
    let transcript: Vec<String> = animals
        .iter()
        .flat_map(|a| run_routine(a.as_ref()))
        .collect();
    assert_eq!(transcript.len(), 12);
    assert_eq!(transcript[0], "Loki says: woof");
    assert_eq!(transcript[4], "Ziggy says: meow");
    assert_eq!(transcript[9], "Sooty nibbles on something...");

    let tax = Country::from_code(Some("UK")).calculate_tax(123.45);
    assert!((tax - 24.69).abs() < 1e-9);

    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("missing").join("animals.json");
    assert!(!save_animals_to_file(&bad_path, &animals));

    // Subsequent steps still execute
    let report = StatusReport::new(["OK", "WARN", "TODO"]);
    assert_eq!(report.numbered().len(), 3);

    let mut kennel = Kennel::new("Somewhere over there");
    kennel.add_dog(menagerie::Dog::new("Buddy"));
    assert_eq!(kennel.dog_count(), 1);

    let outcome = scheduler.shutdown(Duration::from_secs(1)).await;
    assert_eq!(outcome, ShutdownOutcome::Drained);
    assert!(background_ran.load(Ordering::SeqCst));
}

#[test]
fn export_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    let animals = stock_animals();

    assert!(save_animals_to_file(&path, &animals));

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, render_animals(&animals).unwrap());

    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed[1]["species"], "CAT");
    assert_eq!(parsed[2]["legs"], 4);
}
