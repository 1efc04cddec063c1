use image_carousel_wasm::application::LaunchSequence;

#[test]
fn newest_launch_wins() {
    let mut launches = LaunchSequence::new();
    let first = launches.begin();
    let second = launches.begin();
    assert!(!launches.is_current(first));
    assert!(launches.is_current(second));
}

#[test]
fn stop_during_launch_invalidates_it() {
    let mut launches = LaunchSequence::new();
    let pending = launches.begin();
    launches.cancel();
    assert!(!launches.is_current(pending));

    let restarted = launches.begin();
    assert!(launches.is_current(restarted));
}

#[test]
fn overlapping_starts_leave_one_winner() {
    // Each start cancels what is running before taking its ticket
    let mut launches = LaunchSequence::new();
    launches.cancel();
    let autostart = launches.begin();
    launches.cancel();
    let manual = launches.begin();

    let winners = [autostart, manual].into_iter().filter(|t| launches.is_current(*t)).count();
    assert_eq!(winners, 1);
    assert!(launches.is_current(manual));
}
