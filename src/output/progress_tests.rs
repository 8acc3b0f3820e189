use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = LintProgress::new_with_visibility(100, true, true);
    assert!(progress.progress_bar.is_hidden());
    progress.inc();
    progress.finish();
}

#[test]
fn hidden_without_tty() {
    assert!(
        LintProgress::new_with_visibility(100, false, false)
            .progress_bar
            .is_hidden()
    );
}

#[test]
fn hidden_for_small_runs() {
    assert!(
        LintProgress::new_with_visibility(MIN_VISIBLE_FILES - 1, false, true)
            .progress_bar
            .is_hidden()
    );
}

#[test]
fn clones_share_the_counter() {
    let progress = LintProgress::new(100, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.counter.load(Ordering::Relaxed), 2);
    progress.finish();
}
