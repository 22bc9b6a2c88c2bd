//! Tests for per-strategy progress bars

#[cfg(test)]
mod tests {
    use bucketfill::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests ProgressManager construction and cleanup without bars
    // Verified by clearing a missing display in finish
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();

        pm.advance(0);
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating bars in default
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();

        pm.complete(0, Duration::ZERO);
        pm.finish();
    }

    // Tests reinitializing replaces the bars of an earlier comparison
    // Verified by appending bars instead of replacing
    #[test]
    fn test_initialize_replaces_bars() {
        let mut pm = ProgressManager::new();

        pm.initialize(&["recursive", "frontier", "row-span", "range-span"], 3);
        pm.advance(3);
        pm.initialize(&["frontier"], 1);
        pm.advance(0);
        pm.complete(0, Duration::from_millis(1));
        pm.finish();
    }

    // Tests updates on valid and invalid indices do not panic
    // Verified by indexing bars directly
    #[test]
    fn test_updates_ignore_unknown_index() {
        let mut pm = ProgressManager::new();
        pm.initialize(&["recursive", "frontier"], 2);

        pm.advance(0);
        pm.advance(0);
        pm.advance(7);
        pm.complete(0, Duration::from_millis(3));
        pm.abandon(1, "stack budget exhausted");
        pm.complete(9, Duration::ZERO);
        pm.finish();
    }
}
