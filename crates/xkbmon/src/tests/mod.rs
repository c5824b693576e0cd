mod tracker;

/// Property test iteration count: more on CI, next to none under Miri.
pub(crate) fn iterations() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        100_000
    } else {
        10_000
    }
}
