#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xkbmon::{GroupIndex, LabelMode, LayoutTracker, TrackerOptions};

/// What a keyboard state source can report.
#[derive(Debug, Arbitrary)]
enum Step {
    Names(Vec<Option<Vec<u8>>>),
    Pairs(Vec<(u8, Vec<u8>)>),
    Group(u8),
}

#[derive(Debug, Arbitrary)]
struct Session {
    full_names: bool,
    steps: Vec<Step>,
}

fuzz_target!(|session: Session| {
    let mut tracker = LayoutTracker::new(TrackerOptions {
        label_mode: if session.full_names {
            LabelMode::Full
        } else {
            LabelMode::Short
        },
        ..Default::default()
    });
    for step in session.steps {
        match step {
            Step::Names(names) => tracker.on_layout_names_list(names),
            Step::Pairs(pairs) => tracker.on_layout_names_changed(
                pairs
                    .into_iter()
                    .filter_map(|(i, name)| Some((GroupIndex::new(usize::from(i)).ok()?, name))),
            ),
            Step::Group(i) => {
                if let Ok(index) = GroupIndex::new(usize::from(i)) {
                    let change = tracker.on_group_index_changed(index);
                    assert_eq!(change.index, index);
                    assert!(!change.label.to_string().is_empty());
                }
            }
        }
    }
});
