use alloc::{string::ToString, vec, vec::Vec};

use rstest::rstest;

use crate::{
    GroupIndex, GroupLabel, LabelMode, LayoutTracker, MAX_GROUPS, TrackerError, TrackerOptions,
};

fn group(index: usize) -> GroupIndex {
    GroupIndex::new(index).unwrap()
}

fn tracker_with(names: &[Option<&[u8]>], options: TrackerOptions) -> LayoutTracker {
    let mut tracker = LayoutTracker::new(options);
    tracker.on_layout_names_list(names.iter().copied());
    tracker
}

#[rstest]
#[case(0, "En")]
#[case(1, "Ру")]
#[case(2, "xy")]
#[case(3, "G3")]
fn reports_short_label_or_fallback(#[case] index: usize, #[case] expected: &str) {
    let mut tracker = tracker_with(
        &[
            Some(b"English (US)"),
            Some("Русская".as_bytes()),
            Some(b"\xFFxy"),
        ],
        TrackerOptions::default(),
    );
    let change = tracker.on_group_index_changed(group(index));
    assert_eq!(change.index, group(index));
    assert_eq!(change.label.to_string(), expected);
}

#[test]
fn unusable_name_falls_back_to_index() {
    let mut tracker = tracker_with(&[Some(b"us"), Some(b"\xE2")], TrackerOptions::default());
    let change = tracker.on_group_index_changed(group(1));
    assert!(change.label.is_fallback());
    assert_eq!(change.label.to_string(), "G1");
}

#[test]
fn group_change_before_any_names_falls_back() {
    let mut tracker = LayoutTracker::default();
    assert_eq!(tracker.current(), None);
    assert_eq!(tracker.current_label(), None);
    assert_eq!(
        tracker.on_group_index_changed(group(0)).label,
        GroupLabel::Fallback {
            prefix: 'G',
            index: group(0)
        }
    );
    assert_eq!(tracker.current(), Some(group(0)));
}

#[test]
fn sequence_counts_group_changes() {
    let mut tracker = tracker_with(&[Some(b"us"), Some(b"de")], TrackerOptions::default());
    let sequences: Vec<u64> = [0, 1, 1, 0]
        .into_iter()
        .map(|index| tracker.on_group_index_changed(group(index)).sequence)
        .collect();
    assert_eq!(sequences, [0, 1, 2, 3]);
}

#[test]
fn reload_replaces_every_slot() {
    let mut tracker = tracker_with(
        &[Some(b"us"), Some(b"de"), Some(b"fr")],
        TrackerOptions::default(),
    );
    tracker.on_layout_names_changed([(group(1), "Ελληνικά")]);

    assert_eq!(tracker.label_for(group(0)).to_string(), "G0");
    assert_eq!(tracker.label_for(group(1)).to_string(), "Ελ");
    assert_eq!(tracker.label_for(group(2)).to_string(), "G2");
}

#[test]
fn reload_is_seen_by_current_group() {
    let mut tracker = tracker_with(&[Some(b"us"), Some(b"de")], TrackerOptions::default());
    let _ = tracker.on_group_index_changed(group(1));
    tracker.on_layout_names_list([Some("pl"), Some("ua")]);
    assert_eq!(tracker.current_label().unwrap().to_string(), "ua");
}

#[test]
fn list_ends_at_first_unused_slot() {
    let tracker = tracker_with(
        &[Some(b"us"), None, Some(b"fr")],
        TrackerOptions::default(),
    );
    assert!(tracker.group_name(group(0)).is_some());
    assert!(tracker.group_name(group(1)).is_none());
    assert!(tracker.group_name(group(2)).is_none());
}

#[test]
fn list_ignores_names_past_last_group() {
    let names = vec![Some("a1"), Some("b2"), Some("c3"), Some("d4"), Some("e5")];
    let mut tracker = LayoutTracker::default();
    tracker.on_layout_names_list(names);
    let labels: Vec<_> = GroupIndex::all()
        .map(|index| tracker.label_for(index).to_string())
        .collect();
    assert_eq!(labels, ["a1", "b2", "c3", "d4"]);
}

#[test]
fn last_duplicate_name_wins() {
    let mut tracker = LayoutTracker::default();
    tracker.on_layout_names_changed([(group(2), "first"), (group(2), "second")]);
    assert_eq!(tracker.label_for(group(2)).to_string(), "se");
}

#[test]
fn full_mode_reports_whole_name() {
    let options = TrackerOptions {
        label_mode: LabelMode::Full,
        ..Default::default()
    };
    let mut tracker = tracker_with(&[Some(b"Eng\xFFlish (US)"), Some(b"\xC0")], options);
    assert_eq!(
        tracker.on_group_index_changed(group(0)).label,
        GroupLabel::Full("English (US)")
    );
    assert_eq!(tracker.on_group_index_changed(group(1)).label.to_string(), "G1");
}

#[test]
fn custom_fallback_prefix() {
    let options = TrackerOptions {
        fallback_prefix: '#',
        ..Default::default()
    };
    let tracker = LayoutTracker::new(options);
    assert_eq!(tracker.label_for(group(2)).to_string(), "#2");
}

#[test]
fn group_name_keeps_both_renderings() {
    let tracker = tracker_with(&[Some("Русская".as_bytes())], TrackerOptions::default());
    let name = tracker.group_name(group(0)).unwrap();
    assert_eq!(name.short().as_str(), "Ру");
    assert_eq!(name.full(), "Русская");
}

#[rstest]
#[case(0, true)]
#[case(3, true)]
#[case(4, false)]
#[case(255, false)]
#[case(256, false)]
fn group_index_bounds(#[case] index: usize, #[case] valid: bool) {
    match GroupIndex::new(index) {
        Ok(g) => {
            assert!(valid);
            assert_eq!(g.get(), index);
        }
        Err(err) => {
            assert!(!valid);
            assert_eq!(
                err,
                TrackerError::GroupIndexOutOfRange {
                    index,
                    max: MAX_GROUPS
                }
            );
        }
    }
}

#[test]
fn group_index_from_u32() {
    assert_eq!(GroupIndex::try_from(2_u32), Ok(group(2)));
    assert!(GroupIndex::try_from(u32::MAX).is_err());
    assert_eq!(
        TrackerError::GroupIndexOutOfRange { index: 7, max: 4 }.to_string(),
        "group index 7 out of range (at most 4 groups)"
    );
}
