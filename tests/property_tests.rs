//! Property-based tests for milestone ordering.
//!
//! These tests use proptest to verify the comparator is a genuine total
//! order with the documented tie-break, and that sorting is deterministic
//! across input permutations.

use std::cmp::Ordering;

use proptest::prelude::*;

use milemark::api::{Milestone, MilestoneState};
use milemark::changelog::milestones::milestone_order;

/// Strategy for ISO-formatted due dates (or none).
fn due_date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => (2000u32..2035, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| Some(format!("{:04}-{:02}-{:02}", y, m, d))),
        1 => Just(None),
    ]
}

/// Strategy for milestone titles.
fn title() -> impl Strategy<Value = String> {
    "[a-z0-9.]{1,8}"
}

/// Strategy for whole milestones.
fn milestone() -> impl Strategy<Value = Milestone> {
    (any::<u64>(), title(), due_date(), any::<bool>()).prop_map(|(id, title, due_date, active)| {
        Milestone {
            id,
            title,
            due_date,
            state: if active {
                MilestoneState::Active
            } else {
                MilestoneState::Closed
            },
        }
    })
}

proptest! {
    /// Comparing in both directions always gives mirrored results.
    #[test]
    fn ordering_is_antisymmetric(a in milestone(), b in milestone()) {
        prop_assert_eq!(milestone_order(&a, &b), milestone_order(&b, &a).reverse());
    }

    /// A milestone compares equal to itself.
    #[test]
    fn ordering_is_reflexive(a in milestone()) {
        prop_assert_eq!(milestone_order(&a, &a), Ordering::Equal);
    }

    /// If a <= b and b <= c then a <= c.
    #[test]
    fn ordering_is_transitive(a in milestone(), b in milestone(), c in milestone()) {
        if milestone_order(&a, &b) != Ordering::Greater
            && milestone_order(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(milestone_order(&a, &c), Ordering::Greater);
        }
    }

    /// The later due date always sorts first, whatever the titles say.
    #[test]
    fn later_due_date_sorts_first(mut a in milestone(), mut b in milestone()) {
        a.due_date = Some("2023-01-15".to_string());
        b.due_date = Some("2023-03-01".to_string());
        prop_assert_eq!(milestone_order(&b, &a), Ordering::Less);
    }

    /// Equal due dates break on title, greater title first.
    #[test]
    fn equal_due_dates_break_on_title(mut a in milestone(), mut b in milestone()) {
        a.due_date = Some("2023-01-15".to_string());
        b.due_date = a.due_date.clone();
        if a.title != b.title {
            let expected = if a.title > b.title {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            prop_assert_eq!(milestone_order(&a, &b), expected);
        }
    }

    /// A dated milestone always precedes an undated one.
    #[test]
    fn dated_sorts_before_undated(mut a in milestone(), mut b in milestone()) {
        a.due_date = Some("2000-01-01".to_string());
        b.due_date = None;
        prop_assert_eq!(milestone_order(&a, &b), Ordering::Less);
    }

    /// Sorting is idempotent: a sorted sequence resorts to itself.
    #[test]
    fn sorting_is_idempotent(mut ms in prop::collection::vec(milestone(), 0..16)) {
        ms.sort_by(milestone_order);
        let once = ms.clone();
        ms.sort_by(milestone_order);
        let titles_once: Vec<_> = once.iter().map(|m| (&m.title, &m.due_date)).collect();
        let titles_twice: Vec<_> = ms.iter().map(|m| (&m.title, &m.due_date)).collect();
        prop_assert_eq!(titles_once, titles_twice);
    }

    /// On distinct (due date, title) keys, the sorted order is independent
    /// of the input permutation.
    #[test]
    fn distinct_keys_sort_permutation_independently(
        ms in prop::collection::vec(milestone(), 0..16)
    ) {
        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<Milestone> = ms
            .into_iter()
            .filter(|m| seen.insert((m.due_date.clone(), m.title.clone())))
            .collect();

        let mut forward = distinct.clone();
        let mut backward: Vec<Milestone> = distinct.into_iter().rev().collect();
        forward.sort_by(milestone_order);
        backward.sort_by(milestone_order);

        let keys_f: Vec<_> = forward.iter().map(|m| (&m.due_date, &m.title)).collect();
        let keys_b: Vec<_> = backward.iter().map(|m| (&m.due_date, &m.title)).collect();
        prop_assert_eq!(keys_f, keys_b);
    }
}
