//! Property-based tests against the copy-everything reference model.

use naive::CopyingList;
use proptest::prelude::*;
use versioned::PersistentArray;
use versioned::PersistentList;
use versioned::VersionId;
use versioned::Versioned;

// =============================================================================
// Test helpers
// =============================================================================

/// A write against some earlier version, chosen by percentage so that it is
/// valid for whatever history has been built so far.
#[derive(Clone, Debug)]
enum WriteOp {
    Set { version_pct: f64, index_pct: f64, value: i32 },
    Append { version_pct: f64, value: i32 },
}

fn arbitrary_write_op() -> impl Strategy<Value = WriteOp> {
    prop_oneof![
        (0.0..1.0f64, 0.0..1.0f64, any::<i32>()).prop_map(|(version_pct, index_pct, value)| {
            WriteOp::Set { version_pct, index_pct, value }
        }),
        (0.0..1.0f64, any::<i32>())
            .prop_map(|(version_pct, value)| WriteOp::Append { version_pct, value }),
    ]
}

fn pick(pct: f64, len: usize) -> usize {
    return ((pct * len as f64) as usize).min(len.saturating_sub(1));
}

fn apply_both(list: &mut PersistentList<i32>, model: &mut CopyingList<i32>, op: &WriteOp) {
    match op {
        WriteOp::Set { version_pct, index_pct, value } => {
            let version = pick(*version_pct, model.version_count());
            let len = model.len(version).unwrap();
            if len == 0 {
                return;
            }
            let index = pick(*index_pct, len);
            let expected = model.set(version, index, *value).unwrap();
            let actual = list.set(VersionId(version), index, *value).unwrap();
            assert_eq!(actual, VersionId(expected));
        }
        WriteOp::Append { version_pct, value } => {
            let version = pick(*version_pct, model.version_count());
            let expected = model.append(version, *value).unwrap();
            let actual = list.append(VersionId(version), *value).unwrap();
            assert_eq!(actual, VersionId(expected));
        }
    }
}

fn assert_matches_generic<S: Versioned<i32>>(seq: &S, model: &CopyingList<i32>) {
    assert_eq!(seq.version_count(), model.version_count());
    assert_eq!(seq.current_version(), VersionId(model.current_version()));
    for version in 0..model.version_count() {
        let expected = model.version(version).unwrap();
        assert_eq!(seq.get_size(VersionId(version)), Ok(expected.len()));
        assert_eq!(seq.to_vec(VersionId(version)).unwrap(), expected);
    }
}

// =============================================================================
// Oracle agreement
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any interleaving of writes from historical versions matches the model.
    #[test]
    fn list_matches_copying_model(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        ops in prop::collection::vec(arbitrary_write_op(), 0..60),
    ) {
        let mut list = PersistentList::new(initial.clone());
        let mut model = CopyingList::new(initial);
        for op in &ops {
            apply_both(&mut list, &mut model, op);
        }
        assert_matches_generic(&list, &model);
    }

    /// Arrays behave like lists restricted to `set`.
    #[test]
    fn array_matches_copying_model(
        initial in prop::collection::vec(any::<i32>(), 1..64),
        writes in prop::collection::vec((0.0..1.0f64, 0.0..1.0f64, any::<i32>()), 0..60),
    ) {
        let mut array = PersistentArray::new(initial.clone());
        let mut model = CopyingList::new(initial.clone());
        for (version_pct, index_pct, value) in writes {
            let version = pick(version_pct, model.version_count());
            let index = pick(index_pct, initial.len());
            let expected = model.set(version, index, value).unwrap();
            prop_assert_eq!(array.set(VersionId(version), index, value), Ok(VersionId(expected)));
        }
        assert_matches_generic(&array, &model);
    }
}

// =============================================================================
// Algebraic properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// get(set(v, j, x), j) == x, sizes match, and every other index is untouched.
    #[test]
    fn set_is_a_point_update(
        values in prop::collection::vec(any::<u16>(), 1..100),
        index_pct in 0.0..1.0f64,
        value in any::<u16>(),
    ) {
        let mut array = PersistentArray::new(values.clone());
        let j = pick(index_pct, values.len());
        let v1 = array.set(VersionId(0), j, value).unwrap();

        prop_assert_eq!(array.get(v1, j), Ok(&value));
        prop_assert_eq!(array.get_size(v1), array.get_size(VersionId(0)));
        for i in 0..values.len() {
            prop_assert_eq!(array.get(VersionId(0), i), Ok(&values[i]));
            if i != j {
                prop_assert_eq!(array.get(v1, i), Ok(&values[i]));
            }
        }
    }

    /// get(append(v, x), size(v)) == x and the size grows by exactly one.
    #[test]
    fn append_adds_one_at_the_end(
        values in prop::collection::vec(any::<u16>(), 0..100),
        value in any::<u16>(),
    ) {
        let mut list = PersistentList::new(values.clone());
        let v1 = list.append(VersionId(0), value).unwrap();
        prop_assert_eq!(list.get_size(v1), Ok(values.len() + 1));
        prop_assert_eq!(list.get(v1, values.len()), Ok(&value));
        prop_assert_eq!(list.to_vec(VersionId(0)).unwrap(), values);
    }

    /// Out-of-range reads fail and never publish.
    #[test]
    fn bad_arguments_publish_nothing(
        values in prop::collection::vec(any::<u8>(), 0..30),
        extra in 0usize..10,
        missing in 1usize..1000,
    ) {
        let mut list = PersistentList::new(values.clone());
        let size = values.len();
        prop_assert!(list.get(VersionId(0), size + extra).is_err());
        prop_assert!(list.set(VersionId(0), size + extra, 0).is_err());
        prop_assert!(list.get(VersionId(missing), 0).is_err());
        prop_assert!(list.append(VersionId(missing), 0).is_err());
        prop_assert_eq!(list.current_version(), VersionId(0));
    }

    /// Appends from any mix of versions keep every tree shallow.
    #[test]
    fn height_stays_logarithmic(
        initial_len in 0usize..50,
        version_pcts in prop::collection::vec(0.0..1.0f64, 1..300),
    ) {
        let mut list: PersistentList<usize> = (0..initial_len).collect();
        for (i, pct) in version_pcts.iter().enumerate() {
            let version = pick(*pct, list.version_count());
            list.append(VersionId(version), i).unwrap();
        }
        for version in 0..list.version_count() {
            let n = list.get_size(VersionId(version)).unwrap();
            if n == 0 {
                continue;
            }
            let log = (usize::BITS - (n - 1).leading_zeros()) as usize;
            prop_assert!(list.height(VersionId(version)).unwrap() <= 2 * log + 1);
        }
    }
}
