//! Property tests for copy independence and release

use proptest::prelude::*;
use rcwrap::{persist, Array, Format, Object, Text, Wrapper};

#[derive(Debug, Clone)]
enum Op {
    Append(i64),
    Insert(usize, i64),
    Remove(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i64>().prop_map(Op::Append),
        2 => (0usize..8, any::<i64>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn apply(array: &mut Array, op: &Op) {
    match *op {
        Op::Append(v) => array.append(v),
        Op::Insert(i, v) => {
            let _ = array.insert_at(i, v);
        }
        Op::Remove(i) => {
            let _ = array.remove_at(i);
        }
        Op::Clear => array.clear(),
    }
}

fn ints(array: &Array) -> Vec<i64> {
    array.iter().filter_map(Object::as_i64).collect()
}

proptest! {
    #[test]
    fn prop_mutating_a_copy_never_changes_the_original(
        initial in prop::collection::vec(any::<i64>(), 0..8),
        ops in prop::collection::vec(op(), 0..16),
    ) {
        let original: Array = initial.iter().copied().map(Object::integer).collect();
        let snapshot = ints(&original);

        let mut copy = original.clone();
        for op in &ops {
            apply(&mut copy, op);
        }

        prop_assert_eq!(ints(&original), snapshot);
    }

    #[test]
    fn prop_edits_match_vec_model_and_spare_snapshots(
        ops in prop::collection::vec(op(), 0..24),
    ) {
        let mut array = Array::new();
        let mut model: Vec<i64> = Vec::new();
        for op in &ops {
            let keep = array.clone();
            let before = model.clone();
            apply(&mut array, op);
            match *op {
                Op::Append(v) => model.push(v),
                Op::Insert(i, v) if i <= model.len() => model.insert(i, v),
                Op::Remove(i) if i < model.len() => {
                    model.remove(i);
                }
                Op::Clear => model.clear(),
                _ => {}
            }
            prop_assert_eq!(ints(&keep), before);
        }
        prop_assert_eq!(ints(&array), model);
    }

    #[test]
    fn prop_release_returns_exactly_one_reference(copies in 1usize..8) {
        let mut a = Array::new();
        a.append(1);
        let mut clones: Vec<Array> = (0..copies).map(|_| a.clone()).collect();
        prop_assert_eq!(a.share_count(), copies + 1);

        for (released, clone) in clones.iter_mut().enumerate() {
            clone.release();
            clone.release();
            prop_assert_eq!(a.share_count(), copies - released);
        }
    }

    #[test]
    fn prop_text_edits_are_private(base in "[a-z]{0,8}", suffix in "[a-z]{1,4}") {
        let original = Text::from(base.as_str());
        let mut edited = original.clone();
        edited += suffix.as_str();

        prop_assert_eq!(original.as_str(), base.as_str());
        prop_assert_eq!(edited.as_str(), format!("{}{}", base, suffix));
    }

    #[test]
    fn prop_finite_reals_survive_json(values in prop::collection::vec(
        any::<f64>().prop_filter("finite", |v| v.is_finite()),
        1..16,
    )) {
        let original: Array = values.iter().copied().map(Object::real).collect();
        let bytes = persist::encode(&Object::Array(original.clone()), Format::Json).unwrap();
        let (root, _) = persist::decode(&bytes).unwrap();
        prop_assert_eq!(root, Object::Array(original));
    }
}
