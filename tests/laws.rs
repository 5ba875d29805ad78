//! Property-based checks of the algebraic contracts

use proptest::prelude::*;
use tidepool::either::{partition, Either};
use tidepool::{NonEmptyVec, Semigroup, Validation};

fn nonempty(head: i32, tail: Vec<i32>) -> NonEmptyVec<i32> {
    NonEmptyVec::new(head, tail)
}

proptest! {
    #[test]
    fn prop_nonempty_combine_is_associative(
        ha in any::<i32>(), ta in prop::collection::vec(any::<i32>(), 0..10),
        hb in any::<i32>(), tb in prop::collection::vec(any::<i32>(), 0..10),
        hc in any::<i32>(), tc in prop::collection::vec(any::<i32>(), 0..10),
    ) {
        let a = nonempty(ha, ta);
        let b = nonempty(hb, tb);
        let c = nonempty(hc, tc);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_nonempty_combine_length_is_additive(
        ha in any::<i32>(), ta in prop::collection::vec(any::<i32>(), 0..10),
        hb in any::<i32>(), tb in prop::collection::vec(any::<i32>(), 0..10),
    ) {
        let a = nonempty(ha, ta);
        let b = nonempty(hb, tb);
        let (la, lb) = (a.len(), b.len());
        prop_assert_eq!(a.combine(b).len(), la + lb);
    }

    #[test]
    fn prop_vec_combine_is_associative(
        a in prop::collection::vec(any::<i32>(), 0..10),
        b in prop::collection::vec(any::<i32>(), 0..10),
        c in prop::collection::vec(any::<i32>(), 0..10),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_partition_classifies_each_element_once(
        items in prop::collection::vec(any::<Result<i32, String>>(), 0..50)
    ) {
        let eithers: Vec<Either<String, i32>> =
            items.iter().cloned().map(Either::from).collect();
        let total = eithers.len();

        let (ls, rs) = partition(eithers);
        prop_assert_eq!(ls.len() + rs.len(), total);

        // Each sublist preserves the original relative order.
        let expected_ls: Vec<String> =
            items.iter().filter_map(|r| r.clone().err()).collect();
        let expected_rs: Vec<i32> =
            items.iter().filter_map(|r| r.clone().ok()).collect();
        prop_assert_eq!(ls, expected_ls);
        prop_assert_eq!(rs, expected_rs);
    }

    #[test]
    fn prop_accumulation_keeps_every_failure_in_order(
        checks in prop::collection::vec((any::<bool>(), any::<i32>()), 0..30)
    ) {
        let validations: Vec<Validation<i32, NonEmptyVec<String>>> = checks
            .iter()
            .map(|(ok, n)| {
                Validation::condition(*ok, format!("bad {}", n), *n).nel()
            })
            .collect();

        let expected_failures: Vec<String> = checks
            .iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, n)| format!("bad {}", n))
            .collect();

        match Validation::all_vec(validations) {
            Validation::Success(values) => {
                prop_assert!(expected_failures.is_empty());
                let expected: Vec<i32> = checks.iter().map(|(_, n)| *n).collect();
                prop_assert_eq!(values, expected);
            }
            Validation::Failure(errors) => {
                prop_assert_eq!(errors.into_vec(), expected_failures);
            }
        }
    }

    #[test]
    fn prop_validation_map_identity(n in any::<i32>(), ok in any::<bool>()) {
        let v = Validation::<i32, Vec<String>>::condition(ok, vec!["e".to_string()], n);
        prop_assert_eq!(v.clone().map(|x| x), v);
    }
}

#[test]
fn pretty_rendering_is_bit_exact() {
    use tidepool::pretty::render;

    assert_eq!(render(Vec::<i64>::new()), "[]");
    assert_eq!(render(vec![1, 2, 3]), "[1, 2, 3]");
}
