#![allow(dead_code)]

pub use arbor::*;
use itertools::Itertools;
use rand::{self, Rng};
use std::collections::BTreeMap;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Find { key: i32 },
    Insert { key: i32, value: i32 },
    Remove { key: i32 },
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Found(i32),
    Inserted,
    Removed(i32),
    Rejected(TreeError<i32>),
}

pub const KEY_RANGE: i32 = 300;
const MAX_VALUE: i32 = 1000;

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let key = rng.gen_range(-KEY_RANGE..KEY_RANGE);
    match rng.gen_range(0..3) {
        0 => Find { key },
        1 => Insert {
            key,
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        2 => Remove { key },
        _ => panic!(),
    }
}

/// Runs the action on the tree, checking the result against the model.
/// If `splays` is set, also checks that a successfully accessed or inserted key
/// ended up at the root.
pub fn run_round<C, H>(
    round_action: &RoundAction,
    tree: &mut OrderedTree<i32, i32, C, H>,
    model: &mut BTreeMap<i32, i32>,
    splays: bool,
) -> RoundResult
where
    C: Comparator<i32>,
    H: TreeHooks<i32, i32>,
{
    use RoundAction::*;
    use RoundResult::*;

    let res = match *round_action {
        Find { key } => match tree.find(&key) {
            Ok(value) => Found(*value),
            Err(err) => Rejected(err),
        },
        Insert { key, value } => match tree.insert(key, value) {
            Ok(()) => Inserted,
            Err(err) => Rejected(err),
        },
        Remove { key } => match tree.remove(&key) {
            Ok(value) => Removed(value),
            Err(err) => Rejected(err),
        },
    };

    let expected = match *round_action {
        Find { key } => match model.get(&key) {
            Some(value) => Found(*value),
            None => Rejected(TreeError::NotFound(key)),
        },
        Insert { key, value } => {
            if model.contains_key(&key) {
                Rejected(TreeError::AlreadyExists(key))
            } else {
                model.insert(key, value);
                Inserted
            }
        }
        Remove { key } => match model.remove(&key) {
            Some(value) => Removed(value),
            None => Rejected(TreeError::NotFound(key)),
        },
    };
    assert_eq!(res, expected);

    if splays {
        match (round_action, &res) {
            (Find { key }, Found(_)) | (Insert { key, .. }, Inserted) => {
                assert_eq!(tree.root().map(|(k, _)| *k), Some(*key));
            }
            _ => {}
        }
    }
    res
}

/// Checks the tree holds exactly the model's content, in order.
pub fn assert_same_content<C, H>(tree: &OrderedTree<i32, i32, C, H>, model: &BTreeMap<i32, i32>)
where
    C: Comparator<i32>,
    H: TreeHooks<i32, i32>,
{
    tree.assert_correctness();
    assert_eq!(tree.len(), model.len());
    assert!(tree.iter().map(|(k, _)| *k).tuple_windows().all(|(a, b)| a < b));
    assert!(tree.iter().map(|(k, v)| (*k, *v)).eq(model.iter().map(|(k, v)| (*k, *v))));
}

/// Collects the keys in order.
pub fn keys<C, H>(tree: &OrderedTree<i32, i32, C, H>) -> Vec<i32> {
    tree.iter().map(|(k, _)| *k).collect()
}

pub fn check_consistency<H>(num_rounds: u32, splays: bool)
where
    H: TreeHooks<i32, i32> + Default,
{
    let mut rng = rand::thread_rng();
    let mut tree: OrderedTree<i32, i32, NaturalOrder, H> = OrderedTree::new();
    let mut model = BTreeMap::new();

    for round in 0..num_rounds {
        let round_action = random_round_action(&mut rng);
        run_round(&round_action, &mut tree, &mut model, splays);
        // This check takes `O(n)` time. However, the trees in these tests stay
        // smaller than `2 * KEY_RANGE`, so it doesn't take too long.
        if round % 16 == 0 {
            assert_same_content(&tree, &model);
        }
    }
    assert_same_content(&tree, &model);
}

pub fn check_delete<H>()
where
    H: TreeHooks<i32, i32> + Default,
{
    let arr: Vec<_> = (0..300).collect();
    for i in 0..arr.len() {
        let mut tree: OrderedTree<i32, i32, NaturalOrder, H> =
            arr.iter().map(|x| (*x, *x * 2)).collect();
        assert_eq!(tree.remove(&arr[i]), Ok(arr[i] * 2));
        tree.assert_correctness();
        assert_eq!(
            keys(&tree),
            arr[..i]
                .iter()
                .chain(arr[i + 1..].iter())
                .cloned()
                .collect::<Vec<_>>()
        );
    }
}

pub fn check_insert<H>()
where
    H: TreeHooks<i32, i32> + Default,
{
    let arr: Vec<_> = (0..300).map(|x| x * 2).collect();
    for i in 0..=arr.len() {
        let new_key = 2 * i as i32 - 1;
        let mut tree: OrderedTree<i32, i32, NaturalOrder, H> =
            arr.iter().map(|x| (*x, 0)).collect();
        assert_eq!(tree.insert(new_key, 13), Ok(()));
        assert_eq!(tree.peek(&new_key), Some(&13));
        tree.assert_correctness();
        assert_eq!(
            keys(&tree),
            arr[..i]
                .iter()
                .chain([new_key].iter())
                .chain(arr[i..].iter())
                .cloned()
                .collect::<Vec<_>>()
        );
    }
}
