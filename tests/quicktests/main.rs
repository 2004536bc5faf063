//! Properties of the public `Tree` API, checked against plain `Vec`s.

use bintree::{Order, Tree, TreeError};
use quickcheck::{Arbitrary, Gen};

mod paths;

/// Things to do to a tree, mirrored onto a `Vec` holding the same values.
#[derive(Copy, Clone, Debug)]
enum Op {
    Add(i8),
    Remove(i8),
    SetRoot(i8),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Add(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            2 => Op::SetRoot(i8::arbitrary(g)),
            3 => Op::Clear,
            _ => unreachable!(),
        }
    }
}

/// Applies `ops` to a tree and a `Vec` of the values it should contain.
fn do_ops(ops: &[Op]) -> (Tree<i8>, Vec<i8>) {
    let mut tree = Tree::new();
    let mut values = Vec::new();

    for op in ops {
        match *op {
            Op::Add(x) => {
                assert!(tree.add(x));
                values.push(x);
            }
            Op::Remove(x) => {
                let expected = values.iter().position(|v| *v == x);
                assert_eq!(tree.remove(&x), expected.is_some());
                if let Some(pos) = expected {
                    values.swap_remove(pos);
                }
            }
            Op::SetRoot(x) => {
                match tree.root_value() {
                    Ok(old) => {
                        let pos = values.iter().position(|v| v == old).unwrap();
                        values[pos] = x;
                    }
                    Err(_) => values.push(x),
                }
                tree.set_root_value(x);
            }
            Op::Clear => {
                tree.clear();
                values.clear();
            }
        }
    }

    (tree, values)
}

fn sorted(mut xs: Vec<i8>) -> Vec<i8> {
    xs.sort_unstable();
    xs
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
        let (tree, values) = do_ops(&ops);
        let in_tree: Vec<i8> = tree.values(Order::Pre).into_iter().copied().collect();

        tree.count() == values.len()
            && tree.is_empty() == values.is_empty()
            && sorted(in_tree) == sorted(values)
    }

    fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let expected = sorted(xs);

        [Order::Pre, Order::In, Order::Post].into_iter().all(|order| {
            sorted(tree.values(order).into_iter().copied().collect()) == expected
        })
    }

    fn contains_added(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        xs.iter().all(|x| tree.contains(x) && tree.find(x) == Ok(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.contains(x) && tree.find(x) == Err(TreeError::NotFound))
    }

    fn remove_missing_keeps_count(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before = tree.count();
        !tree.remove(&missing) && tree.count() == before
    }

    fn clone_is_independent(xs: Vec<i8>, extra: i8) -> bool {
        let original: Tree<i8> = xs.iter().copied().collect();
        let mut copy = original.clone();
        copy.add(extra);

        original.count() == xs.len() && copy.count() == xs.len() + 1
    }
}

#[test]
fn empty_tree_errors() {
    let tree = Tree::<i32>::new();

    assert!(matches!(tree.root_value(), Err(TreeError::PreconditionViolated(_))));
    assert!(matches!(tree.max(), Err(TreeError::PreconditionViolated(_))));
    assert!(matches!(tree.min(), Err(TreeError::PreconditionViolated(_))));
    assert!(matches!(tree.paths(), Err(TreeError::PreconditionViolated(_))));
    assert!(matches!(
        tree.has_path_with_sum(0),
        Err(TreeError::PreconditionViolated(_))
    ));
    assert_eq!(tree.find(&1), Err(TreeError::NotFound));
    assert!(!tree.contains(&1));
}

#[test]
fn demo_sequence() {
    let mut tree: Tree<i32> = [5, 8, 4, 3, 7, 1, 2, 6].into_iter().collect();
    assert_eq!(tree.max(), Ok(&8));
    assert_eq!(tree.min(), Ok(&1));
    assert!(!tree.is_bst());

    let inorder: Vec<i32> = tree.values(Order::In).into_iter().copied().collect();
    tree.mirror();
    tree.mirror();
    assert_eq!(tree.values(Order::In).into_iter().copied().collect::<Vec<_>>(), inorder);
}

#[test]
fn explicit_bst_shapes() {
    let leaf = Tree::with_root;
    let bst = Tree::join(
        5,
        Tree::join(3, leaf(1), leaf(4)),
        Tree::join(8, leaf(7), leaf(9)),
    );
    assert!(bst.is_bst());

    // 1 and 9 swapped.
    let swapped = Tree::join(
        5,
        Tree::join(3, leaf(9), leaf(4)),
        Tree::join(8, leaf(7), leaf(1)),
    );
    assert!(!swapped.is_bst());

    let left_one_larger = Tree::join(5, leaf(6), Tree::new());
    assert!(left_one_larger.is_bst());
}
