use bintree::Tree;

/// Sum of a path, or `None` if it overflows `i8` along the way.
fn checked_sum(path: &[&i8]) -> Option<i8> {
    path.iter().try_fold(0i8, |sum, x| sum.checked_add(**x))
}

quickcheck::quickcheck! {
    fn path_sum_matches_enumerated_paths(xs: Vec<i8>, target: i8) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        match tree.paths() {
            Ok(paths) => {
                let expected = paths.iter().any(|path| checked_sum(path) == Some(target));
                tree.has_path_with_sum(target) == Ok(expected)
            }
            Err(_) => xs.is_empty() && tree.has_path_with_sum(target).is_err(),
        }
    }

    fn every_path_sum_is_found(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let Ok(paths) = tree.paths() else {
            return xs.is_empty();
        };

        paths
            .iter()
            .filter_map(|path| checked_sum(path))
            .all(|sum| tree.has_path_with_sum(sum) == Ok(true))
    }
}

#[test]
fn known_path_sum() {
    // 5 -> 4 -> 2 sums to 11.
    let tree = Tree::join(
        5,
        Tree::join(4, Tree::with_root(2), Tree::new()),
        Tree::with_root(10),
    );

    assert_eq!(tree.has_path_with_sum(11), Ok(true));
    assert_eq!(tree.has_path_with_sum(12), Ok(false));
    assert_eq!(tree.has_path_with_sum(15), Ok(true));
}

#[test]
fn paths_of_added_tree() {
    let tree: Tree<i32> = [5, 8, 4, 3, 7, 1, 2, 6].into_iter().collect();
    assert_eq!(tree.paths().map(|paths| paths.len()), Ok(4));
    assert_eq!(
        tree.paths().map(|paths| paths.into_iter().next()),
        Ok(Some(vec![&5, &8, &3, &2]))
    );
    assert_eq!(
        tree.paths().map(|paths| paths.iter().all(|path| path[0] == &5)),
        Ok(true)
    );
}

#[test]
fn overflowing_path_is_not_a_match() {
    let tree = Tree::join(i32::MAX, Tree::with_root(1), Tree::with_root(-1));

    assert_eq!(tree.has_path_with_sum(i32::MIN), Ok(false));
    assert_eq!(tree.has_path_with_sum(i32::MAX - 1), Ok(true));
}
