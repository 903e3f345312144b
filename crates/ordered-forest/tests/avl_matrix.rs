use ordered_forest::{AvlTree, Height, TreeError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn ascending_insert_matrix() {
    let t: AvlTree<i32> = (1..=7).collect();
    let root = t.root().unwrap();
    assert_eq!(*root.element(), 4);
    assert_eq!(*root.meta(), Height(2));
    assert_eq!(t.height(), 2);

    let mut balanced = true;
    t.dfs_in_order(|n| {
        let l = n.left().map(|c| c.height()).unwrap_or(-1);
        let r = n.right().map(|c| c.height()).unwrap_or(-1);
        balanced &= (l - r).abs() <= 1;
    });
    assert!(balanced);
    t.assert_valid().unwrap();
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut t = AvlTree::new();
    for i in 0..300 {
        t.insert(i);
        t.assert_valid().unwrap();
    }
    assert_eq!(t.len(), 300);
    // 1.44 * log2(300)
    assert!(t.height() <= 11);

    for i in (0..300).step_by(3) {
        assert_eq!(t.remove(&i), Some(i));
        t.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(t.contains(&i), i % 3 != 0, "value {i}");
    }
    assert_eq!(t.len(), 200);
}

#[test]
fn random_insert_delete_matrix() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut values: Vec<i32> = (0..1_000).map(|v| v % 400).collect();
    values.shuffle(&mut rng);

    let mut t = AvlTree::new();
    for &v in &values {
        t.insert(v);
    }
    t.assert_valid().unwrap();

    values.shuffle(&mut rng);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(t.remove(v), Some(*v));
        if i % 50 == 0 {
            t.assert_valid().unwrap();
        }
    }
    assert!(t.is_empty());
    t.assert_valid().unwrap();
}

#[test]
fn rotations_are_refused_matrix() {
    let mut t: AvlTree<i32> = (0..10).collect();
    let before = t.clone();
    let id = t.search(&5).unwrap().id();
    assert_eq!(
        t.rotate_left(id),
        Err(TreeError::UnsupportedOperation(
            "AVL trees cannot be rotated left by callers"
        ))
    );
    assert!(t.rotate_right(id).is_err());
    assert_eq!(t, before);
}

#[test]
fn custom_comparator_matrix() {
    let mut t = AvlTree::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
    for word in ["ccc", "a", "bb", "dddd", "e"] {
        t.insert(word.to_string());
    }
    t.assert_valid().unwrap();
    let lengths: Vec<usize> = t.iter().map(String::len).collect();
    assert_eq!(lengths, vec![1, 1, 2, 3, 4]);
    assert!(t.contains(&"zz".to_string()));
}
