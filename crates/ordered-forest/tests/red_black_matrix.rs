use ordered_forest::{Color, RbTree, TreeError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn three_ascending_matrix() {
    let t: RbTree<i32> = [10, 20, 30].into_iter().collect();
    assert_eq!(t.color_of(&20), Some(Color::Black));
    assert_eq!(t.color_of(&10), Some(Color::Red));
    assert_eq!(t.color_of(&30), Some(Color::Red));
    assert_eq!(t.color_of(&40), None);
    assert_eq!(*t.root().unwrap().element(), 20);
}

#[test]
fn remove_minimum_matrix() {
    let mut t: RbTree<i32> = (1..=7).collect();
    t.assert_valid().unwrap();
    assert_eq!(t.first(), Ok(&1));
    assert_eq!(t.remove(&1), Some(1));
    t.assert_valid().unwrap();
    assert_eq!(t.first(), Ok(&2));
    assert_eq!(t.len(), 6);
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut t = RbTree::new();
    for i in 0..300 {
        t.insert(i);
        t.assert_valid().unwrap();
    }
    // 2 * log2(301)
    assert!(t.height() <= 16);

    for i in (0..300).step_by(3) {
        assert_eq!(t.remove(&i), Some(i));
        t.assert_valid().unwrap();
    }
    for i in (0..300).rev() {
        t.remove(&i);
        t.assert_valid().unwrap();
    }
    assert!(t.is_empty());
}

#[test]
fn random_insert_delete_matrix() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<i32> = (0..800).map(|v| v % 250).collect();
    values.shuffle(&mut rng);

    let mut t = RbTree::new();
    for &v in &values {
        t.insert(v);
    }
    t.assert_valid().unwrap();

    values.shuffle(&mut rng);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(t.remove(v), Some(*v));
        if i % 40 == 0 {
            t.assert_valid().unwrap();
        }
    }
    assert!(t.is_empty());
}

#[test]
fn root_stays_black_matrix() {
    let mut t = RbTree::new();
    for v in [5, 4, 3, 2, 1, 0] {
        t.insert(v);
        assert_eq!(t.root().unwrap().color(), Color::Black);
    }
    for v in [3, 5, 0] {
        t.remove(&v);
        assert_eq!(t.root().unwrap().color(), Color::Black);
    }
    t.assert_valid().unwrap();
}

#[test]
fn try_insert_and_empty_matrix() {
    let mut t = RbTree::<u8>::default();
    assert_eq!(t.first(), Err(TreeError::EmptyStructure));
    assert_eq!(
        t.try_insert(None),
        Err(TreeError::InvalidArgument("element is absent"))
    );
    assert!(t.try_insert(Some(9)).is_ok());
    assert_eq!(t.last(), Ok(&9));
    assert_eq!(t.remove(&1), None);
    assert_eq!(t.len(), 1);
}
