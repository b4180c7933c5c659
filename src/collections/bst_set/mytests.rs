use crate::collections::bst_set::*;
use crate::collections::CursorErrorKind;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REP: usize = if cfg!(miri) { 2 } else { 20 };
const N: usize = if cfg!(miri) { 50 } else { 2000 };

fn keys(set: &BstSet) -> Vec<Key> {
    set.iter().copied().collect()
}

fn walk(set: &BstSet) -> Vec<Key> {
    let mut out = Vec::new();
    let mut c = set.begin();
    while c != set.end() {
        out.push(*c.key().unwrap());
        c.move_next().unwrap();
    }
    out
}

#[test]
fn insert_mixed_order_test() {
    let set = BstSet::from([5, 3, 8, 1, 4]);
    set.check();
    assert_eq!(walk(&set), [1, 3, 4, 5, 8]);
}

#[test]
fn erase_found_test() {
    let mut set = BstSet::from([5, 3, 8, 1, 4]);
    set.erase(set.find(3).position()).unwrap();
    set.check();
    assert_eq!(walk(&set), [1, 4, 5, 8]);
}

#[test]
fn insert_twice_test() {
    let mut set = BstSet::new();
    assert!(set.insert(5));
    assert!(!set.insert(5));
    assert_eq!(walk(&set), [5]);
    assert_eq!(set.len(), 1);
}

#[test]
fn insert_descending_test() {
    let mut set = BstSet::new();
    for i in (1..=10).rev() {
        set.insert(i);
    }
    set.check();
    assert_eq!(walk(&set), (1..=10).collect::<Vec<_>>());
    assert_eq!(set.begin().key(), Ok(&1));
}

#[test]
fn empty_set_test() {
    let set = BstSet::new();
    assert!(set.find(42) == set.end());
    assert!(set.begin() == set.end());
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.iter().next(), None);
    set.check();
}

#[test]
fn copy_independent_test() {
    let set = BstSet::from([2, 4, 6]);
    let mut copy = set.clone();
    copy.erase(copy.find(4).position()).unwrap();
    copy.check();
    assert_eq!(walk(&set), [2, 4, 6]);
    assert_eq!(walk(&copy), [2, 6]);

    let mut set = set;
    set.insert(5);
    assert_eq!(walk(&copy), [2, 6]);
}

#[test]
fn copy_empty_test() {
    let set = BstSet::new();
    let copy = set.clone();
    assert!(copy.is_empty());
    copy.check();
}

#[test]
fn clone_extremes_test() {
    let mut rng = StdRng::seed_from_u64(7);
    for _rep in 0..REP {
        let mut set = BstSet::new();
        for _i in 0..100 {
            set.insert(rng.gen_range(-500..500));
        }
        let copy = set.clone();
        copy.check();
        assert_eq!(copy.first(), set.first());
        assert_eq!(copy.last(), set.last());
        assert_eq!(copy, set);
    }
}

#[test]
fn clone_from_test() {
    let mut a = BstSet::from([1, 2, 3]);
    let b = BstSet::from([7, 9]);
    let p = a.find(2).position();
    a.clone_from(&b);
    a.check();
    assert_eq!(keys(&a), [7, 9]);
    assert_eq!(a.cursor(p).unwrap_err().kind(), CursorErrorKind::Stale);
    a.insert(8);
    assert_eq!(keys(&b), [7, 9]);
}

#[test]
fn iter_equal_test() {
    let mut set = BstSet::new();
    set.insert(100);
    let i = set.find(100);
    let j = i;
    assert!(i == j);
    assert!(set.find(100) == set.begin());
}

#[test]
fn iter_not_equal_test() {
    let set = BstSet::from([10, 20]);
    assert!(set.find(10) != set.find(20));
    assert!(set.find(10) != set.end());

    // Same shape, different sets.
    let other = set.clone();
    assert!(set.find(10) != other.find(10));
    assert!(set.end() == other.end());
}

#[test]
fn step_two_test() {
    let mut rng = StdRng::seed_from_u64(1);
    for _rep in 0..REP {
        let a = rng.gen_range(0..100);
        let b = rng.gen_range(0..100);
        let set = BstSet::from([a, b]);
        let (lo, hi) = (a.min(b), a.max(b));

        let mut i = set.find(lo);
        if lo == hi {
            i.move_next().unwrap();
            assert!(i.is_end());
            continue;
        }
        i.move_next().unwrap();
        assert_eq!(i.key(), Ok(&hi));

        let mut j = set.find(hi);
        j.move_prev().unwrap();
        assert_eq!(j.key(), Ok(&lo));
    }
}

#[test]
fn cursor_errors_test() {
    let set = BstSet::from([1, 2, 3]);

    let mut c = set.end();
    assert_eq!(c.key().unwrap_err().kind(), CursorErrorKind::DerefEnd);
    assert_eq!(c.move_next().unwrap_err().kind(), CursorErrorKind::NextAtEnd);
    assert!(c.is_end());

    let mut c = set.begin();
    assert_eq!(c.move_prev().unwrap_err().kind(), CursorErrorKind::PrevAtBegin);
    assert_eq!(c.key(), Ok(&1));

    let empty = BstSet::new();
    let mut c = empty.end();
    assert_eq!(c.move_prev().unwrap_err().kind(), CursorErrorKind::PrevAtBegin);
    assert_eq!(c.move_next().unwrap_err().kind(), CursorErrorKind::NextAtEnd);
}

#[test]
fn end_to_last_test() {
    let set = BstSet::from([4, 2, 9, 7]);
    let mut c = set.end();
    assert_eq!(c.peek_prev(), Some(&9));
    assert_eq!(c.peek_next(), None);
    c.move_prev().unwrap();
    assert_eq!(c.key(), Ok(&9));
    assert_eq!(c.peek_prev(), Some(&7));
    c.move_next().unwrap();
    assert!(c == set.end());
}

#[test]
fn walk_backwards_test() {
    let set = BstSet::from([50, 20, 80, 10, 30, 70, 90, 25, 35]);
    let mut out = Vec::new();
    let mut c = set.end();
    while c.move_prev().is_ok() {
        out.push(*c.key().unwrap());
    }
    assert_eq!(out, [90, 80, 70, 50, 35, 30, 25, 20, 10]);
}

#[test]
fn next_prev_inverse_test() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut set = BstSet::new();
    for _i in 0..200 {
        set.insert(rng.gen_range(0..1000));
    }
    let mut c = set.begin();
    c.move_next().unwrap();
    while c.peek_next().is_some() {
        let mut p = c;
        p.move_prev().unwrap();
        p.move_next().unwrap();
        assert!(p == c);

        let mut n = c;
        n.move_next().unwrap();
        n.move_prev().unwrap();
        assert!(n == c);

        c.move_next().unwrap();
    }
}

#[test]
fn erase_begin_repeatedly_test() {
    let mut set = BstSet::new();
    for i in (1..=10).rev() {
        set.insert(i);
    }
    for i in 2..10 {
        set.erase(set.begin().position()).unwrap();
        set.check();
        assert_eq!(set.begin().key(), Ok(&i));
    }
}

#[test]
fn erase_end_test() {
    let mut set = BstSet::from([1]);
    let e = set.erase(Position::END).unwrap_err();
    assert_eq!(e.kind(), CursorErrorKind::EraseEnd);
    assert_eq!(e.to_string(), "erase at end position");
    assert_eq!(set.len(), 1);
}

#[test]
fn erase_only_element_test() {
    let mut set = BstSet::from([42]);
    set.erase(set.begin().position()).unwrap();
    set.check();
    assert!(set.is_empty());
    assert!(set.begin() == set.end());
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    set.insert(1);
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&1));
}

#[test]
fn erase_two_children_last_test() {
    // 8 is both the successor of 5 and the largest key.
    let mut set = BstSet::from([5, 3, 8]);
    let p8 = set.find(8).position();
    set.erase(set.find(5).position()).unwrap();
    set.check();
    assert_eq!(set.last(), Some(&8));
    assert_eq!(keys(&set), [3, 8]);
    assert_eq!(set.cursor(p8).unwrap_err().kind(), CursorErrorKind::Stale);
    let mut c = set.end();
    c.move_prev().unwrap();
    assert_eq!(c.key(), Ok(&8));
}

#[test]
fn stale_position_test() {
    let mut set = BstSet::from([5, 3, 8]);
    let p3 = set.find(3).position();
    let p8 = set.find(8).position();
    set.erase(p3).unwrap();
    assert_eq!(set.erase(p3).unwrap_err().kind(), CursorErrorKind::Stale);

    // The freed slot is reused, the old position must not see the new key.
    set.insert(4);
    assert_eq!(set.cursor(p3).unwrap_err().kind(), CursorErrorKind::Stale);

    // Unrelated positions survive.
    assert_eq!(set.cursor(p8).unwrap().key(), Ok(&8));
    assert!(set.cursor(Position::END).unwrap().is_end());
}

#[test]
fn stale_position_two_children_test() {
    // 3 has children 1 and 4, so 4's key moves into 3's node.
    let mut set = BstSet::from([5, 3, 8, 1, 4]);
    let p3 = set.find(3).position();
    let p5 = set.find(5).position();
    set.erase(p3).unwrap();
    set.check();
    assert_eq!(keys(&set), [1, 4, 5, 8]);

    assert_eq!(set.erase(p3).unwrap_err().kind(), CursorErrorKind::Stale);
    assert_eq!(set.cursor(p3).unwrap_err().kind(), CursorErrorKind::Stale);
    assert_eq!(keys(&set), [1, 4, 5, 8]);

    // The node that received 4 is reachable through a fresh position.
    let p4 = set.find(4).position();
    assert_eq!(set.cursor(p4).unwrap().key(), Ok(&4));
    assert_eq!(set.cursor(p5).unwrap().key(), Ok(&5));
    set.erase(p4).unwrap();
    set.check();
    assert_eq!(keys(&set), [1, 5, 8]);
}

#[test]
fn remove_and_pop_test() {
    let mut set = BstSet::from([4, 2, 6, 1, 3, 5, 7]);
    assert!(set.remove(4));
    assert!(!set.remove(4));
    set.check();
    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(7));
    set.check();
    assert_eq!(keys(&set), [2, 3, 5, 6]);
    assert_eq!(set.first(), Some(&2));
    assert_eq!(set.last(), Some(&6));
}

#[test]
fn iter_both_ends_test() {
    let set = BstSet::from([3, 1, 4, 5, 9, 2, 6]);
    let mut it = set.iter();
    assert_eq!(it.len(), 7);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&9));
    assert_eq!(it.len(), 5);
    let rest: Vec<_> = it.rev().copied().collect();
    assert_eq!(rest, [6, 5, 4, 3, 2]);
    assert_eq!(set.iter().min(), Some(&1));
    assert_eq!(set.iter().max(), Some(&9));
}

#[test]
fn into_iter_test() {
    let set = BstSet::from([3, 1, 2]);
    let v: Vec<Key> = set.clone().into_iter().collect();
    assert_eq!(v, [1, 2, 3]);
    let v: Vec<Key> = set.into_iter().rev().collect();
    assert_eq!(v, [3, 2, 1]);
}

#[test]
fn retain_test() {
    let mut rng = StdRng::seed_from_u64(11);
    for _rep in 0..REP {
        let mut exp = BstSet::new();
        let mut std_set = std::collections::BTreeSet::new();
        for _i in 0..200 {
            let k = rng.gen_range(0..400);
            exp.insert(k);
            std_set.insert(k);
        }
        let m = rng.gen_range(2..5);
        exp.retain(|k| k % m != 0);
        std_set.retain(|k| k % m != 0);
        exp.check();
        assert!(exp.iter().eq(std_set.iter()));
    }
}

#[test]
fn debug_eq_hash_test() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let a = BstSet::from([2, 1, 3]);
    let b = BstSet::from([1, 2, 3]);
    assert_eq!(format!("{a:?}"), "{1, 2, 3}");
    assert_eq!(format!("{:?}", a.find(2)), "Cursor(2)");
    assert_eq!(format!("{:?}", a.end()), "Cursor(end)");
    assert_eq!(a, b);

    let hash = |s: &BstSet| {
        let mut h = DefaultHasher::new();
        s.hash(&mut h);
        h.finish()
    };
    assert_eq!(hash(&a), hash(&b));
    assert_ne!(a, BstSet::from([1, 2]));
}

#[test]
fn extend_test() {
    let mut set: BstSet = [5, 1].into_iter().collect();
    set.extend(&[3, 5, 7]);
    set.extend(vec![0]);
    assert_eq!(keys(&set), [0, 1, 3, 5, 7]);
}

#[test]
fn clear_test() {
    let mut set: BstSet = (0..100).collect();
    set.clear();
    assert!(set.is_empty());
    set.check();
    set.insert(3);
    assert_eq!(keys(&set), [3]);
}

#[test]
fn exp_random_ops_test() {
    let mut rng = StdRng::seed_from_u64(42);
    for _rep in 0..REP {
        let mut exp = BstSet::new();
        let mut std_set = std::collections::BTreeSet::new();
        for _i in 0..N {
            let k = rng.gen_range(0..(N as i32 / 2));
            if rng.gen_bool(0.6) {
                assert_eq!(exp.insert(k), std_set.insert(k));
            } else {
                let c = exp.find(k);
                assert_eq!(c.is_end(), !std_set.contains(&k));
                if !c.is_end() {
                    let p = c.position();
                    exp.erase(p).unwrap();
                    std_set.remove(&k);
                }
            }
        }
        exp.check();
        assert_eq!(exp.len(), std_set.len());
        assert!(exp.iter().eq(std_set.iter()));
        assert_eq!(exp.first(), std_set.first());
        assert_eq!(exp.last(), std_set.last());
        for k in 0..(N as i32 / 2) {
            assert_eq!(exp.contains(k), std_set.contains(&k));
        }
    }
}

#[test]
fn exp_copy_then_mutate_test() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut set = BstSet::new();
    for _i in 0..N {
        set.insert(rng.gen_range(-1000..1000));
    }
    let before = keys(&set);
    let mut copy = set.clone();
    for _i in 0..N / 2 {
        let k = rng.gen_range(-1000..1000);
        if !copy.remove(k) {
            copy.insert(k);
        }
    }
    copy.check();
    set.check();
    assert_eq!(keys(&set), before);
}

#[test]
fn exp_degenerate_test() {
    // Ascending insert gives a tree with depth equal to its length.
    let n = N as i32 * 5;
    let mut set = BstSet::new();
    for i in 0..n {
        set.insert(i);
    }
    assert_eq!(set.len(), n as usize);
    print_memory();
    let copy = set.clone();
    assert_eq!(copy.last(), Some(&(n - 1)));
    assert!(copy.iter().copied().eq(0..n));
    drop(set);
    drop(copy);
}

#[test]
fn std_degenerate_test() {
    let n = N as i32 * 5;
    let mut set = std::collections::BTreeSet::new();
    for i in 0..n {
        set.insert(i);
    }
    print_memory();
    let copy = set.clone();
    assert!(copy.iter().copied().eq(0..n));
}
