//! Operations that read a sequence and return a new value.
//!
//! The input slice is never modified. Results that contain elements of the
//! input hold clones of them (`clone_shallow` semantics); the reordering
//! helpers (`to_sorted`, `to_shuffled`, ...) clone first and then run the
//! matching in-place operation from [`crate::mutable`] on the copy.

use std::hash::Hash;

use rand::Rng;

use crate::error::{ListError, Result};
use crate::mutable::{
    reverse, shuffle, shuffle_rng, sort, sort_unstable, uniquify, uniquify_hashed,
};

/// Index reported by the search functions when nothing matches.
pub const NOT_FOUND: isize = -1;

/// Outcome of a `find*` call.
///
/// When nothing matched, `index` is [`NOT_FOUND`] and `value` is
/// `T::default()`. Check `index` (or [`Found::position`]) rather than
/// `value`: a default-valued element can be a genuine match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Found<T> {
    pub value: T,
    pub index: isize,
}

impl<T> Found<T> {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.index != NOT_FOUND
    }

    #[inline]
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }

    pub fn into_option(self) -> Option<(T, usize)> {
        let index = self.position()?;
        Some((self.value, index))
    }
}

#[inline]
fn sentinel(position: Option<usize>) -> isize {
    // Slice indices of sized elements never exceed isize::MAX.
    position.map_or(NOT_FOUND, |index| index as isize)
}

fn found<A: Clone + Default>(list: &[A], position: Option<usize>) -> Found<A> {
    match position {
        Some(index) => Found {
            value: list[index].clone(),
            index: index as isize,
        },
        None => Found {
            value: A::default(),
            index: NOT_FOUND,
        },
    }
}

pub fn to_filtered<A: Clone, F: FnMut(&A) -> bool>(list: &[A], mut predicate: F) -> Vec<A> {
    list.iter().filter(|item| predicate(*item)).cloned().collect()
}

pub fn to_filtered_indexed<A: Clone, F: FnMut(&A, usize) -> bool>(
    list: &[A],
    mut predicate: F,
) -> Vec<A> {
    list.iter()
        .enumerate()
        .filter(|&(i, item)| predicate(item, i))
        .map(|(_, item)| item.clone())
        .collect()
}

pub fn map<A, B, F: FnMut(&A) -> B>(list: &[A], f: F) -> Vec<B> {
    list.iter().map(f).collect()
}

pub fn map_indexed<A, B, F: FnMut(&A, usize) -> B>(list: &[A], mut f: F) -> Vec<B> {
    list.iter().enumerate().map(|(i, item)| f(item, i)).collect()
}

pub fn flat_map<A, B, I, F>(list: &[A], f: F) -> Vec<B>
where
    I: IntoIterator<Item = B>,
    F: FnMut(&A) -> I,
{
    list.iter().flat_map(f).collect()
}

pub fn flat_map_indexed<A, B, I, F>(list: &[A], mut f: F) -> Vec<B>
where
    I: IntoIterator<Item = B>,
    F: FnMut(&A, usize) -> I,
{
    list.iter()
        .enumerate()
        .flat_map(|(i, item)| f(item, i))
        .collect()
}

/// Maps every element and drops the `None` results.
pub fn map_not_null<A, B, F: FnMut(&A) -> Option<B>>(list: &[A], f: F) -> Vec<B> {
    list.iter().filter_map(f).collect()
}

pub fn map_not_null_indexed<A, B, F: FnMut(&A, usize) -> Option<B>>(
    list: &[A],
    mut f: F,
) -> Vec<B> {
    list.iter()
        .enumerate()
        .filter_map(|(i, item)| f(item, i))
        .collect()
}

/// Flat-maps every element and drops the `None` entries of each batch.
pub fn flat_map_not_null<A, B, I, F>(list: &[A], f: F) -> Vec<B>
where
    I: IntoIterator<Item = Option<B>>,
    F: FnMut(&A) -> I,
{
    list.iter().flat_map(f).flatten().collect()
}

pub fn flat_map_not_null_indexed<A, B, I, F>(list: &[A], mut f: F) -> Vec<B>
where
    I: IntoIterator<Item = Option<B>>,
    F: FnMut(&A, usize) -> I,
{
    list.iter()
        .enumerate()
        .flat_map(|(i, item)| f(item, i))
        .flatten()
        .collect()
}

/// Left fold seeded with the first element: `f(f(f(e0, e1), e2), e3)...`.
///
/// Fails with [`ListError::Empty`] on an empty slice.
pub fn reduce<A: Clone, F: FnMut(A, &A) -> A>(list: &[A], f: F) -> Result<A> {
    let Some((first, rest)) = list.split_first() else {
        tracing::debug!("reduce over an empty sequence");
        return Err(ListError::Empty);
    };
    Ok(rest.iter().fold(first.clone(), f))
}

/// [`reduce`] whose callback also gets the index of the element being
/// folded in, starting at 1.
pub fn reduce_indexed<A: Clone, F: FnMut(A, &A, usize) -> A>(list: &[A], mut f: F) -> Result<A> {
    let Some((first, rest)) = list.split_first() else {
        tracing::debug!("reduce over an empty sequence");
        return Err(ListError::Empty);
    };
    Ok(rest
        .iter()
        .enumerate()
        .fold(first.clone(), |acc, (i, item)| f(acc, item, i + 1)))
}

pub fn fold<A, B, F: FnMut(B, &A) -> B>(list: &[A], initial: B, f: F) -> B {
    list.iter().fold(initial, f)
}

pub fn fold_indexed<A, B, F: FnMut(B, &A, usize) -> B>(list: &[A], initial: B, mut f: F) -> B {
    list.iter()
        .enumerate()
        .fold(initial, |acc, (i, item)| f(acc, item, i))
}

/// New backing storage holding clones of the elements.
pub fn clone_shallow<A: Clone>(list: &[A]) -> Vec<A> {
    list.to_vec()
}

pub fn to_reversed<A: Clone>(list: &[A]) -> Vec<A> {
    let mut out = clone_shallow(list);
    reverse(&mut out);
    out
}

pub fn to_sorted<A: Clone, F: FnMut(&A, &A) -> bool>(list: &[A], less: F) -> Vec<A> {
    let mut out = clone_shallow(list);
    sort(&mut out, less);
    out
}

pub fn to_sorted_unstable<A: Clone, F: FnMut(&A, &A) -> bool>(list: &[A], less: F) -> Vec<A> {
    let mut out = clone_shallow(list);
    sort_unstable(&mut out, less);
    out
}

pub fn to_shuffled<A: Clone>(list: &[A]) -> Vec<A> {
    let mut out = clone_shallow(list);
    shuffle(&mut out);
    out
}

pub fn to_shuffled_rng<A: Clone, R: Rng + ?Sized>(list: &[A], rng: &mut R) -> Vec<A> {
    let mut out = clone_shallow(list);
    shuffle_rng(&mut out, rng);
    out
}

pub fn to_uniquified<A: Clone + PartialEq>(list: &[A]) -> Vec<A> {
    let mut out = clone_shallow(list);
    uniquify(&mut out);
    out
}

pub fn to_uniquified_hashed<A: Clone + Hash + Eq>(list: &[A]) -> Vec<A> {
    let mut out = clone_shallow(list);
    uniquify_hashed(&mut out);
    out
}

pub fn find<A: Clone + Default, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> Found<A> {
    find_first(list, predicate)
}

pub fn find_first<A: Clone + Default, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> Found<A> {
    found(list, list.iter().position(predicate))
}

pub fn find_first_indexed<A: Clone + Default, F: FnMut(&A, usize) -> bool>(
    list: &[A],
    predicate: F,
) -> Found<A> {
    found(list, first_position_indexed(list, predicate))
}

pub fn find_last<A: Clone + Default, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> Found<A> {
    found(list, list.iter().rposition(predicate))
}

pub fn find_last_indexed<A: Clone + Default, F: FnMut(&A, usize) -> bool>(
    list: &[A],
    predicate: F,
) -> Found<A> {
    found(list, last_position_indexed(list, predicate))
}

fn first_position_indexed<A, F: FnMut(&A, usize) -> bool>(
    list: &[A],
    mut predicate: F,
) -> Option<usize> {
    list.iter()
        .enumerate()
        .find(|&(i, item)| predicate(item, i))
        .map(|(i, _)| i)
}

fn last_position_indexed<A, F: FnMut(&A, usize) -> bool>(
    list: &[A],
    mut predicate: F,
) -> Option<usize> {
    list.iter()
        .enumerate()
        .rev()
        .find(|&(i, item)| predicate(item, i))
        .map(|(i, _)| i)
}

pub fn find_index<A, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> isize {
    find_first_index(list, predicate)
}

pub fn find_first_index<A, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> isize {
    sentinel(list.iter().position(predicate))
}

pub fn find_first_index_indexed<A, F: FnMut(&A, usize) -> bool>(list: &[A], predicate: F) -> isize {
    sentinel(first_position_indexed(list, predicate))
}

pub fn find_last_index<A, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> isize {
    sentinel(list.iter().rposition(predicate))
}

pub fn find_last_index_indexed<A, F: FnMut(&A, usize) -> bool>(list: &[A], predicate: F) -> isize {
    sentinel(last_position_indexed(list, predicate))
}

pub fn first_index_of<A: PartialEq>(list: &[A], element: &A) -> isize {
    sentinel(list.iter().position(|item| item == element))
}

pub fn last_index_of<A: PartialEq>(list: &[A], element: &A) -> isize {
    sentinel(list.iter().rposition(|item| item == element))
}

pub fn index_of<A: PartialEq>(list: &[A], element: &A) -> isize {
    first_index_of(list, element)
}

pub fn contains<A: PartialEq>(list: &[A], element: &A) -> bool {
    first_index_of(list, element) != NOT_FOUND
}

/// `true` if any element matches; `false` for an empty slice.
pub fn some<A, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> bool {
    list.iter().any(predicate)
}

pub fn some_indexed<A, F: FnMut(&A, usize) -> bool>(list: &[A], predicate: F) -> bool {
    first_position_indexed(list, predicate).is_some()
}

/// `true` if every element matches; vacuously `true` for an empty slice.
pub fn every<A, F: FnMut(&A) -> bool>(list: &[A], predicate: F) -> bool {
    list.iter().all(predicate)
}

pub fn every_indexed<A, F: FnMut(&A, usize) -> bool>(list: &[A], mut predicate: F) -> bool {
    list.iter().enumerate().all(|(i, item)| predicate(item, i))
}

/// Pairs elements by position, stopping at the end of the shorter slice.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

pub fn zip_indexed<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B, usize)> {
    a.iter()
        .cloned()
        .zip(b.iter().cloned())
        .enumerate()
        .map(|(i, (x, y))| (x, y, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn filters() {
        let list = [1, 2, 3, 4, 5, 6];
        assert_eq!(to_filtered(&list, |x| x % 2 == 0), [2, 4, 6]);
        assert_eq!(to_filtered_indexed(&list, |_, i| i < 2), [1, 2]);
        assert!(to_filtered(&list, |_| false).is_empty());
        assert_eq!(list, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn filter_splits_into_complementary_parts() {
        let list: Vec<u32> = (0..37).map(|x| (x * 7919) % 101).collect();
        let is_small = |x: &u32| *x < 50;
        let small = to_filtered(&list, is_small);
        let large = to_filtered(&list, |x| !is_small(x));
        assert_eq!(small.len() + large.len(), list.len());

        let mut joined = [small, large].concat();
        joined.sort_unstable();
        let mut expected = list.clone();
        expected.sort_unstable();
        assert_eq!(joined, expected);
    }

    #[test]
    fn maps() {
        let words = ["a", "b", "c"];
        assert_eq!(map(&words, |w| format!("{w}.")), ["a.", "b.", "c."]);
        assert_eq!(map_indexed(&words, |w, i| format!("{i}{w}")), ["0a", "1b", "2c"]);

        let empty: [u8; 0] = [];
        assert!(map(&empty, |x| *x).is_empty());
    }

    #[test]
    fn flat_maps() {
        let list = [1_usize, 2, 3];
        assert_eq!(flat_map(&list, |&x| vec![x; x]), [1, 2, 2, 3, 3, 3]);
        assert_eq!(
            flat_map_indexed(&list, |&x, i| [x * 10, i]),
            [10, 0, 20, 1, 30, 2]
        );
    }

    #[test]
    fn not_null_maps_skip_absent_results() {
        let raw = ["1", "x", "3", ""];
        assert_eq!(map_not_null(&raw, |s| s.parse::<i32>().ok()), [1, 3]);
        assert_eq!(
            map_not_null_indexed(&raw, |s, i| (!s.is_empty()).then_some(i)),
            [0, 1, 2]
        );

        let list = [1, 2, 3];
        assert_eq!(
            flat_map_not_null(&list, |&x| [Some(x), None, (x > 1).then_some(-x)]),
            [1, 2, -2, 3, -3]
        );
        assert_eq!(
            flat_map_not_null_indexed(&list, |&x, i| vec![(i != 1).then_some(x)]),
            [1, 3]
        );
    }

    #[test]
    fn reduce_folds_left_to_right() {
        let parts = ["a", "b", "c", "d"].map(String::from);
        let joined = reduce(&parts, |acc, s| format!("({acc}{s})")).unwrap();
        assert_eq!(joined, "(((ab)c)d)");

        assert_eq!(reduce(&[7], |acc, x| acc - x), Ok(7));
        assert_eq!(reduce(&[10, 3, 2], |acc, x| acc - x), Ok(5));

        let mut indices = Vec::new();
        let sum = reduce_indexed(&[5, 6, 7], |acc, x, i| {
            indices.push(i);
            acc + x
        });
        assert_eq!(sum, Ok(18));
        assert_eq!(indices, [1, 2]);
    }

    #[test]
    fn reduce_on_empty_fails() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(&empty, |acc, x| acc + x), Err(ListError::Empty));
        assert_eq!(
            reduce_indexed(&empty, |acc, x, _| acc + x),
            Err(ListError::Empty)
        );
    }

    #[test]
    fn folds() {
        let list = [1, 2, 3, 4];
        assert_eq!(fold(&list, 0, |acc, x| acc + x), 10);
        assert_eq!(
            fold(&list, String::new(), |acc, x| format!("{acc}{x}")),
            "1234"
        );
        assert_eq!(fold_indexed(&list, 0, |acc, x, i| acc + x * i as i32), 20);

        let empty: [i32; 0] = [];
        assert_eq!(fold(&empty, 42, |acc, x| acc + x), 42);
        assert_eq!(fold_indexed(&empty, 42, |acc, x, _| acc + x), 42);
    }

    #[test]
    fn clone_shallow_shares_elements_not_storage() {
        let shared = Rc::new(5);
        let original = vec![Rc::clone(&shared), Rc::new(6)];
        let mut copy = clone_shallow(&original);
        assert!(Rc::ptr_eq(&copy[0], &original[0]));

        copy.push(Rc::new(7));
        copy.swap(0, 1);
        assert_eq!(original.len(), 2);
        assert!(Rc::ptr_eq(&original[0], &shared));
    }

    #[test]
    fn reordering_copies() {
        let list = [3, 1, 2, 3, 1];
        assert_eq!(to_reversed(&list), [1, 3, 2, 1, 3]);
        assert_eq!(to_reversed(&to_reversed(&list)), list);
        assert_eq!(to_sorted(&list, |a, b| a < b), [1, 1, 2, 3, 3]);
        assert_eq!(to_sorted_unstable(&list, |a, b| a > b), [3, 3, 2, 1, 1]);
        assert_eq!(to_uniquified(&list), [3, 1, 2]);
        assert_eq!(to_uniquified_hashed(&list), [3, 1, 2]);

        let shuffled = to_shuffled_rng(&list, &mut StdRng::seed_from_u64(9));
        assert_eq!(to_sorted(&shuffled, |a, b| a < b), [1, 1, 2, 3, 3]);
        let again = to_shuffled_rng(&list, &mut StdRng::seed_from_u64(9));
        assert_eq!(shuffled, again);
        assert_eq!(to_shuffled(&list).len(), list.len());

        assert_eq!(list, [3, 1, 2, 3, 1]);
    }

    #[test]
    fn find_reports_value_and_index() {
        let list = [5, 3, 8, 3];
        assert_eq!(find_first(&list, |&x| x == 3), Found { value: 3, index: 1 });
        assert_eq!(find(&list, |&x| x == 3), Found { value: 3, index: 1 });
        assert_eq!(find_last(&list, |&x| x == 3), Found { value: 3, index: 3 });
        assert_eq!(
            find_first_indexed(&list, |&x, i| x == 3 && i > 1),
            Found { value: 3, index: 3 }
        );
        assert_eq!(
            find_last_indexed(&list, |_, i| i < 2),
            Found { value: 3, index: 1 }
        );
    }

    #[test]
    fn find_misses_use_sentinel() {
        let list = [5, 3, 8, 3];
        let missing = find_first(&list, |&x| x == 9);
        assert_eq!(missing, Found { value: 0, index: NOT_FOUND });
        assert!(!missing.is_found());
        assert_eq!(missing.position(), None);
        assert_eq!(missing.into_option(), None);
        assert_eq!(find_last(&list, |&x| x == 9).index, NOT_FOUND);

        // A default-valued match is told apart by its index.
        let zeros = [1, 0];
        let hit = find_first(&zeros, |&x| x == 0);
        assert_eq!(hit.value, 0);
        assert_eq!(hit.position(), Some(1));
        assert_eq!(hit.into_option(), Some((0, 1)));

        let empty: [String; 0] = [];
        let miss = find_first(&empty, |_| true);
        assert_eq!(miss.value, "");
        assert_eq!(miss.index, NOT_FOUND);
    }

    #[test]
    fn index_searches() {
        let list = ['a', 'b', 'a', 'c'];
        assert_eq!(find_index(&list, |&c| c == 'a'), 0);
        assert_eq!(find_first_index(&list, |&c| c == 'c'), 3);
        assert_eq!(find_last_index(&list, |&c| c == 'a'), 2);
        assert_eq!(find_first_index_indexed(&list, |&c, i| c == 'a' && i > 0), 2);
        assert_eq!(find_last_index_indexed(&list, |_, i| i == 1), 1);
        assert_eq!(find_first_index(&list, |&c| c == 'z'), NOT_FOUND);
        assert_eq!(find_last_index_indexed(&list, |_, i| i > 9), NOT_FOUND);

        assert_eq!(first_index_of(&list, &'a'), 0);
        assert_eq!(last_index_of(&list, &'a'), 2);
        assert_eq!(index_of(&list, &'b'), 1);
        assert_eq!(index_of(&list, &'z'), NOT_FOUND);
        assert_eq!(last_index_of(&list, &'z'), NOT_FOUND);

        assert!(contains(&list, &'c'));
        assert!(!contains(&list, &'z'));
        assert!(!contains(&[] as &[char], &'a'));
    }

    #[test]
    fn quantifiers() {
        let list = [2, 4, 6];
        assert!(every(&list, |x| x % 2 == 0));
        assert!(!some(&list, |x| x % 2 == 1));
        assert!(some(&list, |&x| x == 4));
        assert!(some_indexed(&list, |&x, i| x == 6 && i == 2));
        assert!(!every_indexed(&list, |_, i| i < 2));

        let empty: [i32; 0] = [];
        assert!(every(&empty, |_| false));
        assert!(every_indexed(&empty, |_, _| false));
        assert!(!some(&empty, |_| true));
        assert!(!some_indexed(&empty, |_, _| true));
    }

    #[test]
    fn quantifiers_short_circuit() {
        let mut calls = 0;
        assert!(some(&[1, 2, 3, 4], |&x| {
            calls += 1;
            x == 2
        }));
        assert_eq!(calls, 2);

        calls = 0;
        assert!(!every(&[1, 2, 3, 4], |&x| {
            calls += 1;
            x < 2
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn zip_truncates_to_shorter() {
        assert_eq!(zip(&[1, 2, 3], &["a", "b"]), [(1, "a"), (2, "b")]);
        assert_eq!(zip(&["a"], &[1, 2, 3]), [("a", 1)]);
        assert_eq!(
            zip_indexed(&[1, 2, 3], &['x', 'y', 'z']),
            [(1, 'x', 0), (2, 'y', 1), (3, 'z', 2)]
        );
        assert!(zip(&[] as &[u8], &[1, 2]).is_empty());
    }
}
