use crate::{Item, Routine};

/// Anything addressed by a string id inside an ordered list.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Routine {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn index_of<T: Identified>(entries: &[T], id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.id() == id)
}

/// Relocate the entry at `from` so it ends up at index `to`; everything else
/// keeps its relative order. Returns false (and leaves the list alone) when
/// `from == to` or either index is out of range.
pub fn move_entry<T>(entries: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= entries.len() || to >= entries.len() {
        return false;
    }
    let entry = entries.remove(from);
    entries.insert(to, entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let mut list = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(move_entry(&mut list, 1, 3));
        assert_eq!(list, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn test_move_backward() {
        let mut list = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(move_entry(&mut list, 4, 0));
        assert_eq!(list, vec!['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut list = vec![1, 2, 3];
        assert!(!move_entry(&mut list, 1, 1));
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut list = vec![1, 2, 3];
        assert!(!move_entry(&mut list, 3, 0));
        assert!(!move_entry(&mut list, 0, 3));
        assert_eq!(list, vec![1, 2, 3]);

        let mut empty: Vec<i32> = vec![];
        assert!(!move_entry(&mut empty, 0, 0));
    }

    #[test]
    fn test_every_relocation_preserves_other_order() {
        let original: Vec<usize> = (0..6).collect();
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut list = original.clone();
                move_entry(&mut list, from, to);

                assert_eq!(list[to], from);
                let mut sorted = list.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, original);

                let rest: Vec<usize> = list.iter().copied().filter(|&v| v != from).collect();
                let expected: Vec<usize> =
                    original.iter().copied().filter(|&v| v != from).collect();
                assert_eq!(rest, expected);
            }
        }
    }

    #[test]
    fn test_index_of() {
        let items = vec![Item::placeholder(), Item::placeholder()];
        let id = items[1].id.clone();
        assert_eq!(index_of(&items, &id), Some(1));
        assert_eq!(index_of(&items, "missing"), None);
    }
}
