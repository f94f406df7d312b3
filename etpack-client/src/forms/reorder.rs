/// Move the element at `from` so that it ends up at index `to`
///
/// Returns `false` and leaves the list untouched when the drop was
/// cancelled (`to == None`), when `from == to`, or when either index is out
/// of range. Otherwise the result is a permutation of the input.
pub fn reorder<T>(list: &mut Vec<T>, from: usize, to: Option<usize>) -> bool {
    let Some(to) = to else {
        return false;
    };
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }

    let item = list.remove(from);
    list.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward_and_back() {
        let mut list = vec!['A', 'B', 'C', 'D'];
        assert!(reorder(&mut list, 0, Some(2)));
        assert_eq!(list, ['B', 'C', 'A', 'D']);

        assert!(reorder(&mut list, 3, Some(0)));
        assert_eq!(list, ['D', 'B', 'C', 'A']);
    }

    #[test]
    fn test_noops() {
        let mut list = vec![1, 2, 3];
        assert!(!reorder(&mut list, 1, Some(1)));
        assert!(!reorder(&mut list, 1, None));
        assert!(!reorder(&mut list, 5, Some(0)));
        assert!(!reorder(&mut list, 0, Some(3)));
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn test_is_permutation() {
        let original = vec![4, 1, 1, 9, 7];
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut list = original.clone();
                reorder(&mut list, from, Some(to));
                assert_eq!(list[to], original[from]);

                let mut sorted = list.clone();
                sorted.sort_unstable();
                let mut expected = original.clone();
                expected.sort_unstable();
                assert_eq!(sorted, expected);
            }
        }
    }
}
