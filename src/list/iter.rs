//! リストのイテレータ
use super::{
    node::{Link, Node},
    BoundsError, List,
};
use std::{iter::FusedIterator, marker::PhantomData};

/// 不変イテレータを表す型
///
/// cursorは次に取り出すノードを指し、最後の要素を取り出すとNoneになる。
pub struct Iter<'a, T> {
    cursor: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

// &Tと同じく、Tを共有できる場合に限り送信・共有できる
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Link<T>, size: usize) -> Self {
        Iter {
            cursor: head,
            remaining: size,
            _marker: PhantomData,
        }
    }

    /// 取り出していない要素が残っていればtrueを返す
    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// 次の要素を取り出す。
    ///
    /// # 利用例
    ///
    /// ```
    /// use linkedlist::{BoundsError, List};
    /// let list: List<i32> = (1..=2).collect();
    /// let mut it = list.iter();
    /// while it.has_next() {
    ///     println!("{}", it.try_next().unwrap());
    /// }
    /// assert_eq!(it.try_next(), Err(BoundsError::Exhausted));
    /// ```
    ///
    /// # 返り値
    ///
    /// has_nextがfalseの場合はErr(BoundsError::Exhausted)を返す。
    pub fn try_next(&mut self) -> Result<&'a T, BoundsError> {
        self.next().ok_or(BoundsError::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// 次の要素を指す
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.map(|node| {
            // SAFETY: リストは'aの間借用されており、ノードが変更・解放されることはない
            unsafe {
                self.cursor = (*node.as_ptr()).next;
                self.remaining -= 1;
                &(*node.as_ptr()).value
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// deriveするとT: Cloneが要求されるため手で実装
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// リストを消費して、先頭から値を取り出すイテレータ
pub struct IntoIter<T>(pub(super) List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_order() {
        let list: List<&str> = ["go", "is", "fun"].into_iter().collect();
        let mut it = list.iter();
        let mut results = Vec::new();

        while it.has_next() {
            results.push(*it.try_next().unwrap());
        }

        assert_eq!(results, ["go", "is", "fun"]);
        assert!(!it.has_next());
        assert_eq!(it.try_next(), Err(BoundsError::Exhausted));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iter_empty() {
        let list: List<i32> = List::new();
        let mut it = list.iter();
        assert!(!it.has_next());
        assert_eq!(it.len(), 0);
        assert!(it.try_next().is_err());
    }

    #[test]
    fn test_iter_len() {
        let list: List<i32> = (0..5).collect();
        let mut it = list.iter();
        assert_eq!(it.len(), 5);
        it.next();
        it.next();
        assert_eq!(it.len(), 3);
        assert_eq!(it.clone().count(), 3);
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn test_iter_after_remove() {
        let mut list: List<i32> = (1..=4).collect();
        list.remove(0).unwrap();
        list.remove(list.size() - 1).unwrap();

        let mut it = list.iter();
        for expected in [2, 3] {
            assert_eq!(it.try_next(), Ok(&expected));
        }
        assert!(!it.has_next());
    }

    #[test]
    fn test_for_loop() {
        let list: List<i32> = (1..=3).collect();
        let mut sum = 0;
        for x in &list {
            sum += x;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_into_iter_partial() {
        let list: List<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut it = list.into_iter();
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.len(), 2);
        // 残りの要素はIntoIterのdropで解放される
    }
}
