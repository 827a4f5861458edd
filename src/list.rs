//! 単方向連結リスト
pub mod iter;
mod node;

use crate::helper::check_index;
use iter::{IntoIter, Iter};
use log::trace;
use node::{Link, Node};
use std::{
    error::Error,
    fmt::{self, Debug, Display},
    marker::PhantomData,
};

/// 範囲検査を行う操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Remove,
    Get,
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Remove => write!(f, "remove"),
            Operation::Get => write!(f, "get"),
        }
    }
}

/// 範囲外アクセスを表すエラー型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// インデックスが操作の有効範囲外。sizeは操作時点の要素数
    OutOfRange {
        op: Operation,
        index: usize,
        size: usize,
    },
    /// 要素が残っていないイテレータから値を取り出そうとした
    Exhausted,
}

impl Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::OutOfRange { op, index, size } => {
                write!(
                    f,
                    "BoundsError: {op}: index {index} out of bounds (size: {size})"
                )
            }
            BoundsError::Exhausted => write!(f, "BoundsError: iterator exhausted"),
        }
    }
}

impl Error for BoundsError {}

/// 単方向連結リスト
///
/// ノード列はリンクをたどって到達するノードとしてリストが所有する。
/// 末尾ポインタはO(1)で追加するためのもので、ノードの解放には関与しない。
///
/// ノードへの参照はすべて生ポインタから一時的に作り、Box経由では作らない。
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>, // headから到達可能な最後のノード
    size: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// ノードはすべてこのリストが排他的に所有するので、送信・共有の可否はTに従う
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {
    /// 空のリストを生成
    pub fn new() -> List<T> {
        List {
            head: None,
            tail: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    /// 要素数を返す
    pub fn size(&self) -> usize {
        self.size
    }

    /// 要素がない場合にtrueを返す
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 先頭の要素
    pub fn first(&self) -> Option<&T> {
        // SAFETY: headはこのリストが所有する生きたノードを指し、&selfの間は解放されない
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// 末尾の要素。末尾ポインタを使うためO(1)
    pub fn last(&self) -> Option<&T> {
        // SAFETY: tailはこのリストが所有する生きたノードを指し、&selfの間は解放されない
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// リストの末尾に要素を追加し、追加した値への可変参照を返す。
    ///
    /// # 利用例
    ///
    /// ```
    /// use linkedlist::List;
    /// let mut list = List::new();
    /// *list.append(1) += 10;
    /// assert_eq!(list.get(0), Ok(&11));
    /// ```
    pub fn append(&mut self, item: T) -> &mut T {
        let node = Node::new(item, None);

        match self.tail {
            // SAFETY: tailは生きた末尾ノードを指し、&mut selfの間は他に参照がない
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.size += 1;
        trace!("append: size = {}", self.size);

        // SAFETY: 追加したノードはこのリストが所有し、返す参照の寿命は&mut selfに縛られる
        unsafe { &mut (*node.as_ptr()).value }
    }

    /// リストの先頭に要素を追加
    pub fn prepend(&mut self, item: T) {
        let node = Node::new(item, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            // 空のリストに追加した場合は、先頭が末尾にもなる
            self.tail = Some(node);
        }
        self.size += 1;
        trace!("prepend: size = {}", self.size);
    }

    /// index番目に要素を挿入し、以降の要素を後ろにずらす。
    ///
    /// indexが0の場合はprependと、sizeと等しい場合はappendと同じ動作になる。
    ///
    /// # 利用例
    ///
    /// ```
    /// use linkedlist::List;
    /// let mut list: List<i32> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "1 2 3 4");
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    ///
    /// # 返り値
    ///
    /// indexがsizeより大きい場合はErrを返し、リストは変更しない。
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), BoundsError> {
        check_index(Operation::Insert, index, self.size)?;

        if index == 0 {
            self.prepend(item);
        } else if index == self.size {
            self.append(item);
        } else {
            let prev = self
                .node(index - 1)
                .ok_or(self.out_of_range(Operation::Insert, index))?;

            // SAFETY: prevは生きたノードで、0 < index < sizeなので末尾ではない
            unsafe {
                let next = (*prev.as_ptr()).next;
                (*prev.as_ptr()).next = Some(Node::new(item, next));
            }

            self.size += 1;
            trace!("insert: spliced at {index}, size = {}", self.size);
        }

        Ok(())
    }

    /// index番目の要素を取り除き、その値を返す。
    ///
    /// # 利用例
    ///
    /// ```
    /// use linkedlist::List;
    /// let mut list: List<i32> = (1..=4).collect();
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list.remove(2), Ok(4));
    /// assert_eq!(list.to_string(), "2 3");
    /// ```
    ///
    /// # 返り値
    ///
    /// リストが空の場合や、indexがsize以上の場合はErrを返し、リストは変更しない。
    pub fn remove(&mut self, index: usize) -> Result<T, BoundsError> {
        check_index(Operation::Remove, index, self.size)?;
        let err = self.out_of_range(Operation::Remove, index);

        if index == 0 {
            return self.pop_front().ok_or(err);
        }

        let prev = self.node(index - 1).ok_or(err)?;
        // SAFETY: prevは生きたノードで、index < sizeなので後続がある
        let removed = unsafe { (*prev.as_ptr()).next }.ok_or(err)?;

        // SAFETY: removedはリストから切り離した直後で、他のリンクからは参照されない
        let removed = unsafe {
            (*prev.as_ptr()).next = (*removed.as_ptr()).next;
            Box::from_raw(removed.as_ptr())
        };

        if removed.next.is_none() {
            // 末尾を取り除いたので、直前のノードが新しい末尾
            self.tail = Some(prev);
            trace!("remove: tail moved to index {}", index - 1);
        }

        self.size -= 1;
        trace!("remove: unlinked {index}, size = {}", self.size);

        let Node { value, .. } = *removed;
        Ok(value)
    }

    /// index番目の要素への参照を返す。
    ///
    /// # 返り値
    ///
    /// indexがsize以上の場合は、indexとsizeを持つErrを返す。
    pub fn get(&self, index: usize) -> Result<&T, BoundsError> {
        check_index(Operation::Get, index, self.size)?;
        self.node(index)
            // SAFETY: nodeは生きたノードを指し、&selfの間は解放されない
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(self.out_of_range(Operation::Get, index))
    }

    /// index番目の要素への可変参照を返す。
    ///
    /// リストの構造は変えずに、格納済みの値だけを書き換えるために使う。
    ///
    /// # 利用例
    ///
    /// ```
    /// use linkedlist::List;
    /// let mut list: List<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    /// list.get_mut(1).unwrap().push('!');
    /// assert_eq!(list.get(1).unwrap(), "b!");
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, BoundsError> {
        check_index(Operation::Get, index, self.size)?;
        self.node(index)
            // SAFETY: nodeは生きたノードを指し、&mut selfの間は他に参照がない
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(self.out_of_range(Operation::Get, index))
    }

    /// すべての要素を解放して空にする
    pub fn clear(&mut self) {
        // 再帰せず、先頭から順に切り離して解放する
        while self.pop_front().is_some() {}
    }

    /// 不変イテレータを返す
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.size)
    }

    /// 先頭の要素を取り除く
    fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: headはこのリストが所有するノードで、ここで所有権をBoxに戻す
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            let Node { value, .. } = *node;
            value
        })
    }

    /// index番目のノード。index >= sizeの場合はNone
    fn node(&self, index: usize) -> Link<T> {
        let mut cur = self.head;
        for _ in 0..index {
            // SAFETY: curは生きたノードを指す
            cur = unsafe { (*cur?.as_ptr()).next };
        }
        cur
    }

    fn out_of_range(&self, op: Operation, index: usize) -> BoundsError {
        BoundsError::OutOfRange {
            op,
            index,
            size: self.size,
        }
    }
}

impl<T: PartialEq> List<T> {
    /// itemと等しい要素があればtrueを返す
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T: Display> List<T> {
    /// すべての要素を空白区切りで標準出力に表示
    pub fn print_all(&self) {
        println!("{self}");
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// 元のリストとノードを共有しない、新しいリストを生成
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

/// 要素を空白区切りで表示するため、Displayトレイトを実装
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, value) in self.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
