//! # 単方向連結リスト用クレート。
//!
//! 末尾への追加はキャッシュした末尾ポインタによりO(1)で行い、
//! 位置指定の挿入・削除・取得は先頭からたどるO(n)で行う。
//! 範囲外のインデックスはパニックせず、[`BoundsError`]として返す。
//!
//! ## 利用例
//!
//! ```
//! use linkedlist::List;
//!
//! let mut list = List::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! list.insert(1, 5).unwrap(); // [1, 5, 2, 3]
//!
//! assert_eq!(list.get(1), Ok(&5));
//! assert!(list.contains(&3));
//! assert!(list.get(4).is_err()); // 範囲外
//!
//! let removed = list.remove(0).unwrap(); // [5, 2, 3]
//! assert_eq!(removed, 1);
//! assert_eq!(list.to_string(), "5 2 3");
//! ```
mod helper;
mod list;

pub use list::{
    iter::{IntoIter, Iter},
    BoundsError, List, Operation,
};
