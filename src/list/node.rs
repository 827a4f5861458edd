//! リストを構成するノード
use std::ptr::NonNull;

/// 次のノードへのリンク。Noneでリストの終端
///
/// ノードはBox::leakで確保し、リストから切り離すときにBox::from_rawで解放する。
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// 値と、次のノードへのリンクを持つノード
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// ヒープにノードを確保し、そのポインタを返す
    pub(crate) fn new(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}
