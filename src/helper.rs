//! インデックス検査用のヘルパ
use crate::list::{BoundsError, Operation};
use log::debug;

/// opに対してindexが有効な範囲にあるかを検査する。
///
/// 挿入は`0 <= index <= size`、削除と取得は`0 <= index < size`を有効とする。
/// 範囲外の場合は、indexとsizeを持つBoundsErrorを返す。
pub(crate) fn check_index(op: Operation, index: usize, size: usize) -> Result<(), BoundsError> {
    let valid = match op {
        Operation::Insert => index <= size,
        Operation::Remove | Operation::Get => index < size,
    };

    if valid {
        Ok(())
    } else {
        debug!("{op}: index {index} rejected (size: {size})");
        Err(BoundsError::OutOfRange { op, index, size })
    }
}
