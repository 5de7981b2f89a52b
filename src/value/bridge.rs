//! View to buffer copies

use bytes::Bytes;

use super::ValueView;

/// Copy a borrowed view into a newly allocated buffer
///
/// Call before the view's transaction or cursor step advances.
pub fn to_owned(view: ValueView<'_>) -> Vec<u8> {
    view.as_bytes().to_vec()
}

/// Replace `target` with a copy of `view`
///
/// The copy goes into a temporary which is then swapped in, so the old
/// contents are dropped rather than appended to.
pub fn replace(target: &mut Vec<u8>, view: ValueView<'_>) {
    let mut temp = to_owned(view);
    std::mem::swap(target, &mut temp);
}

/// Copy a borrowed view into an immutable, cheaply cloneable buffer
pub fn to_shared(view: ValueView<'_>) -> Bytes {
    Bytes::copy_from_slice(view.as_bytes())
}
