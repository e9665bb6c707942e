//! Null-ness of live argument and return values.

use std::rc::Rc;
use std::sync::Arc;

/// A value the executor can test for null.
pub trait NullCheck {
    fn is_null(&self) -> bool;
}

impl<T> NullCheck for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl NullCheck for serde_json::Value {
    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }
}

/// Members that return nothing.
impl NullCheck for () {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: NullCheck + ?Sized> NullCheck for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: NullCheck + ?Sized> NullCheck for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: NullCheck + ?Sized> NullCheck for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: NullCheck + ?Sized> NullCheck for Rc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: NullCheck + ?Sized> NullCheck for Arc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// A position outside the supplied arguments counts as null.
pub(crate) fn is_null_at<V: NullCheck>(args: &[V], position: usize) -> bool {
    args.get(position).map_or(true, |v| v.is_null())
}
