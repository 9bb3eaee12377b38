//! Positional parameter lists for condition fragments

use crate::Value;

/// Trait for types that can be converted to an ordered parameter list
///
/// A condition fragment like `"age >= ? AND city = ?"` carries its leaf
/// values out-of-band; this trait accepts the common shapes callers pass
/// alongside a fragment:
///
/// ```
/// use quill_core::IntoParams;
///
/// let none = ().into_params();
/// let homogeneous = [18, 65].into_params();
/// let mixed = (18, "York").into_params();
/// ```
///
/// Parameter order is the order of the tuple/array elements, which must match
/// the left-to-right order of the `?` placeholders in the fragment.
pub trait IntoParams {
    fn into_params(self) -> Vec<Value>;
}

impl IntoParams for () {
    fn into_params(self) -> Vec<Value> {
        Vec::new()
    }
}

impl<T, const N: usize> IntoParams for [T; N]
where
    T: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        self.into_iter().map(|v| v.into()).collect()
    }
}

impl<T> IntoParams for Vec<T>
where
    T: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        self.into_iter().map(|v| v.into()).collect()
    }
}

// Implement for heterogeneous tuples of up to 4 parameters (common use case)
impl<T1> IntoParams for (T1,)
where
    T1: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        vec![self.0.into()]
    }
}

impl<T1, T2> IntoParams for (T1, T2)
where
    T1: Into<Value>,
    T2: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<T1, T2, T3> IntoParams for (T1, T2, T3)
where
    T1: Into<Value>,
    T2: Into<Value>,
    T3: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

impl<T1, T2, T3, T4> IntoParams for (T1, T2, T3, T4)
where
    T1: Into<Value>,
    T2: Into<Value>,
    T3: Into<Value>,
    T4: Into<Value>,
{
    fn into_params(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into(), self.2.into(), self.3.into()]
    }
}
