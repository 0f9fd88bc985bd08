// vim: tw=80
//! Storage normalization of argument types

/// Converts an argument, as passed to [`Function::call`], into the owned value
/// that gets recorded.
///
/// A parameter declared as `T` accepts `T`, `&T`, or `&mut T`.  All three
/// record the same owned `T`, so recorded calls never borrow from the caller
/// and compare the same way regardless of how the call site passed them.
///
/// # Examples
/// ```
/// # use stub::*;
/// let f = Function::<fn(String)>::new();
/// let s = String::from("hello");
/// f.call(&s);
/// f.call(s);
/// assert!(f.expect_calls()
///     .with(String::from("hello"))
///     .with(String::from("hello"))
///     .to_bool());
/// ```
///
/// [`Function::call`]: crate::Function
pub trait Unqualified<T> {
    /// Produce the owned value to record.
    fn unqualified(self) -> T;
}

impl<T> Unqualified<T> for T {
    fn unqualified(self) -> T {
        self
    }
}

impl<T: Clone> Unqualified<T> for &T {
    fn unqualified(self) -> T {
        self.clone()
    }
}

impl<T: Clone> Unqualified<T> for &mut T {
    fn unqualified(self) -> T {
        self.clone()
    }
}
