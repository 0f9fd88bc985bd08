// vim: tw=80
//! Per-argument match strategies used by [`Expectation`](crate::Expectation)

use predicates::{function::FnPredicate, prelude::*};
use predicates_tree::CaseTreeExt;
use std::{
    fmt::{self, Debug, Display},
    rc::Rc,
};

/// An expected argument value, compared with its type's `PartialEq`.
///
/// The equality relation is captured when the `Literal` is built, so the
/// [`Descriptor`] holding it places no bounds on the argument type.
pub struct Literal<T> {
    value: Rc<T>,
    eq: fn(&T, &T) -> bool,
}

impl<T: PartialEq> Literal<T> {
    pub fn new(value: T) -> Self {
        Literal{value: Rc::new(value), eq: <T as PartialEq>::eq}
    }
}

impl<T> Literal<T> {
    fn matches(&self, actual: &T) -> bool {
        (self.eq)(actual, &self.value)
    }

    /// The expected value
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Clone for Literal<T> {
    fn clone(&self) -> Self {
        Literal{value: Rc::clone(&self.value), eq: self.eq}
    }
}

/// How one argument of an expected call is compared with the recorded value.
///
/// Users rarely build these directly.  Instead they pass plain values or one
/// of the markers returned by [`ignore`], [`not_null`], [`compare`] and
/// [`matching`] to [`Expectation::with`](crate::Expectation).
pub enum Descriptor<T> {
    /// Equal to the given value
    Literal(Literal<T>),
    /// Anything at all
    Ignore,
    /// A pointer that isn't null.  Holds the null test for `T`.
    NotNull(fn(&T) -> bool),
    /// Any value for which the predicate holds
    Predicate(Rc<dyn Predicate<T>>),
}

impl<T> Descriptor<T> {
    /// Does the recorded argument satisfy this descriptor?
    pub fn matches(&self, actual: &T) -> bool {
        match self {
            Descriptor::Literal(l) => l.matches(actual),
            Descriptor::Ignore => true,
            Descriptor::NotNull(is_null) => !is_null(actual),
            Descriptor::Predicate(p) => p.eval(actual),
        }
    }

    /// Render the predicate's failure as a case tree, if this is a predicate
    /// descriptor that rejects `actual`.
    pub(crate) fn explain(&self, actual: &T) -> Option<String> {
        match self {
            Descriptor::Predicate(p) => p.find_case(false, actual)
                .map(|case| case.tree().to_string()),
            _ => None
        }
    }
}

impl<T> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        match self {
            Descriptor::Literal(l) => Descriptor::Literal(l.clone()),
            Descriptor::Ignore => Descriptor::Ignore,
            Descriptor::NotNull(is_null) => Descriptor::NotNull(*is_null),
            Descriptor::Predicate(p) => Descriptor::Predicate(Rc::clone(p)),
        }
    }
}

impl<T: Debug> Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Descriptor::Literal(l) =>
                f.debug_tuple("Literal").field(l.value()).finish(),
            Descriptor::Ignore => f.write_str("Ignore"),
            Descriptor::NotNull(_) => f.write_str("NotNull"),
            Descriptor::Predicate(p) =>
                f.debug_tuple("Predicate").field(&format_args!("{p}")).finish(),
        }
    }
}

impl<T: Debug> Display for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Descriptor::Literal(l) => write!(f, "{:?}", l.value()),
            Descriptor::Ignore => f.write_str("_"),
            Descriptor::NotNull(_) => f.write_str("not null"),
            Descriptor::Predicate(p) => write!(f, "{p}"),
        }
    }
}

/// Types whose values may be null, and so can be checked with [`not_null`].
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

/// `None` counts as null.  This covers `Option<NonNull<T>>`, `Option<&T>` and
/// `Option<Box<T>>`.
impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Marker that matches any argument.  See [`ignore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Ignore;

/// Marker that matches any non-null pointer.  See [`not_null`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NotNull;

/// Marker that matches arguments satisfying a predicate.  See [`compare`] and
/// [`matching`].
#[derive(Clone, Copy, Debug)]
pub struct Compare<P>(P);

/// Match any value in this position.
///
/// # Examples
/// ```
/// # use stub::*;
/// let f = Function::<fn(u32, bool)>::new();
/// f.call(3u32, true);
/// assert!(f.expect_calls().with(3u32, ignore()).to_bool());
/// ```
pub fn ignore() -> Ignore {
    Ignore
}

/// Match any pointer in this position, as long as it isn't null.
///
/// Only pointer-like positions accept this marker; anything else is rejected
/// at compile time.
///
/// # Examples
/// ```
/// # use stub::*;
/// let f = Function::<fn(u32, *const u8)>::new();
/// let buffer = vec![0u8; 10];
/// f.call(3u32, buffer.as_ptr());
/// assert!(f.expect_calls().with(3u32, not_null()).to_bool());
/// ```
///
/// ```compile_fail
/// # use stub::*;
/// let f = Function::<fn(u32)>::new();
/// f.expect_calls().with(not_null());
/// ```
pub fn not_null() -> NotNull {
    NotNull
}

/// Match arguments for which `f` returns true.
///
/// The closure receives the recorded argument by reference, which makes it
/// possible to compare only part of a value, or values that don't implement
/// `PartialEq`.
///
/// The closure runs while the [`Function`](crate::Function)'s recorded calls
/// are borrowed.  It may inspect that `Function`, but invoking it panics.
///
/// # Examples
/// ```
/// # use stub::*;
/// struct Cup { volume: f64 }
///
/// let f = Function::<fn(Cup)>::new();
/// f.call(Cup{volume: 2.5});
/// assert!(f.expect_calls()
///     .with(compare(|c: &Cup| c.volume > 2.0))
///     .to_bool());
/// ```
pub fn compare<T, F>(f: F) -> Compare<FnPredicate<F, T>>
    where F: Fn(&T) -> bool
{
    Compare(predicate::function(f))
}

/// Match arguments that satisfy any [`Predicate`].
///
/// As with [`compare`], the predicate must not invoke the `Function` being
/// checked.
///
/// # Examples
/// ```
/// # use stub::*;
/// let f = Function::<fn(u32)>::new();
/// f.call(7u32);
/// assert!(f.expect_calls()
///     .with(matching(predicate::gt(5u32)))
///     .to_bool());
/// ```
pub fn matching<P>(p: P) -> Compare<P> {
    Compare(p)
}

/// Anything that may be passed to [`Expectation::with`] to describe one
/// expected argument of type `T`.
///
/// Plain values become [`Descriptor::Literal`] and require `T: PartialEq`.
/// The markers returned by [`ignore`], [`not_null`], [`compare`] and
/// [`matching`] become the corresponding descriptors.
///
/// [`Expectation::with`]: crate::Expectation
pub trait IntoDescriptor<T> {
    fn into_descriptor(self) -> Descriptor<T>;
}

impl<T: PartialEq> IntoDescriptor<T> for T {
    fn into_descriptor(self) -> Descriptor<T> {
        Descriptor::Literal(Literal::new(self))
    }
}

impl<T> IntoDescriptor<T> for Descriptor<T> {
    fn into_descriptor(self) -> Descriptor<T> {
        self
    }
}

impl<T> IntoDescriptor<T> for Ignore {
    fn into_descriptor(self) -> Descriptor<T> {
        Descriptor::Ignore
    }
}

impl<T: Nullable> IntoDescriptor<T> for NotNull {
    fn into_descriptor(self) -> Descriptor<T> {
        Descriptor::NotNull(<T as Nullable>::is_null)
    }
}

impl<T, P> IntoDescriptor<T> for Compare<P>
    where P: Predicate<T> + 'static
{
    fn into_descriptor(self) -> Descriptor<T> {
        Descriptor::Predicate(Rc::new(self.0))
    }
}
