// vim: tw=80
//! Verification of recorded calls

use std::{fmt, iter};

use thiserror::Error;

use crate::{
    arguments::{Arguments, LiteralArguments, PrintArguments},
    descriptor::IntoDescriptor,
    function::{Function, Signature},
};

/// Why an [`Expectation`] was not met, as reported by
/// [`Expectation::check`].
///
/// Every message ends with a dump of the calls that were actually recorded.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ExpectationError {
    /// The number of expected calls differs from the number recorded
    #[error("Expected {expected} calls, but {actual} were recorded\n\
             Actual function calls:\n{calls}")]
    CallCount {
        expected: usize,
        actual: usize,
        calls: String,
    },

    /// A recorded call didn't satisfy the expected call at the same position
    #[error("Call {call} didn't match at argument {argument}: expected \
             {expected}\n{explanation}Actual function calls:\n{calls}")]
    Mismatch {
        call: usize,
        argument: usize,
        /// The expected argument, rendered
        expected: String,
        /// Predicate case tree for the failing argument, if any
        explanation: String,
        calls: String,
    },
}

/// Where the first difference between expected and recorded calls lies
enum Failure {
    CallCount{expected: usize, actual: usize},
    Mismatch{call: usize, argument: usize},
}

/// A sequence of calls that a [`Function`] is expected to have received.
///
/// Built with [`Function::expect_calls`] and extended with [`with`],
/// [`repeat`] and [`ignore`].  Evaluate it with [`to_bool`], by converting it
/// into a `bool`, or with [`check`] for a diagnostic message.
///
/// Matching is strictly positional: the first expected call is compared with
/// the first recorded call, and so on.  The expectation is met only if there
/// are exactly as many expected calls as recorded ones and each pair matches.
/// Evaluation doesn't change anything, so it may be repeated.
///
/// # Examples
/// ```
/// # use stub::*;
/// let f = Function::<fn(u32)>::new();
/// f.call(3u32);
/// f.call(4u32);
/// assert!(f.expect_calls().with(3u32).with(4u32).to_bool());
/// assert!(!f.expect_calls().with(4u32).with(3u32).to_bool());
/// ```
///
/// [`with`]: #method.with
/// [`repeat`]: #method.repeat
/// [`ignore`]: #method.ignore
/// [`to_bool`]: #method.to_bool
/// [`check`]: #method.check
pub struct Expectation<'f, F: Signature> {
    function: &'f Function<F>,
    calls: Vec<<F::Args as Arguments>::Descriptors>,
}

impl<'f, F: Signature> Expectation<'f, F> {
    pub(crate) fn new(function: &'f Function<F>) -> Self {
        Expectation{function, calls: Vec::new()}
    }

    /// Is no call expected yet?
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of calls expected so far
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    fn push(mut self, call: <F::Args as Arguments>::Descriptors) -> Self {
        self.calls.push(call);
        self
    }

    /// Expect the previously added call `times` more times.
    ///
    /// `with(x).repeat(2)` expects three identical calls.
    ///
    /// # Panics
    ///
    /// If no call has been added with [`with`](#method.with) or
    /// [`ignore`](#method.ignore) yet.
    pub fn repeat(mut self, times: usize) -> Self {
        let Some(last) = self.calls.last().cloned() else {
            panic!("repeat() requires a preceding call to with()");
        };
        self.calls.extend(iter::repeat(last).take(times));
        self
    }

    /// Evaluate the expectation.
    pub fn to_bool(&self) -> bool {
        self.evaluate().is_ok()
    }

    fn evaluate(&self) -> Result<(), Failure> {
        let recorded = self.function.store();
        if recorded.count() != self.calls.len() {
            debug!(expected = self.calls.len(), actual = recorded.count(),
                "call count mismatch");
            return Err(Failure::CallCount {
                expected: self.calls.len(),
                actual: recorded.count()
            });
        }
        for (call, (actual, expected)) in
            recorded.iter().zip(&self.calls).enumerate()
        {
            if let Some(argument) = actual.mismatch(expected) {
                debug!(call, argument, "argument mismatch");
                return Err(Failure::Mismatch{call, argument});
            }
        }
        Ok(())
    }
}

impl<'f, F> Expectation<'f, F>
    where F: Signature, F::Args: LiteralArguments
{
    /// Accept the next `count` recorded calls, whatever their arguments.
    ///
    /// The calls at positions `len()..len() + count` are copied from the
    /// [`Function`] as expected calls, so they must already have been made.
    ///
    /// # Panics
    ///
    /// If the `Function` has fewer than `len() + count` recorded calls.
    ///
    /// # Examples
    /// ```
    /// # use stub::*;
    /// let f = Function::<fn(u32, u32)>::new();
    /// f.call(2u32, 3u32);
    /// f.call(4u32, 5u32);
    /// f.call(4u32, 5u32);
    /// f.call(2u32, 6u32);
    /// assert!(f.expect_calls()
    ///     .with(2u32, 3u32)
    ///     .ignore(2)
    ///     .with(2u32, 6u32)
    ///     .to_bool());
    /// ```
    pub fn ignore(mut self, count: usize) -> Self {
        let function = self.function;
        let recorded = function.store();
        let start = self.calls.len();
        let Some(end) = start.checked_add(count)
            .filter(|&end| end <= recorded.count())
        else {
            panic!("ignore({}) requires {} recorded calls, but only {} \
                    were made",
                count, start as u128 + count as u128, recorded.count());
        };
        self.calls.extend((start..end).map(|i| recorded.get(i).literals()));
        self
    }
}

impl<'f, F> Expectation<'f, F>
    where F: Signature, F::Args: PrintArguments
{
    /// Evaluate the expectation, describing the first difference if it isn't
    /// met.
    ///
    /// # Examples
    /// ```
    /// # use stub::*;
    /// let f = Function::<fn(u32)>::new();
    /// f.call(4u32);
    /// let e = f.expect_calls().with(5u32).check().unwrap_err();
    /// assert_eq!(
    ///     "Call 0 didn't match at argument 0: expected 5\n\
    ///      Actual function calls:\n\
    ///      Number of calls: 1\nCall 0:\nArg 0: 4\n",
    ///     e.to_string());
    /// ```
    pub fn check(&self) -> Result<(), ExpectationError> {
        match self.evaluate() {
            Ok(()) => Ok(()),
            Err(Failure::CallCount{expected, actual}) => {
                Err(ExpectationError::CallCount {
                    expected,
                    actual,
                    calls: self.function.to_string()
                })
            }
            Err(Failure::Mismatch{call, argument}) => {
                let recorded = self.function.store();
                let actual = recorded.get(call);
                let descriptors = &self.calls[call];
                let expected = <F::Args as PrintArguments>::describe(
                    descriptors, argument).unwrap_or_default();
                let explanation = actual.explain(descriptors, argument)
                    .map(|tree| format!("{}\n", tree.trim_end()))
                    .unwrap_or_default();
                Err(ExpectationError::Mismatch {
                    call,
                    argument,
                    expected,
                    explanation,
                    calls: self.function.to_string()
                })
            }
        }
    }
}

impl<'f, F: Signature> fmt::Debug for Expectation<'f, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("expected", &self.calls.len())
            .field("recorded", &self.function.calls())
            .finish()
    }
}

impl<'f, F: Signature> From<Expectation<'f, F>> for bool {
    fn from(expectation: Expectation<'f, F>) -> bool {
        expectation.to_bool()
    }
}

macro_rules! impl_with {
    ($( $A:ident $X:ident $a:ident $i:tt ),*) => {
        impl<'f, R, $($A),*> Expectation<'f, fn($($A),*) -> R>
            where R: 'static, $($A: 'static),*
        {
            /// Expect one more call with the given arguments.
            ///
            /// Each argument is either a value, compared with `PartialEq`, or
            /// one of the markers [`ignore`](crate::ignore),
            /// [`not_null`](crate::not_null), [`compare`](crate::compare)
            /// and [`matching`](crate::matching).
            #[allow(clippy::too_many_arguments)]
            pub fn with<$($X: IntoDescriptor<$A>),*>(self, $($a: $X),*)
                -> Self
            {
                self.push(($($a.into_descriptor(),)*))
            }
        }
    }
}

for_each_arity!{impl_with}
