// vim: tw=80
//! Recording test doubles for functions.
//!
//! A [`Function`] stands in for a real function or method in a test.  It
//! returns pre-programmed values, records the arguments of every invocation,
//! and afterwards lets the test check that a particular sequence of calls
//! happened.
//!
//! # User Guide
//!
//! * [`Getting started`](#getting-started)
//! * [`Return values`](#return-values)
//! * [`Side effects`](#side-effects)
//! * [`Inspecting calls`](#inspecting-calls)
//! * [`Expecting calls`](#expecting-calls)
//! * [`Matching arguments`](#matching-arguments)
//! * [`Repeating and skipping calls`](#repeating-and-skipping-calls)
//! * [`Reference arguments`](#reference-arguments)
//! * [`Stubbing traits`](#stubbing-traits)
//! * [`Crate features`](#crate-features)
//!
//! ## Getting Started
//! ```
//! use stub::*;
//!
//! let f = Function::<fn(u32)>::new();
//! f.call(3u32);
//! f.call(4u32);
//!
//! assert_eq!(2, f.calls());
//! assert!(f.expect_calls().with(3u32).with(4u32).to_bool());
//! ```
//!
//! The type parameter of a `Function` is the signature it replaces, written as
//! a function pointer type.  Signatures with up to twelve parameters are
//! supported.
//!
//! ## Return values
//!
//! A `Function` that returns something other than `()` must be told what to
//! return, with [`set_return`](Function::set_return).  By default the values
//! repeat forever.
//!
//! ```
//! # use stub::*;
//! let mut f = Function::<fn(u32) -> u32>::new();
//! f.set_return([5, 10, 15]);
//! assert_eq!(5, f.call(1u32));
//! assert_eq!(10, f.call(2u32));
//! assert_eq!(15, f.call(3u32));
//! assert_eq!(5, f.call(4u32));
//! ```
//!
//! Calling [`no_repeat`](ReturnHandler::no_repeat) limits each value to a
//! single use.  Invoking the `Function` more often than that is a bug in the
//! test, and panics.  So does invoking a `Function` that has no return value
//! at all.
//!
//! ```should_panic(expected = "return values exhausted")
//! # use stub::*;
//! let mut f = Function::<fn() -> u32>::new();
//! f.set_return([5, 3]).no_repeat();
//! assert_eq!(5, f.call());
//! assert_eq!(3, f.call());
//! f.call();   // Panics!
//! ```
//!
//! ## Side effects
//!
//! Callbacks registered with [`add_side_effect`](Function::add_side_effect)
//! run at the start of every invocation, in registration order.
//!
//! ```
//! # use stub::*;
//! # use std::{cell::RefCell, rc::Rc};
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut f = Function::<fn()>::new();
//! let l = log.clone();
//! f.add_side_effect(move || l.borrow_mut().push("first"));
//! let l = log.clone();
//! f.add_side_effect(move || l.borrow_mut().push("second"));
//! f.call();
//! assert_eq!(vec!["first", "second"], *log.borrow());
//! ```
//!
//! ## Inspecting calls
//!
//! [`calls`](Function::calls) and [`no_calls`](Function::no_calls) count the
//! invocations, and [`call_arguments`](Function::call_arguments) returns the
//! arguments of any one of them as a tuple.
//! [`clear_calls`](Function::clear_calls) forgets the recorded calls, while
//! [`clear`](Function::clear) also forgets the return values.
//!
//! ```
//! # use stub::*;
//! let mut f = Function::<fn(u32, bool)>::new();
//! assert!(f.no_calls());
//! f.call(2u32, true);
//! f.call(4u32, false);
//! assert_eq!((4, false), *f.call_arguments(1));
//! f.clear_calls();
//! assert!(f.no_calls());
//! ```
//!
//! ## Expecting calls
//!
//! [`expect_calls`](Function::expect_calls) starts an [`Expectation`]: the
//! complete, ordered list of calls that the `Function` should have received.
//! Each call to [`with`](Expectation::with) adds one expected call.  The
//! expectation is met only if the number of calls matches exactly and every
//! expected call matches the recorded call at the same position.
//!
//! ```
//! # use stub::*;
//! let f = Function::<fn(u32, u32)>::new();
//! f.call(3u32, 1u32);
//! f.call(4u32, 2u32);
//!
//! assert!(f.expect_calls().with(3u32, 1u32).with(4u32, 2u32).to_bool());
//! // Wrong order
//! assert!(!f.expect_calls().with(4u32, 2u32).with(3u32, 1u32).to_bool());
//! // Too few calls
//! assert!(!f.expect_calls().with(3u32, 1u32).to_bool());
//! ```
//!
//! An expectation can also be converted into a `bool`, or checked with
//! [`check`](Expectation::check), which explains what went wrong:
//!
//! ```
//! # use stub::*;
//! let f = Function::<fn(u32)>::new();
//! f.call(3u32);
//! let met: bool = f.expect_calls().with(3u32).into();
//! assert!(met);
//! let e = f.expect_calls().with(3u32).with(3u32).check().unwrap_err();
//! assert!(e.to_string().starts_with("Expected 2 calls, but 1 were recorded"));
//! ```
//!
//! ## Matching arguments
//!
//! Plain values are compared with `PartialEq`.  For anything else, pass one of
//! these markers in place of the value:
//!
//! * [`ignore()`]: any value at all.
//! * [`not_null()`]: a pointer that isn't null.  Only accepted for pointer
//!   and `Option` parameters.
//! * [`compare(f)`](compare): any value for which the closure `f` returns
//!   true.
//! * [`matching(p)`](matching): any value that satisfies the [`Predicate`]
//!   `p`.  See [`predicate`] for the available predicates.
//!
//! ```
//! # use stub::*;
//! #[derive(Debug)]
//! struct Cup { volume: f64 }
//!
//! let f = Function::<fn(Cup, u32, *const u8)>::new();
//! let buffer = [0u8; 4];
//! f.call(Cup{volume: 2.3}, 7u32, buffer.as_ptr());
//!
//! assert!(f.expect_calls()
//!     .with(compare(|c: &Cup| c.volume == 2.3), ignore(), not_null())
//!     .to_bool());
//! assert!(f.expect_calls()
//!     .with(ignore(), matching(predicate::lt(10u32)), ignore())
//!     .to_bool());
//! ```
//!
//! ## Repeating and skipping calls
//!
//! [`repeat(n)`](Expectation::repeat) expects the previous call `n` more
//! times.  [`ignore(n)`](Expectation::ignore) accepts the next `n` recorded
//! calls whatever their arguments.
//!
//! ```
//! # use stub::*;
//! let f = Function::<fn(u32, u32)>::new();
//! f.call(2u32, 3u32);
//! f.call(4u32, 5u32);
//! f.call(4u32, 5u32);
//! f.call(4u32, 5u32);
//! f.call(2u32, 6u32);
//!
//! assert!(f.expect_calls()
//!     .with(2u32, 3u32)
//!     .with(4u32, 5u32).repeat(2)
//!     .with(2u32, 6u32)
//!     .to_bool());
//! assert!(f.expect_calls()
//!     .ignore(f.calls() - 1)
//!     .with(2u32, 6u32)
//!     .to_bool());
//! ```
//!
//! ## Reference arguments
//!
//! Parameters are declared with owned types.  A call may pass either the
//! value or a reference to it; references are cloned so that the recorded
//! calls don't borrow anything.  See [`Unqualified`].
//!
//! ```
//! # use stub::*;
//! let f = Function::<fn(String)>::new();
//! {
//!     let s = String::from("hello");
//!     f.call(&s);
//! }
//! assert!(f.expect_calls().with(String::from("hello")).to_bool());
//! ```
//!
//! ## Stubbing traits
//!
//! A `Function` is an ordinary value, so a stub for a trait is just a struct
//! with one `Function` per method.
//!
//! ```
//! # use stub::*;
//! trait Sink {
//!     fn write(&self, data: &[u8]) -> usize;
//! }
//!
//! #[derive(Default)]
//! struct StubSink {
//!     write: Function<fn(Vec<u8>) -> usize>,
//! }
//!
//! impl Sink for StubSink {
//!     fn write(&self, data: &[u8]) -> usize {
//!         self.write.call(data.to_vec())
//!     }
//! }
//!
//! fn send(sink: &dyn Sink) -> usize {
//!     sink.write(b"abc") + sink.write(b"de")
//! }
//!
//! let mut sink = StubSink::default();
//! sink.write.set_return([3, 2]);
//! assert_eq!(5, send(&sink));
//! assert!(sink.write.expect_calls()
//!     .with(b"abc".to_vec())
//!     .with(b"de".to_vec())
//!     .to_bool());
//! ```
//!
//! ## Crate features
//!
//! * **tracing** (on by default): emit [`tracing`] events when a `Function`
//!   is invoked or cleared, and when an expectation is not met.
//!
//! [`tracing`]: https://docs.rs/tracing

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "tracing")] {
        macro_rules! trace {
            ($($arg:tt)*) => { ::tracing::trace!($($arg)*) }
        }
        macro_rules! debug {
            ($($arg:tt)*) => { ::tracing::debug!($($arg)*) }
        }
    } else {
        macro_rules! trace {
            ($($arg:tt)*) => {}
        }
        macro_rules! debug {
            ($($arg:tt)*) => {}
        }
    }
}

/// Invoke `$m` once per supported arity, with an identifier for each
/// argument's type, its generic parameter, its binding, and its tuple index.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!{}
        $m!{A0 X0 a0 0}
        $m!{A0 X0 a0 0, A1 X1 a1 1}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6, A7 X7 a7 7}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6, A7 X7 a7 7, A8 X8 a8 8}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6, A7 X7 a7 7, A8 X8 a8 8, A9 X9 a9 9}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6, A7 X7 a7 7, A8 X8 a8 8, A9 X9 a9 9,
            A10 X10 a10 10}
        $m!{A0 X0 a0 0, A1 X1 a1 1, A2 X2 a2 2, A3 X3 a3 3, A4 X4 a4 4,
            A5 X5 a5 5, A6 X6 a6 6, A7 X7 a7 7, A8 X8 a8 8, A9 X9 a9 9,
            A10 X10 a10 10, A11 X11 a11 11}
    }
}

mod arguments;
mod calls;
mod descriptor;
mod expectation;
mod function;
mod return_handler;
mod unqualified;

pub use arguments::{Arguments, LiteralArguments, PrintArguments};
pub use calls::CallStore;
pub use descriptor::{
    compare,
    ignore,
    matching,
    not_null,
    Compare,
    Descriptor,
    Ignore,
    IntoDescriptor,
    Literal,
    NotNull,
    Nullable,
};
pub use expectation::{Expectation, ExpectationError};
pub use function::{Function, Signature};
pub use predicates::prelude::{predicate, Predicate};
pub use return_handler::{IntoReturns, ReturnHandler};
pub use unqualified::Unqualified;
