// vim: tw=80
//! The recording test double itself

use std::{
    cell::{Ref, RefCell},
    fmt,
};

use crate::{
    arguments::{Arguments, PrintArguments},
    calls::CallStore,
    expectation::Expectation,
    return_handler::{IntoReturns, ReturnHandler},
    unqualified::Unqualified,
};

/// A function signature that a [`Function`] can stand in for.
///
/// Implemented for function pointer types `fn(A0, .., An) -> R` with up to
/// twelve parameters.  The parameter types are the owned types that get
/// recorded; see [`Unqualified`] for what a call site may pass.
pub trait Signature: 'static {
    /// The tuple of parameter types, as stored for every call
    type Args: Arguments;
    type Output: 'static;
}

/// A callable test double that records its arguments and returns
/// pre-programmed values.
///
/// `F` is the signature being replaced, written as a function pointer type:
/// `Function<fn(u32, bool) -> u8>`.  Invoke it with
/// [`call`](#method.call), which takes the same arguments as the function it
/// replaces.
///
/// Recording happens through a shared reference, so a `Function` can sit in a
/// field of a stub struct whose trait methods take `&self`.  It is not `Sync`;
/// use one from a single thread at a time.
///
/// # Examples
/// ```
/// # use stub::*;
/// let mut f = Function::<fn(u32) -> bool>::new();
/// f.set_return(true);
/// assert!(f.call(23u32));
/// assert!(f.call(13u32));
/// assert_eq!(2, f.calls());
/// assert!(f.expect_calls().with(23u32).with(13u32).to_bool());
/// ```
pub struct Function<F: Signature> {
    calls: RefCell<CallStore<F::Args>>,
    returns: RefCell<ReturnHandler<F::Output>>,
    side_effects: Vec<Box<dyn Fn()>>,
}

impl<F: Signature> Function<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback to run at the start of every invocation, before
    /// the arguments are recorded.  Callbacks run in the order they were
    /// added.
    ///
    /// # Examples
    /// ```
    /// # use stub::*;
    /// # use std::{cell::Cell, rc::Rc};
    /// let count = Rc::new(Cell::new(0));
    /// let mut f = Function::<fn(u32)>::new();
    /// let c = count.clone();
    /// f.add_side_effect(move || c.set(c.get() + 1));
    /// f.call(4u32);
    /// f.call(5u32);
    /// assert_eq!(2, count.get());
    /// ```
    pub fn add_side_effect<S>(&mut self, side_effect: S)
        where S: Fn() + 'static
    {
        self.side_effects.push(Box::new(side_effect));
    }

    /// The arguments passed to the call at position `index`, oldest first.
    ///
    /// The returned guard borrows the recorded calls.  Invoking the `Function`
    /// while it is alive panics.
    ///
    /// # Panics
    ///
    /// If fewer than `index + 1` calls have been recorded.
    pub fn call_arguments(&self, index: usize) -> Ref<'_, F::Args> {
        Ref::map(self.calls.borrow(), |calls| calls.get(index))
    }

    /// Number of times the `Function` has been invoked since it was created
    /// or last cleared
    pub fn calls(&self) -> usize {
        self.calls.borrow().count()
    }

    /// Forget all recorded calls and all scheduled return values.
    ///
    /// Side effects are kept.
    pub fn clear(&mut self) {
        *self.returns.get_mut() = ReturnHandler::default();
        self.calls.get_mut().clear();
        trace!("stub function cleared");
    }

    /// Forget all recorded calls, but keep the scheduled return values.
    pub fn clear_calls(&mut self) {
        self.calls.get_mut().clear();
    }

    /// Start describing the calls this `Function` should have received.
    ///
    /// The [`Expectation`] reads the recorded calls when it is evaluated, so
    /// calls made after this point still count.
    pub fn expect_calls(&self) -> Expectation<'_, F> {
        Expectation::new(self)
    }

    /// Has the `Function` not been invoked at all?
    pub fn no_calls(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Replace the scheduled return values.
    ///
    /// Accepts a single value, an array, or a `Vec`.  The returned
    /// [`ReturnHandler`] can be used to switch off repetition.
    ///
    /// # Examples
    /// ```
    /// # use stub::*;
    /// let mut f = Function::<fn() -> u32>::new();
    /// f.set_return([4, 3]);
    /// let got = (0..4).map(|_| f.call()).collect::<Vec<_>>();
    /// assert_eq!(vec![4, 3, 4, 3], got);
    /// ```
    pub fn set_return<V>(&mut self, values: V) -> &mut ReturnHandler<F::Output>
        where V: IntoReturns<F::Output>
    {
        self.returns.get_mut().set_return(values)
    }

    /// The recorded calls
    pub(crate) fn store(&self) -> Ref<'_, CallStore<F::Args>> {
        self.calls.borrow()
    }

    fn invoke(&self, args: F::Args) -> F::Output
        where F::Output: Clone
    {
        for side_effect in &self.side_effects {
            side_effect();
        }
        self.calls.borrow_mut().record(args);
        trace!(call = self.calls() - 1, "stub function invoked");
        self.returns.borrow_mut().next()
    }
}

impl<F: Signature> Default for Function<F> {
    fn default() -> Self {
        Function {
            calls: RefCell::new(CallStore::default()),
            returns: RefCell::new(ReturnHandler::default()),
            side_effects: Vec::new(),
        }
    }
}

impl<F: Signature> fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("calls", &self.calls())
            .field("side_effects", &self.side_effects.len())
            .finish()
    }
}

/// Prints the number of calls followed by the arguments of each call.
///
/// ```
/// # use stub::*;
/// let f = Function::<fn(u32, u32)>::new();
/// f.call(2u32, 3u32);
/// assert_eq!("Number of calls: 1\nCall 0:\nArg 0: 2\nArg 1: 3\n",
///            f.to_string());
/// ```
impl<F> fmt::Display for Function<F>
    where F: Signature, F::Args: PrintArguments
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let calls = self.calls.borrow();
        writeln!(f, "Number of calls: {}", calls.count())?;
        if <F::Args as Arguments>::ARITY == 0 {
            return Ok(());
        }
        for (i, args) in calls.iter().enumerate() {
            writeln!(f, "Call {i}:")?;
            args.print(f)?;
        }
        Ok(())
    }
}

macro_rules! impl_signature {
    ($( $A:ident $X:ident $a:ident $i:tt ),*) => {
        impl<R: 'static, $($A: 'static),*> Signature for fn($($A),*) -> R {
            type Args = ($($A,)*);
            type Output = R;
        }

        impl<R, $($A),*> Function<fn($($A),*) -> R>
            where R: Clone + 'static, $($A: 'static),*
        {
            /// Invoke the `Function` as if it were the real thing.
            ///
            /// Runs the side effects, records the arguments, and returns the
            /// next scheduled value.
            ///
            /// # Panics
            ///
            /// If the return schedule is empty or exhausted.  See
            /// [`ReturnHandler::next`].
            #[allow(clippy::too_many_arguments)]
            pub fn call<$($X: Unqualified<$A>),*>(&self, $($a: $X),*) -> R {
                self.invoke(($($a.unqualified(),)*))
            }
        }
    }
}

for_each_arity!{impl_signature}
