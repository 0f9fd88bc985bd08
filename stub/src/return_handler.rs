// vim: tw=80
//! Scheduling of the values a [`Function`](crate::Function) returns

use std::any::Any;

/// Anything that can be turned into a list of return values: a single value,
/// an array, or a `Vec`.
pub trait IntoReturns<R> {
    /// Produce the scheduled values, in order.
    fn into_returns(self) -> Vec<R>;
}

impl<R> IntoReturns<R> for R {
    fn into_returns(self) -> Vec<R> {
        vec![self]
    }
}

impl<R, const N: usize> IntoReturns<R> for [R; N] {
    fn into_returns(self) -> Vec<R> {
        Vec::from(self)
    }
}

impl<R> IntoReturns<R> for Vec<R> {
    fn into_returns(self) -> Vec<R> {
        self
    }
}

/// Hands out pre-programmed return values, one per invocation.
///
/// By default the schedule repeats: once the last value has been returned, the
/// next invocation starts over from the first.  After
/// [`no_repeat`](#method.no_repeat) every value may be returned only once, and
/// asking for more is a fatal usage error.
///
/// # Examples
/// ```
/// # use stub::*;
/// let mut r = ReturnHandler::<u32>::new();
/// r.set_return([4, 3]);
/// assert_eq!(4, r.next());
/// assert_eq!(3, r.next());
/// assert_eq!(4, r.next());
/// ```
///
/// ```should_panic(expected = "return values exhausted")
/// # use stub::*;
/// let mut r = ReturnHandler::<u32>::new();
/// r.set_return(1).no_repeat();
/// r.next();
/// r.next();   // Panics!
/// ```
#[derive(Clone, Debug)]
pub struct ReturnHandler<R> {
    returns: Vec<R>,
    /// Index of the value to hand out next
    position: usize,
    repeat: bool,
}

impl<R> ReturnHandler<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the schedule empty?
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Number of values in the schedule
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Stop repeating the schedule once it has been handed out.
    pub fn no_repeat(&mut self) -> &mut Self {
        self.repeat = false;
        self
    }

    /// Will the schedule start over after its last value?
    pub fn repeats(&self) -> bool {
        self.repeat
    }

    /// Replace the schedule.
    ///
    /// Any previous values are dropped, the schedule starts over from its first
    /// value, and repeating is switched back on.
    pub fn set_return<V: IntoReturns<R>>(&mut self, values: V) -> &mut Self {
        self.returns = values.into_returns();
        self.position = 0;
        self.repeat = true;
        trace!(values = self.returns.len(), "return schedule replaced");
        self
    }
}

impl<R: Clone + 'static> ReturnHandler<R> {
    /// Hand out the next scheduled value.
    ///
    /// Functions returning `()` need no schedule at all, and ignore any that
    /// was set.
    ///
    /// # Panics
    ///
    /// * If no values were scheduled and `R` is not `()`.
    /// * If the schedule doesn't repeat and has already been used up.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> R {
        if let Some(unit) = unit() {
            return unit;
        }
        assert!(!self.returns.is_empty(), "no return value has been set");
        if self.repeat && self.position == self.returns.len() {
            self.position = 0;
        }
        assert!(self.position < self.returns.len(), "return values exhausted");
        let value = self.returns[self.position].clone();
        self.position += 1;
        value
    }
}

impl<R> Default for ReturnHandler<R> {
    fn default() -> Self {
        ReturnHandler {
            returns: Vec::new(),
            position: 0,
            repeat: true,
        }
    }
}

/// `Some(())` if `R` is `()`, otherwise `None`
fn unit<R: 'static>() -> Option<R> {
    let unit: Box<dyn Any> = Box::new(());
    unit.downcast::<R>().ok().map(|r| *r)
}
