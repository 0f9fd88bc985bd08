// vim: tw=80
//! Storage for the arguments of recorded invocations

use std::slice;

/// Append-only record of argument tuples, one per invocation, in invocation
/// order.
#[derive(Clone, Debug)]
pub struct CallStore<A> {
    calls: Vec<A>
}

impl<A> CallStore<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls
    pub fn count(&self) -> usize {
        self.calls.len()
    }

    /// The arguments of the call at position `index`.
    ///
    /// # Panics
    ///
    /// If fewer than `index + 1` calls have been recorded.
    pub fn get(&self, index: usize) -> &A {
        match self.calls.get(index) {
            Some(args) => args,
            None => panic!("call index {} out of range ({} recorded)",
                           index, self.calls.len())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Iterate over recorded calls, oldest first.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.calls.iter()
    }

    /// Append one call's arguments.
    pub fn record(&mut self, args: A) {
        self.calls.push(args);
    }
}

impl<A> Default for CallStore<A> {
    fn default() -> Self {
        CallStore{calls: Vec::new()}
    }
}

impl<'a, A> IntoIterator for &'a CallStore<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
