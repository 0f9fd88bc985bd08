// vim: tw=80
//! Positional operations on argument tuples
//!
//! Every recorded call is stored as a tuple `(A0, A1, ..)`, and every expected
//! call as the matching tuple of [`Descriptor`]s.  The traits here are
//! implemented for tuples of up to twelve elements.

use std::fmt;

use crate::descriptor::{Descriptor, Literal};

/// An argument tuple that can be compared against expected descriptors.
pub trait Arguments: Sized + 'static {
    /// One [`Descriptor`] per position
    type Descriptors: Clone;

    /// Number of positions
    const ARITY: usize;

    /// Position of the first argument that doesn't satisfy its descriptor, or
    /// `None` if they all do.
    ///
    /// Later positions are not evaluated once one fails.
    fn mismatch(&self, expected: &Self::Descriptors) -> Option<usize>;

    /// Does every argument satisfy its descriptor?
    fn matches(&self, expected: &Self::Descriptors) -> bool {
        self.mismatch(expected).is_none()
    }
}

/// Argument tuples that can be turned into descriptors expecting exactly
/// themselves.
pub trait LiteralArguments: Arguments {
    fn literals(&self) -> Self::Descriptors;
}

/// Argument tuples that can be printed for diagnostics.
pub trait PrintArguments: Arguments {
    /// Write one `Arg i: value` line per position.
    fn print(&self, out: &mut fmt::Formatter) -> fmt::Result;

    /// Render the descriptor at `position`.
    fn describe(expected: &Self::Descriptors, position: usize)
        -> Option<String>;

    /// Explain why the argument at `position` failed its predicate, if the
    /// descriptor there is one.
    fn explain(&self, expected: &Self::Descriptors, position: usize)
        -> Option<String>;
}

macro_rules! one {
    ($x:tt) => { 1 }
}

macro_rules! impl_arguments {
    ($( $A:ident $X:ident $a:ident $i:tt ),*) => {
        impl<$($A: 'static,)*> Arguments for ($($A,)*) {
            type Descriptors = ($(Descriptor<$A>,)*);

            const ARITY: usize = 0 $(+ one!($i))*;

            #[allow(unused_variables)]
            fn mismatch(&self, expected: &Self::Descriptors) -> Option<usize> {
                $(
                    if !expected.$i.matches(&self.$i) {
                        return Some($i);
                    }
                )*
                None
            }
        }

        impl<$($A,)*> LiteralArguments for ($($A,)*)
            where $($A: Clone + PartialEq + 'static,)*
        {
            fn literals(&self) -> Self::Descriptors {
                ($(Descriptor::Literal(Literal::new(self.$i.clone())),)*)
            }
        }

        impl<$($A,)*> PrintArguments for ($($A,)*)
            where $($A: fmt::Debug + 'static,)*
        {
            #[allow(unused_variables)]
            fn print(&self, out: &mut fmt::Formatter) -> fmt::Result {
                $(
                    writeln!(out, "Arg {}: {:?}", $i, self.$i)?;
                )*
                Ok(())
            }

            #[allow(unused_variables)]
            fn describe(expected: &Self::Descriptors, position: usize)
                -> Option<String>
            {
                match position {
                    $( $i => Some(expected.$i.to_string()), )*
                    _ => None
                }
            }

            #[allow(unused_variables)]
            fn explain(&self, expected: &Self::Descriptors, position: usize)
                -> Option<String>
            {
                match position {
                    $( $i => expected.$i.explain(&self.$i), )*
                    _ => None
                }
            }
        }
    }
}

for_each_arity!{impl_arguments}

#[cfg(test)]
mod t {
    use super::*;
    use crate::descriptor::{ignore, IntoDescriptor};

    #[test]
    fn arity() {
        assert_eq!(0, <() as Arguments>::ARITY);
        assert_eq!(1, <(u8,) as Arguments>::ARITY);
        assert_eq!(3, <(u8, u16, u32) as Arguments>::ARITY);
    }

    #[test]
    fn empty_tuple_always_matches() {
        assert_eq!(None, ().mismatch(&()));
    }

    #[test]
    fn first_mismatch() {
        let expected = (
            5u32.into_descriptor(),
            ignore().into_descriptor(),
            7u32.into_descriptor()
        );
        assert_eq!(None, (5u32, 'x', 7u32).mismatch(&expected));
        assert_eq!(Some(0), (4u32, 'x', 8u32).mismatch(&expected));
        assert_eq!(Some(2), (5u32, 'y', 8u32).mismatch(&expected));
    }

    #[test]
    fn literals_match_themselves() {
        let args = (1u8, String::from("x"), Some(3i64));
        assert!(args.matches(&args.literals()));
        let other = (1u8, String::from("y"), Some(3i64));
        assert_eq!(Some(1), other.mismatch(&args.literals()));
    }

    #[test]
    fn describe() {
        let expected = (5u32.into_descriptor(), ignore().into_descriptor());
        let d0 = <(u32, u32) as PrintArguments>::describe(&expected, 0);
        let d1 = <(u32, u32) as PrintArguments>::describe(&expected, 1);
        let d2 = <(u32, u32) as PrintArguments>::describe(&expected, 2);
        assert_eq!(Some("5".to_string()), d0);
        assert_eq!(Some("_".to_string()), d1);
        assert_eq!(None, d2);
    }

    #[test]
    fn twelve() {
        type Twelve = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);
        let args: Twelve = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
        assert_eq!(12, <Twelve as Arguments>::ARITY);
        assert!(args.matches(&args.literals()));
    }
}
