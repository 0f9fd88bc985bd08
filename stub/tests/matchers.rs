// vim: tw=80
//! Arguments may be matched by value, ignored, checked for null, or checked
//! with a predicate.

use std::{ptr, rc::Rc};

use predicates::prelude::PredicateBooleanExt;
use stub::*;

#[derive(Clone, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

/// A type with no PartialEq, which can only be matched without literals
#[derive(Debug)]
struct Opaque {
    id: u32,
}

mod literal {
    use super::*;

    #[test]
    fn user_type() {
        let f = Function::<fn(Point)>::new();
        f.call(Point{x: 1, y: 2});
        assert!(f.expect_calls().with(Point{x: 1, y: 2}).to_bool());
        assert!(!f.expect_calls().with(Point{x: 2, y: 1}).to_bool());
    }

    #[test]
    fn string() {
        let f = Function::<fn(String)>::new();
        f.call(String::from("abc"));
        assert!(f.expect_calls().with(String::from("abc")).to_bool());
    }

    #[test]
    fn float() {
        let f = Function::<fn(f64)>::new();
        f.call(1.5f64);
        assert!(f.expect_calls().with(1.5f64).to_bool());
        assert!(!f.expect_calls().with(f64::NAN).to_bool());
    }
}

mod wildcard {
    use super::*;

    #[test]
    fn any_first_argument() {
        let f = Function::<fn(u32, u32)>::new();
        f.call(99u32, 5u32);
        assert!(f.expect_calls().with(ignore(), 5u32).to_bool());
        assert!(!f.expect_calls().with(ignore(), 6u32).to_bool());
    }

    #[test]
    fn without_partial_eq() {
        let f = Function::<fn(Opaque, u32)>::new();
        f.call(Opaque{id: 1}, 2u32);
        assert!(f.expect_calls().with(ignore(), 2u32).to_bool());
    }

    #[test]
    fn all_arguments() {
        let f = Function::<fn(u8, u16, u32)>::new();
        f.call(1u8, 2u16, 3u32);
        assert!(f.expect_calls().with(ignore(), ignore(), ignore()).to_bool());
    }
}

mod non_null {
    use super::*;

    #[test]
    fn const_pointer() {
        let f = Function::<fn(u32, *const u8)>::new();
        let buffer = [0u8; 8];
        f.call(3u32, buffer.as_ptr());
        assert!(f.expect_calls().with(3u32, not_null()).to_bool());
    }

    #[test]
    fn mut_pointer() {
        let f = Function::<fn(*mut u8)>::new();
        let mut buffer = [0u8; 8];
        f.call(buffer.as_mut_ptr());
        assert!(f.expect_calls().with(not_null()).to_bool());
    }

    #[test]
    fn null_pointer() {
        let f = Function::<fn(u32, *const u8)>::new();
        f.call(3u32, ptr::null::<u8>());
        assert!(!f.expect_calls().with(3u32, not_null()).to_bool());
    }

    #[test]
    fn option() {
        let f = Function::<fn(Option<Box<u32>>)>::new();
        f.call(Some(Box::new(1u32)));
        f.call(None::<Box<u32>>);
        assert!(!f.expect_calls().with(not_null()).with(not_null()).to_bool());
        assert!(f.expect_calls().with(not_null()).with(None).to_bool());
    }
}

mod custom {
    use super::*;

    #[test]
    fn compare_one_field() {
        let f = Function::<fn(Point)>::new();
        f.call(Point{x: 1, y: 2});
        assert!(f.expect_calls()
            .with(compare(|p: &Point| p.y == 2))
            .to_bool());
        assert!(!f.expect_calls()
            .with(compare(|p: &Point| p.x == 2))
            .to_bool());
    }

    #[test]
    fn compare_without_partial_eq() {
        let f = Function::<fn(Opaque)>::new();
        f.call(Opaque{id: 7});
        f.call(Opaque{id: 8});
        assert!(f.expect_calls()
            .with(compare(|o: &Opaque| o.id == 7))
            .with(compare(|o: &Opaque| o.id > 7))
            .to_bool());
    }

    #[test]
    fn predicates() {
        let f = Function::<fn(u32, u32)>::new();
        f.call(4u32, 10u32);
        assert!(f.expect_calls()
            .with(matching(predicate::lt(5u32)),
                  matching(predicate::in_iter([10u32, 20])))
            .to_bool());
        assert!(!f.expect_calls()
            .with(matching(predicate::gt(5u32)), 10u32)
            .to_bool());
    }

    #[test]
    fn combined_predicates() {
        let f = Function::<fn(u32)>::new();
        f.call(4u32);
        let in_range = predicate::ge(1u32).and(predicate::le(5u32));
        assert!(f.expect_calls().with(matching(in_range)).to_bool());
    }

    /// The predicate only runs when the arguments before it match
    #[test]
    fn short_circuit() {
        let f = Function::<fn(u32, u32)>::new();
        f.call(1u32, 2u32);
        assert!(!f.expect_calls()
            .with(2u32, compare(|_: &u32| -> bool {
                panic!("Shouldn't get here!")
            }))
            .to_bool());
    }

    #[test]
    #[should_panic(expected = "predicate failed")]
    fn predicate_panic_propagates() {
        let f = Function::<fn(u32)>::new();
        f.call(1u32);
        f.expect_calls()
            .with(compare(|_: &u32| -> bool { panic!("predicate failed") }))
            .to_bool();
    }

    /// A predicate may look at the Function it is checking
    #[test]
    fn reads_function() {
        let f = Rc::new(Function::<fn(usize)>::new());
        f.call(1usize);
        let g = f.clone();
        assert!(f.expect_calls()
            .with(compare(move |x: &usize| *x == g.calls()))
            .to_bool());
    }

    /// A predicate may not invoke the Function while its calls are compared
    #[test]
    #[should_panic(expected = "already borrowed")]
    fn invokes_function() {
        let f = Rc::new(Function::<fn(u32)>::new());
        f.call(1u32);
        let g = f.clone();
        f.expect_calls()
            .with(compare(move |_: &u32| {
                g.call(2u32);
                true
            }))
            .to_bool();
    }

    #[test]
    fn prebuilt_descriptor() {
        let f = Function::<fn(u32)>::new();
        f.call(1u32);
        let d: Descriptor<u32> = compare(|x: &u32| *x == 1).into_descriptor();
        assert!(f.expect_calls().with(d.clone()).to_bool());
        assert!(f.expect_calls().with(Descriptor::Ignore).to_bool());
    }
}
