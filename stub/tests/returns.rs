// vim: tw=80
//! A Function hands out its scheduled return values in order.

use stub::*;

#[test]
fn single_value_repeats_forever() {
    let mut f = Function::<fn(u32) -> u32>::new();
    f.set_return(5);
    for i in 0..100u32 {
        assert_eq!(5, f.call(i));
    }
}

#[test]
fn values_cycle() {
    let mut f = Function::<fn() -> u32>::new();
    f.set_return([4, 3]);
    let got = (0..4).map(|_| f.call()).collect::<Vec<_>>();
    assert_eq!(vec![4, 3, 4, 3], got);
}

#[test]
fn vec_of_values() {
    let mut f = Function::<fn() -> &'static str>::new();
    f.set_return(vec!["a", "b", "c"]);
    assert_eq!("a", f.call());
    assert_eq!("b", f.call());
    assert_eq!("c", f.call());
    assert_eq!("a", f.call());
}

#[test]
fn no_repeat() {
    let mut f = Function::<fn() -> u32>::new();
    f.set_return([5, 3]).no_repeat();
    assert_eq!(5, f.call());
    assert_eq!(3, f.call());
}

#[test]
#[should_panic(expected = "return values exhausted")]
fn no_repeat_exhausted() {
    let mut f = Function::<fn() -> u32>::new();
    f.set_return([5, 3]).no_repeat();
    f.call();
    f.call();
    f.call();
}

#[test]
#[should_panic(expected = "no return value has been set")]
fn never_set() {
    let f = Function::<fn(u32) -> bool>::new();
    f.call(1u32);
}

/// The call is recorded even if there is nothing to return
#[test]
fn recorded_before_return() {
    let f = Function::<fn(u32) -> bool>::new();
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        f.call(1u32)
    }));
    assert!(r.is_err());
    assert_eq!(1, f.calls());
}

#[test]
fn unit_needs_no_schedule() {
    let f = Function::<fn(u32)>::new();
    f.call(1u32);
    f.call(2u32);
    assert_eq!(2, f.calls());
}

/// A schedule set for `()` is never used up
#[test]
fn unit_with_no_repeat() {
    let mut f = Function::<fn()>::new();
    f.set_return(()).no_repeat();
    f.call();
    f.call();
    assert_eq!(2, f.calls());
}

#[test]
fn set_return_replaces_schedule() {
    let mut f = Function::<fn() -> i64>::new();
    f.set_return([1, 2, 3]).no_repeat();
    assert_eq!(1, f.call());
    f.set_return(-1);
    assert_eq!(-1, f.call());
    assert_eq!(-1, f.call());
}

/// A non-Copy return value is cloned on each call
#[test]
fn cloned_values() {
    let mut f = Function::<fn() -> Vec<u32>>::new();
    f.set_return(vec![1u32, 2]);
    assert_eq!(vec![1, 2], f.call());
    assert_eq!(vec![1, 2], f.call());
}

#[test]
fn handler() {
    let mut f = Function::<fn() -> char>::new();
    let r = f.set_return(['x', 'y', 'z']);
    assert_eq!(3, r.len());
    assert!(!r.is_empty());
    assert!(r.repeats());
    assert!(!r.no_repeat().repeats());
}
