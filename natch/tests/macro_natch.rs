//! The `natch!` macro front-end.

use natch::natch;

#[test]
fn test_fizzbuzz() {
    let fizz = natch! { |n: &u32| (n % 3 == 0, n % 5 == 0);
        (true, true) => |_: u32| "FizzBuzz".to_string(),
        (true, false) => |_: u32| "Fizz".to_string(),
        (false, true) => |_: u32| "Buzz".to_string(),
        otherwise => |n: u32| n.to_string(),
    }
    .unwrap();

    let out: Vec<String> = (1..=15).map(|n| fizz.dispatch(n).unwrap()).collect();
    assert_eq!(out[0], "1");
    assert_eq!(out[2], "Fizz");
    assert_eq!(out[4], "Buzz");
    assert_eq!(out[14], "FizzBuzz");
    assert_eq!(fizz.len(), 3);
    assert!(fizz.has_fallback());
}

#[test]
fn test_without_trailing_comma_or_fallback() {
    let sign = natch!(|n: &i32| n.signum(); -1 => |_: i32| "neg", 1 => |_: i32| "pos")
        .unwrap();

    assert_eq!(sign.dispatch(-7).unwrap(), "neg");
    assert_eq!(sign.dispatch(7).unwrap(), "pos");
    assert_eq!(*sign.dispatch(0).unwrap_err().label(), 0);
}

#[test]
fn test_fallback_first_and_duplicate_case() {
    let dispatcher = natch! { |s: &&'static str| s.len();
        otherwise => |_: &'static str| 0,
        1usize => |_: &'static str| 1,
        1usize => |_: &'static str| 11,
    }
    .unwrap();

    assert_eq!(dispatcher.dispatch("a").unwrap(), 11);
    assert_eq!(dispatcher.dispatch("abc").unwrap(), 0);
}
