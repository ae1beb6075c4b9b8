/// Build a dispatcher from a classifier and a list of cases.
///
/// Expands to a [`MatchBuilder`](crate::MatchBuilder) chain and evaluates to
/// `Result<Dispatcher, BuildError>`. The `otherwise` keyword registers the
/// fallback; cases may appear in any order and a later case replaces an
/// earlier one with the same label.
///
/// # Example
///
/// ```rust,ignore
/// use natch::natch;
///
/// let fizz = natch! { |n: &u32| (n % 3 == 0, n % 5 == 0);
///     (true, true) => |_: u32| "FizzBuzz".to_string(),
///     (true, false) => |_: u32| "Fizz".to_string(),
///     (false, true) => |_: u32| "Buzz".to_string(),
///     otherwise => |n: u32| n.to_string(),
/// }?;
/// ```
#[macro_export]
macro_rules! natch {
    (@cases $builder:expr;) => {
        $builder.build()
    };
    (@cases $builder:expr; otherwise => $handler:expr $(, $($rest:tt)*)?) => {
        $crate::natch!(@cases $builder.otherwise($handler); $($($rest)*)?)
    };
    (@cases $builder:expr; $label:expr => $handler:expr $(, $($rest:tt)*)?) => {
        $crate::natch!(@cases $builder.case($label, $handler); $($($rest)*)?)
    };
    ($classify:expr; $($cases:tt)*) => {
        $crate::natch!(@cases $crate::MatchBuilder::new($classify); $($cases)*)
    };
}
