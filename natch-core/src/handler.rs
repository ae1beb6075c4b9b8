//! Case handler trait.
//!
//! A handler is the terminal point of a dispatch: it receives the owned
//! input once its case has been selected and produces the dispatcher's
//! output. Whatever the handler does (including returning an error value) is
//! passed back to the caller unmodified.

use std::fmt;

/// A handler registered for a case.
///
/// Any `Fn(I) -> O + Send + Sync` closure or function pointer is a handler.
/// Implement the trait directly for stateful handlers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle input of type `{I}`",
    label = "missing `CaseHandler<{I}>` implementation",
    note = "Closures of the form `Fn({I}) -> Output` implement `CaseHandler<{I}>`."
)]
pub trait CaseHandler<I>: Send + Sync {
    /// The value produced by the handler.
    type Output;

    /// Handles `input`.
    fn call(&self, input: I) -> Self::Output;
}

// Blanket impl for closures
impl<I, O, F> CaseHandler<I> for F
where
    F: Fn(I) -> O + Send + Sync,
{
    type Output = O;

    fn call(&self, input: I) -> Self::Output {
        (self)(input)
    }
}

/// A type-erased handler.
///
/// Lets handlers of different concrete types (typically distinct closures)
/// share one case table.
pub struct BoxCaseHandler<I, O> {
    inner: Box<dyn CaseHandler<I, Output = O>>,
}

impl<I, O> BoxCaseHandler<I, O> {
    /// Erases the concrete type of `handler`.
    pub fn new<H>(handler: H) -> Self
    where
        H: CaseHandler<I, Output = O> + 'static,
    {
        Self {
            inner: Box::new(handler),
        }
    }
}

impl<I, O> CaseHandler<I> for BoxCaseHandler<I, O> {
    type Output = O;

    fn call(&self, input: I) -> Self::Output {
        self.inner.call(input)
    }
}

impl<I, O> fmt::Debug for BoxCaseHandler<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxCaseHandler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxCaseHandler, CaseHandler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Tally {
        calls: AtomicUsize,
    }

    impl CaseHandler<u32> for Tally {
        type Output = usize;

        fn call(&self, input: u32) -> Self::Output {
            self.calls.fetch_add(input as usize, Ordering::SeqCst) + input as usize
        }
    }

    #[test]
    fn test_closure_handler() {
        let double = |x: u32| x * 2;
        assert_eq!(double.call(21), 42);
    }

    #[test]
    fn test_boxed_handlers_share_a_type() {
        let handlers: Vec<BoxCaseHandler<u32, u32>> = vec![
            BoxCaseHandler::new(|x: u32| x + 1),
            BoxCaseHandler::new(|x: u32| x * 10),
        ];
        let outputs: Vec<u32> = handlers.iter().map(|h| h.call(3)).collect();
        assert_eq!(outputs, vec![4, 30]);
    }

    #[test]
    fn test_stateful_handler() {
        let tally = Tally {
            calls: AtomicUsize::new(0),
        };
        assert_eq!(tally.call(2), 2);
        assert_eq!(tally.call(5), 7);
    }
}
