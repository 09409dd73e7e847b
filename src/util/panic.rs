/// Asserts that evaluating `$run` panics. The expression is wrapped in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so it may borrow test locals mutably.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "expression failed to panic")
    };
    ($run:expr, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }));
        assert!(caught.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
