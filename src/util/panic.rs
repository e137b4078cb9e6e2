/// Asserts that the provided block panics. A second form also checks that the panic message
/// contains the provided text, which is how the panicking twins of `try_` methods are tested.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, contains $text:expr) => {
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .expect_err("assertion failed to panic");
        let message = payload.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($text),
            "panic message {message:?} doesn't contain {:?}",
            $text
        );
        println!("^ panic caught");
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

pub(crate) use assert_panics;
