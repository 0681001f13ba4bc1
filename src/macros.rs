/// Return early with the given error if the predicate does not hold.
macro_rules! ensure {
    ($predicate:expr, $err:expr $(,)?) => {
        if !$predicate {
            return Err($err.into());
        }
    };
}
