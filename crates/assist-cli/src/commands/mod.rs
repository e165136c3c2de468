pub mod config_ops;
pub mod query_ops;
pub mod replay_ops;

/// Unwrap `$result` or print the error with the given format and exit(1).
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
