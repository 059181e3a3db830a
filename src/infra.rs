/// Enter a `trace`-level span that lasts until the end of the enclosing block.
#[macro_export]
macro_rules! __span {
    ($name:expr) => {
        let _span = ::tracing::trace_span!($name).entered();
    };
}

// Workaround for the fact that `macro_export` puts the macro at the crate root. (`macro_export`
// would put the macro at `crate::span` instead of `crate::infra::span` like we want.)
pub use crate::__span as span;
