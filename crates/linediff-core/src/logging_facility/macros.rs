//! Operation lifecycle macros
//!
//! Every file-level operation emits one `start` event and then exactly one
//! of `end` or `end_error`. All three share the `component` / `op` / `event`
//! prefix and accept trailing `key = value` fields in `tracing` syntax.
//!
//! Paths go through `$crate`, so callers only need `linediff-core` in their
//! dependency list.

/// Shared expansion: one event at `$level` tagged with a schema event name.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)+)?) => {
        $crate::tracing::event!(
            $crate::tracing::Level::$level,
            component = module_path!(),
            op = $op,
            event = $crate::linediff_core_types::schema::$event,
            $($($field)+)?
        )
    };
}

/// Log the start of an operation at `INFO`.
///
/// ```
/// # use linediff_core::log_op_start;
/// log_op_start!("diff_files");
/// log_op_start!("diff_files", old_path = "a.txt", new_path = "b.txt");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(INFO, $op, EVENT_START $(, $($field)+)?)
    };
}

/// Log the successful end of an operation at `INFO`. `duration_ms` is required.
///
/// ```
/// # use linediff_core::log_op_end;
/// log_op_end!("diff_files", duration_ms = 42);
/// log_op_end!("diff_files", duration_ms = 42, distance = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(
            INFO,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Log a failed operation at `ERROR`.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code are recorded as `err_kind` and `err_code`.
///
/// ```
/// # use linediff_core::{log_op_error, errors::LineDiffError};
/// let err = LineDiffError::FileNotFound { path: "a.txt".to_string() };
/// log_op_error!("diff_files", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__log_op_event!(
            ERROR,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)+)?
        )
    }};
}
