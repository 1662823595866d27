//! Type-safe logging macros using Code types with Display support
//!
//! Every macro checks for an installed logger before formatting its message
//! or context values, so disabled logging costs one atomic load.

// ============================================================================
// CONTEXT HELPER
// ============================================================================

/// Format `"key" => value` pairs and hand them to a logging function
#[doc(hidden)]
#[macro_export]
macro_rules! __with_log_context {
    ($log:expr, $($key:expr => $value:expr),+) => {{
        let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        let context_refs: Vec<(&str, &str)> = context_strings
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        $log(context_refs)
    }};
}

// ============================================================================
// ERROR LOGGING MACROS
// ============================================================================

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_error_with_context($code, $message, None, vec![])
        }
    };

    ($code:expr, $message:expr, position = $position:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_error_with_context($code, $message, Some($position), vec![])
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| $crate::logging::log_error_with_context($code, $message, None, context),
                $($key => $value),+
            )
        }
    };

    ($code:expr, $message:expr, position = $position:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| {
                    $crate::logging::log_error_with_context(
                        $code,
                        $message,
                        Some($position),
                        context,
                    )
                },
                $($key => $value),+
            )
        }
    };
}

// ============================================================================
// SUCCESS LOGGING MACROS
// ============================================================================

/// Log success with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_success_with_context($code, $message, vec![])
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| $crate::logging::log_success_with_context($code, $message, context),
                $($key => $value),+
            )
        }
    };
}

// ============================================================================
// INFO LOGGING MACROS
// ============================================================================

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_info_with_context($message, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| $crate::logging::log_info_with_context($message, context),
                $($key => $value),+
            )
        }
    };
}

// ============================================================================
// WARNING LOGGING MACROS
// ============================================================================

/// Log warning message, optionally coded and positioned
#[macro_export]
macro_rules! log_warning {
    (code = $code:expr, $message:expr, position = $position:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_warning_with_context(
                Some($code),
                $message,
                Some($position),
                vec![],
            )
        }
    };

    (
        code = $code:expr,
        $message:expr,
        position = $position:expr,
        $($key:expr => $value:expr),+
    ) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| {
                    $crate::logging::log_warning_with_context(
                        Some($code),
                        $message,
                        Some($position),
                        context,
                    )
                },
                $($key => $value),+
            )
        }
    };

    ($message:expr) => {
        if $crate::logging::is_initialized() {
            $crate::logging::log_warning_with_context(None, $message, None, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            $crate::__with_log_context!(
                |context| $crate::logging::log_warning_with_context(None, $message, None, context),
                $($key => $value),+
            )
        }
    };
}

// ============================================================================
// DEBUG LOGGING MACROS
// ============================================================================

/// Log debug message; skipped entirely unless a logger accepts debug events
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::is_debug_enabled() {
            $crate::logging::log_debug_with_context($message, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_debug_enabled() {
            $crate::__with_log_context!(
                |context| $crate::logging::log_debug_with_context($message, context),
                $($key => $value),+
            )
        }
    };
}
