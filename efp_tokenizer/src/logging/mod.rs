//! Global logging module for the formula tokenizer
//!
//! Provides thread-safe global logging with per-formula context and a
//! clean macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, EventSummary, Logger, LoggingService, MemoryLogger, NullLogger,
    StructuredLogger,
};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static FORMULA_CONTEXT: RefCell<Option<FormulaContext>> = const { RefCell::new(None) };
}

/// The formula currently being tokenized on this thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaContext {
    pub formula: String,
    pub formula_id: usize,
}

impl FormulaContext {
    pub fn new(formula: &str, formula_id: usize) -> Self {
        let limit = config::get_max_context_formula_length();
        let formula = if formula.chars().count() > limit {
            let mut cut: String = formula.chars().take(limit).collect();
            cut.push_str("...");
            cut
        } else {
            formula.to_string()
        };

        Self {
            formula,
            formula_id,
        }
    }
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(LoggingService::with_config());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    let test_codes = ["ERR001", "E005", "E020", "E040"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether a debug event would reach any logger (used by log_debug!)
pub fn is_debug_enabled() -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(LogLevel::Debug))
        .unwrap_or(false)
}

// ============================================================================
// FORMULA CONTEXT MANAGEMENT
// ============================================================================

pub fn set_formula_context(formula: &str, formula_id: usize) {
    FORMULA_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(FormulaContext::new(formula, formula_id));
    });
}

pub fn clear_formula_context() {
    FORMULA_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with formula context
pub fn with_formula_context<F, R>(formula: &str, formula_id: usize, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_formula_context(formula, formula_id);
    let result = f();
    clear_formula_context();
    result
}

/// Get current formula context (used by macros)
pub fn get_current_formula_context() -> Option<FormulaContext> {
    FORMULA_CONTEXT.with(|ctx| ctx.borrow().clone())
}

fn attach_formula_context(event: LogEvent) -> LogEvent {
    match get_current_formula_context() {
        Some(ctx) => event
            .with_context("formula", &ctx.formula)
            .with_context("formula_id", &ctx.formula_id.to_string()),
        None => event,
    }
}

fn dispatch(event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = event;
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(attach_formula_context(event));
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    position: Option<usize>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(p) = position {
        event = event.with_position(p);
    }
    dispatch(event, context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), context);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::info(message), context);
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(
    code: Option<Code>,
    message: &str,
    position: Option<usize>,
    context: Vec<(&str, &str)>,
) {
    let mut event = match code {
        Some(code) => LogEvent::warning_with_code(code, message),
        None => LogEvent::warning(message),
    };
    if let Some(p) = position {
        event = event.with_position(p);
    }
    dispatch(event, context);
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::debug(message), context);
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Active level: {}\n", logger.min_level().as_str()));
    }

    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_error(code, message);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}
