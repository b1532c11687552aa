/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Errors and warnings should
/// use `leptos::logging::error!` and `leptos::logging::warn!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// In the browser messages go to the console; native builds (unit tests)
/// write them to stderr.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Permuted via {} to {}", 2, 0);
/// ```
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {{
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!($($arg),+).into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", format!($($arg),+));
        }
    }};
}

pub(crate) use log;
