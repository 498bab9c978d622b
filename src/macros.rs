//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// Off-wasm (native unit tests) the arguments are still type-checked but
/// nothing is printed, so reducers can log freely without dragging a JS
/// runtime into `cargo test`.
///
/// ```rust,ignore
/// debug_log!("Opening database {}", name);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log an error to the browser console (all build profiles).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
