// log.rs - Console logging
//
// On wasm32 messages go to the browser console. Native builds (tests)
// print to stderr instead, since the JS imports are unavailable there.

#[doc(hidden)]
pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

#[doc(hidden)]
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {msg}");
}

#[doc(hidden)]
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("error: {msg}");
}

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log::log(&format!($($t)*))
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::log::warn(&format!($($t)*))
    };
}

pub(crate) use console_log;
pub(crate) use console_warn;
