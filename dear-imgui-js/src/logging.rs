//! Logging setup for native hosts
//!
//! The bindings emit `tracing` events (slot degradation at `trace`, context
//! lifecycle at `debug`, string truncation and reflection errors at `warn`).
//! Native hosts and tests install a subscriber here; the web crate routes
//! `log` records to the browser console instead.

cfg_if::cfg_if! {
    if #[cfg(feature = "tracing")] {
        use tracing_subscriber::{EnvFilter, fmt};

        const DEFAULT_FILTER: &str =
            "dear_imgui_js=info,dear_imgui_js_marshal=info,dear_imnodes_js=info,warn";

        /// Installs a `fmt` subscriber filtered by `RUST_LOG`, or by a default
        /// that shows info+ for the binding crates.
        ///
        /// Returns `false` if a global subscriber was already set.
        pub fn init_tracing() -> bool {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            install(filter)
        }

        /// Installs a `fmt` subscriber with an explicit filter directive,
        /// e.g. `"dear_imgui_js_marshal=trace"` to see every null slot.
        pub fn init_tracing_with_filter(filter: &str) -> bool {
            install(EnvFilter::new(filter))
        }

        fn install(filter: EnvFilter) -> bool {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .try_init()
                .is_ok()
        }

        pub(crate) fn log_context_created(addr: usize) {
            tracing::debug!("Dear ImGui context {:#x} created", addr);
        }

        pub(crate) fn log_context_destroyed(addr: usize) {
            tracing::debug!("Dear ImGui context {:#x} destroyed", addr);
        }
    } else {
        pub fn init_tracing() -> bool {
            false
        }

        pub fn init_tracing_with_filter(_filter: &str) -> bool {
            false
        }

        pub(crate) fn log_context_created(_addr: usize) {}

        pub(crate) fn log_context_destroyed(_addr: usize) {}
    }
}
