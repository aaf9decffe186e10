use env_logger::Env;

/// Initialize logging to stderr. Silent by default so the wrapped program
/// owns stdout; `RUST_LOG=debug` traces the exact invocation of the child.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
