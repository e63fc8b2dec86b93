use std::sync::LazyLock;
use tokio::runtime::{Builder, Runtime};

// Drives blocking searches; lookups run on its worker threads
pub static TOKIO_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .thread_name("holiday-lookup")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime")
});
