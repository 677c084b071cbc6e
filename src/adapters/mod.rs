// Adapters layer: concrete implementations of domain ports.

pub mod tracing_observer;

pub use tracing_observer::TracingObserver;
