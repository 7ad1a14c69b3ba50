//! Log output for the binaries
//!
//! `init` installs the `tracing` subscriber described by `[logging]`;
//! `log_store_events` mirrors every store transition into that log.

use crate::store::{RandomSource, Store, StoreEvent, SubscriptionId};

/// Subscribe a listener that logs each store event at debug level
pub fn log_store_events<R: RandomSource>(store: &mut Store<R>) -> SubscriptionId {
    store.subscribe(|event| match event {
        StoreEvent::SearchChanged(query) => {
            tracing::debug!(query = %query, "Search changed")
        }
        StoreEvent::ViewChanged(view) => tracing::debug!(view = %view, "View changed"),
        other => tracing::debug!(event = ?other, "Store event"),
    })
}

#[cfg(feature = "cli")]
pub use subscriber::init;

#[cfg(feature = "cli")]
mod subscriber {
    use tracing_subscriber::util::TryInitError;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    use crate::config::LoggingConfig;

    /// Install the global subscriber: `RUST_LOG` wins over the configured
    /// level, and `format = "json"` switches to JSON lines. Output goes to
    /// stderr so stdout stays clean for rendered pages and exports.
    pub fn init(logging: &LoggingConfig) -> Result<(), TryInitError> {
        let filter = EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("thummar={}", logging.level)),
        );

        if logging.format == "json" {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ScriptedRandom, User, View};

    #[test]
    fn test_event_logger_is_a_live_subscription() {
        let mut store = Store::with_source(ScriptedRandom::constant(0.5));
        let id = log_store_events(&mut store);

        store.login(User::demo());
        store.set_view(View::Inventory);
        store.set_search("dav");
        assert!(store.refresh_if_pending());

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_init_honors_json_format_once() {
        let logging = crate::config::LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert!(init(&logging).is_ok());
        assert!(init(&logging).is_err());
    }
}
