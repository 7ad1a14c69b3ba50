//! Thummar Analytics demo
//!
//! Signs in as the demo user, generates a dataset and prints the dashboard.

use thummar::config::Config;
use thummar::logging;
use thummar::store::{StdRandom, Store, User};
use thummar::view;

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    logging::init(&config.logging)?;

    tracing::info!("Thummar Analytics v{}", env!("CARGO_PKG_VERSION"));

    let rng = StdRandom::from_seed_option(config.demo.seed);
    let mut store = Store::with_source(rng).with_preferences(config.ui.preferences());
    logging::log_store_events(&mut store);

    print!("{}", view::render(&store));
    println!();

    store.login(User::demo());
    store.generate_data();

    print!("{}", view::render(&store));

    tracing::info!("Demo complete");
    Ok(())
}
