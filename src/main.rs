use anyhow::Result;
use std::env;

use tallyo::app;
use tallyo::store::{platform_layout, JsonStore};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let store = JsonStore::new(platform_layout()?);

    app::run(&store, &args)
}
