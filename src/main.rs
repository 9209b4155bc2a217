mod app;
mod backend;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as ClapApp, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("agency-tui")
        .version(crate_version!())
        .about("Browse the agency and send a job application from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("Overrides the form endpoint applications are posted to")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(endpoint) = matches.value_of("endpoint") {
        config.set_form_endpoint(endpoint)?;
    }

    App::start(config).await
}
