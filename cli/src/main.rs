mod commands;
mod terminal;

use commands::{CommandLine, poll};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    print::banner(cfg.quiet);

    poll::poll(&commands.config_file, commands.json_file.as_deref(), &cfg).await
}
