mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use quadra_common::config::Config;
use quadra_core::session;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session::run(stdin.lock(), &mut stdout, &cfg)?;
    Ok(())
}
