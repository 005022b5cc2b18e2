mod commands;
mod terminal;

use commands::{CommandLine, Commands, create, plan};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.config();
    let settings = commands.fleet_settings();
    print::banner(cfg.no_banner, cfg.quiet, &settings.doc_url);

    match commands.command.unwrap_or(Commands::Create) {
        Commands::Create => {
            print::header("vm details", cfg.quiet);
            create::create(&cfg, settings)
        }
        Commands::Plan {
            hostname,
            ip,
            count,
        } => {
            print::header("provisioning plan", cfg.quiet);
            plan::plan(&hostname, &ip, &count, &settings, &cfg)
        }
    }
}
