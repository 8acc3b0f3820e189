use clap::Parser;

use prose_guard::cli::{Cli, Commands};
use prose_guard::commands::{run_check, run_init, run_rules};
use prose_guard::logging;
use prose_guard::output::stderr_supports_color;

fn main() {
    let cli = Cli::parse();
    let color = cli.color_mode();
    logging::init(cli.verbose, cli.quiet, stderr_supports_color(color));

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules => run_rules(),
        Commands::Init(args) => run_init(args, color),
    };

    std::process::exit(exit_code);
}
