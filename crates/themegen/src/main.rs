use clap::Parser;
use console::style;

use themegen::{logging, run, Cli, Outcome, GENERATED_MESSAGE, UP_TO_DATE_MESSAGE};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli)? {
        Outcome::Written(_) => println!("{}", style(GENERATED_MESSAGE).green()),
        Outcome::UpToDate(_) => println!("{}", style(UP_TO_DATE_MESSAGE).green()),
        Outcome::Printed(css) => print!("{}", css),
    }

    Ok(())
}
