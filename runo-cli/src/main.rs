mod terminal;

use std::{
    env::{args, var},
    io::{stdin, stdout},
};

use color_eyre::eyre::WrapErr;
use runo::uno::Uno;
use terminal::{parse_player_names, TerminalPrompter};
use tracing::info;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let stdin = stdin();
    let mut prompter = TerminalPrompter::new(stdin.lock(), stdout());

    // Names come from the command line, e.g. `runo Ann Ben,Cy`
    let arg_names = parse_player_names(&args().skip(1).collect::<Vec<_>>().join(","));
    let player_names = if arg_names.is_empty() {
        prompter.read_player_names()?
    } else {
        arg_names
    };

    let mut uno = match var("RUNO_SEED") {
        Ok(seed) => {
            let seed = seed
                .parse::<u64>()
                .wrap_err_with(|| format!("RUNO_SEED must be an unsigned integer, got `{seed}`"))?;
            info!(seed, "using a fixed seed");
            Uno::with_seed(player_names, seed)?
        }
        Err(_) => Uno::new(player_names)?,
    };

    println!("Starting UNO game! Type '-h' at any prompt for the rules.");
    uno.run(&mut prompter)?;

    Ok(())
}
