use clap::Parser;
use monco::app::App;
use monco::cli::{run_filter, Cli, Mode};
use monco::logging;
use monco::query::parse_query;
use monco::ui::TuiManager;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => logging::init_file(path)?,
        None if cli.command.is_some() => logging::init_stderr()?,
        None => {}
    }

    match &cli.command {
        None => {
            let mut app = App::new(cli.config());
            let mut tui = TuiManager::new()?;

            // The TUI handles all user input until quit
            tui.run_event_loop(&mut app)?;
            drop(tui);

            println!("Bye!");
            Ok(ExitCode::SUCCESS)
        }
        Some(Mode::Filter {
            query,
            number,
            explain,
        }) => {
            let query = match parse_query(query) {
                Ok(query) => query,
                Err(err) => {
                    eprintln!("monco: {}", err);
                    return Ok(ExitCode::from(2));
                }
            };
            if *explain {
                eprintln!("{}", query);
            }

            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            let matched = run_filter(&query, stdin, &mut stdout, *number)?;
            Ok(if matched > 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}
