use std::env;
use std::process::ExitCode;

use vshell::config::Config;
use vshell::flags::Flags;
use vshell::shell::Shell;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("vshell: {}", e);
        flags.print_help();
        return ExitCode::from(1);
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("vshell {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let config = Config::from_flags(&flags);
    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .init();

    let mut shell = match Shell::new(config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
