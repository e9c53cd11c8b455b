use std::io;

fn main() {
    let log_level = sixmax_cli::config::load().ok().and_then(|c| c.log_level);
    sixmax_cli::logging::init_logging(log_level.as_deref());

    let code = sixmax_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
