use std::io;
use std::process;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use dquest::cli::{output, Cli};
use dquest::explorer::{Explorer, Outcome};
use dquest::{exitcode, map, QuestResult};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        process::exit(exitcode::OK);
    }
    if cli.info {
        if let Some(a) = Cli::command().get_author() {
            println!("AUTHOR: {}", a)
        }
        if let Some(v) = Cli::command().get_version() {
            println!("VERSION: {}", v)
        }
        process::exit(exitcode::OK);
    }

    setup_logging(cli.debug);

    if let Err(e) = run() {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

fn run() -> QuestResult<()> {
    let mut mansion = map::build_mansion()?;

    output::header("Bem-vindo ao Detective Quest!");
    output::info("Explore a mansão e descubra o caminho.");
    output::info("Use 'e' para esquerda, 'd' para direita e 's' para sair.");

    let outcome = {
        let stdin = io::stdin();
        let mut explorer = Explorer::new(&mansion, stdin.lock(), io::stdout())?;
        explorer.run()?
    };

    match outcome {
        Outcome::Quit => println!("\nExploração encerrada pelo jogador."),
        Outcome::Completed => println!("\nExploração concluída (chegou em um nó-folha)."),
    }

    let released = mansion.dismantle();
    debug!(rooms_released = released, "mansion map dismantled");

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output goes to stderr so it never mixes with the narration
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
