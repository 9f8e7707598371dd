use std::io::{self, Write};

use anyhow::Context;
use board_cli::command::{self, Command, HELP};
use board_cli::console::{print_list, print_users, ConsoleNotifier};
use board_cli::logging::init_tracing;
use board_cli::{Args, UreqTransport};
use board_core::{App, RemoteGateway};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = args.config();
    tracing::info!(base_url = %config.base_url, "starting");
    let gateway = RemoteGateway::new(&config, UreqTransport::new());
    let mut app = App::new(gateway, ConsoleNotifier::new(io::stdout()));

    app.start().await;
    let mut out = io::stdout();
    print_list(app.view(), &mut out)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::List)) => print_list(app.view(), &mut out)?,
            Ok(Some(Command::Users)) => print_users(app.view(), &mut out)?,
            Ok(Some(Command::Event(event))) => {
                app.handle(event).await;
                print_list(app.view(), &mut out)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}
