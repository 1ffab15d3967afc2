//! Ordertrace CLI
//!
//! Looks up an order by identifier and renders it to the terminal. With no
//! identifier on the command line, an interactive prompt reads one
//! identifier per line.

use std::io::{self, BufRead, Write};
use std::process;

use tracing_subscriber::EnvFilter;

use ordertrace::{
    client::OrderApi,
    config::ClientConfig,
    lookup::Lookup,
    view::OrderView,
};

#[tokio::main]
pub async fn main() {
    let config = ClientConfig::load();

    init_tracing();

    let api = OrderApi::new(config.base_url.clone());
    let view = OrderView::new(io::stdout());
    let mut lookup = Lookup::new(api, view);

    let ok = match config.order_id {
        Some(ref id) => lookup.run(id).await.is_ok(),
        None => match prompt_loop(&mut lookup).await {
            Ok(()) => true,
            Err(error) => {
                eprintln!("{error}");

                false
            }
        },
    };

    if !ok {
        process::exit(1);
    }
}

/// Read identifiers from stdin until EOF, one lookup per line.
///
/// Lookup failures are already on the display; the loop only stops on EOF or
/// when the prompt itself cannot be written.
async fn prompt_loop(lookup: &mut Lookup<OrderApi, io::Stdout>) -> io::Result<()> {
    let stdin = io::stdin();

    loop {
        print!("order id> ");
        io::stdout().flush()?;

        let mut line = String::new();

        if stdin.lock().read_line(&mut line)? == 0 {
            println!();

            return Ok(());
        }

        _ = lookup.run(&line).await;
    }
}

/// Initialise the log subscriber.
///
/// Logs go to stderr so the rendered order stays alone on stdout; verbosity
/// comes from `RUST_LOG`, defaulting to warnings only.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}
