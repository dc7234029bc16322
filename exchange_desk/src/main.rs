//! Exchange Desk — a terminal front-end for the simulated currency-to-crypto quote
//! calculator.
//!
//! In one-shot mode the desk submits a single form built from the command line, prints
//! the result and optionally initiates the placeholder purchase. Without `--amount` it
//! reads commands from stdin (see `console` for the command set), so quotes can be
//! recalculated and replaced repeatedly within one session.
//!
//! Usage example (CLI):
//! ```bash
//! exchange_desk --from usd --to eur --crypto btc --amount 100 --purchase
//! exchange_desk --seed 42
//! ```
//!
//! Notifications ("Exchange Calculated", "Purchase Initiated") travel over a
//! `crossbeam_channel` to a dedicated thread that writes them to the log.
#![warn(missing_docs)]
mod args;
mod console;

use crate::args::Args;
use crate::console::{OutputFormat, run_interactive, run_once};
use clap::Parser;
use crossbeam_channel::{Receiver, unbounded};
use exchange_common::notification::{ChannelSink, Notification};
use exchange_common::rates::{RateProvider, SimulatedRates};
use exchange_common::{ExchangeError, QuoteCalculator, QuoteForm, Result};
use log::{error, info};
use std::io;
use std::thread;

fn main() -> Result<(), ExchangeError> {
    init_logger();
    let args = Args::parse();

    let (notify_tx, notify_rx) = unbounded::<Notification>();
    let notifier = thread::spawn(move || drain_notifications(notify_rx));

    let sink = ChannelSink::new(notify_tx);
    let outcome = match args.seed {
        Some(seed) => {
            info!("Simulated rate feed seeded with {}", seed);
            run(&args, SimulatedRates::seeded(seed), sink)
        }
        None => run(&args, SimulatedRates::new(), sink),
    };

    if notifier.join().is_err() {
        error!("Notification thread panicked");
    }
    outcome
}

/// Build the calculator and run the selected mode. The sink is dropped on return,
/// which lets the notification thread finish.
fn run<P: RateProvider>(args: &Args, rates: P, sink: ChannelSink) -> Result<()> {
    let mut calc = QuoteCalculator::new(rates, sink);
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let defaults = QuoteForm {
        from_currency: args.from.to_string(),
        to_currency: args.to.to_string(),
        amount: args.amount.clone().unwrap_or_default(),
        crypto_currency: args.crypto.to_string(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.amount.is_none() {
        info!("Interactive mode. Type `help` for the supported selections, `quit` to leave.");
        let stdin = io::stdin();
        return run_interactive(&mut calc, &defaults, stdin.lock(), &mut out, format);
    }
    run_once(&mut calc, &defaults, args.purchase, &mut out, format)
}

/// Write every notification to the log until all senders are dropped.
fn drain_notifications(rx: Receiver<Notification>) {
    for notification in rx.iter() {
        info!("[{}] {}", notification.title, notification.description);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
