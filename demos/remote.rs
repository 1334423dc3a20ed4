// SPDX-License-Identifier: MPL-2.0

//! Command-line remote for a receiver's main zone.
//!
//! Wires a [`Receiver`] the way a presentation layer would: subscribe to
//! change notifications, call the setters, refresh to pick up changes made
//! elsewhere.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example remote -- <host> status
//! cargo run --example remote -- <host> power on|standby
//! cargo run --example remote -- <host> mute on|off
//! cargo run --example remote -- <host> volume <dB>
//! cargo run --example remote -- <host> watch [seconds]
//! ```
//!
//! Set `RUST_LOG=debug` to see the XML exchanged with the receiver.

use std::env;
use std::time::Duration;

use yamaha_remote::{Receiver, Subscribable};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let receiver = Receiver::http(&args[1]).build().await?;
    print_state(&receiver);

    receiver.on_state_changed(|change| println!("  {change}"));
    receiver.on_volume_flush_failed(|volume, error| {
        eprintln!("  could not set volume to {volume}: {error}");
    });

    match (args[2].as_str(), args.get(3).map(String::as_str)) {
        ("status", _) => {}
        ("power", Some("on")) => receiver.set_power(true).await?,
        ("power", Some("standby" | "off")) => receiver.set_power(false).await?,
        ("mute", Some("on")) => receiver.set_muted(true).await?,
        ("mute", Some("off")) => receiver.set_muted(false).await?,
        ("volume", Some(level)) => {
            receiver.set_volume(level.parse()?)?;
            receiver.flush_volume().await?;
        }
        ("watch", seconds) => {
            let interval = seconds.map_or(Ok(2), str::parse)?;
            watch(&receiver, Duration::from_secs(interval)).await?;
        }
        _ => {
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn watch<T: yamaha_remote::Transport>(
    receiver: &Receiver<T>,
    interval: Duration,
) -> yamaha_remote::Result<()> {
    println!("Watching for changes, Ctrl-C to stop");
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = receiver.refresh().await {
                    eprintln!("  refresh failed: {e}");
                }
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

fn print_state<T: yamaha_remote::Transport>(receiver: &Receiver<T>) {
    let state = receiver.state();
    println!(
        "power: {}, volume: {}, muted: {}",
        if state.power() { "on" } else { "standby" },
        state.volume(),
        state.is_muted()
    );
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <host> <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  status                 Show power, volume and mute");
    eprintln!("  power on|standby       Switch the main zone");
    eprintln!("  mute on|off            Mute or unmute");
    eprintln!("  volume <dB>            Set the level (-80.0 to 16.0, 0.5 dB steps)");
    eprintln!("  watch [seconds]        Refresh periodically and print changes");
}
