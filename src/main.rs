use anyhow::Context;
use clap::Parser;

use config::Config;
use probe_modules::module_filter_probes::filter_probes;
use send::{DryRunSink, FrameSink, Sender, WireSink};

mod config;
mod error;
mod net;
mod probe_modules;
mod send;
mod state;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = Config::parse();

    println!(
        "Starting packet simulation tests on interface: {}",
        config.interface
    );
    println!("-------------------------------------------------------------\n");

    let link = config.link_addrs()?;
    let mut sink: Box<dyn FrameSink> = if config.dryrun {
        log::info!("Sender in dryrun mode -- won't actually send packets");
        Box::new(DryRunSink::new(config.quiet))
    } else {
        Box::new(
            WireSink::open(&config.interface, config.dst_mac)
                .with_context(|| format!("cannot inject on {}", config.interface))?,
        )
    };

    let mut sender = Sender::new(config.delay, link);
    sender.run(&filter_probes(), sink.as_mut())?;

    println!("\nPacket simulation tests completed.");
    println!("Please check kernel logs using: dmesg | tail -n 30");
    Ok(())
}
