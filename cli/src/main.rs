use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use mustang_types::AmpSettings;
use mustang_usb::context::UsbSubsystem;
use mustang_usb::packet::Packet;
use mustang_usb::serializer::{
    serialize_amp_settings, serialize_apply_command, serialize_init_command,
    serialize_load_command, serialize_load_slot_command,
};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cli::{Action, AmpArgs, Cli, LevelFilter};

mod cli;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    match args.action {
        Action::List { all } => list_devices(all),
        Action::Commands => {
            let [first, second] = serialize_init_command();
            print_packet("init (1 of 2)", &first);
            print_packet("init (2 of 2)", &second);
            print_packet("apply", &serialize_apply_command());
            print_packet("load", &serialize_load_command());
            Ok(())
        }
        Action::LoadSlot { slot } => {
            print_packet(
                &format!("load slot {slot}"),
                &serialize_load_slot_command(slot),
            );
            Ok(())
        }
        Action::Amp(amp) => print_amp(&amp),
    }
}

fn list_devices(all: bool) -> Result<()> {
    let usb = UsbSubsystem::new()?;
    let devices = if all {
        usb.list_devices()?
    } else {
        usb.find_amplifiers()?
    };

    if devices.is_empty() {
        warn!("No devices found");
        return Ok(());
    }

    for device in devices {
        let family = device
            .amp_family()
            .map(|family| family.to_string())
            .unwrap_or_default();

        println!(
            "Bus {:03} Device {:03}: ID {:04x}:{:04x} {}",
            device.location.bus_number,
            device.location.address,
            device.vendor_id,
            device.product_id,
            family
        );
    }
    Ok(())
}

fn print_amp(args: &AmpArgs) -> Result<()> {
    let base = match &args.settings {
        Some(path) => load_settings(path)?,
        None => AmpSettings::default(),
    };

    let settings = args.apply(base);
    info!("Serialising {} with {} cabinet", settings.amp, settings.cabinet);
    print_packet("amp", &serialize_amp_settings(&settings));
    Ok(())
}

fn load_settings(path: &Path) -> Result<AmpSettings> {
    let file =
        File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let settings = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Unable to parse {}", path.display()))?;
    Ok(settings)
}

fn print_packet(name: &str, packet: &Packet) {
    println!("{name}:");
    println!("{packet}");
    println!();
}
