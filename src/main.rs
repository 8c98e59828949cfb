use std::io::Write;

use clap::Parser;
use sbsread::BatteryClient;
use sbsread::BatteryReport;

/// Print the registers of the smart battery at address 0x0b on /dev/i2c-1
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Write the charging init command to ManufacturerAccess before reading.
    /// Only needed for Dell U4873 batteries.
    #[arg(long)]
    init_charging: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut battery_client = BatteryClient::new_default();

    if args.init_charging {
        match battery_client.init_charging() {
            Ok(()) => println!("init charging: OK"),
            Err(err) => {
                log::warn!("BATTERY: init charging failed: {err}");
                println!("init charging: {}", BatteryReport::ERROR_TOKEN);
            }
        }
    }

    let report = battery_client.fetch_report();
    write!(std::io::stdout().lock(), "{report}")?;

    Ok(())
}
