use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use macrotate_lib::{
    default_device_name, platform_applier, RotationOutcome, Rotator, RotatorConfig,
};

/// Rotate a network interface's MAC address on a randomized interval.
///
/// Requires superuser privileges. Supports Linux (`ip`) and the ifconfig
/// family (macOS and the BSDs).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Network device whose address is rotated
    #[arg(long, default_value_t = default_device_name().to_owned())]
    device_name: String,

    /// Base seconds between rotations, varied by up to ±12.5%
    #[arg(long, default_value_t = 1800)]
    cycle_seconds: u64,

    /// Print the commands that would run without running them
    #[arg(long)]
    dry_run: bool,
}

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
fn install_interrupt_handler() -> Result<()> {
    use nix::sys::signal::{signal, SigHandler, Signal};

    extern "C" fn handle_interrupt(_signal: nix::libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    let handler = SigHandler::Handler(handle_interrupt);
    unsafe {
        signal(Signal::SIGINT, handler)?;
        signal(Signal::SIGTERM, handler)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn install_interrupt_handler() -> Result<()> {
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    install_interrupt_handler()?;
    let applier = platform_applier()?;

    info!("rotating MAC address...");

    let config = RotatorConfig {
        device_name: args.device_name,
        cycle_seconds: args.cycle_seconds,
        dry_run: args.dry_run,
    };
    let rotator = Rotator::new(config, applier);

    match rotator.run(&mut rand::thread_rng(), &INTERRUPTED)? {
        RotationOutcome::Interrupted => {
            info!("interrupt caught; finished cycling MAC addresses");
            Ok(())
        }
    }
}
