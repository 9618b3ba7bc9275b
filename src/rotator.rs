use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use crate::address::{generate_address, variate, GeneratedAddress, CYCLE_VARIANCE};
use crate::command::AddressApplier;
use crate::vendors::vendor_display_name;
use crate::RotateError;

/// Back-to-back failures tolerated before the loop gives up.
pub const MAX_SEQUENTIAL_FAILURES: usize = 3;

/// How the loop finished without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The operator cancelled the run; a clean shutdown, not a failure.
    Interrupted,
}

pub struct RotatorConfig {
    pub device_name: String,
    pub cycle_seconds: u64,
    pub dry_run: bool,
}

pub struct Rotator {
    config: RotatorConfig,
    applier: Box<dyn AddressApplier>,
    failures: Vec<RotateError>,
}

impl Rotator {
    pub fn new(config: RotatorConfig, applier: Box<dyn AddressApplier>) -> Self {
        Rotator {
            config,
            applier,
            failures: Vec::new(),
        }
    }

    /// Runs the rotation loop until the operator cancels it (`stop` becomes
    /// true) or too many sequential failures accumulate. Those are the only
    /// two ways out.
    pub fn run<R: Rng>(
        mut self,
        rng: &mut R,
        stop: &AtomicBool,
    ) -> Result<RotationOutcome, RotateError> {
        loop {
            if stop.load(Ordering::SeqCst) {
                return Ok(RotationOutcome::Interrupted);
            }

            let candidate = generate_address(rng);
            match self.rotate_once(&candidate) {
                Ok(()) => {
                    self.failures.clear();
                    info!(
                        "set to MAC address {} of vendor {}",
                        candidate.address,
                        vendor_display_name(candidate.vendor)
                    );
                }
                Err(err) => {
                    warn!("an error occurred: {err}");
                    self.failures.push(err);

                    let remaining = MAX_SEQUENTIAL_FAILURES - self.failures.len();
                    warn!("the program will stop if {remaining} more errors occur sequentially");

                    if self.failures.len() >= MAX_SEQUENTIAL_FAILURES {
                        return Err(self.too_many_failures());
                    }
                }
            }

            let wait = variate(rng, self.config.cycle_seconds, CYCLE_VARIANCE);
            info!("waiting {wait:.0} seconds until the next rotation");
            if sleep_unless_stopped(Duration::from_secs_f64(wait), stop) {
                return Ok(RotationOutcome::Interrupted);
            }
        }
    }

    fn rotate_once(&self, candidate: &GeneratedAddress) -> Result<(), RotateError> {
        if self.config.dry_run {
            let command = self
                .applier
                .describe(&self.config.device_name, &candidate.address);
            info!("would run `{command}`");
            return Ok(());
        }
        self.applier
            .apply(&self.config.device_name, &candidate.address)
    }

    fn too_many_failures(&mut self) -> RotateError {
        let history = self
            .failures
            .drain(..)
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        RotateError::TooManyFailures(history)
    }
}

/// Sleeps for `total`, waking periodically to check the stop flag. Returns
/// true if the flag was set before the wait ran out.
fn sleep_unless_stopped(total: Duration, stop: &AtomicBool) -> bool {
    const SLICE: Duration = Duration::from_millis(200);

    let mut remaining = total;
    while !remaining.is_zero() {
        if stop.load(Ordering::SeqCst) {
            return true;
        }
        let step = remaining.min(SLICE);
        thread::sleep(step);
        remaining -= step;
    }
    stop.load(Ordering::SeqCst)
}
