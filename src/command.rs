use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::RotateError;

/// One platform's way of assigning an address to an interface.
pub trait AddressApplier {
    /// Program name and argument list of the command to run.
    fn command_line(&self, device: &str, address: &str) -> (&'static str, Vec<String>);

    fn apply(&self, device: &str, address: &str) -> Result<(), RotateError> {
        let (program, args) = self.command_line(device, address);
        run_command(program, &args)
    }

    fn describe(&self, device: &str, address: &str) -> String {
        let (program, args) = self.command_line(device, address);
        render_command(program, &args)
    }
}

pub(crate) fn locate_program(program: &str) -> Result<PathBuf, RotateError> {
    which::which(program).map_err(|_| RotateError::MissingProgram(program.to_owned()))
}

fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

fn run_command(program: &str, args: &[String]) -> Result<(), RotateError> {
    let path = locate_program(program)?;
    let command = render_command(program, args);

    let output = Command::new(path)
        .args(args)
        .output()
        .map_err(|source| RotateError::Spawn {
            command: command.clone(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    let combined = combined.trim_end().to_owned();
    if !combined.is_empty() {
        info!("{combined}");
    }

    if output.status.success() {
        Ok(())
    } else {
        Err(RotateError::CommandFailed {
            command,
            status: output.status,
            output: combined,
        })
    }
}
