use crate::comparison::domain::Tab;
use crate::ports::inbound::{Action, DashboardPort};
use crate::shared::Result;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::str::FromStr;

const HELP: &str = "\
Commands:
  toggle <vendor>   add or remove a vendor (first selected is the focus vendor)
  industry <key>    switch the industry profile
  devices <n>       set the device count
  years <n>         set the analysis period
  tab <name>        overview, financial, security, compliance, vendors, insurance
  export            export a report of the current state
  show              print a summary of the current state
  vendors           list catalog vendors (* = selected)
  help              show this help
  quit              finish and write the dashboard";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Export,
    Show,
    Vendors,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments for '{}'", verb));
        }

        let required = |name: &str| {
            argument
                .map(str::to_string)
                .ok_or_else(|| format!("'{}' needs {}", verb, name))
        };
        let number = |name: &str| -> std::result::Result<i64, String> {
            let raw = required(name)?;
            // Out-of-range integers saturate and are clamped downstream
            raw.parse::<i64>().or_else(|e| match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(format!("'{}' is not a whole number", raw)),
            })
        };

        let command = match verb.as_str() {
            "toggle" => Command::Apply(Action::ToggleVendor(required("a vendor id")?)),
            "industry" => Command::Apply(Action::SetIndustry(required("an industry key")?)),
            "devices" => Command::Apply(Action::SetDeviceCount(number("a device count")?)),
            "years" => Command::Apply(Action::SetAnalysisPeriod(number("a number of years")?)),
            "tab" => Command::Apply(Action::SwitchTab(Tab::from_str(&required("a tab name")?)?)),
            "export" => Command::Export,
            "show" => Command::Show,
            "vendors" => Command::Vendors,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err("Empty command".to_string()),
            other => return Err(format!("Unknown command '{}'. Type 'help' for a list", other)),
        };

        // Commands without an argument reject one
        if argument.is_some() && !matches!(command, Command::Apply(_)) {
            return Err(format!("'{}' takes no argument", verb));
        }
        Ok(command)
    }
}

/// InteractiveSession adapter driving a dashboard from line-based input
///
/// Reads one command per line until `quit` or end of input. Replies go to
/// `output`; the dashboard itself is written by the caller afterwards.
pub struct InteractiveSession<'a, P: DashboardPort> {
    port: &'a mut P,
}

impl<'a, P: DashboardPort> InteractiveSession<'a, P> {
    pub fn new(port: &'a mut P) -> Self {
        Self { port }
    }

    /// Runs the session and returns the number of commands executed
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<usize> {
        writeln!(output, "Type 'help' for commands, 'quit' to finish.")
            .context("Failed to write to session output")?;
        let mut executed = 0;

        for line in input.lines() {
            let line = line.context("Failed to read interactive input")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::from_str(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command, &mut output)?;
            executed += 1;
        }
        Ok(executed)
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> Result<()> {
        match command {
            Command::Apply(action) => {
                let stats = self.port.apply(action);
                for notice in self.port.current_notices() {
                    writeln!(output, "notice: {}", notice.message)?;
                }
                writeln!(
                    output,
                    "updated {} region(s), {} chart(s) live",
                    stats.patched, stats.live_charts
                )?;
            }
            Command::Export => {
                let snapshot = self.port.export()?;
                writeln!(output, "exported {}", snapshot.metadata.serial_number)?;
            }
            Command::Show => writeln!(output, "{}", self.port.summary())?,
            Command::Vendors => {
                for line in self.port.vendor_listing() {
                    writeln!(output, "{}", line)?;
                }
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }
}
