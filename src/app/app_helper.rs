use super::{cli_manager::CliManager, command::Command};
use anyhow::Result;
use log::{error, info};
use std::{ffi::OsString, sync::Once, time::Instant};

static LOGGER_INIT: Once = Once::new();

/// The runner of the app.
///
/// The helper gathers the commands, reads the CLI arguments, initializes the logger
/// and hands the control to the command the user asked for.
pub(crate) struct AppHelper<'a> {
    cli_manager: CliManager<'a>,
}

impl<'a> AppHelper<'a> {
    /// Creates a new helper given the app name, version, authors and description.
    pub(crate) fn new(app_name: &'a str, version: &'a str, authors: &'a str, about: &'a str) -> Self {
        AppHelper {
            cli_manager: CliManager::new(app_name, version, authors, about),
        }
    }

    /// Adds a new command to the app.
    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.cli_manager.add_command(command);
    }

    /// Launches the app with the arguments given by `std::env::args_os()`.
    ///
    /// If the command fails, the error and its causes are logged and the process exits with status 1.
    pub(crate) fn launch_app(self) {
        self.launch_app_with_args(std::env::args_os())
    }

    /// Launches the app with the provided CLI arguments.
    ///
    /// If the command fails, the error and its causes are logged and the process exits with status 1.
    pub(crate) fn launch_app_with_args<I, T>(self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Err(e) = self.execute_app(args) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = Instant::now();
        let result = self.cli_manager.parse_cli(args);
        if result.is_ok() {
            info!("exiting successfully after {:?}", start_time.elapsed());
        }
        result
    }
}

/// Initializes the logger at the `info` level.
pub(crate) fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info)
}

/// Initializes the logger at the given level.
///
/// Only the first call has an effect.
pub(crate) fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg, SubCommand};

    struct FailingCommand;

    impl<'a> Command<'a> for FailingCommand {
        fn name(&self) -> &str {
            "fail"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("fail")
                .about("fails on demand")
                .arg(Arg::with_name("now").short("n"))
        }

        fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
            if arg_matches.is_present("now") {
                Err(anyhow::anyhow!("failure requested"))
            } else {
                Ok(())
            }
        }
    }

    fn helper() -> AppHelper<'static> {
        init_logger_with_level(log::LevelFilter::Off);
        let mut h = AppHelper::new("app", "0.0.0", "authors", "about");
        h.add_command(Box::new(FailingCommand));
        h
    }

    #[test]
    fn test_no_args() {
        helper()
            .execute_app(vec![] as Vec<&'static str>)
            .unwrap_err();
    }

    #[test]
    fn test_no_subcommand() {
        helper().execute_app(vec!["app"]).unwrap_err();
    }

    #[test]
    fn test_subcommand_ok() {
        helper().execute_app(vec!["app", "fail"]).unwrap();
    }

    #[test]
    fn test_subcommand_err() {
        helper().execute_app(vec!["app", "fail", "-n"]).unwrap_err();
    }
}
