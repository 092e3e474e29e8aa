use super::{logging_level_cli_arg, Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dungaf::aa::Semantics;
use strum::IntoEnumIterator;

const CMD_NAME: &str = "semantics";

pub(crate) struct SemanticsCommand;

impl SemanticsCommand {
    pub(crate) fn new() -> Self {
        SemanticsCommand
    }
}

impl<'a> Command<'a> for SemanticsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the semantics handled by the reasoner, with their short codes")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        Semantics::iter().for_each(|s| println!("{} {}", s.to_short_str(), s.as_ref()));
        Ok(())
    }
}
