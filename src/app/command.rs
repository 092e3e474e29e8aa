use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of the app.
///
/// A command describes its own CLI arguments with clap and runs given the matched ones.
/// Command names must be unique.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand holding the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Runs the command given the arguments matched by clap.
    ///
    /// The app exits with a success status code iff `Ok(())` is returned.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
