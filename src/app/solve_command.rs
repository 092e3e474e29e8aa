use super::{common, logging_level_cli_arg, Command};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungaf::aa::AAFramework;
use log::info;

const CMD_NAME: &str = "solve";

const ARG_ARGUMENT: &str = "ARGUMENT";
const ARG_ATTACK: &str = "ATTACK";
const ARG_UNION: &str = "UNION";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the extensions of an argumentation framework")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_ARGUMENT)
                    .short("a")
                    .long("argument")
                    .empty_values(false)
                    .multiple(true)
                    .number_of_values(1)
                    .help("an argument of the framework (arguments involved in attacks may be omitted)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ATTACK)
                    .short("t")
                    .long("attack")
                    .empty_values(false)
                    .multiple(true)
                    .number_of_values(1)
                    .help("an attack of the framework, given as ATTACKER,ATTACKED")
                    .required(false),
            )
            .arg(common::semantics_arg(true))
            .arg(
                Arg::with_name(ARG_UNION)
                    .long("union")
                    .help("display the union of the extensions instead of the extensions")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = read_framework(arg_matches)?;
        info!(
            "the argumentation framework has {} argument(s) and {} attack(s)",
            af.n_arguments(),
            af.n_attacks(),
        );
        let semantics = common::read_semantics(arg_matches)?
            .ok_or_else(|| anyhow!("missing semantics on the command line"))?;
        if arg_matches.is_present(ARG_UNION) {
            let union = af.extensions_union(semantics.as_ref())?;
            println!("{}", common::format_set(&union));
        } else {
            common::print_extensions(&af, semantics);
        }
        Ok(())
    }
}

fn read_framework(arg_matches: &ArgMatches<'_>) -> Result<AAFramework<String>> {
    let arguments = arg_matches
        .values_of(ARG_ARGUMENT)
        .map(|values| values.map(|a| a.trim().to_string()).collect::<Vec<String>>())
        .unwrap_or_default();
    let attacks = arg_matches
        .values_of(ARG_ATTACK)
        .map(|values| values.map(split_attack).collect::<Vec<Vec<String>>>())
        .unwrap_or_default();
    AAFramework::new_with_arguments_and_attacks(&arguments, &attacks)
        .context("while reading the framework passed to the command line")
}

fn split_attack(value: &str) -> Vec<String> {
    value.split(',').map(|a| a.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_attack() {
        assert_eq!(vec!["a", "b"], split_attack("a, b"));
        assert_eq!(vec!["a"], split_attack("a"));
        assert_eq!(vec!["a", "b", "c"], split_attack("a,b,c"));
    }

    fn matches(args: &[&str]) -> ArgMatches<'static> {
        App::new("app")
            .subcommand(SolveCommand::new().clap_subcommand())
            .get_matches_from_safe(args)
            .unwrap()
            .subcommand_matches(CMD_NAME)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_read_framework() {
        let m = matches(&["app", "solve", "-s", "PR", "-a", "c", "-t", "a,b", "-t", "b,a"]);
        let af = read_framework(&m).unwrap();
        assert_eq!(3, af.n_arguments());
        assert_eq!(2, af.n_attacks());
        assert!(af.contains_attack(&"a".to_string(), &"b".to_string()));
    }

    #[test]
    fn test_read_malformed_attack() {
        let m = matches(&["app", "solve", "-s", "PR", "-t", "a,b,c"]);
        assert!(read_framework(&m).is_err());
    }

    #[test]
    fn test_missing_semantics() {
        assert!(App::new("app")
            .subcommand(SolveCommand::new().clap_subcommand())
            .get_matches_from_safe(&["app", "solve", "-t", "a,b"])
            .is_err());
    }
}
