use super::{common, logging_level_cli_arg, Command};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungaf::utils::RandomFrameworkGenerator;
use log::info;

const CMD_NAME: &str = "random";

const ARG_MIN_ARGS: &str = "MIN_ARGS";
const ARG_MAX_ARGS: &str = "MAX_ARGS";
const ARG_MIN_ATTACKS: &str = "MIN_ATTACKS";
const ARG_MAX_ATTACKS: &str = "MAX_ATTACKS";
const ARG_POOL_SIZE: &str = "POOL_SIZE";
const ARG_SEED: &str = "SEED";

pub(crate) struct RandomCommand;

impl RandomCommand {
    pub(crate) fn new() -> Self {
        RandomCommand
    }
}

fn count_arg(name: &'static str, long: &'static str, default: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(long)
        .empty_values(false)
        .multiple(false)
        .default_value(default)
        .help(help)
}

impl<'a> Command<'a> for RandomCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Generates a random argumentation framework")
            .setting(AppSettings::DisableVersion)
            .arg(count_arg(ARG_MIN_ARGS, "min-args", "1", "the minimal number of arguments"))
            .arg(count_arg(ARG_MAX_ARGS, "max-args", "10", "the maximal number of arguments"))
            .arg(count_arg(ARG_MIN_ATTACKS, "min-attacks", "0", "the minimal number of attacks"))
            .arg(count_arg(ARG_MAX_ATTACKS, "max-attacks", "20", "the maximal number of attacks"))
            .arg(count_arg(
                ARG_POOL_SIZE,
                "pool-size",
                "10",
                "the number of labels the arguments are taken from (a0, a1, ...)",
            ))
            .arg(count_arg(ARG_SEED, "seed", "0", "the seed of the random generator"))
            .arg(common::semantics_arg(false))
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let semantics = common::read_semantics(arg_matches)?;
        let seed = read_number(arg_matches, ARG_SEED)?;
        let pool = (0..read_number(arg_matches, ARG_POOL_SIZE)?)
            .map(|i| format!("a{}", i))
            .collect::<Vec<String>>();
        info!("generating a framework with seed {}", seed);
        let mut generator = RandomFrameworkGenerator::new_with_seed(seed);
        let af = generator
            .generate(
                read_number(arg_matches, ARG_MIN_ARGS)? as usize,
                read_number(arg_matches, ARG_MAX_ARGS)? as usize,
                read_number(arg_matches, ARG_MIN_ATTACKS)? as usize,
                read_number(arg_matches, ARG_MAX_ATTACKS)? as usize,
                &pool,
            )
            .context("while generating a random framework")?;
        println!("{}", af);
        if let Some(s) = semantics {
            common::print_extensions(&af, s);
        }
        Ok(())
    }
}

fn read_number(arg_matches: &ArgMatches<'_>, arg_name: &str) -> Result<u64> {
    let value = arg_matches.value_of(arg_name).unwrap_or_default();
    value.parse::<u64>().with_context(|| {
        format!(
            r#"while parsing "{}" as a non-negative integer for {}"#,
            value, arg_name
        )
    })
}
