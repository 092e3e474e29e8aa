use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use dungaf::aa::{AAFramework, LabelType, Semantics};
use log::info;
use std::collections::BTreeSet;

pub(crate) const ARG_SEMANTICS: &str = "SEMANTICS";

pub(crate) fn semantics_arg(required: bool) -> Arg<'static, 'static> {
    Arg::with_name(ARG_SEMANTICS)
        .short("s")
        .long("semantics")
        .empty_values(false)
        .multiple(false)
        .help("the semantics, given by its name or its short code (see the semantics command)")
        .required(required)
}

/// Reads the semantics given on the command line, if any.
pub(crate) fn read_semantics(arg_matches: &ArgMatches<'_>) -> Result<Option<Semantics>> {
    arg_matches
        .value_of(ARG_SEMANTICS)
        .map(Semantics::try_from)
        .transpose()
        .context("while parsing the semantics passed to the command line")
}

/// Formats a set of arguments as `{a, b}`.
pub(crate) fn format_set<T>(set: &BTreeSet<T>) -> String
where
    T: LabelType,
{
    let labels = set
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    format!("{{{}}}", labels)
}

/// Prints the extensions of a framework, one per line.
pub(crate) fn print_extensions<T>(af: &AAFramework<T>, semantics: Semantics)
where
    T: LabelType,
{
    let extensions = af.extensions(semantics);
    info!(
        "found {} {} extension(s)",
        extensions.len(),
        semantics.as_ref()
    );
    extensions
        .iter()
        .for_each(|ext| println!("{}", format_set(ext)));
}
