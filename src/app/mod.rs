mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod cli_manager;
pub(crate) use cli_manager::logging_level_cli_arg;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod random_command;
pub(crate) use random_command::RandomCommand;

mod semantics_command;
pub(crate) use semantics_command::SemanticsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;

mod writable_string;
