use clap::{Arg, ArgAction, Command, ValueHint, command, value_parser};

pub fn build_command() -> Command {
    command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config-file")
                .alias("config")
                .global(true)
                .required(false)
                .value_hint(ValueHint::FilePath)
                .value_name("PATH")
                .help("Path to the TOML config file."),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .global(true)
                .required(false)
                .value_hint(ValueHint::FilePath)
                .value_name("PATH")
                .help("Path to the store database, overriding the config."),
        )
        .subcommand(
            Command::new("library")
                .about("Manage libraries")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create").about("Create a library").arg(
                        Arg::new("name")
                            .required(true)
                            .value_name("NAME")
                            .help("Name for the new library."),
                    ),
                )
                .subcommand(Command::new("list").about("List all libraries"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a library and its records")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64))
                                .value_name("ID")
                                .help("ID of the library to delete."),
                        ),
                ),
        )
        .subcommand(
            Command::new("game")
                .about("Manage saved game records")
                .subcommand_required(true)
                .subcommand(
                    Command::new("save")
                        .about("Save a game into a library")
                        .arg(library_id_arg())
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .value_hint(ValueHint::FilePath)
                                .value_name("PATH")
                                .conflicts_with_all(["id", "title", "platform"])
                                .help("Read the game listing from a JSON file."),
                        )
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_parser(value_parser!(i64))
                                .required_unless_present("json")
                                .value_name("GAME_ID")
                                .help("External identifier of the game."),
                        )
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .required_unless_present("json")
                                .value_name("TITLE")
                                .help("Game title."),
                        )
                        .arg(
                            Arg::new("platform")
                                .long("platform")
                                .required_unless_present("json")
                                .value_name("PLATFORM")
                                .help("Platform the game runs on."),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .value_name("TEXT")
                                .help("Game description."),
                        )
                        .arg(
                            Arg::new("image-url")
                                .long("image-url")
                                .value_hint(ValueHint::Url)
                                .value_name("URL")
                                .help("Cover image URL."),
                        )
                        .arg(
                            Arg::new("score")
                                .long("score")
                                .value_parser(value_parser!(i64))
                                .value_name("SCORE")
                                .help("Review score."),
                        )
                        .arg(
                            Arg::new("done")
                                .long("done")
                                .action(ArgAction::SetTrue)
                                .help("Mark the game as completed."),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List a library's records in saved order")
                        .arg(library_id_arg()),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove one record from a library")
                        .arg(library_id_arg())
                        .arg(
                            Arg::new("game-id")
                                .required(true)
                                .value_parser(value_parser!(i64))
                                .value_name("GAME_ID")
                                .help("Identifier of the record to remove."),
                        ),
                )
                .subcommand(
                    Command::new("search")
                        .about("Search a library's records by title")
                        .arg(library_id_arg())
                        .arg(
                            Arg::new("query")
                                .required(true)
                                .value_name("QUERY")
                                .help("Substring to match against titles."),
                        ),
                ),
        )
}

fn library_id_arg() -> Arg {
    Arg::new("library-id")
        .required(true)
        .value_parser(value_parser!(i64))
        .value_name("LIBRARY_ID")
        .help("ID of the target library.")
}
