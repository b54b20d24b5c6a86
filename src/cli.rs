use crate::report::ReportOptions;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_draw_tree_argument(command);
        Self::register_summary_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_draw_tree_argument(command: Command) -> Command {
        command.arg(Self::create_draw_tree_argument())
    }

    fn register_summary_argument(command: Command) -> Command {
        command.arg(Self::create_summary_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input file, asked for interactively if omitted")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_draw_tree_argument() -> Arg {
        arg!(draw_tree: -d --draw_tree "Draw the huffman tree")
    }

    fn create_summary_argument() -> Arg {
        arg!(summary: -s --summary "Print the number of encoded and fixed-width bits")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            report_options: ReportOptions {
                draw_tree: Self::extract_draw_tree_argument(matches),
                summary: Self::extract_summary_argument(matches),
            },
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_draw_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("draw_tree")
    }

    fn extract_summary_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("summary")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.unwrap().file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_missing_input_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(CLIParser::extract_input_file_argument(&matches).is_none());
    }

    #[test]
    fn parse_draw_tree_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_draw_tree_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--draw_tree"]);
        assert!(CLIParser::extract_draw_tree_argument(&matches));
    }

    #[test]
    fn parse_summary_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_summary_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-s"]);
        assert!(CLIParser::extract_summary_argument(&matches));
    }

    #[test]
    fn parse_unknown_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_summary_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--compress"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        } else {
            panic!("Unknown argument not detected");
        }
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.bin";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path]);
        assert_eq!(
            arguments.input_file.unwrap().file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert!(
            !arguments.report_options.draw_tree,
            "draw_tree does not match"
        );
        assert!(!arguments.report_options.summary, "summary does not match");
    }

    #[test]
    fn parse_all_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "-d", "-s", "input.bin"]);
        assert!(arguments.input_file.is_some());
        assert!(arguments.report_options.draw_tree);
        assert!(arguments.report_options.summary);
    }
}
