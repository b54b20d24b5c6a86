use std::env::args_os;

use huffman_tree_builder::{print_code_book, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    if let Err(e) = print_code_book(&arguments) {
        eprintln!("Building the code book failed because of: {}", e);
    }
}
