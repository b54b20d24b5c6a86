use std::{
    fs::File,
    io::{self, BufRead, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{frequency::FrequencyTable, Analysis};
use report::{ReportOptions, ReportWriter};

mod cli;
mod error;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

const FILE_NAME_PROMPT: &str = "Type the input file name:";
const FILE_FOUND_MESSAGE: &str = "File found.";

pub struct Arguments {
    input_file: Option<PathBuf>,
    report_options: ReportOptions,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        let path = file_path.display().to_string();
        match e.kind() {
            ErrorKind::NotFound => Error::InputFileNotFound(path),
            ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(path),
            _ => Error::UnableToOpenInputFileForReading(path, e),
        }
    })
}

/// Asks for the input file name on `prompt` and reads one line from `input`.
pub fn read_input_file_name<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> Result<PathBuf> {
    writeln!(prompt, "{}", FILE_NAME_PROMPT)
        .and_then(|_| prompt.flush())
        .map_err(Error::UnableToReadFileName)?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(Error::UnableToReadFileName)?;
    let file_name = line.trim_end_matches(&['\r', '\n'][..]);
    if file_name.is_empty() {
        return Err(Error::NoFileNameProvided);
    }
    Ok(PathBuf::from(file_name))
}

pub fn analyze<R: Read>(reader: R) -> io::Result<Analysis> {
    let frequencies = FrequencyTable::count(reader)?;
    logger::log_frequencies(&frequencies);
    Ok(Analysis::from(frequencies))
}

pub fn analyze_file(file_path: &Path) -> Result<Analysis> {
    let input_file = open_input_file(file_path)?;
    analyze(&input_file)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))
}

/// Runs the whole pipeline. The file name is read from `input` when it was
/// not given as an argument, everything else goes to `output`.
pub fn write_code_book<R: BufRead, W: Write>(
    arguments: &Arguments,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let input_file_path = match &arguments.input_file {
        Some(path) => path.clone(),
        None => read_input_file_name(input, output)?,
    };
    let input_file = open_input_file(&input_file_path)?;
    writeln!(output, "{}", FILE_FOUND_MESSAGE).map_err(Error::UnableToWriteReport)?;
    let analysis = analyze(&input_file)
        .map_err(|e| Error::UnableToReadInputFile(input_file_path.display().to_string(), e))?;
    ReportWriter::new(output, arguments.report_options)
        .write(&analysis)
        .map_err(Error::UnableToWriteReport)
}

pub fn print_code_book(arguments: &Arguments) -> Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    write_code_book(arguments, &mut stdin, &mut stdout)
}
