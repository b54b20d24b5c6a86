use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToReadFileName(std::io::Error),
    NoFileNameProvided,
    UnableToWriteReport(std::io::Error),
    NoSymbolsToBuildTreeFrom,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "There is no file with the name '{}'", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToReadFileName(error) => {
                write!(f, "Unable to read the input file name: {}", error)
            }
            Self::NoFileNameProvided => write!(f, "No input file name was typed"),
            Self::UnableToWriteReport(error) => {
                write!(f, "Unable to write the code book report: {}", error)
            }
            Self::NoSymbolsToBuildTreeFrom => {
                write!(f, "Can't build a huffman tree without any symbol")
            }
        }
    }
}

impl std::error::Error for Error {}
