use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrintError>;

#[derive(Debug, Error)]
pub enum PrintError {
    /// Приёмник не удалось открыть или записать в него.
    #[error("failed to write to {destination}: {source}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },
}

impl PrintError {
    pub(crate) fn io(destination: impl ToString, source: io::Error) -> Self {
        PrintError::Io { destination: destination.to_string(), source }
    }

    /// Имя приёмника, на котором произошла ошибка (`<stdout>`, `<stderr>` или путь к файлу).
    pub fn destination(&self) -> &str {
        match self {
            PrintError::Io { destination, .. } => destination,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            PrintError::Io { source, .. } => source,
        }
    }
}

impl From<PrintError> for io::Error {
    fn from(err: PrintError) -> Self {
        let kind = err.io_error().kind();
        io::Error::new(kind, err)
    }
}
