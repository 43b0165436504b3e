use crate::constants::{STDERR_NAME, STDOUT_NAME};
use crate::error::{PrintError, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Куда уходит отформатированное сообщение.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    Stderr,
    /// Файл открывается в режиме дозаписи на время одного вызова.
    File(&'a Path),
}

impl fmt::Display for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str(STDOUT_NAME),
            Destination::Stderr => f.write_str(STDERR_NAME),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Единственное место, где шаблон превращается в байты. Все обёртки проходят через него.
pub fn render(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}

/// Форматирует сообщение и пишет его в произвольный `Write`. Возвращает число записанных байт.
pub fn write_to<W: Write + ?Sized>(writer: &mut W, args: fmt::Arguments<'_>) -> io::Result<usize> {
    let rendered = render(args);
    write_rendered(writer, rendered.as_bytes())
}

/// Форматирует сообщение и пишет его в `destination`.
///
/// Для файла дескриптор открывается, используется и закрывается внутри вызова, в том числе при ошибке.
/// Повторов нет: первая ошибка ввода-вывода возвращается вызывающему.
pub fn write(destination: Destination<'_>, args: fmt::Arguments<'_>) -> Result<usize> {
    let rendered = render(args);
    write_bytes(destination, rendered.as_bytes())
}

pub(crate) fn write_bytes(destination: Destination<'_>, bytes: &[u8]) -> Result<usize> {
    let result = match destination {
        Destination::Stdout => write_rendered(&mut io::stdout().lock(), bytes),
        Destination::Stderr => write_rendered(&mut io::stderr().lock(), bytes),
        Destination::File(path) => open_append(path).and_then(|mut file| write_rendered(&mut file, bytes)),
    };

    match result {
        Ok(written) => {
            log::trace!("Wrote {} bytes to {}", written, destination);
            Ok(written)
        }
        Err(err) => {
            log::debug!("Write to {} failed: {}", destination, err);
            Err(PrintError::io(destination, err))
        }
    }
}

pub(crate) fn write_rendered<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> io::Result<usize> {
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}

pub(crate) fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
