pub mod sink;

use crate::constants::STDOUT_NAME;
use crate::error::{PrintError, Result};
use crate::logs::multi::MultiWriter;
use sink::Destination;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

pub fn print(args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::Stdout, args)
}

/// Те же правила форматирования, что у [`print`], но в stderr.
pub fn print_error(args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::Stderr, args)
}

/// Отличается от [`print`] только намерением вызывающего.
pub fn print_notice(args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::Stdout, args)
}

pub fn print_warning(args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::Stdout, args)
}

pub fn print_info(args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::Stdout, args)
}

/// Дописывает сообщение в конец файла `path`. Файл создаётся при отсутствии и закрывается до возврата.
/// Перевод строки не добавляется.
pub fn log_to_file<P: AsRef<Path>>(path: P, args: fmt::Arguments<'_>) -> Result<usize> {
    sink::write(Destination::File(path.as_ref()), args)
}

/// Пишет одно и то же сообщение сначала в файл `path`, затем в stdout.
///
/// Запись в stdout выполняется всегда, даже если файл не открылся или запись в него не удалась.
/// Возвращается первая ошибка: ошибка файла, если она была, иначе ошибка stdout.
/// При успехе возвращается длина сообщения (оно записано по одному разу в каждый приёмник).
pub fn print_and_log<P: AsRef<Path>>(path: P, args: fmt::Arguments<'_>) -> Result<usize> {
    // Stdout блокируется внутри write_all/flush, а не на время работы с файлом.
    print_and_log_to(path, &mut io::stdout(), args)
}

/// Псевдоним [`print_and_log`].
pub fn notate<P: AsRef<Path>>(path: P, args: fmt::Arguments<'_>) -> Result<usize> {
    print_and_log(path, args)
}

/// [`print_and_log`] с подменяемой консолью: `out` занимает место stdout.
pub fn print_and_log_to<P, W>(path: P, out: &mut W, args: fmt::Arguments<'_>) -> Result<usize>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    let path = path.as_ref();
    let rendered = sink::render(args);
    let bytes = rendered.as_bytes();

    let (file_result, console_result) = match sink::open_append(path) {
        Ok(file) => {
            let mut tee = MultiWriter::new(file, &mut *out);
            let (file_written, console_written) = tee.write_both(bytes);
            let (file_flushed, console_flushed) = tee.flush_both();
            (file_written.and(file_flushed), console_written.and(console_flushed))
        }
        Err(err) => (Err(err), sink::write_rendered(out, bytes).map(|_| ())),
    };

    settle(path, file_result, console_result, bytes.len())
}

fn settle(path: &Path, file: io::Result<()>, console: io::Result<()>, written: usize) -> Result<usize> {
    match (file, console) {
        (Ok(()), Ok(())) => {
            log::trace!("Wrote {} bytes to {} and {}", written, path.display(), STDOUT_NAME);
            Ok(written)
        }
        (Err(file_err), Ok(())) => {
            log::warn!("Message reached {} but not {}: {}", STDOUT_NAME, path.display(), file_err);
            Err(PrintError::io(Destination::File(path), file_err))
        }
        (Err(file_err), Err(console_err)) => {
            log::warn!("Message lost on both {} ({}) and {} ({})", path.display(), file_err, STDOUT_NAME, console_err);
            Err(PrintError::io(Destination::File(path), file_err))
        }
        (Ok(()), Err(console_err)) => {
            log::warn!("Message appended to {} but not written to {}: {}", path.display(), STDOUT_NAME, console_err);
            Err(PrintError::io(STDOUT_NAME, console_err))
        }
    }
}

#[macro_export]
macro_rules! print_out {
    ($($arg:tt)*) => {
        $crate::print::print(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::print::print_error(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_notice {
    ($($arg:tt)*) => {
        $crate::print::print_notice(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::print::print_warning(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        $crate::print::print_info(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_to_file {
    ($path:expr, $($arg:tt)*) => {
        $crate::print::log_to_file($path, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_and_log {
    ($path:expr, $($arg:tt)*) => {
        $crate::print::print_and_log($path, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! notate {
    ($path:expr, $($arg:tt)*) => {
        $crate::print::notate($path, ::std::format_args!($($arg)*))
    };
}
