use chrono::Local;
use env_logger::Builder;
use log::{LevelFilter, Record, SetLoggerError};
use std::io::Write;

/// Диагностика самой библиотеки идёт в stderr, чтобы не смешиваться с байтами, которые пишутся в stdout.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();
    builder
        .target(env_logger::Target::Stderr)
        .format(|buf, record: &Record| {
            let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let file = record.file().unwrap_or("unknown_file");
            let level = record.level();

            writeln!(buf, "{} [{}][{:5}] {}", now, file, level, record.args())
        })
        .filter_level(LevelFilter::Off);
    builder.filter_module("printlog", level);
    builder.try_init()
}
