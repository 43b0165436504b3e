use anyhow::{bail, Context, Result};
use printlog::logs::logger;
use printlog::settings::Settings;
use printlog::{log_to_file, notate, print_and_log, print_error, print_info, print_notice, print_out, print_warning};
use std::io::Write;

fn main() -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    logger::init(settings.level_filter()?)?;
    log::info!("Logging demo messages to {}", settings.log_file.display());

    let test = "Outhere";
    let path = &settings.log_file;

    let mut outcomes = vec![report("print", print_out!("print function {}\n", test))];
    // Для сравнения: стандартные средства выводят те же байты.
    println!("println macro {}", test);
    writeln!(std::io::stdout(), "writeln macro {}", test)?;

    outcomes.push(report("print_notice", print_notice!("notice {}\n", test)));
    outcomes.push(report("print_error", print_error!("error {}\n", test)));
    outcomes.push(report("print_warning", print_warning!("warning {}\n", test)));
    outcomes.push(report("print_info", print_info!("info {}\n", test)));
    outcomes.push(report("print_and_log", print_and_log!(path, "print and log: {}\n", test)));
    outcomes.push(report("log_to_file", log_to_file!(path, "only_log output2: {}\n", test)));
    outcomes.push(report("notate", notate!(path, "Alias: notate: print and log: {}\n", test)));

    let failed = outcomes.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        bail!("{} of {} demo calls failed", failed, outcomes.len());
    }

    log::info!("All demo messages written");
    Ok(())
}

/// Каждый вызов выполняется независимо: ошибка одного не мешает остальным.
fn report(name: &str, result: printlog::Result<usize>) -> bool {
    match result {
        Ok(written) => {
            log::debug!("{} wrote {} bytes", name, written);
            true
        }
        Err(err) => {
            log::error!("{} failed: {}", name, err);
            false
        }
    }
}
