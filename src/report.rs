// izondrame: randomizer for a list of distinct entries (result reporting)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::config::Config;
use anyhow::{Context, Error, Result};
use log::info;
use std::{
    fs,
    io::{self, Write},
    path::Path,
    thread,
    time::Duration,
};

/// First line of the results file.
pub const RESULTS_HEADER: &str = "Here are the latest results:";

const RESULTS_MESSAGE: &str =
    "Hmmm... After applying my randomize algorithm, here's the results in 'ascending' order:";

/// Results file contents: the header, then `index: value` per result, no trailing newline.
pub fn format_results(results: &[String]) -> String {
    let mut text = String::from(RESULTS_HEADER);
    for (i, result) in results.iter().enumerate() {
        text.push_str(&format!("\n{}: {}", i + 1, result));
    }
    text
}

/// Print the results one by one, pausing `delay` before each.
pub fn print_results<W: Write>(out: &mut W, results: &[String], delay: Duration) -> io::Result<()> {
    writeln!(out, "{RESULTS_MESSAGE}")?;
    for (i, result) in results.iter().enumerate() {
        if !delay.is_zero() {
            out.flush()?;
            thread::sleep(delay);
        }
        writeln!(out, "{}: {}", i + 1, result)?;
    }
    out.flush()
}

/// Replace the results file with the given results.
pub fn write_results(path: &Path, results: &[String]) -> Result<(), Error> {
    fs::write(path, format_results(results))
        .with_context(|| format!("Failed to write {}", path.to_string_lossy()))?;
    info!("wrote {} results to {}", results.len(), path.display());
    Ok(())
}

/// Show the results on standard output, then save them to the configured results file.
pub fn handle_results(config: &Config, results: &[String]) -> Result<(), Error> {
    print_results(&mut io::stdout().lock(), results, config.print_delay)?;
    write_results(&config.output_path, results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_numbered_lines_after_header() {
        let text = format_results(&strings(&["beta", "alpha", "gamma"]));
        assert_eq!(
            text,
            "Here are the latest results:\n1: beta\n2: alpha\n3: gamma"
        );
    }

    #[test]
    fn no_results_is_header_only() {
        assert_eq!(format_results(&[]), RESULTS_HEADER);
    }

    #[test]
    fn prints_intro_then_each_result() {
        let mut out = Vec::new();
        print_results(&mut out, &strings(&["b", "a"]), Duration::ZERO).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("{RESULTS_MESSAGE}\n1: b\n2: a\n"));
    }

    #[test]
    fn pauses_between_results() {
        let mut out = Vec::new();
        let started = std::time::Instant::now();
        print_results(&mut out, &strings(&["a", "b", "c"]), Duration::from_millis(10)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn written_file_reads_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let results = strings(&["one: with colon", "two", "three"]);
        write_results(&path, &results).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(RESULTS_HEADER));
        let pairs: Vec<(usize, String)> = lines
            .map(|line| {
                let (idx, value) = line.split_once(": ").unwrap();
                (idx.parse().unwrap(), value.to_string())
            })
            .collect();
        let expected: Vec<(usize, String)> = results
            .into_iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn rewrite_truncates_previous_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        write_results(&path, &strings(&["a", "b", "c", "d"])).unwrap();
        write_results(&path, &strings(&["z"])).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Here are the latest results:\n1: z"
        );
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_results(&dir.path().join("missing").join("out.txt"), &[]).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
