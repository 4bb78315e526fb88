// izondrame: randomizer for a list of distinct entries (library)
// reads entries from a file and live input, orders them by unique random scores,
// then prints the results and saves them to a file
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

pub mod collect;
pub mod config;
pub mod report;
pub mod score;
pub mod shuffle;

use anyhow::{Error, Result};
use std::io::{self, Write};

pub use config::Config;

// greet the user and say where entries can come from
fn print_start_message<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(
        out,
        "Hello! Welcome to izondrame, a randomizer for your general needs.\n\
         -> Other than your live input, I can also read from '{}'.\n\
         -> Simply place it in the same folder as this program. ^^",
        config.input_path.display()
    )
}

// run: library side of command line called from main()
pub fn run(config: &Config) -> Result<(), Error> {
    print_start_message(&mut io::stdout().lock(), config)?;

    // collect entries from the entry file, then live input
    let entries = collect::obtain_input(config)?;

    // score and reorder them
    let results = shuffle::execute(entries, config)?;

    // show and save the results
    report::handle_results(config, &results)
}
