// izondrame: randomizer for a list of distinct entries
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use env_logger::Env;
use izondrame::Config;
use std::env;

// mainline - collect entries, randomize them, report them
fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    // get command-line data, clap prints help or usage errors and exits
    let config = match Config::from_args(env::args_os()) {
        Ok(x) => x,
        Err(e) => e.exit(),
    };

    izondrame::run(&config)
}
