mod exec;
mod utils;

use std::io::Write;

use crate::exec::{CommandRunner, SystemRunner};

/// Forward `args` to chezmoi and return the exit code this process should
/// terminate with. A launch failure is written to `stderr` and maps to 1;
/// anything the child itself reports passes through verbatim.
fn run(runner: &mut dyn CommandRunner, args: &[String], stderr: &mut dyn Write) -> i32 {
    match exec::execute_with(runner, args, false) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(stderr, "{:#}", e);
            1
        }
    }
}

fn main() {
    utils::logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = run(&mut SystemRunner, &args, &mut std::io::stderr());
    std::process::exit(code);
}
