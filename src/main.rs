use smai_rs::shell::{Shell, ShellConfig};
use std::io;

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut shell = Shell::new(
        stdin.lock(),
        io::stdout(),
        io::stderr(),
        ShellConfig::from_env(),
    );
    shell.run()
}
