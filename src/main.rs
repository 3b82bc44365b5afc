use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use log::{debug, error};

fn read_input() -> io::Result<String> {
    match std::env::args_os().nth(1) {
        Some(path) if path != "-" => {
            debug!("Reading record from {path:?}");
            fs::read_to_string(path)
        }
        _ => {
            debug!("Reading record from stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            error!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };
    match ratinterp::solve_record(&input) {
        Ok(poly) => {
            println!("{poly}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
