extern crate failure;
extern crate marble_mania as marbles;

use failure::Error;
use marbles::game::{play, Rules};
use std::fs;
use std::io::Read;

fn main() -> Result<(), Error> {
    let mut input = String::new();
    match std::env::args().nth(1) {
        Some(path) => input = fs::read_to_string(path)?,
        None => {
            let stdin = std::io::stdin();
            stdin.lock().read_to_string(&mut input)?;
        }
    }

    let rules: Rules = input.trim().parse()?;
    println!("{}", play(rules.players, rules.last_marble));
    println!("{}", play(rules.players, rules.last_marble * 100));

    Ok(())
}
