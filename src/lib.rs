#[macro_use]
extern crate failure;
#[cfg(test)]
extern crate itertools;

pub mod game;
pub mod ring;
