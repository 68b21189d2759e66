#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate ini;

#[cfg(test)]
extern crate rand;

pub mod alg;
pub mod config;
