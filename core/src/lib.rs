pub mod export;
pub mod generator;
pub mod names;
pub mod prefixes;
pub mod synth;
