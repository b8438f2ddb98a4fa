mod generation;
mod persistence;
mod sourcing;
