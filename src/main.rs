#![allow(non_snake_case)]
use RustedODEBVP::Examples::bvp_fitting_examples::bvp_fitting_examples;
use RustedODEBVP::Utils::logger::init_term_logger;

fn main() {
    init_term_logger("info").unwrap_or_else(|e| eprintln!("{}", e));
    let example = 3;
    bvp_fitting_examples(example);
}
