//! Runs every sort on a small fixed input and prints before and after.
//!
//! `showcase [NAME...]` restricts the run to the named sorts, e.g. `showcase bubble radix`.

use std::env;
use std::process;

use sort_engine::util::compare_ints;
use sort_engine::{Algorithm, IntAlgorithm};

const TEST_DATA: [i32; 10] = [64, 34, 25, 12, 22, 11, 90, 88, 7, 21];
const BITONIC_DATA: [i32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
const INT_DATA: [i32; 8] = [170, 45, 75, 90, 802, 24, 2, 66];

fn format_array(label: &str, v: &[i32]) -> String {
    let values = v
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!("{label:<25}: [ {values} ]")
}

/// "cocktail_shaker" -> "Cocktail Shaker Sort", "odd_even" -> "Odd-Even Sort".
fn title(name: &str) -> String {
    let separator = if name == "odd_even" { "-" } else { " " };
    let words: Vec<String> = name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    format!("{} Sort", words.join(separator))
}

fn show(name: &str, input: &[i32], sort_func: impl FnOnce(&mut [i32])) {
    let mut v = input.to_vec();

    println!("--- Testing {} ---", title(name));
    println!("{}", format_array("Original", &v));

    sort_func(&mut v);

    println!("{}", format_array("Sorted", &v));
    println!();
}

enum Selected {
    Comparison(Algorithm),
    Int(IntAlgorithm),
}

/// Comparison sorts first, then the integer sorts, each in declaration order.
fn default_selection() -> Vec<Selected> {
    Algorithm::ALL
        .into_iter()
        .map(Selected::Comparison)
        .chain(IntAlgorithm::ALL.into_iter().map(Selected::Int))
        .collect()
}

fn parse_selection(args: &[String]) -> Result<Vec<Selected>, String> {
    args.iter()
        .map(|arg| {
            if let Ok(algorithm) = arg.parse::<Algorithm>() {
                Ok(Selected::Comparison(algorithm))
            } else {
                arg.parse::<IntAlgorithm>()
                    .map(Selected::Int)
                    .map_err(|err| err.to_string())
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let selection = if args.is_empty() {
        default_selection()
    } else {
        match parse_selection(&args) {
            Ok(selection) => selection,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        }
    };

    log::debug!("showing {} sorts", selection.len());

    for selected in selection {
        match selected {
            Selected::Comparison(algorithm) => {
                let input: &[i32] = if algorithm.supports_len(TEST_DATA.len()) {
                    &TEST_DATA
                } else {
                    &BITONIC_DATA
                };
                show(algorithm.name(), input, |v| algorithm.sort_by(v, compare_ints));
            }
            Selected::Int(algorithm) => {
                show(algorithm.name(), &INT_DATA, |v| algorithm.sort(v));
            }
        }
    }
}
