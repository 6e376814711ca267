// typeahead-distance: Compare two words with every metric the engine uses.
//
// Usage:
//   typeahead-distance WORD_A WORD_B
//
// Prints the Damerau-Levenshtein and Levenshtein distances, the Jaro-Winkler
// similarity of WORD_A against WORD_B, and the edit-distance similarity.

use typeahead_core::distance::{damerau_levenshtein, levenshtein};
use typeahead_core::similarity::{edit_distance_similarity, jaro_winkler};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if typeahead_cli::wants_help(&args) {
        println!("typeahead-distance: Compare two words.");
        println!();
        println!("Usage: typeahead-distance WORD_A WORD_B");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let [a, b] = args.as_slice() else {
        typeahead_cli::fatal("expected exactly two words (see --help)");
    };

    println!("damerau-levenshtein  {}", damerau_levenshtein(a, b));
    println!("levenshtein          {}", levenshtein(a, b));
    println!("jaro-winkler         {:.4}", jaro_winkler(a, b));
    println!("edit-similarity      {:.4}", edit_distance_similarity(a, b));
}
