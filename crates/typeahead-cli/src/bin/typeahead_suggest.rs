// typeahead-suggest: Suggest words for typed prefixes or misspellings.
//
// Reads queries from stdin (one per line) unless QUERY arguments are given.
// Each query is lowercased before lookup.
//
// Usage:
//   typeahead-suggest [-w WORDS] [OPTIONS] [QUERY...]
//
// Options:
//   -w, --words PATH   Word list file (one word per line)
//   -n, --limit N      Maximum number of suggestions (default: 10, max: 100)
//   --json             Print each result as one JSON object per line
//   -v, --verbose      Log at debug level
//   -q, --quiet        Log warnings only
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use typeahead_engine::{DEFAULT_LIMIT, Engine};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = typeahead_cli::parse_words_path(&args);
    let (level, args) = typeahead_cli::parse_log_level(&args);

    if typeahead_cli::wants_help(&args) {
        println!("typeahead-suggest: Suggest words for prefixes or misspellings.");
        println!();
        println!("Usage: typeahead-suggest [-w WORDS] [OPTIONS] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, suggests for each query.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH   Word list file (one word per line)");
        println!("  -n, --limit N      Maximum number of suggestions (default: 10, max: 100)");
        println!("  --json             Print each result as one JSON object per line");
        println!("  -v, --verbose      Log at debug level");
        println!("  -q, --quiet        Log warnings only");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut limit = DEFAULT_LIMIT as i64;
    let mut json = false;
    let mut queries: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--limit" {
            match args.get(i + 1) {
                Some(val) => {
                    limit = val
                        .parse()
                        .unwrap_or_else(|_| typeahead_cli::fatal("invalid number for --limit"));
                    skip_next = true;
                }
                None => typeahead_cli::fatal("--limit requires a value"),
            }
        } else if arg == "--json" {
            json = true;
        } else if !arg.starts_with('-') {
            queries.push(arg.clone());
        }
    }

    typeahead_cli::init_logging(level);

    let engine = typeahead_cli::load_engine(words_path.as_deref())
        .unwrap_or_else(|e| typeahead_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if queries.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            if let Err(e) = suggest_query(&engine, query, limit, json, &mut out) {
                typeahead_cli::fatal(&e.to_string());
            }
        }
    } else {
        for query in &queries {
            if let Err(e) = suggest_query(&engine, query, limit, json, &mut out) {
                typeahead_cli::fatal(&e.to_string());
            }
        }
    }

    if let Err(e) = out.flush() {
        typeahead_cli::fatal(&e.to_string());
    }
}

fn suggest_query(
    engine: &Engine,
    query: &str,
    limit: i64,
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let suggestion = engine.suggest_normalized(query, limit);

    if json {
        serde_json::to_writer(&mut *out, &suggestion)?;
        return writeln!(out);
    }

    if suggestion.is_empty() {
        return writeln!(out, "{query}: {} (no suggestions)", suggestion.kind);
    }
    writeln!(out, "{query}: {}", suggestion.kind)?;
    for word in &suggestion.words {
        writeln!(out, "  {}\t{:.4}", word.text, word.score)?;
    }
    Ok(())
}
