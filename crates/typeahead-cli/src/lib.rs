// typeahead-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use tracing::{Level, warn};
use typeahead_engine::{Engine, Vocabulary};

/// Environment variable naming a word list file.
const WORDS_ENV: &str = "TYPEAHEAD_WORDS";

/// Word list file name looked up in the current directory.
const LOCAL_WORDS: &str = "words.txt";

/// Find a word list and build an Engine from it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `TYPEAHEAD_WORDS` environment variable
/// 3. `/usr/share/dict/words`, then `/usr/dict/words`
/// 4. `words.txt` in the current working directory
///
/// An explicit path that does not exist is an error rather than falling
/// through to the system lists.
pub fn load_engine(words_path: Option<&str>) -> Result<Engine, String> {
    if let Some(path) = words_path {
        return load_from(Path::new(path));
    }

    let search_paths = build_search_paths();
    for path in &search_paths {
        if path.is_file() {
            return load_from(path);
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Load one word list file. A list with no usable words still builds an
/// (empty) engine, with a warning.
fn load_from(path: &Path) -> Result<Engine, String> {
    let vocabulary = Vocabulary::from_path(path).map_err(|e| e.to_string())?;
    if vocabulary.is_empty() {
        warn!(
            path = %path.display(),
            lines = vocabulary.lines_read(),
            "word list contains no words"
        );
    }
    Ok(Engine::new(&vocabulary))
}

/// Build the list of candidate word list files, in lookup order.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));
    paths.push(PathBuf::from("/usr/dict/words"));

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_WORDS));
    }

    paths
}

/// Parse a `--words=PATH`, `--words PATH` or `-w PATH` argument.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words=") {
            words_path = Some(val.to_string());
        } else if arg == "--words" || arg == "-w" {
            match args.get(i + 1) {
                Some(val) => {
                    words_path = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_path, remaining)
}

/// Strip `-v`/`--verbose` and `-q`/`--quiet` from the args and pick a log
/// level: DEBUG, WARN, or INFO when neither is given. The last flag wins.
pub fn parse_log_level(args: &[String]) -> (Level, Vec<String>) {
    let mut level = Level::INFO;
    let mut remaining = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => level = Level::DEBUG,
            "-q" | "--quiet" => level = Level::WARN,
            _ => remaining.push(arg.clone()),
        }
    }
    (level, remaining)
}

/// Install a stderr log subscriber at `level`.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_path_forms() {
        let (path, rest) = parse_words_path(&args(&["-w", "a.txt", "cat"]));
        assert_eq!(path.as_deref(), Some("a.txt"));
        assert_eq!(rest, args(&["cat"]));

        let (path, rest) = parse_words_path(&args(&["dog", "--words=b.txt"]));
        assert_eq!(path.as_deref(), Some("b.txt"));
        assert_eq!(rest, args(&["dog"]));

        let (path, rest) = parse_words_path(&args(&["--words", "c.txt"]));
        assert_eq!(path.as_deref(), Some("c.txt"));
        assert!(rest.is_empty());
    }

    #[test]
    fn no_words_path() {
        let (path, rest) = parse_words_path(&args(&["-n", "5", "ca"]));
        assert!(path.is_none());
        assert_eq!(rest, args(&["-n", "5", "ca"]));
    }

    #[test]
    fn log_level_flags() {
        assert_eq!(parse_log_level(&args(&["ca"])).0, Level::INFO);
        assert_eq!(parse_log_level(&args(&["-v", "ca"])).0, Level::DEBUG);
        let (level, rest) = parse_log_level(&args(&["-v", "--quiet", "ca"]));
        assert_eq!(level, Level::WARN);
        assert_eq!(rest, args(&["ca"]));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["x", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["help"])));
    }

    #[test]
    fn explicit_missing_word_list_is_an_error() {
        let missing = std::env::temp_dir().join("typeahead-cli-missing-words.txt");
        let err = load_engine(missing.to_str()).unwrap_err();
        assert!(err.contains("typeahead-cli-missing-words.txt"), "{err}");
    }

    #[test]
    fn explicit_word_list_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/data/words.txt");
        let engine = load_engine(path.to_str()).unwrap();
        assert!(engine.contains("cat"));
    }

    #[test]
    fn blank_word_list_builds_empty_engine() {
        let path = std::env::temp_dir().join(format!("typeahead-cli-blank-{}.txt", process::id()));
        std::fs::write(&path, "\n   \n\n").unwrap();
        let engine = load_engine(path.to_str());
        std::fs::remove_file(&path).unwrap();
        assert!(engine.unwrap().is_empty());
    }
}
