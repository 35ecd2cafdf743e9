mod debug_report;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use wordstrip::{FinderConfig, PrefixFinder, TieBreak};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let finder = match build_finder(&config) {
        Ok(finder) => finder,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let phrases = match config.input.clone() {
        Some(phrase) => vec![phrase],
        None => match read_stdin_phrases() {
            Ok(phrases) => phrases,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    if phrases.is_empty() {
        eprintln!("error: no input provided\n\n{}", help_text());
        std::process::exit(2);
    }

    if config.verbose {
        debug_report::print_engine(&finder, config.color);
    }
    for phrase in &phrases {
        if config.verbose {
            debug_report::print_phrase(phrase, &finder, config.sort_key, config.color);
        } else if config.sort_key {
            println!("{}", finder.calculate_base_of_from_for_sorting(phrase));
        } else {
            println!("{}", finder.remove_prefix(phrase));
        }
    }
}

struct CliConfig {
    input: Option<String>,
    config_path: Option<PathBuf>,
    ignored: Vec<String>,
    tie_break: Option<TieBreak>,
    splice: bool,
    sort_key: bool,
    verbose: bool,
    color: bool,
}

fn build_finder(cli: &CliConfig) -> wordstrip::Result<PrefixFinder> {
    let mut config = match &cli.config_path {
        Some(path) => FinderConfig::load(path)?,
        None => FinderConfig::default(),
    };
    config.ignored.extend(cli.ignored.iter().cloned());
    if let Some(tie_break) = cli.tie_break {
        config.tie_break = tie_break;
    }
    if !cli.splice {
        config.splice_shared_tails = false;
    }
    log::debug!("building engine from {} templates", config.templates.len());
    PrefixFinder::new(&config)
}

fn parse_args() -> Result<CliConfig, String> {
    let mut cli = CliConfig {
        input: None,
        config_path: None,
        ignored: Vec::new(),
        tie_break: None,
        splice: true,
        sort_key: false,
        verbose: false,
        color: io::stdout().is_terminal(),
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("wordstrip {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => cli.color = true,
            "--no-color" => cli.color = false,
            "--sort-key" | "-s" => cli.sort_key = true,
            "--verbose" | "-v" => cli.verbose = true,
            "--no-splice" => cli.splice = false,
            "--ignore" => {
                let value = args.next().ok_or_else(|| "error: --ignore expects a value".to_string())?;
                cli.ignored.push(value);
            }
            "--config" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --config expects a value".to_string())?;
                cli.config_path = Some(PathBuf::from(value));
            }
            "--policy" => {
                let value = args.next().ok_or_else(|| "error: --policy expects a value".to_string())?;
                cli.tie_break = Some(parse_policy(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut cli, value)?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut cli, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--ignore=") => {
                cli.ignored.push(arg.trim_start_matches("--ignore=").to_string());
            }
            _ if arg.starts_with("--config=") => {
                cli.config_path = Some(PathBuf::from(arg.trim_start_matches("--config=")));
            }
            _ if arg.starts_with("--policy=") => {
                cli.tie_break = Some(parse_policy(arg.trim_start_matches("--policy="))?);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                set_input(&mut cli, value)?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                set_input(&mut cli, rest)?;
                break;
            }
        }
    }

    Ok(cli)
}

fn set_input(cli: &mut CliConfig, value: String) -> Result<(), String> {
    if cli.input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    cli.input = Some(value);
    Ok(())
}

fn parse_policy(value: &str) -> Result<TieBreak, String> {
    value.parse::<TieBreak>().map_err(|err| format!("error: {err}"))
}

/// One phrase per non-blank line.
fn read_stdin_phrases() -> Result<Vec<String>, String> {
    let stdin = io::stdin();
    let mut phrases = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        if !line.trim().is_empty() {
            phrases.push(line);
        }
    }
    Ok(phrases)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "wordstrip {version}

Strips leading filler words (articles, prepositions, common verbs) from phrases.

Usage:
  wordstrip [OPTIONS] [--] <phrase...>
  wordstrip [OPTIONS] --input <phrase>
  wordstrip [OPTIONS] < phrases.txt      (one phrase per line)

Options:
  -i, --input <text>         Phrase to process. If omitted, reads remaining args
                             or stdin when no args are provided.
  -s, --sort-key             Print the sort key instead of the stripped phrase.
  --ignore <word>            Never treat <word> as filler. Repeatable.
  -c, --config <file>        Load tables and templates from a TOML file.
  --policy <longest|shortest>
                             How ambiguous matches are resolved. Default: longest
  --no-splice                Inline template tails instead of sharing fragments.
  -v, --verbose              Print the match and engine build details.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter, e.g. RUST_LOG=wordstrip=trace

Exit codes:
  0  Success.
  1  Configuration error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
