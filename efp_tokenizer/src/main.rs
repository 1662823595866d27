use efp_tokenizer::config::{self, RuntimeConfig};
use efp_tokenizer::logging::{self, codes};
use efp_tokenizer::{log_success, Parser};
use std::env;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Pretty,
    Render,
    Json,
}

#[derive(Debug)]
struct CliOptions {
    mode: OutputMode,
    strict: bool,
    diagnostics: bool,
    config_path: Option<String>,
    formulas: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("efp");

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_help(program_name);
        return Ok(());
    }

    let options = match parse_options(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: {} [--pretty|--render|--json] [--strict] [FORMULA...]",
                program_name
            );
            std::process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => match RuntimeConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                // logging is not up yet, so this falls back to stderr
                logging::safe_log_error(error.error_code(), &error.to_string());
                std::process::exit(2);
            }
        },
        None => RuntimeConfig::default(),
    };

    let initialized = logging::config::init_runtime_preferences(config.logging.clone())
        .and_then(|()| logging::init_global_logging());
    if let Err(message) = initialized {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &message);
        std::process::exit(2);
    }

    log_success!(codes::success::CONFIGURATION_LOADED,
        "Runtime configuration loaded",
        "source" => options.config_path.as_deref().unwrap_or("defaults")
    );

    if options.diagnostics {
        eprintln!("{}", logging::get_system_diagnostics());
    }

    let mut parser = Parser::with_preferences(config.lexical);
    let mut failures = 0;

    if options.formulas.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if !process_formula(&mut parser, &line, &options)? {
                failures += 1;
            }
        }
    } else {
        for formula in &options.formulas {
            if !process_formula(&mut parser, formula, &options)? {
                failures += 1;
            }
        }
    }

    if options.strict && failures > 0 {
        eprintln!("{} formula(s) failed structural validation", failures);
        std::process::exit(1);
    }

    Ok(())
}

/// Tokenize one formula and print it; returns false when a strict check fails
fn process_formula(
    parser: &mut Parser,
    formula: &str,
    options: &CliOptions,
) -> Result<bool, Box<dyn std::error::Error>> {
    parser.parse(formula);

    match options.mode {
        OutputMode::Pretty => {
            println!("{}", parser.formula());
            print!("{}", parser.pretty_print());
        }
        OutputMode::Render => println!("{}", parser.render()),
        OutputMode::Json => println!("{}", parser.outcome().to_json()?),
    }

    if !options.strict {
        return Ok(true);
    }

    match parser.check_structure() {
        Ok(()) => Ok(true),
        Err(error) => {
            eprintln!("[{}] {}: {}", error.error_code(), parser.formula(), error);
            Ok(false)
        }
    }
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        mode: OutputMode::Pretty,
        strict: false,
        diagnostics: false,
        config_path: None,
        formulas: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pretty" => options.mode = OutputMode::Pretty,
            "--render" => options.mode = OutputMode::Render,
            "--json" => options.mode = OutputMode::Json,
            "--strict" => options.strict = true,
            "--diagnostics" => options.diagnostics = true,
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(path.clone());
            }
            "--" => {
                options.formulas.extend(args[i + 1..].iter().cloned());
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            formula => options.formulas.push(formula.to_string()),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help(program_name: &str) {
    println!("EFP formula tokenizer v{}", env!("CARGO_PKG_VERSION"));
    println!("Splits spreadsheet formulas into typed tokens");
    println!("Build: {}", config::build_info::source_info());
    println!();
    println!("USAGE:");
    println!(
        "    {} [options] [FORMULA...]        # Tokenize the given formulas",
        program_name
    );
    println!(
        "    {} [options] < formulas.txt      # One formula per line",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --pretty            One indented line per token (default)");
    println!("    --render            Rebuild the formula from its tokens");
    println!("    --json              Tokens, error flag and metrics as JSON");
    println!("    --strict            Exit non-zero when a formula is malformed");
    println!("    --config PATH       Load preferences from a TOML file");
    println!("    --diagnostics       Print the logging configuration to stderr");
    println!();
    println!("ENVIRONMENT:");
    println!("    EFP_LOGGING_ENABLE_CONSOLE=true   Print diagnostics to stderr");
    println!("    EFP_LOGGING_MIN_LEVEL=debug       Diagnostic verbosity");
    println!("    EFP_LEXICAL_TRACK_OPERATORS=true  Count operator usage in --json output");
    println!();
    println!("EXAMPLES:");
    println!("    {} '=SUM(B5:B15 A7:D7)'", program_name);
    println!("    {} --json '=IF(A1>0,\"yes\",\"no\")'", program_name);
}
