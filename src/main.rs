use clap::Parser;
use nullsafe_commons::config::cli::{CliArgs, Command};
use nullsafe_commons::utils::logger;
use nullsafe_commons::{
    capitalize, generate, generate_delimited, head_of, quote_all, reverse, strip_head, strip_tail,
    tail_of, uncapitalize, CommonsConfig, CommonsError, ErrorCategory,
};

fn run(command: Command, config: &CommonsConfig) -> Result<Vec<String>, CommonsError> {
    let lines = match command {
        Command::Generate {
            unit,
            count,
            delimiter,
        } => {
            let delimiter = delimiter.as_deref().or(config.delimiter());
            tracing::debug!(%unit, count, ?delimiter, "generating");
            let generated = match delimiter {
                Some(delimiter) => generate_delimited(unit.as_str(), count, delimiter)?,
                None => generate(unit.as_str(), count)?,
            };
            vec![generated]
        }
        Command::Quote { values } => quote_all(Some(&values)),
        Command::Capitalize { value } => capitalize(value.as_str()).into_iter().collect(),
        Command::Uncapitalize { value } => uncapitalize(value.as_str()).into_iter().collect(),
        Command::StripHead { value, count } => {
            strip_head(value.as_str(), count).map(str::to_string).into_iter().collect()
        }
        Command::StripTail { value, count } => {
            strip_tail(value.as_str(), count).map(str::to_string).into_iter().collect()
        }
        Command::Reverse { items } => reverse(items),
        Command::Head { items } => vec![head_of(Some(items))?],
        Command::Tail { items } => vec![tail_of(Some(items))?],
    };
    Ok(lines)
}

fn exit_code(error: &CommonsError) -> i32 {
    match error.category() {
        ErrorCategory::Reference
        | ErrorCategory::Argument
        | ErrorCategory::Type
        | ErrorCategory::Config => 1,
        ErrorCategory::State | ErrorCategory::Runtime => 2,
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => CommonsConfig::from_file(path).and_then(|config| {
            config.validate()?;
            Ok(config)
        }),
        None => Ok(CommonsConfig::default()),
    };

    let verbose = args.verbose || config.as_ref().is_ok_and(|c| c.logging.verbose);
    if config.as_ref().is_ok_and(|c| c.logging.json) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    match run(args.command, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!(category = ?e.category(), "❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}
