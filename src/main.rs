use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use zdeflate::cli::Cli;
use zdeflate::constants::exit_codes;
use zdeflate::dict::load_dictionary;
use zdeflate::logger;
use zdeflate::stream::{deflate_stream, inflate_stream, DeflateParams};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::OK,
                _ => exit_codes::USAGE,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    logger::init(cli.verbose);

    let dictionary = match cli.dict.as_deref().map(load_dictionary).transpose() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("zdeflate: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let result = if cli.decompress {
        tracing::debug!(framing = ?cli.framing(), "inflating stdin to stdout");
        inflate_stream(stdin, stdout, cli.framing(), dictionary.as_deref())
    } else {
        let params = DeflateParams {
            level: cli.level,
            strategy: cli.strategy.into(),
            framing: cli.framing(),
        };
        tracing::debug!(?params, "deflating stdin to stdout");
        deflate_stream(stdin, stdout, &params, dictionary.as_deref())
    };

    match result {
        Ok(summary) => {
            tracing::debug!(
                bytes_in = summary.bytes_in,
                bytes_out = summary.bytes_out,
                "stream complete"
            );
            if summary.trailing_bytes > 0 {
                // Bare count, no decoration: downstream test drivers parse
                // this to spot data left after the compressed stream.
                eprint!("{}", summary.trailing_bytes);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("zdeflate: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
