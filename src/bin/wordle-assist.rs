use std::error::Error;
use std::io::{self, BufRead, Write};

use log::debug;
use structopt::StructOpt;
use wordle_assist::report::{bar_chart, summary, word_list};
use wordle_assist::{dictionary, parse_round, Response, Session, Status, Word};

#[derive(Debug, StructOpt)]
struct Args {
    /// Path to a dictionary file, with one word per line.
    #[structopt(default_value = "/usr/share/dict/words")]
    dictionary_path: String,

    /// Enable debug output? RUST_LOG overrides this.
    #[structopt(short = "v", long)]
    verbose: bool,

    /// How many of the best guesses to show each round.
    #[structopt(short = "n", long, default_value = "10")]
    top: usize,

    /// More words to leave out of the dictionary.
    #[structopt(long)]
    exclude: Vec<String>,

    /// Don't print the letter frequency chart.
    #[structopt(long)]
    no_chart: bool,

    /// Give up after this many guesses.
    #[structopt(long, default_value = "6")]
    max_attempts: usize,

    /// Play these rounds instead of reading from the terminal, in order. Each one is a guess and
    /// its response, like "rhino bbyyb", or annotated letters like "!r!h?i?n!o".
    #[structopt(long = "round")]
    rounds: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let words = match dictionary::load(&args.dictionary_path, &args.exclude) {
        Ok(words) => words,
        Err(e) => {
            println!("dictionary file {:?} could not be used: {}", args.dictionary_path, e);
            println!("to use a different file, specify it in command line arguments");
            Args::clap().print_help()?;
            println!();
            std::process::exit(1);
        }
    };

    let mut session = Session::new(words);
    let mut script = args.rounds.iter();
    let scripted = !args.rounds.is_empty();

    loop {
        match session.status() {
            Status::Open(_) => (),
            Status::Solved(word) => {
                println!("the word is {}", word);
                return Ok(());
            }
            Status::Exhausted => {
                println!("no candidates left!");
                return Ok(());
            }
        }
        if session.attempts() >= args.max_attempts {
            println!("out of guesses");
            return Ok(());
        }

        if !args.no_chart {
            println!("letter frequency:");
            print!("{}", bar_chart(&session.letter_counts(), 40));
        }
        let ranked = session.rank();
        println!(
            "{}",
            word_list(
                "best guesses",
                ranked.iter().map(|(word, score)| format!("\n\t{} ({:.3})", word, score)),
                args.top,
            )
        );

        let (guess, response) = if scripted {
            let Some(line) = script.next() else {
                debug!("end of script");
                return Ok(());
            };
            println!("> {}", line);
            parse_round(line)?
        } else {
            match prompt()? {
                Some(round) => round,
                None => return Ok(()),
            }
        };

        session.apply_response(&guess, &response);
        println!("{}", summary(&session));
    }
}

/// Read rounds from stdin until one parses. `None` on an empty line or end of input.
fn prompt() -> io::Result<Option<(Word, Response)>> {
    loop {
        print!("Type your guess and the response (green=g, yellow=y, gray=b), e.g. \"rhino bbyyb\": ");
        io::stdout().flush()?;
        let mut inp = String::new();
        if io::stdin().lock().read_line(&mut inp)? == 0 {
            println!();
            return Ok(None);
        }
        let inp = inp.trim();
        if inp.is_empty() {
            return Ok(None);
        }
        match parse_round(inp) {
            Ok(round) => return Ok(Some(round)),
            Err(e) => println!("Input error: {}", e),
        }
    }
}
