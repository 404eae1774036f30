use dictionary::{Dictionary, WordInfo};
use session::{GameError, GuessOutcome, Session, Solution};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utilities::{input, parse_command, Command};

mod config;
mod session;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guess_the_word=warn,dictionary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::load_config();
    let dict = Dictionary::new(config.dictionary_config())?;
    let mut session = Session::new(&dict, &dict);

    println!("Guess the hidden word!");
    print_help();
    while let Some(line) = input(">> ")? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Nothing => {}
            Command::Help => print_help(),
            Command::NewRound => {
                println!("Loading a new word...");
                match session.start_new_round().await {
                    Ok(info) => {
                        print_clue(info);
                        if let Some(word) = session.current_word() {
                            println!("The word has {} letters.", word.chars().count());
                        }
                    }
                    Err(error) => println!("[Error] {error}"),
                }
            }
            Command::Hint => println!("{}", session.reveal_hint()),
            Command::Clue => match session.info() {
                Some(info) => {
                    print_clue(info);
                    println!("Letters revealed: {}", session.hint_index());
                }
                None => println!("Load a word first!"),
            },
            Command::Guess(raw) => match session.check_guess(raw) {
                Ok(GuessOutcome::Correct(solution)) => print_solution(&solution),
                Ok(GuessOutcome::Incorrect) => println!("Incorrect! Try again!"),
                Err(error @ GameError::EmptyGuess) => println!("[Input Error] {error}"),
                Err(error) => println!("[Error] {error}"),
            },
            Command::Unknown(command) => {
                println!("Unknown command {command}. Type 'help' for the list of commands.");
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("    new            load a new random word");
    println!("    hint           reveal the next letter");
    println!("    clue           show the clues again");
    println!("    guess <word>   submit a guess");
    println!("    quit           leave the game");
}

fn print_clue(info: &WordInfo) {
    println!("Definition:");
    println!("    {}", info.definition);
    println!("Synonym clue: {}", info.first_synonym().unwrap_or("None"));
    println!("Antonym clue: {}", info.first_antonym().unwrap_or("None"));
    println!("Type 'hint' to reveal letters.");
}

fn print_solution(solution: &Solution) {
    println!("Correct! The word was: {}", solution.word);
    println!("Definition: {}", solution.definition);
    println!("Synonyms: {}", solution.synonyms);
    println!("Antonyms: {}", solution.antonyms);
}
