use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use weatherlookup::{OpenWeatherClient, WeatherLookup, WeatherLookupConfig, logging};

const HELP: &str = "Type a city name to see suggestions.
  /pick N   use suggestion N
  /go       get the weather for the current text
  /quit     exit";

/// One line of user input
#[derive(Debug, PartialEq)]
enum Command {
    Type(String),
    Pick(usize),
    Submit,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/go" => return Command::Submit,
            "/quit" => return Command::Quit,
            _ => {}
        }
        if let Some(n) = trimmed
            .strip_prefix("/pick")
            .and_then(|rest| rest.trim().parse::<usize>().ok())
        {
            return Command::Pick(n);
        }
        Command::Type(line.to_string())
    }
}

// Everything runs on one thread; requests are polled next to stdin.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = WeatherLookupConfig::from_env()?;
    logging::init(&config.logging)?;
    info!("WeatherLookup v{} using {}", weatherlookup::VERSION, config.weather.base_url);

    let client = OpenWeatherClient::new(&config.weather)?;
    let mut lookup = WeatherLookup::new(client);
    let mut pending = FuturesUnordered::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Submit => pending.extend(lookup.submit()),
                    Command::Pick(n) => {
                        let choice = n
                            .checked_sub(1)
                            .and_then(|index| lookup.state().suggestions.get(index).cloned());
                        match choice {
                            Some(suggestion) => lookup.select_suggestion(&suggestion),
                            None => println!("No suggestion #{n}"),
                        }
                    }
                    Command::Type(text) => pending.extend(lookup.set_query(text)),
                }
                print!("{}", lookup.state());
            }
            Some(completion) = pending.next(), if !pending.is_empty() => {
                lookup.complete(completion);
                print!("{}", lookup.state());
            }
        }
    }

    Ok(())
}
