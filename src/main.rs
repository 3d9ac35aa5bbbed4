mod api_client;
mod controller;
mod errors;
mod models;
mod overlay;
mod pagination;
mod view;

use std::io::{self, BufRead, Write};

use log::debug;
use reqwest::Client;

use crate::controller::{reduce, Event, PageState};
use crate::overlay::DismissReason;
use crate::pagination::PageMarker;

/// What one line of input turns into.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Dispatch(Event),
    Quit,
    Noop,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Create a new HTTP client with the User-Agent header GitHub requires.
    // No request timeout, matching the viewer this replaces; an unresponsive
    // call leaves the app in Loading.
    let client = Client::builder()
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::USER_AGENT,
                "org-repo-browser/1.0".parse()?,
            );
            headers
        })
        .build()?;

    println!(
        "Repositories of {} — commands: next, prev, goto <page>, open <card>, \
         close, esc, retry, quit",
        api_client::ORG
    );

    let mut state = reduce(PageState::new(), Event::Mounted);
    // Generation of the last fetch this loop has run; anything newer in a
    // Loading state still needs one.
    let mut serviced_generation = 0;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while state.is_loading() && state.generation != serviced_generation {
            let generation = state.generation;
            serviced_generation = generation;
            println!("{}", view::render_listing(&state));
            let result = api_client::fetch_page(&client, state.current_page).await;
            state = reduce(state, Event::FetchCompleted { generation, result });
        }

        render(&state);

        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_command(&line, &state) {
            Command::Dispatch(event) => {
                debug!("Dispatching {:?}", event);
                state = reduce(state, event);
            }
            Command::Quit => break,
            Command::Noop => {}
        }
    }

    Ok(())
}

fn render(state: &PageState) {
    println!();
    println!("{}", view::render_listing(state));

    if state.show_pagination() {
        println!();
        println!("{}", view::render_pagination_bar(state));
    }

    if let Some(info) = state.error.content() {
        println!();
        println!("{}", view::render_error(info));
    }

    if let Some(repo) = state.detail.content() {
        println!();
        println!("{}", view::render_detail(repo));
    }
}

/// Map one input line to a command. Dismissal is routed to whichever overlay
/// is open, error surface first since it renders on top.
fn parse_command(input: &str, state: &PageState) -> Command {
    let mut words = input.split_whitespace();
    let verb = words.next().unwrap_or("");
    let argument = words.next();

    match verb {
        "n" | "next" => Command::Dispatch(Event::NextPage),
        "p" | "prev" => Command::Dispatch(Event::PrevPage),
        "g" | "goto" => match argument.and_then(|raw| raw.parse().ok()) {
            Some(page) => Command::Dispatch(Event::PageSelected(PageMarker::Number(page))),
            None => Command::Noop,
        },
        "o" | "open" => match argument.and_then(|raw| raw.parse().ok()) {
            Some(index) => Command::Dispatch(Event::RepoSelected(index)),
            None => Command::Noop,
        },
        "close" | "esc" | "" => {
            let reason = match verb {
                "close" => DismissReason::CloseButton,
                "esc" => DismissReason::EscapeKey,
                _ => DismissReason::Backdrop,
            };

            if state.error.is_open() {
                Command::Dispatch(Event::ErrorDismissed(reason))
            } else if state.detail.is_open() {
                Command::Dispatch(Event::DetailDismissed(reason))
            } else {
                Command::Noop
            }
        }
        "r" | "retry" => {
            if state.error.is_open() {
                Command::Dispatch(Event::RetryRequested)
            } else {
                Command::Noop
            }
        }
        "q" | "quit" => Command::Quit,
        _ => Command::Noop,
    }
}
