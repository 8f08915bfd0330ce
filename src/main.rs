//! Command-line front end: run one Code Buddy action over a local file or
//! stdin, printing the overlay markup. The `logic` action drives the quiz
//! interactively.

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use code_buddy::{
    build_prompt, extract_code, llm, overlay, quiz::QuizEffect, quiz::QuizEvent, render_failure,
    run_action, Action, ActionOutcome, BuddyError, Config, ExtractedCode, ManualEntry,
    QuizSession,
};
use tracing::debug;

struct StdinEntry;

impl ManualEntry for StdinEntry {
    fn request_code(&mut self) -> Option<String> {
        eprintln!("No editor widget found. Paste your code, then press Ctrl-D:");
        let mut code = String::new();
        io::stdin().read_to_string(&mut code).ok()?;
        if code.trim().is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let action = match args.first().map(String::as_str).and_then(Action::parse) {
        Some(action) => action,
        None => {
            eprintln!("usage: code-buddy <errors|logic|optimize|rate> [file]");
            return ExitCode::FAILURE;
        }
    };

    let code = match read_input(args.get(1).map(String::as_str)) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("failed to read input: {error}");
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!("Detected language: {} ({} lines)", code.language, code.line_count());

    match run_action(&config, action, &code).await {
        Ok(ActionOutcome::Markup(html)) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Ok(ActionOutcome::Quiz(session)) => run_quiz(&config, &code, session).await,
        Err(error) => {
            println!("{}", render_failure(&error));
            ExitCode::FAILURE
        }
    }
}

/// HTML files go through the selector heuristics; anything else is treated
/// as raw code. No path means stdin acts as manual entry.
fn read_input(path: Option<&str>) -> io::Result<ExtractedCode> {
    match path {
        Some(path) if path.ends_with(".html") || path.ends_with(".htm") => {
            let html = std::fs::read_to_string(path)?;
            Ok(extract_code(&html, &mut StdinEntry))
        }
        Some(path) => Ok(ExtractedCode::from_text(std::fs::read_to_string(path)?)),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(ExtractedCode::from_text(code))
        }
    }
}

/// Drive the quiz session over stdin, one question at a time.
async fn run_quiz(config: &Config, code: &ExtractedCode, mut session: QuizSession) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.current_question().cloned() {
            Some(question) => {
                let number = session.current_index().map(|i| i + 1).unwrap_or_default();
                println!("\nQuestion {number} of {}", session.questions().len());
                println!("{}", question.question);
                for option in &question.options {
                    println!("  {option}");
                }

                let selected = match prompt_line(&mut lines, "Your answer [A-D]: ") {
                    Some(answer) => answer.trim().to_uppercase(),
                    None => return ExitCode::SUCCESS,
                };
                session.apply(QuizEvent::Select(selected));
                if session.apply(QuizEvent::Submit) != QuizEffect::RenderFeedback {
                    continue;
                }

                if let Some(answer) = session.last_answer() {
                    if answer.is_correct {
                        println!("✅ Correct! {}", question.explanation);
                    } else {
                        println!(
                            "❌ Not quite. The correct answer is {}. {}",
                            answer.correct, question.explanation
                        );
                    }
                }
                session.apply(QuizEvent::Next);
            }
            None => {
                let summary = session.summary();
                println!("\n🎯 Quiz Complete! {}/{}", summary.correct, summary.total);
                println!("{}", summary.tier.message());

                let again = prompt_line(&mut lines, "Five more questions? [y/N]: ")
                    .map(|line| line.trim().eq_ignore_ascii_case("y"))
                    .unwrap_or(false);

                if !again {
                    session.apply(QuizEvent::EndSession);
                    return ExitCode::SUCCESS;
                }

                debug!("regenerating quiz questions");
                session.apply(QuizEvent::Regenerate);
                let prompt = build_prompt(Action::Logic, code.language, &code.text);
                match regenerate(config, &prompt).await {
                    Ok(next) => session = next,
                    Err(error) => {
                        println!("{}", overlay::error_block(&error.to_string()));
                        return ExitCode::FAILURE;
                    }
                }
            }
        }
    }
}

async fn regenerate(
    config: &Config,
    prompt: &code_buddy::PromptPair,
) -> Result<QuizSession, BuddyError> {
    let reply = llm::generate(config, prompt).await?;
    Ok(QuizSession::from_reply(&reply)?)
}

fn prompt_line(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
    prompt: &str,
) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}
