use anyhow::{bail, Context as _, Result};
use numbers::{optimise, parse, solve};
use rustyline::{error::ReadlineError, Editor};

fn solve_command(input: &str) -> Result<()> {
    let mut args = input.split_whitespace().map(|arg| {
        arg.parse::<i64>()
            .with_context(|| format!("Failed to parse `{arg}` as a number"))
    });
    let target = args.next().context("Usage: solve TARGET NUMBER...")??;
    let numbers = args.collect::<Result<Vec<_>>>()?;
    match solve::solve(target, &numbers) {
        Some(solution) => {
            let term = optimise::coalesce(&optimise::transform(&solution.expr)?);
            println!("{} = {}", term, solution.value);
        }
        None => println!("No numbers, no solution"),
    }
    Ok(())
}

fn exec(input: String) -> Result<()> {
    if let Some(input) = input.strip_prefix("parse") {
        let expr = parse(input)?;
        println!("{expr:?}");
    } else if let Some(input) = input.strip_prefix("transform") {
        let expr = parse(input)?;
        let term = optimise::transform(&expr)?;
        println!("{term}");
    } else if let Some(input) = input.strip_prefix("coalesce") {
        let expr = parse(input)?;
        let term = optimise::coalesce(&optimise::transform(&expr)?);
        println!("{term}");
    } else if let Some(input) = input.strip_prefix("eval") {
        let expr = parse(input)?;
        println!("{}", optimise::evaluate(&expr)?);
    } else if let Some(input) = input.strip_prefix("solve") {
        solve_command(input)?;
    } else {
        let expr = parse(&input)?;
        let term = optimise::coalesce(&optimise::transform(&expr)?);
        println!("{} = {}", term, optimise::value_of(&term));
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut editor = Editor::<()>::new();
    editor.load_history("history.txt").ok();
    let mut input: Option<String> = None;
    loop {
        match editor.readline(">> ") {
            Ok(mut line) if line.ends_with('\\') => {
                line.pop();
                line.push('\n');
                if let Some(input) = input.as_mut() {
                    input.push_str(line.as_str());
                } else {
                    input = Some(line);
                }
            }
            Ok(line) => {
                let input = if let Some(mut input) = input.take() {
                    input.push_str(line.as_str());
                    input
                } else {
                    line
                };
                if input.is_empty() {
                    continue;
                }
                editor.add_history_entry(input.as_str());
                if let Err(e) = exec(input) {
                    eprintln!("Error: {e:?}")
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Bye!");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                bail!(e);
            }
        }
    }
    Ok(())
}
