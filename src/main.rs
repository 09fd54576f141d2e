//! tasklist - Interactive Shell Entry Point
//!
//! A thin line-oriented front end over the task operations. It owns the
//! composition root: configuration, the store, and the task list. Mutations
//! reference tasks by their 1-based rank in the last printed view.

use std::io::{self, BufRead, Write};

use tasklist::{ops::OpError, Config, TaskList, TaskStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  add <description> [| <priority> [| <due YYYY-MM-DD>]]
  done <rank>         mark the task at <rank> completed
  rm <rank>           remove the task at <rank>
  pri <rank> <num>    change the task's priority
  due <rank> [date]   change the task's due date (empty clears it)
  list                reprint the task list
  help                show this help
  quit                exit";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Using task file {}", config.tasks_file.display());

    let store = TaskStore::new(config.tasks_file);
    let mut list = TaskList::open(store)?;

    println!("To-Do List Manager (type 'help' for commands)");
    print_view(&list);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "add" => {
                let (description, priority, due) = split_add_args(rest);
                list.add(description, priority, due)
            }
            "done" => list.complete(parse_rank(rest)),
            "rm" => list.remove(parse_rank(rest)),
            "pri" => {
                let (rank, text) = split_rank_arg(rest);
                list.modify_priority(rank, text)
            }
            "due" => {
                let (rank, text) = split_rank_arg(rest);
                list.modify_due_date(rank, text)
            }
            "list" => {
                print_view(&list);
                continue;
            }
            "help" => {
                println!("{HELP}");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command '{other}' (type 'help' for commands)");
                continue;
            }
        };

        match result {
            Ok(()) => print_view(&list),
            // Persistence failures are fatal; everything else blocks only
            // the offending operation.
            Err(OpError::Store(err)) => return Err(err.into()),
            Err(err) => println!("Warning: {err}"),
        }
    }

    Ok(())
}

fn print_view(list: &TaskList) {
    let view = list.view();
    if view.is_empty() {
        println!("(no tasks)");
        return;
    }
    for row in tasklist::render::lines(&view) {
        println!("{row}");
    }
}

/// Split `add` arguments on `|`: description, then optional priority and
/// due-date text. The file format reserves commas, so the shell uses pipes.
fn split_add_args(rest: &str) -> (&str, &str, &str) {
    let mut parts = rest.splitn(3, '|');
    let description = parts.next().unwrap_or("").trim();
    let priority = parts.next().unwrap_or("").trim();
    let due = parts.next().unwrap_or("").trim();
    (description, priority, due)
}

/// Parse a 1-based display rank into a zero-based selection. Missing or
/// unparsable text maps to no selection.
fn parse_rank(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Split a `<rank> [text]` argument pair.
fn split_rank_arg(rest: &str) -> (Option<usize>, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((rank, text)) => (parse_rank(rank), text.trim()),
        None => (parse_rank(rest), ""),
    }
}
