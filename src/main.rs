mod cli;
mod error;
mod runtime;
mod syntax;

use std::{
    io::{self, Write},
    process,
};

use clap::Parser as _;

use runtime::eval::evaluate;
use syntax::Parser;

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Command::Eval { expr }) => {
            let mut parser = Parser::new();

            match parser.parse_source(&expr).and_then(|tree| evaluate(&tree)) {
                Ok(value) => println!("{value}"),
                Err(why) => {
                    eprintln!("{why}");
                    process::exit(1);
                }
            }
        }
        Some(cli::Command::Repl) | None => repl(),
    }
}

fn repl() {
    let mut parser = Parser::new();
    let stdin = io::stdin();
    let mut line = String::new();

    println!("Enter an expression, or `end` to quit.");

    loop {
        print!("> ");
        io::stdout().flush().expect("Failed to flush stdout");

        line.clear();
        let read = stdin.read_line(&mut line).expect("Failed to read input");
        if read == 0 {
            break;
        }

        let input = line.trim();
        if input == "end" {
            break;
        }

        match parser.parse_source(input).and_then(|tree| evaluate(&tree)) {
            Ok(value) => println!("{value}"),
            Err(why) => eprintln!("{why}"),
        }
    }
}
