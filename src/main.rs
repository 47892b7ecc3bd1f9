// strix - A small Lisp interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, Write};
use std::process;

use strix_core::{eval, init_prelude, register_builtins, Env, Error};
use strix_parser::{pr_str, read_str, StrixVal, Symbol};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Strix v0.1.0");
        return;
    }

    // Create environment with builtins and the prelude
    let env = Env::new();
    register_builtins(&env);
    if let Err(e) = init_prelude(&env) {
        eprintln!("Failed to load prelude: {}", e);
        process::exit(1);
    }

    // If a file is provided, evaluate it; otherwise start the REPL
    if args.len() > 1 {
        run_file(&args[1], &args[2..], &env);
    } else {
        run_repl(&env);
    }
}

/// Evaluate a source file, with the remaining arguments bound to *ARGV*
fn run_file(file_path: &str, argv: &[String], env: &Env) {
    let argv_list: Vec<StrixVal> = argv.iter().map(|a| StrixVal::string(a.as_str())).collect();
    env.define(Symbol::new("*ARGV*"), StrixVal::list(argv_list));

    let form = StrixVal::list(vec![
        StrixVal::symbol(Symbol::new("load-file")),
        StrixVal::string(file_path),
    ]);
    if let Err(e) = eval(&form, env) {
        eprintln!("Error in '{}': {}", file_path, e);
        process::exit(1);
    }
}

/// Run the interactive REPL
fn run_repl(env: &Env) {
    println!("Strix v0.1.0");

    loop {
        print!("user> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => match read_str(&input) {
                Ok(form) => match eval(&form, env) {
                    Ok(result) => println!("{}", pr_str(&result, true)),
                    Err(e) => eprintln!("Error: {}", e),
                },
                // Blank input is skipped silently
                Err(read_err) => match Error::from(read_err) {
                    Error::Blank => continue,
                    other => eprintln!("Error: {}", other),
                },
            },
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
