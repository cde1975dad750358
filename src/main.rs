//! Demo harness: read a program from stdin or a file, print the token
//! listing and the parse tree (or the tree as JSON with `--json`).

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use lispish::{parse, tokenize};

const USAGE: &str = "usage: lispish [--json] [FILE]

Reads an S-expression program from FILE (or stdin) and prints its token
listing and parse tree. With --json, prints the parse tree as JSON instead.";

fn main() -> Result<()> {
    let mut json = false;
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if arg.starts_with('-') => bail!("unknown option `{arg}`\n{USAGE}"),
            _ if path.is_some() => bail!("more than one input file\n{USAGE}"),
            _ => path = Some(arg),
        }
    }

    let source = match &path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading `{path}`"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let tokens = tokenize(&source)?;

    if json {
        let tree = parse(tokens)?;
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let rule = "-".repeat(50);
    println!("{rule}");
    println!("Tokens");
    println!("{rule}");
    for token in &tokens {
        println!("{:<21}: {}", token.kind, token.lexeme);
    }

    let tree = parse(tokens)?;

    println!("{rule}");
    println!("Parse Tree");
    println!("{rule}");
    print!("{tree}");

    Ok(())
}
