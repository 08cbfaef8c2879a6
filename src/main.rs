//! Decodes one RESP message piped on stdin and prints the value tree.

use std::io::{self, IsTerminal, Read};
use std::process;

use resp_decode::Value;

fn main() {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("resp-decode expects RESP bytes piped on stdin");
        process::exit(1);
    }

    let mut buf = Vec::new();
    if let Err(err) = stdin.lock().read_to_end(&mut buf) {
        eprintln!("failed to read stdin: {}", err);
        process::exit(1);
    }
    if buf.is_empty() {
        eprintln!("empty input");
        process::exit(1);
    }

    match Value::parse(&buf) {
        Ok((_, value)) => print_value(&value, 0),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn print_value(value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}type: {}", indent, value.prefix() as char);
    match value {
        Value::SimpleString(val) | Value::Error(val) | Value::Integer(val) => {
            println!("{}{}", indent, String::from_utf8_lossy(val));
        }
        Value::BulkString(Some(val)) => {
            println!("{}{}", indent, String::from_utf8_lossy(val));
        }
        Value::BulkString(None) | Value::Array(None) => {
            println!("{}(nil)", indent);
        }
        Value::Array(Some(items)) => {
            for item in items {
                print_value(item, depth + 1);
            }
        }
    }
}
