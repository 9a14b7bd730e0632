//! # CLI - Properties Shell
//!
//! A REPL for inspecting and editing a single `.properties` file. Reads
//! commands from stdin and prints results to stdout, so it works both
//! interactively and with piped scripts. Logs go to stderr.
//!
//! ## Commands
//!
//! ```text
//! GET key            Print a value (or "(nil)")
//! SET key value      Insert or update (value is the rest of the line)
//! DEL key            Remove a key
//! LIST               Print all entries in key order
//! VALIDATE           Check the file on disk ("valid" / "invalid")
//! SAVE               Write the map back to the file
//! RELOAD             Discard edits and re-read the file
//! EXIT / QUIT        Leave the shell
//! ```
//!
//! ## Configuration
//!
//! See the `config` crate: `PROPS_PATH`, `PROPS_LOG_LEVEL`, `PROPS_CREATE`
//! and `PROPS_CONFIG`. A first command-line argument overrides `PROPS_PATH`.
//!
//! ## Example
//!
//! ```text
//! $ PROPS_PATH=app.properties cargo run -p cli
//! props shell (file=app.properties, entries=0)
//! > SET name Alice
//! OK
//! > LIST
//! name = Alice
//! (1 entries)
//! > SAVE
//! OK
//! > EXIT
//! bye
//! ```

mod session;

use anyhow::Result;
use config::ShellConfig;
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(match level {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::WARN,
        })
        .init();
}

fn main() -> Result<()> {
    let mut cfg = ShellConfig::from_env()?;
    if let Some(arg) = std::env::args().nth(1) {
        cfg.path = PathBuf::from(arg);
    }
    init_logging(&cfg.log_level);

    let (mut session, decode_err) = Session::open(&cfg.path, cfg.create)?;
    if let Some(e) = decode_err {
        println!("WARN {}", e);
    }

    println!(
        "props shell (file={}, entries={})",
        session.path().display(),
        session.len()
    );
    println!("Commands: GET key | SET key value | DEL key | LIST");
    println!("          VALIDATE | SAVE | RELOAD | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(cmd) = parts.next() {
            match cmd.to_uppercase().as_str() {
                "GET" => match parts.next() {
                    Some(k) => match session.get(k) {
                        Some(v) => println!("{}", v),
                        None => println!("(nil)"),
                    },
                    None => println!("ERR usage: GET key"),
                },
                "SET" => {
                    if let Some(k) = parts.next() {
                        let v: String = parts.collect::<Vec<&str>>().join(" ");
                        if v.is_empty() {
                            println!("ERR usage: SET key value");
                        } else {
                            match session.set(k, &v) {
                                Ok(()) => println!("OK"),
                                Err(e) => println!("ERR set failed: {}", e),
                            }
                        }
                    } else {
                        println!("ERR usage: SET key value");
                    }
                }
                "DEL" => match parts.next() {
                    Some(k) => {
                        if session.del(k) {
                            println!("OK");
                        } else {
                            println!("(nil)");
                        }
                    }
                    None => println!("ERR usage: DEL key"),
                },
                "LIST" => {
                    if session.is_empty() {
                        println!("(empty)");
                    } else {
                        let entries = session.entries();
                        for (k, v) in &entries {
                            println!("{} = {}", k, v);
                        }
                        println!("({} entries)", entries.len());
                    }
                }
                "VALIDATE" => {
                    if session.validate_on_disk() {
                        println!("valid");
                    } else {
                        println!("invalid");
                    }
                }
                "SAVE" => match session.save() {
                    Ok(()) => println!("OK"),
                    Err(e) => println!("ERR {:#}", e),
                },
                "RELOAD" => match session.reload() {
                    Ok(None) => println!("OK ({} entries)", session.len()),
                    Ok(Some(e)) => println!("WARN {} ({} entries)", e, session.len()),
                    Err(e) => println!("ERR {:#}", e),
                },
                "EXIT" | "QUIT" => {
                    if session.is_dirty() {
                        println!("unsaved changes discarded");
                    }
                    println!("bye");
                    break;
                }
                other => {
                    println!("unknown command: {}", other);
                }
            }
        }

        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
