use crate::{Options, parse, parse_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE  Write output to FILE (default stdout)\n\
               --pretty       Pretty-print output\n\
               --dup-keys     Keep duplicate object keys as value/next chains\n\
               --no-fallback  Disable the strict-parser fallback on failure\n\
               --log          Print grammar recoveries to stderr\n\
           -h, --help         Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "jl".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut pretty = false;
    let mut show_log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--pretty" => {
                pretty = true;
            }
            "--dup-keys" => {
                opts.preserve_duplicate_keys = true;
            }
            "--no-fallback" => {
                opts.fallback_to_strict = false;
            }
            "--log" => {
                show_log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        pretty,
        show_log,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    pretty: bool,
    show_log: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let value = if mode.show_log {
        let (value, entries) = parse_with_log(&content, &opts)?;
        for entry in entries {
            eprintln!("{}:{}: {}", entry.row, entry.col, entry.message);
        }
        value
    } else {
        parse(&content, &opts)?
    };

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let rendered = if mode.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    out_writer.write_all(rendered.as_bytes())?;
    out_writer.write_all(b"\n")?;
    out_writer.flush()?;
    Ok(())
}
