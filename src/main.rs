//! glyphbanner - render text as glyph-table banners
//!
//! Loads the config, parses arguments and hands the text to the engine.
//! Banner text goes to stdout (or the output file); logs go to stderr.

use anyhow::{anyhow, bail, Context, Result};
use glyphbanner::config::Config;
use glyphbanner::render::OUTPUT_FLAG;
use glyphbanner::utils::{colorize, parse_color};
use glyphbanner::{Engine, RenderedOutput};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    version: bool,
    init_config: bool,
    force: bool,
    list: bool,
    truncate: bool,
    banner: Option<String>,
    output: Option<String>,
    color: Option<String>,
    text: Vec<String>,
}

/// Value of `--name=value`, `--name value` or `-n value` at `args[*i]`.
/// Advances `i` past a separate value.
fn option_value(args: &[String], i: &mut usize, long: &str, short: &str) -> Result<Option<String>> {
    let arg = &args[*i];
    if let Some(value) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) {
        return Ok(Some(value.to_string()));
    }
    if arg == long || arg == short {
        *i += 1;
        return args
            .get(*i)
            .cloned()
            .map(Some)
            .ok_or_else(|| anyhow!("{} requires a value", long));
    }
    Ok(None)
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "--init-config" => cli.init_config = true,
            "-f" | "--force" => cli.force = true,
            "--list" => cli.list = true,
            "--truncate" => cli.truncate = true,
            // everything after -- is text
            "--" => {
                cli.text.extend(args[i + 1..].iter().cloned());
                break;
            }
            _ => {
                if let Some(v) = option_value(args, &mut i, "--banner", "-b")? {
                    cli.banner = Some(v);
                } else if let Some(v) = option_value(args, &mut i, "--output", "-o")? {
                    cli.output = Some(v);
                } else if let Some(v) = option_value(args, &mut i, "--color", "-c")? {
                    cli.color = Some(v);
                } else if arg.starts_with('-') && arg.len() > 1 {
                    bail!("Unknown option: {} (see --help)", arg);
                } else {
                    cli.text.push(arg.to_string());
                }
            }
        }
        i += 1;
    }
    Ok(cli)
}

/// Print help message
fn print_help() {
    println!(
        r#"glyphbanner {} - render text as glyph-table banners

USAGE:
    glyphbanner [OPTIONS] <TEXT>...

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -b, --banner NAME       Banner font to use (default from config: standard)
    -o, --output NAME       Append rows to NAME under the output directory
    --truncate              Empty the output file before rendering
    -c, --color COLOR       Colorize terminal output (RRGGBB, RGB or a name)
    --list                  List available banners
    --init-config           Generate default config file
    -f, --force             Overwrite config file

LINE BREAKS:
    A literal \n (backslash + n) or a real newline starts a new line.

EXAMPLES:
    glyphbanner "Hello"
    glyphbanner -b shadow 'Hello\nThere'
    glyphbanner -o hello.txt --truncate Hello

CONFIG FILE:
    ~/.config/glyphbanner/config.toml  (override with GLYPHBANNER_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    // --help
    if cli.help {
        print_help();
        return Ok(());
    }

    // --version
    if cli.version {
        println!("glyphbanner {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // --init-config
    if cli.init_config {
        let path = Config::write_default_config(cli.force)?;
        println!("Config file generated:");
        println!("  Path: {}", path.display());
        return Ok(());
    }

    let cfg = Config::load();
    let engine = Engine::new(cfg.paths.clone());

    // --list
    if cli.list {
        for banner in engine.available_banners()? {
            println!("{}", banner);
        }
        return Ok(());
    }

    if cli.text.is_empty() {
        print_help();
        bail!("No text given");
    }
    let text = cli.text.join(" ");
    let banner = cli.banner.as_deref().unwrap_or(&cfg.render.banner);

    let color = match cli.color.as_deref() {
        Some(spec) => Some(parse_color(spec).with_context(|| format!("Invalid color: {}", spec))?),
        None => None,
    };

    let mut flags = HashMap::new();
    if let Some(output) = &cli.output {
        flags.insert(OUTPUT_FLAG.to_string(), output.clone());
        if cli.truncate {
            engine.truncate_output(output)?;
        }
        if color.is_some() {
            warn!("--color is ignored when writing to a file");
        }
    } else if cli.truncate {
        warn!("--truncate has no effect without --output");
    }
    if let Some(spec) = &cli.color {
        flags.insert("color".to_string(), spec.clone());
    }

    debug!("Flags: {:?}", flags);
    match engine.render(&text, banner, &flags)? {
        RenderedOutput::Text(art) => match color {
            Some(rgb) => println!("{}", colorize(&art, rgb)),
            None => println!("{}", art),
        },
        RenderedOutput::Written { path, rows } => {
            info!("Wrote {} lines to {}", rows, path.display());
            eprintln!("Wrote {} lines to {}", rows, path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let cli = parse_args(&args(&["-b", "shadow", "--output=out.txt", "Hello", "World"])).unwrap();
        assert_eq!(cli.banner.as_deref(), Some("shadow"));
        assert_eq!(cli.output.as_deref(), Some("out.txt"));
        assert_eq!(cli.text, vec!["Hello", "World"]);
    }

    #[test]
    fn test_parse_double_dash() {
        let cli = parse_args(&args(&["--truncate", "--", "-b", "x"])).unwrap();
        assert!(cli.truncate);
        assert_eq!(cli.banner, None);
        assert_eq!(cli.text, vec!["-b", "x"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--banner"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_lone_dash_is_text() {
        let cli = parse_args(&args(&["-"])).unwrap();
        assert_eq!(cli.text, vec!["-"]);
    }
}
