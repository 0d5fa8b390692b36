// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gemstr CLI entrypoint.
//!
//! Loads events from a JSON-lines file into an in-memory store and prints one gemtext
//! page to stdout. `--expand` reads free text from stdin instead.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read};

use gemstr::config::{non_negative, RenderConfig};
use gemstr::format::{parse_event_id, parse_pubkey};
use gemstr::render::DocumentRenderer;
use gemstr::store::{LookupContext, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--events <file.jsonl>] [--relays <file.json>] [--config <file.json>] [--width <n>] --note <id>\n  {program} [...] --profile <pubkey>\n  {program} [...] --thread <id>\n  {program} [...] --expand < text\n\n--events loads one JSON event per line.\n--relays maps hex pubkeys to read relay URLs ({{\"<pubkey>\": [\"wss://...\"]}}).\n--width overrides the configured line width (0 or less disables wrapping).\n\nIds accept hex, note/nevent and nostr: forms; pubkeys accept hex, npub and nprofile.\nSet RUST_LOG (e.g. RUST_LOG=gemstr=debug) for diagnostics on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Note(String),
    Profile(String),
    Thread(String),
    Expand,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    events: Option<String>,
    relays: Option<String>,
    config: Option<String>,
    width: Option<usize>,
    page: Option<Page>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(value.ok_or(())?);
        Ok(())
    }

    while let Some(arg) = args.next() {
        let page = match arg.as_str() {
            "--events" => {
                set_once(&mut options.events, args.next())?;
                continue;
            }
            "--relays" => {
                set_once(&mut options.relays, args.next())?;
                continue;
            }
            "--config" => {
                set_once(&mut options.config, args.next())?;
                continue;
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.width = Some(non_negative(raw.parse().map_err(|_| ())?));
                continue;
            }
            "--note" => Page::Note(args.next().ok_or(())?),
            "--profile" => Page::Profile(args.next().ok_or(())?),
            "--thread" => Page::Thread(args.next().ok_or(())?),
            "--expand" => Page::Expand,
            _ => return Err(()),
        };
        if options.page.is_some() {
            return Err(());
        }
        options.page = Some(page);
    }

    if options.page.is_none() {
        return Err(());
    }
    Ok(options)
}

fn load_store(options: &CliOptions) -> Result<MemoryStore, Box<dyn Error>> {
    let mut store = match &options.events {
        Some(path) => MemoryStore::from_jsonl(BufReader::new(File::open(path)?))?,
        None => MemoryStore::new(),
    };
    if let Some(path) = &options.relays {
        let relays: HashMap<String, Vec<String>> =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;
        for (pubkey, urls) in relays {
            store.set_read_relays(pubkey, urls);
        }
    }
    Ok(store)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gemstr".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut config = match &options.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };
        if let Some(width) = options.width {
            config.line_width = width;
        }
        let store = load_store(&options)?;
        let ctx = LookupContext::background();
        let renderer = DocumentRenderer::new(&ctx, &store, &config);

        let page = match options.page {
            Some(Page::Note(raw)) => {
                let id = parse_event_id(&raw).ok_or_else(|| format!("not an event id: {raw}"))?;
                renderer.note_page(id.as_str())
            }
            Some(Page::Profile(raw)) => {
                let pubkey = parse_pubkey(&raw).ok_or_else(|| format!("not a pubkey: {raw}"))?;
                renderer.profile_page(pubkey.as_str())
            }
            Some(Page::Thread(raw)) => {
                let id = parse_event_id(&raw).ok_or_else(|| format!("not an event id: {raw}"))?;
                renderer.thread_page(id.as_str())
            }
            Some(Page::Expand) | None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                renderer.expand_page(&text)
            }
        };
        println!("{page}");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("gemstr: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions, Page};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_note_page_with_sources() {
        let options = parse_options(args(&[
            "--events", "events.jsonl", "--relays", "relays.json", "--width", "72", "--note", "abc",
        ]))
        .expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                events: Some("events.jsonl".to_owned()),
                relays: Some("relays.json".to_owned()),
                config: None,
                width: Some(72),
                page: Some(Page::Note("abc".to_owned())),
            }
        );
    }

    #[test]
    fn parses_expand_without_sources() {
        let options = parse_options(args(&["--expand"])).expect("parse options");
        assert_eq!(options.page, Some(Page::Expand));
        assert!(options.events.is_none());
    }

    #[test]
    fn requires_exactly_one_page() {
        parse_options(args(&[])).unwrap_err();
        parse_options(args(&["--events", "x"])).unwrap_err();
        parse_options(args(&["--note", "a", "--thread", "b"])).unwrap_err();
    }

    #[test]
    fn negative_width_disables_wrapping() {
        let options = parse_options(args(&["--width", "-1", "--expand"])).expect("parse options");
        assert_eq!(options.width, Some(0));
    }

    #[test]
    fn rejects_bad_values_and_duplicates() {
        parse_options(args(&["--width", "wide", "--expand"])).unwrap_err();
        parse_options(args(&["--note"])).unwrap_err();
        parse_options(args(&["--events", "a", "--events", "b", "--expand"])).unwrap_err();
        parse_options(args(&["--nope", "--expand"])).unwrap_err();
        parse_options(args(&["positional"])).unwrap_err();
    }
}
