// SPDX-License-Identifier: MPL-2.0
//! Command-line demo: browses a gallery manifest from the terminal.

use image_browser::browser::view_model::Trigger;
use image_browser::browser::{BrowserOptions, ImageBrowser, Layout, Message};
use image_browser::config::{self, manifest};
use image_browser::i18n::I18n;
use image_browser::infrastructure::terminal::{self, Command, TerminalHost};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: image_browser [--lang <id>] [--config-dir <dir>] <manifest.toml>

Environment:
  IMAGE_BROWSER_CONFIG_DIR  configuration directory
  RUST_LOG                  log filter (default: info)";

struct Flags {
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    manifest: Option<PathBuf>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        std::process::exit(0);
    }
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        manifest: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> std::process::ExitCode {
    init_tracing();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(flags))
}

async fn run(flags: Flags) -> std::process::ExitCode {
    let (config, config_warning) = config::load_with_override(flags.config_dir);
    let i18n = I18n::new(flags.lang, &config);

    let images = match flags.manifest.as_deref().map(manifest::load_from_path) {
        Some(Ok(images)) => images,
        Some(Err(err)) => {
            tracing::error!(%err, "failed to read manifest");
            let reason = err.to_string();
            eprintln!(
                "{}",
                i18n.tr_with_args(
                    "notification-manifest-load-error",
                    &[("reason", reason.as_str())]
                )
            );
            return std::process::ExitCode::FAILURE;
        }
        None => Vec::new(),
    };

    let (host, mut fired) = TerminalHost::new();
    let mut browser = ImageBrowser::mount(images, BrowserOptions::from_config(&config), host);
    if let Some(key) = config_warning {
        println!("{}", i18n.tr(&key));
    }
    print_view(&browser, &i18n);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        browser.tick();
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(err) => {
                        tracing::error!(%err, "failed to read stdin");
                        break;
                    }
                };
                match terminal::parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => println!("{}", terminal::HELP),
                    Ok(Some(Command::Show)) => print_view(&browser, &i18n),
                    Ok(Some(Command::Send(message))) => {
                        browser.update(message);
                        print_view(&browser, &i18n);
                    }
                    Ok(Some(Command::Input(events))) => {
                        for event in events {
                            browser.handle_input(event);
                        }
                        print_view(&browser, &i18n);
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Some(ticket) = fired.recv() => {
                browser.update(Message::SlideshowElapsed(ticket));
                print_view(&browser, &i18n);
            }
        }
    }

    browser.unmount();
    std::process::ExitCode::SUCCESS
}

fn print_view(browser: &ImageBrowser<TerminalHost>, i18n: &I18n) {
    let view = browser.view_state();
    if !view.overlay_open {
        match browser.trigger() {
            Some(Trigger::Button(label)) => {
                println!("[{label}]");
            }
            Some(Trigger::InlineGrid(ids)) => {
                println!("{} thumbnails, type 'open' or 'open <n>'", ids.len());
            }
            None => println!("{}", i18n.tr("notification-empty-gallery")),
        }
    } else {
        let layout_key = match view.layout {
            Layout::Slides => "layout-slides",
            Layout::Grid => "layout-grid",
        };
        println!("-- {} --", i18n.tr(layout_key));
        if let Some(footer) = browser.footer(i18n) {
            println!("{}  {} / {}", footer.position, footer.title, footer.author);
        }
        if let Some(panel) = browser.info_panel(i18n) {
            println!("  {}: {}", i18n.tr("info-description"), panel.description);
            println!("  {}: {}", i18n.tr("info-date"), panel.date);
            println!("  {}: {}", i18n.tr("info-location"), panel.location);
            for (_, label) in &panel.actions {
                print!("  [{label}]");
            }
            if !panel.actions.is_empty() {
                println!();
            }
        }
        if let Some(menu) = browser.slideshow_menu(i18n) {
            println!("  {} ({})", menu.title, menu.interval_label);
            for option in &menu.options {
                let marker = if Some(option.image) == menu.preselected {
                    '>'
                } else {
                    ' '
                };
                println!("  {marker} {}", option.label);
            }
        }
        if let Some(bar) = browser.slideshow_bar(i18n) {
            println!("  {} [{}] [{}]", bar.title, bar.toggle_label, bar.stop_label);
        }
    }

    for notice in browser.notifications().visible() {
        println!("! {}", i18n.tr_notification(notice));
    }
}
