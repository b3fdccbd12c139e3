//! dotsong CLI — play a dot sketch as an eight-second phrase.
//!
//! Usage:
//!   dotsong path/to/sketch.dots
//!   dotsong --demo
//!
//! A .dots file is the thin input-adapter format: one dot per line as
//! `x y color size`, `#` starts a comment. Colors: red orange yellow
//! green blue purple.

use ds_master::{BrushRange, CanvasSize, Color, Controller};
use std::{env, fs, thread, time::Duration};

const CANVAS: CanvasSize = CanvasSize::new(600.0, 400.0);
const BRUSH: BrushRange = BrushRange::new(2.0, 20.0);

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let arg = args.get(1).unwrap_or_else(|| {
        eprintln!("Usage: dotsong <sketch.dots> | --demo");
        std::process::exit(1);
    });

    let mut ctrl = Controller::new(CANVAS, BRUSH);

    if arg == "--demo" {
        demo_sketch(&mut ctrl);
        println!("Demo sketch: {} dots", ctrl.sketch().len());
    } else {
        load_dots(&mut ctrl, arg);
        println!("{}: {} dots", arg, ctrl.sketch().len());
    }

    if let Err(e) = ctrl.play() {
        eprintln!("Playback failed: {}", e);
        std::process::exit(1);
    }
    println!("Playing...");

    // Give the render thread a moment to pick up the batch before polling
    thread::sleep(Duration::from_millis(200));
    while ctrl.is_playing() {
        thread::sleep(Duration::from_millis(50));
    }

    println!("Done.");
}

fn init_logging() {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    let level = if env::var_os("DOTSONG_DEBUG").is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn load_dots(ctrl: &mut Controller, path: &str) {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });

    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        match parse_dot(line) {
            Some((x, y, color, size)) => ctrl.add_point(x, y, color, size),
            None => {
                eprintln!(
                    "{}:{}: expected `x y color size`, got {:?}",
                    path,
                    line_no + 1,
                    line
                );
                std::process::exit(1);
            }
        }
    }
}

fn parse_dot(line: &str) -> Option<(f32, f32, Color, f32)> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let color = Color::from_name(fields.next()?)?;
    let size = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((x, y, color, size))
}

/// A little arc across the canvas, cycling through the palette.
fn demo_sketch(ctrl: &mut Controller) {
    let colors = [Color::Red, Color::Orange, Color::Green, Color::Blue];
    for i in 0..16 {
        let t = i as f32 / 15.0;
        let x = 20.0 + t * 560.0;
        let y = 200.0 - 150.0 * (t * std::f32::consts::PI).sin();
        let size = 4.0 + 12.0 * t;
        ctrl.add_point(x, y, colors[i % colors.len()], size);
    }
}
