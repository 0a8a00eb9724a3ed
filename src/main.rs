#[macro_use]
extern crate log;

use leddisplay::{Display, PixelColor, SessionConfig};
use std::error::Error;
use std::sync::mpsc::channel;

static DEMO_PERIODS_MS: [i32; 4] = [2000, 1000, 500, 250];

fn init_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}:{} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        // the terminal panel owns stdout, keep the console quiet
        .chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .chain(fern::log_file("leddisplay.log")?)
        .apply()?;
    Ok(())
}

fn draw_demo(display: &Display) -> leddisplay::Result<()> {
    let (width, height) = (display.config().width, display.config().height);

    display.led_on(0, 0, PixelColor::new(100, 0, 0))?;

    for (i, &period) in DEMO_PERIODS_MS.iter().enumerate() {
        let y = 2 + 2 * i;
        for x in 2..width - 2 {
            let shade = (255 * x / width) as u8;
            display.led_on(x, y, PixelColor::new(shade, 255 - shade, 64))?;
            display.led_add_blinking_period(x, y, period)?;
        }
    }

    // two independent rates on one LED
    let (cx, cy) = (width / 2, height - 4);
    display.led_on(cx, cy, PixelColor::new(200, 0, 200))?;
    display.led_add_blinking_period(cx, cy, 1000)?;
    display.led_add_blinking_period(cx, cy, 300)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger()?;

    let (sigint_tx, sigint_rx) = channel();
    ctrlc::set_handler(move || {
        warn!("Signal received, exiting");
        let _ = sigint_tx.send(());
    })?;

    let config = SessionConfig::default()
        .with_debug_output(true)
        .with_graphical_output(true);
    let mut display = Display::new(config);
    display.connect()?;
    draw_demo(&display)?;

    // blocks until ctrl-c
    let _ = sigint_rx.recv();

    display.clear_all();
    display.disconnect()?;
    info!("Demo finished");
    Ok(())
}
