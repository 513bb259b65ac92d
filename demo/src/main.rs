mod config;

use crate::config::Config;
use dotenv::dotenv;
use hd44780_gpio::gpiod::GpiodDriver;
use hd44780_gpio::lcd::hd44780::driver::GpioHD44780Driver;
use hd44780_gpio::lcd::hd44780::{DisplayExt, HD44780Display};
use hd44780_gpio::sim::{SimGpioDriver, SimWiring};
use hd44780_gpio::{Delay, GpioDriver, StdDelay};
use log::{debug, info, warn};
use std::env::{var, var_os};
use std::str::FromStr;
use sysinfo::System;

/// Pin numbers the display is connected to.
#[derive(Copy, Clone, Debug)]
struct Wiring {
    rs: usize,
    e: usize,
    /// D4, D5, D6, D7.
    data: [usize; 4],
}

fn parse_pin_bus(pin_str: &str) -> eyre::Result<[usize; 4]> {
    pin_str
        .split([',', ' ', ';'])
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?
        .try_into()
        .map_err(|_| eyre::eyre!("Invalid number of data pins"))
}

fn var_or<T>(name: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(name) {
        Ok(value) => Ok(value.trim().parse()?),
        Err(_) => Ok(default),
    }
}

fn run<'a>(
    gpio: &'a dyn GpioDriver,
    delay: Box<dyn Delay + 'a>,
    wiring: Wiring,
    lines: u8,
    cols: u8,
    config: &Config,
) -> eyre::Result<()> {
    debug!("Initializing LCD driver on {:?}...", gpio);
    let driver = GpioHD44780Driver::new_4bit(
        gpio.get_pin(wiring.rs)?,
        gpio.get_pin(wiring.e)?,
        [
            gpio.get_pin(wiring.data[0])?,
            gpio.get_pin(wiring.data[1])?,
            gpio.get_pin(wiring.data[2])?,
            gpio.get_pin(wiring.data[3])?,
        ],
        delay,
    );
    let mut lcd = HD44780Display::new(driver, lines, cols)?;
    lcd.init()?;
    debug!("LCD initialized.");

    for glyph in &config.glyphs {
        lcd.add_char(glyph.location, &glyph.rows)?;
    }

    if config.text.len() > lines as usize {
        warn!("{} lines of text, but the display only has {}", config.text.len(), lines);
    }
    for (row, text) in config.text.iter().take(lines as usize).enumerate() {
        lcd.set_cursor(0, row as u8)?;
        lcd.print(text)?;
    }

    lcd.show_cursor()?;
    lcd.blink_cursor()?;

    let (col, row) = lcd.cursor();
    info!("Text printed, cursor at ({}, {}).", col, row);
    Ok(())
}

fn main() -> eyre::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    const UNKNOWN_STR: &str = "???";

    info!(
        "HD44780 demo on {}",
        System::host_name().as_deref().unwrap_or(UNKNOWN_STR)
    );

    let wiring = Wiring {
        rs: var("HD44780_PIN_RS")?.parse()?,
        e: var("HD44780_PIN_E")?.parse()?,
        data: parse_pin_bus(&var("HD44780_PINS_DATA")?)?,
    };
    let lines: u8 = var_or("HD44780_LINES", 2)?;
    let cols: u8 = var_or("HD44780_COLS", 16)?;

    info!(
        "LCD {}x{} @ RS: {}, E: {}, Data: {:?}",
        cols, lines, wiring.rs, wiring.e, wiring.data
    );

    debug!("Trying to load config...");
    let config = if let Some(config) = Config::try_load()? {
        info!("Config loaded.");
        config
    } else {
        info!("Config not found. Using default");
        let config = Config::default();
        config.save()?;
        info!("Default config saved.");
        config
    };

    if var_os("HD44780_DRY_RUN").is_some() {
        info!("Dry run, using simulated GPIO");
        let pin_count = wiring
            .data
            .iter()
            .chain([&wiring.rs, &wiring.e])
            .max()
            .copied()
            .unwrap_or(0)
            + 1;
        let sim = SimGpioDriver::new(pin_count);
        run(&sim, Box::new(sim.delay()), wiring, lines, cols, &config)?;

        let sim_wiring = SimWiring {
            rs: wiring.rs,
            e: wiring.e,
            data: wiring.data,
        };
        let recorder = sim.recorder();
        let total_us: u64 = recorder.delays().iter().map(|&us| us as u64).sum();
        // The first 4 nibbles are the 4-bit mode handshake
        for transfer in recorder.transfers(&sim_wiring, 4) {
            let kind = if transfer.rs { "data" } else { "cmd " };
            info!("{} {:#04X} (+{} us)", kind, transfer.byte, transfer.settle_us);
        }
        info!("Would have taken {} us.", total_us);
    } else {
        let chip = var("HD44780_GPIO_CHIP").unwrap_or_else(|_| "/dev/gpiochip0".to_string());
        let gpio = GpiodDriver::open(&chip)?;
        debug!("{:?} initialized.", gpio);
        run(&gpio, Box::new(StdDelay), wiring, lines, cols, &config)?;
    }

    Ok(())
}
