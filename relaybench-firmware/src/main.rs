//! Relaybench - ES32D26 relay/input board bring-up firmware
//!
//! Steps the eight relays through a fixed test program (ramp up, ramp down,
//! all on, all off) while printing the eight opto inputs and the AI34
//! analog sense line every tick. Halts with all relays off.

mod bench;
mod board;
mod config;
mod pins;
mod sense;

use anyhow::Result;
use esp_idf_svc::hal::prelude::Peripherals;
use log::info;

use crate::bench::Bench;
use crate::board::Board;
use crate::sense::SenseInput;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    info!("Relaybench firmware starting...");

    let config = config::load();

    let peripherals = Peripherals::take()?;
    let sense = SenseInput::new(peripherals.adc1, peripherals.pins.gpio34)?;
    info!("Sense input initialized");

    let board = Board::new(&config, sense)?;

    Bench::new(board, config.timing).run()
}
