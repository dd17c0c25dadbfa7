//! Bench loop
//!
//! One sequencer tick per `tick_period_ms`, with the input status printed
//! before every tick so relay feedback shows up on the next line.

use esp_idf_svc::hal::delay::FreeRtos;
use log::info;
use relaybench_core::config::TimingConfig;
use relaybench_core::status;
use relaybench_core::traits::InputSource;
use relaybench_core::RelaySequencer;
use relaybench_hal::AnalogInput;

use crate::board::Board;
use crate::sense::SENSE_LABEL;

pub struct Bench {
    board: Board,
    sequencer: RelaySequencer,
    timing: TimingConfig,
}

impl Bench {
    pub fn new(board: Board, timing: TimingConfig) -> Self {
        Self {
            board,
            sequencer: RelaySequencer::new(),
            timing,
        }
    }

    /// Run the relay test program, then idle forever
    pub fn run(mut self) -> ! {
        FreeRtos::delay_ms(self.timing.boot_settle_ms);
        info!("ES32D26 Hardware Test Start");
        FreeRtos::delay_ms(self.timing.start_delay_ms);

        loop {
            if self.sequencer.is_halted() {
                info!("{}", self.sequencer.step().describe());
                loop {
                    FreeRtos::delay_ms(self.timing.halt_poll_ms);
                }
            }

            self.print_status();

            info!("{}", self.sequencer.step().describe());
            let report = self.sequencer.tick(&mut self.board.relays);
            if let Some(mask) = report.driven {
                info!("[RELAY] {} -> {}", mask, self.board.relays.control_levels());
            }

            FreeRtos::delay_ms(self.timing.tick_period_ms);
        }
    }

    fn print_status(&mut self) {
        let snapshot = self.board.inputs.capture();
        let report = status::report(snapshot);

        match self.board.sense.read_raw() {
            Ok(raw) => info!("{} | {}: {}", report, SENSE_LABEL, raw),
            Err(e) => info!("{} | {}: {}", report, SENSE_LABEL, e),
        }
        for line in report.lines() {
            info!("[TEST] {}", line);
        }
    }
}
