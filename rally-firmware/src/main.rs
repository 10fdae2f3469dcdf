//! Rally - two-board paddle game firmware
//!
//! Main firmware binary for RP2040-based boards. Each board drives a 5×7
//! LED matrix, two paddle buttons and a start button, and talks to the
//! facing board over UART0. The ball bounces between the boards; whoever
//! lets it past their paddle loses.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rally_core::game::{game_schedule, Match};
use rally_core::handshake::{discard_pending, negotiate};
use rally_core::traits::PixelDisplay;
use rally_drivers::display::{draw_glyph, outcome_glyph, ActiveLevel, LedMatrix};
use rally_drivers::input::{Button, PaddleButtons};
use rally_drivers::link::SerialLink;

use crate::clock::TickClock;
use crate::config::MATCH_CONFIG;

mod clock;

mod config {
    //! Match timing generated from game.toml by the build script
    use rally_core::config::MatchConfig;

    include!(concat!(env!("OUT_DIR"), "/match_config.rs"));
}

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 32]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 32]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Rally firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Peer link on UART0 (GPIO0 TX, GPIO1 RX)
    let tx_buf = TX_BUF.init([0u8; 32]);
    let rx_buf = RX_BUF.init([0u8; 32]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut link = SerialLink::new(uart);
    info!("UART initialized for peer link");

    // LED matrix: rows GPIO2-8 (bottom to top), columns GPIO9-13, both
    // sinking current
    let rows = [
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
        Output::new(p.PIN_8, Level::High),
    ];
    let columns = [
        Output::new(p.PIN_9, Level::High),
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
    ];
    let mut display = match LedMatrix::new(rows, columns, ActiveLevel::Low, ActiveLevel::Low) {
        Ok(display) => display,
        Err(e) => match e {},
    };
    info!("LED matrix initialized");

    // Buttons wired to ground with internal pull-ups
    let mut paddle = PaddleButtons::new(
        Button::active_low(Input::new(p.PIN_14, Pull::Up)),
        Button::active_low(Input::new(p.PIN_15, Pull::Up)),
    );
    let mut start = Button::active_low(Input::new(p.PIN_16, Pull::Up));
    info!("Buttons initialized");

    let mut clock = TickClock::new(MATCH_CONFIG.tick_rate_hz);
    let mut scheduler = unwrap!(game_schedule(&MATCH_CONFIG));
    let refresh_us = 1_000_000 / MATCH_CONFIG.display_rate_hz as u64;

    loop {
        info!("Waiting for start button");
        while !start.poll_press() {
            display.refresh();
            Timer::after_micros(refresh_us).await;
        }

        let dropped = discard_pending(&mut link);
        if dropped > 0 {
            debug!("Discarded {} stale bytes", dropped);
        }

        let role = match negotiate(&mut link, &mut clock, &MATCH_CONFIG) {
            Ok(role) => role,
            Err(e) => {
                warn!("Negotiation failed: {}", e);
                continue;
            }
        };
        info!("Match starting as {}", role);

        let outcome = {
            let mut game = Match::new(role, &mut link, &mut display, &mut paddle);
            scheduler.run(&mut clock, &mut game);
            game.outcome()
        };

        match outcome {
            Some(outcome) => {
                info!("Match over: {}", outcome);
                draw_glyph(&mut display, outcome_glyph(outcome));
            }
            None => warn!("Scheduler stopped with the match still running"),
        }
    }
}
