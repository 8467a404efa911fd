//! Drives a chain of four MAX7219 8x8 segments from a single `DisplayState`.
//!
//! The marquee scrolls in from the right edge; every time it has fully passed,
//! the eyes animation plays for its period and then the marquee enters from
//! the right again.
//!
//! The following wiring is assumed:
//! - SCK  =>  GPIO12
//! - MOSI =>  GPIO11
//! - CS   =>  GPIO5

#![no_std]
#![no_main]

mod config;

use core::cell::RefCell;

use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embassy_time::Ticker;
use embedded_hal_async::spi::SpiBus;
use esp_backtrace as _;
use esp_hal::{
    gpio::{Level, Output, OutputConfig},
    spi::{master::Spi, Error as SpiError},
    time::Rate,
    timer::timg::TimerGroup,
    Async,
};
use matrix_state::{
    geometry::CS_PIN,
    max7219,
    renderer::render_state,
    DisplayState, MatrixFrame, GEOMETRY,
};
use static_cell::StaticCell;

// Chip select is wired to GPIO5 in `main`.
const _: () = assert!(CS_PIN == 5);

type SharedState = Mutex<CriticalSectionRawMutex, RefCell<DisplayState>>;

static STATE: StaticCell<SharedState> = StaticCell::new();

/// Feeds one second at a time into the ping schedule and the animation.
#[embassy_executor::task]
async fn clock_task(state: &'static SharedState) {
    info!("Starting clock_task");
    let mut ticker = Ticker::every(config::CLOCK_TICK);

    loop {
        ticker.next().await;

        let tick = state.lock(|state| state.borrow_mut().on_second());

        if tick.ping_due {
            info!("Ping due");
        }
        if tick.animation_done {
            info!("Animation finished, back to marquee");
        }
    }
}

#[embassy_executor::task]
async fn display_task(
    state: &'static SharedState,
    mut spi: Spi<'static, Async>,
    mut cs: Output<'static>,
) {
    info!("Starting display_task");

    let init = max7219::init_sequence(config::INTENSITY).expect("INTENSITY is out of range");
    for command in init.iter() {
        transmit_data(&mut spi, command, &mut cs)
            .await
            .expect("Failed to initialise MAX7219 chain");
    }

    let mut frame = MatrixFrame::new();
    let mut ticker = Ticker::every(config::FRAME_INTERVAL);

    loop {
        let rows = state.lock(|state| {
            let mut state = state.borrow_mut();
            render_state(&mut frame, &state).unwrap_or_else(|never| match never {});
            let advanced = state.advance_frame(
                config::EYE_STEP_FRAMES,
                config::EYE_MODE,
                config::ANIMATION_PERIOD_SECS,
            );
            if let Err(error) = advanced {
                warn!("Could not start eyes: {}", error);
            }
            max7219::frame_rows(&frame)
        });

        for row in rows.iter() {
            if let Err(error) = transmit_data(&mut spi, row, &mut cs).await {
                warn!("Skipping frame, SPI write failed: {:?}", error);
                break;
            }
        }

        ticker.next().await;
    }
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    info!("Init!");

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let mut display_state = DisplayState::new();
    if display_state.marquee.set_truncated(config::MARQUEE_TEXT) {
        warn!("MARQUEE_TEXT truncated to {} bytes", display_state.marquee.len());
    }
    display_state.restart_marquee();
    info!(
        "Matrix {}x{} in {} segments, ping every {} s",
        GEOMETRY.columns(),
        GEOMETRY.rows(),
        GEOMETRY.segments,
        display_state.ping.interval_secs
    );
    let state = &*STATE.init(Mutex::new(RefCell::new(display_state)));

    let spi = Spi::new(
        peripherals.SPI2,
        esp_hal::spi::master::Config::default()
            .with_frequency(Rate::from_mhz(config::SPI_FREQUENCY_MHZ))
            .with_mode(esp_hal::spi::Mode::_0),
    )
    .expect("Failed to configure SPI")
    .with_sck(peripherals.GPIO12)
    .with_mosi(peripherals.GPIO11)
    .into_async();

    let cs = Output::new(peripherals.GPIO5, Level::High, OutputConfig::default());

    spawner.must_spawn(clock_task(state));
    spawner.must_spawn(display_task(state, spi, cs));
}

/// Writes one chain-wide command with chip select held low for the whole
/// transfer, so every segment latches its pair on the rising edge.
async fn transmit_data(
    spi: &mut Spi<'_, Async>,
    data: &[u8],
    cs: &mut Output<'_>,
) -> Result<(), SpiError> {
    cs.set_low();
    let result = match SpiBus::write(spi, data).await {
        Ok(()) => SpiBus::flush(spi).await,
        Err(error) => Err(error),
    };
    cs.set_high();
    result
}
