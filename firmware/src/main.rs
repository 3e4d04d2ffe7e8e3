//! Firmware for a battery-powered six-digit seven-segment LED clock.
//!
//! # Overview
//!
//! This firmware keeps GMT wall-clock time from a 32.768 kHz crystal,
//! applies the British summer-time offset automatically, and drives a
//! six-digit multiplexed LED display that alternates between the date
//! (DD.MM.YY) and the time (HH.MM.SS) every two seconds.
//!
//! # Hardware
//!
//! - **MCU**: STM32L031G6U6 (Cortex-M0+, ultra-low-power)
//! - **Display**: 6-digit 7-segment LED matrix, common segment bus
//!   (8 active-low segment lines shared by 6 active-high digit lines)
//! - **RTC**: 32.768 kHz crystal for timekeeping
//! - **Button**: single wake/mode button on EXTI
//!
//! # Timekeeping
//!
//! The stored time base is GMT and is only ever advanced one second at
//! a time. Summer time is a display offset: it flips to +1 at 01:00 GMT
//! on the last Sunday of March and back to 0 at 01:00 GMT on the last
//! Sunday of October. The displayed date/time is projected through the
//! offset on every render pass without touching the stored state.
//!
//! # Display Multiplexing
//!
//! Only one of the eight shared segment lines is energised at any
//! instant. A 16-sub-frame cycle pairs each segment line with one half
//! of the display at a time, giving every digit eight sub-frames of
//! dwell per cycle. At ~2 kHz the eye fuses this into six steadily lit
//! digits.
//!
//! # Low Power Operation
//!
//! - MSI oscillator at 4.2 MHz, the slowest range with headroom for the
//!   2 kHz multiplexer step
//! - LSE 32.768 kHz crystal feeds the embassy time driver
//! - The executor sleeps between ticks; deeper sleep states (display
//!   off, everything stopped until a button press) are managed outside
//!   this core
//!
//! # Module Organization
//!
//! - [`tasks`] - the three periodic entry points and the button task
//! - [`hardware`] - pin mappings and the display GPIO adapter

#![no_std]
#![no_main]

mod hardware;
mod tasks;

use embassy_executor::Spawner;
use embassy_stm32::{
    Config,
    rcc::{LsConfig, LseConfig, mux::ClockMux},
    time::Hertz,
};
use {defmt_rtt as _, panic_probe as _};

use hardware::Peripherals;
use tasks::{BUTTON_PRESS, button_task, display_task, render_task, second_tick_task};

/// Creates a low-power clock configuration for STM32L031.
///
/// # Clock Settings
///
/// - **MSI**: 4.2 MHz — low power, but enough cycles to finish one
///   multiplexer sub-frame well inside its 500 µs slot
/// - **System clock**: MSI (no PLL)
/// - **LSE**: 32.768 kHz external crystal for the time driver
/// - **Voltage scale**: Range 1 (1.8V core for low power)
fn create_low_power_config() -> embassy_stm32::rcc::Config {
    embassy_stm32::rcc::Config {
        msi: Some(embassy_stm32::rcc::MSIRange::RANGE4M),
        hsi: false,
        hse: None,
        pll: None,
        sys: embassy_stm32::rcc::Sysclk::MSI,
        ahb_pre: embassy_stm32::rcc::AHBPrescaler::DIV1,
        apb1_pre: embassy_stm32::rcc::APBPrescaler::DIV1,
        apb2_pre: embassy_stm32::rcc::APBPrescaler::DIV1,
        ls: LsConfig {
            rtc: embassy_stm32::rcc::RtcClockSource::LSE,
            lsi: false,
            lse: Some(LseConfig {
                frequency: Hertz::hz(32768),
                mode: embassy_stm32::rcc::LseMode::Oscillator(embassy_stm32::rcc::LseDrive::Low),
            }),
        },
        voltage_scale: embassy_stm32::rcc::VoltageScale::RANGE1,
        mux: ClockMux::default(),
    }
}

/// Main entry point for the clock firmware.
///
/// # Initialization Sequence
///
/// 1. Configure clocks (MSI sysclk, LSE time base)
/// 2. Initialize GPIO for the display lines and the button
/// 3. Spawn the three periodic tasks in deadline order: display
///    (~2 kHz), clock (1 Hz), render (every 2 s)
/// 4. Spawn the button edge task
/// 5. Park, consuming wake events
///
/// # Spawned Tasks
///
/// - **display_task**: multiplexer drive, tightest deadline
/// - **second_tick_task**: GMT advance once per second
/// - **render_task**: frame rebuild, alternating date/time
/// - **button_task**: one event per press on the wake signal
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut config = Config::default();
    config.rcc = create_low_power_config();

    let p = embassy_stm32::init(config);

    #[cfg(feature = "debug-mode")]
    defmt::info!("clock firmware starting...");

    let peripherals = Peripherals::new(p);

    spawner.spawn(display_task(peripherals.display)).unwrap();
    spawner.spawn(second_tick_task()).unwrap();
    spawner.spawn(render_task()).unwrap();
    spawner.spawn(button_task(peripherals.button)).unwrap();

    #[cfg(feature = "debug-mode")]
    defmt::info!("tasks running, waiting for button events");

    // Wake/mode handling beyond the edge event itself lives with the
    // power-management side; for now a press just logs.
    loop {
        BUTTON_PRESS.wait().await;

        #[cfg(feature = "debug-mode")]
        defmt::info!("button press");
    }
}
