//! Hardware abstraction and peripheral initialization.
//!
//! This module defines the pin mappings and peripheral initialization
//! for the clock hardware, and the GPIO adapter that carries the
//! display's polarity convention.
//!
//! # Pin Assignments
//!
//! ## Segment bus (shared across all six digits, active-low)
//! - **PA0**: SEG_A
//! - **PA1**: SEG_B
//! - **PA2**: SEG_C
//! - **PA3**: SEG_D
//! - **PA4**: SEG_E
//! - **PA5**: SEG_F
//! - **PA6**: SEG_G
//! - **PA7**: SEG_DP - decimal point / field separator
//!
//! ## Digit-select lines (left to right, active-high)
//! - **PB0**: DIG0
//! - **PB1**: DIG1
//! - **PB3**: DIG2
//! - **PB4**: DIG3
//! - **PB5**: DIG4
//! - **PB6**: DIG5
//!
//! ## Button
//! - **PA8**: BTN_N - wake/mode button, pulled up, falling edge on press
//!
//! ## Low Power & RTC
//! - **PC14**: OSC32_IN - 32.768 kHz crystal input
//! - **PC15**: OSC32_OUT - 32.768 kHz crystal output
//!
//! ## Debug (SWD)
//! - **PA13**: SWDIO
//! - **PA14**: SWCLK

use clock_core::mux::{DIGIT_LINES, DisplayLines, SEGMENT_LINES};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};

/// GPIO adapter for the multiplexed display.
///
/// The segment drivers sink current, so a segment line is energised by
/// driving it low; digit-select lines source current and are energised
/// high. The multiplexer itself only speaks in active/inactive — the
/// polarity lives entirely here.
pub struct DisplayGpio {
    segments: [Output<'static>; SEGMENT_LINES],
    digits: [Output<'static>; DIGIT_LINES],
}

impl DisplayLines for DisplayGpio {
    fn set_segment(&mut self, line: usize, active: bool) {
        if active {
            self.segments[line].set_low();
        } else {
            self.segments[line].set_high();
        }
    }

    fn set_digit(&mut self, line: usize, active: bool) {
        if active {
            self.digits[line].set_high();
        } else {
            self.digits[line].set_low();
        }
    }
}

/// Top-level peripheral container for the clock.
pub struct Peripherals {
    /// Display segment and digit-select lines
    pub display: DisplayGpio,
    /// Wake/mode button, edge-triggered via EXTI
    pub button: ExtiInput<'static>,
}

impl Peripherals {
    /// Initializes all peripherals from the STM32 peripheral singleton.
    ///
    /// Everything starts dark: segment lines high (off, active-low) and
    /// digit lines low (off, active-high). The first multiplexer step
    /// lights the display.
    pub fn new(p: embassy_stm32::Peripherals) -> Self {
        Self {
            display: DisplayGpio {
                segments: [
                    Output::new(p.PA0, Level::High, Speed::Low),
                    Output::new(p.PA1, Level::High, Speed::Low),
                    Output::new(p.PA2, Level::High, Speed::Low),
                    Output::new(p.PA3, Level::High, Speed::Low),
                    Output::new(p.PA4, Level::High, Speed::Low),
                    Output::new(p.PA5, Level::High, Speed::Low),
                    Output::new(p.PA6, Level::High, Speed::Low),
                    Output::new(p.PA7, Level::High, Speed::Low),
                ],
                digits: [
                    Output::new(p.PB0, Level::Low, Speed::Low),
                    Output::new(p.PB1, Level::Low, Speed::Low),
                    Output::new(p.PB3, Level::Low, Speed::Low),
                    Output::new(p.PB4, Level::Low, Speed::Low),
                    Output::new(p.PB5, Level::Low, Speed::Low),
                    Output::new(p.PB6, Level::Low, Speed::Low),
                ],
            },
            button: ExtiInput::new(p.PA8, p.EXTI8, Pull::Up),
        }
    }
}
