//! Periodic entry points and the tasks that drive them.
//!
//! Three activities run for the life of the powered-on system, each at
//! its own rate:
//!
//! - 1 Hz: [`on_second_tick`] advances the GMT clock state
//! - 0.5 Hz: [`on_render_tick`] re-renders the frame, alternating
//!   between the date and time layouts
//! - ~2 kHz: [`on_display_tick`] emits one multiplexer sub-frame
//!
//! Each shared value sits behind a critical-section mutex: the clock
//! state (written by the second ticker, read by the render pass) and
//! the frame (replaced wholesale by the render pass, read by the
//! display ticker). Every critical section is a handful of loads and
//! stores, well inside the 500 µs sub-frame budget, so the display
//! ticker is never starved and frames are never torn.

use core::cell::RefCell;

use clock_core::clock::ClockState;
use clock_core::display::{self, DisplayBuffer, DisplayMode};
use clock_core::mux::Multiplexer;
use clock_core::segment::NineStyle;
use embassy_stm32::exti::ExtiInput;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};

/// Power-on seed. Time state is volatile; after a full power-down the
/// clock restarts here until the user sets it.
const SEED: ClockState = ClockState::new(2013, 7, 26, 22, 59, 30, 0);

/// Multiplexer drive rate. Fast enough that persistence of vision fuses
/// the six digits, slow enough to leave headroom at the MSI core clock.
const DISPLAY_HZ: u64 = 2_000;

/// How long each render mode stays on screen before alternating.
const MODE_SECS: u64 = 2;

#[cfg(feature = "curly-nines")]
const NINE_STYLE: NineStyle = NineStyle::Curly;
#[cfg(not(feature = "curly-nines"))]
const NINE_STYLE: NineStyle = NineStyle::Open;

/// Canonical GMT state. Written only by the second ticker.
static CLOCK: Mutex<CriticalSectionRawMutex, RefCell<ClockState>> =
    Mutex::new(RefCell::new(SEED));

/// Current frame. Replaced wholesale by the render pass, read line by
/// line by the display ticker.
static FRAME: Mutex<CriticalSectionRawMutex, RefCell<DisplayBuffer>> =
    Mutex::new(RefCell::new(DisplayBuffer::blank()));

/// One event per button press, published for the wake/mode consumer.
pub static BUTTON_PRESS: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Advances GMT by one second.
pub fn on_second_tick() {
    CLOCK.lock(|clock| clock.borrow_mut().advance_one_second());
}

/// Renders the current state into the shared frame.
pub fn on_render_tick(mode: DisplayMode) {
    let state = CLOCK.lock(|clock| *clock.borrow());
    let frame = display::render(&state, mode, NINE_STYLE);
    FRAME.lock(|current| *current.borrow_mut() = frame);
}

/// Emits one multiplexer sub-frame onto the display lines.
pub fn on_display_tick(mux: &mut Multiplexer, lines: &mut crate::hardware::DisplayGpio) {
    FRAME.lock(|frame| mux.step(&frame.borrow(), lines));
}

/// 1 Hz wall-clock ticker, on the LSE-backed time base.
#[embassy_executor::task]
pub async fn second_tick_task() {
    let mut ticker = Ticker::every(Duration::from_secs(1));
    loop {
        ticker.next().await;
        on_second_tick();

        #[cfg(feature = "debug-mode")]
        CLOCK.lock(|clock| {
            let state = clock.borrow();
            defmt::debug!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02} GMT+{}",
                state.year,
                state.month,
                state.day,
                state.hours,
                state.minutes,
                state.seconds,
                state.timezone_offset,
            );
        });
    }
}

/// Alternates the date and time layouts every [`MODE_SECS`] seconds.
///
/// A ticker keeps the interval without ever blocking the executor, so
/// the display task keeps running between layout changes.
#[embassy_executor::task]
pub async fn render_task() {
    let mut ticker = Ticker::every(Duration::from_secs(MODE_SECS));
    let mut mode = DisplayMode::Time;
    loop {
        on_render_tick(mode);
        mode = match mode {
            DisplayMode::Time => DisplayMode::Date,
            DisplayMode::Date => DisplayMode::Time,
        };
        ticker.next().await;
    }
}

/// Multiplexer drive loop, the tightest deadline in the system.
#[embassy_executor::task]
pub async fn display_task(mut lines: crate::hardware::DisplayGpio) {
    let mut mux = Multiplexer::new();
    let mut ticker = Ticker::every(Duration::from_hz(DISPLAY_HZ));
    loop {
        ticker.next().await;
        on_display_tick(&mut mux, &mut lines);
    }
}

/// Publishes one event per button press.
///
/// The press is the sole wake trigger for the system; which key was hit
/// is decoded elsewhere (the resistor-ladder keypad is not part of this
/// core). A short hold-off swallows contact bounce so the edge fires
/// once per press, not while held.
#[embassy_executor::task]
pub async fn button_task(mut button: ExtiInput<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        BUTTON_PRESS.signal(());
        Timer::after_millis(50).await;
    }
}
