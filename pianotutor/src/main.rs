// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use pianotutor::drivers::{Buttons, MotorChains};
use pianotutor::hw::{ActiveLevel, BoardPins, RisingEdge, SensorPort, StatusLed, TickTimer, Usart};
use pianotutor::logger;
use pianotutor_core::bus::signal::{CalibrationError, ResolvedFingerDistances};
use pianotutor_core::haptic::HapticDriver;
use pianotutor_core::input::{Event, EventLatch};
use pianotutor_core::link::{Parser, PositionLink};
use pianotutor_core::music::songs::CATALOG;
use pianotutor_core::resolver::REST_DISTANCE;
use pianotutor_core::{Reactor, Tutor, TutorConfig, FINGER_COUNT};

/// Everything the haptic tick owns.
struct Haptics {
    timer: TickTimer<pac::TIM3>,
    buttons: Buttons,
    driver: HapticDriver<MotorChains>,
}

static HAPTICS: Mutex<RefCell<Option<Haptics>>> = Mutex::new(RefCell::new(None));
static PEAK: Mutex<RefCell<Option<RisingEdge<'E', 6>>>> = Mutex::new(RefCell::new(None));
static EVENTS: EventLatch = EventLatch::new();

/// Resolved finger distances, refreshed by the main loop and driven by the haptic tick.
static DISTANCES: Mutex<Cell<[i8; FINGER_COUNT]>> =
    Mutex::new(Cell::new([REST_DISTANCE; FINGER_COUNT]));

/// Haptic ticks since power-on.
static TICKS: AtomicU32 = AtomicU32::new(0);

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

    let usart_cfg = || Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };

    // USART3 (DBG)
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg(),
    );
    logger::init(Usart::new(serial), log::LevelFilter::Info);

    // USART2 (glove)
    let serial = Serial::new(
        dp.USART2,
        (pins.usart2.tx, pins.usart2.rx),
        &clocks,
        usart_cfg(),
    );
    let mut sensor = SensorPort::new(serial);

    let config = TutorConfig::default();
    let tutor = Tutor::new(&CATALOG, &config);
    if let Err(e) = tutor.start() {
        log::error!("tutor wiring: {}", e);
    }

    let mut parser = Parser::new();
    let mut link = PositionLink::new(config.link);
    link.start(&tutor);

    // Haptic tick
    let chains = MotorChains::new(pins.left_chain, pins.right_chain, clocks.sysclk().raw());
    let haptics = Haptics {
        timer: TickTimer::tim3(dp.TIM3, clocks.timclk1().raw(), config.haptic.tick_hz),
        buttons: Buttons::new(pins.buttons),
        driver: HapticDriver::new(config.haptic, chains),
    };
    critical_section::with(|cs| HAPTICS.borrow(cs).replace(Some(haptics)));
    unsafe { NVIC::unmask(pac::Interrupt::TIM3) };

    // Audio peak
    let peak = RisingEdge::new(pins.peak, dp.EXTI, &dp.SYSCFG);
    critical_section::with(|cs| PEAK.borrow(cs).replace(Some(peak)));
    unsafe { NVIC::unmask(pac::Interrupt::EXTI9_5) };

    let mut led = StatusLed::new(pins.status_led, ActiveLevel::BOARD);
    let ms_per_tick = 1000 / config.haptic.tick_hz.max(1);

    log::info!("piano tutor up, {} songs", CATALOG.len());

    loop {
        let now_ms = TICKS.load(Ordering::Relaxed).wrapping_mul(ms_per_tick);

        EVENTS.drain(&tutor);
        while let Some(byte) = sensor.read_byte() {
            if let Some(message) = parser.push(byte) {
                link.apply(&tutor, message);
            }
        }
        tutor.poll(now_ms);
        led.set(tutor.read::<CalibrationError>());

        let distances = tutor.read::<ResolvedFingerDistances>();
        critical_section::with(|cs| DISTANCES.borrow(cs).set(distances));
    }
}

#[interrupt]
fn TIM3() {
    critical_section::with(|cs| {
        let mut haptics = HAPTICS.borrow_ref_mut(cs);
        let Some(haptics) = haptics.as_mut() else {
            return;
        };
        haptics.timer.clear_update();
        haptics.buttons.sample(&EVENTS);

        let distances = DISTANCES.borrow(cs).get();
        haptics
            .driver
            .tick(&distances)
            .unwrap_or_else(|never| match never {});
    });
    TICKS.fetch_add(1, Ordering::Relaxed);
}

#[interrupt]
fn EXTI9_5() {
    critical_section::with(|cs| {
        if let Some(peak) = PEAK.borrow_ref_mut(cs).as_mut() {
            if peak.take() {
                EVENTS.raise(Event::Sound);
            }
        }
    });
}
