// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` sink on the debug console.
//!
//! Every record goes out as one `[LEVEL] message\r\n` line. The console is taken out of its
//! critical-section mutex for the length of a line, so interrupts keep running while it drains.
//! A record logged while the console is already busy (from an interrupt that preempted a line) is
//! dropped.

use core::cell::RefCell;
use core::fmt::Write;

use critical_section::Mutex;
use log::{LevelFilter, Log, Metadata, Record};
use stm32f7xx_hal::pac::USART3;

use crate::hw::Usart;

static CONSOLE: Mutex<RefCell<Option<Usart<USART3>>>> = Mutex::new(RefCell::new(None));
static LOGGER: SerialLogger = SerialLogger;

struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        with_console(|usart| {
            let _ = write!(usart, "[{}] {}\r\n", record.level(), record.args());
        });
    }

    fn flush(&self) {
        with_console(|usart| usart.flush());
    }
}

/// Run `f` on the console with interrupts enabled. Does nothing if another context holds it.
fn with_console(f: impl FnOnce(&mut Usart<USART3>)) {
    let Some(mut usart) = critical_section::with(|cs| CONSOLE.borrow_ref_mut(cs).take()) else {
        return;
    };
    f(&mut usart);
    critical_section::with(|cs| CONSOLE.borrow(cs).replace(Some(usart)));
}

/// Hand the console to the logger and install it. Only the first call installs; later calls just
/// swap the console.
pub fn init(usart: Usart<USART3>, level: LevelFilter) {
    critical_section::with(|cs| CONSOLE.borrow(cs).replace(Some(usart)));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
