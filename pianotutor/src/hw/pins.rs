// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the piano tutor carrier on an STM32F767ZI.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, Alternate, Input, Output, PinState, PullDown, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub status_led: gpiob::PB14<Output<PushPull>>,
    pub usart3: Usart3Pins,
    pub usart2: Usart2Pins,
    pub left_chain: LeftChainPins,
    pub right_chain: RightChainPins,
    pub buttons: ButtonPins,
    /// Audio peak detector, routed to EXTI6 so short peaks are not missed between samples.
    pub peak: gpioe::PE6<Input<PullDown>>,
}

/// Debug console (ST-LINK virtual COM port)
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Glove sensor link
pub struct Usart2Pins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// Right-hand motor shift chain. All eight chain lines sit on GPIOA so the two chains can be
/// clocked with single BSRR writes.
pub struct RightChainPins {
    pub sdi: gpioa::PA1<Output<PushPull>>,
    pub clk: gpioa::PA2<Output<PushPull>>,
    pub le: gpioa::PA3<Output<PushPull>>,
    pub oe: gpioa::PA4<Output<PushPull>>, // active-low
}

/// Left-hand motor shift chain
pub struct LeftChainPins {
    pub sdi: gpioa::PA5<Output<PushPull>>,
    pub clk: gpioa::PA6<Output<PushPull>>,
    pub le: gpioa::PA7<Output<PushPull>>,
    pub oe: gpioa::PA8<Output<PushPull>>, // active-low
}

/// Front panel buttons, all active-high.
pub struct ButtonPins {
    pub left: gpioe::PE0<Input<PullDown>>,
    pub right: gpioe::PE1<Input<PullDown>>,
    pub mode: gpioe::PE2<Input<PullDown>>,
    pub tempo: gpioe::PE3<Input<PullDown>>,
    pub start: gpioe::PE4<Input<PullDown>>,
    pub stop: gpioe::PE5<Input<PullDown>>,
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            status_led: gpiob.pb14.into_push_pull_output(),

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            usart2: Usart2Pins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            // Output enables come up high so neither chain drives its motors before the first
            // frame is latched.
            right_chain: RightChainPins {
                sdi: gpioa.pa1.into_push_pull_output(),
                clk: gpioa.pa2.into_push_pull_output(),
                le: gpioa.pa3.into_push_pull_output(),
                oe: gpioa.pa4.into_push_pull_output_in_state(PinState::High),
            },

            left_chain: LeftChainPins {
                sdi: gpioa.pa5.into_push_pull_output(),
                clk: gpioa.pa6.into_push_pull_output(),
                le: gpioa.pa7.into_push_pull_output(),
                oe: gpioa.pa8.into_push_pull_output_in_state(PinState::High),
            },

            buttons: ButtonPins {
                left: gpioe.pe0.into_pull_down_input(),
                right: gpioe.pe1.into_pull_down_input(),
                mode: gpioe.pe2.into_pull_down_input(),
                tempo: gpioe.pe3.into_pull_down_input(),
                start: gpioe.pe4.into_pull_down_input(),
                stop: gpioe.pe5.into_pull_down_input(),
            },

            peak: gpioe.pe6.into_pull_down_input(),
        }
    }
}
