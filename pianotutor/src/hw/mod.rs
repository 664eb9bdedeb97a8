pub mod exti;
pub mod led;
pub mod pins;
pub mod timer;
pub mod usart;

pub use exti::RisingEdge;
pub use led::{ActiveLevel, StatusLed};
pub use pins::BoardPins;
pub use timer::TickTimer;
pub use usart::{SensorPort, Usart};
