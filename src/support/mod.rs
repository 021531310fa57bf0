pub mod clocking;

mod delay;
pub use delay::LoopDelay;

mod logger;
pub use logger::{BlockIfFull, DiscardIfFull, IoDeviceWrapper, OverflowPolicy};

mod software_gpio_port;
pub use software_gpio_port::SoftwareGpioPort;
