pub mod clock_constants;

#[cfg(feature = "stm32f7xx")]
pub mod stm32f7;

#[cfg(feature = "stm32h7xx")]
pub mod stm32h7;
