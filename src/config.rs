//-----------------------------------------------------------------------------

pub const SYSTICK_RATE_HZ: u32 = 1_000;

//-----------------------------------------------------------------------------

// debug logger software tx buffer
pub const LOGGER_BUFFER_SIZE: usize = 256;

//-----------------------------------------------------------------------------

// max. deviation of the real UART baudrate from the requested one, 1%
pub const BAUDRATE_TOLERANCE_PERMILLE: u32 = 10;

// USART oversampling by 16
pub const USART_OVERSAMPLING: u32 = 16;
