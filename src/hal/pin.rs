use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
}

impl Port {
    pub const COUNT: usize = 11;

    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
            Port::F => 'F',
            Port::G => 'G',
            Port::H => 'H',
            Port::I => 'I',
            Port::J => 'J',
            Port::K => 'K',
        }
    }
}

/// Physical pin identifier, port + line (`PI11` is `Pin::new(Port::I, 11)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    port: Port,
    index: u8,
}

impl Pin {
    pub const fn new(port: Port, index: u8) -> Self {
        assert!(index < 16);
        Self { port, index }
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn mask(&self) -> u16 {
        1 << self.index
    }

    /// `==` usable in const context
    pub const fn same_as(&self, other: &Pin) -> bool {
        self.port as u8 == other.port as u8 && self.index == other.index
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.index)
    }
}

/// `true` if no physical pin appears twice in `pins`.
pub const fn all_distinct(pins: &[Pin]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i].same_as(&pins[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
