/// Block cipher modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
}

impl Mode {
    /// Chained modes need an initialization vector; ECB does not.
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Feedback modes process sub-block segments of a configured width.
    pub fn requires_shift_width(self) -> bool {
        matches!(self, Mode::Cfb | Mode::Ofb)
    }
}

/// Transformation direction of a cipher stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// The opposite stream direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}
