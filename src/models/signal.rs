use serde::{Deserialize, Serialize};

/// Discrete per-bar trade signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl Signal {
    /// Position taken on the next bar: +1 long, -1 short, 0 flat
    pub fn position(self) -> f64 {
        f64::from(self.as_i8())
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Hold => 0,
        }
    }

    pub fn is_active(self) -> bool {
        self != Signal::Hold
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.as_i8()
    }
}
