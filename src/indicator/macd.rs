use super::ema::Ema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub macd: f64,
    /// `None` until the signal EMA has seen `signal_period` MACD values.
    pub signal: Option<f64>,
}

impl MacdPoint {
    pub fn histogram(&self) -> Option<f64> {
        self.signal.map(|signal| self.macd - signal)
    }
}

/// Incremental MACD: fast EMA minus slow EMA, plus an EMA of that difference.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_ema: Ema,
    slow_ema: Ema,
    signal_ema: Ema,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        assert!(
            fast_period < slow_period,
            "MACD fast period must be shorter than slow period"
        );
        Self {
            fast_ema: Ema::new(fast_period),
            slow_ema: Ema::new(slow_period),
            signal_ema: Ema::new(signal_period),
        }
    }

    /// Push a close price. Returns `None` until the slow EMA is ready.
    pub fn push(&mut self, price: f64) -> Option<MacdPoint> {
        // Both EMAs see every price so they stay aligned.
        let fast = self.fast_ema.push(price);
        let slow = self.slow_ema.push(price);
        let (Some(fast), Some(slow)) = (fast, slow) else {
            return None;
        };

        let macd = fast - slow;
        let signal = self.signal_ema.push(macd);
        Some(MacdPoint { macd, signal })
    }
}
