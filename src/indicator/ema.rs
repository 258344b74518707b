/// Exponential Moving Average, seeded with the simple average of the first
/// `period` values.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
    ema: Option<f64>,
    seed_sum: f64,
    seed_count: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be > 0");
        Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            ema: None,
            seed_sum: 0.0,
            seed_count: 0,
        }
    }

    /// Push a new value, return the current EMA if enough data.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        match self.ema {
            Some(prev) => {
                self.ema = Some((value - prev) * self.multiplier + prev);
            }
            None => {
                self.seed_sum += value;
                self.seed_count += 1;
                if self.seed_count == self.period {
                    self.ema = Some(self.seed_sum / self.period as f64);
                }
            }
        }
        self.ema
    }

    pub fn value(&self) -> Option<f64> {
        self.ema
    }

    pub fn is_ready(&self) -> bool {
        self.ema.is_some()
    }

    pub fn period(&self) -> usize {
        self.period
    }
}
