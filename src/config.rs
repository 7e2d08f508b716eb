use std::env;

/// Multiplicative band (relative to base price) the tick simulator keeps
/// prices inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    /// Lower bound as a fraction of base price (e.g. 0.5 = half).
    pub low: f64,
    /// Upper bound as a fraction of base price (e.g. 2.0 = double).
    pub high: f64,
}

impl Default for PriceBand {
    fn default() -> Self {
        Self { low: 0.5, high: 2.0 }
    }
}

impl PriceBand {
    /// Clamp `price` into the band around `base`.
    pub fn clamp(&self, price: f64, base: f64) -> f64 {
        price.clamp(base * self.low, base * self.high)
    }

    /// Whether the band is usable (positive and ordered).
    pub fn is_valid(&self) -> bool {
        self.low > 0.0 && self.low < self.high && self.high.is_finite()
    }
}

/// Market simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Cadence of the tick simulator (ms).
    pub tick_interval_ms: u64,
    /// Seed for the simulator RNG; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Drift clamp applied to every tick; `None` disables clamping.
    pub price_band: Option<PriceBand>,
    /// Upper bound on candles returned per request.
    pub max_candles: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            seed: None,
            price_band: Some(PriceBand::default()),
            max_candles: 5000,
        }
    }
}

/// Quant calculator limits.
#[derive(Debug, Clone)]
pub struct QuantConfig {
    /// Monte Carlo draws used for VaR when the request doesn't specify one.
    pub var_simulations: usize,
    /// Hard cap on paths/draws accepted from a single request.
    pub max_simulations: usize,
}

impl Default for QuantConfig {
    fn default() -> Self {
        Self {
            var_simulations: 10_000,
            max_simulations: 100_000,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Market simulation settings.
    pub simulation: SimulationConfig,
    /// Quant calculator settings.
    pub quant: QuantConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = SimulationConfig::default();
        let band_default = PriceBand::default();

        let band_enabled = env::var("PRICE_BAND_ENABLED")
            .ok()
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let band = PriceBand {
            low: env::var("PRICE_BAND_LOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(band_default.low),
            high: env::var("PRICE_BAND_HIGH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(band_default.high),
        };

        // Unusable bands fall back to the default.
        let price_band = if !band_enabled {
            None
        } else if band.is_valid() {
            Some(band)
        } else {
            Some(band_default)
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            simulation: SimulationConfig {
                tick_interval_ms: env::var("TICK_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|v: &u64| *v > 0)
                    .unwrap_or(defaults.tick_interval_ms),
                seed: env::var("SIM_SEED").ok().and_then(|v| v.parse().ok()),
                price_band,
                max_candles: env::var("MAX_CANDLES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_candles),
            },
            quant: QuantConfig {
                var_simulations: env::var("VAR_SIMULATIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|v: &usize| *v > 0)
                    .unwrap_or(10_000),
                max_simulations: env::var("MAX_SIMULATIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(100_000),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            simulation: SimulationConfig::default(),
            quant: QuantConfig::default(),
        }
    }
}
