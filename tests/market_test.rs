//! Integration tests for the simulated market feed

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tradedesk::config::{PriceBand, SimulationConfig};
use tradedesk::services::market::{generate_candles, generate_tick, initial_state};
use tradedesk::services::{InstrumentCatalog, MarketSimulator};
use tradedesk::types::{AssetClass, CandleInterval};

const NOW_MS: i64 = 1_717_000_000_000;

#[test]
fn test_hourly_candles_shape() {
    let catalog = InstrumentCatalog::demo();
    let mut rng = StdRng::seed_from_u64(5);
    for instrument in catalog.all() {
        let candles = generate_candles(instrument, CandleInterval::OneHour, 100, NOW_MS, &mut rng);
        assert_eq!(candles.len(), 100);
        for pair in candles.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, 3_600_000);
        }
        for c in &candles {
            assert!(c.low <= c.open && c.open <= c.high, "{}: {:?}", instrument.symbol, c);
            assert!(c.low <= c.close && c.close <= c.high, "{}: {:?}", instrument.symbol, c);
            assert!(c.volume >= 500_000.0);
        }
        assert_eq!(candles.last().unwrap().time, NOW_MS - 3_600_000);
    }
}

#[test]
fn test_every_interval_spacing() {
    let catalog = InstrumentCatalog::demo();
    let gold = catalog.get("XAUUSD").unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    for interval in [
        CandleInterval::OneMinute,
        CandleInterval::FiveMinutes,
        CandleInterval::FifteenMinutes,
        CandleInterval::OneHour,
        CandleInterval::FourHours,
        CandleInterval::OneDay,
    ] {
        let candles = generate_candles(gold, interval, 10, NOW_MS, &mut rng);
        assert_eq!(candles[1].time - candles[0].time, interval.millis());
    }
}

#[test]
fn test_tick_stays_positive_without_band() {
    let catalog = InstrumentCatalog::demo();
    let btc = catalog.get("BTCUSD").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = initial_state(btc, &mut rng);
    for _ in 0..50_000 {
        state = generate_tick(btc, state, None, &mut rng);
        assert!(state.price > 0.0);
    }
}

#[test]
fn test_custom_band_holds() {
    let config = SimulationConfig {
        seed: Some(99),
        price_band: Some(PriceBand { low: 0.98, high: 1.02 }),
        ..SimulationConfig::default()
    };
    let simulator = MarketSimulator::new(Arc::new(InstrumentCatalog::demo()), &config);
    for _ in 0..2_000 {
        for ticker in simulator.tick_all() {
            let base = simulator.catalog().get(&ticker.symbol).unwrap().base_price;
            assert!(ticker.price >= base * 0.98 - 1e-9);
            assert!(ticker.price <= base * 1.02 + 1e-9);
        }
    }
}

#[test]
fn test_simulator_snapshot_before_first_tick() {
    let simulator = MarketSimulator::new(
        Arc::new(InstrumentCatalog::demo()),
        &SimulationConfig::default(),
    );
    let tickers = simulator.tickers();
    assert_eq!(tickers.len(), 20);
    for t in &tickers {
        assert_eq!(t.change, 0.0);
        assert_eq!(t.sparkline.len(), 21);
        assert!(t.sparkline.iter().all(|p| *p == t.price));
        assert!((t.high24h - t.price * 1.01).abs() < 1e-9);
        assert!((t.low24h - t.price * 0.99).abs() < 1e-9);
    }
    assert_eq!(simulator.tickers_by_class(AssetClass::Forex).len(), 6);
}

#[test]
fn test_concurrent_ticks() {
    let simulator = Arc::new(MarketSimulator::new(
        Arc::new(InstrumentCatalog::demo()),
        &SimulationConfig {
            seed: Some(1),
            ..SimulationConfig::default()
        },
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let simulator = simulator.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    simulator.tick("EURUSD").unwrap();
                    simulator.tick_all();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let ticker = simulator.ticker("EURUSD").unwrap();
    assert_eq!(ticker.sparkline.len(), 21);
    assert!(ticker.price > 1.085 * 0.5 && ticker.price < 1.085 * 2.0);
}
