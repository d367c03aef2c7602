//! # Hilal
//!
//! Lunar crescent visibility decision engine.
//!
//! This crate decides, for a given date and observer location, whether a thin
//! lunar crescent is likely to be sightable by the naked eye shortly after
//! sunset — the determination that anchors the start of a lunar calendar
//! month. It combines the Yallop q-factor, the Danjon elongation limit, and
//! observing-condition proxies (atmospheric extinction, set-lag time, moon
//! age) into a tiered decision procedure, and produces a structured,
//! auditable explanation for every verdict.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Public types (geographic location, re-exported models)
//! - [`models`]: Value objects (observation bundle, verdict, time handling)
//! - [`ephemeris`]: The [`ephemeris::EventsProvider`] trait — the only
//!   external boundary. Ephemeris propagation, discrete event finding, and
//!   coordinate transforms live behind it.
//! - [`services`]: Observable aggregation, the decision engine, and the
//!   explanation generator
//! - [`config`]: TOML configuration for the tunable decision gates
//!
//! ## Data flow
//!
//! Provider → aggregator → engine → explanation, strictly one way. Each
//! evaluation is a pure function of its inputs: no caching, no shared state,
//! independently reproducible given the same provider responses.
//!
//! ## Example
//!
//! ```ignore
//! use hilal::config::EngineConfig;
//! use hilal::services::{assess_visibility, explain};
//!
//! let provider = my_ephemeris_provider(); // any EventsProvider
//! let location = hilal::api::GeographicLocation::new(29.7604, -95.3698, None).unwrap();
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 29).unwrap();
//! let config = EngineConfig::default();
//!
//! let assessment = assess_visibility(&provider, date, &location, &config)?;
//! println!("{}", explain(&assessment));
//! ```

pub mod api;
pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;
